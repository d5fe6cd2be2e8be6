//! QASM3 emitter for serializing gate programs.

use qembed_ir::{
    CircuitHost, CircuitProgram, CustomGateCall, CvGateKind, FeatureVector, HostParameter, QubitId,
    is_identifier,
};

use crate::error::{EmitError, EmitResult};

/// Default name of the qubit register.
pub const REGISTER: &str = "q";

/// Register name used when the input vector is already called [`REGISTER`].
pub const FALLBACK_REGISTER: &str = "qreg";

/// Words an input vector may not be named after.
const RESERVED: &[&str] = &[
    "OPENQASM", "include", "input", "output", "qubit", "qreg", "bit", "creg", "float", "int",
    "uint", "bool", "angle", "complex", "array", "const", "let", "def", "gate", "opaque",
    "measure", "reset", "barrier", "if", "else", "for", "while", "in", "return", "pi", "π", "tau",
    "euler", "U", "gphase", "ctrl", "inv", "pow",
];

/// Emit a program as QASM3 source code.
pub fn emit(program: &CircuitProgram) -> EmitResult<String> {
    let mut emitter = Emitter::new();
    program.lower(&mut emitter)?;
    Ok(emitter.finish())
}

/// QASM3 emitter, driven through [`CircuitHost`].
///
/// Continuous-variable gates have no QASM3 definition; they are called by
/// name and announced with an opaque pragma in the header.
#[derive(Debug, Default)]
pub struct Emitter {
    declarations: Vec<String>,
    body: Vec<String>,
    register: Option<&'static str>,
    needs_displacement: bool,
    needs_squeezing: bool,
}

impl Emitter {
    /// Create an empty emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble the final source text.
    pub fn finish(self) -> String {
        let mut output = String::new();
        let mut writeln = |line: &str| {
            output.push_str(line);
            output.push('\n');
        };

        writeln("OPENQASM 3.0;");
        writeln("include \"stdgates.inc\";");
        writeln("");

        if self.needs_displacement {
            writeln("// @pragma opaque displacement(magnitude, angle) q;");
        }
        if self.needs_squeezing {
            writeln("// @pragma opaque squeezing(magnitude, angle) q;");
        }
        if self.needs_displacement || self.needs_squeezing {
            writeln("");
        }

        for line in &self.declarations {
            writeln(line);
        }
        if !self.declarations.is_empty() {
            writeln("");
        }

        for line in &self.body {
            writeln(line);
        }
        output
    }

    fn gate(&mut self, name: &str, params: &[HostParameter], qubits: &[QubitId]) -> EmitResult<()> {
        let Some(register) = self.register else {
            return Err(EmitError::Undeclared(name.to_string()));
        };
        let params = params
            .iter()
            .map(|p| emit_param(name, p))
            .collect::<EmitResult<Vec<_>>>()?
            .join(", ");
        let qubits = qubits
            .iter()
            .map(|q| format!("{register}[{}]", q.0))
            .collect::<Vec<_>>()
            .join(", ");
        self.body.push(format!("{name}({params}) {qubits};"));
        Ok(())
    }
}

impl CircuitHost for Emitter {
    type Error = EmitError;

    fn declare(&mut self, num_qubits: u32, inputs: &FeatureVector) -> EmitResult<()> {
        let mut register = REGISTER;
        if inputs.is_symbolic() {
            let name = inputs.name();
            if !is_identifier(name) || RESERVED.contains(&name) {
                return Err(EmitError::InvalidIdentifier(name.to_string()));
            }
            if name == REGISTER {
                register = FALLBACK_REGISTER;
            }
            self.declarations
                .push(format!("input array[float[64], {}] {name};", inputs.len()));
        }
        self.declarations
            .push(format!("qubit[{num_qubits}] {register};"));
        self.register = Some(register);
        Ok(())
    }

    fn rx(&mut self, theta: HostParameter, qubit: QubitId) -> EmitResult<()> {
        self.gate("rx", &[theta], &[qubit])
    }

    fn ry(&mut self, theta: HostParameter, qubit: QubitId) -> EmitResult<()> {
        self.gate("ry", &[theta], &[qubit])
    }

    fn rz(&mut self, theta: HostParameter, qubit: QubitId) -> EmitResult<()> {
        self.gate("rz", &[theta], &[qubit])
    }

    fn crx(&mut self, theta: HostParameter, control: QubitId, target: QubitId) -> EmitResult<()> {
        self.gate("crx", &[theta], &[control, target])
    }

    fn custom(&mut self, call: CustomGateCall, qubit: QubitId) -> EmitResult<()> {
        match call.kind {
            CvGateKind::Displacement => self.needs_displacement = true,
            CvGateKind::Squeezing => self.needs_squeezing = true,
        }
        self.gate(call.kind.name(), &[call.magnitude, call.angle], &[qubit])
    }
}

fn emit_param(gate: &str, param: &HostParameter) -> EmitResult<String> {
    match param {
        HostParameter::Value(v) if !v.is_finite() => Err(EmitError::NonFiniteParameter {
            gate: gate.to_string(),
            value: *v,
        }),
        HostParameter::Value(v) => Ok(emit_value(*v)),
        HostParameter::Expression(expr) => Ok(expr.replace('π', "pi")),
    }
}

fn emit_value(v: f64) -> String {
    // Check if close to common fractions of pi
    let pi = std::f64::consts::PI;
    if v == 0.0 {
        "0".into()
    } else if (v - pi).abs() < 1e-10 {
        "pi".into()
    } else if (v + pi).abs() < 1e-10 {
        "-pi".into()
    } else if (v - pi / 2.0).abs() < 1e-10 {
        "pi/2".into()
    } else if (v + pi / 2.0).abs() < 1e-10 {
        "-pi/2".into()
    } else if (v - pi / 4.0).abs() < 1e-10 {
        "pi/4".into()
    } else if (v + pi / 4.0).abs() < 1e-10 {
        "-pi/4".into()
    } else {
        format!("{v:.6}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qembed_ir::{CvParams, ParameterExpression, ParameterTable};
    use std::f64::consts::PI;

    #[test]
    fn test_emit_symbolic_program() {
        let mut table = ParameterTable::new();
        let x = table.allocate_vector("x", 2).unwrap();
        let mut program = CircuitProgram::new("p", 2, x).unwrap();
        program
            .basis_rx(ParameterExpression::pi_times_feature(0), QubitId(0))
            .unwrap();
        program.ry(ParameterExpression::feature(1), QubitId(1)).unwrap();
        program.crx(PI, QubitId(1), QubitId(0)).unwrap();

        let qasm = emit(&program).unwrap();
        assert!(qasm.starts_with("OPENQASM 3.0;\n"));
        assert!(qasm.contains("input array[float[64], 2] x;"));
        assert!(qasm.contains("qubit[2] q;"));
        assert!(qasm.contains("rx((pi * x[0])) q[0];"));
        assert!(qasm.contains("ry(x[1]) q[1];"));
        assert!(qasm.contains("crx(pi) q[1], q[0];"));
        assert!(!qasm.contains("@pragma"));
    }

    #[test]
    fn test_emit_numeric_program_has_no_input() {
        let x = FeatureVector::from_values("x", [0.25]);
        let mut program = CircuitProgram::new("p", 1, x).unwrap();
        program.rz(ParameterExpression::feature(0), QubitId(0)).unwrap();
        program.rx(-PI / 2.0, QubitId(0)).unwrap();

        let qasm = emit(&program).unwrap();
        assert!(!qasm.contains("input"));
        assert!(qasm.contains("rz(0.250000) q[0];"));
        assert!(qasm.contains("rx(-pi/2) q[0];"));
    }

    #[test]
    fn test_emit_cv_gates_with_pragma() {
        let mut table = ParameterTable::new();
        let x = table.allocate_vector("x", 1).unwrap();
        let mut program = CircuitProgram::new("p", 1, x).unwrap();
        program
            .cv(
                CvGateKind::Squeezing,
                CvParams::new(ParameterExpression::feature(0), 0.1),
                QubitId(0),
            )
            .unwrap();

        let qasm = emit(&program).unwrap();
        assert!(qasm.contains("// @pragma opaque squeezing(magnitude, angle) q;"));
        assert!(!qasm.contains("opaque displacement"));
        assert!(qasm.contains("squeezing(x[0], 0.100000) q[0];"));
    }

    #[test]
    fn test_non_finite_parameter_rejected() {
        let x = FeatureVector::from_values("x", [f64::NAN]);
        let mut program = CircuitProgram::new("p", 1, x).unwrap();
        program.rx(ParameterExpression::feature(0), QubitId(0)).unwrap();

        let err = emit(&program).unwrap_err();
        assert!(matches!(err, EmitError::NonFiniteParameter { ref gate, .. } if gate == "rx"));
    }

    #[test]
    fn test_register_renamed_when_input_is_q() {
        let mut table = ParameterTable::new();
        let q = table.allocate_vector("q", 2).unwrap();
        let mut program = CircuitProgram::new("p", 2, q).unwrap();
        program
            .basis_rx(ParameterExpression::pi_times_feature(0), QubitId(0))
            .unwrap();
        program.crx(PI, QubitId(1), QubitId(0)).unwrap();

        let qasm = emit(&program).unwrap();
        assert!(qasm.contains("input array[float[64], 2] q;"));
        assert!(qasm.contains("qubit[2] qreg;"));
        assert!(!qasm.contains("qubit[2] q;"));
        assert!(qasm.contains("rx((pi * q[0])) qreg[0];"));
        assert!(qasm.contains("crx(pi) qreg[1], qreg[0];"));
    }

    #[test]
    fn test_invalid_input_name_rejected() {
        for name in ["my input", "qubit", "pi", "2x"] {
            let inputs = FeatureVector::symbolic(name, 1);
            let mut program = CircuitProgram::new("p", 1, inputs).unwrap();
            program.rx(ParameterExpression::feature(0), QubitId(0)).unwrap();

            let err = emit(&program).unwrap_err();
            assert_eq!(err, EmitError::InvalidIdentifier(name.into()));
        }
    }

    #[test]
    fn test_numeric_inputs_need_no_identifier() {
        let inputs = FeatureVector::from_values("my input", [0.5]);
        let mut program = CircuitProgram::new("p", 1, inputs).unwrap();
        program.rx(ParameterExpression::feature(0), QubitId(0)).unwrap();

        let qasm = emit(&program).unwrap();
        assert!(qasm.contains("rx(0.500000) q[0];"));
    }

    #[test]
    fn test_undeclared_host_rejects_operations() {
        let mut emitter = Emitter::new();
        let err = emitter
            .rx(HostParameter::Value(1.0), QubitId(0))
            .unwrap_err();
        assert_eq!(err, EmitError::Undeclared("rx".into()));
    }
}
