//! Scheme configuration.
//!
//! A configuration document selects one scheme through its `scheme` field and
//! carries that scheme's settings:
//!
//! ```yaml
//! scheme: angle
//! num_qubits: 2
//! gate_sequence: [RY, RZ]
//! repeat_parameters: false
//! ```
//!
//! Documents can be YAML or JSON. Files are read by extension
//! (`.yaml`/`.yml`/`.json`).

use std::path::Path;

use qembed_ir::CvGateKind;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::amplitude::AmplitudeEmbedding;
use crate::angle::AngleEmbedding;
use crate::basis::BasisEmbedding;
use crate::cv::CvEmbedding;
use crate::embedding::Embedding;
use crate::error::{EmbedError, EmbedResult};

/// Accepted values of the `scheme` selector.
pub const SCHEMES: [&str; 5] = ["basis", "angle", "amplitude", "displacement", "squeezing"];

/// Configuration of one embedding scheme.
///
/// `num_qubits` is signed so that zero and negative counts reach validation
/// and fail as configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum SchemeConfig {
    /// Basis embedding.
    Basis {
        /// Register size.
        num_qubits: i64,
    },
    /// Angle embedding.
    Angle {
        /// Register size.
        num_qubits: i64,
        /// Layer axes, each one of `RX`, `RY`, `RZ`.
        gate_sequence: Vec<String>,
        /// Reuse `x[qubit]` in every layer.
        #[serde(default)]
        repeat_parameters: bool,
    },
    /// Amplitude embedding.
    Amplitude {
        /// Register size.
        num_qubits: i64,
    },
    /// Displacement embedding.
    Displacement {
        /// Register size.
        num_qubits: i64,
        /// Read the magnitude (rather than the angle) from the input.
        #[serde(default = "default_true")]
        parameterize_amplitude: bool,
    },
    /// Squeezing embedding.
    Squeezing {
        /// Register size.
        num_qubits: i64,
        /// Read the magnitude (rather than the angle) from the input.
        #[serde(default = "default_true")]
        parameterize_amplitude: bool,
    },
}

fn default_true() -> bool {
    true
}

impl SchemeConfig {
    /// Parse a YAML document.
    pub fn from_yaml(source: &str) -> EmbedResult<Self> {
        let value: serde_yaml_ng::Value =
            serde_yaml_ng::from_str(source).map_err(|e| EmbedError::Parse(e.to_string()))?;
        check_selector(value.get("scheme").and_then(serde_yaml_ng::Value::as_str))?;
        serde_yaml_ng::from_value(value).map_err(|e| EmbedError::Parse(e.to_string()))
    }

    /// Parse a JSON document.
    pub fn from_json(source: &str) -> EmbedResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(source).map_err(|e| EmbedError::Parse(e.to_string()))?;
        check_selector(value.get("scheme").and_then(serde_json::Value::as_str))?;
        serde_json::from_value(value).map_err(|e| EmbedError::Parse(e.to_string()))
    }

    /// Load a configuration file, choosing the format by extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EmbedResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> EmbedResult<Self> = match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(EmbedError::Configuration(format!(
                    "unsupported configuration format: {}",
                    path.display()
                )));
            }
        };

        debug!(path = %path.display(), "loading scheme configuration");
        let contents = std::fs::read_to_string(path)?;
        parse(&contents)
    }

    /// Selector value of this configuration.
    pub fn scheme(&self) -> &'static str {
        match self {
            SchemeConfig::Basis { .. } => BasisEmbedding::NAME,
            SchemeConfig::Angle { .. } => AngleEmbedding::NAME,
            SchemeConfig::Amplitude { .. } => AmplitudeEmbedding::NAME,
            SchemeConfig::Displacement { .. } => CvGateKind::Displacement.name(),
            SchemeConfig::Squeezing { .. } => CvGateKind::Squeezing.name(),
        }
    }

    /// Configured register size, as written.
    pub fn num_qubits(&self) -> i64 {
        match self {
            SchemeConfig::Basis { num_qubits }
            | SchemeConfig::Angle { num_qubits, .. }
            | SchemeConfig::Amplitude { num_qubits }
            | SchemeConfig::Displacement { num_qubits, .. }
            | SchemeConfig::Squeezing { num_qubits, .. } => *num_qubits,
        }
    }

    /// Validate and construct the configured embedding.
    pub fn into_embedding(self) -> EmbedResult<Box<dyn Embedding>> {
        let num_qubits = validate_num_qubits(self.scheme(), self.num_qubits())?;
        let embedding: Box<dyn Embedding> = match self {
            SchemeConfig::Basis { .. } => Box::new(BasisEmbedding::new(num_qubits)?),
            SchemeConfig::Angle {
                gate_sequence,
                repeat_parameters,
                ..
            } => Box::new(AngleEmbedding::from_names(
                gate_sequence.as_slice(),
                num_qubits,
                repeat_parameters,
            )?),
            SchemeConfig::Amplitude { .. } => Box::new(AmplitudeEmbedding::new(num_qubits)?),
            SchemeConfig::Displacement {
                parameterize_amplitude,
                ..
            } => Box::new(CvEmbedding::displacement(num_qubits, parameterize_amplitude)?),
            SchemeConfig::Squeezing {
                parameterize_amplitude,
                ..
            } => Box::new(CvEmbedding::squeezing(num_qubits, parameterize_amplitude)?),
        };
        debug!(
            scheme = embedding.name(),
            num_qubits,
            input_len = embedding.input_len(),
            "embedding configured"
        );
        Ok(embedding)
    }
}

fn check_selector(selector: Option<&str>) -> EmbedResult<()> {
    match selector {
        Some(s) if SCHEMES.contains(&s) => Ok(()),
        Some(s) => Err(EmbedError::Configuration(format!(
            "invalid scheme selector '{s}', expected one of {}",
            SCHEMES.join(", ")
        ))),
        None => Err(EmbedError::Configuration(
            "invalid scheme selector: missing 'scheme' field".into(),
        )),
    }
}

fn validate_num_qubits(scheme: &str, num_qubits: i64) -> EmbedResult<u32> {
    if num_qubits <= 0 {
        return Err(EmbedError::Configuration(format!(
            "{scheme} embedding requires a positive qubit count, got {num_qubits}"
        )));
    }
    u32::try_from(num_qubits).map_err(|_| {
        EmbedError::Configuration(format!("{scheme} embedding: qubit count {num_qubits} is too large"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_yaml() {
        let config = SchemeConfig::from_yaml(
            "scheme: angle\nnum_qubits: 2\ngate_sequence: [RY, RZ, RX]\n",
        )
        .unwrap();
        assert_eq!(
            config,
            SchemeConfig::Angle {
                num_qubits: 2,
                gate_sequence: vec!["RY".into(), "RZ".into(), "RX".into()],
                repeat_parameters: false,
            }
        );

        let embedding = config.into_embedding().unwrap();
        assert_eq!(embedding.name(), "angle");
        assert_eq!(embedding.input_len(), 6);
    }

    #[test]
    fn test_cv_defaults() {
        let config = SchemeConfig::from_json(r#"{"scheme": "squeezing", "num_qubits": 3}"#).unwrap();
        assert_eq!(
            config,
            SchemeConfig::Squeezing {
                num_qubits: 3,
                parameterize_amplitude: true,
            }
        );
        assert_eq!(config.into_embedding().unwrap().name(), "squeezing");
    }

    #[test]
    fn test_every_selector() {
        for scheme in SCHEMES {
            let extra = if scheme == "angle" {
                ", \"gate_sequence\": [\"RX\"]"
            } else {
                ""
            };
            let json = format!(r#"{{"scheme": "{scheme}", "num_qubits": 2{extra}}}"#);
            let config = SchemeConfig::from_json(&json).unwrap();
            assert_eq!(config.scheme(), scheme);
            assert_eq!(config.into_embedding().unwrap().name(), scheme);
        }
    }

    #[test]
    fn test_invalid_selector() {
        let err = SchemeConfig::from_yaml("scheme: iqp\nnum_qubits: 2\n").unwrap_err();
        assert!(matches!(err, EmbedError::Configuration(_)));

        let err = SchemeConfig::from_json(r#"{"num_qubits": 2}"#).unwrap_err();
        assert!(matches!(err, EmbedError::Configuration(_)));
    }

    #[test]
    fn test_non_positive_qubits() {
        for n in [0, -3] {
            let config = SchemeConfig::Basis { num_qubits: n };
            assert!(matches!(
                config.into_embedding(),
                Err(EmbedError::Configuration(_))
            ));
        }
        let config = SchemeConfig::Amplitude {
            num_qubits: i64::from(u32::MAX) + 1,
        };
        assert!(matches!(
            config.into_embedding(),
            Err(EmbedError::Configuration(_))
        ));
    }

    #[test]
    fn test_invalid_gate_name() {
        let config = SchemeConfig::from_yaml(
            "scheme: angle\nnum_qubits: 1\ngate_sequence: [RX, H]\n",
        )
        .unwrap();
        assert!(matches!(
            config.into_embedding(),
            Err(EmbedError::Configuration(_))
        ));
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            SchemeConfig::from_json("{not json"),
            Err(EmbedError::Parse(_))
        ));
        assert!(matches!(
            SchemeConfig::from_yaml("scheme: basis\nnum_qubits: many\n"),
            Err(EmbedError::Parse(_))
        ));
    }
}
