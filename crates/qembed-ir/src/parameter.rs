//! Parameter expressions for embedding gates.
//!
//! An expression is either a literal, a direct reference to an entry of the
//! program's input [`FeatureVector`](crate::FeatureVector), or a small
//! arithmetic combination of those (e.g. `π × x[i]`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::f64::consts::PI;
use std::fmt;

/// A symbolic or concrete gate parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterExpression {
    /// A constant numeric value.
    Constant(f64),
    /// The constant π.
    Pi,
    /// Reference to entry `i` of the input feature vector.
    Feature(usize),
    /// Negation.
    Neg(Box<ParameterExpression>),
    /// Addition.
    Add(Box<ParameterExpression>, Box<ParameterExpression>),
    /// Multiplication.
    Mul(Box<ParameterExpression>, Box<ParameterExpression>),
}

impl ParameterExpression {
    /// Create a constant parameter.
    pub fn constant(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }

    /// Create a π constant.
    pub fn pi() -> Self {
        ParameterExpression::Pi
    }

    /// Reference entry `index` of the input vector.
    pub fn feature(index: usize) -> Self {
        ParameterExpression::Feature(index)
    }

    /// `π × x[index]`.
    pub fn pi_times_feature(index: usize) -> Self {
        ParameterExpression::Pi * ParameterExpression::Feature(index)
    }

    /// Check if this expression references any feature entry.
    pub fn is_symbolic(&self) -> bool {
        match self {
            ParameterExpression::Feature(_) => true,
            ParameterExpression::Constant(_) | ParameterExpression::Pi => false,
            ParameterExpression::Neg(e) => e.is_symbolic(),
            ParameterExpression::Add(a, b) | ParameterExpression::Mul(a, b) => {
                a.is_symbolic() || b.is_symbolic()
            }
        }
    }

    /// Try to evaluate as a concrete f64 value without any feature values.
    pub fn as_f64(&self) -> Option<f64> {
        self.evaluate_with(&|_| None)
    }

    /// Evaluate against a slice of feature values.
    pub fn evaluate(&self, values: &[f64]) -> Option<f64> {
        self.evaluate_with(&|i| values.get(i).copied())
    }

    /// Evaluate, resolving feature references through `resolve`.
    ///
    /// Returns `None` as soon as one reference does not resolve.
    pub fn evaluate_with<F>(&self, resolve: &F) -> Option<f64>
    where
        F: Fn(usize) -> Option<f64>,
    {
        match self {
            ParameterExpression::Constant(v) => Some(*v),
            ParameterExpression::Pi => Some(PI),
            ParameterExpression::Feature(i) => resolve(*i),
            ParameterExpression::Neg(e) => e.evaluate_with(resolve).map(|v| -v),
            ParameterExpression::Add(a, b) => {
                Some(a.evaluate_with(resolve)? + b.evaluate_with(resolve)?)
            }
            ParameterExpression::Mul(a, b) => {
                Some(a.evaluate_with(resolve)? * b.evaluate_with(resolve)?)
            }
        }
    }

    /// All feature indices referenced by this expression.
    pub fn features(&self) -> BTreeSet<usize> {
        let mut set = BTreeSet::new();
        self.collect_features(&mut set);
        set
    }

    fn collect_features(&self, set: &mut BTreeSet<usize>) {
        match self {
            ParameterExpression::Constant(_) | ParameterExpression::Pi => {}
            ParameterExpression::Feature(i) => {
                set.insert(*i);
            }
            ParameterExpression::Neg(e) => e.collect_features(set),
            ParameterExpression::Add(a, b) | ParameterExpression::Mul(a, b) => {
                a.collect_features(set);
                b.collect_features(set);
            }
        }
    }

    /// Substitute every resolvable feature reference with its value and fold
    /// constant subexpressions.
    pub fn bind(&self, values: &[f64]) -> Self {
        let substituted = match self {
            ParameterExpression::Feature(i) => match values.get(*i) {
                Some(v) => ParameterExpression::Constant(*v),
                None => self.clone(),
            },
            ParameterExpression::Constant(_) | ParameterExpression::Pi => self.clone(),
            ParameterExpression::Neg(e) => ParameterExpression::Neg(Box::new(e.bind(values))),
            ParameterExpression::Add(a, b) => {
                ParameterExpression::Add(Box::new(a.bind(values)), Box::new(b.bind(values)))
            }
            ParameterExpression::Mul(a, b) => {
                ParameterExpression::Mul(Box::new(a.bind(values)), Box::new(b.bind(values)))
            }
        };
        substituted.simplify()
    }

    /// Simplify the expression by evaluating constant subexpressions.
    pub fn simplify(&self) -> Self {
        if let Some(v) = self.as_f64() {
            return ParameterExpression::Constant(v);
        }
        match self {
            ParameterExpression::Neg(e) => ParameterExpression::Neg(Box::new(e.simplify())),
            ParameterExpression::Add(a, b) => {
                ParameterExpression::Add(Box::new(a.simplify()), Box::new(b.simplify()))
            }
            ParameterExpression::Mul(a, b) => {
                ParameterExpression::Mul(Box::new(a.simplify()), Box::new(b.simplify()))
            }
            _ => self.clone(),
        }
    }

    /// Render with a caller-supplied name for each feature reference.
    pub fn render<F>(&self, name_of: &F) -> String
    where
        F: Fn(usize) -> String,
    {
        match self {
            ParameterExpression::Constant(v) => format!("{v}"),
            ParameterExpression::Pi => "π".into(),
            ParameterExpression::Feature(i) => name_of(*i),
            ParameterExpression::Neg(e) => format!("-({})", e.render(name_of)),
            ParameterExpression::Add(a, b) => {
                format!("({} + {})", a.render(name_of), b.render(name_of))
            }
            ParameterExpression::Mul(a, b) => {
                format!("({} * {})", a.render(name_of), b.render(name_of))
            }
        }
    }
}

impl fmt::Display for ParameterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&|i| format!("x[{i}]")))
    }
}

impl From<f64> for ParameterExpression {
    fn from(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }
}

impl std::ops::Add for ParameterExpression {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        ParameterExpression::Add(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Mul for ParameterExpression {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        ParameterExpression::Mul(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Neg for ParameterExpression {
    type Output = Self;

    fn neg(self) -> Self::Output {
        ParameterExpression::Neg(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant() {
        let p = ParameterExpression::constant(1.5);
        assert!(!p.is_symbolic());
        assert_eq!(p.as_f64(), Some(1.5));
    }

    #[test]
    fn test_feature_reference() {
        let p = ParameterExpression::feature(3);
        assert!(p.is_symbolic());
        assert_eq!(p.as_f64(), None);
        assert_eq!(p.evaluate(&[0.0, 0.0, 0.0, 0.25]), Some(0.25));
        assert_eq!(p.evaluate(&[0.0]), None);
        assert_eq!(p.features().into_iter().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_pi_times_feature() {
        let p = ParameterExpression::pi_times_feature(1);
        assert_eq!(p.to_string(), "(π * x[1])");
        let v = p.evaluate(&[0.0, 1.0]).unwrap();
        assert!((v - PI).abs() < 1e-12);
    }

    #[test]
    fn test_bind_folds_constants() {
        let p = ParameterExpression::feature(0) + ParameterExpression::pi();
        let bound = p.bind(&[1.0]);
        assert_eq!(bound, ParameterExpression::Constant(1.0 + PI));

        let partial = (ParameterExpression::feature(0) * ParameterExpression::feature(5)).bind(&[2.0]);
        assert!(partial.is_symbolic());
        assert_eq!(partial.features().len(), 1);
    }

    #[test]
    fn test_render_with_names() {
        let p = -ParameterExpression::feature(2);
        assert_eq!(p.render(&|i| format!("theta_{i}")), "-(theta_2)");
    }
}
