use serde::{Deserialize, Serialize};
use std::fmt;

/// One atomic symbolic transformation applied to the running value y.
///
/// `Identity` seeds the fold (y = x) and is only legal at position 0 of a
/// sequence. Every other variant rewrites the running value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    Identity,
    Add(f64),
    Sub(f64),
    Mul(f64),
    Div(f64),
    Pow(f64),
    Ln,
    Sin,
    Cos,
    ExplicitAssign(f64),
}

impl Instruction {
    pub fn is_identity(&self) -> bool {
        matches!(self, Instruction::Identity)
    }

    /// Numeric fold step: feed the running value through this instruction.
    ///
    /// Raw IEEE arithmetic throughout; ln of a non-positive value degrades to
    /// NaN instead of raising, and NaN flows through the remaining steps.
    pub fn apply(&self, y: f64) -> f64 {
        match self {
            Instruction::Identity => y,
            Instruction::Add(c) => y + c,
            Instruction::Sub(c) => y - c,
            Instruction::Mul(c) => y * c,
            Instruction::Div(c) => y / c,
            Instruction::Pow(c) => y.powf(*c),
            Instruction::Ln => {
                if y > 0.0 {
                    y.ln()
                } else {
                    f64::NAN
                }
            }
            Instruction::Sin => y.sin(),
            Instruction::Cos => y.cos(),
            Instruction::ExplicitAssign(c) => *c,
        }
    }

    /// Expression fold step, mirroring `apply` symbol-for-symbol.
    ///
    /// An assignment discards the running value, so it discards the
    /// accumulated expression too and becomes the bare literal.
    pub fn wrap_expression(&self, expr: &str) -> String {
        match self {
            Instruction::Identity => expr.to_string(),
            Instruction::Add(c) => format!("({} + {})", expr, c),
            Instruction::Sub(c) => format!("({} - {})", expr, c),
            Instruction::Mul(c) => format!("({} * {})", expr, c),
            Instruction::Div(c) => format!("({} / {})", expr, c),
            Instruction::Pow(c) => format!("({})^{}", expr, c),
            Instruction::Ln => format!("ln({})", expr),
            Instruction::Sin => format!("sin({})", expr),
            Instruction::Cos => format!("cos({})", expr),
            Instruction::ExplicitAssign(c) => c.to_string(),
        }
    }
}

impl fmt::Display for Instruction {
    /// Canonical clause text: single spaces around operators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Identity => write!(f, "y = x"),
            Instruction::Add(c) => write!(f, "y = y + {}", c),
            Instruction::Sub(c) => write!(f, "y = y - {}", c),
            Instruction::Mul(c) => write!(f, "y = y * {}", c),
            Instruction::Div(c) => write!(f, "y = y / {}", c),
            Instruction::Pow(c) => write!(f, "y = y ^ {}", c),
            Instruction::Ln => write!(f, "y = ln(y)"),
            Instruction::Sin => write!(f, "y = sin(y)"),
            Instruction::Cos => write!(f, "y = cos(y)"),
            Instruction::ExplicitAssign(c) => write!(f, "y = {}", c),
        }
    }
}

/// Which coordinate of a tracked position a series was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    Row,
    Col,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Row => "row",
            Dimension::Col => "col",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best individual found for one coordinate dimension of one tracked
/// instance: the derived expression, its raw instruction list (canonical
/// clause texts), and its freshly re-evaluated similarity metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedFunction {
    pub dimension: Dimension,
    pub expression: String,
    pub instructions: Vec<String>,
    pub score: f64,
    pub rmse: f64,
    pub mae: f64,
}

/// Fits for both dimensions of one tracked instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackReport {
    pub instance: usize,
    pub row: FittedFunction,
    pub col: FittedFunction,
}
