//! Construction-time errors. Every failure here is a defect in the type
//! declaration itself; nothing is retried and no partial descriptor escapes.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeInfoError {
    /// A member carries both an explicit name override and a case-format
    /// override. The two are mutually exclusive.
    #[error("cannot define both {name_marker} and {case_marker} on member '{member}'")]
    ConfigurationConflict {
        member: String,
        name_marker: &'static str,
        case_marker: &'static str,
    },

    /// Accessor name does not start with any recognized prefix, or nothing
    /// remains after stripping it.
    #[error("accessor '{name}' has wrong prefix (expected one of {expected:?})")]
    InvalidAccessorName { name: String, expected: Vec<String> },

    /// Setters must take exactly one parameter.
    #[error("setter '{name}' should take a single argument, found {arity}")]
    InvalidSetterArity { name: String, arity: usize },

    /// Field-number marker literal did not parse as a non-negative integer.
    #[error("field-number marker on '{member}' is not a non-negative integer: '{value}'")]
    InvalidFieldNumber { member: String, value: String },

    /// Case-format marker literal names no known format.
    #[error("unknown case format '{value}' on member '{member}'")]
    UnknownCaseFormat { member: String, value: String },

    /// A getter declared no return type.
    #[error("getter '{name}' has no return type")]
    MissingReturnType { name: String },
}

pub type Result<T> = std::result::Result<T, TypeInfoError>;
