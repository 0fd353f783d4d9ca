use thiserror::Error;

/// Failures at the text boundary (CLI, `FIELD=value` assignments).
/// The typed getters and actions on `Store` never produce one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("invalid value {value:?} for {field}: expected {expected}")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("type mismatch for {field}: expected {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
    #[error("malformed assignment {0:?}, expected FIELD=VALUE")]
    MalformedAssignment(String),
}
