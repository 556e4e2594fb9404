use thiserror::Error;

/// Programmer-error channel: looking up a type name that was never
/// registered. Input-data problems never surface here; they are reported
/// through [`crate::TypeCheckResult`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("type \"{0}\" is not registered")]
    NotFound(String),
}
