use thiserror::Error;

/// Programmer-error channel.
///
/// Malformed or mistyped *input data* never surfaces here; that is always
/// reported through [`crate::CheckResult`]. These errors mean the caller
/// asked for a name that was never registered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("schema type \"{0}\" does not exists")]
    NotFound(String),

    #[error("type \"{0}\" is not registered")]
    UnknownType(String),
}
