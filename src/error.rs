use thiserror::Error;

pub type CalcResult<T> = Result<T, CalcError>;

/// Failures at the engine API surface.
///
/// Arithmetic faults never show up here: they become the error marker in
/// the primary display instead.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("unrecognized input token: `{0}`")]
    UnrecognizedToken(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
