use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("precondition not met: {0}")]
    PreconditionNotMet(&'static str),
}
