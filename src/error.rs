use thiserror::Error;

use crate::cli::errors::ParseError;
use crate::output::errors::EmitError;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

impl ScaffoldError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ScaffoldError::Parse(_) | ScaffoldError::Emit(_) => 1,
        }
    }
}
