//! Interactive terminal surface: a thin driver over the wizard controller.
//! All guard logic stays in [`crate::wizard`]; this layer only prompts,
//! renders, and relays.

pub mod output;
pub mod prompts;
pub mod runner;

use thiserror::Error;

use crate::errors::CoreError;
use crate::submit::{ApiError, SubmitError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("terminal failure: {0}")]
    Terminal(#[from] std::io::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error("wizard cancelled")]
    Cancelled,
}
