//! Error types for the editor

use crate::generation::GenerationError;
use crate::mutations::MutationError;
use pagewright_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Unknown viewport: {0}")]
    UnknownViewport(String),
}
