use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Duplicate page id: {0}")]
    DuplicatePage(String),

    #[error("A document must keep at least one page")]
    LastPage,

    #[error("Document has no pages")]
    NoPages,
}
