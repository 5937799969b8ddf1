/// Errors that can occur while building a herd
#[derive(Debug, thiserror::Error)]
pub enum HerdError {
    #[error("goat record has an empty id")]
    EmptyId,

    #[error("duplicate goat id: {0}")]
    DuplicateId(String),
}
