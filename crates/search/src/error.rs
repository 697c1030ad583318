use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("hand of {len} cards exceeds the search bound of {max}")]
    HandTooLarge { len: usize, max: usize },
}
