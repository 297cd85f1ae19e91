use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrawError>;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("invalid participant count {input:?}: must be a positive integer")]
    InvalidCount { input: String },
}

impl DrawError {
    pub fn invalid_count(input: impl Into<String>) -> Self {
        Self::InvalidCount {
            input: input.into(),
        }
    }
}
