use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulator configuration error: {0}")]
    Config(String),
}

pub type SimResult<T> = Result<T, SimError>;
