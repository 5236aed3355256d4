use ring_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine configuration rejected: {0}")]
    Config(#[from] CoreError),
}

pub type EngineResult<T> = Result<T, EngineError>;
