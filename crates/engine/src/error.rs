use list_tidy_shared_kernel::ByteSize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Input size {size:#} ({size} bytes) exceeds the maximum of {max:#} ({max} bytes)")]
    InputTooLarge { size: ByteSize, max: ByteSize },
}

pub type Result<T> = std::result::Result<T, EngineError>;
