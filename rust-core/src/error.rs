//! Error types for filter configuration and initialization

use crate::filters::alloc::BufferKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Failed to allocate {buffer} buffer of {len} samples")]
    Allocation { buffer: BufferKind, len: usize },

    #[error("Invalid filter configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse filter configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
