//! Fallible buffer allocation for filter initialization
//!
//! Every buffer a filter needs is requested through [`BufferAllocator`], so an
//! out-of-memory condition surfaces as [`FilterError::Allocation`] instead of an
//! abort, and tests can inject a failure for any single buffer.

use crate::error::{FilterError, Result};
use std::fmt;

/// Buffers requested while initializing a filter, in request order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// Final filter taps (kept for the filter's lifetime)
    Coefficients,

    /// Circular sample history (kept for the filter's lifetime)
    History,

    /// Window weights (dropped once multiplied into the taps)
    Window,
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BufferKind::Coefficients => "coefficient",
            BufferKind::History => "sample history",
            BufferKind::Window => "window",
        };
        f.write_str(name)
    }
}

/// Source of zeroed sample buffers
pub trait BufferAllocator {
    /// Return a zero-filled buffer of exactly `len` samples
    fn allocate(&mut self, kind: BufferKind, len: usize) -> Result<Vec<f32>>;
}

/// Heap allocator that reports failure instead of aborting
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAllocator;

impl BufferAllocator for SystemAllocator {
    fn allocate(&mut self, kind: BufferKind, len: usize) -> Result<Vec<f32>> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|_| FilterError::Allocation { buffer: kind, len })?;
        buffer.resize(len, 0.0);
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_allocator_zeroed() {
        let buffer = SystemAllocator.allocate(BufferKind::History, 17).unwrap();
        assert_eq!(buffer.len(), 17);
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_system_allocator_reports_capacity_overflow() {
        let result = SystemAllocator.allocate(BufferKind::Window, usize::MAX);
        match result {
            Err(FilterError::Allocation { buffer, len }) => {
                assert_eq!(buffer, BufferKind::Window);
                assert_eq!(len, usize::MAX);
            }
            other => panic!("expected allocation error, got {:?}", other),
        }
    }

    #[test]
    fn test_buffer_kind_display() {
        assert_eq!(BufferKind::Coefficients.to_string(), "coefficient");
        assert_eq!(BufferKind::History.to_string(), "sample history");
    }
}
