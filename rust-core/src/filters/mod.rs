//! FIR filter design and real-time filtering

pub mod alloc;
pub mod design;
pub mod fir;
pub mod windows;

pub use alloc::{BufferAllocator, BufferKind, SystemAllocator};
pub use design::{design_coefficients, frequency_response, magnitude_response_db, FilterType};
pub use fir::FirFilter;
pub use windows::{generate_window, WindowType};
