//! Windowed FIR - Windowed-sinc FIR filter design and streaming convolution
//!
//! Designs low-pass, high-pass, band-pass and band-stop taps, shapes them with a
//! Hamming, triangle or Blackman window and filters samples one at a time.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod config;
pub mod error;
pub mod filters;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use config::FilterConfig;
pub use error::{FilterError, Result};
pub use filters::{BufferKind, FilterType, FirFilter, WindowType};
