//! Filter configuration
//!
//! A [`FilterConfig`] is the unconfigured state of a filter: it only holds
//! parameters. [`FilterConfig::init`] is the one transition to a ready
//! [`FirFilter`].
//!
//! Configurations can also be loaded from TOML:
//!
//! ```
//! use windowed_fir::{FilterConfig, FilterType, WindowType};
//!
//! let config = FilterConfig::from_toml_str(
//!     r#"
//!     taps = 63
//!     filter_type = "band_pass"
//!     window_type = "blackman"
//!     min_freq = 0.1
//!     max_freq = 0.2
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.filter_type, FilterType::BandPass);
//! assert_eq!(config.window_type, WindowType::Blackman);
//! ```

use crate::error::{FilterError, Result};
use crate::filters::alloc::BufferAllocator;
use crate::filters::{FilterType, FirFilter, WindowType};
use serde::{Deserialize, Serialize};

/// Normalized frequencies must lie strictly inside (0, NYQUIST)
pub const NYQUIST: f32 = 0.5;

/// FIR filter parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Number of taps (N)
    pub taps: usize,

    /// Filter shape
    pub filter_type: FilterType,

    /// Window applied to the ideal response
    pub window_type: WindowType,

    /// Cutoff for lowpass/highpass, lower band edge otherwise
    /// (fraction of the sample rate)
    pub min_freq: f32,

    /// Upper band edge, only used by band-pass and band-stop
    #[serde(default)]
    pub max_freq: f32,
}

impl FilterConfig {
    pub fn new(
        taps: usize,
        filter_type: FilterType,
        window_type: WindowType,
        min_freq: f32,
        max_freq: f32,
    ) -> Self {
        Self {
            taps,
            filter_type,
            window_type,
            min_freq,
            max_freq,
        }
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Check the parameters the designer and windows rely on
    ///
    /// # Errors
    /// Returns `FilterError::InvalidConfig` when
    /// - `taps` is zero or below the window's minimum
    /// - `min_freq` is not inside (0, 0.5)
    /// - for band shapes, `max_freq` is not inside (0, 0.5) or not above `min_freq`
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(e) = &result {
            log::warn!("{}", e);
        }
        result
    }

    fn check(&self) -> Result<()> {
        if self.taps == 0 {
            return Err(FilterError::InvalidConfig("tap count must be at least 1".into()));
        }

        let min_taps = self.window_type.min_taps();
        if self.taps < min_taps {
            return Err(FilterError::InvalidConfig(format!(
                "{:?} window needs at least {} taps, got {}",
                self.window_type, min_taps, self.taps
            )));
        }

        check_frequency("min_freq", self.min_freq)?;

        if self.filter_type.is_band() {
            check_frequency("max_freq", self.max_freq)?;

            if self.min_freq >= self.max_freq {
                return Err(FilterError::InvalidConfig(format!(
                    "min_freq ({}) must be below max_freq ({}) for {:?}",
                    self.min_freq, self.max_freq, self.filter_type
                )));
            }
        }

        Ok(())
    }

    /// Allocate buffers and design the filter
    pub fn init(self) -> Result<FirFilter> {
        FirFilter::from_config(self)
    }

    /// Allocate buffers from `allocator` and design the filter
    pub fn init_with<A: BufferAllocator>(self, allocator: &mut A) -> Result<FirFilter> {
        FirFilter::from_config_with(self, allocator)
    }
}

fn check_frequency(name: &str, freq: f32) -> Result<()> {
    if !freq.is_finite() || freq <= 0.0 || freq >= NYQUIST {
        return Err(FilterError::InvalidConfig(format!(
            "{} must be inside (0, {}), got {}",
            name, NYQUIST, freq
        )));
    }
    Ok(())
}
