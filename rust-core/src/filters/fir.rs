//! Real-time FIR filter with state management
//!
//! Direct-form convolution over a fixed-size circular sample history. Buffers
//! are allocated once at initialization; pushing samples never allocates.

use super::alloc::{BufferAllocator, BufferKind, SystemAllocator};
use super::design::{design_coefficients_into, frequency_response, magnitude_response_db};
use super::windows::generate_window_into;
use crate::config::FilterConfig;
use crate::error::Result;
use num_complex::Complex64;

/// Initialized windowed-sinc FIR filter
///
/// Only obtainable through [`FirFilter::from_config`] (or
/// [`FilterConfig::init`]), so every instance holds fully designed
/// coefficients and a zeroed history of the same length.
#[derive(Debug, Clone)]
pub struct FirFilter {
    /// Configuration the taps were designed from
    config: FilterConfig,

    /// Windowed filter taps h[k], fixed after initialization
    coefficients: Box<[f32]>,

    /// Ring buffer of the N most recent input samples
    history: Box<[f32]>,

    /// Slot the next input sample is written to
    cursor: usize,
}

impl FirFilter {
    /// Validate `config`, allocate buffers and design the taps
    ///
    /// # Errors
    /// `FilterError::InvalidConfig` if the configuration fails validation,
    /// `FilterError::Allocation` if a buffer cannot be obtained
    pub fn from_config(config: FilterConfig) -> Result<Self> {
        Self::from_config_with(config, &mut SystemAllocator)
    }

    /// Same as [`FirFilter::from_config`], drawing buffers from `allocator`
    pub fn from_config_with<A: BufferAllocator>(config: FilterConfig, allocator: &mut A) -> Result<Self> {
        config.validate()?;

        let taps = config.taps;
        log::debug!(
            "Designing {}-tap {:?} filter ({:?} window, min_freq={}, max_freq={})",
            taps,
            config.filter_type,
            config.window_type,
            config.min_freq,
            config.max_freq
        );

        let mut coefficients = allocate(allocator, BufferKind::Coefficients, taps)?;
        let history = allocate(allocator, BufferKind::History, taps)?;
        let mut window = allocate(allocator, BufferKind::Window, taps)?;

        design_coefficients_into(
            &mut coefficients,
            config.filter_type,
            config.min_freq,
            config.max_freq,
        );
        generate_window_into(&mut window, config.window_type);

        for (h, w) in coefficients.iter_mut().zip(window.iter()) {
            *h *= w;
        }
        drop(window);

        log::debug!(
            "Filter ready: {} taps, DC gain {:.6}",
            taps,
            coefficients.iter().sum::<f32>()
        );

        Ok(Self {
            config,
            coefficients: coefficients.into_boxed_slice(),
            history: history.into_boxed_slice(),
            cursor: 0,
        })
    }

    /// Process single sample (zero-allocation)
    ///
    /// Writes `input` at the cursor, then returns
    /// Σ_k history[(cursor + k) mod N] · h[k] and advances the cursor.
    #[inline]
    pub fn push(&mut self, input: f32) -> f32 {
        let n = self.history.len();
        self.history[self.cursor] = input;

        // k in [0, N - cursor) reads history[cursor..], the rest wraps to history[..cursor]
        let (wrapped, current) = self.history.split_at(self.cursor);
        let (head_taps, tail_taps) = self.coefficients.split_at(n - self.cursor);
        let output = dot(current, head_taps) + dot(wrapped, tail_taps);

        self.cursor += 1;
        if self.cursor == n {
            self.cursor = 0;
        }

        output
    }

    /// Process a block of samples
    ///
    /// # Returns
    /// Filtered output samples (same length as input)
    pub fn process_block(&mut self, input: &[f32]) -> Vec<f32> {
        input.iter().map(|&x| self.push(x)).collect()
    }

    /// Process a block in-place (overwrites input buffer)
    pub fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.push(*sample);
        }
    }

    /// Get filter coefficients
    pub fn coefficients(&self) -> &[f32] {
        &self.coefficients
    }

    /// Get the configuration the filter was designed from
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Get filter length (tap count)
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Always false: validation rejects zero-tap configurations
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Get group delay in samples for a linear-phase response
    pub fn group_delay_samples(&self) -> f32 {
        (self.len() - 1) as f32 / 2.0
    }

    /// Complex response of the designed taps at normalized frequencies
    pub fn frequency_response(&self, frequencies: &[f64]) -> Vec<Complex64> {
        frequency_response(&self.coefficients, frequencies)
    }

    /// Magnitude response of the designed taps in dB
    pub fn magnitude_response_db(&self, frequencies: &[f64]) -> Vec<f64> {
        magnitude_response_db(&self.coefficients, frequencies)
    }
}

fn allocate<A: BufferAllocator>(allocator: &mut A, kind: BufferKind, len: usize) -> Result<Vec<f32>> {
    allocator
        .allocate(kind, len)
        .inspect_err(|e| log::warn!("{}", e))
}

/// Dot product with four independent accumulators
#[inline]
fn dot(samples: &[f32], taps: &[f32]) -> f32 {
    debug_assert_eq!(samples.len(), taps.len());

    let mut acc = [0.0f32; 4];
    let sample_chunks = samples.chunks_exact(4);
    let tap_chunks = taps.chunks_exact(4);
    let sample_rest = sample_chunks.remainder();
    let tap_rest = tap_chunks.remainder();

    for (s, h) in sample_chunks.zip(tap_chunks) {
        acc[0] += s[0] * h[0];
        acc[1] += s[1] * h[1];
        acc[2] += s[2] * h[2];
        acc[3] += s[3] * h[3];
    }

    let mut sum = (acc[0] + acc[1]) + (acc[2] + acc[3]);
    for (s, h) in sample_rest.iter().zip(tap_rest.iter()) {
        sum += s * h;
    }
    sum
}
