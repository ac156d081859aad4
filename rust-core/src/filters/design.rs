//! FIR coefficient design using the windowed-sinc method
//!
//! The designer produces the raw (unwindowed) taps; the window is applied by
//! the caller so the two stages can share preallocated buffers.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Filter shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    LowPass,
    HighPass,
    BandPass,
    BandStop,
}

impl FilterType {
    /// Whether the shape uses both band edges
    pub fn is_band(&self) -> bool {
        matches!(self, FilterType::BandPass | FilterType::BandStop)
    }
}

/// Normalized sinc: sin(πx)/(πx), 1 at x = 0
#[inline]
pub fn sinc(x: f32) -> f32 {
    if x == 0.0 {
        return 1.0;
    }

    (PI * x).sin() / (PI * x)
}

/// Ideal lowpass tap at centered index `n` for normalized cutoff `f`
#[inline]
fn lowpass_tap(f: f32, n: f32) -> f32 {
    2.0 * f * sinc(2.0 * f * n)
}

/// Design raw FIR taps
///
/// # Arguments
/// * `filter_type` - Filter shape
/// * `taps` - Number of taps (N)
/// * `min_freq` - Cutoff (lowpass/highpass) or lower band edge, fraction of sample rate
/// * `max_freq` - Upper band edge, only used by band shapes
///
/// # Returns
/// Vector of unwindowed taps h[i] for i = 0..N-1
pub fn design_coefficients(
    filter_type: FilterType,
    taps: usize,
    min_freq: f32,
    max_freq: f32,
) -> Vec<f32> {
    let mut h = vec![0.0; taps];
    design_coefficients_into(&mut h, filter_type, min_freq, max_freq);
    h
}

/// Fill `h` with unwindowed taps, N = `h.len()`
///
/// Taps are centered on n = i - floor(N/2). The band formulas are
/// lowpass(min) - lowpass(max), with an added unit impulse for band-stop.
pub fn design_coefficients_into(h: &mut [f32], filter_type: FilterType, min_freq: f32, max_freq: f32) {
    let half = (h.len() / 2) as i64;

    for (i, tap) in h.iter_mut().enumerate() {
        let n = (i as i64 - half) as f32;

        *tap = match filter_type {
            FilterType::LowPass => lowpass_tap(min_freq, n),
            FilterType::HighPass => sinc(n) - lowpass_tap(min_freq, n),
            FilterType::BandPass => lowpass_tap(min_freq, n) - lowpass_tap(max_freq, n),
            FilterType::BandStop => lowpass_tap(min_freq, n) - lowpass_tap(max_freq, n) + sinc(n),
        };
    }
}

/// Calculate frequency response at given frequencies
///
/// # Arguments
/// * `h` - Filter coefficients
/// * `frequencies` - Normalized frequencies (fraction of sample rate, 0..0.5)
///
/// # Returns
/// Complex frequency response H(f) = Σ h[n]·e^(-j2πfn)
pub fn frequency_response(h: &[f32], frequencies: &[f64]) -> Vec<Complex64> {
    let mut response = Vec::with_capacity(frequencies.len());

    for &freq in frequencies {
        let omega = 2.0 * std::f64::consts::PI * freq;
        let mut sum = Complex64::new(0.0, 0.0);

        for (n, &h_n) in h.iter().enumerate() {
            sum += h_n as f64 * Complex64::from_polar(1.0, -(omega * n as f64));
        }

        response.push(sum);
    }

    response
}

/// Calculate magnitude response in dB
pub fn magnitude_response_db(h: &[f32], frequencies: &[f64]) -> Vec<f64> {
    frequency_response(h, frequencies)
        .iter()
        .map(|c| 20.0 * c.norm().log10())
        .collect()
}
