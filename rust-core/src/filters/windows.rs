//! Window functions for windowed-sinc FIR design
//!
//! Windows taper the truncated ideal impulse response to reduce spectral ripple.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowType {
    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(N-1))
    Hamming,

    /// Triangle window: w[n] = 1 - |(n - (N-1)/2) / (N/2)|
    /// Endpoints are non-zero (1/N for odd N)
    Triangle,

    /// Blackman-style window: w[n] = 0.42 - 0.5*cos(2πn/(N-1)) - 0.08*cos(4πn/(N-1))
    Blackman,
}

impl WindowType {
    /// Smallest tap count the window formula is defined for
    ///
    /// Hamming and Blackman divide by (N-1), so they need at least 2 taps.
    pub fn min_taps(&self) -> usize {
        match self {
            WindowType::Hamming | WindowType::Blackman => 2,
            WindowType::Triangle => 1,
        }
    }
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (N)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..N-1
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f32> {
    let mut window = vec![0.0; length];
    generate_window_into(&mut window, window_type);
    window
}

/// Fill `window` with coefficients of the given type, N = `window.len()`
pub fn generate_window_into(window: &mut [f32], window_type: WindowType) {
    let taps = window.len();

    match window_type {
        WindowType::Hamming => {
            let span = (taps as f32) - 1.0;
            for (i, w) in window.iter_mut().enumerate() {
                let angle = 2.0 * PI * i as f32 / span;
                *w = 0.54 - 0.46 * angle.cos();
            }
        }

        WindowType::Triangle => {
            let center = (taps as f32 - 1.0) / 2.0;
            let half_width = taps as f32 / 2.0;
            for (i, w) in window.iter_mut().enumerate() {
                *w = 1.0 - ((i as f32 - center) / half_width).abs();
            }
        }

        WindowType::Blackman => {
            let span = (taps as f32) - 1.0;
            for (i, w) in window.iter_mut().enumerate() {
                let angle1 = 2.0 * PI * i as f32 / span;
                let angle2 = 4.0 * PI * i as f32 / span;
                *w = 0.42 - 0.5 * angle1.cos() - 0.08 * angle2.cos();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_window_generation() {
        let length = 161;

        let hamming = generate_window(WindowType::Hamming, length);
        let triangle = generate_window(WindowType::Triangle, length);
        let blackman = generate_window(WindowType::Blackman, length);

        assert_eq!(hamming.len(), length);
        assert_eq!(triangle.len(), length);
        assert_eq!(blackman.len(), length);

        // Check symmetry
        for i in 0..length / 2 {
            assert_abs_diff_eq!(hamming[i], hamming[length - 1 - i], epsilon = 1e-5);
            assert_abs_diff_eq!(triangle[i], triangle[length - 1 - i], epsilon = 1e-5);
        }

        // Hamming and triangle peak at 1.0 in the center for odd lengths
        let center = length / 2;
        assert_abs_diff_eq!(hamming[center], 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(triangle[center], 1.0, epsilon = 1e-6);

        // Hamming should have non-zero endpoints (0.08)
        assert!(hamming[0] > 0.07 && hamming[0] < 0.09);
    }

    #[test]
    fn test_hamming_reference_values() {
        // N = 5: 0.54 - 0.46*cos(πi/2)
        let w = generate_window(WindowType::Hamming, 5);
        let expected: [f32; 5] = [0.08, 0.54, 1.0, 0.54, 0.08];
        for (a, b) in w.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_triangle_reference_values() {
        // N = 4: center 1.5, half width 2
        let w = generate_window(WindowType::Triangle, 4);
        let expected: [f32; 4] = [0.25, 0.75, 0.75, 0.25];
        for (a, b) in w.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-6);
        }

        let single = generate_window(WindowType::Triangle, 1);
        assert_eq!(single, vec![1.0f32]);
    }

    #[test]
    fn test_blackman_subtracts_third_term() {
        // N = 3: i = 0 -> 0.42 - 0.5 - 0.08, i = 1 -> 0.42 + 0.5 - 0.08
        let w = generate_window(WindowType::Blackman, 3);
        assert_abs_diff_eq!(w[0], -0.16, epsilon = 1e-6);
        assert_abs_diff_eq!(w[1], 0.84, epsilon = 1e-6);
        assert_abs_diff_eq!(w[2], -0.16, epsilon = 1e-6);
    }

    #[test]
    fn test_min_taps() {
        assert_eq!(WindowType::Hamming.min_taps(), 2);
        assert_eq!(WindowType::Blackman.min_taps(), 2);
        assert_eq!(WindowType::Triangle.min_taps(), 1);
    }
}
