//! Python bindings for FIR filter operations

use crate::filters::{FilterType, FirFilter, WindowType};
use crate::{FilterConfig, FilterError};
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::{PyMemoryError, PyValueError};
use pyo3::prelude::*;

/// Filter shape enum exposed to Python
#[pyclass(name = "FilterType")]
#[derive(Clone)]
pub enum PyFilterType {
    LowPass,
    HighPass,
    BandPass,
    BandStop,
}

impl From<PyFilterType> for FilterType {
    fn from(py_type: PyFilterType) -> Self {
        match py_type {
            PyFilterType::LowPass => FilterType::LowPass,
            PyFilterType::HighPass => FilterType::HighPass,
            PyFilterType::BandPass => FilterType::BandPass,
            PyFilterType::BandStop => FilterType::BandStop,
        }
    }
}

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Hamming,
    Triangle,
    Blackman,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Hamming => WindowType::Hamming,
            PyWindowType::Triangle => WindowType::Triangle,
            PyWindowType::Blackman => WindowType::Blackman,
        }
    }
}

fn to_py_err(e: FilterError) -> PyErr {
    match e {
        FilterError::Allocation { .. } => PyMemoryError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

/// FIR filter exposed to Python
#[pyclass(name = "FirFilter")]
pub struct PyFirFilter {
    filter: FirFilter,
}

#[pymethods]
impl PyFirFilter {
    /// Design a new FIR filter
    ///
    /// Args:
    ///     taps: Number of taps
    ///     filter_type: Filter shape
    ///     window_type: Window type
    ///     min_freq: Cutoff or lower band edge (fraction of sample rate)
    ///     max_freq: Upper band edge for band-pass/band-stop
    #[new]
    #[pyo3(signature = (taps, filter_type, window_type, min_freq, max_freq = 0.0))]
    fn new(
        taps: usize,
        filter_type: PyFilterType,
        window_type: PyWindowType,
        min_freq: f32,
        max_freq: f32,
    ) -> PyResult<Self> {
        let config = FilterConfig::new(taps, filter_type.into(), window_type.into(), min_freq, max_freq);
        let filter = config.init().map_err(to_py_err)?;

        Ok(Self { filter })
    }

    /// Design a filter from a TOML configuration string
    #[staticmethod]
    fn from_toml(text: &str) -> PyResult<Self> {
        let config = FilterConfig::from_toml_str(text).map_err(to_py_err)?;
        let filter = config.init().map_err(to_py_err)?;

        Ok(Self { filter })
    }

    /// Filter a single sample
    fn push(&mut self, sample: f32) -> f32 {
        self.filter.push(sample)
    }

    /// Process a block of samples
    ///
    /// Args:
    ///     input_signal: Input samples as float32 numpy array
    ///
    /// Returns:
    ///     Filtered output as numpy array
    fn process_block<'py>(
        &mut self,
        py: Python<'py>,
        input_signal: PyReadonlyArray1<f32>,
    ) -> PyResult<&'py PyArray1<f32>> {
        let input = input_signal
            .as_slice()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let output = self.filter.process_block(input);

        Ok(PyArray1::from_vec(py, output))
    }

    /// Get filter coefficients
    fn get_coefficients<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f32>> {
        let coeffs = self.filter.coefficients().to_vec();
        Ok(PyArray1::from_vec(py, coeffs))
    }

    /// Get filter length
    fn length(&self) -> usize {
        self.filter.len()
    }

    /// Get group delay in samples
    fn group_delay(&self) -> f32 {
        self.filter.group_delay_samples()
    }
}
