//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod filter_bindings;

/// Python module definition
#[pymodule]
fn windowed_fir(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<filter_bindings::PyFirFilter>()?;

    // Add enums
    m.add_class::<filter_bindings::PyFilterType>()?;
    m.add_class::<filter_bindings::PyWindowType>()?;

    Ok(())
}
