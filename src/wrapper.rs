use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyFrozenSet};
use pyo3::wrap_pyfunction;

use crate::mining;
use crate::types::RawTransaction;

/// Eclat frequent itemset mining over a list of transactions.
#[pyfunction]
#[pyo3(name = "mine", text_signature = "(transactions, min_support, /)")]
fn mine_py<'py>(
    py: Python<'py>,
    transactions: Vec<Vec<String>>,
    min_support: usize,
) -> PyResult<Bound<'py, PyDict>> {
    let raw: Vec<RawTransaction> = transactions
        .iter()
        .map(|transaction| transaction.iter().map(String::as_str).collect())
        .collect();

    let (table, inventory) =
        mining::mine(&raw, min_support).map_err(|e| PyValueError::new_err(e.to_string()))?;

    let result = PyDict::new_bound(py);
    for (itemset, tids) in &table {
        let names: Vec<&str> = itemset.iter().map(|id| inventory[id]).collect();
        let key = PyFrozenSet::new_bound(py, &names)?;
        result.set_item(key, (tids.support(), tids.tids().to_vec()))?;
    }

    Ok(result)
}

#[pymodule]
fn eclat(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mine_py, m)?)?;
    Ok(())
}
