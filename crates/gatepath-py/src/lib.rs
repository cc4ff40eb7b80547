#![allow(unsafe_op_in_unsafe_fn)]

use ::gatepath_core::{FrontierOrder, Solution, SolveConfig, TreeError};
use ::gatepath_scenario::{ScenarioError, ScenarioSpec, TreeGenerator, load_yaml};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn tree_err_to_py(err: TreeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn scenario_err_to_py(err: ScenarioError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_frontier(value: &str) -> PyResult<FrontierOrder> {
    match value {
        "breadth_first" => Ok(FrontierOrder::BreadthFirst),
        "depth_first" => Ok(FrontierOrder::DepthFirst),
        _ => Err(PyValueError::new_err(
            "invalid frontier; expected one of: breadth_first, depth_first",
        )),
    }
}

fn to_edges(edges: Vec<(usize, usize)>) -> Vec<[usize; 2]> {
    edges.into_iter().map(|(a, b)| [a, b]).collect()
}

#[pyclass(name = "Solution", module = "gatepath")]
#[derive(Clone)]
/// Solution()
/// --
///
/// Result of one solve call: Alice's best reward and walk, and Bob's
/// arrival times.
pub struct PySolution {
    inner: Solution,
}

#[pymethods]
impl PySolution {
    /// Alice's maximum net reward.
    #[getter]
    fn reward(&self) -> i64 {
        self.inner.reward
    }

    /// Leaf at the end of Alice's best walk.
    #[getter]
    fn best_leaf(&self) -> usize {
        self.inner.best_leaf.index()
    }

    /// Alice's best walk, root first.
    #[getter]
    fn path(&self) -> Vec<usize> {
        self.inner.path.iter().map(|node| node.index()).collect()
    }

    /// Bob's walk as `(node, time)` pairs, start node first.
    #[getter]
    fn bob_times(&self) -> Vec<(usize, usize)> {
        self.inner
            .arrivals
            .path()
            .into_iter()
            .enumerate()
            .map(|(time, node)| (node.index(), time))
            .collect()
    }

    #[getter]
    fn leaves_visited(&self) -> usize {
        self.inner.leaves_visited
    }

    /// to_json($self, /)
    /// --
    ///
    /// Serialize the solution snapshot as JSON text.
    #[pyo3(text_signature = "($self, /)")]
    fn to_json(&self) -> PyResult<String> {
        self.inner
            .snapshot()
            .to_json()
            .map_err(|err| PyValueError::new_err(err.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "Solution(reward={}, best_leaf={})",
            self.inner.reward,
            self.inner.best_leaf.index()
        )
    }
}

#[pyclass(name = "Scenario", module = "gatepath")]
#[derive(Clone)]
/// Scenario()
/// --
///
/// A problem instance loaded from YAML or sampled by `generate_scenario`.
pub struct PyScenario {
    inner: ScenarioSpec,
}

#[pymethods]
impl PyScenario {
    #[getter]
    fn edges(&self) -> Vec<(usize, usize)> {
        self.inner.edges.iter().map(|&[a, b]| (a, b)).collect()
    }

    #[getter]
    fn bob(&self) -> usize {
        self.inner.bob
    }

    #[getter]
    fn amount(&self) -> Vec<i64> {
        self.inner.amount.clone()
    }

    #[getter]
    fn expected(&self) -> Option<i64> {
        self.inner.expected
    }

    /// solve($self, frontier="breadth_first", /)
    /// --
    ///
    /// Validate and solve this scenario.
    ///
    /// Raises:
    ///     ValueError: If the scenario is not a valid tree instance.
    #[pyo3(signature = (frontier="breadth_first"))]
    #[pyo3(text_signature = "($self, frontier=\"breadth_first\", /)")]
    fn solve(&self, frontier: &str) -> PyResult<PySolution> {
        let config = SolveConfig {
            frontier: parse_frontier(frontier)?,
            validate: true,
        };
        let inner = self.inner.solve_with(&config).map_err(scenario_err_to_py)?;
        Ok(PySolution { inner })
    }

    /// check($self, /)
    /// --
    ///
    /// Solve and compare against the scenario's `expected` reward.
    ///
    /// Raises:
    ///     ValueError: If solving fails or the reward does not match.
    #[pyo3(text_signature = "($self, /)")]
    fn check(&self) -> PyResult<PySolution> {
        let inner = self.inner.check().map_err(scenario_err_to_py)?;
        Ok(PySolution { inner })
    }

    /// to_yaml($self, /)
    /// --
    ///
    /// Serialize the scenario as YAML text.
    #[pyo3(text_signature = "($self, /)")]
    fn to_yaml(&self) -> PyResult<String> {
        serde_yaml::to_string(&self.inner).map_err(|err| PyValueError::new_err(err.to_string()))
    }
}

#[pyfunction]
#[pyo3(text_signature = "(edges, bob, amount, /)")]
/// most_profitable_path(edges, bob, amount, /)
/// --
///
/// Maximum net reward Alice can collect on her way from node 0 to a leaf.
///
/// Raises:
///     ValueError: If the edges do not form a tree over `len(amount)` nodes.
fn most_profitable_path(
    edges: Vec<(usize, usize)>,
    bob: usize,
    amount: Vec<i64>,
) -> PyResult<i64> {
    ::gatepath_core::most_profitable_path(&to_edges(edges), bob, &amount).map_err(tree_err_to_py)
}

#[pyfunction]
#[pyo3(signature = (edges, bob, amount, frontier="breadth_first", validate=true))]
#[pyo3(text_signature = "(edges, bob, amount, frontier=\"breadth_first\", validate=True, /)")]
/// solve(edges, bob, amount, frontier="breadth_first", validate=True, /)
/// --
///
/// Like `most_profitable_path` but returns the full `Solution`.
fn solve(
    edges: Vec<(usize, usize)>,
    bob: usize,
    amount: Vec<i64>,
    frontier: &str,
    validate: bool,
) -> PyResult<PySolution> {
    let config = SolveConfig {
        frontier: parse_frontier(frontier)?,
        validate,
    };
    let inner =
        ::gatepath_core::solve(&to_edges(edges), bob, &amount, &config).map_err(tree_err_to_py)?;
    Ok(PySolution { inner })
}

#[pyfunction]
#[pyo3(text_signature = "(path, /)")]
/// load_scenario(path, /)
/// --
///
/// Load a scenario from a YAML file.
fn load_scenario(path: &str) -> PyResult<PyScenario> {
    let inner = load_yaml(path).map_err(scenario_err_to_py)?;
    Ok(PyScenario { inner })
}

#[pyfunction]
#[pyo3(text_signature = "(yaml, /)")]
/// scenario_from_yaml(yaml, /)
/// --
///
/// Parse a scenario directly from YAML text.
fn scenario_from_yaml(yaml: &str) -> PyResult<PyScenario> {
    let inner: ScenarioSpec =
        serde_yaml::from_str(yaml).map_err(|err| PyValueError::new_err(err.to_string()))?;
    Ok(PyScenario { inner })
}

#[pyfunction]
#[pyo3(text_signature = "(nodes, seed, /)")]
/// generate_scenario(nodes, seed, /)
/// --
///
/// Sample a random tree scenario, deterministic for a given seed.
fn generate_scenario(nodes: usize, seed: u64) -> PyScenario {
    PyScenario {
        inner: TreeGenerator::new(seed).generate(nodes),
    }
}

#[pymodule]
fn gatepath(module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_class::<PySolution>()?;
    module.add_class::<PyScenario>()?;
    module.add_function(wrap_pyfunction!(most_profitable_path, module)?)?;
    module.add_function(wrap_pyfunction!(solve, module)?)?;
    module.add_function(wrap_pyfunction!(load_scenario, module)?)?;
    module.add_function(wrap_pyfunction!(scenario_from_yaml, module)?)?;
    module.add_function(wrap_pyfunction!(generate_scenario, module)?)?;
    Ok(())
}
