//! Instance file parser.
//!
//! # Format
//!
//! ```text
//! PROBLEME : gdb-small
//! NB_COND : 3
//! NB_CAMIONS : 2
//! CAPACITE : 5
//! NUM_DEPOT : 1
//! NB_SOMMETS : 4
//! NB_TACHES : 3
//! DEPART ARRIVEE COUT DEMANDE
//! 1 2 3 2
//! 2 3 4 1
//! 3 4 2 3
//! ```
//!
//! Node numbers are 1-based in the file and 0-based once loaded. Every task
//! line is a two-way street: the network gets both arcs, and the task is
//! the service arc `from → to`. Blank lines are ignored.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::error::{CarpError, Result};
use crate::models::{Network, SplitConfig, Task};
use crate::problem::CarpProblem;

/// Condition recording the number of nodes, added by the loader.
pub const CONDITION_NUM_NODES: &str = "NB_SOMMETS";

/// A parsed instance: named integer conditions, the street network and the
/// required tasks in file order.
///
/// # Examples
///
/// ```
/// use u_carp::instance::Instance;
///
/// let text = "PROBLEME : tiny\n\
///             NB_COND : 2\n\
///             CAPACITE : 5\n\
///             NUM_DEPOT : 1\n\
///             NB_SOMMETS : 2\n\
///             NB_TACHES : 1\n\
///             DEPART ARRIVEE COUT DEMANDE\n\
///             1 2 3 4\n";
/// let instance: Instance = text.parse().unwrap();
/// assert_eq!(instance.name(), "tiny");
/// assert_eq!(instance.condition("CAPACITE"), Some(5));
/// assert_eq!(instance.tasks().len(), 1);
///
/// let problem = instance.problem().unwrap();
/// let tour: Vec<_> = instance.tasks().iter().collect();
/// assert_eq!(problem.evaluate(&tour).unwrap(), 6.0); // serve 3, return 3
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    name: String,
    conditions: BTreeMap<String, i64>,
    network: Network,
    tasks: Vec<Task>,
}

impl Instance {
    /// Parses an instance from its text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = Lines::new(text);

        let (line, _, name) = lines.key_value("problem name")?;
        if name.is_empty() {
            return Err(CarpError::parse(line, "empty problem name"));
        }
        let name = name.to_string();

        let num_conditions = lines.count("condition count")?;
        let mut conditions = BTreeMap::new();
        for _ in 0..num_conditions {
            let (line, key, value) = lines.key_value("condition")?;
            let value = parse_number::<i64>(line, value, "condition value")?;
            conditions.insert(key.to_string(), value);
        }

        let num_nodes = lines.count("node count")?;
        conditions.insert(CONDITION_NUM_NODES.to_string(), num_nodes as i64);
        let num_tasks = lines.count("task count")?;

        // column labels
        lines.next_line("task table header")?;

        let mut network = Network::new(num_nodes);
        let mut tasks = Vec::with_capacity(num_tasks);
        for id in 0..num_tasks {
            let (line, text) = lines.next_line("task line")?;
            let fields: Vec<&str> = text.split_whitespace().collect();
            if fields.len() < 4 {
                return Err(CarpError::parse(
                    line,
                    format!("expected `from to cost demand`, got `{text}`"),
                ));
            }
            let from = parse_node(line, fields[0], num_nodes)?;
            let to = parse_node(line, fields[1], num_nodes)?;
            let cost = parse_number::<f64>(line, fields[2], "cost")?;
            let demand = parse_number::<f64>(line, fields[3], "demand")?;

            let task = Task::new(id, from, to, cost, demand)
                .map_err(|err| CarpError::parse(line, err.to_string()))?;
            network
                .add_edge(from, to, cost)
                .map_err(|err| CarpError::parse(line, err.to_string()))?;
            tasks.push(task);
        }

        debug!(
            "loaded instance {name}: {num_nodes} nodes, {} tasks, {} conditions",
            tasks.len(),
            conditions.len()
        );
        Ok(Self {
            name,
            conditions,
            network,
            tasks,
        })
    }

    /// Reads and parses an instance file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    /// Instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All named conditions, including the node count.
    pub fn conditions(&self) -> &BTreeMap<String, i64> {
        &self.conditions
    }

    /// Value of the condition `key`, if present.
    pub fn condition(&self, key: &str) -> Option<i64> {
        self.conditions.get(key).copied()
    }

    /// Street network built from the task lines.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Required tasks in file order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Capacity and depot read from the conditions.
    pub fn config(&self) -> Result<SplitConfig> {
        SplitConfig::from_conditions(&self.conditions)
    }

    /// Builds the evaluation problem for this instance.
    pub fn problem(&self) -> Result<CarpProblem> {
        CarpProblem::new(self.network.clone(), &self.config()?)
    }
}

impl FromStr for Instance {
    type Err = CarpError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Non-blank lines with their 1-based line numbers.
struct Lines<'t> {
    inner: std::iter::Enumerate<std::str::Lines<'t>>,
    last: usize,
}

impl<'t> Lines<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            inner: text.lines().enumerate(),
            last: 0,
        }
    }

    fn next_line(&mut self, what: &str) -> Result<(usize, &'t str)> {
        for (idx, text) in self.inner.by_ref() {
            self.last = idx + 1;
            let text = text.trim();
            if !text.is_empty() {
                return Ok((idx + 1, text));
            }
        }
        Err(CarpError::parse(
            self.last + 1,
            format!("unexpected end of file, expected {what}"),
        ))
    }

    fn key_value(&mut self, what: &str) -> Result<(usize, &'t str, &'t str)> {
        let (line, text) = self.next_line(what)?;
        let (key, value) = text
            .split_once(':')
            .ok_or_else(|| CarpError::parse(line, format!("expected `KEY : value` for {what}")))?;
        Ok((line, key.trim(), value.trim()))
    }

    fn count(&mut self, what: &str) -> Result<usize> {
        let (line, _, value) = self.key_value(what)?;
        parse_number::<usize>(line, value, what)
    }
}

fn parse_number<T: FromStr>(line: usize, value: &str, what: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| CarpError::parse(line, format!("invalid {what} `{value}`")))
}

fn parse_node(line: usize, value: &str, num_nodes: usize) -> Result<usize> {
    let node = parse_number::<usize>(line, value, "node number")?;
    if node == 0 || node > num_nodes {
        return Err(CarpError::parse(
            line,
            format!("node {node} outside 1..={num_nodes}"),
        ));
    }
    Ok(node - 1)
}
