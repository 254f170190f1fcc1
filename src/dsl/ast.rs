//! Abstract Syntax Tree for the Cuneiform language.
//!
//! A program is an ordered list of task blocks. Only one node shape exists;
//! the reserved keywords (INPUT, PROCESS, IF, ELSE, REPEAT) have no
//! structural meaning yet, so `inputs` and `process` are always empty.

use std::fmt;

use serde::Serialize;

/// A parsed program: task blocks in declaration order.
pub type Program = Vec<TaskNode>;

/// One `TASK:` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskNode {
    pub name: String,
    pub purpose: Option<String>,
    pub inputs: Vec<String>,
    pub process: Vec<String>,
    pub output: Option<String>,
}

impl TaskNode {
    pub fn new(name: impl Into<String>, purpose: Option<String>, output: Option<String>) -> Self {
        Self {
            name: name.into(),
            purpose,
            inputs: Vec::new(),
            process: Vec::new(),
            output,
        }
    }
}

impl fmt::Display for TaskNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TaskNode(name={:?}, purpose={:?}, output={:?})",
            self.name, self.purpose, self.output
        )
    }
}
