//! Prompt generator — renders a [`Program`] AST as natural-language text.
//!
//! [`Program`]: super::ast::Program

use super::ast::TaskNode;

/// Separator placed between consecutive task blocks.
const TASK_SEPARATOR: &str = "\n\n";

/// Render every task in declaration order, separated by one blank line.
pub fn generate(tasks: &[TaskNode]) -> String {
    tasks
        .iter()
        .map(render_task)
        .collect::<Vec<_>>()
        .join(TASK_SEPARATOR)
}

fn render_task(task: &TaskNode) -> String {
    let mut lines = vec![format!("Task: {}", task.name)];

    if let Some(purpose) = task.purpose.as_deref().filter(|p| !p.is_empty()) {
        lines.push(format!("Purpose: {purpose}"));
    }

    if let Some(output) = task.output.as_deref().filter(|o| !o.is_empty()) {
        lines.push(String::new());
        lines.push(format!("Please generate the output as specified: {output}"));
    }

    lines.join("\n")
}
