//! Cuneiform — a structured task description language that compiles to
//! natural-language prompts for generative text models.

pub mod ai;
pub mod dsl;
