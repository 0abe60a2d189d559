//! cvprompt - interactive generator for CV tailoring prompts
//!
//! Asks a fixed sequence of questions, substitutes the answers into a fixed
//! JSON template and prints the resulting prompt specification.
//!
//! # Flow
//!
//! ```text
//! script::collect ──> AnswerSet ──> filler::fill(&TEMPLATE) ──> render::present
//! ```
//!
//! # Example
//!
//! ```ignore
//! use cvprompt::{Prompter, fill, render, script, template::TEMPLATE};
//!
//! let mut prompter = Prompter::stdio();
//! let answers = script::collect(&mut prompter, &Default::default())?;
//! let doc = fill(&TEMPLATE, &answers)?;
//! println!("{}", render(&doc)?);
//! ```

pub mod answers;
pub mod cli;
pub mod config;
pub mod filler;
pub mod prompt;
pub mod render;
pub mod script;
pub mod template;

pub use answers::{Answer, AnswerSet};
pub use filler::{FillError, fill, placeholders};
pub use prompt::{PromptError, Prompter};
pub use render::{present, render};
pub use script::{Question, SCRIPT, collect};

/// Banner printed ahead of the generated document
pub const BANNER: &str = "---- Generated Prompt ----";

/// Indentation width of the rendered document
pub const INDENT_WIDTH: usize = 2;
