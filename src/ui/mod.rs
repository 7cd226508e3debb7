//! Terminal output.
//!
//! A batch tool needs no prompts or spinners, just mode-aware status lines
//! with a little styling. [`Output`] is passed to every command.

pub mod output;

pub use output::{Output, OutputMode};
