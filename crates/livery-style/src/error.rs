//! Error type for style synthesis.

use thiserror::Error;

/// Error raised while compiling or rendering a style fragment template.
///
/// The fragment templates are fixed constants compiled at synthesizer
/// construction, so render failures indicate a programming error rather
/// than bad user input.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("style template error: {0}")]
    Template(#[from] minijinja::Error),
}
