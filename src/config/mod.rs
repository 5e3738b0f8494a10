//! Configuration for the stackgenius CLI.
//!
//! Settings are assembled in layers: built-in defaults, then the JSON config
//! file at `~/.stackgenius/config`, then environment variable overrides.
//! A saved API key is optional; the interactive form can supply one per run.

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use types::{Config, LlmSettings, ModelSettings};

#[cfg(test)]
mod tests;
