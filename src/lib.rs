//! Translator workflow against a remote localization statistics service.
//!
//! Fetches per-module completion stats for a release set and language, ranks
//! the modules that still need work, and drives the delegated translate,
//! commit and push steps for the module the user picks.
pub mod candidates;
pub mod cli;
pub mod config;
pub mod delegate;
pub mod error;
pub mod output;
pub mod remote;
pub mod selection;
pub mod stats;
pub mod workflow;

pub use error::WorkflowError;
