//! Port definitions (trait abstractions) for external systems.
//!
//! # Design Rules
//!
//! - No filesystem details in any signature
//! - One narrow trait per collaborator

pub mod process_env;

pub use process_env::{ProcessEnvironment, SystemEnvironment};

#[cfg(test)]
pub use process_env::MockProcessEnvironment;
