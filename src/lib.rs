// src/lib.rs

pub mod config;
pub mod console;
pub mod core;
pub mod error;
pub mod interaction;

pub use crate::core::engine::SubstitutionState;
pub use crate::error::{Result, SolverError};
pub use crate::interaction::{InteractionLoop, SessionEnd};
