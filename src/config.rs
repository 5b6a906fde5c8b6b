// File: src/config.rs
use crate::core::types::Language;
use crate::error::Result;
use std::env;
use std::path::PathBuf;

pub const LANGUAGE_VAR: &str = "SUBSOLVE_LANGUAGE";
pub const LOG_VAR: &str = "SUBSOLVE_LOG";

/// Session settings, read from the environment at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Picks the heuristic table offered by the statistics screen.
    pub language: Language,
    /// Log file for tracing output. Nothing is logged when unset.
    pub log_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var(LANGUAGE_VAR).ok(), env::var(LOG_VAR).ok())
    }

    fn from_vars(language: Option<String>, log_path: Option<String>) -> Result<Self> {
        let language = match language.as_deref().map(str::trim) {
            None | Some("") => Language::default(),
            Some(name) => name.parse()?,
        };
        let log_path = log_path
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { language, log_path })
    }
}
