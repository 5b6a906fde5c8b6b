// src/core/types.rs
use crate::error::SolverError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Expected letter ranking for German text, most frequent first.
pub const GERMAN_LETTERS: [char; 10] = ['E', 'N', 'I', 'S', 'R', 'A', 'T', 'D', 'H', 'U'];

/// Expected letter ranking for English text, most frequent first.
pub const ENGLISH_LETTERS: [char; 10] = ['E', 'T', 'A', 'O', 'I', 'N', 'S', 'H', 'R', 'D'];

/// The natural language the plaintext is assumed to be written in.
/// Only used to pick the heuristic table for auto-assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    German,
    English,
}

impl Language {
    pub fn heuristic_table(self) -> &'static [char] {
        match self {
            Language::German => &GERMAN_LETTERS,
            Language::English => &ENGLISH_LETTERS,
        }
    }
}

impl FromStr for Language {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "german" | "de" => Ok(Language::German),
            "english" | "en" => Ok(Language::English),
            _ => Err(SolverError::UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::German => f.write_str("german"),
            Language::English => f.write_str("english"),
        }
    }
}

/// One position of the rendered ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedChar {
    pub ch: char,
    /// True when `ch` comes from the substitution map rather than the ciphertext.
    pub substituted: bool,
}

/// A row of the frequency ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub letter: char,
    pub count: usize,
    /// floor(count / ciphertext length * 100)
    pub percent: usize,
}

/// Takes the first character of free text as an upper-case cipher letter.
/// The rest of the input is silently dropped.
pub fn normalize_cipher_letter(text: &str) -> Option<char> {
    text.chars().next().map(|c| c.to_uppercase().next().unwrap_or(c))
}

/// Takes the first character of free text as a lower-case plaintext letter.
pub fn normalize_plain_letter(text: &str) -> Option<char> {
    text.chars().next().map(|c| c.to_lowercase().next().unwrap_or(c))
}
