// File: src/core/mapping.rs
use serde::Serialize;
use std::collections::BTreeMap;

/// Partial injective map from cipher letters (upper-case) to plaintext
/// letters (lower-case). No two cipher letters ever share a plaintext letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubstitutionMap {
    entries: BTreeMap<char, char>,
}

impl SubstitutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `cipher` to `plain`, last write wins.
    ///
    /// Any other cipher letter currently mapped to `plain` loses its entry
    /// first; that displaced cipher letter is returned.
    pub fn assign(&mut self, cipher: char, plain: char) -> Option<char> {
        let displaced = self.cipher_for(plain).filter(|&c| c != cipher);
        self.entries.retain(|_, p| *p != plain);
        self.entries.insert(cipher, plain);
        displaced
    }

    pub fn get(&self, cipher: char) -> Option<char> {
        self.entries.get(&cipher).copied()
    }

    /// Inverse lookup: which cipher letter currently stands for `plain`.
    pub fn cipher_for(&self, plain: char) -> Option<char> {
        self.entries
            .iter()
            .find(|(_, &p)| p == plain)
            .map(|(&c, _)| c)
    }

    /// Entries ordered by cipher letter.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.entries.iter().map(|(&c, &p)| (c, p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
