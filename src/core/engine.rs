use crate::core::frequency::frequency_ranking;
use crate::core::mapping::SubstitutionMap;
use crate::core::types::{FrequencyEntry, RenderedChar};
use crate::error::{Result, SolverError};
use tracing::{debug, info};

/// The ciphertext of one session together with the substitutions the user
/// has made so far.
///
/// A value only exists once a non-empty ciphertext was accepted, so every
/// method here works on a ready state and none of them can fail.
#[derive(Debug, Clone)]
pub struct SubstitutionState {
    ciphertext: Vec<char>,
    mapping: SubstitutionMap,
}

impl SubstitutionState {
    /// Accepts the session's ciphertext, upper-cased for matching.
    /// Fails with [`SolverError::EmptyInput`] for empty or blank text.
    pub fn from_ciphertext(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(SolverError::EmptyInput);
        }
        let ciphertext: Vec<char> = text.to_uppercase().chars().collect();
        info!(length = ciphertext.len(), "ciphertext accepted");

        Ok(Self {
            ciphertext,
            mapping: SubstitutionMap::new(),
        })
    }

    pub fn ciphertext(&self) -> String {
        self.ciphertext.iter().collect()
    }

    pub fn mapping(&self) -> &SubstitutionMap {
        &self.mapping
    }

    pub fn plain_for(&self, cipher: char) -> Option<char> {
        self.mapping.get(cipher)
    }

    /// Maps `cipher` to `plain`. The plaintext letter is stored lower-case and
    /// is taken away from whichever cipher letter held it before.
    pub fn assign(&mut self, cipher: char, plain: char) {
        let cipher = cipher.to_uppercase().next().unwrap_or(cipher);
        let plain = plain.to_lowercase().next().unwrap_or(plain);
        let displaced = self.mapping.assign(cipher, plain);
        debug!(%cipher, %plain, ?displaced, "substitution assigned");
    }

    /// Every ciphertext position, replaced where a substitution exists.
    pub fn render(&self) -> Vec<RenderedChar> {
        self.ciphertext
            .iter()
            .map(|&c| match self.mapping.get(c) {
                Some(plain) => RenderedChar { ch: plain, substituted: true },
                None => RenderedChar { ch: c, substituted: false },
            })
            .collect()
    }

    /// The partially decrypted text without highlighting.
    pub fn substituted_text(&self) -> String {
        self.render().into_iter().map(|r| r.ch).collect()
    }

    pub fn frequency_ranking(&self) -> Vec<FrequencyEntry> {
        frequency_ranking(&self.ciphertext)
    }

    /// Assigns the i-th most frequent ciphertext letter to the i-th letter of
    /// `table`, for as many entries as both provide. Runs on top of the current
    /// mapping without clearing it. Returns the number of assignments made.
    pub fn auto_assign_from_frequency(&mut self, table: &[char]) -> usize {
        let ranking = self.frequency_ranking();
        let mut assigned = 0;
        for (entry, &plain) in ranking.iter().zip(table) {
            self.assign(entry.letter, plain);
            assigned += 1;
        }
        info!(assigned, "auto-assigned from frequency ranking");
        assigned
    }
}
