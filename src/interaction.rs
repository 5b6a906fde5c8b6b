// File: src/interaction.rs
//! Menu-driven session on top of a [`Console`].
//!
//! The loop only translates menu choices into calls on
//! [`SubstitutionState`]; all mapping rules live there.

use crate::console::{Console, MenuChoice, Span, Style};
use crate::core::engine::SubstitutionState;
use crate::core::types::{normalize_cipher_letter, normalize_plain_letter, Language};
use crate::error::{Result, SolverError};
use std::io;
use tracing::{info, warn};

const MAIN_MENU: [&str; 4] = ["Edit substitutions", "Show letter statistics", "Show key", "Exit"];
const EDIT_MENU: [&str; 2] = ["Edit substitution", "Back"];
const STATISTICS_MENU: [&str; 2] = ["Automatically assign to substitutions", "Back"];
const KEY_MENU: [&str; 1] = ["Back"];

/// How a session ended. Both are normal exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose "Exit" from the main menu.
    Exit,
    /// The user declined to retry after an empty ciphertext.
    Abandoned,
}

enum Flow {
    Continue,
    Exit,
}

pub struct InteractionLoop<'c, C: Console> {
    console: &'c mut C,
    language: Language,
}

impl<'c, C: Console> InteractionLoop<'c, C> {
    pub fn new(console: &'c mut C, language: Language) -> Self {
        Self { console, language }
    }

    /// Runs a whole session: ciphertext prompt, then the main menu until exit.
    pub fn run(&mut self) -> Result<SessionEnd> {
        self.console.clear()?;
        self.console.write(&[
            Span::new("Welcome to the ", Style::Accent),
            Span::heading("console substitution solver"),
            Span::new("!\n", Style::Accent),
        ])?;

        let Some(mut state) = self.read_ciphertext()? else {
            self.console.clear()?;
            self.console.write(&[Span::plain("Empty text input, exiting...\n")])?;
            self.farewell()?;
            return Ok(SessionEnd::Abandoned);
        };

        loop {
            if let Flow::Exit = self.main_menu(&mut state)? {
                self.farewell()?;
                return Ok(SessionEnd::Exit);
            }
        }
    }

    /// Prompts until a usable ciphertext arrives. `None` if the user gives up.
    fn read_ciphertext(&mut self) -> Result<Option<SubstitutionState>> {
        loop {
            let text = self
                .console
                .input("To begin, please paste the encrypted text (a single line):\n")?
                .unwrap_or_default();

            match SubstitutionState::from_ciphertext(&text) {
                Ok(state) => return Ok(Some(state)),
                Err(SolverError::EmptyInput) => {
                    warn!("empty ciphertext entered");
                    if !self.console.confirm("Couldn't read text, try again? (Y|n)\n")? {
                        info!("session abandoned before a ciphertext was entered");
                        return Ok(None);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn main_menu(&mut self, state: &mut SubstitutionState) -> Result<Flow> {
        self.console.clear()?;
        self.console
            .write(&[Span::heading("Current encrypted text with substitutions:\n\n")])?;
        self.console.write(&highlighted(state))?;
        self.console.write(&[Span::plain("\n")])?;

        match self.console.menu(&MAIN_MENU, false)? {
            MenuChoice::Selected(0) => self.edit_substitutions(state)?,
            MenuChoice::Selected(1) => self.show_statistics(state)?,
            MenuChoice::Selected(2) => self.show_key(state)?,
            MenuChoice::Selected(3) => return Ok(Flow::Exit),
            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn edit_substitutions(&mut self, state: &mut SubstitutionState) -> Result<()> {
        loop {
            self.console.clear()?;
            self.console.write(&[
                Span::heading("Encrypted text:\n\n"),
                Span::heading(format!("{}\n\n", state.ciphertext())),
                Span::heading("Encrypted text with current substitutions:\n\n"),
            ])?;
            self.console.write(&highlighted(state))?;
            self.console.write(&[Span::plain("\n")])?;

            match self.console.menu(&EDIT_MENU, false)? {
                MenuChoice::Selected(0) => {
                    let replaced = self.console.input("\n\nLetter to replace: \n")?;
                    let replacement = self.console.input("\nNew replacement letter: \n")?;

                    let cipher = replaced.as_deref().and_then(normalize_cipher_letter);
                    let plain = replacement.as_deref().and_then(normalize_plain_letter);
                    if let (Some(cipher), Some(plain)) = (cipher, plain) {
                        state.assign(cipher, plain);
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn show_statistics(&mut self, state: &mut SubstitutionState) -> Result<()> {
        self.console.clear()?;
        self.console.write(&[Span::plain("Letters by occurence in text:\n\n")])?;

        let table = self.language.heuristic_table();
        let ranking = state.frequency_ranking();
        info!(letters = ranking.len(), language = %self.language, "showing letter statistics");

        let lines: Vec<Span> = ranking
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let hint = table
                    .get(i)
                    .map(|likely| format!(", likely stands for '{likely}'"))
                    .unwrap_or_default();
                Span::new(
                    format!(
                        " {}x {} ({:>2}% of text{}) \n",
                        entry.count, entry.letter, entry.percent, hint
                    ),
                    Style::Highlight,
                )
            })
            .collect();
        self.console.write(&lines)?;
        self.console.write(&[Span::plain("\n\n")])?;

        if let MenuChoice::Selected(0) = self.console.menu(&STATISTICS_MENU, true)? {
            state.auto_assign_from_frequency(table);
        }
        Ok(())
    }

    fn show_key(&mut self, state: &SubstitutionState) -> Result<()> {
        self.console.clear()?;
        self.console.write(&[Span::heading("Current key:\n\n")])?;

        let mapping = state.mapping();
        if mapping.is_empty() {
            self.console.write(&[Span::plain("  (no substitutions yet)\n")])?;
        }
        let rows: Vec<Span> = mapping
            .iter()
            .flat_map(|(cipher, plain)| {
                [
                    Span::new(format!("  {cipher}"), Style::Accent),
                    Span::plain(" -> "),
                    Span::new(format!("{plain}\n"), Style::Substituted),
                ]
            })
            .collect();
        self.console.write(&rows)?;

        let json = serde_json::to_string(mapping).map_err(io::Error::from)?;
        self.console
            .write(&[Span::heading("\nAs JSON:\n"), Span::plain(format!("{json}\n\n"))])?;

        self.console.menu(&KEY_MENU, true)?;
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        info!("session finished");
        self.console.clear()?;
        self.console.write(&[Span::new(
            "Thanks for using the substitution solver! Have a nice day :)\n",
            Style::Farewell,
        )])?;
        Ok(())
    }
}

/// Rendered text as spans, one per run of equally styled characters.
pub fn highlighted(state: &SubstitutionState) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    for cell in state.render() {
        let style = if cell.substituted { Style::Substituted } else { Style::Unsubstituted };
        match spans.last_mut() {
            Some(last) if last.style == style => last.text.push(cell.ch),
            _ => spans.push(Span::new(cell.ch.to_string(), style)),
        }
    }
    spans
}
