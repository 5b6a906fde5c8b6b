// File: src/console.rs
//! The interactive console the solver talks through.
//!
//! [`Console`] is the only I/O surface of a session. [`TerminalConsole`]
//! implements it on a real terminal with crossterm; tests drive the
//! interaction loop with a scripted implementation instead.

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// How a piece of text should look on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Heading,
    /// A plaintext letter taken from the substitution map.
    Substituted,
    /// A ciphertext letter with no substitution yet.
    Unsubstituted,
    /// Decorative emphasis with no meaning for the mapping.
    Accent,
    /// Statistics rows, drawn as a bar.
    Highlight,
    Error,
    Farewell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self { text: text.into(), style }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::Plain)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(text, Style::Heading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Selected(usize),
    Cancelled,
}

/// What a single key press does to an open prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step<T> {
    Ignore,
    /// Menu highlight moves to this index.
    Move(usize),
    Done(T),
    Interrupted,
}

fn is_ctrl_c(code: KeyCode, mods: KeyModifiers) -> bool {
    matches!(code, KeyCode::Char('c') | KeyCode::Char('C')) && mods.contains(KeyModifiers::CONTROL)
}

/// Key handling of the single-line menu. `len` must be non-zero.
fn menu_step(
    code: KeyCode,
    mods: KeyModifiers,
    selected: usize,
    len: usize,
    cancelable: bool,
) -> Step<MenuChoice> {
    if is_ctrl_c(code, mods) {
        return Step::Interrupted;
    }
    match code {
        KeyCode::Left | KeyCode::BackTab => Step::Move((selected + len - 1) % len),
        KeyCode::Right | KeyCode::Tab => Step::Move((selected + 1) % len),
        KeyCode::Char(d) => match d.to_digit(10) {
            Some(n) if (1..=len).contains(&(n as usize)) => {
                Step::Done(MenuChoice::Selected(n as usize - 1))
            }
            _ => Step::Ignore,
        },
        KeyCode::Enter => Step::Done(MenuChoice::Selected(selected)),
        KeyCode::Esc if cancelable => Step::Done(MenuChoice::Cancelled),
        _ => Step::Ignore,
    }
}

/// Key handling of the yes/no prompt: `y` or Enter, `n` or Esc.
fn confirm_step(code: KeyCode, mods: KeyModifiers) -> Step<bool> {
    if is_ctrl_c(code, mods) {
        return Step::Interrupted;
    }
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Step::Done(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Step::Done(false),
        _ => Step::Ignore,
    }
}

/// Throws away input that arrived before a prompt opened, such as the
/// remaining lines of a multi-line paste.
fn drain_pending_events() -> io::Result<()> {
    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    Ok(())
}

pub trait Console {
    /// Shows `hint` and reads one line. `None` when nothing was entered.
    fn input(&mut self, hint: &str) -> io::Result<Option<String>>;

    /// Single-line menu over `items`. Only a cancelable menu may return
    /// [`MenuChoice::Cancelled`].
    fn menu(&mut self, items: &[&str], cancelable: bool) -> io::Result<MenuChoice>;

    /// Yes/no question.
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;

    fn write(&mut self, spans: &[Span]) -> io::Result<()>;

    fn clear(&mut self) -> io::Result<()>;
}

/// Foreground, background and boldness of each style.
fn palette(style: Style) -> (Option<Color>, Option<Color>, bool) {
    match style {
        Style::Plain => (None, None, false),
        Style::Heading => (Some(Color::Green), None, false),
        Style::Substituted => (Some(Color::Green), None, true),
        Style::Unsubstituted | Style::Accent => (Some(Color::Blue), None, false),
        Style::Highlight => (Some(Color::Black), Some(Color::Blue), false),
        Style::Error => (Some(Color::Red), None, false),
        Style::Farewell => (Some(Color::Black), Some(Color::Magenta), false),
    }
}

/// Leaves raw mode when dropped, also on early return.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// [`Console`] on the process's own terminal.
pub struct TerminalConsole {
    stdout: io::Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self { stdout: io::stdout() }
    }

    fn queue_span(&mut self, span: &Span) -> io::Result<()> {
        let (fg, bg, bold) = palette(span.style);
        if let Some(color) = fg {
            queue!(self.stdout, SetForegroundColor(color))?;
        }
        if let Some(color) = bg {
            queue!(self.stdout, SetBackgroundColor(color))?;
        }
        if bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        queue!(self.stdout, Print(&span.text), SetAttribute(Attribute::Reset), ResetColor)
    }

    fn draw_menu(&mut self, items: &[&str], selected: usize) -> io::Result<()> {
        queue!(self.stdout, Print("\r"), Clear(ClearType::CurrentLine))?;
        for (i, item) in items.iter().enumerate() {
            if i == selected {
                queue!(
                    self.stdout,
                    SetAttribute(Attribute::Reverse),
                    Print(format!(" {item} ")),
                    SetAttribute(Attribute::Reset)
                )?;
            } else {
                queue!(self.stdout, Print(format!(" {item} ")))?;
            }
        }
        self.stdout.flush()
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

fn interrupted() -> io::Error {
    io::Error::new(io::ErrorKind::Interrupted, "interrupted by user")
}

impl Console for TerminalConsole {
    fn input(&mut self, hint: &str) -> io::Result<Option<String>> {
        self.write(&[Span::heading(hint)])?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        Ok((!line.is_empty()).then(|| line.to_string()))
    }

    fn menu(&mut self, items: &[&str], cancelable: bool) -> io::Result<MenuChoice> {
        if items.is_empty() {
            return Ok(MenuChoice::Cancelled);
        }
        let mut selected = 0;
        let choice = {
            let _raw = RawModeGuard::enable()?;
            drain_pending_events()?;
            loop {
                self.draw_menu(items, selected)?;
                let Event::Key(key) = event::read()? else { continue };
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match menu_step(key.code, key.modifiers, selected, items.len(), cancelable) {
                    Step::Move(next) => selected = next,
                    Step::Done(choice) => break choice,
                    Step::Interrupted => return Err(interrupted()),
                    Step::Ignore => {}
                }
            }
        };
        execute!(self.stdout, Print("\r\n"))?;
        Ok(choice)
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        self.write(&[Span::new(prompt, Style::Error)])?;
        let answer = {
            let _raw = RawModeGuard::enable()?;
            drain_pending_events()?;
            loop {
                let Event::Key(key) = event::read()? else { continue };
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match confirm_step(key.code, key.modifiers) {
                    Step::Done(answer) => break answer,
                    Step::Interrupted => return Err(interrupted()),
                    Step::Move(_) | Step::Ignore => {}
                }
            }
        };
        execute!(self.stdout, Print(if answer { "yes\r\n" } else { "no\r\n" }))?;
        Ok(answer)
    }

    fn write(&mut self, spans: &[Span]) -> io::Result<()> {
        for span in spans {
            self.queue_span(span)?;
        }
        self.stdout.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))
    }
}
