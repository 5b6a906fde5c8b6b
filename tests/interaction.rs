//! Drives whole sessions through a scripted console.

use solver_core::console::{Console, MenuChoice, Span, Style};
use solver_core::core::types::Language;
use solver_core::{InteractionLoop, SessionEnd};
use std::collections::VecDeque;
use std::io;

#[derive(Debug)]
enum Answer {
    Input(Option<&'static str>),
    Menu(MenuChoice),
    Confirm(bool),
}

use Answer::*;

/// A menu as it was offered, with the screen content shown above it.
struct MenuShot {
    items: Vec<String>,
    cancelable: bool,
    screen: Vec<Span>,
}

impl MenuShot {
    fn text(&self) -> String {
        self.screen.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Replays canned answers and records the screen each time a menu opens.
#[derive(Default)]
struct ScriptedConsole {
    answers: VecDeque<Answer>,
    screen: Vec<Span>,
    menus: Vec<MenuShot>,
}

impl ScriptedConsole {
    fn new(answers: Vec<Answer>) -> Self {
        Self { answers: answers.into(), ..Self::default() }
    }

    fn next(&mut self) -> io::Result<Answer> {
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn text(&self) -> String {
        self.screen.iter().map(|s| s.text.as_str()).collect()
    }

    fn menus_with(&self, items: &[&str]) -> Vec<&MenuShot> {
        self.menus.iter().filter(|m| m.items == items).collect()
    }
}

impl Console for ScriptedConsole {
    fn input(&mut self, hint: &str) -> io::Result<Option<String>> {
        self.screen.push(Span::heading(hint));
        match self.next()? {
            Input(text) => Ok(text.map(str::to_string)),
            other => panic!("expected input answer for {hint:?}, got {other:?}"),
        }
    }

    fn menu(&mut self, items: &[&str], cancelable: bool) -> io::Result<MenuChoice> {
        self.menus.push(MenuShot {
            items: items.iter().map(|s| s.to_string()).collect(),
            cancelable,
            screen: self.screen.clone(),
        });
        match self.next()? {
            Menu(choice) => Ok(choice),
            other => panic!("expected menu answer for {items:?}, got {other:?}"),
        }
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        self.screen.push(Span::plain(prompt));
        match self.next()? {
            Confirm(yes) => Ok(yes),
            other => panic!("expected confirm answer, got {other:?}"),
        }
    }

    fn write(&mut self, spans: &[Span]) -> io::Result<()> {
        self.screen.extend_from_slice(spans);
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.screen.clear();
        Ok(())
    }
}

const MAIN: [&str; 4] = ["Edit substitutions", "Show letter statistics", "Show key", "Exit"];
const EDIT: [&str; 2] = ["Edit substitution", "Back"];
const STATS: [&str; 2] = ["Automatically assign to substitutions", "Back"];
const KEY: [&str; 1] = ["Back"];

fn pick(i: usize) -> Answer {
    Menu(MenuChoice::Selected(i))
}

fn run(language: Language, answers: Vec<Answer>) -> (SessionEnd, ScriptedConsole) {
    let mut console = ScriptedConsole::new(answers);
    let end = InteractionLoop::new(&mut console, language).run().unwrap();
    assert!(console.answers.is_empty(), "unused answers: {:?}", console.answers);
    (end, console)
}

#[test]
fn declining_retry_abandons_the_session() {
    let (end, console) = run(Language::German, vec![Input(None), Confirm(false)]);

    assert_eq!(end, SessionEnd::Abandoned);
    assert!(console.menus.is_empty());
    assert!(console.text().contains("Thanks for using the substitution solver"));
}

#[test]
fn blank_text_is_prompted_again_until_accepted() {
    let (end, console) = run(
        Language::German,
        vec![Input(Some("   ")), Confirm(true), Input(Some("xyz")), pick(3)],
    );

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(console.menus_with(&MAIN).len(), 1);
    assert!(console.menus[0].text().contains("XYZ"));
}

#[test]
fn reassigned_plain_letter_moves_to_the_new_cipher_letter() {
    let (_, console) = run(
        Language::German,
        vec![
            Input(Some("XYZ")),
            pick(0),
            pick(0),
            Input(Some("xenon")),
            Input(Some("Apple")),
            pick(0),
            Input(Some("y")),
            Input(Some("a")),
            pick(1),
            pick(2),
            Menu(MenuChoice::Cancelled),
            pick(3),
        ],
    );

    let edits = console.menus_with(&EDIT);
    assert_eq!(edits.len(), 3);
    assert!(edits[1].text().ends_with("aYZ\n"), "{}", edits[1].text());
    assert!(edits[2].text().ends_with("XaZ\n"), "{}", edits[2].text());

    let key = console.menus_with(&KEY);
    assert!(key[0].cancelable);
    assert!(key[0].text().contains(r#"{"Y":"a"}"#), "{}", key[0].text());
}

#[test]
fn key_listing_does_not_reuse_the_unsubstituted_style() {
    let (_, console) = run(
        Language::German,
        vec![
            Input(Some("QR")),
            pick(0),
            pick(0),
            Input(Some("q")),
            Input(Some("e")),
            pick(1),
            pick(2),
            pick(0),
            pick(3),
        ],
    );

    let key = console.menus_with(&KEY);
    let screen = &key[0].screen;
    assert!(screen.contains(&Span::new("  Q", Style::Accent)));
    assert!(screen.contains(&Span::new("e\n", Style::Substituted)));
    assert!(screen.iter().all(|s| s.style != Style::Unsubstituted));
}

#[test]
fn edit_without_both_letters_changes_nothing() {
    let (_, console) = run(
        Language::German,
        vec![Input(Some("AB")), pick(0), pick(0), Input(Some("a")), Input(None), pick(1), pick(3)],
    );

    let main = console.menus_with(&MAIN);
    assert!(main[1].text().ends_with("AB\n"), "{}", main[1].text());
}

#[test]
fn statistics_auto_assign_uses_the_configured_language() {
    let (_, console) = run(
        Language::English,
        vec![Input(Some("aaab")), pick(1), pick(0), pick(3)],
    );

    let stats = console.menus_with(&STATS);
    assert!(stats[0].cancelable);
    let text = stats[0].text();
    assert!(text.contains(" 3x A (75% of text, likely stands for 'E') \n"), "{text}");
    assert!(text.contains(" 1x B (25% of text, likely stands for 'T') \n"), "{text}");

    let rows: Vec<&Span> = stats[0].screen.iter().filter(|s| s.text.contains("% of text")).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|s| s.style == Style::Highlight));

    let main = console.menus_with(&MAIN);
    assert!(main[1].screen.contains(&Span::new("eeet", Style::Substituted)));
}

#[test]
fn heuristic_hint_stops_after_the_table() {
    let (_, console) = run(
        Language::German,
        vec![Input(Some("ABCDEFGHIJKL")), pick(1), pick(1), pick(3)],
    );

    let text = console.menus_with(&STATS)[0].text();
    assert!(text.contains(" 1x J ( 8% of text, likely stands for 'U') \n"), "{text}");
    assert!(text.contains(" 1x K ( 8% of text) \n"), "{text}");
}

#[test]
fn main_screen_highlights_substituted_letters() {
    let (_, console) = run(
        Language::German,
        vec![Input(Some("AB")), pick(0), pick(0), Input(Some("b")), Input(Some("e")), pick(1), pick(3)],
    );

    let main = console.menus_with(&MAIN);
    assert!(!main[0].cancelable);
    let screen = &main[1].screen;
    assert!(screen.contains(&Span::new("A", Style::Unsubstituted)));
    assert!(screen.contains(&Span::new("e", Style::Substituted)));
}
