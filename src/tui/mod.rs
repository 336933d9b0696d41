//! Interactive full-screen views.

mod palette;
mod password;

use std::io;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};
use zeroize::Zeroizing;

use passpal::Result;
use passpal::rand::{RandomSource, Source};
use passpal::settings::Settings;

use crate::cli::Screen;
use crate::terminal::{Frame, GREEN, RED, RESET, Session};

pub use palette::PaletteScreen;
pub use password::PasswordScreen;

/// Run an interactive screen until the user quits.
pub fn run(screen: Screen, source: Source) -> Result<()> {
    let mut rng = source.rng();
    log::debug!("opening {screen:?} screen, entropy from {}", source.name());

    match screen {
        Screen::Password => {
            let settings = Settings::load_or_default();
            let mut view = PasswordScreen::open(settings, source.name(), rng.as_mut());
            event_loop(&mut view, rng.as_mut())
        }
        Screen::Palette => {
            let mut view = PaletteScreen::new(rng.as_mut());
            event_loop(&mut view, rng.as_mut())
        }
    }
}

/// Decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Left,
    Right,
    Quit,
    /// Anything else, including resizes. Triggers a redraw.
    Other,
}

/// What the run loop should do after a key.
pub enum Action {
    Continue,
    Quit,
    /// Persist the current preferences.
    Save,
    /// Put this text on the clipboard.
    Copy(Zeroizing<String>),
}

/// One-line message under the box.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Info(String),
    Error(String),
}

impl Status {
    /// Append under the closed box.
    fn draw(&self, frame: &mut Frame) {
        match self {
            Status::Idle => frame.footer(""),
            Status::Info(msg) => frame.footer(&format!("{GREEN}{msg}{RESET}")),
            Status::Error(msg) => frame.footer(&format!("{RED}{msg}{RESET}")),
        };
    }
}

/// Block until the next key press.
fn next_key() -> io::Result<Key> {
    loop {
        match read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                return Ok(match key.code {
                    KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Key::Quit,
                    KeyCode::Esc | KeyCode::Char('q') => Key::Quit,
                    KeyCode::Char(c) => Key::Char(c),
                    KeyCode::Enter => Key::Enter,
                    KeyCode::Left => Key::Left,
                    KeyCode::Right => Key::Right,
                    _ => Key::Other,
                });
            }
            Event::Resize(..) => return Ok(Key::Other),
            _ => {}
        }
    }
}

/// A full-screen view driven by key presses.
pub trait View {
    fn render(&self) -> Frame;

    fn handle(&mut self, key: Key, rng: &mut dyn RandomSource) -> Action;

    /// Outcome of an [`Action::Copy`].
    fn copied(&mut self, result: Result<()>);

    /// Carry out an [`Action::Save`].
    fn save(&mut self) {}
}

/// Raw-mode event loop shared by both screens.
fn event_loop<V: View>(view: &mut V, rng: &mut dyn RandomSource) -> Result<()> {
    let _session = Session::start()?;

    loop {
        view.render().present()?;

        match view.handle(next_key()?, rng) {
            Action::Continue => {}
            Action::Quit => break,
            Action::Save => view.save(),
            Action::Copy(text) => view.copied(passpal::clipboard::copy(&text)),
        }
    }

    Ok(())
}
