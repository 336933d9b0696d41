//! Interactive password generator.

use zeroize::{Zeroize, Zeroizing};

use passpal::Result;
use passpal::pass::{self, CharClass, HISTORY_LEN, History};
use passpal::rand::RandomSource;
use passpal::settings::Settings;

use super::{Action, Key, Status, View};
use crate::terminal::{DIM, Frame, RESET, check, label, strength_bar};

pub struct PasswordScreen {
    settings: Settings,
    current: Option<String>,
    history: History,
    status: Status,
    awaiting_history: bool,
    source: &'static str,
}

impl PasswordScreen {
    /// Open with `settings` and a first password already generated.
    pub fn open(settings: Settings, source: &'static str, rng: &mut dyn RandomSource) -> Self {
        let mut screen = Self {
            settings,
            current: None,
            history: History::new(),
            status: Status::Idle,
            awaiting_history: false,
            source,
        };
        screen.generate(rng);
        screen
    }
}

#[cfg(test)]
impl PasswordScreen {
    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    fn history(&self) -> &History {
        &self.history
    }

    fn status(&self) -> &Status {
        &self.status
    }
}

impl PasswordScreen {
    fn generate(&mut self, rng: &mut dyn RandomSource) {
        match pass::generate(self.settings.length, &self.settings.options, rng) {
            Ok(password) => {
                self.history.push(password.clone());
                if let Some(mut old) = self.current.replace(password) {
                    old.zeroize();
                }
            }
            Err(e) => self.status = Status::Error(e.to_string()),
        }
    }

    /// Preferences changed: new password, then persist.
    fn changed(&mut self, rng: &mut dyn RandomSource) -> Action {
        self.generate(rng);
        Action::Save
    }

    fn resize(&mut self, length: usize, rng: &mut dyn RandomSource) -> Action {
        let before = self.settings.length;
        self.settings.set_length(length);
        if self.settings.length == before {
            Action::Continue
        } else {
            self.changed(rng)
        }
    }

    fn copy_history(&mut self, digit: char) -> Action {
        let index = digit.to_digit(10).map_or(0, |d| d as usize);
        match index.checked_sub(1).and_then(|i| self.history.get(i)) {
            Some(password) => Action::Copy(Zeroizing::new(password.to_string())),
            None => {
                self.status = Status::Error(format!("No password at history #{digit}"));
                Action::Continue
            }
        }
    }

    fn render_options(&self, frame: &mut Frame) {
        frame.heading("Password Options").line(&format!(
            "  Length: {:<3} {DIM}(-/+ or \u{2190}/\u{2192}, {}-{}){RESET}",
            self.settings.length,
            Settings::MIN_LENGTH,
            Settings::MAX_LENGTH
        ));
        for (i, class) in CharClass::ALL.iter().enumerate() {
            let mark = if self.settings.options.is_enabled(*class) { "x" } else { " " };
            frame.line(&format!("  {}) [{mark}] {}", i + 1, class.label()));
        }
    }

    fn render_strength(&self, frame: &mut Frame, password: &str) {
        let score = pass::score(password, &self.settings.options);
        let checks = pass::indicators(password);
        let bits = pass::entropy_bits(
            checks.length,
            pass::charset::size(&self.settings.options),
        );

        frame
            .heading("Password Strength")
            .line(&format!(
                "  {}  {}",
                strength_bar(score),
                label(score.descriptor())
            ))
            .line(&format!(
                "  {} Length: {} chars      {} Lowercase letters",
                check(checks.long_enough),
                checks.length,
                check(checks.lowercase)
            ))
            .line(&format!(
                "  {} Uppercase letters     {} Numbers",
                check(checks.uppercase),
                check(checks.numbers)
            ))
            .line(&format!("  {} Special characters", check(checks.special)))
            .line(&format!(
                "  {DIM}Entropy: {bits:.1} bits ({}){RESET}",
                pass::entropy_strength(bits)
            ));
    }

    fn render_history(&self, frame: &mut Frame) {
        frame.heading(&format!("Password History (last {})", self.history.len()));
        if self.history.is_empty() {
            frame.line("  No passwords generated yet");
        }
        for (i, password) in self.history.iter().enumerate() {
            frame.line(&format!("  {}) {password}", i + 1));
        }
    }
}

impl View for PasswordScreen {
    fn render(&self) -> Frame {
        let mut frame = Frame::new("Password Generator");
        frame
            .centered("Create strong, secure passwords with customizable options")
            .blank();
        self.render_options(&mut frame);
        frame.blank().heading("Generated Password");

        match self.current.as_deref() {
            Some(password) => {
                frame.line(&format!("  {password}")).blank();
                self.render_strength(&mut frame, password);
            }
            None => {
                frame.line("  Press Space to create your password");
            }
        }
        frame.blank();
        self.render_history(&mut frame);

        frame
            .blank()
            .divider()
            .line("  Space/Enter) generate  |  1-4) toggle  |  c) copy  |  h) history")
            .line(&format!("  q/Esc) quit  |  entropy: {}", self.source))
            .close();
        self.status.draw(&mut frame);
        frame
    }

    fn handle(&mut self, key: Key, rng: &mut dyn RandomSource) -> Action {
        self.status = Status::Idle;

        if self.awaiting_history {
            self.awaiting_history = false;
            return match key {
                Key::Char(d @ '1'..='9') => self.copy_history(d),
                Key::Quit => Action::Quit,
                _ => Action::Continue,
            };
        }

        match key {
            Key::Quit => Action::Quit,
            Key::Enter | Key::Char(' ') => {
                self.generate(rng);
                Action::Continue
            }
            Key::Char(d @ '1'..='4') => {
                let index = d as usize - '1' as usize;
                self.settings.options.toggle(CharClass::ALL[index]);
                self.changed(rng)
            }
            Key::Char('+') | Key::Char('=') | Key::Right => {
                self.resize(self.settings.length + 1, rng)
            }
            Key::Char('-') | Key::Left => {
                self.resize(self.settings.length.saturating_sub(1), rng)
            }
            Key::Char('c') => match self.current.as_deref() {
                Some(password) => Action::Copy(Zeroizing::new(password.to_string())),
                None => Action::Continue,
            },
            Key::Char('h') if !self.history.is_empty() => {
                self.awaiting_history = true;
                self.status = Status::Info(format!(
                    "Copy which history entry? [1-{}]",
                    self.history.len().min(HISTORY_LEN)
                ));
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    fn copied(&mut self, result: Result<()>) {
        self.status = match result {
            Ok(()) => Status::Info("\u{2713} Copied to Clipboard!".into()),
            Err(e) => Status::Error(format!("Failed to copy password: {e}")),
        };
    }

    fn save(&mut self) {
        if let Err(e) = self.settings.save_to_file() {
            log::debug!("failed to save preferences: {e}");
            self.status = Status::Error(format!("Failed to save preferences: {e}"));
        }
    }
}

impl Drop for PasswordScreen {
    fn drop(&mut self) {
        if let Some(password) = self.current.as_mut() {
            password.zeroize();
        }
    }
}
