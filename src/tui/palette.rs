//! Interactive palette generator.

use zeroize::Zeroizing;

use passpal::Result;
use passpal::palette::{self, PALETTE_SIZE};
use passpal::rand::RandomSource;

use super::{Action, Key, Status, View};
use crate::terminal::{Frame, GREEN, RESET, swatch};

pub struct PaletteScreen {
    colors: Vec<String>,
    copied: Option<usize>,
    pending: Option<usize>,
    status: Status,
}

impl PaletteScreen {
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        Self {
            colors: palette::generate(rng, PALETTE_SIZE),
            copied: None,
            pending: None,
            status: Status::Idle,
        }
    }

}

#[cfg(test)]
impl PaletteScreen {
    fn colors(&self) -> &[String] {
        &self.colors
    }

    fn copied_index(&self) -> Option<usize> {
        self.copied
    }
}

impl View for PaletteScreen {
    fn render(&self) -> Frame {
        let mut frame = Frame::new("Color Palette Generator");
        frame
            .centered("Press a number to copy a color, or Space for a new palette")
            .blank();

        for (i, color) in self.colors.iter().enumerate() {
            let marker = if self.copied == Some(i) {
                format!("{GREEN}\u{2713} Copied!{RESET}")
            } else {
                String::new()
            };
            frame
                .line(&format!("  {}) {}  {marker}", i + 1, swatch(color)))
                .blank();
        }

        frame
            .divider()
            .line("  Space) new palette  |  1-5) copy color  |  q/Esc) quit")
            .close();
        self.status.draw(&mut frame);
        frame
    }

    fn handle(&mut self, key: Key, rng: &mut dyn RandomSource) -> Action {
        self.status = Status::Idle;

        match key {
            Key::Quit => Action::Quit,
            Key::Char(' ') | Key::Enter => {
                self.colors = palette::generate(rng, PALETTE_SIZE);
                self.copied = None;
                Action::Continue
            }
            Key::Char(d @ '1'..='9') => {
                let index = d as usize - '1' as usize;
                match self.colors.get(index) {
                    Some(color) => {
                        self.pending = Some(index);
                        Action::Copy(Zeroizing::new(color.clone()))
                    }
                    None => Action::Continue,
                }
            }
            _ => Action::Continue,
        }
    }

    fn copied(&mut self, result: Result<()>) {
        match result {
            Ok(()) => self.copied = self.pending.take(),
            Err(e) => {
                self.pending = None;
                self.status = Status::Error(format!("Failed to copy color: {e}"));
            }
        }
    }
}
