//! Boxed screens built off-screen and written in one go.
//!
//! Rows end in `\r\n` so a frame renders the same with raw mode on or off.

use std::fmt::Write as _;
use std::io::{self, Write};

use super::style::{RESET, UNDERLINE, visible_width};

/// Outer width of the box, borders included.
pub const WIDTH: usize = 74;

const INNER: usize = WIDTH - 4;

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
}

/// A screen worth of box-drawn text.
#[derive(Debug, Default)]
pub struct Frame {
    buf: String,
}

impl Frame {
    /// Start a box with `title` set into the top border.
    pub fn new(title: &str) -> Self {
        let mut frame = Self::default();
        let title = format!("\u{2500} {title} ");
        let fill = (WIDTH - 2).saturating_sub(visible_width(&title));
        frame.edge('\u{250c}', &format!("{title}{}", "\u{2500}".repeat(fill)), '\u{2510}');
        frame
    }

    pub fn line(&mut self, content: &str) -> &mut Self {
        self.row(content, Align::Left)
    }

    pub fn centered(&mut self, content: &str) -> &mut Self {
        self.row(content, Align::Center)
    }

    pub fn blank(&mut self) -> &mut Self {
        self.row("", Align::Left)
    }

    /// Underlined section title.
    pub fn heading(&mut self, title: &str) -> &mut Self {
        self.line(&format!("{UNDERLINE}{title}{RESET}:"))
    }

    /// Horizontal divider joined to the side borders.
    pub fn divider(&mut self) -> &mut Self {
        self.edge('\u{251c}', &"\u{2500}".repeat(WIDTH - 2), '\u{2524}')
    }

    /// Close the box. Anything added afterwards goes below it unframed.
    pub fn close(&mut self) -> &mut Self {
        self.edge('\u{2514}', &"\u{2500}".repeat(WIDTH - 2), '\u{2518}')
    }

    /// Unframed line, used for the status message under the box.
    pub fn footer(&mut self, content: &str) -> &mut Self {
        let _ = write!(self.buf, "{content}\r\n");
        self
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Clear the terminal and draw the frame from the top-left corner.
    pub fn present(&self) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(b"\x1b[2J\x1b[3J\x1b[H")?;
        out.write_all(self.buf.as_bytes())?;
        out.flush()
    }

    fn edge(&mut self, left: char, fill: &str, right: char) -> &mut Self {
        let _ = write!(self.buf, "{left}{fill}{right}\r\n");
        self
    }

    fn row(&mut self, content: &str, align: Align) -> &mut Self {
        // Overlong content spills past the border rather than being cut.
        let pad = INNER.saturating_sub(visible_width(content));
        let (before, after) = match align {
            Align::Left => (0, pad),
            Align::Center => (pad / 2, pad - pad / 2),
        };
        let _ = write!(
            self.buf,
            "\u{2502} {}{content}{} \u{2502}\r\n",
            " ".repeat(before),
            " ".repeat(after)
        );
        self
    }
}
