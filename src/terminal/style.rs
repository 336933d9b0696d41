//! ANSI styling and small inline widgets.

use passpal::palette;
use passpal::pass::{Descriptor, Score};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[38;5;11m";

const ORANGE: &str = "\x1b[38;5;208m";
const BLUE: &str = "\x1b[38;5;12m";

/// Foreground escape for a descriptor color name. Unknown names render
/// unstyled.
pub fn fg(color: &str) -> &'static str {
    match color {
        "red" => RED,
        "orange" => ORANGE,
        "yellow" => YELLOW,
        "blue" => BLUE,
        "green" => GREEN,
        _ => RESET,
    }
}

/// Printable width of `s`, ignoring CSI escape sequences.
pub fn visible_width(s: &str) -> usize {
    let mut chars = s.chars();
    let mut width = 0;
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            width += 1;
            continue;
        }
        // ESC '[' params... final byte in 0x40..=0x7E
        if chars.next() == Some('[') {
            for c in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&c) {
                    break;
                }
            }
        }
    }
    width
}

/// `#RRGGBB` printed on a block of its own color, with black or white text
/// depending on the background.
pub fn swatch(color: &str) -> String {
    let Some(rgb @ (r, g, b)) = palette::rgb(color) else {
        return color.to_string();
    };
    let text = if palette::is_light(rgb) { "\x1b[30m" } else { "\x1b[97m" };
    format!("\x1b[48;2;{r};{g};{b}m{text}   {color}   {RESET}")
}

pub const METER_WIDTH: usize = 40;

/// Bar filled in proportion to `score`, drawn in the descriptor color.
pub fn strength_bar(score: Score) -> String {
    let filled = METER_WIDTH * usize::from(score.value()) / usize::from(Score::MAX);
    format!(
        "{}{}{RESET}{DIM}{}{RESET}",
        fg(score.descriptor().color),
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(METER_WIDTH - filled)
    )
}

pub fn label(descriptor: &Descriptor) -> String {
    format!("{BOLD}{}{}{RESET}", fg(descriptor.color), descriptor.label)
}

/// Green tick or red cross.
pub fn check(ok: bool) -> String {
    if ok {
        format!("{GREEN}\u{2713}{RESET}")
    } else {
        format!("{RED}\u{2717}{RESET}")
    }
}
