//! Leaving the terminal usable however the process ends.
//!
//! The interactive views run in raw mode with the cursor hidden. Normal
//! returns undo that through `terminal::Session`; this module covers
//! `exit`, signals and panics.

#[cfg(unix)]
use std::sync::OnceLock;
use std::sync::Once;

/// Show cursor, reset attributes.
const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";

/// Terminal settings captured at startup, after forcing cooked mode.
#[cfg(unix)]
static COOKED: OnceLock<libc::termios> = OnceLock::new();

static PANIC_HOOK: Once = Once::new();

/// Force cooked mode, remember it, and register cleanup for exit, signals
/// and panics. Call first thing in `main`.
pub fn install() {
    #[cfg(unix)]
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            // a previous run killed mid-screen can leave echo off
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
            let _ = COOKED.set(termios);
        }

        libc::atexit(at_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, on_signal as *const () as libc::sighandler_t);
        }
    }

    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore();
            previous(info);
        }));
    });
}

/// Put back the startup termios and, on a tty, the cursor.
fn restore() {
    #[cfg(unix)]
    unsafe {
        if let Some(termios) = COOKED.get() {
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, termios);
        }
        // raw write: the stdout lock may be held by whoever panicked
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            libc::write(
                libc::STDOUT_FILENO,
                RESTORE.as_ptr().cast::<libc::c_void>(),
                RESTORE.len(),
            );
        }
    }

    #[cfg(not(unix))]
    {
        use std::io::Write;
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = std::io::stdout().write_all(RESTORE);
    }
}

#[cfg(unix)]
extern "C" fn at_exit() {
    restore();
}

/// Exit with the conventional interrupted status; `at_exit` does the rest.
#[cfg(unix)]
extern "C" fn on_signal(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn harden() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn harden() {}
