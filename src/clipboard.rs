//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::{Error, Result};

/// Copy `text` to the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let mut ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    ctx.set_contents(text.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;

    // Read back so the provider owns the contents before the context drops.
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }

    log::debug!("copied {} chars to clipboard", text.chars().count());
    Ok(())
}
