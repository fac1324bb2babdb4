//! Copying the share link to the system clipboard
//!
//! Uses `arboard` for cross-platform support. The clipboard is opened per
//! copy rather than held for the session, since most sessions never copy.

use crate::directory::Location;
use anyhow::{Context, Result};
use arboard::Clipboard;

/// Put the location's `href` on the clipboard and return what was copied
pub fn copy_share_link(location: &Location) -> Result<String> {
    let href = location.href();
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(href.clone())
        .context("Failed to set clipboard text")?;
    Ok(href)
}
