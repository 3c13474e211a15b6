//! System clipboard access.
//!
//! Uses native clipboard APIs through arboard (X11/Wayland on Linux, native on
//! macOS/Windows). No OSC 52 escape sequences are written.

use anyhow::{Context, Result};

/// Copy text to the system clipboard.
///
/// The text is stored exactly as given.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Clipboard is not available")?;

    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;
        // X11/Wayland need the owner alive until a clipboard manager takes the data.
        clipboard
            .set()
            .wait()
            .text(text)
            .inspect_err(|e| tracing::warn!("Clipboard copy failed: {}", e))
            .context("Failed to copy to clipboard")?;
    }

    #[cfg(not(target_os = "linux"))]
    {
        clipboard
            .set_text(text)
            .inspect_err(|e| tracing::warn!("Clipboard copy failed: {}", e))
            .context("Failed to copy to clipboard")?;
    }

    tracing::debug!(bytes = text.len(), "copied to clipboard");
    Ok(())
}
