//! Copy command: puts a component's original source on the clipboard.

use anyhow::Result;
use clap::Parser;
use meui_catalog::{ComponentSource, catalog};
use std::borrow::Cow;

use crate::cli::handlers::CommandContext;
use crate::clipboard::copy_to_clipboard;
use crate::styled_output::print_success;

/// Copy a component's original source to the clipboard.
#[derive(Debug, Parser)]
pub struct CopyCommand {
    /// Component key or display name
    #[arg(value_name = "COMPONENT")]
    pub component: String,

    /// Copy the import statement instead of the source
    #[arg(long)]
    pub import: bool,
}

impl CopyCommand {
    /// The text that goes on the clipboard: the original source, or the
    /// import statement with `--import`.
    pub fn payload<'a>(&self, component: &'a ComponentSource) -> Cow<'a, str> {
        if self.import {
            Cow::Owned(component.import_snippet())
        } else {
            Cow::Borrowed(component.source())
        }
    }

    /// Run the copy command.
    pub fn run(self, _ctx: &CommandContext) -> Result<()> {
        let component = catalog().get(&self.component)?;
        copy_to_clipboard(&self.payload(component))?;
        if self.import {
            print_success(&format!("Copied import for {}", component.display_name()));
        } else {
            print_success(&format!(
                "Copied {} ({} lines)",
                component.display_name(),
                component.line_count()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn command(import: bool) -> CopyCommand {
        CopyCommand {
            component: "BookingBar".to_string(),
            import,
        }
    }

    #[test]
    fn test_payload_is_original_source() {
        for component in catalog().iter() {
            let payload = command(false).payload(component);
            assert!(matches!(payload, Cow::Borrowed(_)));
            assert_eq!(payload.as_ref(), component.source());
        }
    }

    #[test]
    fn test_payload_with_import() {
        let component = catalog().get("BookingBar").unwrap();
        assert_eq!(
            command(true).payload(component),
            "import { BookingBar } from '@me-ui/react'"
        );
    }
}
