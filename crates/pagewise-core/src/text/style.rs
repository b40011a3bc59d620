//! Style attributes attached to fragment runs.

use serde::{Deserialize, Serialize};

use super::Fragment;

/// Named colours understood by every rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Colour {
    /// Decorative and informational text (padding, brackets, hover hints).
    Info,
    /// Headings and the current page indicator.
    Heading,
    /// User-facing error messages.
    Error,
    /// Anything the user can activate.
    Command,
    /// Controls that exist but cannot be used right now.
    Disabled,
}

/// Action issued when a styled run is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickAction {
    /// Issue the contained command text verbatim.
    RunCommand(String),
}

impl ClickAction {
    /// The command text this action issues.
    pub fn command(&self) -> &str {
        match self {
            Self::RunCommand(command) => command,
        }
    }
}

/// Style of a fragment subtree.
///
/// Every attribute is optional; unset attributes are inherited from the
/// enclosing styled fragment when runs are flattened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<Colour>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<Box<Fragment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click: Option<ClickAction>,
}

impl Style {
    /// A style with no attributes set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a style that only sets a colour.
    pub fn coloured(colour: Colour) -> Self {
        Self::new().with_colour(colour)
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = Some(colour);
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Attach text shown while the pointer rests on the run.
    pub fn with_hover(mut self, hover: Fragment) -> Self {
        self.hover = Some(Box::new(hover));
        self
    }

    /// Attach a command issued when the run is activated.
    pub fn with_click(mut self, command: impl Into<String>) -> Self {
        self.click = Some(ClickAction::RunCommand(command.into()));
        self
    }

    /// Fill every unset attribute of `self` from `parent`.
    pub fn inherit(&self, parent: &Style) -> Style {
        Style {
            colour: self.colour.or(parent.colour),
            bold: self.bold.or(parent.bold),
            hover: self.hover.clone().or_else(|| parent.hover.clone()),
            click: self.click.clone().or_else(|| parent.click.clone()),
        }
    }

    /// Whether the run carries any interactive behaviour.
    pub fn is_interactive(&self) -> bool {
        self.hover.is_some() || self.click.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inherit_keeps_own_attributes() {
        let parent = Style::coloured(Colour::Info)
            .with_bold(true)
            .with_click("list 2");
        let child = Style::coloured(Colour::Heading);

        let merged = child.inherit(&parent);
        assert_eq!(merged.colour, Some(Colour::Heading));
        assert_eq!(merged.bold, Some(true));
        assert_eq!(merged.click, Some(ClickAction::RunCommand("list 2".to_string())));
    }

    #[test]
    fn test_interactive() {
        assert!(!Style::coloured(Colour::Disabled).is_interactive());
        assert!(Style::new().with_hover(Fragment::text("hi")).is_interactive());
        assert!(Style::new().with_click("list 1").is_interactive());
    }
}
