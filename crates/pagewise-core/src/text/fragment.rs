//! The styled fragment tree.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ClickAction, Colour, Style};

/// An immutable tree of styled text.
///
/// Fragments compose by concatenation and the order of children is the order
/// of the rendered output. A fragment knows nothing about how it is finally
/// displayed; backends walk it through [`Fragment::runs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fragment {
    /// A literal run of text.
    Text(String),
    /// A subtree rendered with a style.
    Styled { style: Style, child: Box<Fragment> },
    /// Children rendered one after another.
    Concat(Vec<Fragment>),
}

/// A flattened piece of a fragment with its effective style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub style: Style,
}

impl Fragment {
    /// A literal text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// A fragment that renders nothing.
    pub fn empty() -> Self {
        Self::Concat(Vec::new())
    }

    pub fn concat(parts: impl IntoIterator<Item = Fragment>) -> Self {
        Self::Concat(parts.into_iter().collect())
    }

    /// Error-coloured message text.
    pub fn error(message: impl Into<String>) -> Self {
        Self::text(message).coloured(Colour::Error)
    }

    /// Wrap this fragment in a style.
    pub fn styled(self, style: Style) -> Self {
        Self::Styled {
            style,
            child: Box::new(self),
        }
    }

    pub fn coloured(self, colour: Colour) -> Self {
        self.styled(Style::coloured(colour))
    }

    /// Append `other` after this fragment.
    ///
    /// Appending to a concatenation extends it in place instead of nesting.
    pub fn append(self, other: Fragment) -> Self {
        match self {
            Self::Concat(mut parts) => {
                parts.push(other);
                Self::Concat(parts)
            }
            single => Self::Concat(vec![single, other]),
        }
    }

    /// Whether the fragment renders no text at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Styled { child, .. } => child.is_empty(),
            Self::Concat(parts) => parts.iter().all(Fragment::is_empty),
        }
    }

    /// The text of every run, styles dropped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain(&mut out);
        out
    }

    fn push_plain(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Styled { child, .. } => child.push_plain(out),
            Self::Concat(parts) => parts.iter().for_each(|part| part.push_plain(out)),
        }
    }

    /// Flatten the tree into text runs with inherited styles applied.
    ///
    /// Empty text runs are skipped.
    pub fn runs(&self) -> Vec<Run> {
        let mut runs = Vec::new();
        self.collect_runs(&Style::default(), &mut runs);
        runs
    }

    fn collect_runs(&self, inherited: &Style, runs: &mut Vec<Run>) {
        match self {
            Self::Text(text) if text.is_empty() => {}
            Self::Text(text) => runs.push(Run {
                text: text.clone(),
                style: inherited.clone(),
            }),
            Self::Styled { style, child } => child.collect_runs(&style.inherit(inherited), runs),
            Self::Concat(parts) => parts
                .iter()
                .for_each(|part| part.collect_runs(inherited, runs)),
        }
    }

    /// Every click action in document order.
    pub fn click_actions(&self) -> Vec<ClickAction> {
        self.runs()
            .into_iter()
            .filter_map(|run| run.style.click)
            .collect()
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Styled { child, .. } => write!(f, "{child}"),
            Self::Concat(parts) => parts.iter().try_for_each(|part| write!(f, "{part}")),
        }
    }
}
