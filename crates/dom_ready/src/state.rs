//! Document readiness as reported by `document.readyState`.

use core::convert::Infallible;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;

/// Tri-state document readiness, plus a catch-all for values the host may
/// report that are not part of the standard set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum DocumentReadyState {
    /// The document is still being parsed.
    #[default]
    Loading,
    /// Parsing finished; subresources may still be loading.
    Interactive,
    /// The document and all subresources have loaded.
    Complete,
    /// A value outside the standard set. Treated like `Loading`.
    Other(String),
}

impl DocumentReadyState {
    /// Parse a `readyState` string. Unknown values are kept verbatim.
    pub fn parse(value: &str) -> Self {
        match value {
            "loading" => Self::Loading,
            "interactive" => Self::Interactive,
            "complete" => Self::Complete,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The string form as a script would observe it.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Loading => "loading",
            Self::Interactive => "interactive",
            Self::Complete => "complete",
            Self::Other(value) => value,
        }
    }

    /// Whether `DOMContentLoaded` can be considered already delivered.
    pub const fn is_content_loaded(&self) -> bool {
        matches!(self, Self::Interactive | Self::Complete)
    }
}

impl FromStr for DocumentReadyState {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(value))
    }
}

impl Display for DocumentReadyState {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::DocumentReadyState;

    #[test]
    fn standard_values_parse() {
        assert_eq!(DocumentReadyState::parse("loading"), DocumentReadyState::Loading);
        assert_eq!(
            DocumentReadyState::parse("interactive"),
            DocumentReadyState::Interactive
        );
        assert_eq!(DocumentReadyState::parse("complete"), DocumentReadyState::Complete);
    }

    #[test]
    fn unknown_value_is_preserved_and_not_loaded() {
        let state: DocumentReadyState = "prerender".parse().unwrap_or_default();
        assert_eq!(state, DocumentReadyState::Other("prerender".to_owned()));
        assert_eq!(state.to_string(), "prerender");
        assert!(!state.is_content_loaded());
    }

    #[test]
    fn only_interactive_and_complete_count_as_loaded() {
        assert!(!DocumentReadyState::Loading.is_content_loaded());
        assert!(DocumentReadyState::Interactive.is_content_loaded());
        assert!(DocumentReadyState::Complete.is_content_loaded());
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(
            DocumentReadyState::parse("Complete"),
            DocumentReadyState::Other("Complete".to_owned())
        );
    }
}
