use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operators a criterion can apply.
///
/// The serialized form matches the backend enum (`EQUALS`, `INCLUDES_ALL`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CriterionModifier {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    IsNull,
    NotNull,
    IncludesAll,
    Includes,
    Excludes,
    MatchesRegex,
    NotMatchesRegex,
    Between,
    NotBetween,
}

impl CriterionModifier {
    pub const ALL: [CriterionModifier; 13] = [
        CriterionModifier::Equals,
        CriterionModifier::NotEquals,
        CriterionModifier::GreaterThan,
        CriterionModifier::LessThan,
        CriterionModifier::IsNull,
        CriterionModifier::NotNull,
        CriterionModifier::IncludesAll,
        CriterionModifier::Includes,
        CriterionModifier::Excludes,
        CriterionModifier::MatchesRegex,
        CriterionModifier::NotMatchesRegex,
        CriterionModifier::Between,
        CriterionModifier::NotBetween,
    ];

    /// Wire name used by the backend and in URL fragments
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionModifier::Equals => "EQUALS",
            CriterionModifier::NotEquals => "NOT_EQUALS",
            CriterionModifier::GreaterThan => "GREATER_THAN",
            CriterionModifier::LessThan => "LESS_THAN",
            CriterionModifier::IsNull => "IS_NULL",
            CriterionModifier::NotNull => "NOT_NULL",
            CriterionModifier::IncludesAll => "INCLUDES_ALL",
            CriterionModifier::Includes => "INCLUDES",
            CriterionModifier::Excludes => "EXCLUDES",
            CriterionModifier::MatchesRegex => "MATCHES_REGEX",
            CriterionModifier::NotMatchesRegex => "NOT_MATCHES_REGEX",
            CriterionModifier::Between => "BETWEEN",
            CriterionModifier::NotBetween => "NOT_BETWEEN",
        }
    }

    /// Phrase used when rendering a criterion as a filter chip
    pub fn label(&self) -> &'static str {
        match self {
            CriterionModifier::Equals => "is",
            CriterionModifier::NotEquals => "is not",
            CriterionModifier::GreaterThan => "greater than",
            CriterionModifier::LessThan => "less than",
            CriterionModifier::IsNull => "is null",
            CriterionModifier::NotNull => "is not null",
            CriterionModifier::IncludesAll => "includes all",
            CriterionModifier::Includes => "includes",
            CriterionModifier::Excludes => "excludes",
            CriterionModifier::MatchesRegex => "matches regex",
            CriterionModifier::NotMatchesRegex => "does not match regex",
            CriterionModifier::Between => "between",
            CriterionModifier::NotBetween => "not between",
        }
    }

    /// Null checks carry no value.
    pub fn is_null_check(&self) -> bool {
        matches!(self, CriterionModifier::IsNull | CriterionModifier::NotNull)
    }

    /// Range modifiers need both bounds.
    pub fn is_range(&self) -> bool {
        matches!(self, CriterionModifier::Between | CriterionModifier::NotBetween)
    }

    pub fn is_regex(&self) -> bool {
        matches!(
            self,
            CriterionModifier::MatchesRegex | CriterionModifier::NotMatchesRegex
        )
    }
}

impl fmt::Display for CriterionModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriterionModifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CriterionModifier::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown criterion modifier: {}", s))
    }
}

/// Shared modifier sets, ordered as they are offered to the user
pub(crate) mod sets {
    use super::CriterionModifier::{self, *};

    pub const STRING: &[CriterionModifier] = &[
        Equals,
        NotEquals,
        Includes,
        Excludes,
        MatchesRegex,
        NotMatchesRegex,
        IsNull,
        NotNull,
    ];
    pub const MANDATORY_STRING: &[CriterionModifier] = &[
        Equals,
        NotEquals,
        Includes,
        Excludes,
        MatchesRegex,
        NotMatchesRegex,
    ];
    pub const NUMBER: &[CriterionModifier] = &[
        Equals,
        NotEquals,
        GreaterThan,
        LessThan,
        Between,
        NotBetween,
        IsNull,
        NotNull,
    ];
    pub const MANDATORY_NUMBER: &[CriterionModifier] =
        &[Equals, NotEquals, GreaterThan, LessThan, Between, NotBetween];
    pub const RELATION: &[CriterionModifier] = &[Includes, Excludes, IsNull, NotNull];
    pub const GENDER: &[CriterionModifier] = &[Equals, NotEquals];
    pub const RESOLUTION: &[CriterionModifier] = &[Equals, NotEquals, GreaterThan, LessThan];
    pub const SINGLE: &[CriterionModifier] = &[Equals];
}
