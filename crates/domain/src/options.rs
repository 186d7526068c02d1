// crates/domain/src/options.rs
use std::{fmt, str::FromStr};

use list_tidy_shared_kernel::DomainError;
use serde::{Deserialize, Serialize};

/// Case conversion applied to every line before filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseConversion {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Titlecase,
    Camelcase,
    Snakecase,
}

impl CaseConversion {
    pub const ALL: [Self; 6] =
        [Self::None, Self::Uppercase, Self::Lowercase, Self::Titlecase, Self::Camelcase, Self::Snakecase];

    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Titlecase => "titlecase",
            Self::Camelcase => "camelcase",
            Self::Snakecase => "snakecase",
        }
    }
}

impl fmt::Display for CaseConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseConversion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "uppercase" | "upper" => Ok(Self::Uppercase),
            "lowercase" | "lower" => Ok(Self::Lowercase),
            "titlecase" | "title" => Ok(Self::Titlecase),
            "camelcase" | "camel" => Ok(Self::Camelcase),
            "snakecase" | "snake" => Ok(Self::Snakecase),
            _ => Err(DomainError::InvalidOption {
                field: "case conversion",
                value: s.to_string(),
                expected: "none, uppercase, lowercase, titlecase, camelcase, snakecase",
            }),
        }
    }
}

/// Final ordering of the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
    #[default]
    #[serde(rename = "none")]
    None,
}

impl SortDirection {
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
            Self::None => "none",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            "none" => Ok(Self::None),
            _ => Err(DomainError::InvalidOption {
                field: "sort direction",
                value: s.to_string(),
                expected: "asc, desc, none",
            }),
        }
    }
}
