//! Identifier and selector newtypes shared by the catalog model and filter.

use crate::text::eq_ignore_case;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel category label meaning "no category restriction".
///
/// Compared case-sensitively: `"all"` is an ordinary category label.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Opaque product identifier assigned by the catalog backend.
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Category restriction applied by the filter.
pub enum CategorySelector {
    #[default]
    All,
    Named(String),
}

impl CategorySelector {
    /// Interpret a raw selector label. Only the exact string `All` is the
    /// sentinel.
    pub fn parse(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategorySelector::All
        } else {
            CategorySelector::Named(label.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategorySelector::All => ALL_CATEGORIES,
            CategorySelector::Named(label) => label,
        }
    }

    /// Whether an entry category passes this selector.
    ///
    /// A missing category only passes `All`.
    pub fn admits(&self, category: Option<&str>) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Named(label) => {
                category.is_some_and(|value| eq_ignore_case(value, label))
            }
        }
    }
}

impl From<&str> for CategorySelector {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_all_is_the_sentinel() {
        assert_eq!(CategorySelector::parse("All"), CategorySelector::All);
        assert_eq!(
            CategorySelector::parse("all"),
            CategorySelector::Named("all".to_string())
        );
    }

    #[test]
    fn named_selector_ignores_case_per_char() {
        let iris = CategorySelector::parse("iris");
        assert!(iris.admits(Some("İris")));
        assert!(iris.admits(Some("IRIS")));
        assert!(!iris.admits(None));

        let sigma = CategorySelector::parse("ΑΣ");
        assert!(sigma.admits(Some("ας")));
        assert!(sigma.admits(Some("ασ")));
        assert!(!sigma.admits(Some("α")));
    }
}
