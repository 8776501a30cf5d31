//! Tags — an ordered list of labels attached to a blog.
//!
//! Storage keeps tags in a single comma-delimited text column. An empty list
//! is stored as no value at all.

use serde::{Deserialize, Serialize};

const SEPARATOR: &str = ",";

/// Ordered sequence of tag labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(Vec<String>);

impl Tags {
    /// Build from an explicit list, keeping order and content as given.
    #[must_use]
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    /// Parse free-form, comma-separated input such as `"rust, web"`.
    ///
    /// Entries are trimmed and blank entries are dropped.
    #[must_use]
    pub fn parse_list(input: &str) -> Self {
        Self(
            input
                .split(SEPARATOR)
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Rebuild from the stored column value.
    #[must_use]
    pub fn from_column(column: Option<&str>) -> Self {
        match column {
            Some(raw) if !raw.is_empty() => {
                Self(raw.split(SEPARATOR).map(str::to_string).collect())
            }
            _ => Self::default(),
        }
    }

    /// Render the stored column value, `None` when there are no tags.
    #[must_use]
    pub fn to_column(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(SEPARATOR))
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Tags {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl<'a> From<Vec<&'a str>> for Tags {
    fn from(values: Vec<&'a str>) -> Self {
        Self(values.into_iter().map(str::to_string).collect())
    }
}
