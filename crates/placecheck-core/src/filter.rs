//! Collection filter parameters.

use std::fmt;

/// A single query filter narrowing the posts collection.
///
/// Each variant maps to exactly one query parameter. The remote service
/// answers a non-matching filter with an empty array, never with an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFilter {
    /// Filter by authoring user. Matches any number of posts.
    UserId(i64),
    /// Filter by post id. Matches at most one post.
    Id(i64),
    /// Filter by exact title. Matches at most one post.
    Title(String),
}

impl PostFilter {
    /// Query parameter name used by this filter.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UserId(_) => "userId",
            Self::Id(_) => "id",
            Self::Title(_) => "title",
        }
    }

    /// Render the filter as a `(name, value)` query pair.
    #[must_use]
    pub fn query_pair(&self) -> (&'static str, String) {
        let value = match self {
            Self::UserId(id) | Self::Id(id) => id.to_string(),
            Self::Title(title) => title.clone(),
        };
        (self.name(), value)
    }
}

impl fmt::Display for PostFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, value) = self.query_pair();
        write!(f, "{name}={value}")
    }
}
