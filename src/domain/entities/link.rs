//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with click metadata.
///
/// Represents the mapping between a short code and its target URL. Rows are
/// never physically removed; a deleted link keeps its counters and only has
/// `deleted` set. A soft-deleted code may later be reused by a new link with a
/// different `id`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target: String,
    pub total_clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        target: String,
        total_clicks: i64,
        last_clicked: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        deleted: bool,
    ) -> Self {
        Self {
            id,
            code,
            target,
            total_clicks,
            last_clicked,
            created_at,
            deleted,
        }
    }

    /// Returns true if the link is still served (not soft-deleted).
    pub fn is_active(&self) -> bool {
        !self.deleted
    }

    /// Returns true if the link has been redirected to at least once.
    pub fn was_clicked(&self) -> bool {
        self.last_clicked.is_some()
    }
}

/// Input data for creating a new link.
///
/// Counters and timestamps are assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub target: String,
}

/// Filter and paging options for listing links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkQuery {
    /// Case-sensitive substring matched against `code` and `target`.
    pub search: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl LinkQuery {
    pub const DEFAULT_LIMIT: i64 = 50;
    pub const MAX_LIMIT: i64 = 100;

    /// Builds a query from raw paging values.
    ///
    /// A missing or non-positive `limit` falls back to [`Self::DEFAULT_LIMIT`];
    /// anything above [`Self::MAX_LIMIT`] is clamped. A missing or negative
    /// `offset` becomes 0. An empty search string means no filter.
    pub fn new(search: Option<String>, limit: Option<i64>, offset: Option<i64>) -> Self {
        let limit = match limit {
            Some(l) if l > 0 => l.min(Self::MAX_LIMIT),
            _ => Self::DEFAULT_LIMIT,
        };
        let offset = offset.filter(|o| *o > 0).unwrap_or(0);

        Self {
            search: search.filter(|s| !s.is_empty()),
            limit,
            offset,
        }
    }

    /// Returns true if `link` passes the search filter.
    pub fn matches(&self, link: &Link) -> bool {
        match &self.search {
            Some(q) => link.code.contains(q.as_str()) || link.target.contains(q.as_str()),
            None => true,
        }
    }
}

impl Default for LinkQuery {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}
