//! Repository trait for short link data access.

use crate::domain::entities::{Link, LinkQuery, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Every read path ignores soft-deleted rows. Implementations must enforce
/// uniqueness of active codes themselves and express the click increment as a
/// single relative update.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new active link with zeroed counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeConflict`] if an active link already uses the code.
    /// Returns [`AppError::Database`] on storage errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds the active link with the given code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if absent or soft-deleted
    async fn find_active_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists active links, newest first.
    async fn list(&self, query: LinkQuery) -> Result<Vec<Link>, AppError>;

    /// Marks the active link with `code` as deleted.
    ///
    /// Returns `Ok(true)` if a link was deleted, `Ok(false)` if none was active.
    async fn soft_delete(&self, code: &str) -> Result<bool, AppError>;

    /// Increments `total_clicks` and sets `last_clicked = now` on the active
    /// link with `code`.
    ///
    /// Returns the link's target, or `Ok(None)` without touching any row if
    /// the code is absent or deleted.
    async fn record_click(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
