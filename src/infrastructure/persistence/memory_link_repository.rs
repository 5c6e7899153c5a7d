//! Process-local implementation of link repository.
//!
//! Keeps every row (deleted ones included) in insertion order behind a single
//! mutex, so the existence check and insert of `create` and the increment of
//! `record_click` each happen inside one critical section.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use crate::domain::entities::{Link, LinkQuery, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Rows {
    next_id: i64,
    links: Vec<Link>,
}

impl Rows {
    fn active_mut(&mut self, code: &str) -> Option<&mut Link> {
        self.links
            .iter_mut()
            .find(|l| l.is_active() && l.code == code)
    }
}

/// In-memory link store with the same semantics as the PostgreSQL repository.
///
/// Data does not survive a restart. Selected with `STORAGE_BACKEND=memory`.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    rows: Mutex<Rows>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of rows, deleted ones included.
    pub fn len(&self) -> usize {
        self.rows.lock().links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut rows = self.rows.lock();

        if rows.active_mut(&new_link.code).is_some() {
            return Err(AppError::CodeConflict);
        }

        rows.next_id += 1;
        let link = Link::new(
            rows.next_id,
            new_link.code,
            new_link.target,
            0,
            None,
            Utc::now(),
            false,
        );
        rows.links.push(link.clone());

        Ok(link)
    }

    async fn find_active_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.rows.lock().active_mut(code).map(|l| l.clone()))
    }

    async fn list(&self, query: LinkQuery) -> Result<Vec<Link>, AppError> {
        let rows = self.rows.lock();

        // Rows are appended in creation order, so reverse iteration is newest first
        let links = rows
            .links
            .iter()
            .rev()
            .filter(|l| l.is_active() && query.matches(l))
            .skip(usize::try_from(query.offset).unwrap_or(0))
            .take(usize::try_from(query.limit).unwrap_or(0))
            .cloned()
            .collect();

        Ok(links)
    }

    async fn soft_delete(&self, code: &str) -> Result<bool, AppError> {
        match self.rows.lock().active_mut(code) {
            Some(link) => {
                link.deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn record_click(&self, code: &str) -> Result<Option<String>, AppError> {
        Ok(self.rows.lock().active_mut(code).map(|link| {
            link.total_clicks += 1;
            link.last_clicked = Some(Utc::now());
            link.target.clone()
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_link(code: &str, target: &str) -> NewLink {
        NewLink {
            code: code.to_string(),
            target: target.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryLinkRepository::new();
        let link = repo
            .create(new_link("abc123", "https://example.com"))
            .await
            .unwrap();

        assert_eq!(link.total_clicks, 0);
        assert!(link.last_clicked.is_none());

        let found = repo.find_active_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(found, link);
    }

    #[tokio::test]
    async fn test_create_duplicate_active_code() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("dup123", "https://example.com"))
            .await
            .unwrap();

        let result = repo.create(new_link("dup123", "https://another.com")).await;
        assert!(matches!(result, Err(AppError::CodeConflict)));
    }

    #[tokio::test]
    async fn test_deleted_code_can_be_reused() {
        let repo = InMemoryLinkRepository::new();
        let first = repo
            .create(new_link("reuse1", "https://one.com"))
            .await
            .unwrap();
        repo.record_click("reuse1").await.unwrap();
        assert!(repo.soft_delete("reuse1").await.unwrap());

        let second = repo
            .create(new_link("reuse1", "https://two.com"))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(second.total_clicks, 0);
        assert_eq!(repo.len(), 2);

        let found = repo.find_active_by_code("reuse1").await.unwrap().unwrap();
        assert_eq!(found.target, "https://two.com");
    }

    #[tokio::test]
    async fn test_soft_delete_twice() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("del123", "https://example.com"))
            .await
            .unwrap();

        assert!(repo.soft_delete("del123").await.unwrap());
        assert!(!repo.soft_delete("del123").await.unwrap());
        assert!(repo.find_active_by_code("del123").await.unwrap().is_none());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_record_click_increments() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("redir1", "https://example.com"))
            .await
            .unwrap();

        let target = repo.record_click("redir1").await.unwrap();
        assert_eq!(target.as_deref(), Some("https://example.com"));
        repo.record_click("redir1").await.unwrap();

        let link = repo.find_active_by_code("redir1").await.unwrap().unwrap();
        assert_eq!(link.total_clicks, 2);
        assert!(link.last_clicked.is_some());
    }

    #[tokio::test]
    async fn test_record_click_unknown_or_deleted() {
        let repo = InMemoryLinkRepository::new();
        assert!(repo.record_click("nope42").await.unwrap().is_none());

        repo.create(new_link("gone12", "https://example.com"))
            .await
            .unwrap();
        repo.soft_delete("gone12").await.unwrap();
        assert!(repo.record_click("gone12").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_newest_first_and_paged() {
        let repo = InMemoryLinkRepository::new();
        for i in 0..5 {
            repo.create(new_link(&format!("code{i:02}"), "https://example.com"))
                .await
                .unwrap();
        }
        repo.soft_delete("code04").await.unwrap();

        let all = repo.list(LinkQuery::default()).await.unwrap();
        let codes: Vec<_> = all.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["code03", "code02", "code01", "code00"]);

        let page = repo
            .list(LinkQuery::new(None, Some(2), Some(1)))
            .await
            .unwrap();
        let codes: Vec<_> = page.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["code02", "code01"]);
    }

    #[tokio::test]
    async fn test_list_search() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("search1", "https://example.com"))
            .await
            .unwrap();
        repo.create(new_link("other22", "https://other.com"))
            .await
            .unwrap();

        let found = repo
            .list(LinkQuery::new(Some("search".to_string()), None, None))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "search1");

        let by_target = repo
            .list(LinkQuery::new(Some("other.com".to_string()), None, None))
            .await
            .unwrap();
        assert_eq!(by_target.len(), 1);
        assert_eq!(by_target[0].code, "other22");
    }
}
