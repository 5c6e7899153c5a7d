//! Link registry service: creation, lookup, listing, deletion and click accounting.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkQuery, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_valid_code, validate_code};
use crate::utils::url_validator::validate_target;

/// Number of random codes tried before giving up on a create.
pub const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Service for creating and resolving shortened links.
///
/// Validates input, runs the bounded code generation loop and translates
/// "not there" results from the repository into [`AppError::NotFound`].
#[derive(Clone)]
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `target` - The URL to redirect to; must be absolute `http`/`https`
    /// - `custom_code` - Optional caller-chosen code; an empty string counts as absent
    ///
    /// # Code Generation
    ///
    /// Without a custom code, up to [`MAX_GENERATION_ATTEMPTS`] random
    /// 6-character codes are tried. A code is skipped if an active link already
    /// uses it or if the insert loses a race on the unique index.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidTarget`] if the target is missing or not an HTTP(S) URL
    /// - [`AppError::InvalidCodeFormat`] if the custom code is malformed
    /// - [`AppError::CodeConflict`] if the custom code is taken
    /// - [`AppError::GenerationExhausted`] if every generated code collided
    pub async fn create_link(
        &self,
        target: Option<String>,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        let target = target.ok_or(AppError::InvalidTarget)?;
        validate_target(&target).map_err(|e| {
            tracing::debug!(error = %e, "Rejected target");
            AppError::InvalidTarget
        })?;

        match custom_code.filter(|c| !c.is_empty()) {
            Some(code) => self.create_with_custom_code(code, target).await,
            None => self.create_with_generated_code(target).await,
        }
    }

    async fn create_with_custom_code(&self, code: String, target: String) -> Result<Link, AppError> {
        validate_code(&code)?;

        if self
            .link_repository
            .find_active_by_code(&code)
            .await?
            .is_some()
        {
            return Err(AppError::CodeConflict);
        }

        let link = self
            .link_repository
            .create(NewLink { code, target })
            .await?;

        tracing::info!(code = %link.code, target = %link.target, "Link created");
        Ok(link)
    }

    async fn create_with_generated_code(&self, target: String) -> Result<Link, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = generate_code();
            debug_assert!(is_valid_code(&code));

            if self
                .link_repository
                .find_active_by_code(&code)
                .await?
                .is_some()
            {
                tracing::warn!(attempt, code = %code, "Generated code collided");
                continue;
            }

            let new_link = NewLink {
                code,
                target: target.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    tracing::info!(code = %link.code, target = %link.target, attempt, "Link created");
                    return Ok(link);
                }
                Err(AppError::CodeConflict) => {
                    tracing::warn!(attempt, "Generated code taken by concurrent insert");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::error!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "Failed to generate unique code"
        );
        Err(AppError::GenerationExhausted)
    }

    /// Retrieves an active link by its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link is absent or deleted.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_active_by_code(code)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Lists active links, newest first.
    pub async fn list_links(&self, query: LinkQuery) -> Result<Vec<Link>, AppError> {
        self.link_repository.list(query).await
    }

    /// Soft-deletes an active link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link is absent or already deleted.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if self.link_repository.soft_delete(code).await? {
            tracing::info!(code, "Link deleted");
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }

    /// Records a redirect and returns the target to redirect to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link is absent or deleted; no
    /// click is recorded in that case.
    pub async fn record_click(&self, code: &str) -> Result<String, AppError> {
        let target = self
            .link_repository
            .record_click(code)
            .await?
            .ok_or(AppError::NotFound)?;

        tracing::debug!(code, "Click recorded");
        Ok(target)
    }

    /// Checks that the underlying store is reachable.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}
