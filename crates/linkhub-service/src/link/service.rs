//! Shared link CRUD service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use linkhub_core::error::AppError;
use linkhub_entity::link::{ExpirationOption, LinkOrigin, LinkStatus, LinkUpdate, SharedLink};
use linkhub_store::adapter::LinkStore;
use linkhub_store::provider::StoreManager;

use super::expiry::ExpiryCalculator;
use super::lifecycle;
use super::token::{TokenGenerator, extract_token};

/// Manages shared link creation, listing, revocation, and deletion.
#[derive(Debug, Clone)]
pub struct LinkService {
    /// Persisted link store.
    store: Arc<StoreManager>,
    /// Token generator for new links.
    tokens: TokenGenerator,
    /// Expiry policy calculator.
    expiry: ExpiryCalculator,
    /// Base URL prefixed to derived share URLs.
    base_url: String,
}

/// Request to create a new shared link.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateLinkRequest {
    /// Creator identity. Opaque to the core.
    pub created_by: String,
    /// Company IDs scoping the visible data.
    pub company_ids: Vec<String>,
    /// UI surface the share was initiated from.
    pub origin: LinkOrigin,
    /// Opaque report filters, copied verbatim.
    pub filters: Option<serde_json::Value>,
    /// Expiration preset.
    pub expiration: ExpirationOption,
    /// Absolute expiry instant for the `custom` preset.
    pub custom_expiration: Option<DateTime<Utc>>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(store: Arc<StoreManager>, token_length: usize, base_url: impl Into<String>) -> Self {
        Self {
            store,
            tokens: TokenGenerator::new(token_length),
            expiry: ExpiryCalculator::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a new shared link and persists it as `Active`.
    ///
    /// Creation-time input problems are defensively defaulted, never
    /// rejected: an empty company scope falls back to the creator identity,
    /// and a non-future custom expiration falls back to 24 hours.
    pub async fn create_link(&self, req: CreateLinkRequest) -> Result<SharedLink, AppError> {
        let now = Utc::now();
        let mut links = self.store.load_all_links().await?;

        let mut company_ids: Vec<String> = Vec::new();
        for company in req.company_ids {
            if !company_ids.contains(&company) {
                company_ids.push(company);
            }
        }
        if company_ids.is_empty() {
            company_ids.push(req.created_by.clone());
        }

        // Collision against the existing collection is vanishingly rare at
        // 32 symbols, but the retry must still happen.
        let mut id = self.tokens.generate();
        while links.iter().any(|l| l.id == id) {
            id = self.tokens.generate();
        }

        let expires_at = self.expiry.compute(now, req.expiration, req.custom_expiration);

        let link = SharedLink {
            url: self.share_url(&id),
            id,
            created_by: req.created_by,
            company_ids,
            origin: req.origin,
            filters: req.filters,
            created_at: now,
            expires_at,
            status: LinkStatus::Active,
            access_count: 0,
        };

        links.push(link.clone());
        self.store.save_all_links(&links).await?;

        info!(
            link_id = %link.id,
            created_by = %link.created_by,
            origin = ?link.origin,
            expires_at = %link.expires_at,
            "Shared link created"
        );

        Ok(link)
    }

    /// Lists links, optionally restricted to those scoping a company.
    ///
    /// Runs the lazy-expiry pass first so no returned link reports a stale
    /// `Active` status.
    pub async fn list_links(&self, company_id: Option<&str>) -> Result<Vec<SharedLink>, AppError> {
        let links = self.load_with_expiry_pass().await?;
        Ok(match company_id {
            Some(company) => links.into_iter().filter(|l| l.scoped_to(company)).collect(),
            None => links,
        })
    }

    /// Looks up a single link by token or URL suffix, in any status.
    ///
    /// Returns `None` for unknown tokens rather than erroring.
    pub async fn get_link(&self, token: &str) -> Result<Option<SharedLink>, AppError> {
        let links = self.store.load_all_links().await?;
        let needle = extract_token(token);
        let Some(mut link) = links.into_iter().find(|l| l.id == needle) else {
            return Ok(None);
        };

        let effective = lifecycle::effective_status(&link, Utc::now());
        if effective != link.status {
            self.persist_transition(&link.id, effective).await;
            link.status = effective;
        }
        Ok(Some(link))
    }

    /// Revokes a link unconditionally, bypassing expiry checks.
    ///
    /// Returns `false` if no such link exists. Revocation is terminal.
    pub async fn revoke_link(&self, id: &str) -> Result<bool, AppError> {
        let found = self
            .store
            .update_link_by_id(id, LinkUpdate::status(LinkStatus::Revoked))
            .await?;

        if found {
            info!(link_id = %id, "Shared link revoked");
        }
        Ok(found)
    }

    /// Permanently deletes a link record. Returns `false` if absent.
    pub async fn delete_link(&self, id: &str) -> Result<bool, AppError> {
        let mut links = self.store.load_all_links().await?;
        let before = links.len();
        links.retain(|l| l.id != id);
        if links.len() == before {
            return Ok(false);
        }

        self.store.save_all_links(&links).await?;
        info!(link_id = %id, "Shared link deleted");
        Ok(true)
    }

    /// Links that are still active but will expire within the next `hours`.
    ///
    /// Already-expired and revoked links are strictly excluded; this drives
    /// proactive expiry notification.
    pub async fn expiring_within(&self, hours: i64) -> Result<Vec<SharedLink>, AppError> {
        let links = self.load_with_expiry_pass().await?;
        let now = Utc::now();
        let horizon = now + Duration::hours(hours);
        Ok(links
            .into_iter()
            .filter(|l| {
                l.status == LinkStatus::Active && now < l.expires_at && l.expires_at <= horizon
            })
            .collect())
    }

    /// Derive the public URL for a token.
    fn share_url(&self, id: &str) -> String {
        format!("{}/shared/{id}", self.base_url.trim_end_matches('/'))
    }

    /// Load the collection with the lazy-expiry pass applied and
    /// write-through persisted best-effort.
    async fn load_with_expiry_pass(&self) -> Result<Vec<SharedLink>, AppError> {
        let mut links = self.store.load_all_links().await?;
        if lifecycle::apply_expiry_pass(&mut links, Utc::now()) {
            if let Err(e) = self.store.save_all_links(&links).await {
                warn!(error = %e, "Failed to persist lazy expiry transitions");
            }
        }
        Ok(links)
    }

    /// Best-effort write-back of a single lazy transition.
    async fn persist_transition(&self, id: &str, status: LinkStatus) {
        if let Err(e) = self
            .store
            .update_link_by_id(id, LinkUpdate::status(status))
            .await
        {
            warn!(link_id = %id, error = %e, "Failed to persist expiry transition");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkhub_store::memory::MemoryLinkStore;

    fn make_service() -> (LinkService, Arc<StoreManager>) {
        let store = Arc::new(StoreManager::from_provider(Arc::new(
            MemoryLinkStore::new(100),
        )));
        let service = LinkService::new(Arc::clone(&store), 32, "https://app.example.com");
        (service, store)
    }

    fn create_request(company_ids: Vec<&str>) -> CreateLinkRequest {
        CreateLinkRequest {
            created_by: "user-1".to_string(),
            company_ids: company_ids.into_iter().map(String::from).collect(),
            origin: LinkOrigin::Reports,
            filters: Some(serde_json::json!({"quarter": "Q3"})),
            expiration: ExpirationOption::OneDay,
            custom_expiration: None,
        }
    }

    #[tokio::test]
    async fn test_create_persists_active_link() {
        let (service, store) = make_service();
        let link = service.create_link(create_request(vec!["acme"])).await.unwrap();

        assert_eq!(link.status, LinkStatus::Active);
        assert_eq!(link.access_count, 0);
        assert_eq!(link.expires_at, link.created_at + Duration::hours(24));
        assert_eq!(link.url, format!("https://app.example.com/shared/{}", link.id));

        let stored = store.load_all_links().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, link.id);
    }

    #[tokio::test]
    async fn test_create_defaults_empty_company_scope_to_creator() {
        let (service, _) = make_service();
        let link = service.create_link(create_request(vec![])).await.unwrap();
        assert_eq!(link.company_ids, vec!["user-1".to_string()]);
    }

    #[tokio::test]
    async fn test_create_dedupes_company_scope() {
        let (service, _) = make_service();
        let link = service
            .create_link(create_request(vec!["acme", "globex", "acme"]))
            .await
            .unwrap();
        assert_eq!(link.company_ids, vec!["acme".to_string(), "globex".to_string()]);
    }

    #[tokio::test]
    async fn test_create_past_custom_expiration_falls_back() {
        let (service, _) = make_service();
        let mut req = create_request(vec!["acme"]);
        req.expiration = ExpirationOption::Custom;
        req.custom_expiration = Some(Utc::now() - Duration::hours(2));

        let link = service.create_link(req).await.unwrap();
        assert_eq!(link.expires_at, link.created_at + Duration::hours(24));
        assert!(link.expires_at > link.created_at);
    }

    #[tokio::test]
    async fn test_list_persists_lazy_expiry() {
        let (service, store) = make_service();
        let link = service.create_link(create_request(vec!["acme"])).await.unwrap();

        // Rewind the persisted expiry so the link is overdue.
        let mut links = store.load_all_links().await.unwrap();
        links[0].expires_at = Utc::now() - Duration::seconds(5);
        store.save_all_links(&links).await.unwrap();

        let listed = service.list_links(None).await.unwrap();
        assert_eq!(listed[0].status, LinkStatus::Expired);

        // The transition was written through, not just computed.
        let stored = store.load_all_links().await.unwrap();
        assert_eq!(stored[0].status, LinkStatus::Expired);
        assert_eq!(stored[0].id, link.id);
    }

    #[tokio::test]
    async fn test_list_scopes_by_company() {
        let (service, _) = make_service();
        service.create_link(create_request(vec!["acme"])).await.unwrap();
        service.create_link(create_request(vec!["globex"])).await.unwrap();

        let scoped = service.list_links(Some("acme")).await.unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].company_ids, vec!["acme".to_string()]);

        let all = service.list_links(None).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_url_suffix() {
        let (service, _) = make_service();
        let link = service.create_link(create_request(vec!["acme"])).await.unwrap();

        let by_id = service.get_link(&link.id).await.unwrap();
        assert!(by_id.is_some());

        let by_url = service.get_link(&link.url).await.unwrap();
        assert_eq!(by_url.unwrap().id, link.id);

        let missing = service.get_link("nope").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_revoke_is_terminal() {
        let (service, store) = make_service();
        let link = service.create_link(create_request(vec!["acme"])).await.unwrap();

        assert!(service.revoke_link(&link.id).await.unwrap());
        let stored = store.load_all_links().await.unwrap();
        assert_eq!(stored[0].status, LinkStatus::Revoked);

        // Listing later never resurfaces it as active.
        let listed = service.list_links(None).await.unwrap();
        assert_eq!(listed[0].status, LinkStatus::Revoked);

        assert!(!service.revoke_link("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let (service, store) = make_service();
        let link = service.create_link(create_request(vec!["acme"])).await.unwrap();

        assert!(service.delete_link(&link.id).await.unwrap());
        assert!(store.load_all_links().await.unwrap().is_empty());
        assert!(!service.delete_link(&link.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_expiring_within_excludes_expired_and_revoked() {
        let (service, store) = make_service();

        let soon = service.create_link(create_request(vec!["acme"])).await.unwrap();
        let mut far = create_request(vec!["acme"]);
        far.expiration = ExpirationOption::OneWeek;
        service.create_link(far).await.unwrap();
        let revoked = service.create_link(create_request(vec!["acme"])).await.unwrap();
        service.revoke_link(&revoked.id).await.unwrap();

        // One link already past its expiry.
        let overdue = service.create_link(create_request(vec!["acme"])).await.unwrap();
        let mut links = store.load_all_links().await.unwrap();
        links
            .iter_mut()
            .find(|l| l.id == overdue.id)
            .unwrap()
            .expires_at = Utc::now() - Duration::seconds(1);
        store.save_all_links(&links).await.unwrap();

        let expiring = service.expiring_within(24).await.unwrap();
        assert_eq!(expiring.len(), 1);
        assert_eq!(expiring[0].id, soon.id);
    }
}
