// src/services/search_gateway.rs
// DOCUMENTATION: Unsplash search gateway
// PURPOSE: Translate high-level queries into Unsplash API calls and
// normalized result envelopes

use crate::config::ClientConfig;
use crate::errors::GatewayError;
use crate::models::{
    parse_total_header, total_pages_for, CollectionItem, CollectionPhotos, CollectionSearch,
    PhotoItem, PhotoSearch, QueryOutcome, QueryRequest, ResultEnvelope, SearchResponse,
    UnsplashCollection, UnsplashPhoto, UserPhotos,
};
use crate::services::direct_link;
use crate::services::normalizer::Normalizer;
use crate::services::transport::{ReqwestTransport, Transport, TransportResponse};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Header carrying the total count on listing endpoints
pub const TOTAL_HEADER: &str = "x-total";

/// Unsplash API gateway
/// DOCUMENTATION: Cheap to clone; clones share the immutable configuration
/// and the transport, so concurrent in-flight calls never share mutable state.
#[derive(Clone)]
pub struct SearchGateway {
    /// Client settings, fixed at construction
    config: Arc<ClientConfig>,
    /// HTTP collaborator performing the GET exchanges
    transport: Arc<dyn Transport>,
}

impl SearchGateway {
    /// Create a gateway using the default reqwest transport
    /// DOCUMENTATION: No validation happens here; see `ClientConfig::validate`
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Create a gateway over a caller-supplied transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search photos by keywords
    /// DOCUMENTATION: A direct photo link in `query` is resolved by slug and
    /// reported as a one-item, one-page result. When that lookup fails the
    /// regular search runs instead, so the caller always gets one outcome.
    ///
    /// # Returns
    /// `QueryOutcome::Empty` carrying the error on any failure
    pub async fn search(&self, request: PhotoSearch) -> QueryOutcome<PhotoItem> {
        if let Some(slug) = direct_link::photo_slug(&request.query) {
            match self.get_photo(slug).await {
                Ok(item) => {
                    log::info!("Resolved direct photo link to slug {}", slug);
                    return QueryOutcome::Results(ResultEnvelope::new(
                        1,
                        1,
                        1,
                        &request.query,
                        vec![item],
                    ));
                }
                Err(e) => {
                    log::warn!(
                        "Direct lookup for slug {} failed, running a regular search: {}",
                        slug,
                        e
                    );
                }
            }
        }

        let request = QueryRequest::from(request);
        let result = self
            .fetch_search_page::<UnsplashPhoto>(&request)
            .await
            .map(|response| {
                Normalizer::new(&self.config).photo_page(response, request.page(), request.label())
            });

        self.finish(&request, result)
    }

    /// List photos uploaded by a user
    /// DOCUMENTATION: Total count comes from the `x-total` header
    pub async fn user_photos(&self, request: UserPhotos) -> QueryOutcome<PhotoItem> {
        let request = QueryRequest::from(request);
        let result = self.fetch_photo_listing(&request).await;
        self.finish(&request, result)
    }

    /// Search collections by keywords
    pub async fn search_collections(
        &self,
        request: CollectionSearch,
    ) -> QueryOutcome<CollectionItem> {
        let request = QueryRequest::from(request);
        let result = self
            .fetch_search_page::<UnsplashCollection>(&request)
            .await
            .map(|response| {
                Normalizer::new(&self.config).collection_page(
                    response,
                    request.page(),
                    request.label(),
                )
            });

        self.finish(&request, result)
    }

    /// List photos of a collection
    /// DOCUMENTATION: Total count comes from the `x-total` header
    pub async fn collection_photos(&self, request: CollectionPhotos) -> QueryOutcome<PhotoItem> {
        let request = QueryRequest::from(request);
        let result = self.fetch_photo_listing(&request).await;
        self.finish(&request, result)
    }

    /// Look up a single photo by slug or id (`/photos/{slug}`)
    pub async fn get_photo(&self, slug: &str) -> Result<PhotoItem, GatewayError> {
        let path = format!("/photos/{}", urlencoding::encode(slug));
        log::debug!("Unsplash photo lookup: slug={}", slug);

        let response = self.fetch(&self.url(&path), &path, self.credentials()).await?;
        let photo: UnsplashPhoto = serde_json::from_str(&response.body)?;

        Ok(Normalizer::new(&self.config).photo_item(photo))
    }

    /// Report a photo download to Unsplash
    /// DOCUMENTATION: Fire-and-forget. The call runs on a spawned Tokio task;
    /// failures are logged and dropped. The returned handle may be ignored.
    /// Outside a Tokio runtime nothing is sent and None is returned.
    pub fn notify_download(&self, download_location: &str) -> Option<JoinHandle<()>> {
        let runtime = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                log::warn!(
                    "Download notification to {} skipped, no Tokio runtime: {}",
                    download_location,
                    e
                );
                return None;
            }
        };

        let gateway = self.clone();
        let location = download_location.to_string();

        Some(runtime.spawn(async move {
            if let Err(e) = gateway.track_download(&location).await {
                log::warn!("Download notification to {} failed: {}", location, e);
            }
        }))
    }

    async fn track_download(&self, location: &str) -> Result<(), GatewayError> {
        if location.is_empty() {
            return Err(GatewayError::InvalidInput(
                "empty download location".to_string(),
            ));
        }

        log::debug!("Unsplash download notification: {}", location);
        self.fetch(location, location, self.credentials()).await?;
        Ok(())
    }

    /// Fetch a search endpoint whose body carries pagination metadata
    async fn fetch_search_page<T: DeserializeOwned>(
        &self,
        request: &QueryRequest,
    ) -> Result<SearchResponse<T>, GatewayError> {
        let response = self.send(request).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Fetch a photo listing; the body is a bare array and the total is in a header
    async fn fetch_photo_listing(
        &self,
        request: &QueryRequest,
    ) -> Result<ResultEnvelope<PhotoItem>, GatewayError> {
        let response = self.send(request).await?;
        let photos: Vec<UnsplashPhoto> = serde_json::from_str(&response.body)?;

        let total = parse_total_header(response.header(TOTAL_HEADER));
        let page_size = request.effective_page_size(self.config.default_page_size);
        let total_pages = total_pages_for(total, page_size);

        let normalizer = Normalizer::new(&self.config);
        let items = photos
            .into_iter()
            .map(|photo| normalizer.photo_item(photo))
            .collect();

        Ok(ResultEnvelope::new(
            total,
            total_pages,
            request.page(),
            request.label(),
            items,
        ))
    }

    /// Validate a listing request and send it
    async fn send(&self, request: &QueryRequest) -> Result<TransportResponse, GatewayError> {
        request.validate()?;

        let path = request.path();
        let mut params = self.credentials();
        params.extend(request.params(self.config.default_page_size));

        log::debug!(
            "Unsplash request: path={}, page={}, per_page={}",
            path,
            request.page(),
            request.effective_page_size(self.config.default_page_size)
        );

        self.fetch(&self.url(&path), &path, params).await
    }

    /// Single GET exchange with status checking
    async fn fetch(
        &self,
        url: &str,
        path: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<TransportResponse, GatewayError> {
        let response = self.transport.get(url, &params).await?;

        if !response.is_success() {
            log::error!("Unsplash API error {} on {}: {}", response.status, path, response.body);
            return Err(GatewayError::from_status(
                response.status,
                path,
                response.body,
            ));
        }

        Ok(response)
    }

    fn credentials(&self) -> Vec<(&'static str, String)> {
        vec![("client_id", self.config.api_key.clone())]
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Collapse a result into an outcome, logging failures
    fn finish<T>(
        &self,
        request: &QueryRequest,
        result: Result<ResultEnvelope<T>, GatewayError>,
    ) -> QueryOutcome<T> {
        match &result {
            Ok(envelope) => log::info!(
                "Unsplash {} returned {} results (page {}/{})",
                request.path(),
                envelope.items.len(),
                envelope.page,
                envelope.total_pages
            ),
            Err(e) => log::warn!(
                "Unsplash {} failed, returning empty result: {}",
                request.path(),
                e
            ),
        }
        result.into()
    }
}
