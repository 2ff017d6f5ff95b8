// src/lib.rs
// DOCUMENTATION: Crate entry point
// PURPOSE: Client-side gateway for the Unsplash photo-search API.
// Builds query-string requests, normalizes payloads into result envelopes,
// and performs the download tracking call the API terms require.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use config::ClientConfig;
pub use errors::GatewayError;
pub use models::{
    CollectionItem, CollectionPhotos, CollectionSearch, Color, OrderBy, Orientation, PhotoItem,
    PhotoSearch, QueryOutcome, QueryRequest, ResultEnvelope, UserPhotos,
};
pub use services::{ReqwestTransport, SearchGateway, Transport, TransportResponse};
