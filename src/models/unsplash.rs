// src/models/unsplash.rs
// DOCUMENTATION: Payload types returned by the Unsplash API
// PURPOSE: Typed view of the JSON bodies the gateway consumes

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Paginated search response (`/search/photos`, `/search/collections`)
/// DOCUMENTATION: Only search endpoints carry pagination metadata in the body
#[derive(Debug, Deserialize)]
pub struct SearchResponse<T> {
    /// Total number of matches
    #[serde(default)]
    pub total: u64,
    /// Total number of pages at the requested page size
    #[serde(default)]
    pub total_pages: u32,
    /// Results array for the requested page
    pub results: Vec<T>,
}

/// Individual photo from the Unsplash API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UnsplashPhoto {
    /// Unsplash photo identifier
    pub id: String,
    /// URL slug (e.g., "a-cat-on-a-sofa-abc123")
    pub slug: Option<String>,
    /// Width in pixels
    #[serde(default)]
    pub width: u32,
    /// Height in pixels
    #[serde(default)]
    pub height: u32,
    /// Dominant color as hex (e.g., "#60544D")
    pub color: Option<String>,
    /// Photographer-supplied description
    pub description: Option<String>,
    /// Generated accessibility description
    pub alt_description: Option<String>,
    /// Like count
    #[serde(default)]
    pub likes: u32,
    /// Photographer
    pub user: UnsplashUser,
    /// Image variants
    pub urls: PhotoUrls,
    /// Related endpoints
    pub links: PhotoLinks,
}

/// Image variant URLs of a photo
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhotoUrls {
    pub raw: String,
    pub full: Option<String>,
    /// Medium quality (1080px wide)
    pub regular: String,
    pub small: String,
    pub thumb: String,
}

/// Links attached to a photo
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhotoLinks {
    /// Photo page on the web site
    pub html: Option<String>,
    /// Endpoint to hit when the photo is used (download tracking)
    pub download_location: String,
}

/// Photographer or collection owner
/// DOCUMENTATION: Passed through to callers as the owning user reference.
/// Fields not modelled here (bio, location, social handles, ...) are kept
/// in `extra` and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UnsplashUser {
    pub id: String,
    pub username: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    pub portfolio_url: Option<String>,
    /// Avatar variants
    pub profile_image: Option<ProfileImage>,
    pub links: UserLinks,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Avatar URLs of a user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProfileImage {
    pub small: String,
    pub medium: String,
    pub large: String,
}

/// Links attached to a user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserLinks {
    /// Profile page on the web site
    pub html: String,
    /// Other user endpoints (self, photos, likes, portfolio, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Collection from the Unsplash API
#[derive(Debug, Clone, Deserialize)]
pub struct UnsplashCollection {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub total_photos: u32,
    pub user: UnsplashUser,
    /// Absent for empty or private collections
    pub cover_photo: Option<CoverPhoto>,
}

/// Cover photo of a collection
/// DOCUMENTATION: Only the fields needed for a thumbnail are kept
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CoverPhoto {
    pub id: String,
    pub urls: CoverUrls,
}

/// Variant URLs of a cover photo
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CoverUrls {
    pub small: String,
    pub thumb: Option<String>,
}
