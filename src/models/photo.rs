// src/models/photo.rs

use super::UnsplashUser;
use serde::Serialize;

/// Normalized photo handed to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoItem {
    pub id: String,
    pub slug: Option<String>,
    pub width: u32,
    pub height: u32,
    pub color: Option<String>,
    pub description: Option<String>,
    pub alt_description: Option<String>,
    pub likes: u32,
    pub user: UnsplashUser,
    /// Display URL: raw + configured suffix, or the regular variant
    pub url: String,
    pub raw: String,
    pub thumb: String,
    /// Must be hit through `SearchGateway::notify_download` when the photo is used
    pub download_location: String,
    /// HTML credit line for the photographer and Unsplash
    pub attribution: String,
}
