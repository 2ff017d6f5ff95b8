// src/models/collection.rs

use super::{CoverPhoto, UnsplashUser};
use serde::Serialize;

/// Discriminator for items consumed side by side downstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Collection,
}

/// Normalized collection handed to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub total_photos: u32,
    pub user: UnsplashUser,
    pub cover_photo: Option<CoverPhoto>,
    /// Small variant of the cover photo, None without a cover
    pub thumb: Option<String>,
    /// Always `ItemKind::Collection`
    #[serde(rename = "type")]
    pub kind: ItemKind,
}
