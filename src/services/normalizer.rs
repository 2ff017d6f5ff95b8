// src/services/normalizer.rs
// DOCUMENTATION: Response reshaping
// PURPOSE: Map Unsplash payloads onto the stable item shapes callers consume

use crate::config::ClientConfig;
use crate::models::{
    CollectionItem, ItemKind, PhotoItem, ResultEnvelope, SearchResponse, UnsplashCollection,
    UnsplashPhoto,
};

/// Web site credited in attribution lines
pub const UNSPLASH_SITE_URL: &str = "https://unsplash.com/";

/// Normalizer bound to one gateway configuration
pub struct Normalizer<'a> {
    config: &'a ClientConfig,
}

impl<'a> Normalizer<'a> {
    pub fn new(config: &'a ClientConfig) -> Self {
        Self { config }
    }

    /// Convert an Unsplash photo to a PhotoItem
    /// DOCUMENTATION: Picks the display URL and builds the attribution line
    pub fn photo_item(&self, photo: UnsplashPhoto) -> PhotoItem {
        let url = self.display_url(&photo);
        let attribution = self.attribution(&photo);

        PhotoItem {
            id: photo.id,
            slug: photo.slug,
            width: photo.width,
            height: photo.height,
            color: photo.color,
            description: photo.description,
            alt_description: photo.alt_description,
            likes: photo.likes,
            user: photo.user,
            url,
            raw: photo.urls.raw,
            thumb: photo.urls.thumb,
            download_location: photo.links.download_location,
            attribution,
        }
    }

    /// Convert an Unsplash collection to a CollectionItem
    pub fn collection_item(&self, collection: UnsplashCollection) -> CollectionItem {
        let thumb = collection
            .cover_photo
            .as_ref()
            .map(|cover| cover.urls.small.clone());

        CollectionItem {
            id: collection.id,
            title: collection.title,
            description: collection.description,
            total_photos: collection.total_photos,
            user: collection.user,
            cover_photo: collection.cover_photo,
            thumb,
            kind: ItemKind::Collection,
        }
    }

    /// Raw URL plus the configured suffix, else the regular (1080px) variant
    pub fn display_url(&self, photo: &UnsplashPhoto) -> String {
        if self.config.url_suffix.is_empty() {
            photo.urls.regular.clone()
        } else {
            format!("{}{}", photo.urls.raw, self.config.url_suffix)
        }
    }

    /// HTML credit line required by the Unsplash guidelines
    /// DOCUMENTATION: Both links carry `utm_source=<app id>&utm_medium=referral`
    pub fn attribution(&self, photo: &UnsplashPhoto) -> String {
        let utm = format!(
            "utm_source={}&utm_medium=referral",
            encode_query_value(&self.config.app_id)
        );

        format!(
            "Photo by <a href=\"{}?{}\">{}</a> on <a href=\"{}?{}\">Unsplash</a>",
            photo.user.links.html,
            utm,
            escape_html(&photo.user.name),
            UNSPLASH_SITE_URL,
            utm
        )
    }

    /// Search payloads carry their own pagination metadata
    pub fn photo_page(
        &self,
        response: SearchResponse<UnsplashPhoto>,
        page: u32,
        query: &str,
    ) -> ResultEnvelope<PhotoItem> {
        let items = response
            .results
            .into_iter()
            .map(|photo| self.photo_item(photo))
            .collect();
        ResultEnvelope::new(response.total, response.total_pages, page, query, items)
    }

    pub fn collection_page(
        &self,
        response: SearchResponse<UnsplashCollection>,
        page: u32,
        query: &str,
    ) -> ResultEnvelope<CollectionItem> {
        let items = response
            .results
            .into_iter()
            .map(|collection| self.collection_item(collection))
            .collect();
        ResultEnvelope::new(response.total, response.total_pages, page, query, items)
    }
}

fn encode_query_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// Minimal Unsplash photo payload
    pub fn photo_json(id: &str) -> String {
        format!(
            r##"{{
                "id": "{id}",
                "slug": "a-cat-{id}",
                "width": 4000,
                "height": 3000,
                "color": "#60544D",
                "description": "A cat",
                "alt_description": "grey cat on a sofa",
                "likes": 12,
                "user": {{
                    "id": "u1",
                    "username": "jdoe",
                    "name": "Jane Doe",
                    "portfolio_url": null,
                    "bio": "Cat person",
                    "profile_image": {{
                        "small": "https://images.unsplash.com/profile-u1?w=32",
                        "medium": "https://images.unsplash.com/profile-u1?w=64",
                        "large": "https://images.unsplash.com/profile-u1?w=128"
                    }},
                    "links": {{
                        "html": "https://unsplash.com/@jdoe",
                        "photos": "https://api.unsplash.com/users/jdoe/photos"
                    }}
                }},
                "urls": {{
                    "raw": "https://images.unsplash.com/photo-{id}?ixid=1",
                    "full": "https://images.unsplash.com/photo-{id}?q=85",
                    "regular": "https://images.unsplash.com/photo-{id}?w=1080",
                    "small": "https://images.unsplash.com/photo-{id}?w=400",
                    "thumb": "https://images.unsplash.com/photo-{id}?w=200"
                }},
                "links": {{
                    "html": "https://unsplash.com/photos/a-cat-{id}",
                    "download_location": "https://api.unsplash.com/photos/{id}/download?ixid=1"
                }}
            }}"##
        )
    }

    /// Minimal Unsplash collection payload
    pub fn collection_json(id: &str, with_cover: bool) -> String {
        let cover = if with_cover {
            format!(
                r#"{{ "id": "cover-{id}", "urls": {{ "small": "https://images.unsplash.com/cover-{id}?w=400", "thumb": "https://images.unsplash.com/cover-{id}?w=200" }} }}"#
            )
        } else {
            "null".to_string()
        };

        format!(
            r#"{{
                "id": "{id}",
                "title": "Cats",
                "description": null,
                "total_photos": 42,
                "user": {{
                    "id": "u2",
                    "username": "curator",
                    "name": "Cu Rator",
                    "portfolio_url": null,
                    "links": {{ "html": "https://unsplash.com/@curator" }}
                }},
                "cover_photo": {cover}
            }}"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    fn photo(id: &str) -> UnsplashPhoto {
        serde_json::from_str(&photo_json(id)).unwrap()
    }

    #[test]
    fn test_display_url_without_suffix_uses_regular() {
        let config = ClientConfig::default();
        let item = Normalizer::new(&config).photo_item(photo("abc"));

        assert_eq!(item.url, "https://images.unsplash.com/photo-abc?w=1080");
        assert_eq!(item.raw, "https://images.unsplash.com/photo-abc?ixid=1");
        assert_eq!(item.thumb, "https://images.unsplash.com/photo-abc?w=200");
    }

    #[test]
    fn test_display_url_with_suffix_extends_raw() {
        let config = ClientConfig::default().with_url_suffix("&w=1920&fm=jpg");
        let item = Normalizer::new(&config).photo_item(photo("abc"));

        assert_eq!(
            item.url,
            "https://images.unsplash.com/photo-abc?ixid=1&w=1920&fm=jpg"
        );
    }

    #[test]
    fn test_photo_item_fields() {
        let config = ClientConfig::default();
        let item = Normalizer::new(&config).photo_item(photo("abc"));

        assert_eq!(item.id, "abc");
        assert_eq!(item.slug.as_deref(), Some("a-cat-abc"));
        assert_eq!((item.width, item.height), (4000, 3000));
        assert_eq!(item.likes, 12);
        assert_eq!(item.user.username, "jdoe");
        assert_eq!(
            item.download_location,
            "https://api.unsplash.com/photos/abc/download?ixid=1"
        );
    }

    #[test]
    fn test_photo_item_passes_user_through() {
        let config = ClientConfig::default();
        let item = Normalizer::new(&config).photo_item(photo("abc"));

        assert_eq!(
            item.user.profile_image.as_ref().map(|p| p.small.as_str()),
            Some("https://images.unsplash.com/profile-u1?w=32")
        );

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json["user"]["profile_image"]["small"],
            "https://images.unsplash.com/profile-u1?w=32"
        );
        assert_eq!(json["user"]["bio"], "Cat person");
        assert_eq!(
            json["user"]["links"]["photos"],
            "https://api.unsplash.com/users/jdoe/photos"
        );
    }

    #[test]
    fn test_attribution_credits_photographer_and_service() {
        let config = ClientConfig::default().with_app_id("my_app");
        let item = Normalizer::new(&config).photo_item(photo("abc"));

        assert_eq!(
            item.attribution,
            "Photo by <a href=\"https://unsplash.com/@jdoe?utm_source=my_app&utm_medium=referral\">Jane Doe</a> \
             on <a href=\"https://unsplash.com/?utm_source=my_app&utm_medium=referral\">Unsplash</a>"
        );
    }

    #[test]
    fn test_attribution_escapes_name_and_encodes_app_id() {
        let config = ClientConfig::default().with_app_id("my app&co");
        let mut raw = photo("abc");
        raw.user.name = "<b>Eve</b>".to_string();

        let attribution = Normalizer::new(&config).attribution(&raw);

        assert!(attribution.contains("&lt;b&gt;Eve&lt;/b&gt;"));
        assert!(attribution.contains("utm_source=my+app%26co&utm_medium=referral"));
    }

    #[test]
    fn test_collection_thumb_from_cover() {
        let config = ClientConfig::default();
        let normalizer = Normalizer::new(&config);

        let with_cover: UnsplashCollection =
            serde_json::from_str(&collection_json("c1", true)).unwrap();
        let item = normalizer.collection_item(with_cover);
        assert_eq!(
            item.thumb.as_deref(),
            Some("https://images.unsplash.com/cover-c1?w=400")
        );
        assert_eq!(item.kind, ItemKind::Collection);
        assert_eq!(item.total_photos, 42);

        let without_cover: UnsplashCollection =
            serde_json::from_str(&collection_json("c2", false)).unwrap();
        let item = normalizer.collection_item(without_cover);
        assert!(item.thumb.is_none());
        assert!(item.cover_photo.is_none());

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "collection");
    }
}
