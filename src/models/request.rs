// src/models/request.rs
// DOCUMENTATION: Query request structures
// PURPOSE: Explicit per-operation parameters and their translation into
// upstream paths and query strings

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Result ordering accepted by the upstream API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    Relevant,
    Latest,
    Oldest,
    Popular,
    Views,
    Downloads,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Relevant => "relevant",
            OrderBy::Latest => "latest",
            OrderBy::Oldest => "oldest",
            OrderBy::Popular => "popular",
            OrderBy::Views => "views",
            OrderBy::Downloads => "downloads",
        }
    }
}

/// Photo orientation filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Landscape,
    Portrait,
    Squarish,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Squarish => "squarish",
        }
    }
}

/// Color filter for photo search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    BlackAndWhite,
    Black,
    White,
    Yellow,
    Orange,
    Red,
    Purple,
    Magenta,
    Green,
    Teal,
    Blue,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::BlackAndWhite => "black_and_white",
            Color::Black => "black",
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Red => "red",
            Color::Purple => "purple",
            Color::Magenta => "magenta",
            Color::Green => "green",
            Color::Teal => "teal",
            Color::Blue => "blue",
        }
    }
}

/// Photo search by keywords (`/search/photos`)
/// DOCUMENTATION: Defaults to page 1 ordered by relevance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PhotoSearch {
    /// Search terms, or a direct photo link from the web site
    #[validate(length(min = 1))]
    pub query: String,
    #[validate(range(min = 1))]
    pub page: u32,
    /// Overrides the configured page size
    #[validate(range(min = 1))]
    pub per_page: Option<u32>,
    pub order_by: OrderBy,
    pub orientation: Option<Orientation>,
    pub color: Option<Color>,
}

impl PhotoSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            per_page: None,
            order_by: OrderBy::Relevant,
            orientation: None,
            color: None,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Photos uploaded by a user (`/users/{username}/photos`)
/// DOCUMENTATION: Defaults to page 1 ordered by latest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserPhotos {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(range(min = 1))]
    pub page: u32,
    #[validate(range(min = 1))]
    pub per_page: Option<u32>,
    pub order_by: OrderBy,
    pub orientation: Option<Orientation>,
}

impl UserPhotos {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            page: 1,
            per_page: None,
            order_by: OrderBy::Latest,
            orientation: None,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
}

/// Collection search by keywords (`/search/collections`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CollectionSearch {
    #[validate(length(min = 1))]
    pub query: String,
    #[validate(range(min = 1))]
    pub page: u32,
    #[validate(range(min = 1))]
    pub per_page: Option<u32>,
}

impl CollectionSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            per_page: None,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

/// Photos of a collection (`/collections/{id}/photos`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CollectionPhotos {
    #[validate(length(min = 1))]
    pub collection_id: String,
    #[validate(range(min = 1))]
    pub page: u32,
    #[validate(range(min = 1))]
    pub per_page: Option<u32>,
    pub orientation: Option<Orientation>,
}

impl CollectionPhotos {
    pub fn new(collection_id: impl Into<String>) -> Self {
        Self {
            collection_id: collection_id.into(),
            page: 1,
            per_page: None,
            orientation: None,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
}

/// Any listing request the gateway can issue
/// DOCUMENTATION: Builds the endpoint path and query parameters.
/// The `client_id` credential is added by the gateway, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryRequest {
    PhotoSearch(PhotoSearch),
    UserPhotos(UserPhotos),
    CollectionSearch(CollectionSearch),
    CollectionPhotos(CollectionPhotos),
}

impl QueryRequest {
    /// Endpoint path relative to the API root
    /// DOCUMENTATION: Identifiers are percent-encoded so `/`, `?` or `#`
    /// stay inside their path segment
    pub fn path(&self) -> String {
        match self {
            QueryRequest::PhotoSearch(_) => "/search/photos".to_string(),
            QueryRequest::UserPhotos(r) => {
                format!("/users/{}/photos", urlencoding::encode(&r.username))
            }
            QueryRequest::CollectionSearch(_) => "/search/collections".to_string(),
            QueryRequest::CollectionPhotos(r) => format!(
                "/collections/{}/photos",
                urlencoding::encode(&r.collection_id)
            ),
        }
    }

    pub fn page(&self) -> u32 {
        match self {
            QueryRequest::PhotoSearch(r) => r.page,
            QueryRequest::UserPhotos(r) => r.page,
            QueryRequest::CollectionSearch(r) => r.page,
            QueryRequest::CollectionPhotos(r) => r.page,
        }
    }

    /// Page size actually requested: the override, else the configured default
    pub fn effective_page_size(&self, default_page_size: u32) -> u32 {
        let per_page = match self {
            QueryRequest::PhotoSearch(r) => r.per_page,
            QueryRequest::UserPhotos(r) => r.per_page,
            QueryRequest::CollectionSearch(r) => r.per_page,
            QueryRequest::CollectionPhotos(r) => r.per_page,
        };
        per_page.unwrap_or(default_page_size)
    }

    /// Text echoed back in the result envelope's `query` field
    pub fn label(&self) -> &str {
        match self {
            QueryRequest::PhotoSearch(r) => &r.query,
            QueryRequest::UserPhotos(r) => &r.username,
            QueryRequest::CollectionSearch(r) => &r.query,
            QueryRequest::CollectionPhotos(r) => &r.collection_id,
        }
    }

    pub fn validate(&self) -> Result<(), validator::ValidationErrors> {
        match self {
            QueryRequest::PhotoSearch(r) => r.validate(),
            QueryRequest::UserPhotos(r) => r.validate(),
            QueryRequest::CollectionSearch(r) => r.validate(),
            QueryRequest::CollectionPhotos(r) => r.validate(),
        }
    }

    /// Query-string parameters, optional filters omitted when unset
    pub fn params(&self, default_page_size: u32) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        match self {
            QueryRequest::PhotoSearch(r) => {
                params.push(("query", r.query.clone()));
            }
            QueryRequest::CollectionSearch(r) => {
                params.push(("query", r.query.clone()));
            }
            QueryRequest::UserPhotos(_) | QueryRequest::CollectionPhotos(_) => {}
        }

        params.push(("page", self.page().to_string()));
        params.push((
            "per_page",
            self.effective_page_size(default_page_size).to_string(),
        ));

        match self {
            QueryRequest::PhotoSearch(r) => {
                params.push(("order_by", r.order_by.as_str().to_string()));
                if let Some(orientation) = r.orientation {
                    params.push(("orientation", orientation.as_str().to_string()));
                }
                if let Some(color) = r.color {
                    params.push(("color", color.as_str().to_string()));
                }
            }
            QueryRequest::UserPhotos(r) => {
                params.push(("order_by", r.order_by.as_str().to_string()));
                if let Some(orientation) = r.orientation {
                    params.push(("orientation", orientation.as_str().to_string()));
                }
            }
            QueryRequest::CollectionPhotos(r) => {
                if let Some(orientation) = r.orientation {
                    params.push(("orientation", orientation.as_str().to_string()));
                }
            }
            QueryRequest::CollectionSearch(_) => {}
        }

        params
    }
}

impl From<PhotoSearch> for QueryRequest {
    fn from(r: PhotoSearch) -> Self {
        QueryRequest::PhotoSearch(r)
    }
}

impl From<UserPhotos> for QueryRequest {
    fn from(r: UserPhotos) -> Self {
        QueryRequest::UserPhotos(r)
    }
}

impl From<CollectionSearch> for QueryRequest {
    fn from(r: CollectionSearch) -> Self {
        QueryRequest::CollectionSearch(r)
    }
}

impl From<CollectionPhotos> for QueryRequest {
    fn from(r: CollectionPhotos) -> Self {
        QueryRequest::CollectionPhotos(r)
    }
}
