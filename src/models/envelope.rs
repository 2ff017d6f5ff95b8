// src/models/envelope.rs
// DOCUMENTATION: Normalized pagination wrapper
// PURPOSE: Stable result shape returned to callers for every listing

use crate::errors::GatewayError;
use serde::Serialize;

/// Paginated result envelope
/// DOCUMENTATION: `next_page` and `previous_page` are derived from
/// `page` and `total_pages` at construction and never set directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEnvelope<T> {
    pub total: u64,
    pub total_pages: u32,
    pub page: u32,
    pub next_page: Option<u32>,
    pub previous_page: Option<u32>,
    /// Search text, username or collection id as supplied by the caller
    pub query: String,
    #[serde(rename = "results")]
    pub items: Vec<T>,
}

impl<T> ResultEnvelope<T> {
    pub fn new(total: u64, total_pages: u32, page: u32, query: &str, items: Vec<T>) -> Self {
        Self {
            total,
            total_pages,
            page,
            next_page: if total_pages > page { Some(page + 1) } else { None },
            previous_page: if page > 1 { Some(page - 1) } else { None },
            query: query.to_string(),
            items,
        }
    }
}

/// Page count for listings whose total comes from the `x-total` header
/// DOCUMENTATION: ceil(total / page_size) when both are positive, else 1
pub fn total_pages_for(total: u64, page_size: u32) -> u32 {
    if total == 0 || page_size == 0 {
        return 1;
    }
    u32::try_from(total.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX)
}

/// Parse the `x-total` header value, treating missing or garbage as 0
pub fn parse_total_header(value: Option<&str>) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

/// Outcome of a listing operation
/// DOCUMENTATION: Failures are collapsed into `Empty`, which still carries
/// the error so stricter callers can branch on it.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<T> {
    Results(ResultEnvelope<T>),
    Empty(GatewayError),
}

impl<T> QueryOutcome<T> {
    /// Items of the envelope, or an empty slice on failure
    pub fn items(&self) -> &[T] {
        match self {
            QueryOutcome::Results(envelope) => &envelope.items,
            QueryOutcome::Empty(_) => &[],
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            QueryOutcome::Results(envelope) => envelope.items,
            QueryOutcome::Empty(_) => Vec::new(),
        }
    }

    pub fn envelope(&self) -> Option<&ResultEnvelope<T>> {
        match self {
            QueryOutcome::Results(envelope) => Some(envelope),
            QueryOutcome::Empty(_) => None,
        }
    }

    pub fn error(&self) -> Option<&GatewayError> {
        match self {
            QueryOutcome::Results(_) => None,
            QueryOutcome::Empty(e) => Some(e),
        }
    }

    /// True when the call failed; a successful page with zero items is not empty
    pub fn is_empty(&self) -> bool {
        matches!(self, QueryOutcome::Empty(_))
    }

    pub fn into_result(self) -> Result<ResultEnvelope<T>, GatewayError> {
        match self {
            QueryOutcome::Results(envelope) => Ok(envelope),
            QueryOutcome::Empty(e) => Err(e),
        }
    }
}

impl<T> From<Result<ResultEnvelope<T>, GatewayError>> for QueryOutcome<T> {
    fn from(result: Result<ResultEnvelope<T>, GatewayError>) -> Self {
        match result {
            Ok(envelope) => QueryOutcome::Results(envelope),
            Err(e) => QueryOutcome::Empty(e),
        }
    }
}
