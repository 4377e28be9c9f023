//! Cursor pagination and ID batching over Helix list endpoints.
//!
//! This module turns Helix's paged, cursor-driven endpoints into complete
//! in-memory collections. Two access patterns exist:
//!
//! - **Cursor pagination** ([`ClientInner::get_all_pages`]): the server
//!   returns an opaque continuation cursor with each page; the loop keeps
//!   re-issuing the base query with the latest cursor until the server
//!   stops returning one.
//! - **ID batching** ([`ClientInner::get_by_ids`]): bulk-lookup endpoints
//!   accept at most [`MAX_IDS_PER_REQUEST`] ids per call, so the input id
//!   list is partitioned into consecutive chunks with one request each.
//!
//! Both loops are strictly sequential and all-or-nothing: the first
//! failing request aborts the operation and the partial accumulator is
//! discarded.

use serde::de::DeserializeOwned;

use super::http::ClientInner;
use crate::models::AccessToken;
use crate::Result;

/// Page size requested from paginated endpoints, the Helix maximum.
pub const PAGE_SIZE: usize = 100;

/// Maximum number of ids accepted per bulk-lookup request.
pub const MAX_IDS_PER_REQUEST: usize = 100;

/// Response envelope for cursor-paginated list endpoints.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct PagedResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Pagination metadata from a Helix response.
#[derive(Debug, Clone, serde::Deserialize)]
pub(crate) struct Pagination {
    #[serde(default)]
    pub cursor: Option<String>,
}

impl<T> PagedResponse<T> {
    /// The continuation cursor, if the server signalled more pages.
    ///
    /// Helix sends `pagination: {}` on the terminal page; an empty-string
    /// cursor is treated the same as an absent one.
    fn next_cursor(&self) -> Option<String> {
        self.pagination
            .as_ref()
            .and_then(|p| p.cursor.as_deref())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
    }
}

/// How a paginated endpoint's reported `total` participates in
/// termination.
///
/// Follow and subscription responses carry a `total` count and a zero
/// total ends the fetch after the first page regardless of any cursor.
/// Endpoints whose schema has no `total` field must use [`Ignore`] so an
/// absent count is never read as zero and the cursor chain alone decides
/// when to stop.
///
/// [`Ignore`]: TotalBehavior::Ignore
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalBehavior {
    /// A reported `total` of zero terminates the fetch.
    StopOnZero,
    /// The `total` field is ignored; only cursor absence terminates.
    Ignore,
}

impl ClientInner {
    /// Fetch every page of a cursor-paginated endpoint into one ordered
    /// collection.
    ///
    /// Each request sends `first=100` plus `base` and, from the second
    /// page on, the `after` cursor from the previous response. Items
    /// accumulate in the order pages arrive. Termination is checked after
    /// every page: a zero `total` (under [`TotalBehavior::StopOnZero`]) or
    /// a missing cursor ends the loop, and cursor absence is authoritative
    /// even when `total` claims more records. A page with no items but a
    /// cursor keeps going.
    ///
    /// Any request failure aborts the whole fetch; nothing accumulated so
    /// far is returned.
    pub(crate) async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        base: &[(&str, String)],
        token: &AccessToken,
        total_behavior: TotalBehavior,
    ) -> Result<Vec<T>> {
        let mut items: Vec<T> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut page_count: u32 = 0;

        loop {
            let mut params: Vec<(&str, String)> = Vec::with_capacity(base.len() + 2);
            params.push(("first", PAGE_SIZE.to_string()));
            params.extend(base.iter().map(|(k, v)| (*k, v.clone())));
            if let Some(ref after) = cursor {
                params.push(("after", after.clone()));
            }

            let page: PagedResponse<T> = self.get_with_query(path, &params, token).await?;
            page_count += 1;

            tracing::debug!(
                path,
                page = page_count,
                items = page.data.len(),
                total = ?page.total,
                "fetched page"
            );

            let total = page.total;
            let next = page.next_cursor();
            items.extend(page.data);

            if total_behavior == TotalBehavior::StopOnZero && total == Some(0) {
                break;
            }
            match next {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        tracing::debug!(path, pages = page_count, items = items.len(), "fetch complete");
        Ok(items)
    }

    /// Fetch a bulk-lookup endpoint for an arbitrary number of ids.
    ///
    /// An empty id list returns an empty collection without issuing any
    /// request. Otherwise ids are partitioned into consecutive chunks of
    /// at most [`MAX_IDS_PER_REQUEST`], preserving input order; each chunk
    /// issues one request with `first=100` and one repeated `id`
    /// parameter per member. Chunk results concatenate in chunk order;
    /// within a chunk, order is whatever the server returns. No
    /// deduplication happens, so duplicate input ids yield duplicate
    /// items.
    ///
    /// A failure on any chunk aborts the whole operation and discards the
    /// results of earlier chunks.
    pub(crate) async fn get_by_ids<T, I>(
        &self,
        path: &str,
        ids: &[I],
        token: &AccessToken,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        I: AsRef<str>,
    {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut items: Vec<T> = Vec::with_capacity(ids.len());

        for (index, chunk) in ids.chunks(MAX_IDS_PER_REQUEST).enumerate() {
            let mut params: Vec<(&str, String)> = Vec::with_capacity(chunk.len() + 1);
            params.push(("first", MAX_IDS_PER_REQUEST.to_string()));
            for id in chunk {
                params.push(("id", id.as_ref().to_string()));
            }

            let response: super::http::DataResponse<T> =
                self.get_with_query(path, &params, token).await?;

            tracing::debug!(
                path,
                chunk = index + 1,
                requested = chunk.len(),
                returned = response.data.len(),
                "fetched chunk"
            );

            items.extend(response.data);
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_response_deserialization() {
        let json = r#"{
            "data": ["a", "b"],
            "pagination": { "cursor": "eyJiIjpudWxsfQ" },
            "total": 130
        }"#;

        let page: PagedResponse<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total, Some(130));
        assert_eq!(page.next_cursor().as_deref(), Some("eyJiIjpudWxsfQ"));
    }

    #[test]
    fn test_terminal_page_has_no_cursor() {
        // Helix renders the terminal page as "pagination": {}.
        let json = r#"{ "data": [], "pagination": {} }"#;
        let page: PagedResponse<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, None);
        assert!(page.next_cursor().is_none());
    }

    #[test]
    fn test_empty_string_cursor_is_terminal() {
        let json = r#"{ "data": ["a"], "pagination": { "cursor": "" } }"#;
        let page: PagedResponse<String> = serde_json::from_str(json).unwrap();
        assert!(page.next_cursor().is_none());
    }

    #[test]
    fn test_missing_pagination_is_terminal() {
        let json = r#"{ "data": ["a"] }"#;
        let page: PagedResponse<String> = serde_json::from_str(json).unwrap();
        assert!(page.next_cursor().is_none());
    }
}
