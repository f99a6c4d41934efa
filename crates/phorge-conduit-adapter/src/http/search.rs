/*
[INPUT]:  Method names, search constraints, pagination cursors
[OUTPUT]: Flattened record sequences across all result pages
[POS]:    HTTP layer - generic paginated call executors
[UPDATE]: When cursor handling or page bounds change
*/

use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;

use crate::http::capabilities::PageStyle;
use crate::http::client::ConduitClient;
use crate::http::error::{ConduitError, Result};
use crate::types::SearchResult;

impl ConduitClient {
    /// Fetch every page of a cursor-paginated `*.search` method.
    ///
    /// Follows the `cursor.after` token until the server signals the final
    /// page with an absent token; records keep server order throughout.
    pub async fn search_all<T: DeserializeOwned>(
        &self,
        method: &str,
        constraints: Value,
    ) -> Result<Vec<T>> {
        self.require_page_style(method, PageStyle::Cursor)?;

        let mut records = Vec::new();
        let mut after: Option<String> = None;
        let mut pages = 0u32;
        loop {
            pages += 1;
            if pages > self.max_pages() {
                return Err(ConduitError::PageLimitExceeded {
                    method: method.to_string(),
                    limit: self.max_pages(),
                });
            }

            let mut params = json!({ "constraints": &constraints });
            if let Some(cursor) = &after {
                params["after"] = json!(cursor);
            }

            let page: SearchResult<T> = self.call(method, params).await?;
            records.extend(page.data);
            after = page.cursor.and_then(|cursor| cursor.after);
            if after.is_none() {
                break;
            }
        }

        debug!(method, records = records.len(), pages, "search pages exhausted");
        Ok(records)
    }

    /// Offset variant for legacy endpoints; otherwise identical to
    /// [`search_all`](Self::search_all).
    pub async fn query_all<T: DeserializeOwned>(&self, method: &str) -> Result<Vec<T>> {
        self.require_page_style(method, PageStyle::Offset)?;

        let mut records = Vec::new();
        let mut after: Option<String> = None;
        let mut pages = 0u32;
        loop {
            pages += 1;
            if pages > self.max_pages() {
                return Err(ConduitError::PageLimitExceeded {
                    method: method.to_string(),
                    limit: self.max_pages(),
                });
            }

            let mut params = json!({});
            if let Some(cursor) = &after {
                params["offset"] = json!(cursor);
            }

            let page: SearchResult<T> = self.call(method, params).await?;
            records.extend(page.data);
            after = page.cursor.and_then(|cursor| cursor.after);
            if after.is_none() {
                break;
            }
        }

        debug!(method, records = records.len(), pages, "query pages exhausted");
        Ok(records)
    }

    fn require_page_style(&self, method: &str, expected: PageStyle) -> Result<()> {
        match self.capabilities().spec(method) {
            None => Err(ConduitError::UnknownMethod {
                method: method.to_string(),
            }),
            Some(spec) if spec.page_style != expected => Err(ConduitError::PaginationMismatch {
                method: method.to_string(),
                expected,
            }),
            Some(_) => Ok(()),
        }
    }
}
