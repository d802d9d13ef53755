use super::types::Page;
use crate::error::{Result, SaltEdgeError};
use std::collections::HashSet;
use std::future::Future;
use tracing::debug;

/// Follow `next_id` cursors from the first page until the API reports no more.
///
/// `fetch_page` receives the `from_id` to request (`None` for the first page).
/// Items are returned in page order. A cursor the API already handed out
/// fails the walk instead of looping forever.
pub async fn collect_all<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut seen_cursors = HashSet::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = fetch_page(cursor.take()).await?;
        let next = page.next_cursor().map(str::to_string);
        debug!(
            items = page.data.len(),
            next_id = next.as_deref(),
            "Fetched page"
        );
        items.extend(page.data);

        let Some(next) = next else {
            return Ok(items);
        };

        if !seen_cursors.insert(next.clone()) {
            return Err(SaltEdgeError::Pagination(format!(
                "cursor {} was returned more than once",
                next
            )));
        }
        cursor = Some(next);
    }
}
