//! Helpers that walk every page of a list endpoint

use super::types::{ListOptions, NextPage, Page};
use crate::error::{Error, Result};
use futures::stream::{self, Stream, TryStreamExt};
use std::future::Future;
use tracing::debug;

/// Fetch every page starting at `options` and collect all items.
pub async fn collect_all<T, F, Fut>(options: ListOptions, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(ListOptions) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut current = options;

    loop {
        let page = fetch(current.clone()).await?;
        let next = page.next_page();
        items.extend(page.items);

        match next {
            NextPage::Continue { page_number } => {
                debug!("Fetching page {page_number}");
                current = current.page(page_number);
            }
            NextPage::Done => return Ok(items),
        }
    }
}

/// Lazily stream every item of every page starting at `options`.
///
/// Pages are only requested as the stream is polled.
pub fn paginate<T, F, Fut>(options: ListOptions, mut fetch: F) -> impl Stream<Item = Result<T>>
where
    F: FnMut(ListOptions) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    stream::try_unfold(Some(options), move |state| {
        let request = state.map(|opts| {
            let fut = fetch(opts.clone());
            (opts, fut)
        });
        async move {
            let Some((opts, fut)) = request else {
                return Ok::<_, Error>(None);
            };
            let page = fut.await?;
            let next = match page.next_page() {
                NextPage::Continue { page_number } => Some(opts.page(page_number)),
                NextPage::Done => None,
            };
            Ok::<_, Error>(Some((page.items, next)))
        }
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, Error>)))
    .try_flatten()
}
