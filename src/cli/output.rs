use clap::Args;
use indicatif::ProgressStyle;
use saltedge_client::error::Result;
use saltedge_client::saltedge::{Page, collect_all};
use serde::Serialize;
use std::future::Future;
use tracing::{Span, instrument};
use tracing_indicatif::span_ext::IndicatifSpanExt;

#[derive(Args, Debug)]
pub struct PageArgs {
    /// Start the listing at this id
    #[arg(long)]
    pub from_id: Option<String>,

    /// Follow the cursor until every page has been fetched
    #[arg(long, conflicts_with = "from_id")]
    pub all: bool,
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One page as requested, or every item when `--all` is set
pub(crate) async fn fetch_items<T, F, Fut>(args: &PageArgs, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    match args.all {
        true => collect_with_progress(fetch).await,
        false => Ok(fetch(args.from_id.clone()).await?.data),
    }
}

/// Print a single page with its cursor, or every item when `--all` is set
pub(crate) async fn print_pages<T, F, Fut>(args: &PageArgs, mut fetch: F) -> Result<()>
where
    T: Serialize,
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    match args.all {
        true => print_json(&collect_with_progress(fetch).await?),
        false => print_json(&fetch(args.from_id.clone()).await?),
    }
}

#[instrument(name = "Fetching pages", skip_all)]
async fn collect_with_progress<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let span = Span::current();
    span.pb_set_style(
        &ProgressStyle::with_template("{spinner} [{elapsed_precise}] {pos} items {msg}")?,
    );
    span.pb_set_message("fetched");

    collect_all(|from_id| {
        let page = fetch(from_id);
        let span = span.clone();
        async move {
            let page = page.await?;
            span.pb_inc(page.data.len() as u64);
            Ok(page)
        }
    })
    .await
}
