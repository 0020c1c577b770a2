//! Lazy iteration over server-paginated collections.
//!
//! List endpoints answer with a collection envelope:
//!
//! ```json
//! { "rules": [ ... ], "_links": { "next": { "href": "https://..." } } }
//! ```
//!
//! [`PageStream`] follows the `next` links one request at a time and yields
//! each page's entities. [`PaginatedStream`] owns a `PageStream` and
//! flattens it into individual entities; [`PaginatedStream::by_page`] lends
//! out the same page cursor for callers that prefer whole pages.
//!
//! Nothing is fetched until the stream is polled, each poll that needs data
//! issues exactly one request, and no page is fetched ahead of time.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::future::BoxFuture;
use futures_util::stream::FusedStream;
use futures_util::{ready, Stream, StreamExt};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::http::{ClientInner, RequestOptions};
use super::transport::Method;
use crate::auth::Credentials;
use crate::models::{Link, PreferReturn};
use crate::{Error, Result};

/// Pulls the entity array out of a collection response body.
pub type EntityAccessor<T> = Arc<dyn Fn(&mut Value) -> Result<Vec<T>> + Send + Sync>;

/// Accessor that takes and deserializes the array stored under `field`.
///
/// # Example
///
/// ```
/// use property_validation::client::field_accessor;
///
/// let accessor = field_accessor::<String>("ruleTemplates");
/// let mut body = serde_json::json!({ "ruleTemplates": ["a", "b"], "_links": {} });
/// assert_eq!(accessor(&mut body).unwrap(), vec!["a", "b"]);
/// ```
pub fn field_accessor<T>(field: &'static str) -> EntityAccessor<T>
where
    T: DeserializeOwned,
{
    Arc::new(move |body: &mut Value| {
        let entities = body
            .get_mut(field)
            .map(Value::take)
            .ok_or_else(|| {
                Error::Protocol(format!("collection response is missing `{}`", field))
            })?;
        serde_json::from_value(entities)
            .map_err(|e| Error::Protocol(format!("malformed `{}` array: {}", field, e)))
    })
}

/// One page of a collection.
#[derive(Debug, Clone)]
pub struct Page<T> {
    entities: Vec<T>,
    next: Option<String>,
}

impl<T> Page<T> {
    /// Create a page.
    pub fn new(entities: Vec<T>, next: Option<String>) -> Self {
        Self { entities, next }
    }

    /// The entities, in server order.
    pub fn entities(&self) -> &[T] {
        &self.entities
    }

    /// URL of the following page, `None` on the last page.
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Returns `true` if this is the last page.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }

    /// Take the entities out of the page.
    pub fn into_entities(self) -> Vec<T> {
        self.entities
    }
}

#[derive(Deserialize)]
struct CollectionLinks {
    #[serde(default)]
    next: Option<Link>,
}

/// Split a collection envelope into a [`Page`].
pub fn parse_collection<T>(mut body: Value, accessor: &EntityAccessor<T>) -> Result<Page<T>> {
    if !body.is_object() {
        return Err(Error::Protocol(
            "collection response is not a JSON object".to_string(),
        ));
    }

    let links = body
        .get_mut("_links")
        .map(Value::take)
        .ok_or_else(|| Error::Protocol("collection response is missing `_links`".to_string()))?;
    let links: CollectionLinks = serde_json::from_value(links)
        .map_err(|e| Error::Protocol(format!("malformed `_links`: {}", e)))?;

    let entities = accessor(&mut body)?;
    Ok(Page::new(entities, links.next.map(|link| link.href)))
}

/// Everything needed to fetch the pages of one listing.
///
/// Built once by a list operation and shared, read-only, by every page
/// request of the resulting stream.
pub struct CollectionQuery<T> {
    url: String,
    accessor: EntityAccessor<T>,
    prefer: Option<PreferReturn>,
    user_metadata: bool,
}

impl<T> CollectionQuery<T> {
    /// Query starting at `url`, extracting entities with `accessor`.
    pub fn new(url: impl Into<String>, accessor: EntityAccessor<T>) -> Self {
        Self {
            url: url.into(),
            accessor,
            prefer: None,
            user_metadata: false,
        }
    }

    /// Request the given representation through the `Prefer` header.
    pub fn prefer(mut self, prefer: PreferReturn) -> Self {
        self.prefer = Some(prefer);
        self
    }

    /// Ask for creator/modifier links.
    pub fn user_metadata(mut self, enabled: bool) -> Self {
        self.user_metadata = enabled;
        self
    }

    /// URL of the first page.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn options(&self) -> RequestOptions {
        RequestOptions {
            prefer: self.prefer,
            user_metadata: self.user_metadata,
        }
    }
}

impl<T> std::fmt::Debug for CollectionQuery<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionQuery")
            .field("url", &self.url)
            .field("prefer", &self.prefer)
            .field("user_metadata", &self.user_metadata)
            .finish()
    }
}

/// Performs one page round trip for a [`CollectionQuery`].
pub(crate) struct PageFetcher<T> {
    inner: Arc<ClientInner>,
    credentials: Credentials,
    query: Arc<CollectionQuery<T>>,
}

impl<T> Clone for PageFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            credentials: self.credentials.clone(),
            query: self.query.clone(),
        }
    }
}

impl<T> PageFetcher<T> {
    pub(crate) fn new(
        inner: Arc<ClientInner>,
        credentials: Credentials,
        query: CollectionQuery<T>,
    ) -> Self {
        Self {
            inner,
            credentials,
            query: Arc::new(query),
        }
    }

    pub(crate) async fn fetch(&self, url: String) -> Result<Page<T>> {
        tracing::debug!(%url, "fetching page");
        let body = self
            .inner
            .send(&self.credentials, Method::Get, url, None, self.query.options())
            .await?;

        let page = parse_collection(body, &self.query.accessor)?;
        tracing::debug!(
            entities = page.entities.len(),
            has_next = page.next.is_some(),
            "fetched page"
        );
        Ok(page)
    }
}

type FetchPage<T> = Box<dyn Fn(String) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync>;

enum Cursor<T> {
    /// Next pull fetches this URL.
    Ready(String),
    /// A fetch is in flight.
    Fetching(BoxFuture<'static, Result<Page<T>>>),
    /// No further pages.
    Exhausted,
}

/// A stream of pages that follows `next` links.
///
/// Each item is the entity array of one page. The stream ends after the
/// first page without a `next` link, or right after yielding an error.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use property_validation::models::CollectionParams;
///
/// # async fn example(client: property_validation::PropertyValidationClient) -> property_validation::Result<()> {
/// let mut rules = client.rules().list_minimal(CollectionParams::new("my-project").top(50))?;
///
/// let pages = rules.by_page();
/// while let Some(page) = pages.next().await {
///     println!("got {} rules", page?.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct PageStream<T> {
    fetch_page: FetchPage<T>,
    cursor: Cursor<T>,
}

impl<T> PageStream<T> {
    /// Create a page stream starting at `url`.
    ///
    /// `fetch_page` is called once per page with the URL to fetch.
    pub fn new<F>(url: impl Into<String>, fetch_page: F) -> Self
    where
        F: Fn(String) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            cursor: Cursor::Ready(url.into()),
        }
    }

    /// Returns `true` once no further page will be fetched.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.cursor, Cursor::Exhausted)
    }
}

impl<T> Stream for PageStream<T> {
    type Item = Result<Vec<T>>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            match std::mem::replace(&mut this.cursor, Cursor::Exhausted) {
                Cursor::Ready(url) => {
                    this.cursor = Cursor::Fetching((this.fetch_page)(url));
                }
                Cursor::Fetching(mut fut) => {
                    return match fut.as_mut().poll(cx) {
                        Poll::Pending => {
                            this.cursor = Cursor::Fetching(fut);
                            Poll::Pending
                        }
                        Poll::Ready(Ok(page)) => {
                            if let Some(next) = page.next {
                                this.cursor = Cursor::Ready(next);
                            }
                            Poll::Ready(Some(Ok(page.entities)))
                        }
                        // Stop on error
                        Poll::Ready(Err(e)) => Poll::Ready(Some(Err(e))),
                    };
                }
                Cursor::Exhausted => return Poll::Ready(None),
            }
        }
    }
}

impl<T> FusedStream for PageStream<T> {
    fn is_terminated(&self) -> bool {
        self.is_exhausted()
    }
}

impl<T> std::fmt::Debug for PageStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cursor = match &self.cursor {
            Cursor::Ready(url) => format!("Ready({})", url),
            Cursor::Fetching(_) => "Fetching".to_string(),
            Cursor::Exhausted => "Exhausted".to_string(),
        };
        f.debug_struct("PageStream").field("cursor", &cursor).finish()
    }
}

/// A stream of entities that lazily fetches pages from a paginated
/// endpoint.
///
/// This stream yields individual entities from each page, fetching the next
/// page only when the current one is drained. Use [`by_page`](Self::by_page)
/// to consume whole pages from the same cursor instead. Mixing the two on
/// one stream is allowed, but entities already buffered for per-entity
/// iteration are not returned by the page view.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use property_validation::models::CollectionParams;
///
/// # async fn example(client: property_validation::PropertyValidationClient) -> property_validation::Result<()> {
/// let mut tests = client.tests().list(CollectionParams::new("my-project"))?;
///
/// while let Some(result) = tests.next().await {
///     let test = result?;
///     println!("{}: {}", test.id, test.display_name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    pages: PageStream<T>,
    current_items: std::vec::IntoIter<T>,
}

impl<T> PaginatedStream<T> {
    /// Flatten `pages` into entities.
    pub fn new(pages: PageStream<T>) -> Self {
        Self {
            pages,
            current_items: Vec::new().into_iter(),
        }
    }

    /// Borrow the underlying page cursor.
    pub fn by_page(&mut self) -> &mut PageStream<T> {
        &mut self.pages
    }

    /// Give up per-entity iteration and keep only the page cursor.
    pub fn into_pages(self) -> PageStream<T> {
        self.pages
    }

    /// Collect up to `limit` entities, stopping as soon as enough are in hand.
    pub async fn take_entities(&mut self, limit: usize) -> Result<Vec<T>> {
        take(self, limit).await
    }
}

impl<T: Send + 'static> PaginatedStream<T> {
    /// Build the stream for `query`, failing fast if no credential source
    /// is available.
    pub(crate) fn from_query(
        inner: Arc<ClientInner>,
        credentials: Credentials,
        query: CollectionQuery<T>,
    ) -> Result<Self> {
        credentials.ensure_available()?;

        let url = query.url.clone();
        let fetcher = PageFetcher::new(inner, credentials, query);

        Ok(Self::new(PageStream::new(url, move |url: String| {
            let fetcher = fetcher.clone();
            Box::pin(async move { fetcher.fetch(url).await })
        })))
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.next() {
                return Poll::Ready(Some(Ok(item)));
            }

            // Current page drained; empty pages fall through to the next pull
            match ready!(this.pages.poll_next_unpin(cx)) {
                Some(Ok(items)) => this.current_items = items.into_iter(),
                Some(Err(e)) => return Poll::Ready(Some(Err(e))),
                None => return Poll::Ready(None),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.current_items.len();
        if self.pages.is_exhausted() {
            (buffered, Some(buffered))
        } else {
            (buffered, None)
        }
    }
}

impl<T> FusedStream for PaginatedStream<T> {
    fn is_terminated(&self) -> bool {
        self.pages.is_exhausted() && self.current_items.as_slice().is_empty()
    }
}

impl<T> Unpin for PaginatedStream<T> {}

impl<T> std::fmt::Debug for PaginatedStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedStream")
            .field("pages", &self.pages)
            .field("buffered", &self.current_items.len())
            .finish()
    }
}

/// Pull items until `limit` are collected or the stream ends.
///
/// Works with both entity and page streams. No item past `limit` is
/// requested, so no page past the one holding the last wanted item is
/// fetched. The first error is returned as is.
pub async fn take<S, T>(stream: &mut S, limit: usize) -> Result<Vec<T>>
where
    S: Stream<Item = Result<T>> + Unpin + ?Sized,
{
    let mut items = Vec::with_capacity(limit.min(256));
    while items.len() < limit {
        match stream.next().await {
            Some(item) => items.push(item?),
            None => break,
        }
    }
    Ok(items)
}

/// Drain the whole stream into a vector.
pub async fn collect_all<S, T>(stream: &mut S) -> Result<Vec<T>>
where
    S: Stream<Item = Result<T>> + Unpin + ?Sized,
{
    let mut items = Vec::new();
    while let Some(item) = stream.next().await {
        items.push(item?);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;
    use crate::client::config::ClientConfig;
    use crate::client::transport::mock::MockTransport;
    use crate::client::PropertyValidationClient;

    /// Stream over in-memory pages that counts fetches.
    fn scripted(pages: Vec<(Vec<&'static str>, Option<&'static str>)>) -> (PageStream<&'static str>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let pages = Arc::new(pages);

        let stream = PageStream::new("page-0", move |url: String| {
            counter.fetch_add(1, Ordering::SeqCst);
            let pages = pages.clone();
            Box::pin(async move {
                let index: usize = url.trim_start_matches("page-").parse().unwrap();
                let (entities, next) = pages[index].clone();
                Ok(Page::new(entities, next.map(String::from)))
            })
        });

        (stream, calls)
    }

    fn client_with(transport: Arc<MockTransport>) -> PropertyValidationClient {
        PropertyValidationClient::with_transport(
            transport,
            ClientConfig::default().with_base_url("https://host/api"),
        )
        .unwrap()
    }

    fn items_query() -> CollectionQuery<String> {
        CollectionQuery::new("https://host/api/items", field_accessor("items"))
    }

    #[tokio::test]
    async fn test_entities_are_flattened_in_order() {
        let (pages, calls) = scripted(vec![
            (vec!["a", "b"], Some("page-1")),
            (vec!["c"], Some("page-2")),
            (vec!["d", "e"], None),
        ]);
        let mut stream = PaginatedStream::new(pages);

        let all = collect_all(&mut stream).await.unwrap();

        assert_eq!(all, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_pages_terminate_without_extra_fetches() {
        let (mut pages, calls) = scripted(vec![
            (vec!["a"], Some("page-1")),
            (vec!["b"], None),
        ]);

        assert_eq!(pages.next().await.unwrap().unwrap(), vec!["a"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(pages.next().await.unwrap().unwrap(), vec!["b"]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(pages.is_exhausted());

        assert!(pages.next().await.is_none());
        assert!(pages.next().await.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_nothing_is_fetched_before_polling() {
        let (pages, calls) = scripted(vec![(vec!["a"], None)]);
        let stream = PaginatedStream::new(pages);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        drop(stream);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_intermediate_page_is_skipped() {
        let (pages, calls) = scripted(vec![
            (vec!["a"], Some("page-1")),
            (vec![], Some("page-2")),
            (vec!["b"], None),
        ]);
        let mut stream = PaginatedStream::new(pages);

        assert_eq!(collect_all(&mut stream).await.unwrap(), vec!["a", "b"]);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_take_stops_pulling_at_limit() {
        let (pages, calls) = scripted(vec![
            (vec!["a", "b"], Some("page-1")),
            (vec!["c", "d"], Some("page-2")),
            (vec!["e"], None),
        ]);
        let mut stream = PaginatedStream::new(pages);

        assert_eq!(take(&mut stream, 1).await.unwrap(), vec!["a"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert_eq!(stream.take_entities(2).await.unwrap(), vec!["b", "c"]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_take_more_than_available() {
        let (pages, calls) = scripted(vec![(vec!["a", "b"], Some("page-1")), (vec!["c"], None)]);
        let mut stream = PaginatedStream::new(pages);

        assert_eq!(take(&mut stream, 10).await.unwrap(), vec!["a", "b", "c"]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_take_zero_fetches_nothing() {
        let (pages, calls) = scripted(vec![(vec!["a"], None)]);
        let mut stream = PaginatedStream::new(pages);

        assert!(take(&mut stream, 0).await.unwrap().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_take_pages() {
        let (pages, calls) = scripted(vec![
            (vec!["a", "b"], Some("page-1")),
            (vec!["c"], Some("page-2")),
            (vec!["d"], None),
        ]);
        let mut stream = PaginatedStream::new(pages);

        let first_two = take(stream.by_page(), 2).await.unwrap();
        assert_eq!(first_two, vec![vec!["a", "b"], vec!["c"]]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_by_page_shares_the_cursor() {
        let (pages, _) = scripted(vec![
            (vec!["a", "b"], Some("page-1")),
            (vec!["c"], Some("page-2")),
            (vec!["d"], None),
        ]);
        let mut stream = PaginatedStream::new(pages);

        assert_eq!(stream.by_page().next().await.unwrap().unwrap(), vec!["a", "b"]);
        assert_eq!(stream.next().await.unwrap().unwrap(), "c");
        assert_eq!(collect_all(&mut stream).await.unwrap(), vec!["d"]);
        assert!(stream.is_terminated());
    }

    #[tokio::test]
    async fn test_end_to_end_per_entity() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(json!({ "items": ["A", "B"], "_links": { "next": { "href": "url2" } } }))
                .respond(json!({ "items": ["C"], "_links": {} })),
        );
        let client = client_with(transport.clone());
        let credentials = client.inner.credentials().with_token("t");

        let mut stream =
            PaginatedStream::from_query(client.inner.clone(), credentials, items_query()).unwrap();
        let all = collect_all(&mut stream).await.unwrap();

        assert_eq!(all, vec!["A", "B", "C"]);
        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, "https://host/api/items");
        assert_eq!(requests[1].url, "url2");
        assert!(requests.iter().all(|r| r.method == Method::Get));
    }

    #[tokio::test]
    async fn test_end_to_end_per_page() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(json!({ "items": ["A", "B"], "_links": { "next": { "href": "url2" } } }))
                .respond(json!({ "items": ["C"], "_links": {} })),
        );
        let client = client_with(transport.clone());
        let credentials = client.inner.credentials().with_token("t");

        let stream =
            PaginatedStream::from_query(client.inner.clone(), credentials, items_query()).unwrap();
        let mut pages = stream.into_pages();
        let all = collect_all(&mut pages).await.unwrap();

        assert_eq!(all, vec![vec!["A".to_string(), "B".to_string()], vec!["C".to_string()]]);
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_hints_are_sent_on_every_page() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(json!({ "items": [], "_links": { "next": { "href": "url2" } } }))
                .respond(json!({ "items": [], "_links": { "next": null } })),
        );
        let client = client_with(transport.clone());
        let credentials = client.inner.credentials().with_token("t");
        let query = items_query()
            .prefer(PreferReturn::Representation)
            .user_metadata(true);

        let mut stream = PaginatedStream::from_query(client.inner.clone(), credentials, query).unwrap();
        assert!(collect_all(&mut stream).await.unwrap().is_empty());

        for request in transport.requests() {
            assert_eq!(request.headers["prefer"], "return=representation");
            assert_eq!(request.headers["include-user-metadata"], "true");
            assert_eq!(request.headers["authorization"], "Bearer t");
        }
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_before_transport() {
        let transport = Arc::new(MockTransport::new());
        let client = client_with(transport.clone());

        let result =
            PaginatedStream::from_query(client.inner.clone(), client.inner.credentials(), items_query());

        assert!(matches!(result, Err(Error::AuthenticationRequired)));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_error_surfaces_at_failing_pull() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(json!({ "items": ["A"], "_links": { "next": { "href": "url2" } } }))
                .fail(Error::from_api_response(503, json!({}))),
        );
        let client = client_with(transport.clone());
        let credentials = client.inner.credentials().with_token("t");
        let mut stream =
            PaginatedStream::from_query(client.inner.clone(), credentials, items_query()).unwrap();

        assert_eq!(stream.next().await.unwrap().unwrap(), "A");
        let err = stream.next().await.unwrap().unwrap_err();
        assert!(err.is_server_error());

        // The cursor stops after an error
        assert!(stream.next().await.is_none());
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_take_returns_first_error() {
        let transport = Arc::new(MockTransport::new().fail(Error::NotFound("gone".into())));
        let client = client_with(transport);
        let credentials = client.inner.credentials().with_token("t");
        let mut stream =
            PaginatedStream::from_query(client.inner.clone(), credentials, items_query()).unwrap();

        assert!(matches!(take(&mut stream, 3).await, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_parse_collection_missing_links() {
        let accessor = field_accessor::<String>("items");
        let result = parse_collection(json!({ "items": [] }), &accessor);
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[test]
    fn test_parse_collection_malformed_next() {
        let accessor = field_accessor::<String>("items");
        let result = parse_collection(json!({ "items": [], "_links": { "next": { "url": "x" } } }), &accessor);
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[test]
    fn test_parse_collection_missing_field() {
        let accessor = field_accessor::<String>("rules");
        match parse_collection(json!({ "tests": [], "_links": {} }), &accessor) {
            Err(Error::Protocol(msg)) => assert!(msg.contains("`rules`")),
            other => panic!("Expected Protocol error, got {:?}", other.map(|p| p.into_entities())),
        }
    }

    #[test]
    fn test_parse_collection_not_an_object() {
        let accessor = field_accessor::<String>("items");
        assert!(matches!(
            parse_collection(json!(["a"]), &accessor),
            Err(Error::Protocol(_))
        ));
    }

    #[test]
    fn test_parse_collection_reads_next() {
        let accessor = field_accessor::<u32>("items");
        let page = parse_collection(
            json!({ "items": [1, 2], "_links": { "next": { "href": "https://host/items?continuationToken=x" } } }),
            &accessor,
        )
        .unwrap();
        assert_eq!(page.entities(), &[1, 2]);
        assert_eq!(page.next(), Some("https://host/items?continuationToken=x"));
        assert!(!page.is_last());
    }
}
