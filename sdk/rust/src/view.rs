//! Loading/error/data state for one fetched view
//!
//! Every fetch takes a [`FetchTicket`] from [`ViewState::begin`]. Only the
//! ticket of the most recently begun fetch can write its result back; older
//! responses are dropped as [`FetchOutcome::Superseded`] no matter in which
//! order they resolve.

use std::future::Future;

use parking_lot::Mutex;

use crate::error::{ClientError, Resource};

/// Proof of which fetch a result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Superseded,
}

#[derive(Debug)]
pub struct ViewState<T> {
    resource: Resource,
    loading: bool,
    error: Option<String>,
    data: T,
    generation: u64,
}

impl<T: Default> ViewState<T> {
    /// New view, loading until the first fetch resolves
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            loading: true,
            error: None,
            data: T::default(),
            generation: 0,
        }
    }
}

impl<T> ViewState<T> {
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a fetch; any fetch begun earlier becomes stale
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Store a fetch result unless a newer fetch has begun since.
    ///
    /// On error the previous data stays and the generic failure message is
    /// shown.
    pub fn apply(&mut self, ticket: FetchTicket, result: Result<T, ClientError>) -> FetchOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                resource = %self.resource,
                stale = ticket.generation,
                current = self.generation,
                "Discarding superseded response"
            );
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(resource = %self.resource, error = %e, "Fetch failed");
                self.error = Some(self.resource.failure_message().to_string());
            }
        }
        self.loading = false;
        FetchOutcome::Applied
    }
}

/// Run `fetch` against a shared view: begin, await, apply.
///
/// The lock is never held across the await, so overlapping calls on the same
/// view are fine and the last one begun wins.
pub async fn fetch_into<T, F>(view: &Mutex<ViewState<T>>, fetch: F) -> FetchOutcome
where
    F: Future<Output = Result<T, ClientError>>,
{
    let ticket = view.lock().begin();
    let result = fetch.await;
    view.lock().apply(ticket, result)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use httpmock::prelude::*;

    use super::*;
    use crate::client::TraderboardClient;
    use crate::query::{BoundKind, FilterValues};
    use crate::types::{Trader, fixtures};

    fn status_error() -> ClientError {
        ClientError::Status {
            resource: Resource::Traders,
            status: reqwest::StatusCode::BAD_GATEWAY,
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let view: ViewState<Vec<u32>> = ViewState::new(Resource::Traders);
        assert!(view.loading());
        assert!(view.error().is_none());
        assert!(view.data().is_empty());
    }

    #[test]
    fn test_apply_success_and_error() {
        let mut view: ViewState<Vec<u32>> = ViewState::new(Resource::Traders);

        let ticket = view.begin();
        assert_eq!(view.apply(ticket, Ok(vec![1, 2])), FetchOutcome::Applied);
        assert!(!view.loading());
        assert_eq!(view.data(), &vec![1, 2]);

        let ticket = view.begin();
        assert!(view.loading());
        assert_eq!(view.apply(ticket, Err(status_error())), FetchOutcome::Applied);
        assert_eq!(view.error(), Some("Failed to load traders"));
        assert_eq!(view.data(), &vec![1, 2]);
        assert!(!view.loading());

        let ticket = view.begin();
        view.apply(ticket, Ok(vec![3]));
        assert!(view.error().is_none());
    }

    #[test]
    fn test_stale_ticket_is_superseded() {
        let mut view: ViewState<Vec<u32>> = ViewState::new(Resource::Trades);
        let first = view.begin();
        let second = view.begin();

        assert_eq!(view.apply(second, Ok(vec![2])), FetchOutcome::Applied);
        assert_eq!(view.apply(first, Ok(vec![1])), FetchOutcome::Superseded);
        assert_eq!(view.data(), &vec![2]);
        assert_eq!(view.generation(), 2);
    }

    #[test]
    fn test_stale_error_does_not_clobber_newer_data() {
        let mut view: ViewState<Vec<u32>> = ViewState::new(Resource::Traders);
        let first = view.begin();
        let second = view.begin();

        view.apply(second, Ok(vec![7]));
        assert_eq!(
            view.apply(first, Err(status_error())),
            FetchOutcome::Superseded
        );
        assert!(view.error().is_none());
    }

    #[tokio::test]
    async fn test_slow_earlier_fetch_loses_to_newer_fetch() {
        let server = MockServer::start_async().await;
        let slow_rows = vec![fixtures::trader(1, "Slow", "0xslow", "@slow1")];
        let fast_rows = vec![fixtures::trader(2, "Fast", "0xfast", "@fast2")];

        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/traders").query_param("rank_min", "1");
                then.status(200)
                    .delay(Duration::from_millis(300))
                    .json_body(serde_json::to_value(&slow_rows).unwrap());
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/traders").query_param("rank_min", "2");
                then.status(200)
                    .json_body(serde_json::to_value(&fast_rows).unwrap());
            })
            .await;

        let client = TraderboardClient::new(&server.base_url()).unwrap();
        let view: Arc<Mutex<ViewState<Vec<Trader>>>> =
            Arc::new(Mutex::new(ViewState::new(Resource::Traders)));

        let mut first = FilterValues::traders();
        first.set("rank", BoundKind::Min, "1");
        let mut second = FilterValues::traders();
        second.set("rank", BoundKind::Min, "2");

        let slow = {
            let view = view.clone();
            let client = client.clone();
            tokio::spawn(async move { fetch_into(&view, client.fetch_traders(&first)).await })
        };
        // Let the slow fetch take its ticket first
        tokio::time::sleep(Duration::from_millis(50)).await;
        let fast = fetch_into(&view, client.fetch_traders(&second)).await;

        assert_eq!(fast, FetchOutcome::Applied);
        assert_eq!(slow.await.unwrap(), FetchOutcome::Superseded);

        let view = view.lock();
        assert_eq!(view.data(), &fast_rows);
        assert!(!view.loading());
    }
}
