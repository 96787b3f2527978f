//! Forward-token pagination over `GetLogEvents`.
//!
//! The service never says "no more pages" explicitly. Instead it hands back
//! the same forward token it was given once the stream is exhausted, so the
//! loop compares each response's token with the token the request *sent*.

#![warn(clippy::all, rust_2018_idioms)]

use tracing::{debug, info};

use crate::app::csv_sink::EventSink;
use crate::app::error::DownloadError;

use super::client::LogEventsApi;
use super::types::{FetchRequest, FetchSummary, LogEvent};

/// Reads every event of one log stream, oldest first
pub struct LogFetcher<A> {
    api: A,
}

impl<A: LogEventsApi> LogFetcher<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    #[cfg(test)]
    fn api(&self) -> &A {
        &self.api
    }

    /// Lazily page through `log_group`/`log_stream`
    pub fn fetch(&self, log_group: &str, log_stream: &str) -> LogEventPages<'_, A> {
        LogEventPages {
            api: &self.api,
            request: FetchRequest::new(log_group, log_stream),
            exhausted: false,
            calls: 0,
        }
    }

    /// Stream every event of the log stream into `sink`, page by page
    ///
    /// Events are written as each page arrives, so an API failure part-way
    /// through leaves the earlier pages in the sink.
    pub async fn fetch_into<S: EventSink>(
        &self,
        log_group: &str,
        log_stream: &str,
        sink: &mut S,
    ) -> Result<FetchSummary, DownloadError> {
        let mut pages = self.fetch(log_group, log_stream);
        let mut summary = FetchSummary::default();

        while let Some(events) = pages.next_page().await? {
            for event in &events {
                sink.write_event(event)?;
            }
            summary.record_page(&events);
        }

        Ok(summary)
    }
}

/// Cursor over the pages of one stream
pub struct LogEventPages<'a, A> {
    api: &'a A,
    request: FetchRequest,
    exhausted: bool,
    calls: usize,
}

impl<A: LogEventsApi> LogEventPages<'_, A> {
    /// Fetch the next page, or `None` once the forward token stopped advancing
    pub async fn next_page(&mut self) -> Result<Option<Vec<LogEvent>>, DownloadError> {
        if self.exhausted {
            return Ok(None);
        }

        let response = match self.api.get_log_events(&self.request).await {
            Ok(response) => response,
            Err(err) => {
                self.exhausted = true;
                return Err(DownloadError::Api(err));
            }
        };
        self.calls += 1;

        info!(
            page = self.calls,
            token = self.request.sent_token(),
            events = response.events.len(),
            "Fetched log events"
        );

        match response.next_forward_token {
            Some(token) if token != self.request.sent_token() => {
                self.request.next_token = Some(token);
            }
            Some(_) => {
                debug!("Forward token unchanged, stream exhausted");
                self.exhausted = true;
            }
            None => {
                debug!("No forward token returned, stopping");
                self.exhausted = true;
            }
        }

        Ok(Some(response.events))
    }

    /// Number of `GetLogEvents` calls issued so far
    #[cfg(test)]
    fn calls(&self) -> usize {
        self.calls
    }

    /// The request the next call would send
    #[cfg(test)]
    fn request(&self) -> &FetchRequest {
        &self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::data_plane::cloudwatch_logs::types::FetchResponse;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Answers by the token it receives, like the real service does
    struct ScriptedApi {
        pages: HashMap<Option<String>, FetchResponse>,
        sent: Mutex<Vec<Option<String>>>,
    }

    impl ScriptedApi {
        fn new() -> Self {
            Self {
                pages: HashMap::new(),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn page(mut self, token: Option<&str>, response: FetchResponse) -> Self {
            self.pages.insert(token.map(str::to_string), response);
            self
        }

        fn sent(&self) -> Vec<Option<String>> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LogEventsApi for ScriptedApi {
        async fn get_log_events(&self, request: &FetchRequest) -> anyhow::Result<FetchResponse> {
            assert!(request.start_from_head);
            self.sent.lock().unwrap().push(request.next_token.clone());
            self.pages
                .get(&request.next_token)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("ResourceNotFoundException"))
        }
    }

    #[derive(Default)]
    struct VecSink(Vec<LogEvent>);

    impl EventSink for VecSink {
        fn write_event(&mut self, event: &LogEvent) -> Result<(), DownloadError> {
            self.0.push(event.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_two_pages_ending_on_repeated_token() {
        let api = ScriptedApi::new()
            .page(None, FetchResponse::new(vec![LogEvent::new(1000, "a")], "T1"))
            .page(Some("T1"), FetchResponse::new(vec![LogEvent::new(2000, "b")], "T1"));
        let fetcher = LogFetcher::new(api);
        let mut sink = VecSink::default();

        let summary = fetcher.fetch_into("group", "stream", &mut sink).await.unwrap();

        assert_eq!(summary.pages, 2);
        assert_eq!(summary.events, 2);
        assert_eq!(
            sink.0,
            vec![LogEvent::new(1000, "a"), LogEvent::new(2000, "b")]
        );
        assert_eq!(fetcher.api().sent(), vec![None, Some("T1".to_string())]);
    }

    #[tokio::test]
    async fn test_n_distinct_tokens_take_n_plus_one_calls() {
        let n = 5;
        let mut api = ScriptedApi::new().page(
            None,
            FetchResponse::new(vec![LogEvent::new(0, "start")], "T1"),
        );
        for i in 1..n {
            api = api.page(
                Some(format!("T{}", i).as_str()),
                FetchResponse::new(vec![LogEvent::new(i, format!("e{}", i))], format!("T{}", i + 1)),
            );
        }
        api = api.page(Some(format!("T{}", n).as_str()), FetchResponse::new(vec![], format!("T{}", n)));

        let fetcher = LogFetcher::new(api);
        let mut pages = fetcher.fetch("group", "stream");
        let mut total = 0;
        while let Some(events) = pages.next_page().await.unwrap() {
            total += events.len();
        }

        assert_eq!(pages.calls(), n as usize + 1);
        assert_eq!(total, n as usize);
        assert_eq!(fetcher.api().sent().len(), n as usize + 1);
    }

    #[tokio::test]
    async fn test_empty_stream_echoing_empty_token_stops_after_one_call() {
        let api = ScriptedApi::new().page(None, FetchResponse::new(vec![], ""));
        let fetcher = LogFetcher::new(api);
        let mut sink = VecSink::default();

        let summary = fetcher.fetch_into("group", "stream", &mut sink).await.unwrap();

        assert_eq!(summary.pages, 1);
        assert!(sink.0.is_empty());
    }

    #[tokio::test]
    async fn test_empty_stream_needing_token_echo_takes_two_calls() {
        let api = ScriptedApi::new()
            .page(None, FetchResponse::new(vec![], "T0"))
            .page(Some("T0"), FetchResponse::new(vec![], "T0"));
        let fetcher = LogFetcher::new(api);
        let mut sink = VecSink::default();

        let summary = fetcher.fetch_into("group", "stream", &mut sink).await.unwrap();

        assert_eq!(summary.pages, 2);
        assert_eq!(summary.events, 0);
    }

    #[tokio::test]
    async fn test_compares_against_sent_token_not_previous_response() {
        // T1 -> T2 -> T1 must keep going: T1 differs from the sent T2
        let api = ScriptedApi::new()
            .page(None, FetchResponse::new(vec![LogEvent::new(1, "a")], "T1"))
            .page(Some("T1"), FetchResponse::new(vec![LogEvent::new(2, "b")], "T2"))
            .page(Some("T2"), FetchResponse::new(vec![LogEvent::new(3, "c")], "T1"));
        let fetcher = LogFetcher::new(api);
        let mut pages = fetcher.fetch("group", "stream");

        for _ in 0..3 {
            assert!(pages.next_page().await.unwrap().is_some());
        }
        assert_eq!(pages.request().next_token.as_deref(), Some("T1"));

        // Fourth call sends T1 again, which is already answered with T2
        assert!(pages.next_page().await.unwrap().is_some());
        assert_eq!(pages.calls(), 4);
    }

    #[tokio::test]
    async fn test_missing_forward_token_stops() {
        let api = ScriptedApi::new().page(
            None,
            FetchResponse {
                events: vec![LogEvent::new(1, "only")],
                next_forward_token: None,
            },
        );
        let fetcher = LogFetcher::new(api);
        let mut pages = fetcher.fetch("group", "stream");

        assert_eq!(pages.next_page().await.unwrap().map(|e| e.len()), Some(1));
        assert!(pages.next_page().await.unwrap().is_none());
        assert_eq!(pages.calls(), 1);
    }

    #[tokio::test]
    async fn test_api_error_is_fatal_and_keeps_earlier_events() {
        // Second page is not scripted, so the call fails
        let api = ScriptedApi::new().page(
            None,
            FetchResponse::new(vec![LogEvent::new(1000, "kept")], "T1"),
        );
        let fetcher = LogFetcher::new(api);
        let mut sink = VecSink::default();

        let err = fetcher
            .fetch_into("group", "stream", &mut sink)
            .await
            .unwrap_err();

        assert!(matches!(err, DownloadError::Api(_)));
        assert_eq!(sink.0, vec![LogEvent::new(1000, "kept")]);
        assert_eq!(fetcher.api().sent().len(), 2);
    }

    #[tokio::test]
    async fn test_no_calls_after_error() {
        let api = ScriptedApi::new();
        let fetcher = LogFetcher::new(api);
        let mut pages = fetcher.fetch("group", "stream");

        assert!(pages.next_page().await.is_err());
        assert!(pages.next_page().await.unwrap().is_none());
        assert_eq!(fetcher.api().sent().len(), 1);
    }
}
