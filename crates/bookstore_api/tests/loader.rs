use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bookstore_api::{
    ApiError, ListEvent, ListEventSink, ListLoader, ListSource, LoadErrorKind, LoadKind,
    LoadOutcome, SkipReason,
};
use bookstore_core::{FilterSet, ListItem, PageApplied, PageRequest, PageResult};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    id: u32,
}

impl ListItem for Row {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

fn rows(ids: std::ops::Range<u32>) -> Vec<Row> {
    ids.map(|id| Row { id }).collect()
}

/// Serves a pre-scripted response per fetch and records every request.
struct ScriptedSource {
    responses: Mutex<VecDeque<Result<PageResult<Row>, ApiError>>>,
    requests: Arc<Mutex<Vec<PageRequest>>>,
}

impl ScriptedSource {
    fn new(responses: Vec<Result<PageResult<Row>, ApiError>>) -> (Self, Arc<Mutex<Vec<PageRequest>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let source = Self {
            responses: Mutex::new(responses.into()),
            requests: requests.clone(),
        };
        (source, requests)
    }
}

#[async_trait]
impl ListSource for ScriptedSource {
    type Item = Row;

    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult<Row>, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("script exhausted")
    }
}

#[derive(Default, Clone)]
struct TestSink {
    events: Arc<Mutex<Vec<ListEvent>>>,
}

impl TestSink {
    fn new() -> Self {
        Self::default()
    }

    fn take(&self) -> Vec<ListEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ListEventSink for TestSink {
    fn emit(&self, event: ListEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn applied(outcome: Result<LoadOutcome, bookstore_api::LoadError>) -> PageApplied {
    match outcome.expect("load failed") {
        LoadOutcome::Applied(applied) => applied,
        LoadOutcome::Skipped(reason) => panic!("unexpected skip: {reason:?}"),
    }
}

#[tokio::test]
async fn refresh_merges_page_one_and_notifies() {
    let (source, _) = ScriptedSource::new(vec![Ok(PageResult::counted(rows(0..15), 47))]);
    let sink = TestSink::new();
    let mut loader = ListLoader::new(source, 15).with_sink(sink.clone());

    let outcome = applied(loader.refresh(FilterSet::new()).await);

    assert_eq!(
        outcome,
        PageApplied {
            start: 0,
            appended: 15,
            duplicates: 0,
            page: 1,
            shown: 15,
            total: Some(47),
            can_load_more: true,
        }
    );
    assert_eq!(loader.len(), 15);
    assert_eq!(
        sink.take(),
        vec![
            ListEvent::Cleared,
            ListEvent::Appended {
                start: 0,
                count: 15,
                shown: 15,
                total: Some(47),
                can_load_more: true,
            },
        ]
    );
}

#[tokio::test]
async fn walks_forty_seven_rows_in_pages_of_fifteen() {
    let (source, requests) = ScriptedSource::new(vec![
        Ok(PageResult::counted(rows(0..15), 47)),
        Ok(PageResult::counted(rows(15..30), 47)),
        Ok(PageResult::counted(rows(30..45), 47)),
        Ok(PageResult::counted(rows(45..47), 47)),
    ]);
    let mut loader = ListLoader::new(source, 15);

    loader.refresh(FilterSet::new()).await.unwrap();
    while loader.can_load_more() {
        applied(loader.load_more().await);
    }

    assert_eq!(loader.len(), 47);
    assert_eq!(loader.total(), Some(47));
    let pages: Vec<u32> = requests.lock().unwrap().iter().map(|r| r.page).collect();
    assert_eq!(pages, vec![1, 2, 3, 4]);

    // The exhausted list answers further calls without fetching.
    let outcome = loader.load_more().await.unwrap();
    assert_eq!(outcome, LoadOutcome::Skipped(SkipReason::Exhausted));
    assert_eq!(requests.lock().unwrap().len(), 4);
}

#[tokio::test]
async fn failed_load_more_keeps_rows_and_retries_the_same_page() {
    let (source, requests) = ScriptedSource::new(vec![
        Ok(PageResult::counted(rows(0..15), 47)),
        Err(ApiError::Network("connection reset".into())),
        Ok(PageResult::counted(rows(15..30), 47)),
    ]);
    let sink = TestSink::new();
    let mut loader = ListLoader::new(source, 15).with_sink(sink.clone());

    loader.refresh(FilterSet::new()).await.unwrap();
    let err = loader.load_more().await.unwrap_err();

    assert_eq!(err.kind, LoadErrorKind::Transport);
    assert_eq!(loader.len(), 15, "partial rows must survive the failure");
    assert!(loader.can_load_more());
    let failed = sink
        .take()
        .into_iter()
        .find_map(|event| match event {
            ListEvent::Failed { kind, error } => Some((kind, error.kind)),
            _ => None,
        })
        .expect("a failure event");
    assert_eq!(failed, (LoadKind::LoadMore, LoadErrorKind::Transport));

    applied(loader.load_more().await);
    assert_eq!(loader.len(), 30);
    let pages: Vec<u32> = requests.lock().unwrap().iter().map(|r| r.page).collect();
    assert_eq!(pages, vec![1, 2, 2], "the failed page is fetched again");
}

#[tokio::test]
async fn failed_refresh_leaves_an_empty_list() {
    let (source, _) = ScriptedSource::new(vec![
        Ok(PageResult::counted(rows(0..15), 47)),
        Err(ApiError::Timeout),
    ]);
    let sink = TestSink::new();
    let mut loader = ListLoader::new(source, 15).with_sink(sink.clone());

    loader.refresh(FilterSet::new()).await.unwrap();
    sink.take();

    let err = loader.refresh(FilterSet::new()).await.unwrap_err();
    assert_eq!(err.kind, LoadErrorKind::Transport);
    assert!(loader.is_empty(), "a refresh clears before fetching");
    assert_eq!(
        sink.take(),
        vec![
            ListEvent::Cleared,
            ListEvent::Failed {
                kind: LoadKind::Refresh,
                error: err,
            },
        ]
    );
}

#[tokio::test]
async fn refresh_with_new_filters_replaces_the_rows() {
    let (source, requests) = ScriptedSource::new(vec![
        Ok(PageResult::counted(rows(0..3), 3)),
        Ok(PageResult::counted(rows(100..104), 4)),
    ]);
    let mut loader = ListLoader::new(source, 15);

    loader
        .refresh(FilterSet::new().with("role", "Admin"))
        .await
        .unwrap();
    loader
        .refresh(FilterSet::new().with("role", "Staff"))
        .await
        .unwrap();

    let ids: Vec<u32> = loader.items().iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![100, 101, 102, 103]);

    let recorded = requests.lock().unwrap();
    assert_eq!(recorded[0].filters, FilterSet::new().with("role", "Admin"));
    assert_eq!(recorded[1].filters, FilterSet::new().with("role", "Staff"));
}

#[tokio::test]
async fn overlapping_pages_are_deduplicated() {
    let (source, _) = ScriptedSource::new(vec![
        Ok(PageResult::counted(rows(0..5), 12)),
        Ok(PageResult::counted(rows(3..8), 12)),
    ]);
    let mut loader = ListLoader::new(source, 5);

    loader.refresh(FilterSet::new()).await.unwrap();
    let outcome = applied(loader.load_more().await);

    assert_eq!(outcome.appended, 3);
    assert_eq!(outcome.duplicates, 2);
    let ids: Vec<u32> = loader.items().iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6, 7]);
}

#[tokio::test]
async fn staged_filters_ride_on_the_next_fetch() {
    let (source, requests) = ScriptedSource::new(vec![Ok(PageResult::counted(rows(0..2), 2))]);
    let mut loader = ListLoader::new(source, 15);

    loader.set_filters(FilterSet::new().with("search", "twain"));
    assert!(requests.lock().unwrap().is_empty(), "staging must not fetch");

    loader.load_more().await.unwrap();
    let recorded = requests.lock().unwrap();
    assert_eq!(
        recorded[0].filters,
        FilterSet::new().with("search", "twain")
    );
}

#[tokio::test]
async fn append_events_carry_row_ranges() {
    let (source, _) = ScriptedSource::new(vec![
        Ok(PageResult::counted(rows(0..15), 30)),
        Ok(PageResult::counted(rows(15..30), 30)),
    ]);
    let sink = TestSink::new();
    let mut loader = ListLoader::new(source, 15).with_sink(sink.clone());

    loader.refresh(FilterSet::new()).await.unwrap();
    loader.load_more().await.unwrap();

    let ranges: Vec<(usize, usize)> = sink
        .take()
        .into_iter()
        .filter_map(|event| match event {
            ListEvent::Appended { start, count, .. } => Some((start, count)),
            _ => None,
        })
        .collect();
    assert_eq!(ranges, vec![(0, 15), (15, 15)]);
}
