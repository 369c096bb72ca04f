use std::sync::mpsc;
use std::time::Duration;

use bookstore_api::{BookDto, CatalogApi, Debouncer, LoadError};

/// Input shorter than this never hits the network.
const MIN_SEARCH_LEN: usize = 2;
/// Pickers show a shortlist, not a result page.
const SEARCH_RESULT_LIMIT: u32 = 10;
/// How long typing must pause before the lookup fires.
const SEARCH_DELAY: Duration = Duration::from_millis(500);

/// One completed lookup: the term it ran for plus what came back.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub term: String,
    pub result: Result<Vec<BookDto>, LoadError>,
}

/// Debounced book lookup behind the book pickers.
///
/// Every edit reschedules the fetch, so a typing burst costs one request
/// once it pauses. Results come back over a channel and are matched against
/// the current term; anything stale is dropped on the floor instead of
/// overwriting newer input.
pub struct BookSearch {
    api: CatalogApi,
    debouncer: Debouncer,
    results_tx: mpsc::Sender<SearchOutcome>,
    results_rx: mpsc::Receiver<SearchOutcome>,
    term: String,
}

impl BookSearch {
    pub fn new(api: CatalogApi) -> Self {
        Self::with_delay(api, SEARCH_DELAY)
    }

    /// Same component with a custom debounce delay.
    pub fn with_delay(api: CatalogApi, delay: Duration) -> Self {
        let (results_tx, results_rx) = mpsc::channel();
        Self {
            api,
            debouncer: Debouncer::new(delay),
            results_tx,
            results_rx,
            term: String::new(),
        }
    }

    /// Handle one edit of the search box.
    ///
    /// Returns whether a lookup was scheduled; on `false` the caller should
    /// clear its candidate list, since the input is too short to search.
    pub fn input_changed(&mut self, term: &str) -> bool {
        self.term = term.trim().to_string();
        if self.term.chars().count() < MIN_SEARCH_LEN {
            self.debouncer.cancel();
            return false;
        }
        let api = self.api.clone();
        let term = self.term.clone();
        let tx = self.results_tx.clone();
        self.debouncer.schedule(async move {
            let result = api
                .search_books(&term, SEARCH_RESULT_LIMIT)
                .await
                .map_err(LoadError::from);
            let _ = tx.send(SearchOutcome { term, result });
        });
        true
    }

    /// Latest lookup outcome, if one arrived since the last poll.
    ///
    /// Outcomes for terms the user has typed past are discarded.
    pub fn poll(&mut self) -> Option<SearchOutcome> {
        let mut latest = None;
        while let Ok(outcome) = self.results_rx.try_recv() {
            latest = Some(outcome);
        }
        latest.filter(|outcome| outcome.term == self.term)
    }

    /// Abort any scheduled lookup, e.g. when a candidate was picked.
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }

    /// The trimmed term of the most recent edit.
    pub fn term(&self) -> &str {
        &self.term
    }
}
