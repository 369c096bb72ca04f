use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use bookstore_api::Debouncer;

const DELAY: Duration = Duration::from_millis(40);
const SETTLE: Duration = Duration::from_millis(200);

#[tokio::test]
async fn runs_once_after_the_delay() {
    let mut debouncer = Debouncer::new(DELAY);
    let hits = Arc::new(AtomicUsize::new(0));

    let counter = hits.clone();
    debouncer.schedule(async move {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert!(debouncer.is_pending());
    assert_eq!(hits.load(Ordering::SeqCst), 0, "nothing runs before the delay");

    tokio::time::sleep(SETTLE).await;
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(!debouncer.is_pending());
}

#[tokio::test]
async fn a_burst_collapses_to_the_last_task() {
    let mut debouncer = Debouncer::new(DELAY);
    let hits = Arc::new(AtomicUsize::new(0));

    // Simulates typing: each keystroke reschedules before the delay elapses.
    for round in 1..=4u32 {
        let counter = hits.clone();
        debouncer.schedule(async move {
            counter.fetch_add(round as usize, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    tokio::time::sleep(SETTLE).await;
    assert_eq!(hits.load(Ordering::SeqCst), 4, "only the final task runs");
}

#[tokio::test]
async fn cancel_prevents_execution() {
    let mut debouncer = Debouncer::new(DELAY);
    let hits = Arc::new(AtomicUsize::new(0));

    let counter = hits.clone();
    debouncer.schedule(async move {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    debouncer.cancel();

    tokio::time::sleep(SETTLE).await;
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert!(!debouncer.is_pending());
}

#[tokio::test]
async fn dropping_aborts_the_pending_task() {
    let hits = Arc::new(AtomicUsize::new(0));
    {
        let mut debouncer = Debouncer::new(DELAY);
        let counter = hits.clone();
        debouncer.schedule(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    }

    tokio::time::sleep(SETTLE).await;
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
