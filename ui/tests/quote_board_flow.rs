//! End-to-end board scenarios driven through a `QuoteProvider`.

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use api::asset_quote::AssetQuote;
use api::quote_providers::parse_quotes;
use api::quote_providers::QuoteProvider;
use api::ApiError;
use dioxus_logger::tracing::span;
use dioxus_logger::tracing::subscriber;
use dioxus_logger::tracing::Event;
use dioxus_logger::tracing::Level;
use dioxus_logger::tracing::Metadata;
use dioxus_logger::tracing::Subscriber;
use ui::quote_board::LoadOutcome;
use ui::quote_board::QuoteBoard;

const TWO_COINS: &str = r#"[
    {"id":"btc","name":"Bitcoin","symbol":"btc","image":"","current_price":64000,"market_cap":900,"price_change_percentage_24h":2.5},
    {"id":"eth","name":"Ethereum","symbol":"eth","image":"","current_price":3100,"market_cap":400,"price_change_percentage_24h":-1.1}
]"#;

struct FixtureProvider(&'static str);

impl QuoteProvider for FixtureProvider {
    async fn top_quotes(&self) -> Result<Vec<AssetQuote>, ApiError> {
        parse_quotes(self.0)
    }
}

struct OfflineProvider;

impl QuoteProvider for OfflineProvider {
    async fn top_quotes(&self) -> Result<Vec<AssetQuote>, ApiError> {
        Err(ApiError::Status { status: 503 })
    }
}

/// Counts ERROR events emitted while it is the default subscriber.
struct ErrorCounter(Arc<AtomicUsize>);

impl Subscriber for ErrorCounter {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }
    fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }
    fn record(&self, _: &span::Id, _: &span::Record<'_>) {}
    fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}
    fn event(&self, event: &Event<'_>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
    fn enter(&self, _: &span::Id) {}
    fn exit(&self, _: &span::Id) {}
}

fn load(board: &mut QuoteBoard, provider: &impl QuoteProvider) -> LoadOutcome {
    let ticket = board.begin_load();
    let result = tokio_test::block_on(provider.top_quotes());
    board.finish_load(ticket, result)
}

fn visible_ids(board: &QuoteBoard) -> Vec<String> {
    board.visible_quotes().map(|q| q.id.clone()).collect()
}

#[test]
fn bitcoin_and_ethereum_scenario() {
    let mut board = QuoteBoard::new();
    assert_eq!(load(&mut board, &FixtureProvider(TWO_COINS)), LoadOutcome::Applied(2));

    board.search("eth");
    assert_eq!(visible_ids(&board), ["eth"]);

    board.search("");
    board.sort_by_market_cap();
    assert_eq!(visible_ids(&board), ["btc", "eth"]);

    board.sort_by_change_24h();
    assert_eq!(visible_ids(&board), ["btc", "eth"]);
}

#[test]
fn failed_load_logs_once_and_leaves_board_empty() {
    let errors = Arc::new(AtomicUsize::new(0));
    let mut board = QuoteBoard::new();

    let outcome = subscriber::with_default(ErrorCounter(errors.clone()), || {
        load(&mut board, &OfflineProvider)
    });

    assert_eq!(outcome, LoadOutcome::Failed);
    assert_eq!(board.visible_len(), 0);
    assert!(!board.is_loaded());
    assert_eq!(errors.load(Ordering::SeqCst), 1);
}

#[test]
fn malformed_body_is_handled_like_a_network_failure() {
    let errors = Arc::new(AtomicUsize::new(0));
    let mut board = QuoteBoard::new();

    let outcome = subscriber::with_default(ErrorCounter(errors.clone()), || {
        load(&mut board, &FixtureProvider(r#"{"error":"rate limited"}"#))
    });

    assert!(outcome.is_failed());
    assert_eq!(board.visible_len(), 0);
    assert_eq!(errors.load(Ordering::SeqCst), 1);
}

#[test]
fn late_result_after_teardown_is_a_no_op() {
    let mut board = QuoteBoard::new();
    let ticket = board.begin_load();
    let result = tokio_test::block_on(FixtureProvider(TWO_COINS).top_quotes());

    board.teardown();

    assert!(board.finish_load(ticket, result).is_stale());
    assert_eq!(board.visible_len(), 0);
    assert!(board.all_quotes().is_empty());
}

#[test]
fn visible_quotes_stay_a_subset_of_all_quotes() {
    let mut board = QuoteBoard::new();
    load(&mut board, &FixtureProvider(TWO_COINS));

    for term in ["", "b", "ETH", "coin", "zzz"] {
        board.search(term);
        board.sort_by_change_24h();
        for quote in board.visible_quotes() {
            assert!(board.all_quotes().iter().any(|q| q.id == quote.id));
        }
        assert!(board.visible_len() <= board.all_quotes().len());
    }
}
