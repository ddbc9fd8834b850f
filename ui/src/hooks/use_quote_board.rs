use api::quote_providers::coin_gecko::CoinGecko;
use api::quote_providers::QuoteProvider;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::quote_board::QuoteBoard;
use crate::quote_board::SortKey;

#[derive(Clone, Copy)]
pub struct QuoteBoardHandle {
    board: Signal<QuoteBoard>,
}

impl QuoteBoardHandle {
    /// Returns the signal holding the board.
    /// Call .read() on this in a component to subscribe to changes.
    pub fn board(&self) -> Signal<QuoteBoard> {
        self.board
    }

    pub fn set_search_text(&mut self, text: String) {
        self.board.write().set_search_text(text);
    }

    pub fn apply_search(&mut self) {
        self.board.write().apply_search();
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.board.write().sort_by(key);
    }
}

/// Creates the dashboard's `QuoteBoard` and loads it from CoinGecko exactly
/// once on mount.
pub fn use_quote_board() -> QuoteBoardHandle {
    let app_state = use_context::<AppState>();
    use_quote_board_with(move || CoinGecko::new(&app_state.prefs))
}

/// Like [`use_quote_board`], with the provider built by `make_provider`.
///
/// `make_provider` runs on the first render only. The board is torn down when
/// the calling component unmounts, so a response that arrives afterwards is
/// dropped instead of applied.
pub fn use_quote_board_with<P>(make_provider: impl FnOnce() -> P) -> QuoteBoardHandle
where
    P: QuoteProvider + 'static,
{
    let board = use_signal(QuoteBoard::new);

    use_hook(move || {
        spawn(load_into(board, make_provider()));
    });

    use_drop(move || {
        let mut board = board;
        if let Ok(mut board) = board.try_write() {
            board.teardown();
        };
    });

    QuoteBoardHandle { board }
}

async fn load_into(mut board: Signal<QuoteBoard>, provider: impl QuoteProvider) {
    let ticket = board.write().begin_load();
    let result = provider.top_quotes().await;

    match board.try_write() {
        Ok(mut board) => {
            board.finish_load(ticket, result);
        }
        Err(_) => {
            dioxus_logger::tracing::debug!("dashboard unmounted before quotes arrived");
        }
    };
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use api::asset_quote::AssetQuote;
    use api::ApiError;
    use dioxus::dioxus_core::NoOpMutations;
    use tokio::sync::Notify;

    use super::*;

    /// Counts provider calls and records the visible length on every render.
    #[derive(Clone, Default)]
    struct Fixture {
        quotes: Vec<AssetQuote>,
        calls: Rc<Cell<usize>>,
        rendered: Rc<RefCell<Vec<usize>>>,
        gate: Option<Rc<Notify>>,
        show: Rc<Cell<Option<Signal<bool>>>>,
    }

    impl PartialEq for Fixture {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.calls, &other.calls)
        }
    }

    impl QuoteProvider for Fixture {
        async fn top_quotes(&self) -> Result<Vec<AssetQuote>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            Ok(self.quotes.clone())
        }
    }

    fn quote(id: &str, cap: f64) -> AssetQuote {
        AssetQuote {
            id: id.to_string(),
            name: id.to_string(),
            symbol: id.to_string(),
            image: String::new(),
            current_price: 1.0,
            market_cap: cap,
            price_change_percentage_24h: None,
        }
    }

    fn fixture(gate: Option<Rc<Notify>>) -> Fixture {
        Fixture {
            quotes: vec![quote("bitcoin", 900.0), quote("ethereum", 400.0)],
            gate,
            ..Default::default()
        }
    }

    #[component]
    fn Board(fixture: Fixture) -> Element {
        let provider = fixture.clone();
        let quotes = use_quote_board_with(move || provider);
        let len = quotes.board().read().visible_len();
        fixture.rendered.borrow_mut().push(len);
        rsx! { "{len}" }
    }

    #[component]
    fn Toggle(fixture: Fixture) -> Element {
        let show = use_signal(|| true);
        let slot = fixture.show.clone();
        use_hook(move || slot.set(Some(show)));
        rsx! {
            if show() {
                Board { fixture }
            }
        }
    }

    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..4 {
            let work = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work());
            if work.await.is_err() {
                break;
            }
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    #[tokio::test]
    async fn test_loads_once_across_rerenders() {
        let fixture = fixture(None);
        let mut dom = VirtualDom::new_with_props(
            Board,
            BoardProps {
                fixture: fixture.clone(),
            },
        );
        dom.rebuild_in_place();
        settle(&mut dom).await;
        settle(&mut dom).await;

        let rendered = fixture.rendered.borrow().clone();
        assert!(rendered.len() >= 2, "rendered {rendered:?}");
        assert_eq!(rendered.first(), Some(&0));
        assert_eq!(rendered.last(), Some(&2));
        assert_eq!(fixture.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_unmount_before_response_applies_nothing() {
        let gate = Rc::new(Notify::new());
        let fixture = fixture(Some(gate.clone()));
        let mut dom = VirtualDom::new_with_props(
            Toggle,
            ToggleProps {
                fixture: fixture.clone(),
            },
        );
        dom.rebuild_in_place();
        settle(&mut dom).await;
        assert_eq!(fixture.calls.get(), 1);

        let mut show = fixture.show.get().expect("toggle mounted");
        dom.in_runtime(|| show.set(false));
        settle(&mut dom).await;

        gate.notify_one();
        settle(&mut dom).await;

        assert_eq!(fixture.calls.get(), 1);
        assert!(fixture.rendered.borrow().iter().all(|&len| len == 0));
    }
}
