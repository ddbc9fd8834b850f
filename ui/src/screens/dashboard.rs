use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::app_state::AppState;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::quote_table::QuoteTable;
use crate::hooks::use_quote_board::use_quote_board;
use crate::quote_board::SortKey;

#[component]
pub fn DashboardScreen() -> Element {
    let app_state = use_context::<AppState>();
    let currency = app_state.prefs.market_query().vs_currency;

    let mut quotes = use_quote_board();
    let board = quotes.board();

    let search_text = board.read().search_text().to_string();
    let no_match = {
        let board = board.read();
        board.is_loaded() && board.visible_len() == 0
    };

    rsx! {
        Card {
            h1 {
                "Crypto Dashboard"
            }
            form {
                class: "controls",
                onsubmit: move |event| {
                    event.prevent_default();
                    quotes.apply_search();
                },
                input {
                    r#type: "text",
                    placeholder: "Search by name or symbol",
                    value: "{search_text}",
                    oninput: move |event| quotes.set_search_text(event.value()),
                }
                Button {
                    submit: true,
                    "Search"
                }
                for key in SortKey::iter() {
                    Button {
                        button_type: ButtonType::Secondary,
                        on_click: move |_| quotes.sort_by(key),
                        "{key.label()}"
                    }
                }
            }
            div {
                class: "table-scroll",
                QuoteTable {
                    board,
                    currency,
                }
                if no_match {
                    EmptyState {
                        title: "No coins match “{search_text}”",
                        description: "Clear the search to see all coins again.".to_string(),
                    }
                }
            }
        }
    }
}
