//! The market table: one row per visible quote.

use api::asset_quote::AssetQuote;
use api::vs_currency::VsCurrency;
use dioxus::prelude::*;

use crate::quote_board::QuoteBoard;

const HEADERS: [&str; 5] = ["Coin", "Symbol", "Price", "Market Cap", "24h Change"];

#[component]
fn QuoteRow(quote: AssetQuote, currency: VsCurrency) -> Element {
    let price = quote.price(currency).to_string_with_symbol();
    let market_cap = quote.market_cap(currency).to_string_with_symbol();
    let change_class = quote.change_24h_trend().css_class();

    rsx! {
        tr {
            td {
                class: "coin-info",
                img {
                    src: "{quote.image}",
                    alt: "{quote.name}",
                }
                span {
                    "{quote.name}"
                }
            }
            td {
                "{quote.display_symbol()}"
            }
            td {
                "{price}"
            }
            td {
                "{market_cap}"
            }
            td {
                class: "{change_class}",
                "{quote.change_24h_display()}"
            }
        }
    }
}

/// Renders Visible-Quotes in their current order.
#[component]
pub fn QuoteTable(board: Signal<QuoteBoard>, currency: VsCurrency) -> Element {
    let board = board.read();

    rsx! {
        table {
            class: "crypto-table",
            thead {
                tr {
                    for title in HEADERS {
                        th {
                            "{title}"
                        }
                    }
                }
            }
            tbody {
                for quote in board.visible_quotes() {
                    QuoteRow {
                        key: "{quote.id}",
                        quote: quote.clone(),
                        currency,
                    }
                }
            }
        }
    }
}
