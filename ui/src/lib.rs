// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod components;
pub mod hooks;
pub mod quote_board;
mod screens;

use api::prefs::user_prefs::UserPrefs;
use app_state::AppState;
use components::pico::Container;
use screens::dashboard::DashboardScreen;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let dashboard_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    body {
        margin: 0;
        font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
        background-color: #11191f;
        color: #e2e8f0;
    }

    main.container {
        max-width: 1100px;
        margin: 0 auto;
        padding: 1.5rem 1rem;
    }

    article {
        padding: 1.5rem;
        border-radius: 0.5rem;
        background-color: #18232c;
        box-shadow: 0 4px 24px rgba(0,0,0,0.25);
    }

    h1 { margin-top: 0; }

    /* --- CONTROLS --- */
    .controls {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        margin-bottom: 1rem;
    }
    .controls input {
        flex: 1 1 16rem;
        padding: 0.5rem 0.75rem;
        border: 1px solid #2c3d4a;
        border-radius: 0.375rem;
        background: #11191f;
        color: inherit;
    }
    .controls button {
        padding: 0.5rem 1rem;
        border: 1px solid #0172ad;
        border-radius: 0.375rem;
        background: #0172ad;
        color: #fff;
        cursor: pointer;
    }
    .controls button.secondary {
        background: transparent;
        color: #8ec6e6;
    }

    /* --- TABLE --- */
    .table-scroll { overflow-x: auto; }
    .crypto-table {
        width: 100%;
        border-collapse: collapse;
    }
    .crypto-table th, .crypto-table td {
        padding: 0.6rem 0.75rem;
        text-align: left;
        border-bottom: 1px solid #2c3d4a;
        white-space: nowrap;
    }
    .crypto-table th { color: #8a9aa8; font-weight: 600; }
    .coin-info { display: flex; align-items: center; gap: 0.5rem; }
    .coin-info img { width: 24px; height: 24px; }
    .green { color: #2ecc71; }
    .red { color: #e74c3c; }

    /* --- EMPTY STATE --- */
    .empty-state {
        padding: 2rem;
        margin: 1rem 0;
        text-align: center;
        color: #8a9aa8;
        border: 2px dashed #2c3d4a;
        border-radius: 0.5rem;
    }
"#;

    use_context_provider(|| AppState::new(UserPrefs::default()));

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title {
            "Crypto Dashboard"
        }
        style {
            "{dashboard_css}"
        }
        Container {
            DashboardScreen {}
        }
    }
}
