//! Shared building blocks for the dashboard screen.
pub mod empty_state;
pub mod pico;
pub mod quote_table;
