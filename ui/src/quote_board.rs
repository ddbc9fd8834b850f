//! The dashboard's view-model: the loaded quotes and the visible selection.

use std::cmp::Ordering;

use api::asset_quote::AssetQuote;
use api::ApiError;
use dioxus_logger::tracing;

/// The numeric column a sort action orders by. Always descending.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIter, strum::EnumIs)]
pub enum SortKey {
    MarketCap,
    Change24h,
}

impl SortKey {
    /// Label of the button that fires this sort.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::MarketCap => "Sort By Market Cap",
            SortKey::Change24h => "Sort By 24h %",
        }
    }

    /// Descending comparator. Missing 24h changes go last.
    fn compare(&self, a: &AssetQuote, b: &AssetQuote) -> Ordering {
        match self {
            SortKey::MarketCap => b.market_cap.total_cmp(&a.market_cap),
            SortKey::Change24h => {
                match (a.price_change_percentage_24h, b.price_change_percentage_24h) {
                    (Some(a), Some(b)) => b.total_cmp(&a),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }
        }
    }
}

/// Handed out by [`QuoteBoard::begin_load`]; a result is only applied when
/// its ticket is still current.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[must_use]
pub struct LoadTicket {
    generation: u64,
}

/// What [`QuoteBoard::finish_load`] did with a result.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs)]
pub enum LoadOutcome {
    /// Both sequences were replaced; holds the number of quotes.
    Applied(usize),
    /// The load failed and was logged; state is unchanged.
    Failed,
    /// The board was torn down or reloaded meanwhile; the result was dropped.
    Stale,
}

/// State owned by the dashboard view.
///
/// `visible` holds positions into `all`, so every visible quote is one of the
/// loaded quotes and quotes themselves are never touched after a load.
#[derive(Debug, Default)]
pub struct QuoteBoard {
    all: Vec<AssetQuote>,
    visible: Vec<usize>,
    search_text: String,
    generation: u64,
}

impl QuoteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// All-Quotes, in load order.
    pub fn all_quotes(&self) -> &[AssetQuote] {
        &self.all
    }

    /// Visible-Quotes, in display order.
    pub fn visible_quotes(&self) -> impl Iterator<Item = &AssetQuote> + '_ {
        self.visible.iter().map(|&i| &self.all[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_loaded(&self) -> bool {
        !self.all.is_empty()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    // --- Loading ---

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Applies the result of the load started with `ticket`.
    ///
    /// Failures are logged once and swallowed.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<AssetQuote>, ApiError>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation {
            tracing::debug!("discarding result of stale load {}", ticket.generation);
            return LoadOutcome::Stale;
        }

        match result {
            Ok(quotes) => {
                tracing::info!("loaded {} quotes", quotes.len());
                self.visible = (0..quotes.len()).collect();
                self.all = quotes;
                LoadOutcome::Applied(self.all.len())
            }
            Err(e) => {
                tracing::error!("Error fetching market data ({:?}): {}", e.kind(), e);
                LoadOutcome::Failed
            }
        }
    }

    /// Drops everything and invalidates any load still in flight.
    pub fn teardown(&mut self) {
        self.generation += 1;
        self.all.clear();
        self.visible.clear();
        self.search_text.clear();
    }

    // --- Search ---

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Re-derives Visible-Quotes from All-Quotes using the current search
    /// text, discarding any sort order.
    pub fn apply_search(&mut self) {
        let needle = self.search_text.to_lowercase();
        self.visible = self
            .all
            .iter()
            .enumerate()
            .filter(|(_, quote)| quote.matches_search(&needle))
            .map(|(i, _)| i)
            .collect();
    }

    pub fn search(&mut self, text: impl Into<String>) {
        self.set_search_text(text);
        self.apply_search();
    }

    // --- Sort ---

    /// Reorders Visible-Quotes, descending by `key`. Stable for equal keys.
    pub fn sort_by(&mut self, key: SortKey) {
        let all = &self.all;
        self.visible
            .sort_by(|&a, &b| key.compare(&all[a], &all[b]));
    }

    pub fn sort_by_market_cap(&mut self) {
        self.sort_by(SortKey::MarketCap);
    }

    pub fn sort_by_change_24h(&mut self) {
        self.sort_by(SortKey::Change24h);
    }
}
