use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::catalog::{Fundamentals, NewsItem, QuickTag, Sentiment, StockCatalog, StockRecord};
use crate::session::domain::{SwipeDirection, SwipeEvent};
use crate::session::store::SessionStore;

#[allow(clippy::too_many_arguments)]
pub(super) fn stock(
    ticker: &str,
    sector: &str,
    pe: f64,
    revenue_yoy: f64,
    roe: f64,
    beta: f64,
    margin: f64,
    daily_change: f64,
    sentiment: Sentiment,
) -> StockRecord {
    StockRecord {
        ticker: ticker.to_string(),
        name: format!("{ticker} Holdings"),
        price: 50.0,
        daily_change,
        market_cap: "$10B".to_string(),
        sector: sector.to_string(),
        tags: vec![QuickTag::Growth],
        fundamentals: Fundamentals {
            pe,
            eps: 2.0,
            beta,
            revenue_yoy,
            ps: Some(3.0),
            roe: Some(roe),
            margin: Some(margin),
        },
        sentiment,
        earnings_date: "Nov 5".to_string(),
        description: format!("{ticker} does one thing well."),
        news: vec![
            NewsItem {
                title: format!("{ticker} expands"),
                summary: "New facility announced.".to_string(),
                source: "Newswire".to_string(),
            },
            NewsItem {
                title: format!("{ticker} guidance raised"),
                summary: "Management lifted the full-year outlook.".to_string(),
                source: "MarketDesk".to_string(),
            },
        ],
    }
}

/// Four-card catalog with distinct, hand-computed scores:
/// ALFA 62, CHRM 52, DLTA 41, BRVO 27.
pub(super) fn catalog() -> Arc<StockCatalog> {
    Arc::new(StockCatalog::new(vec![
        stock("ALFA", "Technology", 10.0, 40.0, 30.0, 0.5, 30.0, 2.0, Sentiment::Bullish),
        stock("BRVO", "Technology", 50.0, 10.0, 5.0, 2.0, 5.0, -2.0, Sentiment::Bearish),
        stock("CHRM", "Energy", 20.0, 30.0, 15.0, 1.0, 20.0, 1.5, Sentiment::Bullish),
        stock("DLTA", "Energy", 30.0, 20.0, 10.0, 1.5, 10.0, 0.0, Sentiment::Neutral),
    ]))
}

pub(super) fn store() -> SessionStore {
    SessionStore::new(catalog(), Duration::ZERO)
}

pub(super) async fn ready_store() -> SessionStore {
    let mut store = store();
    store.load_deck().await;
    store
}

pub(super) fn event(ticker: &str, direction: SwipeDirection) -> SwipeEvent {
    SwipeEvent {
        ticker: ticker.to_string(),
        direction,
        timestamp: Utc::now(),
    }
}
