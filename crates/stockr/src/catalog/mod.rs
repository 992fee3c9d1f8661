//! The fixed stock catalog: record types plus the built-in sample deck.
//!
//! Records are immutable for the life of the process; everything downstream
//! (scoring, session store, leaderboards) reads from here and never writes.

mod sample;

pub use sample::sample_catalog;

use serde::{Deserialize, Serialize};

/// Quick-filter labels rendered as chips on a stock card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickTag {
    Growth,
    Dividend,
    Tech,
    Value,
    #[serde(rename = "Large Cap")]
    LargeCap,
    #[serde(rename = "Small Cap")]
    SmallCap,
    #[serde(rename = "SaaS")]
    Saas,
    Energy,
    Banking,
    #[serde(rename = "AI")]
    Ai,
}

/// Analyst mood attached to a record; feeds the sentiment sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Neutral,
    Bearish,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "bullish",
            Sentiment::Neutral => "neutral",
            Sentiment::Bearish => "bearish",
        }
    }
}

/// Fundamental ratios; the optional fields are absent for some records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fundamentals {
    pub pe: f64,
    pub eps: f64,
    pub beta: f64,
    #[serde(rename = "revenueYoY")]
    pub revenue_yoy: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roe: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
}

/// A single headline attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub summary: String,
    pub source: String,
}

/// One card in the deck. Serializes camelCase to preserve the documented
/// wire shape (`dailyChange`, `marketCap`, `earningsDate`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub ticker: String,
    pub name: String,
    pub price: f64,
    pub daily_change: f64,
    pub market_cap: String,
    pub sector: String,
    pub tags: Vec<QuickTag>,
    pub fundamentals: Fundamentals,
    pub sentiment: Sentiment,
    pub earnings_date: String,
    pub description: String,
    pub news: Vec<NewsItem>,
}

/// Read-only, process-lifetime collection of stock records.
#[derive(Debug, Clone)]
pub struct StockCatalog {
    records: Vec<StockRecord>,
}

impl StockCatalog {
    pub fn new(records: Vec<StockRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[StockRecord] {
        &self.records
    }

    pub fn get(&self, ticker: &str) -> Option<&StockRecord> {
        self.records.iter().find(|record| record.ticker == ticker)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
