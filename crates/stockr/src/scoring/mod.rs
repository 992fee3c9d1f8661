//! The StockScore engine: a fixed weighted average over mock fundamentals.
//!
//! Pure and deterministic; every caller recomputes on demand rather than
//! caching scores across state changes.

use crate::catalog::{Sentiment, StockRecord};
use serde::Serialize;

/// Six clamped sub-scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub valuation: f64,
    pub growth: f64,
    pub stability: f64,
    pub quality: f64,
    pub trend: f64,
    pub sentiment: f64,
}

/// Fixed weights; they sum to 1.0.
const WEIGHTS: ScoreBreakdown = ScoreBreakdown {
    valuation: 0.20,
    growth: 0.25,
    stability: 0.15,
    quality: 0.20,
    trend: 0.10,
    sentiment: 0.10,
};

fn clamp(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Compute the six sub-scores for a record.
pub fn score_breakdown(stock: &StockRecord) -> ScoreBreakdown {
    let fundamentals = &stock.fundamentals;
    let roe = fundamentals.roe.unwrap_or(0.0);
    let margin = fundamentals.margin.unwrap_or(0.0);

    ScoreBreakdown {
        valuation: clamp(100.0 - fundamentals.pe),
        growth: clamp((fundamentals.revenue_yoy + roe) / 2.0),
        stability: clamp(100.0 - fundamentals.beta * 20.0),
        quality: clamp((margin + roe) / 2.0),
        trend: clamp(stock.daily_change * 12.0 + 50.0),
        sentiment: match stock.sentiment {
            Sentiment::Bullish => 85.0,
            Sentiment::Neutral => 55.0,
            Sentiment::Bearish => 25.0,
        },
    }
}

/// Composite StockScore in [0, 100], rounded half away from zero.
pub fn compute_score(stock: &StockRecord) -> u8 {
    let breakdown = score_breakdown(stock);

    let weighted = breakdown.valuation * WEIGHTS.valuation
        + breakdown.growth * WEIGHTS.growth
        + breakdown.stability * WEIGHTS.stability
        + breakdown.quality * WEIGHTS.quality
        + breakdown.trend * WEIGHTS.trend
        + breakdown.sentiment * WEIGHTS.sentiment;

    weighted.round() as u8
}

/// Qualitative banding over the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreLabel {
    Elite,
    Outperform,
    Watch,
    Speculative,
}

impl ScoreLabel {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreLabel::Elite => "Elite",
            ScoreLabel::Outperform => "Outperform",
            ScoreLabel::Watch => "Watch",
            ScoreLabel::Speculative => "Speculative",
        }
    }
}

/// Thresholds are inclusive: 80 is Elite, 65 Outperform, 50 Watch.
pub fn describe_score(score: u8) -> ScoreLabel {
    if score >= 80 {
        ScoreLabel::Elite
    } else if score >= 65 {
        ScoreLabel::Outperform
    } else if score >= 50 {
        ScoreLabel::Watch
    } else {
        ScoreLabel::Speculative
    }
}
