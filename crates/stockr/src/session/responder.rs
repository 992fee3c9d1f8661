//! Canned chat replies. The dispatch order is an explicit rule table rather
//! than nested control flow, so the match priority is part of the contract.

use crate::catalog::StockRecord;
use crate::scoring::{compute_score, describe_score};

type Predicate = fn(&str) -> bool;
type Renderer = fn(&StockRecord, u8) -> String;

/// Keyword rules evaluated top to bottom against the lowercased prompt;
/// first match wins, with the status renderer as the terminal fallback.
const RULES: &[(Predicate, Renderer)] = &[
    (mentions_bear, render_bearish),
    (mentions_bull, render_bullish),
    (mentions_news, render_news),
    (mentions_valuation, render_valuation),
];

/// Deterministic template reply for a user prompt about a stock. Pure; no
/// memory of prior turns.
pub fn build_ai_response(stock: &StockRecord, user_prompt: &str) -> String {
    let score = compute_score(stock);
    let prompt = user_prompt.to_lowercase();

    for (matches, render) in RULES {
        if matches(&prompt) {
            return render(stock, score);
        }
    }
    render_status(stock, score)
}

fn mentions_bear(prompt: &str) -> bool {
    prompt.contains("bear")
}

fn mentions_bull(prompt: &str) -> bool {
    prompt.contains("bull")
}

fn mentions_news(prompt: &str) -> bool {
    prompt.contains("news")
}

fn mentions_valuation(prompt: &str) -> bool {
    prompt.contains("valued") || prompt.contains("overvalued")
}

fn render_bearish(stock: &StockRecord, _score: u8) -> String {
    format!(
        "Bearish take on {}: valuation at {}x leaves little room for execution slips, and \
         beta {:.2} adds volatility. Watch the next earnings on {}.",
        stock.ticker,
        stock.fundamentals.pe,
        stock.fundamentals.beta,
        stock.earnings_date
    )
}

fn render_bullish(stock: &StockRecord, score: u8) -> String {
    format!(
        "Bullish case: {} Revenue grew {}% YoY and margins sit near {}%. StockScore clocks \
         in at {}/100.",
        stock.description,
        stock.fundamentals.revenue_yoy,
        stock.fundamentals.margin.unwrap_or(0.0),
        score
    )
}

fn render_news(stock: &StockRecord, _score: u8) -> String {
    stock
        .news
        .iter()
        .map(|item| format!("{}: {} — {}", item.source, item.title, item.summary))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_valuation(stock: &StockRecord, score: u8) -> String {
    format!(
        "{} trades at {}x earnings and {:.1}x sales. Against a sector median near 22x, \
         StockScore files it under {}.",
        stock.ticker,
        stock.fundamentals.pe,
        stock.fundamentals.ps.unwrap_or(0.0),
        describe_score(score).label()
    )
}

fn render_status(stock: &StockRecord, score: u8) -> String {
    format!(
        "StockScore for {} is {}. Sentiment is {} with earnings on {}. Ask for the bullish \
         or bearish catalysts.",
        stock.ticker,
        score,
        stock.sentiment.label(),
        stock.earnings_date
    )
}
