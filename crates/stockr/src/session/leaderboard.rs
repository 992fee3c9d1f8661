use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{SwipeDirection, SwipeEvent};
use crate::catalog::StockRecord;
use crate::scoring::compute_score;

const BUCKET_LIMIT: usize = 5;

/// One row of the top-scores bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRow {
    pub ticker: String,
    pub name: String,
    pub score: u8,
}

/// One row of the trending/avoid buckets: swipe count plus a freshly
/// recomputed score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwipeTally {
    pub ticker: String,
    pub count: usize,
    pub score: u8,
}

/// Best-scoring ticker within one sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectorLeader {
    pub ticker: String,
    pub score: u8,
}

/// The four derived leaderboard views over a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardBuckets {
    pub trending_list: Vec<SwipeTally>,
    pub avoid_list: Vec<SwipeTally>,
    pub top_scores: Vec<ScoreRow>,
    pub by_sector: BTreeMap<String, SectorLeader>,
}

/// Derive the four buckets from the current deck and swipe history. Pure;
/// scores are recomputed here, never read from a cache. Swipe events whose
/// ticker is no longer present in the deck are skipped.
pub fn leaderboard_buckets(deck: &[StockRecord], events: &[SwipeEvent]) -> LeaderboardBuckets {
    let mut top_scores: Vec<ScoreRow> = deck
        .iter()
        .map(|stock| ScoreRow {
            ticker: stock.ticker.clone(),
            name: stock.name.clone(),
            score: compute_score(stock),
        })
        .collect();
    // Stable sort: first-encountered wins on equal scores.
    top_scores.sort_by(|a, b| b.score.cmp(&a.score));
    top_scores.truncate(BUCKET_LIMIT);

    let mut by_sector: BTreeMap<String, SectorLeader> = BTreeMap::new();
    for stock in deck {
        let score = compute_score(stock);
        match by_sector.get(&stock.sector) {
            // Strict comparison keeps the first stock seen at a given max.
            Some(current) if score <= current.score => {}
            _ => {
                by_sector.insert(
                    stock.sector.clone(),
                    SectorLeader {
                        ticker: stock.ticker.clone(),
                        score,
                    },
                );
            }
        }
    }

    LeaderboardBuckets {
        trending_list: tally(deck, events, SwipeDirection::Right),
        avoid_list: tally(deck, events, SwipeDirection::Left),
        top_scores,
        by_sector,
    }
}

fn tally(deck: &[StockRecord], events: &[SwipeEvent], direction: SwipeDirection) -> Vec<SwipeTally> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for event in events.iter().filter(|event| event.direction == direction) {
        match counts.iter_mut().find(|(ticker, _)| *ticker == event.ticker) {
            Some((_, count)) => *count += 1,
            None => counts.push((event.ticker.clone(), 1)),
        }
    }

    let mut rows: Vec<SwipeTally> = counts
        .into_iter()
        .filter_map(|(ticker, count)| {
            deck.iter()
                .find(|stock| stock.ticker == ticker)
                .map(|stock| SwipeTally {
                    ticker,
                    count,
                    score: compute_score(stock),
                })
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows.truncate(BUCKET_LIMIT);
    rows
}
