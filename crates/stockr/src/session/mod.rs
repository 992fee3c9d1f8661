//! Session state for one browser session: the shuffled deck, swipe telemetry,
//! the inbox of saved tickers, chat threads, and the derived leaderboard
//! buckets. All mutation goes through [`store::SessionStore`]; derived views
//! are recomputed from the latest state rather than cached.

pub mod domain;
pub mod leaderboard;
pub mod responder;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{ChatMessage, DeckPhase, Sender, SwipeDirection, SwipeEvent};
pub use leaderboard::{
    leaderboard_buckets, LeaderboardBuckets, ScoreRow, SectorLeader, SwipeTally,
};
pub use responder::build_ai_response;
pub use store::SessionStore;
