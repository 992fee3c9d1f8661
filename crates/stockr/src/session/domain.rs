use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which way a card left the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn label(&self) -> &'static str {
        match self {
            SwipeDirection::Left => "LEFT",
            SwipeDirection::Right => "RIGHT",
        }
    }
}

/// One timestamped swipe decision. Append-only for the life of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeEvent {
    pub ticker: String,
    pub direction: SwipeDirection,
    pub timestamp: DateTime<Utc>,
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Ai,
    User,
}

impl Sender {
    pub fn label(&self) -> &'static str {
        match self {
            Sender::Ai => "ai",
            Sender::User => "user",
        }
    }
}

/// A single message in a per-ticker chat thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Whether the deck is usable. While `Loading`, readers see an empty deck
/// rather than stale or partial data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckPhase {
    Loading,
    Ready,
}
