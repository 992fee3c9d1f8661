use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tracing::debug;

use super::domain::{ChatMessage, DeckPhase, Sender, SwipeDirection, SwipeEvent};
use super::leaderboard::{leaderboard_buckets, LeaderboardBuckets};
use super::responder::build_ai_response;
use crate::catalog::{StockCatalog, StockRecord};

/// Single-writer state machine for one session. Construct one instance per
/// session and keep it owned by the caller; there is no ambient global.
///
/// Every mutation runs to completion synchronously. The only suspension point
/// is [`SessionStore::load_deck`], which holds the store in [`DeckPhase::Loading`]
/// with empty-deck semantics until the shuffle lands.
pub struct SessionStore {
    catalog: Arc<StockCatalog>,
    load_delay: Duration,
    deck: Vec<StockRecord>,
    current_index: usize,
    phase: DeckPhase,
    inbox: HashMap<String, StockRecord>,
    chat_threads: HashMap<String, Vec<ChatMessage>>,
    swipe_events: Vec<SwipeEvent>,
    active_inbox_ticker: Option<String>,
    message_seq: u64,
}

impl SessionStore {
    pub fn new(catalog: Arc<StockCatalog>, load_delay: Duration) -> Self {
        Self {
            catalog,
            load_delay,
            deck: Vec::new(),
            current_index: 0,
            phase: DeckPhase::Loading,
            inbox: HashMap::new(),
            chat_threads: HashMap::new(),
            swipe_events: Vec::new(),
            active_inbox_ticker: None,
            message_seq: 0,
        }
    }

    /// Replace the deck with a fresh uniform permutation of the catalog and
    /// reset the cursor. Each call reshuffles.
    pub async fn load_deck(&mut self) {
        self.phase = DeckPhase::Loading;
        self.deck.clear();
        self.current_index = 0;

        tokio::time::sleep(self.load_delay).await;

        let mut deck = self.catalog.records().to_vec();
        fisher_yates(&mut deck, &mut rand::thread_rng());

        debug!(cards = deck.len(), "deck loaded");
        self.deck = deck;
        self.phase = DeckPhase::Ready;
    }

    /// Record a pass on a ticker. The ticker is not validated against the
    /// card under the cursor; caller error is tolerated.
    pub fn swipe_left(&mut self, ticker: &str) {
        self.swipe_events.push(SwipeEvent {
            ticker: ticker.to_string(),
            direction: SwipeDirection::Left,
            timestamp: Utc::now(),
        });
        self.current_index += 1;
    }

    /// Save a ticker to the inbox. Unknown tickers are a silent no-op.
    pub fn swipe_right(&mut self, ticker: &str) {
        let Some(stock) = self.deck.iter().find(|card| card.ticker == ticker).cloned() else {
            return;
        };

        if !self.chat_threads.contains_key(ticker) {
            let greeting = self.greeting_for(&stock);
            self.chat_threads.insert(ticker.to_string(), vec![greeting]);
        }
        self.inbox.insert(ticker.to_string(), stock);
        self.swipe_events.push(SwipeEvent {
            ticker: ticker.to_string(),
            direction: SwipeDirection::Right,
            timestamp: Utc::now(),
        });
        self.current_index += 1;
        self.active_inbox_ticker = Some(ticker.to_string());
    }

    /// Pure state replacement; the ticker is not checked against the inbox.
    pub fn set_active_inbox_ticker(&mut self, ticker: &str) {
        self.active_inbox_ticker = Some(ticker.to_string());
    }

    /// Append a user message and the synchronously generated ai reply to the
    /// ticker's thread. Unresolvable tickers are a silent no-op; the text is
    /// taken literally (callers are expected to pre-trim).
    pub fn send_message(&mut self, ticker: &str, text: &str) {
        let Some(stock) = self
            .inbox
            .get(ticker)
            .or_else(|| self.deck.iter().find(|card| card.ticker == ticker))
            .cloned()
        else {
            return;
        };

        let mut thread = match self.chat_threads.remove(ticker) {
            Some(thread) => thread,
            None => vec![self.greeting_for(&stock)],
        };

        thread.push(self.message(Sender::User, text.to_string()));
        thread.push(self.message(Sender::Ai, build_ai_response(&stock, text)));
        self.chat_threads.insert(ticker.to_string(), thread);
    }

    pub fn is_loading(&self) -> bool {
        self.phase == DeckPhase::Loading
    }

    pub fn phase(&self) -> DeckPhase {
        self.phase
    }

    /// The card under the cursor; `None` while loading or once the deck is
    /// exhausted.
    pub fn current_card(&self) -> Option<&StockRecord> {
        match self.phase {
            DeckPhase::Loading => None,
            DeckPhase::Ready => self.deck.get(self.current_index),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.phase == DeckPhase::Ready && self.current_index >= self.deck.len()
    }

    pub fn deck(&self) -> &[StockRecord] {
        &self.deck
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn inbox(&self) -> &HashMap<String, StockRecord> {
        &self.inbox
    }

    pub fn inbox_list(&self) -> Vec<&StockRecord> {
        self.inbox.values().collect()
    }

    /// The chat thread for a ticker, empty when no thread exists.
    pub fn chat_for(&self, ticker: &str) -> &[ChatMessage] {
        self.chat_threads
            .get(ticker)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn swipe_events(&self) -> &[SwipeEvent] {
        &self.swipe_events
    }

    pub fn active_inbox_ticker(&self) -> Option<&str> {
        self.active_inbox_ticker.as_deref()
    }

    /// The four session leaderboard buckets, computed fresh from the current
    /// deck and swipe history.
    pub fn leaderboard(&self) -> LeaderboardBuckets {
        leaderboard_buckets(&self.deck, &self.swipe_events)
    }

    fn greeting_for(&mut self, stock: &StockRecord) -> ChatMessage {
        let text = format!(
            "Hey! I'm your StockScore copilot for {}. Ask me about the bull or bear case, \
             valuation, or the latest news.",
            stock.ticker
        );
        self.message(Sender::Ai, text)
    }

    fn message(&mut self, sender: Sender, text: String) -> ChatMessage {
        self.message_seq += 1;
        ChatMessage {
            id: format!("msg-{:06}", self.message_seq),
            sender,
            text,
            timestamp: Utc::now(),
        }
    }
}

/// Fisher-Yates: for i from len-1 down to 1, swap i with a uniform pick in
/// [0, i].
fn fisher_yates<R: Rng>(cards: &mut [StockRecord], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = rng.gen_range(0..=i);
        cards.swap(i, j);
    }
}
