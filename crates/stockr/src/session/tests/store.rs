use super::common::*;
use crate::session::domain::{Sender, SwipeDirection};

#[test]
fn new_store_reports_loading_with_empty_deck() {
    let store = store();
    assert!(store.is_loading());
    assert!(store.current_card().is_none());
    assert!(store.deck().is_empty());
    assert!(!store.is_exhausted());
}

#[tokio::test]
async fn load_deck_produces_a_permutation_of_the_catalog() {
    let store = ready_store().await;
    assert!(!store.is_loading());

    let mut deck_tickers: Vec<&str> = store
        .deck()
        .iter()
        .map(|card| card.ticker.as_str())
        .collect();
    deck_tickers.sort_unstable();
    assert_eq!(deck_tickers, vec!["ALFA", "BRVO", "CHRM", "DLTA"]);
}

#[tokio::test]
async fn reload_resets_the_cursor() {
    let mut store = ready_store().await;
    store.swipe_left("ALFA");
    store.swipe_left("BRVO");
    assert_eq!(store.current_index(), 2);

    store.load_deck().await;
    assert_eq!(store.current_index(), 0);
    assert_eq!(store.deck().len(), 4);
    // Swipe history survives a reload; only the deck and cursor reset.
    assert_eq!(store.swipe_events().len(), 2);
}

#[tokio::test]
async fn swipe_left_then_right_records_history_in_order() {
    let mut store = ready_store().await;

    store.swipe_left("ALFA");
    store.swipe_right("ALFA");

    assert!(store.inbox().contains_key("ALFA"));
    assert_eq!(store.current_index(), 2);
    assert_eq!(store.active_inbox_ticker(), Some("ALFA"));

    let events = store.swipe_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].direction, SwipeDirection::Left);
    assert_eq!(events[1].direction, SwipeDirection::Right);
    assert!(events.iter().all(|event| event.ticker == "ALFA"));

    let thread = store.chat_for("ALFA");
    assert_eq!(thread.len(), 1);
    assert_eq!(thread[0].sender, Sender::Ai);
    assert!(thread[0].text.contains("ALFA"));
}

#[tokio::test]
async fn swipe_right_on_unknown_ticker_is_a_no_op() {
    let mut store = ready_store().await;

    store.swipe_right("ZZZZ");

    assert_eq!(store.current_index(), 0);
    assert!(store.swipe_events().is_empty());
    assert!(store.inbox().is_empty());
    assert!(store.active_inbox_ticker().is_none());
}

#[tokio::test]
async fn repeated_swipe_right_preserves_the_chat_thread() {
    let mut store = ready_store().await;

    store.swipe_right("CHRM");
    let seed_id = store.chat_for("CHRM")[0].id.clone();

    store.swipe_right("CHRM");

    let thread = store.chat_for("CHRM");
    assert_eq!(thread.len(), 1, "seed greeting must not be duplicated");
    assert_eq!(thread[0].id, seed_id);
    assert_eq!(store.swipe_events().len(), 2);
    assert_eq!(store.inbox().len(), 1);
}

#[tokio::test]
async fn send_message_appends_user_then_ai_pair() {
    let mut store = ready_store().await;
    store.swipe_right("ALFA");

    store.send_message("ALFA", "what's the bull case?");

    let thread = store.chat_for("ALFA");
    assert_eq!(thread.len(), 3);
    assert_eq!(thread[1].sender, Sender::User);
    assert_eq!(thread[1].text, "what's the bull case?");
    assert_eq!(thread[2].sender, Sender::Ai);

    assert!(thread
        .windows(2)
        .all(|pair| pair[0].timestamp <= pair[1].timestamp));

    let mut ids: Vec<&str> = thread.iter().map(|message| message.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3, "message ids must be distinct");
}

#[tokio::test]
async fn send_message_resolves_deck_tickers_and_seeds_the_thread() {
    let mut store = ready_store().await;

    store.send_message("DLTA", "hello");

    let thread = store.chat_for("DLTA");
    assert_eq!(thread.len(), 3);
    assert_eq!(thread[0].sender, Sender::Ai);
    assert!(thread[0].text.contains("DLTA"));
    assert!(!store.inbox().contains_key("DLTA"), "send does not save");
}

#[tokio::test]
async fn send_message_on_unknown_ticker_is_a_no_op() {
    let mut store = ready_store().await;

    store.send_message("ZZZZ", "anyone there?");

    assert!(store.chat_for("ZZZZ").is_empty());
}

#[tokio::test]
async fn send_message_takes_text_literally() {
    let mut store = ready_store().await;
    store.swipe_right("ALFA");

    store.send_message("ALFA", "");

    let thread = store.chat_for("ALFA");
    assert_eq!(thread.len(), 3);
    assert_eq!(thread[1].text, "");
}

#[tokio::test]
async fn set_active_inbox_ticker_skips_validation() {
    let mut store = ready_store().await;

    store.set_active_inbox_ticker("ZZZZ");

    assert_eq!(store.active_inbox_ticker(), Some("ZZZZ"));
}

#[tokio::test]
async fn swiping_past_the_end_exhausts_the_deck() {
    let mut store = ready_store().await;

    for _ in 0..store.deck().len() {
        let ticker = store
            .current_card()
            .expect("card available before exhaustion")
            .ticker
            .clone();
        store.swipe_left(&ticker);
    }

    assert!(store.is_exhausted());
    assert!(store.current_card().is_none());

    // The cursor keeps advancing past the end; callers tolerate this.
    store.swipe_left("ALFA");
    assert_eq!(store.current_index(), 5);
}
