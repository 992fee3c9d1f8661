use clap::Args;
use std::sync::Arc;
use stockr::catalog::sample_catalog;
use stockr::config::AppConfig;
use stockr::error::AppError;
use stockr::scoring::{compute_score, describe_score};
use stockr::session::SessionStore;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the full chat transcript for the last saved ticker
    #[arg(long)]
    pub(crate) transcript: bool,
}

/// Scripted walk through a whole session: load the deck, swipe every card by
/// its score, chat with the last save, and print the leaderboard buckets.
pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let mut store = SessionStore::new(Arc::new(sample_catalog()), config.session.deck_delay());
    store.load_deck().await;

    println!("== swiping through {} cards ==", store.deck().len());
    while let Some(card) = store.current_card() {
        let ticker = card.ticker.clone();
        let score = compute_score(card);
        let label = describe_score(score).label();
        if score >= 50 {
            println!("  save  {ticker:<5} {score:>3}/100  {label}");
            store.swipe_right(&ticker);
        } else {
            println!("  pass  {ticker:<5} {score:>3}/100  {label}");
            store.swipe_left(&ticker);
        }
    }

    if let Some(ticker) = store.active_inbox_ticker().map(str::to_string) {
        for prompt in ["any news?", "what's the bear case?", "is it overvalued?"] {
            store.send_message(&ticker, prompt);
        }
        if args.transcript {
            println!("\n== chat with {ticker} ==");
            for message in store.chat_for(&ticker) {
                println!("[{}] {}", message.sender.label(), message.text);
            }
        }
    }

    let buckets = store.leaderboard();
    println!("\n== top scores ==");
    for row in &buckets.top_scores {
        println!("  {:<5} {:>3}  {}", row.ticker, row.score, row.name);
    }
    println!("\n== best in sector ==");
    for (sector, best) in &buckets.by_sector {
        println!("  {:<12} {:<5} {:>3}", sector, best.ticker, best.score);
    }
    println!("\n== trending ==");
    for row in &buckets.trending_list {
        println!("  {:<5} saved {}x, score {}", row.ticker, row.count, row.score);
    }
    println!("\n== avoid ==");
    for row in &buckets.avoid_list {
        println!("  {:<5} passed {}x, score {}", row.ticker, row.count, row.score);
    }

    Ok(())
}
