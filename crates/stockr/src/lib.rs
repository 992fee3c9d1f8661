//! Core logic for the stockr discovery app: a fixed stock catalog, the
//! StockScore engine, a session store driving the swipe deck, leaderboard
//! aggregation over swipe telemetry, and the canned chat responder.

pub mod catalog;
pub mod config;
pub mod error;
pub mod scoring;
pub mod session;
pub mod telemetry;
