//! # Americano
//!
//! A scheduler for "Americano" padel/doubles-tennis tournaments.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, pairs, matches, stats)
//! - **config**: Tournament configuration loading and validation
//! - **schedule**: Round generation engines (free mode and fixed pairs)
//! - **calculate**: Standings computation from entered scores
//! - **report**: Text summary rendering
//! - **storage**: Two-document JSON snapshot persistence
//!
//! The engine is a pure, synchronous library: one generation call runs to
//! completion over state local to that call, so independent tournaments can
//! be generated concurrently without shared bookkeeping.

pub mod calculate;
pub mod config;
pub mod models;
pub mod report;
pub mod schedule;
pub mod storage;

pub use models::*;
