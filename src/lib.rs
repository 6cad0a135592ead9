//! recite: pronunciation practice scoring
//!
//! The core lives in [`scoring`]: [`scoring::normalize`] turns a sentence
//! into comparable tokens and [`scoring::score`] compares a reference
//! sentence with recognized speech, giving a similarity percentage and
//! per-word feedback. Everything else (sentence libraries, the practice
//! session, the terminal front end) is built around those two calls.

pub mod app;
pub mod engine;
pub mod input;
pub mod scoring;
pub mod ui;

pub use scoring::{normalize, score, ScoreReport, TokenSequence};
