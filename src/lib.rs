//! # Summarist
//!
//! Article summarisation using hosted LLMs, as a CLI and a small HTTP
//! service.
//!
//! ## Features
//!
//! - **Seven summary styles**: concise, bullet points, ELI5, executive,
//!   detailed, pros & cons, key facts
//! - **Local history**: explicit saves land in a sled-backed store, newest
//!   first, with plain-text export
//! - **HTTP mode**: `POST /api/summarize` for browser front ends

pub mod agent;
pub mod config;
pub mod export;
pub mod fetch;
pub mod server;
pub mod session;
pub mod store;
pub mod style;
pub mod summarizer;

pub use config::Config;
pub use store::{SavedSummary, SummaryStore};
pub use style::SummaryStyle;
pub use summarizer::Summarizer;
