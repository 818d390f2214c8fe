//! Mock LLM-powered intelligent query-retrieval service.
//!
//! A stub HTTP API that simulates document question answering: queries are
//! matched against a fixed rule table and answered with canned payloads
//! after a configurable simulated processing delay. There is no ingestion,
//! no vector search, and no model call behind it.

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod synthesizer;
