//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate user intents into logged, applied events.
//! - Keep UI layers decoupled from the event log and storage details.

pub mod autosave;
pub mod board_service;
