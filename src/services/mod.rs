// src/services/mod.rs
pub mod chatbot;
pub mod knowledge;
pub mod metrics_manager;
