//! `solid-playground` — wires products, invoices, reporting, persistence,
//! button capabilities and response sources into one runnable walkthrough.

pub mod config;
pub mod demo;

pub use config::PlaygroundConfig;
pub use demo::{Summary, run};
