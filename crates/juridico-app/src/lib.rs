//! Portuguese legal-text pipeline.
//!
//! Raw text flows through cleanup, jargon annotation, summarization and a
//! small set of fallacy heuristics. Pure transforms live in [`text`] and
//! [`pipeline`]; [`services`] wires them to injected resources.

pub mod cli;
pub mod config;
pub mod error;
pub mod paths;
pub mod pipeline;
pub mod services;
pub mod text;
