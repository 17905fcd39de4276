//! Message generation: prompt templates, batch orchestration, and handlers.

pub mod handlers;
pub mod orchestrator;
pub mod prompts;
