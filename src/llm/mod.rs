//! LLM module for tubenotes
//!
//! Builds the summary instruction and calls the Gemini API.

mod client;
mod gemini;
pub mod prompts;

pub use client::{build_generator, GenerationRequest, TextGenerator};
pub use gemini::GeminiClient;
