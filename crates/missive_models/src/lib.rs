//! Gemini provider integration for the Missive message generation service.
//!
//! This crate provides a reqwest-based client for the Gemini
//! `generateContent` REST endpoint. The base URL is injectable so tests
//! can point the client at a local stand-in server.

mod client;
mod conversions;
mod dto;

pub use client::GeminiClient;
pub use dto::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};
