//! Integration tests for lutforge crates.
//!
//! End-to-end scenarios that run JSON configurations through default
//! resolution, the display pipeline, and `.cube` text generation.
