//! AI features powered by the Blink platform

pub mod client;
pub mod generator;

pub use client::{PlatformClient, PlatformError};
pub use generator::{SUMMARY_MODEL, TextGenerator, generate_summary};
