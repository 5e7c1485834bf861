// ABOUTME: Shared configuration names for Architect Prime
// ABOUTME: Re-exports environment variable constants read by the CLI

pub mod constants;

pub use constants::*;
