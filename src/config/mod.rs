// src/config/mod.rs
// DOCUMENTATION: Configuration module organization
// PURPOSE: Re-export configuration components

pub mod env;

pub use env::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
