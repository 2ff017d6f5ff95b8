// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod direct_link;
pub mod normalizer;
pub mod search_gateway;
pub mod transport;

pub use direct_link::photo_slug;
pub use normalizer::Normalizer;
pub use search_gateway::*;
pub use transport::*;
