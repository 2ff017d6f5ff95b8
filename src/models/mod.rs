// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod collection;
pub mod envelope;
pub mod photo;
pub mod request;
pub mod unsplash;

pub use collection::*;
pub use envelope::*;
pub use photo::*;
pub use request::*;
pub use unsplash::*;
