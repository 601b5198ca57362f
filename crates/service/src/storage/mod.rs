//! Storage abstractions for service layer
//!
//! Poster files referenced by movies live on the local filesystem under a
//! configured static directory.

pub mod poster_store;

pub use poster_store::PosterStore;
