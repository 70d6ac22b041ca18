//! Static cave content.
//!
//! Cave maps are compiled into the binary and looked up by name through
//! [`MapCatalog`]. Content never carries game state; hosts copy what they
//! need when a game starts.

pub mod maps;

pub use maps::{DEFAULT_MAP, MapCatalog};
