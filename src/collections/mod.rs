//! Session-owned ordered collections: the transient result staging list and
//! the favorites collection.

pub mod favorites;
pub mod staging;

pub use favorites::Favorites;
pub use staging::ResultStaging;
