pub mod mood;
pub mod providers;
pub mod recommendations;
pub mod search;
pub mod trailer;

pub use providers::{build_provider, CatalogProvider, SearchFilter};
