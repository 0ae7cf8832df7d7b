pub mod api;
pub mod collections;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod views;
