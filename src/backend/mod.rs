pub mod client;

pub use client::ListingsClient;
