pub mod connection;
pub mod sessions;

pub use connection::Database;
