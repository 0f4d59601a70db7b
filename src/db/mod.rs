pub mod accounts;
pub mod connection;
pub mod favorites;

pub use connection::{init_db, Database};
