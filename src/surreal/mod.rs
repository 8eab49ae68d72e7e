//! SurrealDB connection and write path.

mod connect;
mod write;

pub use connect::{connect, Client};
pub use write::{merge_record, upsert_record, BatchWriter};
