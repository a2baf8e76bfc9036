#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{InMemoryLocalStore, LocalStore, Storage, StorageError};
