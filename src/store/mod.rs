// Persistence exports
pub mod json;
pub mod repository;
pub mod seed;

pub use json::JsonFileStore;
pub use repository::{DirectoryStore, MemoryStore, StoreError};
pub use seed::generate_directory;
