pub mod edit_session;
pub mod error;
pub mod inmemory_repository;

pub use edit_session::EditSession;
pub use inmemory_repository::{InMemoryRepository, KeySequence};
