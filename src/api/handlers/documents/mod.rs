pub mod delete;
pub mod import;
pub mod list;
pub mod reminder;
pub mod types;

// Re-export all types
pub use types::*;

// Re-export all handlers
pub use delete::delete_all;
pub use import::import_csv;
pub use list::list_documents;
pub use reminder::send_reminder;
