pub mod classifier;
pub mod importer;
pub mod mailer;
pub mod reminder;
