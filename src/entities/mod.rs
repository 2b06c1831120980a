pub mod prelude;

pub mod documents;
pub mod users;
