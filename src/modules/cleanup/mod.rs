pub mod controller;
pub mod prompt;
pub mod schema;
