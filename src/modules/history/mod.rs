pub mod crud;
pub mod model;
pub mod schema;
