pub mod cleanup;
pub mod history;
