pub mod query;
pub mod repair;
