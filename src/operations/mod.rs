pub mod boundary;
pub mod creation;
pub mod query;
