pub mod entities;
pub mod transaction;

