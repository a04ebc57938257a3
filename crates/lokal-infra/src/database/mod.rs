//! Database access via SeaORM.

mod connections;

pub mod entity;

mod postgres_store;

pub use connections::{DatabaseConfig, connect};
pub use postgres_store::{PostgresPostStore, PostgresUserStore};

#[cfg(test)]
mod tests;
