//! # Lokal Infrastructure
//!
//! Concrete implementations of the ports defined in `lokal-core`.
//! This crate contains the database stores, the in-memory fallbacks, and the
//! authentication services.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory stores only
//! - `postgres` - PostgreSQL storage via SeaORM
//! - `auth` - JWT + Argon2 authentication

pub mod memory;

#[cfg(feature = "postgres")]
pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use memory::{MemoryPostStore, MemoryUserStore};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtTokenService};

#[cfg(feature = "postgres")]
pub use database::{PostgresPostStore, PostgresUserStore};
