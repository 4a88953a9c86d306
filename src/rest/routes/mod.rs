//! Route handlers for the mock backend.

pub mod health;
pub mod integrations;
pub mod launch;
pub mod products;
