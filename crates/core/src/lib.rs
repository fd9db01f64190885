//! Pure domain logic for syncing customer owners from an order export.
//!
//! Nothing in this crate touches the database. The store is reached
//! through the [`owner_map::OrderEmailLookup`] and
//! [`owner_map::AssignmentWriter`] traits, implemented in `kinetic-db`.

pub mod error;
pub mod order_csv;
pub mod owner_map;
