//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&mut PgConnection` as the first argument, so they run
//! equally on a bare connection or inside a transaction.

pub mod customer_repo;
pub mod shopify_order_repo;

pub use customer_repo::CustomerRepo;
pub use shopify_order_repo::ShopifyOrderRepo;
