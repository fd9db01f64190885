//! Row structs for the tables the sync reads and writes.

pub mod customer;
