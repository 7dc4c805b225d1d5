//! Embedded key-value repository implementations.
//!
//! Concrete implementations of domain repository traits over redb, an embedded
//! ACID key-value store backed by a single database file.
//!
//! # Repositories
//!
//! - [`RedbLinkRepository`] - Link record storage and retrieval

pub mod redb_link_repository;

pub use redb_link_repository::RedbLinkRepository;
