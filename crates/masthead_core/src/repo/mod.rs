//! Repository layer: the explicit catalog registry.
//!
//! # Responsibility
//! - Define the data access contract over the author/magazine/article
//!   graph and the in-memory registry implementation.
//! - Keep the three-way article wiring atomic behind one publish API.
//!
//! # Invariants
//! - Writes validate before mutating; a failed write changes nothing.
//! - Repository APIs return semantic errors (`AuthorNotFound`,
//!   `MagazineNotFound`, duplicates) rather than panicking.

pub mod press_repo;
