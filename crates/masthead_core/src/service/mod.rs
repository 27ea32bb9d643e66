//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep derived catalog views (contributors, topic areas, top
//!   publisher) out of the storage layer.

pub mod press_service;
