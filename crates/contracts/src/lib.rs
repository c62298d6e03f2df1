//! Framework-agnostic core of the area-account maintenance screen.
//!
//! `metadata` holds the static per-screen column descriptors; `form` holds the
//! form session engine (state, cascading dependency resolution, validation).
//! Nothing in this crate touches the DOM or the network, so it is testable on
//! the host target.

pub mod form;
pub mod metadata;
