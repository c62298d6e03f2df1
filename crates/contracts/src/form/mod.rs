//! Form session engine: state, cascading dependency resolution, validation.
//!
//! A session is opened with [`resolver::open_create`] or
//! [`resolver::open_edit`], which return the initial [`state::FormState`]
//! plus the option lookups to run. Every user edit goes through
//! [`resolver::on_field_change`], which returns the next batch of lookups.
//! The host executes lookups however it likes (async fetch, test stub) and
//! feeds results back through [`state::FormState::complete_fetch`].

pub mod record;
pub mod resolver;
pub mod state;
pub mod validation;

pub use record::Record;
pub use resolver::{key_values, on_field_change, open_create, open_edit, FetchPlan};
pub use state::{FormMode, FormState, OptionItem};
pub use validation::validate;
