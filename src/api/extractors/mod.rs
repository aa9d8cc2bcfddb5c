//! Custom request extractors.

mod payload;

pub use payload::{Payload, ValidatedPayload};
