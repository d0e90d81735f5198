//! Supporting utilities used by models.
//!
//! - [`astronomy`]: Day length, sunrise, and sunset.
//! - [`comfort`]: Heat-index and solar-gain corrections to outdoor temperature.
//! - [`constraint`]: Type-level numeric invariants.
//! - [`units`]: Extensions to [`uom`].

pub mod astronomy;
pub mod comfort;
pub mod constraint;
pub mod units;
