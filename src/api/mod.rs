//! Probe layer
//!
//! Endpoint probes, the response printer and the fixed run order.

pub mod driver;
pub mod printer;
pub mod probes;
