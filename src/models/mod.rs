//! API data models
//!
//! Request payloads for the CodeWhisperer runtime endpoints. Responses are
//! kept as untyped JSON.

pub mod requests;
