//! Cross-crate integration tests for codec assembly and dispatch.

pub mod codec_assembly;
pub mod round_trip;
