//! Swift and Kotlin bindings for the PhotoTagger media bridge.
//!
//! All functionality lives in `mediabridge-core`; this crate re-exports it and
//! the `UniFFI` scaffolding so a single library is linked by the host app.

pub use mediabridge_core::*;

mediabridge_core::uniffi_reexport_scaffolding!();
