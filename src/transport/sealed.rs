//! Sealed trait marker for Rest implementations.
//!
//! This module prevents external implementations of the `Rest` trait, so the
//! set of transports handling credential-bearing payloads stays within this
//! crate.

pub(crate) mod private {
    /// Sealed trait marker.
    pub trait Sealed {}
}
