//! Browser-side implementations of the `lib-core` service traits.

pub mod api;
pub mod wallet;
