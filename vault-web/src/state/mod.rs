//! App-wide reactive state, provided through Leptos context.

pub mod config;
pub mod wallet;
