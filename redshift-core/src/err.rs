//! Error handling for the connector crates.
//!
//! Errors are propagated as `anyhow` errors with context attached at
//! each layer.

pub use anyhow::{anyhow, bail, ensure, format_err, Context, Error, Result};
