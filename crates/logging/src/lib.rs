#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` carries the tracing conventions shared by the workspace: a set of
//! target-scoped macros used by the walker, a [`VerbosityConfig`] that maps
//! repeated `-v` flags onto filter directives, and (behind the `subscriber`
//! feature) [`init_tracing`] to install a stderr formatter.
//!
//! # Targets
//!
//! | macro | level | target |
//! | --- | --- | --- |
//! | [`trace_walk_summary!`] | info | `walk::summary` |
//! | [`trace_walk!`] | debug | `walk::flist` |
//! | [`trace_descend!`] | trace | `walk::descend` |
//! | [`trace_walk_error!`] | debug | `walk::error` |
//!
//! # Examples
//!
//! ```
//! use logging::VerbosityConfig;
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! assert_eq!(config.directive(), "warn,walk=debug");
//! logging::trace_walk!("listing {} entries", 3);
//! ```

mod config;
mod tracing_macros;

#[cfg(feature = "subscriber")]
mod tracing_bridge;

pub use config::VerbosityConfig;

#[cfg(feature = "subscriber")]
pub use tracing_bridge::{env_filter, init_tracing};

#[doc(hidden)]
pub use tracing as __tracing;
