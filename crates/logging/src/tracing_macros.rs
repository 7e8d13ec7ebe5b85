//! crates/logging/src/tracing_macros.rs
//! Convenience macros for walker tracing.
//!
//! These macros wrap the standard tracing macros with fixed targets under
//! `walk::`, so a single `walk=<level>` filter directive covers all of them.
//! They expand through this crate's re-export of `tracing`, so callers do not
//! need their own dependency on it.

/// Emit a per-walk event: a traversal starting at a root, or a sorted
/// listing being ready.
///
/// # Example
/// ```
/// logging::trace_walk_summary!("walking {:?}", "/tmp/tree");
/// ```
#[macro_export]
macro_rules! trace_walk_summary {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "walk::summary", $($arg)*)
    };
}

/// Emit a per-directory listing trace (open, close, entry counts).
///
/// # Example
/// ```
/// logging::trace_walk!("sorted {} entries in {:?}", 7, "/tmp");
/// ```
#[macro_export]
macro_rules! trace_walk {
    ($($arg:tt)*) => {
        $crate::__tracing::debug!(target: "walk::flist", $($arg)*)
    };
}

/// Emit a descent decision trace.
///
/// # Example
/// ```
/// logging::trace_descend!("entering directory {:?}", "/tmp/first");
/// ```
#[macro_export]
macro_rules! trace_descend {
    ($($arg:tt)*) => {
        $crate::__tracing::trace!(target: "walk::descend", $($arg)*)
    };
}

/// Emit a traversal failure.
///
/// Logged at debug level: callers surface the error itself, this only
/// records where the walk stopped.
///
/// # Example
/// ```
/// logging::trace_walk_error!("halting traversal: {}", "permission denied");
/// ```
#[macro_export]
macro_rules! trace_walk_error {
    ($($arg:tt)*) => {
        $crate::__tracing::debug!(target: "walk::error", $($arg)*)
    };
}
