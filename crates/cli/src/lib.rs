#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front end of the `oc-walk` binary. It
//! parses the traversal switches with a [`clap`](https://docs.rs/clap/)
//! command definition, builds a [`walk::DirectoryWalker`] for the requested
//! order and prints one path per line.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error, so the binary wrapper only has to lock the
//! process streams and tests can capture output in memory.
//!
//! # Exit codes
//!
//! | code | meaning |
//! | --- | --- |
//! | `0` | listing completed (or help was shown) |
//! | `1` | invalid arguments, missing `ROOT`, or stdout became unwritable |
//! | `23` | the traversal failed; the listing printed so far is partial |
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["oc-walk", "--help"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(String::from_utf8(stdout).unwrap().contains("Usage:"));
//! assert!(stderr.is_empty());
//! ```

mod frontend;

pub use frontend::{PROGRAM_NAME, render_help, run};
