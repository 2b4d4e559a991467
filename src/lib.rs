#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Invariant checks with a configurable fault-reporting policy.
//!
//! ## Overview
//!
//! Call sites state invariants ("this value is present", "this collection
//! has three elements", "this condition holds") and, when one is violated,
//! the active [`Asserter`] decides what the failure looks like:
//!
//! - A plain string panic, indistinguishable from any other unrecoverable
//!   fault. This is [`Asserter::DEVELOPMENT`].
//! - A panic carrying a typed [`AssertionFault`] payload. A recovery scope
//!   further up the stack ([`recover`] or [`Handler`]) can intercept exactly
//!   these payloads and turn them into an ordinary [`AssertionError`]. This is
//!   [`Asserter::PRODUCTION`].
//!
//! Either shape can additionally be prefixed with the caller's `file:line`
//! location ([`Asserter::CALLER_INFO`]). The package-level macros use
//! [`Asserter::current()`], which is [`Asserter::DEFAULT`] (typed, with
//! locations) unless the program installs something else at startup.
//!
//! ## Quick Example
//!
//! ```
//! use asserter::prelude::*;
//!
//! fn parse_header(fields: &[&str]) -> Result<String, AssertionError> {
//!     Handler::new().context("parse header").run(|| {
//!         asserter::slice_len!(fields, 2, "expected key and value, got {fields:?}");
//!         asserter::not_empty!(fields[0]);
//!         format!("{}={}", fields[0], fields[1])
//!     })
//! }
//!
//! assert_eq!(parse_header(&["a", "b"]).unwrap(), "a=b");
//!
//! let error = parse_header(&["", "b"]).unwrap_err();
//! assert!(error.to_string().starts_with("parse header: "));
//! assert!(error.to_string().ends_with("string shouldn't be empty"));
//! ```
//!
//! ## Choosing a Policy
//!
//! The default asserter is process-wide and meant to be chosen once, before
//! any checks run:
//!
//! ```
//! use asserter::Asserter;
//!
//! // e.g. at the top of `main`, or in test setup
//! Asserter::DEVELOPMENT
//!     .install()
//!     .expect("default asserter was already chosen");
//! ```
//!
//! Code that needs a different policy locally can call the checks as methods
//! on any [`Asserter`] value instead of going through the macros:
//!
//! ```
//! use asserter::{Asserter, recover};
//!
//! let error = recover(|| Asserter::PRODUCTION.equal(2 + 2, 5, None)).unwrap_err();
//! assert_eq!(error.message(), "got 4, want 5");
//! ```
//!
//! ## Recovery
//!
//! Only [`AssertionFault`] payloads are intercepted. Plain string panics,
//! including every fault raised under [`Asserter::DEVELOPMENT`], keep
//! unwinding through [`recover`] and [`Handler`] untouched. Install
//! [`hooks::install_panic_hook`] to get readable output for typed faults that
//! nobody recovers, and silence for the ones that are recovered.

extern crate alloc;

#[macro_use]
mod macros;

pub mod collection;
pub mod hooks;
pub mod policy;
pub mod prelude;
pub mod recover;

mod checks;
mod fault;
mod message;
mod result_ext;

pub use self::{
    fault::AssertionFault,
    policy::{Asserter, DefaultAsserterAlreadyInstalledError},
    recover::{AssertionError, Handler, recover},
    result_ext::ResultExt,
};

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    pub use core::{
        format_args,
        option::Option::{None, Some},
    };
}
