//! Commonly used items for convenient importing.
//!
//! ```rust
//! use asserter::prelude::*;
//!
//! fn average(samples: &[f64]) -> Result<f64, AssertionError> {
//!     recover(|| {
//!         slice_not_empty!(samples, "no samples to average");
//!         samples.iter().sum::<f64>() / samples.len() as f64
//!     })
//!     .context("average")
//! }
//!
//! assert_eq!(average(&[1.0, 3.0]).unwrap(), 2.0);
//! assert!(average(&[]).unwrap_err().to_string().ends_with("no samples to average"));
//! ```
//!
//! This prelude includes the [`Asserter`] policy type, the check macros, the
//! recovery entry points ([`recover`], [`Handler`]) with their error types,
//! and [`ResultExt`].

pub use crate::{
    AssertionError, AssertionFault, Asserter, Handler, ResultExt, channel_not_nil, equal, map_len,
    map_not_empty, map_not_nil, not_empty, not_equal, not_nil, recover, slice_len,
    slice_not_empty, slice_not_nil, that,
};
