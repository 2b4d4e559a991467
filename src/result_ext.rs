use core::fmt;

use crate::recover::AssertionError;

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for Result<T, crate::recover::AssertionError> {}
}

/// Extension methods for adding context to recovered assertion errors.
///
/// ```
/// use asserter::prelude::*;
///
/// fn open_account(owner: &str) -> Result<u64, AssertionError> {
///     recover(|| {
///         Asserter::PRODUCTION.not_empty(owner, None);
///         42
///     })
///     .context(format!("open account for {owner:?}"))
/// }
///
/// assert_eq!(
///     open_account("").unwrap_err().to_string(),
///     r#"open account for "": string shouldn't be empty"#
/// );
/// ```
pub trait ResultExt<T>: sealed::Sealed {
    /// Wraps the error, if any, in another context segment.
    #[must_use]
    fn context<C>(self, context: C) -> Result<T, AssertionError>
    where
        C: fmt::Display;

    /// Like [`context`](Self::context), but only builds the context on
    /// failure.
    #[must_use]
    fn context_lazy<C, F>(self, context: F) -> Result<T, AssertionError>
    where
        F: FnOnce() -> C,
        C: fmt::Display;
}

impl<T> ResultExt<T> for Result<T, AssertionError> {
    #[inline]
    fn context<C>(self, context: C) -> Result<T, AssertionError>
    where
        C: fmt::Display,
    {
        self.map_err(|error| error.context(context))
    }

    #[inline]
    fn context_lazy<C, F>(self, context: F) -> Result<T, AssertionError>
    where
        F: FnOnce() -> C,
        C: fmt::Display,
    {
        self.map_err(|error| error.context(context()))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::cell::Cell;
    use std::collections::HashMap;

    use super::*;
    use crate::{AssertionFault, Asserter, recover};

    #[test]
    fn test_context_on_ok_is_noop() {
        let built = Cell::new(false);
        let value = Ok::<_, AssertionError>(3)
            .context("unused")
            .context_lazy(|| {
                built.set(true);
                "unused"
            })
            .unwrap();
        assert_eq!(value, 3);
        assert!(!built.get());
    }

    #[test]
    fn test_context_chain() {
        crate::hooks::install_panic_hook();
        let routes: Option<HashMap<u8, u8>> = None;
        let error = recover(|| Asserter::PRODUCTION.map_len(&routes, 2, None))
            .context("load routes")
            .context_lazy(|| "boot")
            .unwrap_err();
        assert_eq!(error.to_string(), "boot: load routes: got 0, want 2");
        assert_eq!(
            error.into_fault(),
            AssertionFault::new("got 0, want 2".into(), None)
        );
    }
}
