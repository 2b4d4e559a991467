//! The typed payload raised by [`Asserter::TO_ERROR`] asserters.
//!
//! [`Asserter::TO_ERROR`]: crate::Asserter::TO_ERROR

use alloc::string::String;
use core::{fmt, panic::Location};

/// A violated invariant, raised as a panic payload.
///
/// Recovery layers find these by downcasting the payload returned from
/// [`std::panic::catch_unwind`]. Any payload that is not an `AssertionFault`
/// did not come from a typed asserter and should be left alone.
///
/// # Examples
///
/// ```
/// use asserter::{AssertionFault, Asserter};
///
/// let payload = std::panic::catch_unwind(|| {
///     Asserter::PRODUCTION.not_empty("", None);
/// })
/// .unwrap_err();
///
/// let fault = payload.downcast::<AssertionFault>().unwrap();
/// assert_eq!(fault.message(), "string shouldn't be empty");
/// assert!(fault.location().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssertionFault {
    message: String,
    location: Option<&'static Location<'static>>,
}

impl AssertionFault {
    pub(crate) fn new(message: String, location: Option<&'static Location<'static>>) -> Self {
        Self { message, location }
    }

    /// The composed message, including the location prefix if the asserter
    /// had [`Asserter::CALLER_INFO`](crate::Asserter::CALLER_INFO) set.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the failing check was called, if the asserter recorded it.
    #[must_use]
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }

    /// Consumes the fault, returning its message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for AssertionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for AssertionFault {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_fault_send_sync() {
        static_assertions::assert_impl_all!(AssertionFault: Send, Sync, Clone, core::error::Error);
        static_assertions::assert_not_impl_any!(AssertionFault: Copy);
    }

    #[test]
    fn test_fault_display() {
        let fault = AssertionFault::new("got 3, want 4".into(), None);
        assert_eq!(fault.to_string(), "got 3, want 4");
        assert_eq!(fault.into_message(), "got 3, want 4");
    }

    #[test]
    fn test_fault_location() {
        let location = Location::caller();
        let fault = AssertionFault::new("map is nil".into(), Some(location));
        assert_eq!(fault.location(), Some(location));
    }
}
