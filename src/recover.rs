//! Turning typed assertion faults back into returned errors.
//!
//! A check raised under an asserter with [`Asserter::TO_ERROR`] unwinds with
//! an [`AssertionFault`] payload. The functions here run a closure, intercept
//! exactly that payload, and return it as an [`AssertionError`]. Every other
//! panic payload, including the plain strings raised by
//! [`Asserter::DEVELOPMENT`], is resumed untouched.
//!
//! # Examples
//!
//! ```
//! use asserter::prelude::*;
//!
//! fn checksum(bytes: &[u8]) -> Result<u8, AssertionError> {
//!     Handler::new()
//!         .context(format!("checksum of {} bytes", bytes.len()))
//!         .run(|| {
//!             asserter::slice_not_empty!(bytes);
//!             bytes.iter().fold(0u8, |sum, byte| sum.wrapping_add(*byte))
//!         })
//! }
//!
//! assert_eq!(checksum(&[1, 2, 3]).unwrap(), 6);
//! let error = checksum(&[]).unwrap_err();
//! assert!(error.to_string().starts_with("checksum of 0 bytes: "));
//! ```
//!
//! [`Asserter::TO_ERROR`]: crate::Asserter::TO_ERROR
//! [`Asserter::DEVELOPMENT`]: crate::Asserter::DEVELOPMENT

use alloc::{
    boxed::Box,
    string::{String, ToString},
    vec::Vec,
};
use core::{cell::Cell, fmt, panic::AssertUnwindSafe};
use std::panic;

use crate::fault::AssertionFault;

std::thread_local! {
    static RECOVERY_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Whether the current thread is inside [`recover`] or [`Handler::run`].
pub(crate) fn is_recovering() -> bool {
    RECOVERY_DEPTH.with(|depth| depth.get() > 0)
}

struct RecoveryScope;

impl RecoveryScope {
    fn enter() -> Self {
        RECOVERY_DEPTH.with(|depth| depth.set(depth.get() + 1));
        RecoveryScope
    }
}

impl Drop for RecoveryScope {
    fn drop(&mut self) {
        RECOVERY_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

fn intercept<T, F>(f: F) -> Result<T, AssertionFault>
where
    F: FnOnce() -> T,
{
    let outcome = {
        let _scope = RecoveryScope::enter();
        panic::catch_unwind(AssertUnwindSafe(f))
    };

    match outcome {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<AssertionFault>() {
            Ok(fault) => {
                tracing::debug!(fault = %fault, "intercepted assertion fault");
                Err(*fault)
            }
            Err(payload) => {
                tracing::trace!("resuming panic that is not an assertion fault");
                panic::resume_unwind(payload)
            }
        },
    }
}

/// Runs `f`, returning any typed assertion fault it raises as an error.
///
/// Shorthand for `Handler::new().run(f)`.
///
/// ```
/// use asserter::{Asserter, recover};
///
/// let error = recover(|| Asserter::PRODUCTION.not_empty("", None)).unwrap_err();
/// assert_eq!(error.to_string(), "string shouldn't be empty");
/// ```
pub fn recover<T, F>(f: F) -> Result<T, AssertionError>
where
    F: FnOnce() -> T,
{
    Handler::new().run(f)
}

/// A recovery scope with context and compensating cleanups.
///
/// Contexts are added to the error in registration order, so the last one
/// registered ends up outermost. Cleanups run only when the closure fails,
/// most recently registered first.
///
/// ```
/// use std::cell::RefCell;
///
/// use asserter::{Asserter, Handler};
///
/// let log = RefCell::new(Vec::new());
/// let error = Handler::new()
///     .context("write batch")
///     .cleanup(|| log.borrow_mut().push("release lock"))
///     .cleanup(|| log.borrow_mut().push("drop temp file"))
///     .run(|| Asserter::PRODUCTION.slice_len(&[1, 2], 3, None))
///     .unwrap_err();
///
/// assert_eq!(error.to_string(), "write batch: got 2, want 3");
/// assert_eq!(*log.borrow(), ["drop temp file", "release lock"]);
/// ```
#[must_use]
pub struct Handler<'a> {
    contexts: Vec<String>,
    cleanups: Vec<Box<dyn FnOnce() + 'a>>,
}

impl Default for Handler<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("contexts", &self.contexts)
            .field("cleanups", &self.cleanups.len())
            .finish()
    }
}

impl<'a> Handler<'a> {
    /// Creates a handler with no context and no cleanups.
    pub fn new() -> Self {
        Self {
            contexts: Vec::new(),
            cleanups: Vec::new(),
        }
    }

    /// Adds a context segment to recovered errors.
    pub fn context<C: fmt::Display>(mut self, context: C) -> Self {
        self.contexts.push(context.to_string());
        self
    }

    /// Registers an action to run if the closure fails.
    pub fn cleanup<F>(mut self, cleanup: F) -> Self
    where
        F: FnOnce() + 'a,
    {
        self.cleanups.push(Box::new(cleanup));
        self
    }

    /// Runs `f`, converting a typed assertion fault into an
    /// [`AssertionError`].
    ///
    /// Any other panic is resumed after this scope is left; cleanups do not
    /// run for it.
    pub fn run<T, F>(self, f: F) -> Result<T, AssertionError>
    where
        F: FnOnce() -> T,
    {
        intercept(f).map_err(|fault| self.into_error(fault))
    }

    /// Like [`run`](Self::run), for closures that already return a
    /// `Result`.
    ///
    /// Cleanups also run when the closure returns `Err`. Context is only
    /// added to errors that came from an assertion fault.
    ///
    /// ```
    /// use asserter::{AssertionError, Handler};
    ///
    /// #[derive(Debug)]
    /// enum LoadError {
    ///     Assertion(AssertionError),
    ///     Missing,
    /// }
    ///
    /// impl From<AssertionError> for LoadError {
    ///     fn from(error: AssertionError) -> Self {
    ///         LoadError::Assertion(error)
    ///     }
    /// }
    ///
    /// let result: Result<(), LoadError> = Handler::new().run_result(|| Err(LoadError::Missing));
    /// assert!(matches!(result, Err(LoadError::Missing)));
    /// ```
    pub fn run_result<T, E, F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<AssertionError>,
    {
        match intercept(f) {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(error)) => {
                self.clean_up();
                Err(error)
            }
            Err(fault) => Err(E::from(self.into_error(fault))),
        }
    }

    fn clean_up(self) -> Vec<String> {
        let Self { contexts, cleanups } = self;
        for cleanup in cleanups.into_iter().rev() {
            cleanup();
        }
        contexts
    }

    fn into_error(self, fault: AssertionFault) -> AssertionError {
        self.clean_up()
            .into_iter()
            .fold(AssertionError::from(fault), AssertionError::context)
    }
}

/// An assertion fault that was recovered into a returned error.
///
/// `Display` prints the context segments, outermost first, followed by the
/// fault's message: `outer: inner: got 3, want 4`.
#[derive(Clone, PartialEq, Eq)]
pub struct AssertionError {
    fault: AssertionFault,
    contexts: Vec<String>,
}

impl AssertionError {
    /// The intercepted fault.
    #[must_use]
    pub fn fault(&self) -> &AssertionFault {
        &self.fault
    }

    /// The fault's message, without any context.
    #[must_use]
    pub fn message(&self) -> &str {
        self.fault.message()
    }

    /// The context segments, innermost first.
    pub fn contexts(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.contexts.iter().map(String::as_str)
    }

    /// Wraps the error in another context segment.
    #[must_use]
    pub fn context<C: fmt::Display>(mut self, context: C) -> Self {
        self.contexts.push(context.to_string());
        self
    }

    /// Discards the context and returns the fault.
    #[must_use]
    pub fn into_fault(self) -> AssertionFault {
        self.fault
    }
}

impl From<AssertionFault> for AssertionError {
    fn from(fault: AssertionFault) -> Self {
        Self {
            fault,
            contexts: Vec::new(),
        }
    }
}

impl fmt::Display for AssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for context in self.contexts.iter().rev() {
            write!(f, "{context}: ")?;
        }
        fmt::Display::fmt(&self.fault, f)
    }
}

impl fmt::Debug for AssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssertionError")
            .field("message", &self.fault.message())
            .field("contexts", &self.contexts)
            .finish()
    }
}

impl core::error::Error for AssertionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.fault)
    }
}
