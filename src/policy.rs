//! The failure-reporting policy shared by every check.
//!
//! An [`Asserter`] is a small set of independent flags. Checks evaluate their
//! condition and hand the failure to [`Asserter::report`], which raises a
//! panic shaped by those flags:
//!
//! | Flag | Set | Unset |
//! |---|---|---|
//! | [`TO_ERROR`](Asserter::TO_ERROR) | payload is an [`AssertionFault`] | payload is a `String` |
//! | [`CALLER_INFO`](Asserter::CALLER_INFO) | message prefixed with `file:line: ` | message as composed |
//!
//! # The default asserter
//!
//! The package-level macros ([`that!`](crate::that), [`equal!`](crate::equal),
//! ...) report through [`Asserter::current()`]. A program chooses it once, at
//! startup, with [`Asserter::install`]. Until then [`Asserter::DEFAULT`] is
//! used.

use core::{
    fmt,
    ops::{BitOr, BitOrAssign},
    panic::Location,
    sync::atomic::{AtomicU8, Ordering},
};

use crate::{fault::AssertionFault, message};

/// A failure-reporting policy.
///
/// Flags combine with `|`:
///
/// ```
/// use asserter::Asserter;
///
/// let asserter = Asserter::TO_ERROR | Asserter::CALLER_INFO;
/// assert_eq!(asserter, Asserter::DEFAULT);
/// assert!(asserter.contains(Asserter::PRODUCTION));
/// assert!(!Asserter::DEVELOPMENT.produces_typed_failure());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Asserter(u8);

impl Asserter {
    /// Raise an [`AssertionFault`] payload instead of a plain string, so
    /// that [`recover`](crate::recover) can turn the failure into an error.
    pub const TO_ERROR: Self = Self(1 << 0);

    /// Prefix the message with the `file:line` of the failing check.
    pub const CALLER_INFO: Self = Self(1 << 1);

    /// Plain string panics. Recovery scopes never intercept these, so every
    /// failure aborts the current thread.
    pub const DEVELOPMENT: Self = Self(0);

    /// Typed failures without location information.
    pub const PRODUCTION: Self = Self::TO_ERROR;

    /// Typed failures with location information. Used by the package-level
    /// macros unless another asserter was installed.
    pub const DEFAULT: Self = Self::PRODUCTION.union(Self::CALLER_INFO);

    const ALL_BITS: u8 = Self::TO_ERROR.0 | Self::CALLER_INFO.0;

    /// Returns the flags set in either `self` or `other`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if every flag of `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// The raw flag bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Builds an asserter from raw bits, or `None` if unknown bits are set.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL_BITS == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Whether failures are raised as [`AssertionFault`] payloads.
    #[must_use]
    pub const fn produces_typed_failure(self) -> bool {
        self.contains(Self::TO_ERROR)
    }

    /// Whether messages are prefixed with the caller's location.
    #[must_use]
    pub const fn includes_caller_location(self) -> bool {
        self.contains(Self::CALLER_INFO)
    }

    /// Reports a violated invariant. Never returns.
    ///
    /// `message`, when given, replaces `default_message`. The location used
    /// for [`CALLER_INFO`](Self::CALLER_INFO) is that of the caller, followed
    /// through any `#[track_caller]` frames.
    ///
    /// # Examples
    ///
    /// ```
    /// use asserter::{AssertionFault, Asserter};
    ///
    /// let payload = std::panic::catch_unwind(|| {
    ///     Asserter::DEVELOPMENT.report("pointer is nil", Some(format_args!("no config for {}", "db")));
    /// })
    /// .unwrap_err();
    ///
    /// assert!(payload.downcast_ref::<AssertionFault>().is_none());
    /// assert_eq!(payload.downcast_ref::<String>().unwrap(), "no config for db");
    /// ```
    #[cold]
    #[inline(never)]
    #[track_caller]
    pub fn report(self, default_message: &str, message: Option<fmt::Arguments<'_>>) -> ! {
        let composed = message::compose(default_message, message);
        let location = self
            .includes_caller_location()
            .then_some(Location::caller());
        let composed = match location {
            Some(location) => message::with_location(&composed, location),
            None => composed.into_owned(),
        };

        if self.produces_typed_failure() {
            std::panic::panic_any(AssertionFault::new(composed, location))
        } else {
            panic!("{composed}")
        }
    }
}

impl Default for Asserter {
    /// Returns [`Asserter::DEFAULT`].
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BitOr for Asserter {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Asserter {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for Asserter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Asserter(")?;
        match (self.produces_typed_failure(), self.includes_caller_location()) {
            (false, false) => f.write_str("DEVELOPMENT")?,
            (true, false) => f.write_str("TO_ERROR")?,
            (false, true) => f.write_str("CALLER_INFO")?,
            (true, true) => f.write_str("TO_ERROR | CALLER_INFO")?,
        }
        f.write_str(")")
    }
}

const UNSET: u8 = u8::MAX;

static DEFAULT_ASSERTER: AtomicU8 = AtomicU8::new(UNSET);

/// Error returned when a default asserter has already been installed.
///
/// Contains the asserter that was rejected.
#[derive(Copy, Clone)]
pub struct DefaultAsserterAlreadyInstalledError(pub Asserter);

impl fmt::Debug for DefaultAsserterAlreadyInstalledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DefaultAsserterAlreadyInstalledError")
            .field(&self.0)
            .finish()
    }
}

impl fmt::Display for DefaultAsserterAlreadyInstalledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a default asserter is already installed globally")
    }
}

impl core::error::Error for DefaultAsserterAlreadyInstalledError {}

impl Asserter {
    /// The asserter used by the package-level macros.
    ///
    /// This is whatever was installed with [`install`](Self::install) or
    /// [`replace`](Self::replace), or [`Asserter::DEFAULT`] if nothing was.
    #[must_use]
    #[inline]
    pub fn current() -> Self {
        match DEFAULT_ASSERTER.load(Ordering::Acquire) {
            UNSET => Self::DEFAULT,
            bits => Self(bits),
        }
    }

    /// Installs `self` as the process-wide default asserter.
    ///
    /// This is meant to happen once, during startup, before checks run on
    /// other threads. If a default asserter was already installed, returns an
    /// error containing `self`.
    ///
    /// See also [`replace`](Self::replace), which never errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use asserter::Asserter;
    ///
    /// Asserter::PRODUCTION.install().expect("failed to install asserter");
    /// assert_eq!(Asserter::current(), Asserter::PRODUCTION);
    ///
    /// // Second installation fails
    /// Asserter::DEVELOPMENT.install().unwrap_err();
    /// ```
    pub fn install(self) -> Result<(), DefaultAsserterAlreadyInstalledError> {
        match DEFAULT_ASSERTER.compare_exchange(UNSET, self.0, Ordering::Release, Ordering::Relaxed)
        {
            Ok(_) => Ok(()),
            Err(_) => Err(DefaultAsserterAlreadyInstalledError(self)),
        }
    }

    /// Replaces the process-wide default asserter with `self`.
    ///
    /// Returns the previously installed asserter, if any.
    pub fn replace(self) -> Option<Self> {
        match DEFAULT_ASSERTER.swap(self.0, Ordering::AcqRel) {
            UNSET => None,
            bits => Some(Self(bits)),
        }
    }
}
