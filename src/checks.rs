//! The invariant checks, as methods on [`Asserter`].
//!
//! Every check takes the value(s) to validate and an optional caller message.
//! On success it falls through; on failure it calls [`Asserter::report`] with
//! its category default message and never returns.

use alloc::format;
use core::fmt;

use crate::{
    Asserter,
    collection::{Channel, Collection, Mapping, Sequence},
};

impl Asserter {
    /// Asserts that `term` is true.
    ///
    /// There is no default message, so pass one if the failure should say
    /// anything. This is the cheapest check.
    ///
    /// ```
    /// use asserter::Asserter;
    ///
    /// Asserter::PRODUCTION.that(1 + 1 == 2, None);
    /// ```
    #[inline]
    #[track_caller]
    pub fn that(self, term: bool, message: Option<fmt::Arguments<'_>>) {
        if !term {
            self.report("", message);
        }
    }

    /// Asserts that `reference` is present.
    ///
    /// Default message: `pointer is nil`.
    #[inline]
    #[track_caller]
    pub fn not_nil<T>(self, reference: &Option<T>, message: Option<fmt::Arguments<'_>>) {
        if reference.is_none() {
            self.report("pointer is nil", message);
        }
    }

    /// Asserts that `sequence` is present. A present but empty sequence
    /// passes; use [`slice_not_empty`](Self::slice_not_empty) to reject it.
    ///
    /// Default message: `slice is nil`.
    ///
    /// ```
    /// use asserter::Asserter;
    ///
    /// let empty: Option<Vec<u8>> = Some(Vec::new());
    /// Asserter::PRODUCTION.slice_not_nil(&empty, None);
    /// ```
    #[inline]
    #[track_caller]
    pub fn slice_not_nil<S: Sequence>(
        self,
        sequence: &Option<S>,
        message: Option<fmt::Arguments<'_>>,
    ) {
        if sequence.is_none() {
            self.report("slice is nil", message);
        }
    }

    /// Asserts that `channel` is present.
    ///
    /// Default message: `channel is nil`.
    #[inline]
    #[track_caller]
    pub fn channel_not_nil<C: Channel>(
        self,
        channel: &Option<C>,
        message: Option<fmt::Arguments<'_>>,
    ) {
        if channel.is_none() {
            self.report("channel is nil", message);
        }
    }

    /// Asserts that `map` is present. A present but empty map passes.
    ///
    /// Default message: `map is nil`.
    #[inline]
    #[track_caller]
    pub fn map_not_nil<M: Mapping>(self, map: &Option<M>, message: Option<fmt::Arguments<'_>>) {
        if map.is_none() {
            self.report("map is nil", message);
        }
    }

    /// Asserts that `val == want`.
    ///
    /// Default message: `got {val:?}, want {want:?}`.
    ///
    /// ```
    /// use asserter::{Asserter, recover};
    ///
    /// let error = recover(|| Asserter::PRODUCTION.equal(5, 6, None)).unwrap_err();
    /// assert_eq!(error.message(), "got 5, want 6");
    /// ```
    #[inline]
    #[track_caller]
    pub fn equal<T>(self, val: T, want: T, message: Option<fmt::Arguments<'_>>)
    where
        T: PartialEq + fmt::Debug,
    {
        if val != want {
            self.report(&format!("got {val:?}, want {want:?}"), message);
        }
    }

    /// Asserts that `val != want`.
    ///
    /// Default message: `got {val:?}, want {want:?}`.
    #[inline]
    #[track_caller]
    pub fn not_equal<T>(self, val: T, want: T, message: Option<fmt::Arguments<'_>>)
    where
        T: PartialEq + fmt::Debug,
    {
        if val == want {
            self.report(&format!("got {val:?}, want {want:?}"), message);
        }
    }

    /// Asserts that `sequence` has exactly `length` elements. An absent
    /// sequence has zero.
    ///
    /// Default message: `got {len}, want {length}`.
    #[inline]
    #[track_caller]
    pub fn slice_len<S: Sequence + ?Sized>(
        self,
        sequence: &S,
        length: usize,
        message: Option<fmt::Arguments<'_>>,
    ) {
        self.len_matches(sequence.len(), length, message);
    }

    /// Asserts that `map` has exactly `length` entries. An absent map has
    /// zero.
    ///
    /// Default message: `got {len}, want {length}`.
    #[inline]
    #[track_caller]
    pub fn map_len<M: Mapping + ?Sized>(
        self,
        map: &M,
        length: usize,
        message: Option<fmt::Arguments<'_>>,
    ) {
        self.len_matches(map.len(), length, message);
    }

    /// Asserts that `string` is not empty.
    ///
    /// Default message: `string shouldn't be empty`.
    #[inline]
    #[track_caller]
    pub fn not_empty(self, string: &str, message: Option<fmt::Arguments<'_>>) {
        if string.is_empty() {
            self.report("string shouldn't be empty", message);
        }
    }

    /// Asserts that `sequence` has at least one element. Absent sequences
    /// fail too.
    ///
    /// Default message: `slice shouldn't be empty`.
    #[inline]
    #[track_caller]
    pub fn slice_not_empty<S: Sequence + ?Sized>(
        self,
        sequence: &S,
        message: Option<fmt::Arguments<'_>>,
    ) {
        if sequence.is_empty() {
            self.report("slice shouldn't be empty", message);
        }
    }

    /// Asserts that `map` has at least one entry. Absent maps fail too.
    ///
    /// Default message: `map shouldn't be empty`.
    #[inline]
    #[track_caller]
    pub fn map_not_empty<M: Mapping + ?Sized>(self, map: &M, message: Option<fmt::Arguments<'_>>) {
        if map.is_empty() {
            self.report("map shouldn't be empty", message);
        }
    }

    #[inline]
    #[track_caller]
    fn len_matches(self, len: usize, length: usize, message: Option<fmt::Arguments<'_>>) {
        if len != length {
            self.report(&format!("got {len}, want {length}"), message);
        }
    }
}
