/// Asserts that a condition holds, using the default asserter.
///
/// This macro can be invoked in two ways:
///
/// - `that!(term)` reports an empty message on failure.
/// - `that!(term, "format {}", args...)` reports the formatted message. The
///   trailing arguments are interpreted the same way as by [`format!()`].
///
/// Every check macro in this crate follows the same shape: the values to
/// check, optionally followed by a format string and its arguments. A
/// supplied message always replaces the check's default message.
///
/// The asserter is [`Asserter::current()`], so depending on what the program
/// installed the failure is either a plain panic or a typed
/// [`AssertionFault`] that [`recover`] turns into an error.
///
/// [`format!()`]: std::format
/// [`Asserter::current()`]: crate::Asserter::current
/// [`AssertionFault`]: crate::AssertionFault
/// [`recover`]: crate::recover
///
/// # Examples
///
/// ```
/// use asserter::{recover, that};
///
/// let workers = 0;
/// let error = recover(|| that!(workers > 0, "need at least one worker, got {workers}")).unwrap_err();
/// assert!(error.message().ends_with("need at least one worker, got 0"));
/// ```
#[macro_export]
macro_rules! that {
    ($term:expr $(,)?) => {
        $crate::Asserter::current().that($term, $crate::__private::None)
    };
    ($term:expr, $($arg:tt)+) => {
        $crate::Asserter::current().that(
            $term,
            $crate::__private::Some($crate::__private::format_args!($($arg)+)),
        )
    };
}

/// Asserts that an `Option` holding a reference or pointer is `Some`.
///
/// Default message: `pointer is nil`.
///
/// ```
/// let config: Option<Box<u32>> = Some(Box::new(3));
/// asserter::not_nil!(config);
/// ```
#[macro_export]
macro_rules! not_nil {
    ($reference:expr $(,)?) => {
        $crate::Asserter::current().not_nil(&$reference, $crate::__private::None)
    };
    ($reference:expr, $($arg:tt)+) => {
        $crate::Asserter::current().not_nil(
            &$reference,
            $crate::__private::Some($crate::__private::format_args!($($arg)+)),
        )
    };
}

/// Asserts that an optional sequence is `Some`. Empty sequences pass.
///
/// Default message: `slice is nil`.
#[macro_export]
macro_rules! slice_not_nil {
    ($sequence:expr $(,)?) => {
        $crate::Asserter::current().slice_not_nil(&$sequence, $crate::__private::None)
    };
    ($sequence:expr, $($arg:tt)+) => {
        $crate::Asserter::current().slice_not_nil(
            &$sequence,
            $crate::__private::Some($crate::__private::format_args!($($arg)+)),
        )
    };
}

/// Asserts that an optional channel endpoint is `Some`.
///
/// Default message: `channel is nil`.
#[macro_export]
macro_rules! channel_not_nil {
    ($channel:expr $(,)?) => {
        $crate::Asserter::current().channel_not_nil(&$channel, $crate::__private::None)
    };
    ($channel:expr, $($arg:tt)+) => {
        $crate::Asserter::current().channel_not_nil(
            &$channel,
            $crate::__private::Some($crate::__private::format_args!($($arg)+)),
        )
    };
}

/// Asserts that an optional map is `Some`. Empty maps pass.
///
/// Default message: `map is nil`.
#[macro_export]
macro_rules! map_not_nil {
    ($map:expr $(,)?) => {
        $crate::Asserter::current().map_not_nil(&$map, $crate::__private::None)
    };
    ($map:expr, $($arg:tt)+) => {
        $crate::Asserter::current().map_not_nil(
            &$map,
            $crate::__private::Some($crate::__private::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two values are equal. Both are borrowed.
///
/// Default message: `got {val:?}, want {want:?}`.
///
/// ```
/// let parts = "a:b".split(':').count();
/// asserter::equal!(parts, 2, "malformed pair");
/// ```
#[macro_export]
macro_rules! equal {
    ($val:expr, $want:expr $(,)?) => {
        $crate::Asserter::current().equal(&$val, &$want, $crate::__private::None)
    };
    ($val:expr, $want:expr, $($arg:tt)+) => {
        $crate::Asserter::current().equal(
            &$val,
            &$want,
            $crate::__private::Some($crate::__private::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two values differ. Both are borrowed.
///
/// Default message: `got {val:?}, want {want:?}`.
#[macro_export]
macro_rules! not_equal {
    ($val:expr, $want:expr $(,)?) => {
        $crate::Asserter::current().not_equal(&$val, &$want, $crate::__private::None)
    };
    ($val:expr, $want:expr, $($arg:tt)+) => {
        $crate::Asserter::current().not_equal(
            &$val,
            &$want,
            $crate::__private::Some($crate::__private::format_args!($($arg)+)),
        )
    };
}

/// Asserts that a sequence has exactly the given number of elements.
///
/// Default message: `got {len}, want {length}`.
#[macro_export]
macro_rules! slice_len {
    ($sequence:expr, $length:expr $(,)?) => {
        $crate::Asserter::current().slice_len(&$sequence, $length, $crate::__private::None)
    };
    ($sequence:expr, $length:expr, $($arg:tt)+) => {
        $crate::Asserter::current().slice_len(
            &$sequence,
            $length,
            $crate::__private::Some($crate::__private::format_args!($($arg)+)),
        )
    };
}

/// Asserts that a map has exactly the given number of entries.
///
/// Default message: `got {len}, want {length}`.
#[macro_export]
macro_rules! map_len {
    ($map:expr, $length:expr $(,)?) => {
        $crate::Asserter::current().map_len(&$map, $length, $crate::__private::None)
    };
    ($map:expr, $length:expr, $($arg:tt)+) => {
        $crate::Asserter::current().map_len(
            &$map,
            $length,
            $crate::__private::Some($crate::__private::format_args!($($arg)+)),
        )
    };
}

/// Asserts that a string is not empty.
///
/// Default message: `string shouldn't be empty`.
#[macro_export]
macro_rules! not_empty {
    ($string:expr $(,)?) => {
        $crate::Asserter::current().not_empty(&$string, $crate::__private::None)
    };
    ($string:expr, $($arg:tt)+) => {
        $crate::Asserter::current().not_empty(
            &$string,
            $crate::__private::Some($crate::__private::format_args!($($arg)+)),
        )
    };
}

/// Asserts that a sequence has at least one element. `None` fails.
///
/// Default message: `slice shouldn't be empty`.
#[macro_export]
macro_rules! slice_not_empty {
    ($sequence:expr $(,)?) => {
        $crate::Asserter::current().slice_not_empty(&$sequence, $crate::__private::None)
    };
    ($sequence:expr, $($arg:tt)+) => {
        $crate::Asserter::current().slice_not_empty(
            &$sequence,
            $crate::__private::Some($crate::__private::format_args!($($arg)+)),
        )
    };
}

/// Asserts that a map has at least one entry. `None` fails.
///
/// Default message: `map shouldn't be empty`.
#[macro_export]
macro_rules! map_not_empty {
    ($map:expr $(,)?) => {
        $crate::Asserter::current().map_not_empty(&$map, $crate::__private::None)
    };
    ($map:expr, $($arg:tt)+) => {
        $crate::Asserter::current().map_not_empty(
            &$map,
            $crate::__private::Some($crate::__private::format_args!($($arg)+)),
        )
    };
}
