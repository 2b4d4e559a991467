//! Composition of the final assertion message.

use alloc::{borrow::Cow, format, string::String};
use core::{fmt, panic::Location};

/// Picks the message of a failed check.
///
/// Caller formatting, when present, replaces the category default entirely.
/// The two are never concatenated.
#[must_use]
pub(crate) fn compose<'a>(
    default_message: &'a str,
    message: Option<fmt::Arguments<'_>>,
) -> Cow<'a, str> {
    match message {
        Some(args) => match args.as_str() {
            Some(message) => Cow::Borrowed(message),
            None => Cow::Owned(alloc::fmt::format(args)),
        },
        None => Cow::Borrowed(default_message),
    }
}

#[must_use]
pub(crate) fn with_location(message: &str, location: &Location<'_>) -> String {
    format!("{}:{}: {message}", location.file(), location.line())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_used_verbatim() {
        assert_eq!(compose("pointer is nil", None), "pointer is nil");
        assert!(matches!(compose("pointer is nil", None), Cow::Borrowed(_)));
    }

    #[test]
    fn test_literal_replaces_default() {
        let message = compose("pointer is nil", Some(format_args!("config missing")));
        assert_eq!(message, "config missing");
        assert!(matches!(message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_formatted_replaces_default() {
        let name = "db";
        let message = compose("map is nil", Some(format_args!("{name} pool has {} slots", 3)));
        assert_eq!(message, "db pool has 3 slots");
    }

    #[test]
    fn test_empty_default() {
        assert_eq!(compose("", None), "");
    }

    #[test]
    fn test_location_prefix() {
        let location = Location::caller();
        let message = with_location("slice is nil", location);
        assert_eq!(
            message,
            format!("{}:{}: slice is nil", location.file(), location.line())
        );
        assert!(message.starts_with("src/message.rs:"));
    }
}
