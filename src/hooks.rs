//! Panic hook integration for typed assertion faults.
//!
//! The standard panic hook does not know how to print an [`AssertionFault`]
//! payload and reports it as `Box<dyn Any>`. It also prints every panic,
//! including the ones a recovery scope is about to turn into an error.
//!
//! [`install_panic_hook`] chains a hook in front of the current one that:
//!
//! - prints nothing for assertion faults raised inside [`recover`] or
//!   [`Handler::run`] on the same thread,
//! - prints the fault's message for assertion faults nobody will recover,
//! - hands every other panic to the previously installed hook.
//!
//! ```
//! asserter::hooks::install_panic_hook();
//!
//! // Recovered faults are silent now.
//! let error = asserter::recover(|| asserter::not_empty!("")).unwrap_err();
//! assert!(error.message().ends_with("string shouldn't be empty"));
//! ```
//!
//! [`recover`]: crate::recover
//! [`Handler::run`]: crate::Handler::run

use alloc::boxed::Box;
use core::panic::Location;
use std::{
    io::{self, Write},
    panic,
    sync::Once,
};

use crate::{fault::AssertionFault, recover::is_recovering};

/// Installs the assertion-aware panic hook.
///
/// Only the first call has an effect. Hooks installed afterwards with
/// [`std::panic::set_hook`] replace this one.
pub fn install_panic_hook() {
    static INSTALL: Once = Once::new();

    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let Some(fault) = info.payload().downcast_ref::<AssertionFault>() else {
                return previous(info);
            };

            // The recovery scope logs the fault once it has been caught.
            if is_recovering() {
                return;
            }

            let thread = std::thread::current();
            let _ = render(&mut io::stderr().lock(), thread.name(), info.location(), fault);
        }));
    });
}

/// Writes the report for a typed fault that nobody recovers.
fn render(
    out: &mut impl Write,
    thread: Option<&str>,
    location: Option<&Location<'_>>,
    fault: &AssertionFault,
) -> io::Result<()> {
    let name = thread.unwrap_or("<unnamed>");
    match location {
        Some(location) => writeln!(out, "thread '{name}' panicked at {location}:\n{fault}"),
        None => writeln!(out, "thread '{name}' panicked:\n{fault}"),
    }
}
