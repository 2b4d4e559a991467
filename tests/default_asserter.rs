//! Installing and replacing the process-wide default asserter.
//!
//! Kept to a single test: the default asserter is global to this binary.

use std::{panic, thread};

use asserter::{AssertionFault, Asserter, recover};

#[test]
fn install_then_replace() {
    asserter::hooks::install_panic_hook();
    assert_eq!(Asserter::current(), Asserter::DEFAULT);

    Asserter::PRODUCTION
        .install()
        .expect("nothing was installed yet");
    assert_eq!(Asserter::current(), Asserter::PRODUCTION);

    let rejected = Asserter::DEVELOPMENT.install().unwrap_err();
    assert_eq!(rejected.0, Asserter::DEVELOPMENT);
    assert_eq!(
        rejected.to_string(),
        "a default asserter is already installed globally"
    );
    assert_eq!(Asserter::current(), Asserter::PRODUCTION);

    // Production: typed, no location prefix.
    let error = recover(|| asserter::not_empty!("")).unwrap_err();
    assert_eq!(error.message(), "string shouldn't be empty");
    assert!(error.fault().location().is_none());

    // Readers on other threads see the installed asserter.
    let seen = thread::spawn(Asserter::current).join().unwrap();
    assert_eq!(seen, Asserter::PRODUCTION);

    // Development: plain strings that recovery never intercepts.
    assert_eq!(Asserter::DEVELOPMENT.replace(), Some(Asserter::PRODUCTION));
    let payload = panic::catch_unwind(|| {
        let _ = recover(|| asserter::map_not_empty!(std::collections::HashMap::<u8, u8>::new()));
    })
    .unwrap_err();
    assert!(payload.downcast_ref::<AssertionFault>().is_none());
    assert_eq!(
        payload.downcast_ref::<String>().map(String::as_str),
        Some("map shouldn't be empty")
    );

    // Custom combination: plain strings with locations.
    assert_eq!(Asserter::CALLER_INFO.replace(), Some(Asserter::DEVELOPMENT));
    let payload = panic::catch_unwind(|| asserter::that!(false, "ready")).unwrap_err();
    let message = payload.downcast_ref::<String>().unwrap();
    assert!(message.starts_with(concat!(file!(), ":")));
    assert!(message.ends_with(": ready"));
}
