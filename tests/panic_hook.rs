//! The assertion-aware panic hook. Kept to a single test because panic hooks
//! are global to this binary.

use std::{
    panic,
    sync::atomic::{AtomicUsize, Ordering},
};

use asserter::{Asserter, recover};

static DELEGATED: AtomicUsize = AtomicUsize::new(0);

#[test]
fn hook_delegates_only_foreign_panics() {
    panic::set_hook(Box::new(|_| {
        DELEGATED.fetch_add(1, Ordering::SeqCst);
    }));
    asserter::hooks::install_panic_hook();
    asserter::hooks::install_panic_hook();

    // recovered typed fault
    recover(|| Asserter::PRODUCTION.that(false, Some(format_args!("recovered")))).unwrap_err();
    assert_eq!(DELEGATED.load(Ordering::SeqCst), 0);

    // unrecovered typed fault is printed by our hook
    let payload = panic::catch_unwind(|| Asserter::DEFAULT.that(false, None)).unwrap_err();
    assert!(payload.is::<asserter::AssertionFault>());
    assert_eq!(DELEGATED.load(Ordering::SeqCst), 0);

    // plain string fault
    let _ = panic::catch_unwind(|| Asserter::DEVELOPMENT.that(false, None));
    assert_eq!(DELEGATED.load(Ordering::SeqCst), 1);

    // plain string fault inside a recovery scope is still not ours
    let _ = panic::catch_unwind(|| {
        let _ = recover(|| Asserter::DEVELOPMENT.that(false, None));
    });
    assert_eq!(DELEGATED.load(Ordering::SeqCst), 2);

    // foreign panic
    let _ = panic::catch_unwind(|| panic!("unrelated"));
    assert_eq!(DELEGATED.load(Ordering::SeqCst), 3);
}
