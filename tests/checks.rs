//! The package-level check macros, reporting through the default asserter.
//!
//! Nothing in this binary installs an asserter, so every failure is a typed
//! fault prefixed with the location of the macro call.

use std::collections::{BTreeMap, HashMap};
use std::sync::mpsc;

use asserter::prelude::*;

#[track_caller]
fn message_of(check: impl FnOnce()) -> String {
    asserter::hooks::install_panic_hook();
    recover(check).unwrap_err().message().to_owned()
}

fn strip_location(message: &str) -> &str {
    let prefix = concat!(file!(), ":");
    assert!(message.starts_with(prefix), "missing location in {message:?}");
    let (_line, rest) = message[prefix.len()..]
        .split_once(": ")
        .expect("location is followed by ': '");
    rest
}

#[test]
fn default_asserter_is_typed_with_locations() {
    assert_eq!(Asserter::current(), Asserter::DEFAULT);
}

#[test]
fn passing_checks_fall_through() {
    let items = vec![1, 2, 3];
    let routes = HashMap::from([("/", 1)]);
    let (sender, _receiver) = mpsc::channel::<()>();
    let sender = Some(sender);

    that!(items.len() == 3);
    not_nil!(Some(&items));
    slice_not_nil!(Some(&items));
    map_not_nil!(Some(&routes));
    channel_not_nil!(sender);
    equal!(items[0], 1);
    not_equal!(items[0], 2);
    slice_len!(items, 3);
    map_len!(routes, 1);
    not_empty!("x");
    slice_not_empty!(items);
    map_not_empty!(routes);
}

#[test]
fn default_messages() {
    let none_vec: Option<Vec<u8>> = None;
    let none_map: Option<BTreeMap<u8, u8>> = None;
    let none_channel: Option<mpsc::Sender<u8>> = None;
    let none_ref: Option<&str> = None;

    let cases: Vec<(String, &str)> = vec![
        (message_of(|| that!(false)), ""),
        (message_of(|| not_nil!(none_ref)), "pointer is nil"),
        (message_of(|| slice_not_nil!(none_vec)), "slice is nil"),
        (message_of(|| channel_not_nil!(none_channel)), "channel is nil"),
        (message_of(|| map_not_nil!(none_map)), "map is nil"),
        (message_of(|| equal!(5, 6)), "got 5, want 6"),
        (message_of(|| not_equal!(5, 5)), "got 5, want 5"),
        (message_of(|| slice_len!([1, 2, 3], 4)), "got 3, want 4"),
        (message_of(|| map_len!(HashMap::<u8, u8>::new(), 1)), "got 0, want 1"),
        (message_of(|| not_empty!("")), "string shouldn't be empty"),
        (message_of(|| slice_not_empty!(Vec::<u8>::new())), "slice shouldn't be empty"),
        (message_of(|| map_not_empty!(BTreeMap::<u8, u8>::new())), "map shouldn't be empty"),
    ];

    for (message, expected) in &cases {
        assert_eq!(strip_location(message), *expected);
    }
}

#[test]
fn caller_formatting_replaces_default() {
    let shard = 7;
    let message = message_of(|| equal!(5, 6, "shard {shard} has {} replicas", 5));
    assert_eq!(strip_location(&message), "shard 7 has 5 replicas");
    assert!(!message.contains("got 5"));

    let message = message_of(|| not_empty!("", "username required"));
    assert_eq!(strip_location(&message), "username required");

    let message = message_of(|| slice_len!(vec![1], 2, "one item",));
    assert_eq!(strip_location(&message), "one item");
}

#[test]
fn location_points_at_macro_call() {
    asserter::hooks::install_panic_hook();
    let (line, result) = (line!(), recover(|| slice_not_empty!([0u8; 0])));
    let fault = result.unwrap_err().into_fault();
    assert_eq!(fault.location().map(|l| l.line()), Some(line));
    assert_eq!(
        fault.message(),
        format!("{}:{line}: slice shouldn't be empty", file!())
    );
}

#[test]
fn identity_and_content_checks_differ_on_empty_containers() {
    let empty: Option<Vec<u8>> = Some(Vec::new());
    let absent: Option<Vec<u8>> = None;

    // present but empty
    slice_not_nil!(empty);
    let message = message_of(|| slice_not_empty!(empty));
    assert_eq!(strip_location(&message), "slice shouldn't be empty");

    // absent fails both
    let message = message_of(|| slice_not_nil!(absent));
    assert_eq!(strip_location(&message), "slice is nil");
    let message = message_of(|| slice_not_empty!(absent));
    assert_eq!(strip_location(&message), "slice shouldn't be empty");

    let empty_map: Option<HashMap<u8, u8>> = Some(HashMap::new());
    map_not_nil!(empty_map);
    let message = message_of(|| map_not_empty!(empty_map));
    assert_eq!(strip_location(&message), "map shouldn't be empty");
}

#[test]
fn equality_reports_got_before_want() {
    equal!(5, 5);
    let message = message_of(|| equal!(5, 6));
    let got = message.rfind('5').unwrap();
    let want = message.rfind('6').unwrap();
    assert!(got < want);

    not_equal!(5, 6);
    assert_eq!(strip_location(&message_of(|| not_equal!(5, 5))), "got 5, want 5");
}

#[test]
fn length_checks() {
    let sequence = [10, 20, 30];
    slice_len!(sequence, 3);
    assert_eq!(
        strip_location(&message_of(|| slice_len!(sequence, 4))),
        "got 3, want 4"
    );
}
