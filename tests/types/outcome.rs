use outcome_rail::{Outcome, Reason, Rejection};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[test]
fn pass_carries_value_and_is_valid() {
    let outcome = Outcome::passed(42);

    assert!(outcome.is_valid());
    assert!(!outcome.is_invalid());
    assert_eq!(outcome.value(), Some(&42));
    assert_eq!(outcome.into_value(), Some(42));
}

#[test]
fn fail_carries_no_value_and_is_invalid() {
    let outcome = Outcome::<i32>::fail(["rejected"]);

    assert!(outcome.is_invalid());
    assert!(!outcome.is_valid());
    assert_eq!(outcome.value(), None);
    assert_eq!(outcome.reason(), "rejected");
}

#[test]
fn fail_with_no_reasons_has_empty_reason() {
    let outcome = Outcome::<()>::fail(Vec::<Reason>::new());

    assert!(outcome.is_invalid());
    assert_eq!(outcome.reason(), "");
}

#[test]
fn unit_outcome_stays_valid_without_payload() {
    let outcome = Outcome::pass((), ["nothing to carry"]);

    assert!(outcome.is_valid());
    assert_eq!(outcome.value(), Some(&()));
}

#[test]
fn equality_is_structural() {
    assert_eq!(Outcome::pass("v", [Reason::new("x")]), Outcome::pass("v", [Reason::new("x")]));
    assert_ne!(Outcome::pass("v", ["x"]), Outcome::pass("v", ["y"]));
    assert_ne!(Outcome::pass("v", ["x"]), Outcome::pass("w", ["x"]));
    assert_ne!(Outcome::pass("v", ["x"]), Outcome::fail(["x"]));
    assert_eq!(Outcome::<&str>::fail(["x"]), Outcome::fail(["x"]));
}

#[test]
fn none_reason_joins_as_empty_segment() {
    let outcome = Outcome::pass(1, [Reason::NONE, Reason::new("b")]);

    assert_eq!(outcome.reason(), ", b");
}

#[test]
fn map_keeps_reason() {
    let outcome = Outcome::pass(21, ["doubled"]).map(|x| x * 2);
    assert_eq!(outcome, Outcome::pass(42, ["doubled"]));

    let failed = Outcome::<i32>::fail(["nope"]).map(|x| x * 2);
    assert_eq!(failed, Outcome::fail(["nope"]));
}

#[test]
fn and_then_skips_closure_on_failure() {
    let mut called = false;
    let outcome = Outcome::<i32>::fail(["first"]).and_then(|x| {
        called = true;
        Outcome::passed(x + 1)
    });

    assert!(!called);
    assert_eq!(outcome.reason(), "first");
}

#[test]
fn and_then_replaces_reason_on_success() {
    let outcome = Outcome::pass(3, ["stage one"]).and_then(|x| Outcome::pass(x + 1, ["stage two"]));

    assert_eq!(outcome, Outcome::pass(4, ["stage two"]));
}

#[test]
fn into_parts_splits_value_and_reason() {
    let (value, reason) = Outcome::pass("id-7", ["found"]).into_parts();
    assert_eq!(value, Some("id-7"));
    assert_eq!(reason, "found");

    let (value, reason) = Outcome::<&str>::fail(["gone"]).into_parts();
    assert_eq!(value, None);
    assert_eq!(reason, "gone");
}

#[test]
fn display_includes_reason_when_present() {
    assert_eq!(Outcome::pass(1, ["fine"]).to_string(), "pass: fine");
    assert_eq!(Outcome::<i32>::fail(["broken"]).to_string(), "fail: broken");
    assert_eq!(Outcome::passed(1).to_string(), "pass");
    assert_eq!(Outcome::<i32>::fail([Reason::NONE]).to_string(), "fail");
}

#[test]
fn into_result_and_option_conversions() {
    let ok: Result<i32, Rejection> = Outcome::passed(5).into();
    assert_eq!(ok, Ok(5));

    let err: Result<i32, Rejection> = Outcome::<i32>::fail(["denied"]).into();
    assert_eq!(err.unwrap_err().reason(), "denied");

    let some: Option<i32> = Outcome::passed(9).into();
    assert_eq!(some, Some(9));

    let none: Option<i32> = Outcome::<i32>::fail(["denied"]).into();
    assert_eq!(none, None);
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
struct Account {
    id: u32,
}

#[test]
#[cfg(feature = "serde")]
fn outcome_serde_round_trip() {
    let passed = Outcome::pass(Account { id: 1 }, ["active"]);
    let json = serde_json::to_value(&passed).unwrap();
    assert_eq!(json, serde_json::json!({ "valid": true, "value": { "id": 1 }, "reason": "active" }));
    let back: Outcome<Account> = serde_json::from_value(json).unwrap();
    assert_eq!(back, passed);

    let failed = Outcome::<Account>::fail(["locked"]);
    let json = serde_json::to_value(&failed).unwrap();
    assert_eq!(json, serde_json::json!({ "valid": false, "reason": "locked" }));
    let back: Outcome<Account> = serde_json::from_value(json).unwrap();
    assert_eq!(back, failed);
}

#[test]
#[cfg(feature = "serde")]
fn unit_outcome_serde_keeps_validity() {
    let passed = Outcome::passed(());
    let json = serde_json::to_string(&passed).unwrap();
    assert_eq!(json, r#"{"valid":true,"value":null,"reason":""}"#);

    let back: Outcome<()> = serde_json::from_str(&json).unwrap();
    assert!(back.is_valid());
}

#[test]
#[cfg(feature = "serde")]
fn inconsistent_serde_input_is_rejected() {
    let missing_value = serde_json::from_str::<Outcome<u32>>(r#"{"valid":true,"reason":""}"#);
    assert!(missing_value.is_err());

    let stray_value = serde_json::from_str::<Outcome<u32>>(r#"{"valid":false,"value":3,"reason":"x"}"#);
    assert!(stray_value.is_err());
}
