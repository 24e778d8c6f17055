use outcome_rail::{Outcome, Reason};

mod outcome;
mod rejection;

#[test]
fn outcome_joins_reasons_in_order() {
    let outcome = Outcome::<()>::fail([Reason::new("first"), Reason::new("second")]);

    assert_eq!(outcome.reason(), "first, second");
    assert_eq!(outcome.reason(), format!("{}, {}", Reason::new("first"), Reason::new("second")));
}

#[test]
fn passing_outcome_with_no_reasons_has_empty_reason() {
    let outcome = Outcome::pass("guarded", Vec::<Reason>::new());

    assert!(outcome.is_valid());
    assert_eq!(outcome.reason(), "");
    assert_eq!(outcome, Outcome::passed("guarded"));
}
