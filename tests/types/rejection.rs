use outcome_rail::{Outcome, Rejection};
use std::error::Error;

#[test]
fn rejection_displays_reason() {
    let rejection = Rejection::new("over quota");

    assert_eq!(rejection.to_string(), "over quota");
    assert_eq!(rejection.reason(), "over quota");
}

#[test]
fn empty_rejection_displays_placeholder() {
    let rejection = Outcome::<()>::fail(Vec::<&'static str>::new()).into_result().unwrap_err();

    assert_eq!(rejection.reason(), "");
    assert_eq!(rejection.to_string(), "rejected");
}

#[test]
fn rejection_is_a_std_error() {
    let boxed: Box<dyn Error> = Box::new(Rejection::new("nope"));

    assert!(boxed.source().is_none());
    assert_eq!(boxed.to_string(), "nope");
}

#[test]
fn rejection_propagates_with_question_mark() {
    fn gate(open: bool) -> Result<&'static str, Rejection> {
        let value = Outcome::condition("through")
            .pass_when(|| open, "gate open")
            .fail(outcome_rail::Reason::new("gate closed"))
            .into_result()?;
        Ok(value)
    }

    assert_eq!(gate(true), Ok("through"));
    assert_eq!(gate(false).unwrap_err().into_reason(), "gate closed");
}
