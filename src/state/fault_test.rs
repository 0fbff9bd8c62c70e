use super::*;

#[test]
fn starts_ok_with_no_message() {
    let fault = FaultState::default();
    assert_eq!(fault, FaultState::Ok);
    assert_eq!(fault.message(), None);
}

#[test]
fn trip_captures_the_error() {
    let mut fault = FaultState::default();
    fault.trip("boom".to_owned());
    assert_eq!(fault.message(), Some("boom"));
}

#[test]
fn errored_is_terminal_first_error_wins() {
    let mut fault = FaultState::default();
    fault.trip("first".to_owned());
    fault.trip("second".to_owned());
    assert_eq!(fault.message(), Some("first"));
}
