use super::*;
use crate::net::types::Role;

fn identity(verified: bool) -> Identity {
    Identity {
        id: "u1".to_owned(),
        name: "Amit Kumar".to_owned(),
        email: "amit@college.edu".to_owned(),
        role: Role::Student,
        verified,
    }
}

#[test]
fn parse_flag_accepts_only_true() {
    assert!(parse_flag(Some("true")));
    assert!(!parse_flag(Some("false")));
    assert!(!parse_flag(Some("1")));
    assert!(!parse_flag(None));
}

#[test]
fn banner_shown_for_unverified_until_dismissed() {
    assert!(should_show(Some(&identity(false)), false));
    assert!(!should_show(Some(&identity(false)), true));
}

#[test]
fn banner_hidden_for_verified_or_signed_out() {
    assert!(!should_show(Some(&identity(true)), false));
    assert!(!should_show(None, false));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn flag_reads_false_outside_browser() {
    dismiss();
    assert!(!is_dismissed());
}
