use super::*;
use crate::net::types::Role;

fn user(name: &str, email: &str) -> UserRecord {
    UserRecord {
        id: email.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        role: Role::Student,
        is_verified: true,
        created_at: None,
    }
}

fn sample() -> Vec<UserRecord> {
    vec![user("Amit Kumar", "amit@college.edu"), user("Priya Patel", "priya@college.edu")]
}

#[test]
fn empty_filter_keeps_everyone() {
    assert_eq!(filter_users(sample(), "  ").len(), 2);
}

#[test]
fn filter_matches_name_case_insensitively() {
    let names: Vec<String> = filter_users(sample(), "PRIYA").into_iter().map(|u| u.name).collect();
    assert_eq!(names, ["Priya Patel"]);
}

#[test]
fn filter_matches_email() {
    assert_eq!(filter_users(sample(), "amit@").len(), 1);
    assert!(filter_users(sample(), "nobody").is_empty());
}
