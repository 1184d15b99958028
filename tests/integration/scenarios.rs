//! End-to-end loan and membership scenarios against the JSON documents

use axum::http::StatusCode;
use chrono::{DateTime, Months, Utc};
use serde_json::Value;

use crate::common::{days, TestLibrary};

fn as_date(value: &Value) -> DateTime<Utc> {
    serde_json::from_value(value.clone()).unwrap()
}

#[tokio::test]
async fn test_extend_outstanding_loan_by_fourteen_days() {
    let library = TestLibrary::new();

    let (status, body) = library.post("/api/v1/loans/1/extend").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Success");
    let stored = library.find_on_disk(&library.paths.loans, 1);
    assert_eq!(as_date(&stored["due_date"]), days(19));

    let (_, loan) = library.get("/api/v1/loans/1").await;
    assert_eq!(as_date(&loan["due_date"]), days(19));
}

#[tokio::test]
async fn test_return_already_returned_loan_keeps_return_date() {
    let library = TestLibrary::new();
    let before = library.find_on_disk(&library.paths.loans, 2);

    let (status, body) = library.post("/api/v1/loans/2/return").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "AlreadyReturned");
    let (_, loan) = library.get("/api/v1/loans/2").await;
    assert_eq!(as_date(&loan["return_date"]), days(-1));
    assert_eq!(library.find_on_disk(&library.paths.loans, 2), before);
}

#[tokio::test]
async fn test_extend_returned_loan() {
    let library = TestLibrary::new();

    let (status, body) = library.post("/api/v1/loans/2/extend").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "LoanReturned");
}

#[tokio::test]
async fn test_renew_too_early_leaves_membership_unchanged() {
    let library = TestLibrary::new();

    let (status, body) = library.post("/api/v1/patrons/2/renew").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "TooEarlyToRenew");
    let (_, patron) = library.get("/api/v1/patrons/2").await;
    assert_eq!(as_date(&patron["membership_end"]), days(40));
}

#[tokio::test]
async fn test_renew_blocked_by_overdue_loan() {
    let library = TestLibrary::new();

    let (status, body) = library.post("/api/v1/patrons/3/renew").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "LoanNotReturned");
}

#[tokio::test]
async fn test_renew_within_last_month_adds_a_year() {
    let library = TestLibrary::new();

    let (status, body) = library.post("/api/v1/patrons/4/renew").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Success");
    let expected = days(10).checked_add_months(Months::new(12)).unwrap();
    let stored = library.find_on_disk(&library.paths.patrons, 4);
    assert_eq!(as_date(&stored["membership_end"]), expected);
    assert!(stored.get("loans").is_none());
    assert_eq!(library.read_document(&library.paths.patrons).len(), 5);
}

#[tokio::test]
async fn test_renew_unknown_patron() {
    let library = TestLibrary::new();

    let (status, body) = library.post("/api/v1/patrons/404/renew").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "PatronNotFound");
}

#[tokio::test]
async fn test_search_patrons_by_substring_sorted_by_name() {
    let library = TestLibrary::new();

    let (status, body) = library.get("/api/v1/patrons?search=ana").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ana Smith", "Juan Ana"]);
}

#[tokio::test]
async fn test_updates_keep_other_loans_intact() {
    let library = TestLibrary::new();

    library.post("/api/v1/loans/1/extend").await;
    library.post("/api/v1/loans/5/return").await;

    let loans = library.read_document(&library.paths.loans);
    assert_eq!(loans.len(), 6);
    assert_eq!(as_date(&loans[0]["due_date"]), days(19));
    assert!(!loans[4]["return_date"].is_null());
    assert!(loans[2]["return_date"].is_null());
    assert!(loans.iter().all(|l| l.get("book_item").is_none() && l.get("patron").is_none()));
}
