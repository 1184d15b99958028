//! API integration tests

use axum::http::StatusCode;

use crate::common::TestLibrary;

#[tokio::test]
async fn test_health_check() {
    let library = TestLibrary::new();

    let (status, body) = library.get("/api/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_loads_store() {
    let library = TestLibrary::new();
    assert!(!library.state.store.is_loaded());

    let (status, body) = library.get("/api/v1/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert!(library.state.store.is_loaded());
}

#[tokio::test]
async fn test_readiness_fails_on_missing_document() {
    let library = TestLibrary::new();
    std::fs::remove_file(&library.paths.authors).unwrap();

    let (status, body) = library.get("/api/v1/ready").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "StorageFailure");
}

#[tokio::test]
async fn test_get_book_by_title_ignores_case() {
    let library = TestLibrary::new();

    let (status, body) = library.get("/api/v1/books?title=the%20DISPOSSESSED").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["author"]["name"], "Ursula K. Le Guin");
}

#[tokio::test]
async fn test_get_book_by_title_requires_exact_title() {
    let library = TestLibrary::new();

    let (status, _) = library.get("/api/v1/books?title=Dispossessed").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_book_items_are_populated() {
    let library = TestLibrary::new();

    let (status, body) = library.get("/api/v1/books/1/items").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i["book"]["title"] == "The Dispossessed"));
    assert!(items.iter().all(|i| i["book"]["author"]["id"] == 1));
}

#[tokio::test]
async fn test_get_patron_with_loans() {
    let library = TestLibrary::new();

    let (status, body) = library.get("/api/v1/patrons/1").await;

    assert_eq!(status, StatusCode::OK);
    let mut loan_ids: Vec<i64> = body["loans"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_i64().unwrap())
        .collect();
    loan_ids.sort();
    assert_eq!(loan_ids, vec![1, 2, 5]);
    // The patron attached to each loan does not repeat the loan list
    assert!(body["loans"][0]["patron"]["loans"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_unknown_patron() {
    let library = TestLibrary::new();

    let (status, body) = library.get("/api/v1/patrons/-999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchData");
}

#[tokio::test]
async fn test_get_loan_is_populated() {
    let library = TestLibrary::new();

    let (status, body) = library.get("/api/v1/loans/3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["book_item"]["book"]["title"], "Kindred");
    assert_eq!(body["book_item"]["book"]["author"]["name"], "Octavia E. Butler");
    assert_eq!(body["patron"]["name"], "Bob Stone");
}

#[tokio::test]
async fn test_return_unknown_loan() {
    let library = TestLibrary::new();

    let (status, body) = library.post("/api/v1/loans/999/return").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "LoanNotFound");
}

#[tokio::test]
async fn test_return_loan_persists_return_date() {
    let library = TestLibrary::new();

    let (status, body) = library.post("/api/v1/loans/5/return").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Success");
    let stored = library.find_on_disk(&library.paths.loans, 5);
    assert!(!stored["return_date"].is_null());

    let (status, body) = library.post("/api/v1/loans/5/return").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "AlreadyReturned");
}

#[tokio::test]
async fn test_extend_with_expired_membership() {
    let library = TestLibrary::new();

    let (status, body) = library.post("/api/v1/loans/4/extend").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "MembershipExpired");
}

#[tokio::test]
async fn test_extend_overdue_loan() {
    let library = TestLibrary::new();

    let (status, body) = library.post("/api/v1/loans/3/extend").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "LoanExpired");
}

#[tokio::test]
async fn test_save_failure_reports_error_outcome() {
    let library = TestLibrary::new();
    // Load first, then make the loans document unwritable by replacing it with a directory
    library.get("/api/v1/ready").await;
    std::fs::remove_file(&library.paths.loans).unwrap();
    std::fs::create_dir(&library.paths.loans).unwrap();

    let (status, body) = library.post("/api/v1/loans/1/extend").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "Error");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let library = TestLibrary::new();

    let (status, body) = library.get("/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/loans/{id}/return"].is_object());
}
