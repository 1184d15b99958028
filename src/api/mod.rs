//! API handlers for the library REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod patrons;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{
    models::{LoanExtensionStatus, LoanReturnStatus, MembershipRenewalStatus},
    AppState,
};

/// Body returned by state-changing operations
#[derive(Serialize, ToSchema)]
pub struct OutcomeResponse {
    /// Outcome code, e.g. `Success` or `AlreadyReturned`
    pub status: String,
    /// Human readable explanation
    pub message: String,
}

/// Operation outcome that can be reported over HTTP
pub trait Outcome: std::fmt::Debug + std::fmt::Display {
    fn http_status(&self) -> StatusCode;
}

impl Outcome for LoanReturnStatus {
    fn http_status(&self) -> StatusCode {
        match self {
            LoanReturnStatus::Success => StatusCode::OK,
            LoanReturnStatus::LoanNotFound => StatusCode::NOT_FOUND,
            LoanReturnStatus::AlreadyReturned => StatusCode::CONFLICT,
            LoanReturnStatus::Error => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Outcome for LoanExtensionStatus {
    fn http_status(&self) -> StatusCode {
        match self {
            LoanExtensionStatus::Success => StatusCode::OK,
            LoanExtensionStatus::LoanNotFound => StatusCode::NOT_FOUND,
            LoanExtensionStatus::MembershipExpired
            | LoanExtensionStatus::LoanReturned
            | LoanExtensionStatus::LoanExpired => StatusCode::CONFLICT,
            LoanExtensionStatus::Error => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Outcome for MembershipRenewalStatus {
    fn http_status(&self) -> StatusCode {
        match self {
            MembershipRenewalStatus::Success => StatusCode::OK,
            MembershipRenewalStatus::PatronNotFound => StatusCode::NOT_FOUND,
            MembershipRenewalStatus::TooEarlyToRenew | MembershipRenewalStatus::LoanNotReturned => {
                StatusCode::CONFLICT
            }
            MembershipRenewalStatus::Error => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub(crate) fn outcome_response<O: Outcome>(outcome: O) -> (StatusCode, Json<OutcomeResponse>) {
    (
        outcome.http_status(),
        Json(OutcomeResponse {
            status: format!("{:?}", outcome),
            message: outcome.to_string(),
        }),
    )
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Catalog
        .route("/books", get(books::get_book_by_title))
        .route("/books/:id/items", get(books::list_book_items))
        // Patrons
        .route("/patrons", get(patrons::search_patrons))
        .route("/patrons/:id", get(patrons::get_patron))
        .route("/patrons/:id/renew", post(patrons::renew_membership))
        // Loans
        .route("/loans/:id", get(loans::get_loan))
        .route("/loans/:id/return", post(loans::return_loan))
        .route("/loans/:id/extend", post(loans::extend_loan))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
