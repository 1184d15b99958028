//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, patrons};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "1.0.0",
        description = "Library management REST API over flat JSON storage"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::get_book_by_title,
        books::list_book_items,
        // Patrons
        patrons::search_patrons,
        patrons::get_patron,
        patrons::renew_membership,
        // Loans
        loans::get_loan,
        loans::return_loan,
        loans::extend_loan,
    ),
    components(
        schemas(
            crate::models::Author,
            crate::models::Book,
            crate::models::BookItem,
            crate::models::Patron,
            crate::models::Loan,
            crate::models::LoanReturnStatus,
            crate::models::LoanExtensionStatus,
            crate::models::MembershipRenewalStatus,
            super::OutcomeResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog lookup"),
        (name = "patrons", description = "Patrons and membership renewal"),
        (name = "loans", description = "Loan return and extension")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
