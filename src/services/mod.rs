//! Business logic services

pub mod catalog;
pub mod clock;
pub mod loans;
pub mod patrons;

use std::sync::Arc;

use crate::{config::LoansConfig, repository::Repository};

use self::clock::{Clock, SystemClock};

/// Construction options shared by the services
#[derive(Clone)]
pub struct ServiceOptions {
    /// Source of "now" for every business rule
    pub clock: Arc<dyn Clock>,
    /// Days added by a loan extension
    pub extend_by_days: i64,
}

impl ServiceOptions {
    pub fn from_config(loans: &LoansConfig) -> Self {
        Self {
            extend_by_days: loans.extend_by_days,
            ..Self::default()
        }
    }
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            extend_by_days: LoansConfig::default().extend_by_days,
        }
    }
}

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub loans: loans::LoanService,
    pub patrons: patrons::PatronService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: &Repository, options: ServiceOptions) -> Self {
        Self {
            catalog: catalog::CatalogService::new(Arc::new(repository.books.clone())),
            loans: loans::LoanService::new(Arc::new(repository.loans.clone()), &options),
            patrons: patrons::PatronService::new(Arc::new(repository.patrons.clone()), &options),
        }
    }
}
