//! Patron membership service

use std::sync::Arc;

use chrono::Months;

use super::{clock::Clock, ServiceOptions};
use crate::{
    error::AppResult,
    models::{MembershipRenewalStatus, Patron},
    repository::PatronRepository,
};

#[derive(Clone)]
pub struct PatronService {
    patrons: Arc<dyn PatronRepository>,
    clock: Arc<dyn Clock>,
}

impl PatronService {
    pub fn new(patrons: Arc<dyn PatronRepository>, options: &ServiceOptions) -> Self {
        Self {
            patrons,
            clock: options.clock.clone(),
        }
    }

    pub async fn get_patron(&self, patron_id: i32) -> AppResult<Option<Patron>> {
        self.patrons.get_patron(patron_id).await
    }

    pub async fn search_patrons(&self, term: &str) -> AppResult<Vec<Patron>> {
        self.patrons.search_patrons(term).await
    }

    /// Extend a membership by one year.
    ///
    /// Only allowed within the last month of the current term (or after it ended), and only when
    /// the patron has no overdue outstanding loan.
    pub async fn renew_membership(&self, patron_id: i32) -> AppResult<MembershipRenewalStatus> {
        let Some(mut patron) = self.patrons.get_patron(patron_id).await? else {
            return Ok(MembershipRenewalStatus::PatronNotFound);
        };
        let now = self.clock.now();

        let window_opens = now.checked_add_months(Months::new(1)).unwrap_or(now);
        if patron.membership_end >= window_opens {
            tracing::debug!(patron_id, "Too early to renew membership");
            return Ok(MembershipRenewalStatus::TooEarlyToRenew);
        }

        if patron.loans.iter().any(|l| l.is_overdue(now)) {
            tracing::debug!(patron_id, "Overdue loan blocks membership renewal");
            return Ok(MembershipRenewalStatus::LoanNotReturned);
        }

        let Some(new_end) = patron.membership_end.checked_add_months(Months::new(12)) else {
            tracing::error!(patron_id, "Membership end out of range");
            return Ok(MembershipRenewalStatus::Error);
        };
        patron.membership_end = new_end;

        match self.patrons.update_patron(&patron).await {
            Ok(()) => {
                tracing::info!(patron_id, membership_end = %new_end, "Membership renewed");
                Ok(MembershipRenewalStatus::Success)
            }
            Err(e) => {
                tracing::error!(patron_id, error = %e, "Failed to save renewed membership");
                Ok(MembershipRenewalStatus::Error)
            }
        }
    }
}
