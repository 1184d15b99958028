//! Loan management service

use std::sync::Arc;

use chrono::Duration;

use super::{clock::Clock, ServiceOptions};
use crate::{
    error::AppResult,
    models::{Loan, LoanExtensionStatus, LoanReturnStatus},
    repository::LoanRepository,
};

#[derive(Clone)]
pub struct LoanService {
    loans: Arc<dyn LoanRepository>,
    clock: Arc<dyn Clock>,
    /// `None` when the configured period is not a positive, representable number of days
    extend_by: Option<Duration>,
}

impl LoanService {
    pub fn new(loans: Arc<dyn LoanRepository>, options: &ServiceOptions) -> Self {
        Self {
            loans,
            clock: options.clock.clone(),
            extend_by: Duration::try_days(options.extend_by_days)
                .filter(|period| *period > Duration::zero()),
        }
    }

    /// Get a populated loan
    pub async fn get_loan(&self, loan_id: i32) -> AppResult<Option<Loan>> {
        self.loans.get_loan(loan_id).await
    }

    /// Mark an outstanding loan as returned now
    pub async fn return_loan(&self, loan_id: i32) -> AppResult<LoanReturnStatus> {
        let Some(mut loan) = self.loans.get_loan(loan_id).await? else {
            return Ok(LoanReturnStatus::LoanNotFound);
        };

        if loan.return_date.is_some() {
            tracing::debug!(loan_id, "Loan already returned");
            return Ok(LoanReturnStatus::AlreadyReturned);
        }

        loan.return_date = Some(self.clock.now());
        match self.loans.update_loan(&loan).await {
            Ok(()) => {
                tracing::info!(loan_id, "Loan returned");
                Ok(LoanReturnStatus::Success)
            }
            Err(e) => {
                tracing::error!(loan_id, error = %e, "Failed to save returned loan");
                Ok(LoanReturnStatus::Error)
            }
        }
    }

    /// Push the due date of an outstanding loan forward by the extension period.
    ///
    /// Checks run in a fixed order: membership, then returned, then overdue.
    pub async fn extend_loan(&self, loan_id: i32) -> AppResult<LoanExtensionStatus> {
        let Some(mut loan) = self.loans.get_loan(loan_id).await? else {
            return Ok(LoanExtensionStatus::LoanNotFound);
        };
        let now = self.clock.now();

        // A loan without a known patron has no valid membership to extend under
        let membership_valid = loan
            .patron
            .as_ref()
            .is_some_and(|p| !p.is_membership_expired(now));
        if !membership_valid {
            tracing::debug!(loan_id, "Membership expired, extension refused");
            return Ok(LoanExtensionStatus::MembershipExpired);
        }

        if loan.return_date.is_some() {
            return Ok(LoanExtensionStatus::LoanReturned);
        }

        if loan.due_date < now {
            return Ok(LoanExtensionStatus::LoanExpired);
        }

        let Some(due_date) = self
            .extend_by
            .and_then(|period| loan.due_date.checked_add_signed(period))
        else {
            tracing::error!(loan_id, "Loan extension period out of range");
            return Ok(LoanExtensionStatus::Error);
        };
        loan.due_date = due_date;
        match self.loans.update_loan(&loan).await {
            Ok(()) => {
                tracing::info!(loan_id, due_date = %loan.due_date, "Loan extended");
                Ok(LoanExtensionStatus::Success)
            }
            Err(e) => {
                tracing::error!(loan_id, error = %e, "Failed to save extended loan");
                Ok(LoanExtensionStatus::Error)
            }
        }
    }
}
