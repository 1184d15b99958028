//! Outcome codes of the loan and membership operations

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// LoanReturnStatus
// ---------------------------------------------------------------------------

/// Outcome of returning a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LoanReturnStatus {
    Success,
    LoanNotFound,
    AlreadyReturned,
    Error,
}

impl std::fmt::Display for LoanReturnStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LoanReturnStatus::Success => "Book was successfully returned.",
            LoanReturnStatus::LoanNotFound => "Loan not found.",
            LoanReturnStatus::AlreadyReturned => "Book was already returned.",
            LoanReturnStatus::Error => "Error returning book.",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// LoanExtensionStatus
// ---------------------------------------------------------------------------

/// Outcome of extending a loan's due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LoanExtensionStatus {
    Success,
    LoanNotFound,
    MembershipExpired,
    LoanReturned,
    LoanExpired,
    Error,
}

impl std::fmt::Display for LoanExtensionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LoanExtensionStatus::Success => "Book loan extension was successful.",
            LoanExtensionStatus::LoanNotFound => "Loan not found.",
            LoanExtensionStatus::MembershipExpired => {
                "Cannot extend book loan as patron's membership has expired."
            }
            LoanExtensionStatus::LoanReturned => {
                "Cannot extend book loan as the book is already returned."
            }
            LoanExtensionStatus::LoanExpired => {
                "Cannot extend book loan as it already has expired."
            }
            LoanExtensionStatus::Error => "Cannot extend book loan due to an error.",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MembershipRenewalStatus
// ---------------------------------------------------------------------------

/// Outcome of renewing a patron's membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MembershipRenewalStatus {
    Success,
    PatronNotFound,
    TooEarlyToRenew,
    LoanNotReturned,
    Error,
}

impl std::fmt::Display for MembershipRenewalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MembershipRenewalStatus::Success => "Membership renewal was successful.",
            MembershipRenewalStatus::PatronNotFound => "Patron not found.",
            MembershipRenewalStatus::TooEarlyToRenew => {
                "It is too early to renew the membership."
            }
            MembershipRenewalStatus::LoanNotReturned => {
                "Cannot renew membership due to an outstanding loan."
            }
            MembershipRenewalStatus::Error => "Cannot renew membership due to an error.",
        };
        write!(f, "{}", label)
    }
}
