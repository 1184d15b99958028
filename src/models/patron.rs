//! Patron (library member) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::loan::Loan;

/// Patron as stored in `Patrons.json`.
///
/// `loans` is filled only when the patron is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Patron {
    pub id: i32,
    pub name: String,
    pub membership_start: DateTime<Utc>,
    pub membership_end: DateTime<Utc>,
    pub image_name: String,
    #[serde(skip_deserializing)]
    pub loans: Vec<Loan>,
}

impl Patron {
    pub fn is_membership_expired(&self, now: DateTime<Utc>) -> bool {
        self.membership_end < now
    }

    /// Copy without the loan list
    pub fn flattened(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            membership_start: self.membership_start,
            membership_end: self.membership_end,
            image_name: self.image_name.clone(),
            loans: Vec::new(),
        }
    }
}
