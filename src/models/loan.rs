//! Loan (borrow) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::book_item::BookItem;
use super::patron::Patron;

/// Loan as stored in `Loans.json`.
///
/// A loan is outstanding while `return_date` is `None`. On a populated loan, `book_item` is
/// resolved recursively and `patron` carries only the patron's own fields (its `loans` stay empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Loan {
    pub id: i32,
    pub book_item_id: i32,
    pub patron_id: i32,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    #[serde(skip_deserializing)]
    pub book_item: Option<BookItem>,
    #[serde(skip_deserializing)]
    pub patron: Option<Patron>,
}

impl Loan {
    pub fn is_outstanding(&self) -> bool {
        self.return_date.is_none()
    }

    /// Outstanding and past its due date
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.is_outstanding() && self.due_date < now
    }

    /// Copy with every populated relation dropped
    pub fn flattened(&self) -> Self {
        Self {
            id: self.id,
            book_item_id: self.book_item_id,
            patron_id: self.patron_id,
            loan_date: self.loan_date,
            due_date: self.due_date,
            return_date: self.return_date,
            book_item: None,
            patron: None,
        }
    }
}
