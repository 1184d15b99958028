//! Loans repository

use std::sync::Arc;

use async_trait::async_trait;

use super::{store::JsonStore, LoanRepository};
use crate::{
    error::{AppError, AppResult},
    models::Loan,
};

#[derive(Clone)]
pub struct JsonLoanRepository {
    store: Arc<JsonStore>,
}

impl JsonLoanRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LoanRepository for JsonLoanRepository {
    async fn get_loan(&self, id: i32) -> AppResult<Option<Loan>> {
        self.store
            .read(|data| {
                data.loans
                    .iter()
                    .find(|l| l.id == id)
                    .map(|l| data.populate_loan(l))
            })
            .await
    }

    async fn update_loan(&self, loan: &Loan) -> AppResult<()> {
        if self.store.replace_loan(loan).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Loan with id {} not found", loan.id)))
        }
    }
}
