//! Data models for the library

pub mod author;
pub mod book;
pub mod book_item;
pub mod loan;
pub mod patron;
pub mod status;

// Re-export commonly used types
pub use author::Author;
pub use book::Book;
pub use book_item::BookItem;
pub use loan::Loan;
pub use patron::Patron;
pub use status::{LoanExtensionStatus, LoanReturnStatus, MembershipRenewalStatus};
