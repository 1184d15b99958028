//! JSON-backed store for the five library collections
//!
//! The store owns the in-memory collections and is the only place that knows how entities relate
//! to each other. Collections are read from disk once, on the first call that needs them, and then
//! held for the lifetime of the process. Reads hand out populated copies; writes narrow entities
//! back to their persisted fields before they reach memory or disk.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    config::JsonPaths,
    error::{AppError, AppResult},
    models::{Author, Book, BookItem, Loan, Patron},
};

/// The five flat collections, as read from storage
#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub(crate) authors: Vec<Author>,
    pub(crate) books: Vec<Book>,
    pub(crate) book_items: Vec<BookItem>,
    pub(crate) patrons: Vec<Patron>,
    pub(crate) loans: Vec<Loan>,
}

impl Collections {
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book_items(&self) -> &[BookItem] {
        &self.book_items
    }

    pub fn patrons(&self) -> &[Patron] {
        &self.patrons
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    /// Copy of `b` with its author resolved by `author_id`
    pub fn populate_book(&self, b: &Book) -> Book {
        let mut populated = b.clone();
        populated.author = self.authors.iter().find(|a| a.id == b.author_id).cloned();
        populated
    }

    /// Copy of `bi` with its book (and that book's author) resolved
    pub fn populate_book_item(&self, bi: &BookItem) -> BookItem {
        let mut populated = bi.clone();
        populated.book = self
            .books
            .iter()
            .find(|b| b.id == bi.book_id)
            .map(|b| self.populate_book(b));
        populated
    }

    /// Copy of `l` with its book item resolved recursively.
    ///
    /// The patron is attached as stored, without its own loans, so a populated loan never expands
    /// back into the patron's loan list.
    pub fn populate_loan(&self, l: &Loan) -> Loan {
        let mut populated = l.flattened();
        populated.book_item = self
            .book_items
            .iter()
            .find(|bi| bi.id == l.book_item_id)
            .map(|bi| self.populate_book_item(bi));
        populated.patron = self
            .patrons
            .iter()
            .find(|p| p.id == l.patron_id)
            .map(Patron::flattened);
        populated
    }

    /// Copy of `p` carrying every loan whose `patron_id` is `p.id`, each populated
    pub fn populate_patron(&self, p: &Patron) -> Patron {
        let mut populated = p.flattened();
        populated.loans = self
            .loans
            .iter()
            .filter(|l| l.patron_id == p.id)
            .map(|l| self.populate_loan(l))
            .collect();
        populated
    }

    pub fn populate_patrons<'a>(
        &self,
        patrons: impl IntoIterator<Item = &'a Patron>,
    ) -> Vec<Patron> {
        patrons.into_iter().map(|p| self.populate_patron(p)).collect()
    }
}

/// Persisted subset of a loan
#[derive(Serialize)]
struct LoanRecord {
    id: i32,
    book_item_id: i32,
    patron_id: i32,
    loan_date: DateTime<Utc>,
    due_date: DateTime<Utc>,
    return_date: Option<DateTime<Utc>>,
}

impl From<&Loan> for LoanRecord {
    fn from(l: &Loan) -> Self {
        Self {
            id: l.id,
            book_item_id: l.book_item_id,
            patron_id: l.patron_id,
            loan_date: l.loan_date,
            due_date: l.due_date,
            return_date: l.return_date,
        }
    }
}

/// Persisted subset of a patron
#[derive(Serialize)]
struct PatronRecord {
    id: i32,
    name: String,
    membership_start: DateTime<Utc>,
    membership_end: DateTime<Utc>,
    image_name: String,
}

impl From<&Patron> for PatronRecord {
    fn from(p: &Patron) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            membership_start: p.membership_start,
            membership_end: p.membership_end,
            image_name: p.image_name.clone(),
        }
    }
}

pub struct JsonStore {
    paths: JsonPaths,
    load_gate: Mutex<()>,
    save_gate: Mutex<()>,
    data: OnceCell<RwLock<Collections>>,
    loads: AtomicUsize,
}

impl JsonStore {
    pub fn new(paths: JsonPaths) -> Self {
        Self {
            paths,
            load_gate: Mutex::new(()),
            save_gate: Mutex::new(()),
            data: OnceCell::new(),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn paths(&self) -> &JsonPaths {
        &self.paths
    }

    pub fn is_loaded(&self) -> bool {
        self.data.get().is_some()
    }

    /// Number of physical loads performed through `ensure_loaded`
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Load all collections unless already loaded.
    ///
    /// Concurrent first callers queue on the load gate; only the first one reads the files.
    pub async fn ensure_loaded(&self) -> AppResult<()> {
        if self.data.get().is_some() {
            return Ok(());
        }

        let _gate = self.load_gate.lock().await;
        if self.data.get().is_none() {
            let collections = self.load_all().await?;
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.data.set(RwLock::new(collections)).is_err() {
                return Err(AppError::Internal("store loaded twice".to_string()));
            }
        }
        Ok(())
    }

    /// Read every document from disk, in the order authors, books, book items, patrons, loans.
    ///
    /// Always hits the files; does not touch the loaded state.
    pub async fn load_all(&self) -> AppResult<Collections> {
        Ok(Collections {
            authors: load_json(&self.paths.authors).await?,
            books: load_json(&self.paths.books).await?,
            book_items: load_json(&self.paths.book_items).await?,
            patrons: load_json(&self.paths.patrons).await?,
            loans: load_json(&self.paths.loans).await?,
        })
    }

    /// Run `f` against the loaded collections, loading them first if needed
    pub async fn read<R>(&self, f: impl FnOnce(&Collections) -> R) -> AppResult<R> {
        let lock = self.loaded().await?;
        let data = lock
            .read()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))?;
        Ok(f(&data))
    }

    /// Run `f` with mutable access to the loaded collections, loading them first if needed.
    ///
    /// Nothing is saved; callers that persist go through the save gate.
    pub(crate) async fn write<R>(&self, f: impl FnOnce(&mut Collections) -> R) -> AppResult<R> {
        let lock = self.loaded().await?;
        let mut data = lock
            .write()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))?;
        Ok(f(&mut data))
    }

    async fn loaded(&self) -> AppResult<&RwLock<Collections>> {
        self.ensure_loaded().await?;
        self.data
            .get()
            .ok_or_else(|| AppError::Internal("store not loaded".to_string()))
    }

    /// Swap in `loan` for the stored loan with the same id and rewrite the loans document.
    ///
    /// Returns `false` when no loan has that id. The in-memory change and the file write happen
    /// under the save gate, so documents land on disk in the order the changes were made.
    pub(crate) async fn replace_loan(&self, loan: &Loan) -> AppResult<bool> {
        let _saving = self.save_gate.lock().await;
        let loans = self
            .write(|data| {
                let slot = data.loans.iter_mut().find(|l| l.id == loan.id)?;
                *slot = loan.flattened();
                Some(data.loans.clone())
            })
            .await?;

        match loans {
            Some(loans) => {
                self.write_loans(&loans).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Swap in `patron` for the stored patron with the same id and rewrite the patrons document.
    ///
    /// Returns `false` when no patron has that id.
    pub(crate) async fn replace_patron(&self, patron: &Patron) -> AppResult<bool> {
        let _saving = self.save_gate.lock().await;
        let patrons = self
            .write(|data| {
                let slot = data.patrons.iter_mut().find(|p| p.id == patron.id)?;
                *slot = patron.flattened();
                Some(data.patrons.clone())
            })
            .await?;

        match patrons {
            Some(patrons) => {
                self.write_patrons(&patrons).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Overwrite the loans document with the persisted fields of `loans`
    pub async fn save_loans(&self, loans: &[Loan]) -> AppResult<()> {
        let _saving = self.save_gate.lock().await;
        self.write_loans(loans).await
    }

    /// Overwrite the patrons document with the persisted fields of `patrons`
    pub async fn save_patrons(&self, patrons: &[Patron]) -> AppResult<()> {
        let _saving = self.save_gate.lock().await;
        self.write_patrons(patrons).await
    }

    async fn write_loans(&self, loans: &[Loan]) -> AppResult<()> {
        let records: Vec<LoanRecord> = loans.iter().map(LoanRecord::from).collect();
        save_json(&self.paths.loans, &records).await
    }

    async fn write_patrons(&self, patrons: &[Patron]) -> AppResult<()> {
        let records: Vec<PatronRecord> = patrons.iter().map(PatronRecord::from).collect();
        save_json(&self.paths.patrons, &records).await
    }
}

async fn load_json<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::storage(path, e))?;
    let records: Vec<T> = serde_json::from_slice(&bytes).map_err(|e| AppError::parse(path, e))?;
    tracing::debug!(path = %path.display(), count = records.len(), "Loaded JSON collection");
    Ok(records)
}

async fn save_json<T: Serialize>(path: &Path, records: &[T]) -> AppResult<()> {
    let bytes = serde_json::to_vec_pretty(records).map_err(|e| AppError::parse(path, e))?;

    // Atomic write: readers see either the old document or the new one
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp_file = path.with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));
    tokio::fs::write(&tmp_file, bytes)
        .await
        .map_err(|e| AppError::storage(&tmp_file, e))?;
    if let Err(e) = tokio::fs::rename(&tmp_file, path).await {
        let _ = tokio::fs::remove_file(&tmp_file).await;
        return Err(AppError::storage(path, e));
    }
    tracing::debug!(path = %path.display(), count = records.len(), "Saved JSON collection");
    Ok(())
}
