//! The fetched page a list view renders, and how mutations reconcile it.

use shelf_client::{Book, BookListResponse};

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub books: Vec<Book>,
    pub total: u64,
    pub total_pages: u32,
}

impl From<BookListResponse> for ListState {
    fn from(response: BookListResponse) -> Self {
        Self {
            books: response.books,
            total: response.total,
            total_pages: response.total_pages,
        }
    }
}

impl ListState {
    pub fn empty() -> Self {
        Self {
            books: Vec::new(),
            total: 0,
            total_pages: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Put a newly created book first. If the fetched page already lists it,
    /// it is moved rather than duplicated and the total is left alone.
    pub fn prepend(&mut self, book: Book) {
        let already_counted = self.take(&book.id).is_some();
        self.books.insert(0, book);
        if !already_counted {
            self.total += 1;
        }
    }

    /// Replace a book in place. Returns `false` if it is not on this page.
    pub fn patch(&mut self, book: Book) -> bool {
        match self.books.iter_mut().find(|listed| listed.id == book.id) {
            Some(slot) => {
                *slot = book;
                true
            }
            None => false,
        }
    }

    /// Drop a deleted book. Returns `false` if it is not on this page.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.take(id) {
            Some(_) => {
                self.total = self.total.saturating_sub(1);
                true
            }
            None => false,
        }
    }

    fn take(&mut self, id: &str) -> Option<Book> {
        let index = self.books.iter().position(|book| book.id == id)?;
        Some(self.books.remove(index))
    }
}
