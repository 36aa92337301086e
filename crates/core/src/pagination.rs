//! Fixed-size paging for list views.
//!
//! Page selection is lenient: a missing or malformed page number falls back to
//! the first page, while a number below 1 or past the end resolves to the last
//! page. An empty collection still has exactly one (empty) page.

use serde::{Deserialize, Serialize};

use crate::constants::PAGE_SIZE;
use crate::errors::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    count: i64,
    per_page: i64,
}

impl Paginator {
    pub fn new(count: i64, per_page: i64) -> Self {
        Paginator {
            count: count.max(0),
            per_page: per_page.max(1),
        }
    }

    pub fn with_default_size(count: i64) -> Self {
        Self::new(count, PAGE_SIZE)
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn per_page(&self) -> i64 {
        self.per_page
    }

    pub fn num_pages(&self) -> i64 {
        if self.count == 0 {
            1
        } else {
            (self.count + self.per_page - 1) / self.per_page
        }
    }

    /// Resolves a raw page parameter to a valid 1-based page number.
    pub fn resolve(&self, requested: Option<&str>) -> i64 {
        match requested.and_then(|raw| raw.trim().parse::<i64>().ok()) {
            None => 1,
            Some(number) if number < 1 => self.num_pages(),
            Some(number) => number.min(self.num_pages()),
        }
    }

    /// Row offset of the first item on `number`.
    pub fn offset(&self, number: i64) -> i64 {
        (number - 1) * self.per_page
    }

    pub fn page<T>(&self, number: i64, object_list: Vec<T>) -> Page<T> {
        let num_pages = self.num_pages();
        Page {
            object_list,
            number,
            num_pages,
            count: self.count,
            per_page: self.per_page,
            has_next: number < num_pages,
            has_previous: number > 1,
        }
    }

    /// Counts, resolves and loads one page in a single call.
    ///
    /// `load` receives `(offset, limit)` and should return the rows of that
    /// window in the collection's default ordering.
    pub fn paginate<T, C, L>(requested: Option<&str>, count: C, load: L) -> Result<Page<T>>
    where
        C: FnOnce() -> Result<i64>,
        L: FnOnce(i64, i64) -> Result<Vec<T>>,
    {
        let paginator = Paginator::with_default_size(count()?);
        let number = paginator.resolve(requested);
        let rows = load(paginator.offset(number), paginator.per_page())?;
        Ok(paginator.page(number, rows))
    }
}

/// One page of a list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub object_list: Vec<T>,
    pub number: i64,
    pub num_pages: i64,
    pub count: i64,
    pub per_page: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn next_page_number(&self) -> Option<i64> {
        self.has_next.then_some(self.number + 1)
    }

    pub fn previous_page_number(&self) -> Option<i64> {
        self.has_previous.then_some(self.number - 1)
    }
}
