//! SQLite storage implementation for expense categories.

mod model;
mod repository;

pub use model::{CategoryChangesetDB, CategoryDB, NewCategoryDB};
pub use repository::CategoryRepository;
