//! Budgets module - budget periods, deadline calculation, services, and traits.

mod budgets_model;
mod budgets_service;
mod budgets_traits;


pub use budgets_model::{compute_deadline, Budget, BudgetForm, BudgetPeriod, BudgetUpdate, NewBudget};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
