use std::sync::Arc;

use crate::config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use spendwise_core::{
    budgets::{BudgetService, BudgetServiceTrait},
    categories::{CategoryService, CategoryServiceTrait},
    expenses::{ExpenseService, ExpenseServiceTrait},
    reports::{ReportService, ReportServiceTrait},
};
use spendwise_storage_sqlite::{
    budgets::BudgetRepository,
    categories::CategoryRepository,
    db::{self, write_actor},
    expenses::ExpenseRepository,
};

pub struct AppState {
    pub category_service: Arc<dyn CategoryServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub report_service: Arc<dyn ReportServiceTrait>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("SW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let category_repo = Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let expense_repo = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));
    let budget_repo = Arc::new(BudgetRepository::new(pool.clone(), writer));

    let category_service = Arc::new(CategoryService::new(category_repo.clone()));
    let expense_service = Arc::new(ExpenseService::new(expense_repo.clone(), category_repo));
    let budget_service = Arc::new(BudgetService::new(budget_repo));
    let report_service = Arc::new(ReportService::new(expense_repo));

    Ok(Arc::new(AppState {
        category_service,
        expense_service,
        budget_service,
        report_service,
        db_path,
    }))
}
