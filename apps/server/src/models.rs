//! Wire types of the HTTP API. They mirror the core models and carry the
//! OpenAPI schema derives.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use spendwise_core::budgets as core_budgets;
use spendwise_core::categories as core_categories;
use spendwise_core::expenses as core_expenses;
use spendwise_core::pagination::Page;
use spendwise_core::reports as core_reports;
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl From<core_categories::Category> for Category {
    fn from(c: core_categories::Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i32,
    pub category: Option<i32>,
    pub amount: i32,
    pub notes: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl From<core_expenses::Expense> for Expense {
    fn from(e: core_expenses::Expense) -> Self {
        Self {
            id: e.id,
            category: e.category_id,
            amount: e.amount,
            notes: e.notes,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i32,
    /// Period length in days: "1", "7" or "30".
    pub budget_for: String,
    /// DAY, WEEK or MONTH.
    pub budget_for_display: String,
    pub created_at: NaiveDate,
    pub deadline: NaiveDate,
}

impl From<core_budgets::Budget> for Budget {
    fn from(b: core_budgets::Budget) -> Self {
        Self {
            id: b.id,
            budget_for: b.budget_for.as_str().to_string(),
            budget_for_display: b.budget_for.label().to_string(),
            created_at: b.created_at,
            deadline: b.deadline,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub total_amount: i64,
    pub transaction_count: i64,
}

impl From<core_reports::Report> for Report {
    fn from(r: core_reports::Report) -> Self {
        Self {
            total_amount: r.total_amount,
            transaction_count: r.transaction_count,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PeriodReports {
    pub day: Report,
    pub week: Report,
    pub month: Report,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub today: NaiveDate,
    pub reports: PeriodReports,
}

impl From<core_reports::Dashboard> for Dashboard {
    fn from(d: core_reports::Dashboard) -> Self {
        Self {
            today: d.today,
            reports: PeriodReports {
                day: d.reports.day.into(),
                week: d.reports.week.into(),
                month: d.reports.month.into(),
            },
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl From<core_reports::DateRange> for DateRange {
    fn from(r: core_reports::DateRange) -> Self {
        Self {
            start: r.start,
            end: r.end,
        }
    }
}

// ---- Forms ----

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CategoryForm {
    pub name: Option<String>,
}

impl From<CategoryForm> for core_categories::CategoryForm {
    fn from(f: CategoryForm) -> Self {
        Self { name: f.name }
    }
}

/// Expense entry. Values of the wrong type come back as field errors.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseForm {
    #[schema(value_type = Option<i32>)]
    pub category: Option<Value>,
    #[schema(value_type = Option<i64>)]
    pub amount: Option<Value>,
    pub notes: Option<String>,
}

impl From<ExpenseForm> for core_expenses::ExpenseForm {
    fn from(f: ExpenseForm) -> Self {
        Self {
            category: f.category,
            amount: f.amount,
            notes: f.notes,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreviousExpenseForm {
    #[schema(value_type = Option<i32>)]
    pub category: Option<Value>,
    #[schema(value_type = Option<i64>)]
    pub amount: Option<Value>,
    pub notes: Option<String>,
    /// YYYY-MM-DD
    #[schema(value_type = Option<String>)]
    pub created_at: Option<Value>,
}

impl From<PreviousExpenseForm> for core_expenses::PreviousExpenseForm {
    fn from(f: PreviousExpenseForm) -> Self {
        Self {
            expense: core_expenses::ExpenseForm {
                category: f.category,
                amount: f.amount,
                notes: f.notes,
            },
            created_at: f.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetForm {
    /// "1", "7" or "30".
    pub budget_for: Option<String>,
}

impl From<BudgetForm> for core_budgets::BudgetForm {
    fn from(f: BudgetForm) -> Self {
        Self {
            budget_for: f.budget_for,
        }
    }
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number; invalid values fall back to the first page.
    pub page: Option<String>,
}

// ---- Pages and contexts ----

macro_rules! page_schema {
    ($name:ident, $item:ty, $core:ty) => {
        #[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            pub object_list: Vec<$item>,
            pub number: i64,
            pub num_pages: i64,
            pub count: i64,
            pub per_page: i64,
            pub has_next: bool,
            pub has_previous: bool,
            pub next_page_number: Option<i64>,
            pub previous_page_number: Option<i64>,
        }

        impl From<Page<$core>> for $name {
            fn from(page: Page<$core>) -> Self {
                let next_page_number = page.next_page_number();
                let previous_page_number = page.previous_page_number();
                Self {
                    object_list: page.object_list.into_iter().map(<$item>::from).collect(),
                    number: page.number,
                    num_pages: page.num_pages,
                    count: page.count,
                    per_page: page.per_page,
                    has_next: page.has_next,
                    has_previous: page.has_previous,
                    next_page_number,
                    previous_page_number,
                }
            }
        }
    };
}

page_schema!(CategoryPage, Category, core_categories::Category);
page_schema!(ExpensePage, Expense, core_expenses::Expense);
page_schema!(BudgetPage, Budget, core_budgets::Budget);

/// Context of the expense entry pages: today's expenses and their total.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseContext {
    pub page_obj: ExpensePage,
    pub page_name: String,
    pub report: Report,
    pub is_expense: bool,
    pub is_previous: bool,
    pub object: Option<Expense>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryContext {
    pub page_obj: CategoryPage,
    pub page_name: String,
    pub is_category_expense: bool,
    pub object: Option<Category>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetContext {
    pub page_obj: BudgetPage,
    pub page_name: String,
    pub is_budget_expense: bool,
    pub object: Option<Budget>,
}

/// Deletion outcome; `expensesDeleted` counts the cascaded expenses.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDeletion {
    pub category_id: i32,
    pub expenses_deleted: usize,
}

impl From<core_categories::CategoryDeletion> for CategoryDeletion {
    fn from(d: core_categories::CategoryDeletion) -> Self {
        Self {
            category_id: d.category_id,
            expenses_deleted: d.expenses_deleted,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveContext {
    pub object_list: Vec<Expense>,
    pub report: Report,
    pub page_name: String,
    pub is_day: bool,
    pub is_week: bool,
    pub is_month: bool,
    pub period: DateRange,
}

impl From<core_reports::Archive> for ArchiveContext {
    fn from(archive: core_reports::Archive) -> Self {
        let kind = archive.kind;
        Self {
            object_list: archive.object_list.into_iter().map(Expense::from).collect(),
            report: archive.report.into(),
            page_name: kind.page_name().to_string(),
            is_day: kind == core_reports::ArchiveKind::Day,
            is_week: kind == core_reports::ArchiveKind::Week,
            is_month: kind == core_reports::ArchiveKind::Month,
            period: archive.period.into(),
        }
    }
}
