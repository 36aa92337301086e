/// Number of records shown per page in list views
pub const PAGE_SIZE: i64 = 9;

/// Maximum length of a category name
pub const CATEGORY_NAME_MAX_LENGTH: usize = 50;

/// Message attached to a required field that was left empty
pub const REQUIRED_FIELD_MESSAGE: &str = "This field is required.";

/// Message attached to an amount that is not a whole number
pub const WHOLE_NUMBER_MESSAGE: &str = "Enter a whole number.";

/// Message attached to a date that cannot be read as YYYY-MM-DD
pub const VALID_DATE_MESSAGE: &str = "Enter a valid date.";

/// Message attached to a category reference that matches no category
pub const INVALID_CHOICE_MESSAGE: &str =
    "Select a valid choice. That choice is not one of the available choices.";
