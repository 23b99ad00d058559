mod activity;
mod category;
mod field;
mod validation;

pub use activity::{Activity, fresh_id};
pub use category::{Category, CategoryTable, EXERCISE, FOOD, submit_label};
pub use field::{ActivityField, FieldError, FieldParser, FieldValue, coerce_number, with_field};
pub use validation::{ValidationError, is_valid_activity, validate_activity, validation_errors};
