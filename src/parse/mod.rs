mod error;
mod leading_text;
mod part_child;
mod plan_page;
mod static_selector;

pub use error::{Error, Position, Result};
pub use part_child::{split_additives, PartChild};
pub use plan_page::{extract_meals, meals_from_html};
