mod meal;
mod meal_part;
mod pictogram;
mod plan;

pub use meal::Meal;
pub use meal_part::MealPart;
pub use pictogram::{translate_pictogram, Pictogram};
pub use plan::Plan;
