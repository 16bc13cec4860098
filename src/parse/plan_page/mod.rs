mod meal;
mod meal_part;

use scraper::Html;

use crate::menu::Meal;
use crate::parse::static_selector::static_selector;
use crate::parse::Error;

/// Every meal cell of a plan page, in document order.
pub fn extract_meals(document: &Html) -> Result<Vec<Meal>, Error> {
    static_selector!(MEAL_SELECTOR <- ".cell2");
    document
        .select(&MEAL_SELECTOR)
        .enumerate()
        .map(|(i, cell)| Meal::from_html_element(cell, i))
        .collect()
}

pub fn meals_from_html(html: &str) -> Result<Vec<Meal>, Error> {
    let document = Html::parse_document(html);
    extract_meals(&document)
}
