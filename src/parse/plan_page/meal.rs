use scraper::ElementRef;

use crate::menu::{Meal, MealPart};
use crate::parse::{Error, Position};

impl Meal {
    /// Builds a meal from a meal cell, one part per direct `div` child.
    pub fn from_html_element(element: ElementRef<'_>, meal: usize) -> Result<Self, Error> {
        let parts = element
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == "div")
            .enumerate()
            .map(|(part, div)| MealPart::from_html_element(div, Position { meal, part }))
            .collect::<Result<Vec<_>, Error>>()?;
        log::trace!("meal cell {meal}: {} parts", parts.len());
        Self::from_parts(parts).ok_or(Error::NoParts { meal })
    }
}
