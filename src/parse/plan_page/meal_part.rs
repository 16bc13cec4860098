use scraper::ElementRef;

use crate::menu::{translate_pictogram, MealPart};
use crate::parse::leading_text::leading_text;
use crate::parse::part_child::{split_additives, PartChild};
use crate::parse::{Error, Position};

impl MealPart {
    /// Builds a part from one `div` of a meal cell.
    ///
    /// The title is the leading text of the div. Icons among its direct children become
    /// tags, the `<sup>` annotation becomes the additive codes. When there is more than one
    /// annotation the last one is kept.
    pub fn from_html_element(element: ElementRef<'_>, at: Position) -> Result<Self, Error> {
        let title = leading_text(element, at)?;
        let mut tags = Vec::new();
        let mut additives = Vec::new();
        for child in element.children() {
            match PartChild::classify(child) {
                PartChild::Icon(src) => tags.push(translate_pictogram(src).to_owned()),
                PartChild::Annotation(sup) => {
                    additives = split_additives(&sup.text().collect::<String>());
                }
                PartChild::Other => {}
            }
        }
        Ok(Self::new(title).with_tags(tags).with_additives(additives))
    }
}
