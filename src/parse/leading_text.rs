use super::{Error, Position};
use scraper::ElementRef;

/// The first child node of `element`, which must be a non-blank text node, trimmed.
pub fn leading_text<'a>(element: ElementRef<'a>, at: Position) -> Result<&'a str, Error> {
    let first = element.children().next().ok_or(Error::MissingTitle(at))?;
    let text = first.value().as_text().ok_or(Error::TitleNotText(at))?;
    let text: &'a str = text;
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyTitle(at));
    }
    Ok(text)
}
