use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

/// What a direct child of a part element contributes to the part.
#[derive(Debug, Clone, Copy)]
pub enum PartChild<'a> {
    /// Any element with a `src` attribute, carrying that reference.
    Icon(&'a str),
    /// A `<sup>` holding the comma separated additive codes.
    Annotation(ElementRef<'a>),
    /// Text, comments and every other element.
    Other,
}

impl<'a> PartChild<'a> {
    pub fn classify(node: NodeRef<'a, Node>) -> Self {
        let Some(element) = ElementRef::wrap(node) else {
            return Self::Other;
        };
        if let Some(src) = element.value().attr("src") {
            Self::Icon(src)
        } else if element.value().name() == "sup" {
            Self::Annotation(element)
        } else {
            Self::Other
        }
    }
}

/// Splits an annotation like `" 1, 3 ,9"` into `["1", "3", "9"]`. Blank segments are dropped.
pub fn split_additives(annotation: &str) -> Vec<String> {
    annotation
        .trim()
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
