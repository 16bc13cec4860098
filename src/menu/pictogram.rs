use std::fmt::Display;

/// The icons the provider attaches to meal parts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub enum Pictogram {
    Poultry,
    Vegan,
    Vegetarian,
    Organic,
    Garlic,
    Alcohol,
    Beef,
    Pork,
    MensaVital, // the provider's own "balanced meal" label
}

impl Pictogram {
    pub const ALL: [Self; 9] = [
        Self::Poultry,
        Self::Vegan,
        Self::Vegetarian,
        Self::Organic,
        Self::Garlic,
        Self::Alcohol,
        Self::Beef,
        Self::Pork,
        Self::MensaVital,
    ];

    /// Exact match on the `src` attribute of the icon element.
    #[must_use]
    pub fn from_src(src: &str) -> Option<Self> {
        let res = match src {
            "icons/40.png" => Self::Poultry,
            "icons/21.png" => Self::Vegan,
            "icons/20.png" => Self::Vegetarian,
            "icons/19.gif" => Self::Organic,
            "icons/17.gif" => Self::Garlic,
            "icons/15.gif" => Self::Alcohol,
            "icons/14.gif" => Self::Beef,
            "icons/13.gif" => Self::Pork,
            "icons/12.gif" => Self::MensaVital,
            _ => return None,
        };
        Some(res)
    }

    #[must_use]
    pub const fn src(self) -> &'static str {
        match self {
            Self::Poultry => "icons/40.png",
            Self::Vegan => "icons/21.png",
            Self::Vegetarian => "icons/20.png",
            Self::Organic => "icons/19.gif",
            Self::Garlic => "icons/17.gif",
            Self::Alcohol => "icons/15.gif",
            Self::Beef => "icons/14.gif",
            Self::Pork => "icons/13.gif",
            Self::MensaVital => "icons/12.gif",
        }
    }

    /// Label in the provider's language, used as the tag text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Poultry => "Geflügel",
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarisch",
            Self::Organic => "bio",
            Self::Garlic => "Knoblauch",
            Self::Alcohol => "Alkohol",
            Self::Beef => "Rindfleisch",
            Self::Pork => "Schweinefleisch",
            Self::MensaVital => "Mensa Vital",
        }
    }
}

impl Display for Pictogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Maps an icon reference to its label. Unknown references come back unchanged.
#[must_use]
pub fn translate_pictogram(src: &str) -> &str {
    match Pictogram::from_src(src) {
        Some(pictogram) => pictogram.label(),
        None => {
            log::debug!("unknown pictogram {src:?}, passing through");
            src
        }
    }
}
