use std::fmt::Display;

/// The smallest titled piece of a meal, e.g. "Kartoffeln" in "Schnitzel + Kartoffeln".
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MealPart {
    title: String,
    tags: Vec<String>,
    additives: Vec<String>,
}

impl MealPart {
    /// Every part gets its own (empty) tag and additive vectors.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tags: Vec::new(),
            additives: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_additives<I, S>(mut self, additives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additives = additives.into_iter().map(Into::into).collect();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn additives(&self) -> &[String] {
        &self.additives
    }

    pub fn tags_mut(&mut self) -> &mut Vec<String> {
        &mut self.tags
    }

    pub fn additives_mut(&mut self) -> &mut Vec<String> {
        &mut self.additives
    }
}

impl Display for MealPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_not_shared() {
        let mut a = MealPart::new("Brot");
        let b = MealPart::new("Butter");
        a.tags_mut().push("vegan".to_string());
        a.additives_mut().push("2".to_string());
        assert_eq!(a.tags(), ["vegan"]);
        assert_eq!(a.additives(), ["2"]);
        assert!(b.tags().is_empty());
        assert!(b.additives().is_empty());
        // a fresh part after the mutation is still empty too
        let c = MealPart::new("Käse");
        assert!(c.tags().is_empty());
        assert!(c.additives().is_empty());
    }

    #[test]
    fn test_builder() {
        let part = MealPart::new("Brot")
            .with_tags(["vegan"])
            .with_additives(vec!["2".to_string(), "9".to_string()]);
        assert_eq!(part.title(), "Brot");
        assert_eq!(part.tags(), ["vegan"]);
        assert_eq!(part.additives(), ["2", "9"]);
        assert_eq!(part.to_string(), "Brot");
    }

    #[test]
    fn test_serde() {
        let x = MealPart::new("Linsensuppe").with_tags(["vegan"]);
        let serialized = serde_json::to_string(&x).unwrap();
        let deserialized: MealPart = serde_json::from_str(&serialized).unwrap();
        assert_eq!(x, deserialized);
    }
}
