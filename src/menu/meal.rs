use std::collections::BTreeSet;
use std::fmt::Display;

use serde::ser::SerializeStruct;

use super::meal_part::MealPart;

/// One dish on the plan, made of one or more parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    parts: Vec<MealPart>,
}

impl Meal {
    /// Returns `None` if `parts` is empty, a meal always has at least one part.
    #[must_use]
    pub fn from_parts(parts: Vec<MealPart>) -> Option<Self> {
        if parts.is_empty() {
            None
        } else {
            Some(Self { parts })
        }
    }

    pub fn parts(&self) -> &[MealPart] {
        &self.parts
    }

    /// Part titles joined with `" + "`, in part order.
    pub fn title(&self) -> String {
        self.parts
            .iter()
            .map(MealPart::title)
            .collect::<Vec<_>>()
            .join(" + ")
    }

    pub fn tag_set(&self) -> BTreeSet<&str> {
        self.parts
            .iter()
            .flat_map(MealPart::tags)
            .map(String::as_str)
            .collect()
    }

    pub fn additive_set(&self) -> BTreeSet<&str> {
        self.parts
            .iter()
            .flat_map(MealPart::additives)
            .map(String::as_str)
            .collect()
    }

    pub fn has_tag(&self, label: &str) -> bool {
        self.parts
            .iter()
            .any(|part| part.tags().iter().any(|tag| tag == label))
    }
}

impl Display for Meal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

// serialized with the derived title next to the parts
impl serde::Serialize for Meal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Meal", 2)?;
        state.serialize_field("title", &self.title())?;
        state.serialize_field("parts", &self.parts)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schnitzel() -> Meal {
        Meal::from_parts(vec![
            MealPart::new("Schnitzel")
                .with_tags(["Schweinefleisch"])
                .with_additives(["2", "3"]),
            MealPart::new("Kartoffeln").with_tags(["vegan", "bio"]),
            MealPart::new("Salat")
                .with_tags(["vegan"])
                .with_additives(["3", "9"]),
        ])
        .expect("parts are not empty")
    }

    #[test]
    fn test_title_joins_parts_in_order() {
        assert_eq!(schnitzel().title(), "Schnitzel + Kartoffeln + Salat");
        let single = Meal::from_parts(vec![MealPart::new("Linsensuppe")]).unwrap();
        assert_eq!(single.title(), "Linsensuppe");
        assert_eq!(single.to_string(), "Linsensuppe");
    }

    #[test]
    fn test_sets_collapse_duplicates() {
        let meal = schnitzel();
        assert_eq!(
            meal.tag_set(),
            BTreeSet::from(["Schweinefleisch", "vegan", "bio"])
        );
        assert_eq!(meal.additive_set(), BTreeSet::from(["2", "3", "9"]));
        assert!(meal.has_tag("bio"));
        assert!(!meal.has_tag("Rindfleisch"));
    }

    #[test]
    fn test_sets_ignore_tag_order() {
        let a = Meal::from_parts(vec![
            MealPart::new("Reis").with_tags(["vegan", "bio", "Knoblauch"]),
        ])
        .unwrap();
        let b = Meal::from_parts(vec![
            MealPart::new("Reis").with_tags(["Knoblauch", "vegan", "bio"]),
        ])
        .unwrap();
        assert_eq!(a.tag_set(), b.tag_set());
    }

    #[test]
    fn test_empty_parts_rejected() {
        assert!(Meal::from_parts(vec![]).is_none());
    }

    #[test]
    fn test_sets_empty_without_decorations() {
        let meal = Meal::from_parts(vec![MealPart::new("Brot")]).unwrap();
        assert!(meal.tag_set().is_empty());
        assert!(meal.additive_set().is_empty());
    }

    #[test]
    fn test_serialize_includes_title() {
        let value = serde_json::to_value(schnitzel()).unwrap();
        assert_eq!(value["title"], "Schnitzel + Kartoffeln + Salat");
        assert_eq!(value["parts"][1]["title"], "Kartoffeln");
        assert_eq!(value["parts"][2]["additives"], serde_json::json!(["3", "9"]));
    }
}
