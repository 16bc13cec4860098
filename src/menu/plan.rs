use std::fmt::Display;

use chrono::NaiveDate;

use super::meal::Meal;

/// All meals offered on one date. Built once per fetch, never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Plan {
    // serialized as yyyy-MM-dd
    date: NaiveDate,
    meals: Vec<Meal>,
}

impl Plan {
    #[must_use]
    pub fn new(date: NaiveDate, meals: Vec<Meal>) -> Self {
        Self { date, meals }
    }

    #[inline]
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    #[must_use]
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Meal> {
        self.meals.iter()
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a Meal;
    type IntoIter = std::slice::Iter<'a, Meal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.date.format("%Y-%m-%d"))?;
        if self.meals.is_empty() {
            return writeln!(f, "  (no meals)");
        }
        for meal in &self.meals {
            writeln!(f, "  {meal}")?;
            for part in meal.parts() {
                write!(f, "    - {part}")?;
                if !part.tags().is_empty() {
                    write!(f, " [{}]", part.tags().join(", "))?;
                }
                if !part.additives().is_empty() {
                    write!(f, " ({})", part.additives().join(", "))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
