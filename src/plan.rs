use chrono::{Local, NaiveDate};

use crate::fetch::MarkupSource;
use crate::menu::Plan;
use crate::parse;

/// Source of "today" for plans built without an explicit date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date, read anew on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

impl<F: Fn() -> NaiveDate> Clock for F {
    fn today(&self) -> NaiveDate {
        self()
    }
}

/// Fetches and parses the plan for `date`, or for today when `date` is `None`.
pub fn fetch_plan(source: &impl MarkupSource, date: Option<NaiveDate>) -> crate::Result<Plan> {
    fetch_plan_with_clock(source, date, &SystemClock)
}

pub fn fetch_plan_with_clock(
    source: &impl MarkupSource,
    date: Option<NaiveDate>,
    clock: &impl Clock,
) -> crate::Result<Plan> {
    let date = date.unwrap_or_else(|| clock.today());
    let html = source.fetch(date)?;
    let plan = Plan::from_html(date, &html)?;
    log::debug!("{} meals on {date}", plan.len());
    Ok(plan)
}

impl Plan {
    pub fn fetch(source: &impl MarkupSource, date: Option<NaiveDate>) -> crate::Result<Self> {
        fetch_plan(source, date)
    }

    /// Parses an already fetched plan page.
    pub fn from_html(date: NaiveDate, html: &str) -> Result<Self, parse::Error> {
        parse::meals_from_html(html).map(|meals| Self::new(date, meals))
    }
}
