#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

//! Daily meal plans scraped from the cafeteria provider's plan page.
//!
//! ```no_run
//! use mensa_plan::{HttpSource, Plan, ProviderConfig};
//!
//! let source = HttpSource::new(ProviderConfig::default())?;
//! let plan = Plan::fetch(&source, None)?;
//! for meal in &plan {
//!     println!("{} {:?}", meal.title(), meal.tag_set());
//! }
//! # Ok::<(), mensa_plan::Error>(())
//! ```

pub mod config;
mod error;
pub mod fetch;
pub mod menu;
pub mod parse;
mod plan;

pub use config::ProviderConfig;
pub use error::{Error, Result};
pub use fetch::{HttpSource, MarkupSource};
pub use menu::{translate_pictogram, Meal, MealPart, Pictogram, Plan};
pub use plan::{fetch_plan, fetch_plan_with_clock, Clock, SystemClock};
