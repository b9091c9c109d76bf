//! itinerary-planner: turn trip parameters into an LLM-generated itinerary
//!
//! A trip request is rendered into a fixed prompt, sent to the Gemini
//! `generateContent` endpoint, and the model's JSON reply is decoded into
//! day plans with an aggregated cost. The [`web`] module serves it all as a
//! single HTML form.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use itinerary_planner::{PlannerConfig, TripPlanner, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PlannerConfig::from_env()?;
//!     let planner = TripPlanner::new(&config);
//!
//!     let request = TripRequest::new("Paris", 2, 2).with_interests("Art");
//!     let result = planner.plan_itinerary(&request).await?;
//!     println!("{} days, total {}", result.day_count(), result.grand_total);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod types;
pub mod web;

pub use config::PlannerConfig;
pub use crate::core::TripPlanner;
pub use error::{PlannerError, Result};
pub use services::{GeminiClient, TextGenerator};
pub use types::{DayPlan, ItineraryResult, PlanOutcome, TripForm, TripRequest};

#[cfg(feature = "cli")]
pub mod cli;
