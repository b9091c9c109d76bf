pub mod itinerary;
pub mod trip;

pub use itinerary::{DayPlan, ItineraryResult, PlanOutcome};
pub use trip::{TripForm, TripRequest};
