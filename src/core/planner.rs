use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    config::PlannerConfig,
    error::{PlannerError, Result},
    services::{build_prompt, grand_total, parse_plan, GeminiClient, TextGenerator},
    types::{ItineraryResult, PlanOutcome, TripRequest},
};

/// Turns trip requests into itineraries through a text generator.
#[derive(Debug, Clone)]
pub struct TripPlanner {
    generator: Arc<dyn TextGenerator>,
    api_key_configured: bool,
}

impl TripPlanner {
    /// Planner backed by the Gemini client described by `config`.
    pub fn new(config: &PlannerConfig) -> Self {
        Self::with_generator(config, Arc::new(GeminiClient::new(config)))
    }

    /// Planner backed by any generator, still gated on the configured key.
    pub fn with_generator(config: &PlannerConfig, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            api_key_configured: config.has_api_key(),
        }
    }

    pub fn api_key_configured(&self) -> bool {
        self.api_key_configured
    }

    /// Run prompt, generation, parsing and totalling, keeping each failure distinct.
    pub async fn plan_itinerary(&self, request: &TripRequest) -> Result<ItineraryResult> {
        if !self.api_key_configured {
            return Err(PlannerError::Config("GEMINI_API_KEY is not set".to_string()));
        }

        let prompt = build_prompt(request);
        let raw = self.generator.generate(&prompt).await?;
        let plan = parse_plan(&raw)?;
        let grand_total = grand_total(&plan);

        Ok(ItineraryResult { plan, grand_total })
    }

    /// Like [`plan_itinerary`](Self::plan_itinerary) but never fails: errors
    /// become the message shown in place of the itinerary.
    pub async fn plan(&self, request: &TripRequest) -> PlanOutcome {
        info!(
            destination = %request.destination,
            duration = request.duration,
            travelers = request.travelers,
            "planning trip"
        );

        match self.plan_itinerary(request).await {
            Ok(result) => {
                info!(days = result.day_count(), total = %result.grand_total, "itinerary ready");
                PlanOutcome::Itinerary(result)
            }
            Err(err) => {
                match &err {
                    PlannerError::Config(_) => warn!(error = %err, "plan requested without an API key"),
                    PlannerError::Parse(_) => warn!(error = %err, "model output could not be parsed"),
                    _ => error!(error = %err, "itinerary generation failed"),
                }
                PlanOutcome::failed(err.user_message())
            }
        }
    }
}
