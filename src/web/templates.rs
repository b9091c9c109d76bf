use std::sync::Arc;

use tera::{Context, Tera};

use crate::{error::Result, types::PlanOutcome};

pub const INDEX_TEMPLATE: &str = "index.html";

/// Template engine with the page template compiled in.
pub fn init_templates() -> Result<Arc<Tera>> {
    let mut tera = Tera::default();
    tera.add_raw_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))?;
    Ok(Arc::new(tera))
}

/// The two states of the planner page.
#[derive(Debug, Clone)]
pub enum PageState {
    /// Empty form, nothing submitted yet
    AwaitingSubmission,
    /// Form pre-filled with the destination plus an itinerary or an error banner
    PlanRendered {
        destination: String,
        outcome: PlanOutcome,
    },
}

impl PageState {
    pub fn rendered(destination: impl Into<String>, outcome: PlanOutcome) -> Self {
        PageState::PlanRendered {
            destination: destination.into(),
            outcome,
        }
    }

    fn context(&self) -> Context {
        let mut context = Context::new();
        match self {
            PageState::AwaitingSubmission => {
                context.insert("destination", "");
            }
            PageState::PlanRendered {
                destination,
                outcome,
            } => {
                context.insert("destination", destination);
                context.insert("plan_data", outcome);
            }
        }
        context
    }

    pub fn render(&self, tera: &Tera) -> Result<String> {
        Ok(tera.render(INDEX_TEMPLATE, &self.context())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DayPlan, ItineraryResult};

    fn day(number: u64, activities: &str, cost: Option<&str>) -> DayPlan {
        DayPlan {
            day: Some(number),
            activities: activities.to_string(),
            description: format!("{activities} all day"),
            estimated_cost: cost.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_form_has_no_plan() {
        let tera = init_templates().unwrap();
        let html = PageState::AwaitingSubmission.render(&tera).unwrap();

        assert!(html.contains("name=\"destination\""));
        assert!(!html.contains("class=\"day-card\""));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_itinerary_renders_cards_and_total() {
        let tera = init_templates().unwrap();
        let outcome = PlanOutcome::Itinerary(ItineraryResult {
            plan: vec![day(1, "Louvre", Some("€200")), day(2, "Orsay", None)],
            grand_total: "₹200".to_string(),
        });

        let html = PageState::rendered("Paris", outcome).render(&tera).unwrap();

        assert_eq!(html.matches("class=\"day-card\"").count(), 2);
        assert!(html.contains("Day 1: Louvre"));
        assert!(html.contains("Day 2: Orsay"));
        assert!(html.contains("Estimated cost: €200"));
        assert_eq!(html.matches("Estimated cost:").count(), 1);
        assert!(html.contains("Grand total: ₹200"));
        assert!(html.contains("value=\"Paris\""));
    }

    #[test]
    fn test_error_renders_banner_instead_of_plan() {
        let tera = init_templates().unwrap();
        let html = PageState::rendered("Paris", PlanOutcome::failed("no plan today"))
            .render(&tera)
            .unwrap();

        assert!(html.contains("no plan today"));
        assert!(!html.contains("class=\"day-card\""));
        assert!(!html.contains("Grand total"));
    }

    #[test]
    fn test_model_text_is_escaped() {
        let tera = init_templates().unwrap();
        let outcome = PlanOutcome::Itinerary(ItineraryResult {
            plan: vec![day(1, "<script>alert(1)</script>", None)],
            grand_total: "₹0".to_string(),
        });

        let html = PageState::rendered("Paris", outcome).render(&tera).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn test_day_zero_keeps_model_number() {
        let tera = init_templates().unwrap();
        let mut unnumbered = day(0, "Orsay", None);
        unnumbered.day = None;
        let outcome = PlanOutcome::Itinerary(ItineraryResult {
            plan: vec![day(0, "Arrival", None), unnumbered],
            grand_total: "₹0".to_string(),
        });

        let html = PageState::rendered("Paris", outcome).render(&tera).unwrap();

        assert!(html.contains("Day 0: Arrival"));
        // missing numbers fall back to the position in the plan
        assert!(html.contains("Day 2: Orsay"));
    }
}
