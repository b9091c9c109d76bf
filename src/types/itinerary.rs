use serde::Serialize;
use serde_json::Value;

/// One day of the itinerary, decoded leniently from the model's output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayPlan {
    /// Day number as reported by the model
    pub day: Option<u64>,
    /// Short summary of places for the day
    pub activities: String,
    /// Longer narrative of the day's plan
    pub description: String,
    /// Free-text cost such as "₹3,500"; `None` when the model left it out
    pub estimated_cost: Option<String>,
}

impl DayPlan {
    /// Decode a single `plan` entry without failing on missing or mistyped fields.
    pub fn from_value(entry: &Value) -> Self {
        let Some(fields) = entry.as_object() else {
            return Self::default();
        };

        Self {
            day: fields.get("day").and_then(day_number),
            activities: fields.get("activities").map(lenient_text).unwrap_or_default(),
            description: fields.get("description").map(lenient_text).unwrap_or_default(),
            estimated_cost: fields.get("estimated_cost").and_then(cost_text),
        }
    }
}

fn day_number(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text.clone()),
                Value::Number(number) => Some(number.to_string()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

fn cost_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// A parsed itinerary with its aggregated total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItineraryResult {
    /// Days in the order the model returned them
    pub plan: Vec<DayPlan>,
    pub grand_total: String,
}

impl ItineraryResult {
    pub fn day_count(&self) -> usize {
        self.plan.len()
    }
}

/// What a plan request produced: an itinerary or an error banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PlanOutcome {
    Itinerary(ItineraryResult),
    Failed { error: String },
}

impl PlanOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        PlanOutcome::Failed {
            error: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PlanOutcome::Itinerary(_))
    }

    pub fn itinerary(&self) -> Option<&ItineraryResult> {
        match self {
            PlanOutcome::Itinerary(result) => Some(result),
            PlanOutcome::Failed { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            PlanOutcome::Failed { error } => Some(error),
            PlanOutcome::Itinerary(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_well_formed_entry() {
        let day = DayPlan::from_value(&json!({
            "day": 1,
            "activities": "Louvre, Seine cruise",
            "description": "Start early at the Louvre.",
            "estimated_cost": "€200"
        }));

        assert_eq!(day.day, Some(1));
        assert_eq!(day.activities, "Louvre, Seine cruise");
        assert_eq!(day.description, "Start early at the Louvre.");
        assert_eq!(day.estimated_cost.as_deref(), Some("€200"));
    }

    #[test]
    fn test_missing_fields_degrade_to_empty() {
        let day = DayPlan::from_value(&json!({ "day": "2" }));

        assert_eq!(day.day, Some(2));
        assert!(day.activities.is_empty());
        assert!(day.description.is_empty());
        assert_eq!(day.estimated_cost, None);
    }

    #[test]
    fn test_mistyped_fields_are_coerced() {
        let day = DayPlan::from_value(&json!({
            "day": "first",
            "activities": ["Museum", "Park"],
            "description": { "text": "nested" },
            "estimated_cost": 150
        }));

        assert_eq!(day.day, None);
        assert_eq!(day.activities, "Museum, Park");
        assert!(day.description.is_empty());
        assert_eq!(day.estimated_cost.as_deref(), Some("150"));
    }

    #[test]
    fn test_non_object_entry_is_empty_day() {
        assert_eq!(DayPlan::from_value(&json!("day one")), DayPlan::default());
    }

    #[test]
    fn test_outcome_serializes_like_page_payload() {
        let failed = PlanOutcome::failed("boom");
        assert_eq!(serde_json::to_value(&failed).unwrap(), json!({ "error": "boom" }));

        let ok = PlanOutcome::Itinerary(ItineraryResult {
            plan: vec![DayPlan::default()],
            grand_total: "₹0".to_string(),
        });
        let value = serde_json::to_value(&ok).unwrap();
        assert_eq!(value["grand_total"], "₹0");
        assert_eq!(value["plan"].as_array().unwrap().len(), 1);
    }
}
