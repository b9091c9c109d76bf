use serde_json::Value;
use tracing::debug;

use crate::{
    error::{PlannerError, Result},
    types::DayPlan,
};

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Trim the text and drop every markdown fence marker, wherever it appears.
pub fn strip_code_fences(raw: &str) -> String {
    raw.trim().replace(JSON_FENCE, "").replace(FENCE, "")
}

/// Decode the model's reply into day plans.
///
/// Only the top level is checked: it must be an object whose `plan` key holds
/// an array. Entries themselves are decoded leniently.
pub fn parse_plan(raw: &str) -> Result<Vec<DayPlan>> {
    let cleaned = strip_code_fences(raw);
    let decoded: Value = serde_json::from_str(&cleaned).map_err(|err| {
        debug!(target: "itinerary::parser", error = %err, text = %cleaned, "model output is not JSON");
        PlannerError::Parse(format!("model output is not valid JSON: {err}"))
    })?;

    let entries = extract_plan_entries(&decoded)?;
    Ok(entries.iter().map(DayPlan::from_value).collect())
}

fn extract_plan_entries(decoded: &Value) -> Result<&Vec<Value>> {
    let object = decoded.as_object().ok_or_else(|| {
        PlannerError::Parse("model output is not a JSON object".to_string())
    })?;

    let plan = object
        .get("plan")
        .ok_or_else(|| PlannerError::Parse("model output has no \"plan\" key".to_string()))?;

    plan.as_array()
        .ok_or_else(|| PlannerError::Parse("\"plan\" is not an array".to_string()))
}
