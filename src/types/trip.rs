use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{PlannerError, Result};

/// Raw trip form as submitted by the browser or the JSON API.
///
/// Every field is optional text so that malformed numbers surface as
/// [`PlannerError::InvalidInput`] instead of an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripForm {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default, deserialize_with = "text_or_scalar")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "text_or_scalar")]
    pub people: Option<String>,
    #[serde(default)]
    pub age_group: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
}

/// Numeric form fields arrive as text from forms and as any JSON scalar from
/// the API; everything is kept as text so validation reports it.
fn text_or_scalar<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// Validated trip parameters used to build the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripRequest {
    pub destination: String,
    /// Trip length in days
    pub duration: u32,
    pub travelers: u32,
    pub age_group: String,
    pub interests: String,
    pub budget_style: String,
}

impl TripRequest {
    pub fn new(destination: impl Into<String>, duration: u32, travelers: u32) -> Self {
        Self {
            destination: destination.into(),
            duration,
            travelers,
            age_group: String::new(),
            interests: String::new(),
            budget_style: String::new(),
        }
    }

    pub fn with_age_group(mut self, age_group: impl Into<String>) -> Self {
        self.age_group = age_group.into();
        self
    }

    pub fn with_interests(mut self, interests: impl Into<String>) -> Self {
        self.interests = interests.into();
        self
    }

    pub fn with_budget_style(mut self, budget_style: impl Into<String>) -> Self {
        self.budget_style = budget_style.into();
        self
    }
}

impl TripForm {
    /// The destination as typed, used to pre-fill the form after a submit.
    pub fn destination_text(&self) -> String {
        self.destination.clone().unwrap_or_default()
    }
}

impl TryFrom<TripForm> for TripRequest {
    type Error = PlannerError;

    fn try_from(form: TripForm) -> Result<Self> {
        let destination = form
            .destination
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| PlannerError::InvalidInput("Please enter a destination.".to_string()))?;

        Ok(TripRequest {
            destination,
            duration: parse_positive(form.duration.as_deref(), "Duration")?,
            travelers: parse_positive(form.people.as_deref(), "Number of travelers")?,
            age_group: form.age_group.unwrap_or_default(),
            interests: form.interests.unwrap_or_default(),
            budget_style: form.budget.unwrap_or_default(),
        })
    }
}

/// Absent or blank numeric fields default to 1.
fn parse_positive(raw: Option<&str>, label: &str) -> Result<u32> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(1);
    };

    match raw.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(PlannerError::InvalidInput(format!(
            "{label} must be a positive whole number, got \"{raw}\"."
        ))),
    }
}
