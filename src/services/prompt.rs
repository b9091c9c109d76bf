use crate::types::TripRequest;

/// Render the trip parameters into the itinerary instruction sent to the model.
///
/// Values are embedded verbatim; the prompt is only ever read by the model.
pub fn build_prompt(request: &TripRequest) -> String {
    format!(
        r#"You are an expert travel planner. Your task is to generate a creative and practical travel itinerary and respond ONLY in a clean JSON format. DO NOT include any text before or after the JSON object.

Generate a day-by-day itinerary for the following trip:
- Destination: {destination}
- Duration: {duration} days
- Travelers: {travelers} people
- Age Group: {age_group}
- Interests: {interests}
- Budget Style: {budget}

The JSON output must be an object with a single key "plan".
The value of "plan" must be an array of objects, one for each day.
Each day object in the array MUST contain exactly these four keys. DO NOT skip any of them.
1. "day": (Number) The day number.
2. "activities": (String) A short summary of places for the day.
3. "description": (String) A detailed and engaging paragraph describing the day's plan. Include suggestions for meals (like breakfast, lunch, and dinner) and mention typical travel times between major activities based on your knowledge of the city's traffic.
4. "estimated_cost": (String) THIS IS MANDATORY. Provide a specific cost estimate for the day's activities, formatted like "₹3,500" or "$150".
"#,
        destination = request.destination,
        duration = request.duration,
        travelers = request.travelers,
        age_group = request.age_group,
        interests = request.interests,
        budget = request.budget_style,
    )
}
