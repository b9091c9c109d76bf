pub mod cost;
pub mod gemini_client;
pub mod prompt;
pub mod response_parser;

pub use cost::{compute_total, day_contribution, extract_digit_runs, format_total, grand_total};
pub use gemini_client::{GeminiClient, TextGenerator};
pub use prompt::build_prompt;
pub use response_parser::{parse_plan, strip_code_fences};
