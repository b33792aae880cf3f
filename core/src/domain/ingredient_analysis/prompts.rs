const CLASSIFICATION_POLICY: &str = r#"You are an expert nutritionist and food safety analyst. Analyze the following ingredient list comprehensively.

IMPORTANT GUIDELINES:
- Salt is generally safe in moderate amounts and should be classified as "Healthy" with severity 0-1
- Sugar in small amounts is acceptable, classify as "Moderately Harmful" with severity 1-2
- Artificial colors, preservatives, and synthetic additives are "Harmful" with severity 3-5
- Natural ingredients like vitamins, minerals, whole grains are "Healthy" with severity 0
- Processed ingredients like high fructose corn syrup, partially hydrogenated oils are "Harmful" with severity 3-4
- Common food ingredients like flour, water, natural flavors are "Healthy" with severity 0

Analyze each ingredient individually and return a JSON object with this exact structure:
{
  "health_score": number (0-100),
  "summary": "Brief summary of the analysis",
  "breakdown": [
    {
      "ingredient": "exact ingredient name",
      "classification": "Healthy" | "Moderately Harmful" | "Harmful",
      "severity": number (0-5),
      "reason": "Detailed explanation for the classification"
    }
  ],
  "flags": ["list of concerning ingredients"],
  "health_advice": ["actionable advice strings"]
}"#;

const PROXY_PREAMBLE: &str =
    "You are a concise food-safety analyst. Return only valid JSON matching the schema described.";

const CHAT_PREAMBLE: &str = "You are a helpful nutrition expert and food safety consultant. Provide concise, actionable advice based on scientific evidence. Keep responses under 150 words and focus on practical recommendations.";

const CHAT_GUIDANCE: &str = "Please provide evidence-based advice that is:
- Practical and actionable
- Based on current nutrition science
- Specific to the user's question
- Helpful for making informed food choices";

const TEXT_EXTRACTION_PROMPT: &str = "Transcribe the ingredient list printed on this food label exactly as written, as plain text. Separate ingredients with commas. Return only the transcribed text, or nothing if no text is legible.";

pub fn build_classification_prompt(ingredients: &str) -> String {
    format!(
        "{}\n\nIngredients to analyze: \"{}\"",
        CLASSIFICATION_POLICY, ingredients
    )
}

pub fn build_proxy_prompt(ingredients: &str) -> String {
    format!(
        "{} {}",
        PROXY_PREAMBLE,
        build_classification_prompt(ingredients)
    )
}

pub fn build_chat_prompt(question: &str, context: Option<&serde_json::Value>) -> String {
    let context_line = context
        .map(|value| format!("Context: {}\n", value))
        .unwrap_or_default();

    format!(
        "{}\n\n{}Question: {}\n\n{}",
        CHAT_PREAMBLE, context_line, question, CHAT_GUIDANCE
    )
}

pub fn text_extraction_prompt() -> String {
    TEXT_EXTRACTION_PROMPT.to_string()
}
