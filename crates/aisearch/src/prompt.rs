/// Instruction sent ahead of every user prompt.
pub const SYSTEM_INSTRUCTION: &str = r#"You are an AI assistant for a job search engine.
Convert the user's natural language query into a JSON object with these fields:
- query: The main job role or keyword (e.g., "Software Engineer Intern").
- location: The location if specified (default to "India").
- datePosted: One of "all", "today", "3days", "week", "month".

Examples:
Input: "I want a react internship in bangalore posted this week"
Output: { "query": "React Intern", "location": "Bangalore", "datePosted": "week" }

Input: "High paying remote design jobs"
Output: { "query": "Product Design Intern", "location": "Remote", "datePosted": "month" }

Return ONLY valid JSON. Do not include markdown formatting."#;

/// 指示文の後ろにユーザー入力を JSON 文字列として連結する
pub fn build_prompt(user_prompt: &str) -> String {
    let quoted = serde_json::to_string(user_prompt)
        .unwrap_or_else(|_| format!("\"{}\"", user_prompt.replace('"', "'")));
    format!("{}\nInput: {}", SYSTEM_INSTRUCTION, quoted)
}
