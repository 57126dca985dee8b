//! Prompt templates for the generation provider.

/// Prompt for answering `question` from retrieved report text.
pub fn summary_prompt(question: &str, context: &str) -> String {
    format!(
        "You are a career outcomes analyst. Answer the question using the report \
excerpts below.

Context:
{context}

Question: {question}

Cover:
1. Key insights and trends
2. Specific figures from the context
3. Actionable recommendations
4. Institution-specific details where relevant

Be clear and concise. Do not invent figures that are not in the context."
    )
}

/// Prompt for turning analytics bullets into a report for families.
pub fn insights_prompt(bullets: &[String], context: &str) -> String {
    let points: Vec<String> = bullets.iter().map(|b| format!("- {b}")).collect();
    format!(
        "You are a career counselor writing for parents and students choosing a \
program.

Data points:
{}

Context: {context}

Write a structured report with these sections:
1. Executive Summary
2. Key Findings
3. Recommendations for Parents
4. Future Outlook
5. Action Items

Use plain language, headings and bullet points.",
        points.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prompt_embeds_inputs() {
        let prompt = summary_prompt("What about salaries?", "Salaries rose.");
        assert!(prompt.contains("Question: What about salaries?"));
        assert!(prompt.contains("Salaries rose."));
    }

    #[test]
    fn insights_prompt_lists_bullets() {
        let prompt = insights_prompt(&["a".to_string(), "b".to_string()], "all degrees");
        assert!(prompt.contains("- a\n- b"));
        assert!(prompt.contains("Context: all degrees"));
    }
}
