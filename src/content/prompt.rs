use super::ContentGenerator;
use crate::topic::Topic;

const SYSTEM_PROMPT: &str = "\
You are an expert DevOps Engineer and Site Reliability Engineer with 15+ years of experience at leading tech companies.

Write practical, actionable blog posts that include:
- Real-world examples and code snippets
- Specific tools and commands
- Best practices from production experience
- Common pitfalls and how to avoid them
- Step-by-step implementation guides

Your writing style:
- Conversational but authoritative
- Include specific examples with actual code
- Share both successes and failures
- Focus on practical value
- Use clear headings and structure";

impl ContentGenerator {
    /// Persona and style instructions sent as the system message.
    pub fn create_system_prompt(&self) -> String {
        SYSTEM_PROMPT.to_string()
    }

    /// Topic-specific request sent as the user message.
    pub fn create_user_prompt(&self, topic: &Topic) -> String {
        let difficulty = topic
            .difficulty
            .as_deref()
            .map(|d| format!("- Difficulty: {}\n", d))
            .unwrap_or_default();

        format!(
            "Write a comprehensive blog post about \"{title}\".

Topic details:
- Category: {category}
- Keywords: {keywords}
- Description: {description}
{difficulty}
Requirements:
1. 1500-2500 words of practical content
2. Include 3-5 code examples or configurations
3. Structure with clear H2/H3 headers
4. Share real-world scenarios and lessons learned
5. Include troubleshooting tips and best practices
6. End with actionable next steps

Write ONLY the markdown content (no YAML frontmatter). Start with an engaging introduction.",
            title = topic.title,
            category = topic.category,
            keywords = topic.keywords.join(", "),
            description = topic.description,
            difficulty = difficulty,
        )
    }
}
