//! Prompt builders for the generation operations.
//!
//! Each operation gets one builder. Prompts that expect a structured
//! response spell out the exact JSON keys the drafts deserialize, and ask
//! the model to return nothing but the payload. The decoder still
//! tolerates a fence wrapped around it.

use studyforge_core::{Difficulty, ExerciseSummary, Technology};

/// Shared clause asking the model not to repeat earlier output for this
/// user, where possible.
const FRESHNESS: &str =
    "Where possible, make this content new and different from content previously generated for this user.";

pub fn explanation(technology: Technology, topic: &str) -> String {
    format!(
        "Explain the topic '{topic}' in {tech} in detail.\n\
         The content must be easy to follow, comprehensive, and focused on modern approaches and best practices.\n\
         Include illustrative code examples where they help clarify a concept, using markdown fences \
         (e.g. ```javascript\n// code here\n```).\n\
         Headings must not be numbered; use descriptive heading text.\n\
         {FRESHNESS}\n\
         Return only the explanation as a single text string (markdown allowed).",
        tech = technology.label(),
    )
}

pub fn flashcards(technology: Technology, concept: &str) -> String {
    format!(
        "Create at least 5 flashcards about '{concept}' in {tech}. Each flashcard has a 'question' \
         and an 'answer'. {FRESHNESS} Return a JSON array of flashcard objects, e.g. \
         [{{ \"question\": \"...\", \"answer\": \"...\" }}, ...]. Return only the JSON array.",
        tech = technology.label(),
    )
}

pub fn exercises(technology: Technology, topic: &str, difficulty: Difficulty, count: u8) -> String {
    format!(
        "Create {count} exercises about '{topic}' in {tech} at the '{level}' level. Each exercise \
         has: 'title', 'description' (an overview of the problem), and 'statement' (the full \
         assignment, which may embed example code in markdown fences, e.g. ```{tag}\n// code here\n```). \
         Keep descriptive text clearly separated from code blocks. All code examples must be written \
         in English. {FRESHNESS} Return a JSON ARRAY of {count} exercise objects, e.g. \
         [{{ \"title\": \"...\", \"description\": \"...\", \"statement\": \"...\" }}, ...]. \
         Return only the JSON array.",
        tech = technology.label(),
        level = difficulty.label(),
        tag = technology.code_tag(),
    )
}

pub fn solution(exercise: ExerciseSummary<'_>, technology: Technology) -> String {
    format!(
        "Write a detailed solution for the following {tech} exercise:\n\
         Exercise:\n\
         Title: {title}\n\
         Description: {description}\n\
         Statement: {statement}\n\n\
         The solution should explain the steps clearly and include example code where useful \
         (markdown fences, e.g. ```{tag}\n// code here\n```). All code examples must be written in \
         English. {FRESHNESS} Return only the solution as a single text string (markdown allowed).",
        tech = technology.label(),
        title = exercise.title,
        description = exercise.description,
        statement = exercise.statement,
        tag = technology.code_tag(),
    )
}

pub fn hint(exercise: ExerciseSummary<'_>, technology: Technology) -> String {
    format!(
        "Give one simple, short hint (no more than 2-3 sentences, no code) for the following {tech} \
         exercise:\n\
         Exercise:\n\
         Title: {title}\n\
         Description: {description}\n\
         Statement: {statement}\n\n\
         The hint should only point at an approach or a key concept to remember, not a detailed \
         solution or code. {FRESHNESS} Return only the hint as a short text string.",
        tech = technology.label(),
        title = exercise.title,
        description = exercise.description,
        statement = exercise.statement,
    )
}

pub fn project_idea(technologies: &[Technology], topic: Option<&str>) -> String {
    let tech_names = technologies
        .iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ");
    let mut prompt = format!("Create one simple web project idea using: {tech_names}.");
    if let Some(topic) = topic.map(str::trim).filter(|t| !t.is_empty()) {
        prompt.push_str(&format!(
            " The idea should focus on or relate to the topic: '{topic}'."
        ));
    }
    prompt.push_str(&format!(
        " The idea must include: 'name', 'description' (a short summary), 'features' (an array of \
         strings describing the main features), and 'suggestedTech' (an array of additional \
         suggested technology names, if any). All code examples in any later follow-up (such as a \
         detailed guide) must be written in English. {FRESHNESS} Return a single JSON object, e.g. \
         {{ \"name\": \"...\", \"description\": \"...\", \"features\": [\"...\", \"...\"], \
         \"suggestedTech\": [\"...\"] }}. Make sure the response contains ONLY the valid JSON \
         object, with no characters or text outside the JSON structure. Return only the JSON object."
    ));
    prompt
}

pub fn project_details(name: &str, description: &str, suggested_tech: &[String]) -> String {
    let tech_names = if suggested_tech.is_empty() {
        "a suitable stack".to_string()
    } else {
        suggested_tech.join(", ")
    };
    format!(
        "Provide a detailed step-by-step guide for building the project \"{name}\".\n\
         Project description: {description}.\n\
         Suggested technologies: {tech_names}.\n\
         The guide should cover the main areas:\n\
         1. Environment setup.\n\
         2. A suggested project directory structure.\n\
         3. The main implementation steps for each feature.\n\
         4. The key example code snippets (use markdown fences, e.g. ```javascript\n// code here\n```). \
         Make sure code blocks are clearly separated. All code examples must be written in English.\n\
         {FRESHNESS} Return only the guide as a single text string (markdown allowed). There is no \
         need to produce a complete sample application."
    )
}

pub fn project_suggestions(name: &str) -> String {
    format!(
        "Suggest a few (around 3-5) improvements or extension features for the project \"{name}\". \
         {FRESHNESS} Return a JSON array of suggestion strings, e.g. [\"Add OAuth user \
         authentication\", \"Integrate an email notification API\", \"Implement dark mode\"]. \
         Return only the JSON array.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_prompts_name_their_keys() {
        let p = flashcards(Technology::React, "hooks");
        assert!(p.contains("\"question\""));
        assert!(p.contains("\"answer\""));

        let p = project_idea(&[Technology::Vue, Technology::TypeScript], Some("recipes"));
        assert!(p.contains("Vue, TypeScript"));
        assert!(p.contains("'recipes'"));
        assert!(p.contains("\"suggestedTech\""));
    }

    #[test]
    fn test_blank_project_topic_is_omitted() {
        let p = project_idea(&[Technology::Angular], Some("   "));
        assert!(!p.contains("focus on or relate to"));
    }

    #[test]
    fn test_exercise_prompt_embeds_count_and_level() {
        let prompt = exercises(Technology::JavaScript, "promises", Difficulty::Advanced, 3);
        assert!(prompt.contains("Create 3 exercises"));
        assert!(prompt.contains("'Advanced' level"));
        assert!(prompt.contains("```javascript"));
    }
}
