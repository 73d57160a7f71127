//! Prompt construction for the insight request
//!
//! The prompt has a fixed shape: repository metadata followed by a
//! four-part request. At most [`MAX_PROMPT_DEPENDENCIES`] dependency-map
//! keys are embedded.

use crate::models::profile::DependencyMap;

/// How many dependency-map keys are embedded in the prompt
pub const MAX_PROMPT_DEPENDENCIES: usize = 10;

/// Build the fixed-shape analysis prompt
pub fn build_prompt(
    repo_name: &str,
    framework: &str,
    entry_points: &[String],
    file_count: usize,
    dependencies: &DependencyMap,
) -> String {
    let key_dependencies: Vec<&str> = dependencies
        .keys()
        .take(MAX_PROMPT_DEPENDENCIES)
        .map(String::as_str)
        .collect();

    format!(
        "Analyze this repository and provide key insights:\n\
         \n\
         Repository: {repo_name}\n\
         Framework: {framework}\n\
         Entry Points: {entry_points}\n\
         Total Files: {file_count}\n\
         Key Dependencies: {key_dependencies}\n\
         \n\
         Provide:\n\
         1. Brief overview of the project structure\n\
         2. How to run/execute the project\n\
         3. Key architectural patterns identified\n\
         4. Suggestions for understanding the codebase\n\
         \n\
         Keep it concise and actionable.",
        repo_name = repo_name,
        framework = framework,
        entry_points = entry_points.join(", "),
        file_count = file_count,
        key_dependencies = key_dependencies.join(", "),
    )
}
