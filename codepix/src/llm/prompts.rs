//! Prompt templates for the four code tasks
//!
//! These templates use basic `format!()` interpolation for type safety.
//! Missing variables will cause compile-time errors.

pub const DEFAULT_LANGUAGE: &str = "javascript";
pub const DEFAULT_COMPLEXITY: &str = "intermediate";
pub const DEFAULT_TRANSLATE_TARGET: &str = "python";

/// Generate a prompt for producing code from a task description
///
/// Returns a prompt that instructs the LLM to answer with a single code block
/// in the requested language and complexity, with no surrounding prose.
///
/// # Arguments
/// * `task` - Natural-language description of what the code should do
/// * `language` - Target programming language
/// * `complexity` - Desired complexity level (e.g. "beginner", "intermediate")
///
/// # Example
/// ```
/// use codepix::llm::prompts::generate_prompt;
///
/// let prompt = generate_prompt("sum two numbers", "python", "intermediate");
/// assert!(prompt.contains("Language: python"));
/// ```
pub fn generate_prompt(task: &str, language: &str, complexity: &str) -> String {
    format!(
        r#"You are a code generator that produces ONLY code, nothing extra such as usage examples or elaborate error handling.
This response will be pasted directly into a code editor, so it must be ready to run without modifications.
The code should be easy to understand and maintain.
You will be given a task to generate code in a specific programming language with a certain complexity level.
Return only the code in a single code block with the appropriate syntax for the specified language.
Do not include any explanations, comments, or additional text outside of the code block.
The code should be proper and clean, and should follow best practices for the specified language.

Task: {task}

Requirements:
- Language: {language}
- Complexity: {complexity}
- Include only essential comments that explain complex logic
- Follow best practices for {language}
- Make the code clean and concise
- Do NOT include usage examples
- Do NOT include explanatory text outside the code
- Do NOT include console.log or print statements unless specifically requested
- Do NOT include commented out code
- Do NOT include any text outside of the code block

Your entire response should be ONLY a code block with the appropriate syntax, nothing else."#
    )
}

/// Generate a prompt asking for a plain-language explanation of `code`
pub fn explain_prompt(code: &str) -> String {
    format!("Explain this code in clear, concise terms:\n\n{code}")
}

/// Generate a prompt for translating code between languages
///
/// The LLM is asked to keep behaviour identical, follow the target language's
/// conventions and answer with a single code block.
///
/// # Example
/// ```
/// use codepix::llm::prompts::translate_prompt;
///
/// let prompt = translate_prompt("print('x')", "python", "javascript");
/// assert!(prompt.contains("from python to javascript"));
/// ```
pub fn translate_prompt(code: &str, source_language: &str, target_language: &str) -> String {
    format!(
        r#"Translate the following code from {source_language} to {target_language}.
Maintain the same functionality and logic while following {target_language} conventions and best practices.
Return only the translated code in a code block with the appropriate syntax for {target_language}.
Do not include any explanations or additional text outside the code block.

Source Code ({source_language}):
{code}

Translate to {target_language}:"#
    )
}

/// Generate a prompt for optimizing code
///
/// Unlike the other code tasks the reply is expected to mix an optimized code
/// block with a short explanation, so callers return it unmodified.
pub fn optimize_prompt(code: &str, language: &str) -> String {
    format!(
        r#"Analyze and optimize the following {language} code. Provide specific optimization suggestions including:
1. Performance improvements
2. Code readability enhancements
3. Best practices recommendations
4. Security considerations (if applicable)
5. Memory usage optimizations

Provide both the optimized code and a brief explanation of the changes made.

Original Code:
{code}

Please provide:
1. The optimized code in a code block
2. A brief explanation of the optimizations made"#
    )
}
