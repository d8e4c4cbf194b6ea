//! The fixed instruction template wrapped around caller prompts.
//!
//! The template asks the model for a professional business-communication
//! message with `{name}`-style personalization placeholders, and nothing
//! but the message text itself. It is a pure function of the caller's
//! prompt; no other input affects it.

/// Wraps a caller prompt in the instruction template sent to the model.
///
/// # Examples
///
/// ```
/// use missive_core::prompt::compose_instruction;
///
/// let instruction = compose_instruction("appointment reminder");
/// assert!(instruction.contains("User's request: appointment reminder"));
/// assert!(instruction.contains("{name}"));
/// ```
pub fn compose_instruction(prompt: &str) -> String {
    format!(
        "You are a helpful assistant that generates professional messages for business communications. \
Based on the user's request, generate a well-structured message that can be used for customer communication.\n\
\n\
User's request: {prompt}\n\
\n\
Please generate a professional message that:\n\
1. Is appropriate for the context\n\
2. Uses placeholders like {{name}} for personalization\n\
3. Is concise but warm and professional\n\
4. Can be easily customized by the user\n\
\n\
Return only the generated message without any additional explanations."
    )
}
