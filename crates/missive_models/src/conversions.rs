//! Type conversions between Missive and Gemini wire formats.

use crate::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use missive_core::{GenerateRequest, GenerateResponse, Role};
use missive_error::{GeminiError, GeminiErrorKind};

/// Converts a Missive GenerateRequest to the Gemini wire format.
///
/// System messages become the `systemInstruction` field; user and
/// assistant messages become conversation turns.
pub fn to_content_request(req: &GenerateRequest) -> GenerateContentRequest {
    let mut system_parts = Vec::new();
    let mut contents = Vec::new();

    for msg in req.messages() {
        match msg.role() {
            Role::System => system_parts.push(Part {
                text: msg.content().clone(),
            }),
            Role::User => contents.push(Content::user(msg.content().clone())),
            Role::Assistant => contents.push(Content::model(msg.content().clone())),
        }
    }

    let system_instruction = if system_parts.is_empty() {
        None
    } else {
        Some(Content {
            role: None,
            parts: system_parts,
        })
    };

    let generation_config = match (req.max_tokens(), req.temperature()) {
        (None, None) => None,
        (max_tokens, temperature) => Some(GenerationConfig {
            max_output_tokens: *max_tokens,
            temperature: *temperature,
        }),
    };

    GenerateContentRequest {
        contents,
        system_instruction,
        generation_config,
    }
}

/// Converts a Gemini response to a Missive GenerateResponse.
///
/// Each candidate contributes one output, its parts concatenated.
pub fn from_content_response(
    response: &GenerateContentResponse,
) -> Result<GenerateResponse, GeminiError> {
    if response.candidates.is_empty() {
        return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
    }

    let outputs = response
        .candidates
        .iter()
        .map(|candidate| {
            candidate
                .content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<String>()
        })
        .collect();

    Ok(GenerateResponse::new(outputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::Candidate;
    use missive_core::Message;

    #[test]
    fn system_messages_become_system_instruction() {
        let request = GenerateRequest::builder()
            .messages(vec![
                Message::system("Be professional."),
                Message::user("Write a reminder."),
            ])
            .build()
            .unwrap();

        let wire = to_content_request(&request);
        assert_eq!(
            wire.system_instruction.unwrap().parts[0].text,
            "Be professional."
        );
        assert_eq!(wire.contents.len(), 1);
        assert_eq!(wire.contents[0].role.as_deref(), Some("user"));
    }

    #[test]
    fn omits_generation_config_when_unset() {
        let wire = to_content_request(&GenerateRequest::from_prompt("hi"));
        assert!(wire.generation_config.is_none());
        assert!(wire.system_instruction.is_none());
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let response = GenerateContentResponse {
            candidates: vec![],
            usage_metadata: None,
        };
        let err = from_content_response(&response).unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::EmptyResponse);
    }

    #[test]
    fn candidate_parts_are_concatenated() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Content {
                    role: Some("model".to_string()),
                    parts: vec![
                        Part {
                            text: "Dear {name}, ".to_string(),
                        },
                        Part {
                            text: "welcome!".to_string(),
                        },
                    ],
                },
                finish_reason: Some("STOP".to_string()),
            }],
            usage_metadata: None,
        };

        let converted = from_content_response(&response).unwrap();
        assert_eq!(converted.text(), Some("Dear {name}, welcome!"));
    }
}
