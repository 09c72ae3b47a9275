//! Conversion from pipeline requests to Gemini wire types.

use super::dto::{Content, GeminiRequest, GenerationParams, Part};
use ideablog_core::{GenerateRequest, Role};

/// Wire role for a conversation turn.
fn wire_role(role: Role) -> Option<&'static str> {
    match role {
        Role::User => Some("user"),
        Role::Assistant => Some("model"),
        Role::System => None,
    }
}

/// Build a `generateContent` body from a pipeline request.
///
/// System messages are folded into a single `systemInstruction`, in order.
pub(crate) fn to_gemini_request(req: &GenerateRequest) -> GeminiRequest {
    let mut system_parts = Vec::new();
    let mut contents = Vec::new();

    for message in &req.messages {
        match wire_role(message.role) {
            Some(role) => contents.push(Content {
                role: Some(role.to_string()),
                parts: vec![Part::text(message.content.clone())],
            }),
            None => system_parts.push(Part::text(message.content.clone())),
        }
    }

    let system_instruction = (!system_parts.is_empty()).then(|| Content {
        role: None,
        parts: system_parts,
    });

    let params = GenerationParams::from(req);
    let generation_config = (!params.is_empty()).then_some(params);

    GeminiRequest::new(contents, system_instruction, generation_config)
}

impl From<&GenerateRequest> for GenerationParams {
    fn from(req: &GenerateRequest) -> Self {
        let mut builder = GenerationParams::builder();
        if let Some(temperature) = req.temperature {
            builder.temperature(temperature);
        }
        if let Some(top_p) = req.top_p {
            builder.top_p(top_p);
        }
        if let Some(top_k) = req.top_k {
            builder.top_k(top_k);
        }
        if let Some(max_tokens) = req.max_tokens {
            builder.max_output_tokens(max_tokens);
        }
        if let Some(mime) = &req.response_mime_type {
            builder.response_mime_type(mime.clone());
        }
        // Every field has a default, so build cannot fail.
        builder.build().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideablog_core::{GenerationConfig, Message};
    use serde_json::json;

    #[test]
    fn system_turns_become_instruction() {
        let req = GenerateRequest::from_config(
            &GenerationConfig::style_default(),
            vec![
                Message::system("be terse"),
                Message::user("draft"),
                Message::assistant("post"),
            ],
        );

        let body = serde_json::to_value(to_gemini_request(&req)).unwrap();
        assert_eq!(body["systemInstruction"], json!({"parts": [{"text": "be terse"}]}));
        assert_eq!(
            body["contents"],
            json!([
                {"role": "user", "parts": [{"text": "draft"}]},
                {"role": "model", "parts": [{"text": "post"}]}
            ])
        );
        assert_eq!(body["generationConfig"]["topP"], json!(0.95f32));
        assert_eq!(body["generationConfig"]["topK"], 64);
    }

    #[test]
    fn bare_request_has_no_generation_config() {
        let req = GenerateRequest::prompt(&GenerationConfig::for_model("m"), "hi");
        let body = serde_json::to_value(to_gemini_request(&req)).unwrap();
        assert!(body.get("generationConfig").is_none());
        assert!(body.get("systemInstruction").is_none());
    }
}
