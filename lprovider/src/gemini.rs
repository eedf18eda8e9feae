//! Gemini `generateContent` adapter over reqwest.

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use lcommon::{ChatTurn, Speaker};

use crate::{
    CompletionError, CompletionFuture, CompletionReply, CompletionRequest, CompletionService,
    SecretString, TokenUsage,
};

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug)]
pub struct GeminiService {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl GeminiService {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: GEMINI_BASE_URL.to_string(),
            api_key: SecretString::new(api_key),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn parse_error(response: Response) -> CompletionError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body)
            .unwrap_or_else(|| format!("completion request failed with status {status}"));

        classify_status(status, message)
    }
}

impl CompletionService for GeminiService {
    fn name(&self) -> &str {
        "gemini"
    }

    fn complete<'a>(
        &'a self,
        request: CompletionRequest,
    ) -> CompletionFuture<'a, Result<CompletionReply, CompletionError>> {
        Box::pin(async move {
            request.validate()?;
            let model = request.model.clone();
            let api_request = build_api_request(request);

            let response = self
                .client
                .post(self.endpoint(&model))
                .header("x-goog-api-key", self.api_key.expose())
                .json(&api_request)
                .send()
                .await
                .map_err(|err| {
                    if err.is_timeout() {
                        CompletionError::timeout(err.to_string())
                    } else {
                        CompletionError::transport(err.to_string())
                    }
                })?;

            if !response.status().is_success() {
                return Err(Self::parse_error(response).await);
            }

            let parsed: GeminiApiResponse = response
                .json()
                .await
                .map_err(|err| CompletionError::transport(err.to_string()))?;

            reply_from_response(model, parsed)
        })
    }
}

fn classify_status(status: StatusCode, message: String) -> CompletionError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            CompletionError::authentication(message)
        }
        StatusCode::TOO_MANY_REQUESTS => CompletionError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            CompletionError::timeout(message)
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            CompletionError::invalid_request(message)
        }
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => {
            CompletionError::unavailable(message)
        }
        _ => CompletionError::transport(message),
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

fn build_api_request(request: CompletionRequest) -> GeminiApiRequest {
    let mut contents: Vec<GeminiContent> =
        request.history.iter().map(GeminiContent::from_turn).collect();
    contents.push(GeminiContent::user(&request.user_message));

    GeminiApiRequest {
        system_instruction: request
            .system_instruction
            .map(|text| GeminiContent::bare(&text)),
        contents,
    }
}

fn reply_from_response(
    model: String,
    response: GeminiApiResponse,
) -> Result<CompletionReply, CompletionError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::other("completion reply had no candidates"))?;

    let text = candidate
        .content
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect::<Vec<_>>()
        .join("");

    let usage = response
        .usage_metadata
        .map(|usage| TokenUsage {
            input_tokens: usage.prompt_token_count,
            output_tokens: usage.candidates_token_count,
            total_tokens: usage.total_token_count,
        })
        .unwrap_or_default();

    Ok(CompletionReply { model, text, usage })
}

#[derive(Debug, Serialize)]
struct GeminiApiRequest {
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

impl GeminiContent {
    fn from_turn(turn: &ChatTurn) -> Self {
        let role = match turn.speaker {
            Speaker::User => "user",
            Speaker::Model => "model",
        };

        Self {
            role: Some(role.to_string()),
            parts: vec![GeminiPart {
                text: turn.text.clone(),
            }],
        }
    }

    fn user(text: &str) -> Self {
        Self::from_turn(&ChatTurn::user(text))
    }

    fn bare(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![GeminiPart {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiApiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(rename = "usageMetadata", default)]
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Debug, Deserialize)]
struct GeminiUsage {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u32,
    #[serde(rename = "totalTokenCount", default)]
    total_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompletionErrorKind;

    #[test]
    fn api_request_carries_history_roles_and_user_message() {
        let request = CompletionRequest::new("gemini-2.5-flash", "next question")
            .with_system_instruction("be brief")
            .with_history(vec![ChatTurn::user("hi"), ChatTurn::model("hello")]);

        let api_request = build_api_request(request);
        let value = serde_json::to_value(&api_request).expect("request should serialize");

        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "be brief");
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][1]["role"], "model");
        assert_eq!(value["contents"][2]["parts"][0]["text"], "next question");
    }

    #[test]
    fn system_instruction_is_omitted_when_absent() {
        let api_request = build_api_request(CompletionRequest::new("gemini-2.5-flash", "hi"));
        let value = serde_json::to_value(&api_request).expect("request should serialize");
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn status_codes_map_onto_error_kinds() {
        let cases = [
            (StatusCode::UNAUTHORIZED, CompletionErrorKind::Authentication),
            (StatusCode::FORBIDDEN, CompletionErrorKind::Authentication),
            (StatusCode::TOO_MANY_REQUESTS, CompletionErrorKind::RateLimited),
            (StatusCode::REQUEST_TIMEOUT, CompletionErrorKind::Timeout),
            (StatusCode::GATEWAY_TIMEOUT, CompletionErrorKind::Timeout),
            (StatusCode::BAD_REQUEST, CompletionErrorKind::InvalidRequest),
            (StatusCode::SERVICE_UNAVAILABLE, CompletionErrorKind::Unavailable),
            (StatusCode::INTERNAL_SERVER_ERROR, CompletionErrorKind::Transport),
        ];

        for (status, kind) in cases {
            assert_eq!(classify_status(status, "boom".to_string()).kind, kind);
        }
    }

    #[test]
    fn error_message_is_extracted_from_error_body() {
        let body = r#"{"error":{"code":401,"message":"API key not valid"}}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("API key not valid")
        );
        assert_eq!(extract_error_message("not json"), None);
    }

    #[test]
    fn reply_joins_candidate_parts_and_maps_usage() {
        let response: GeminiApiResponse = serde_json::from_str(
            r#"{
                "candidates": [{"content": {"role": "model", "parts": [{"text": "Hello "}, {"text": "there."}]}}],
                "usageMetadata": {"promptTokenCount": 5, "candidatesTokenCount": 3, "totalTokenCount": 8}
            }"#,
        )
        .expect("response should parse");

        let reply = reply_from_response("gemini-2.5-flash".to_string(), response)
            .expect("reply should build");
        assert_eq!(reply.text, "Hello there.");
        assert_eq!(reply.usage.total_tokens, 8);
    }

    #[test]
    fn empty_candidates_become_an_error() {
        let response: GeminiApiResponse =
            serde_json::from_str(r#"{"candidates": []}"#).expect("response should parse");
        let error = reply_from_response("gemini-2.5-flash".to_string(), response)
            .expect_err("empty candidates should fail");
        assert_eq!(error.kind, CompletionErrorKind::Other);
    }
}
