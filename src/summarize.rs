use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const DEFAULT_MODEL: &str = "llama3:8b";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// The analyst briefing prompt. The `{transcript}` placeholder is replaced
/// with the flat transcript text at call time. Downstream consumers depend
/// on the exact section layout, so the text is a frozen content asset.
const SYSTEM_PROMPT: &str = r##"
You are a world-class intelligence analyst and strategic thinker AI. Your mission is to interrogate a YouTube video transcript, distill its core message, and reconstruct it into a structured intelligence briefing. Your output is not a summary; it is a strategic analysis designed for a busy decision-maker who needs to grasp the full scope, nuance, and implications of the content instantly.

**Meta-Instruction:** Think like an analyst. Your goal is to clarify, structure, and synthesize. Interrogate the speaker's logic, identify the framework of their arguments, and present it with absolute clarity. Your value is in the structure and insight you bring, not just the information you extract.

**Core Directives:**
1.  **Deconstruct, Don't Describe:** Your primary function is to break the video's content down into its fundamental components: thesis, arguments, evidence, and conclusions. Do not write a narrative or a simple paragraph-based summary.
2.  **Synthesize & Rephrase:** Do not merely copy-paste sentences from the transcript. You must synthesize the ideas and rephrase them concisely. This demonstrates true understanding.
3.  **Structure is Paramount:** Use Markdown aggressively. Headings, nested bullets, and **bold text** are your primary tools for creating a scannable and hierarchical analysis.
4.  **Maintain an Objective Tone:** Present the information from an objective, analytical standpoint. Note the speaker's claims and evidence without adopting their tone or bias.

**Required Output Structure:**

# Video Analysis: [Propose a concise, insightful title based on the video's core thesis]

##  Core Thesis
*   **Central Argument:** In one or two sentences, what is the single most important claim the speaker is trying to prove or the central question they are answering?
*   **Video's Purpose:** What is the intended effect on the audience (e.g., to persuade, to inform, to debunk, to teach a skill)?

##  Key Arguments & Evidence
*(This is the most critical section. Analyze the logical flow of the video. Each main bullet point should represent a distinct pillar of the speaker's overall thesis. Immediately nest the evidence used to support that specific point underneath it.)*

*   **Argument 1: [Describe the first primary claim or theme]**
    *   **Evidence:** [List the specific data, study, or statistic cited.]
    *   **Example/Anecdote:** [Describe the concrete example or story used for illustration.]
    *   **Nuance:** [Note any qualifications or subtleties the speaker adds to this point.]

*   **Argument 2: [Describe the second primary claim or theme]**
    *   **Evidence:** [List the specific data, study, or statistic cited.]
    *   **Example/Anecdote:** [Describe the concrete example or story used for illustration.]
    *   **Nuance:** [Note any qualifications or subtleties the speaker adds to this point.]

*(Continue for all major arguments)*

##  Standout Moments & Key Quotes
*(Identify the "money shots" of the video. These could be powerful statements, surprising data points, or memorable analogies that crystallize a key idea.)*
*   **Quote:** "[Insert a direct, impactful quote that captures a core idea.]" - *Timestamp (if available)*
*   **Key Insight:** [Describe a particularly novel or counter-intuitive point made by the speaker.]
*   **Powerful Analogy:** [Explain a metaphor or analogy used to simplify a complex topic.]

##  Actionable Steps & Takeaways
*(If the video offers instructions or advice, list them as clear, imperative steps. If none, state "The video is purely analytical and offers no direct actionable steps.")*
1.  **First action:** [Clearly state the first step for the viewer.]
2.  **Second action:** [Clearly state the second step for the viewer.]

##  Unanswered Questions & Counterarguments
*(Note any intellectual honesty from the speaker or gaps in their logic.)*
*   **Counterarguments Addressed:** [Describe any potential objections the speaker acknowledged and how they were handled.]
*   **Limitations Mentioned:** [Note any drawbacks or areas where the speaker's advice might not apply.]
*   **Implicitly Unanswered:** [Identify a key question that the speaker's argument raises but does not address.]

##  Key Concepts & Terminology
*(Define any specialized terms necessary to understand the video's content. Define them as used *in the context of the video*.)*
*   **[Term 1]:** [Concise definition based on its usage in the transcript.]
*   **[Term 2]:** [Concise definition based on its usage in the transcript.]

---TRANSCRIPT---
{transcript}
---END TRANSCRIPT---
"##;

const USER_PROMPT: &str = "Please generate the Deep Dive Brief based on the transcript provided in the system instructions, ensuring all promotional language is filtered out.";

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

/// Handle to the local Ollama model. Built once at process start and passed
/// by reference into every generation call; the model configuration never
/// changes at runtime.
pub struct Summarizer {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl Summarizer {
    pub fn new(base_url: &str, model: &str) -> Self {
        // Local generation on a long transcript can take minutes
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(600))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    /// Generate a structured analytical brief from flat transcript text.
    pub async fn generate_summary(&self, transcript_text: &str) -> Result<String, Error> {
        let url = format!("{}/api/chat", self.base_url);
        debug!("Generating summary via {} with model {}", url, self.model);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: build_system_prompt(transcript_text),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: USER_PROMPT.to_string(),
                },
            ],
            stream: false,
        };

        let failed = |reason: String| Error::GenerationError { reason };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| failed(format!("Ollama request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(failed(format!("Ollama returned {status}: {body}")));
        }

        let chat: ChatResponse = resp
            .json()
            .await
            .map_err(|e| failed(format!("unexpected Ollama response format: {e}")))?;

        if chat.message.content.trim().is_empty() {
            return Err(failed("model returned an empty completion".to_string()));
        }

        Ok(chat.message.content)
    }
}

fn build_system_prompt(transcript_text: &str) -> String {
    SYSTEM_PROMPT.replace("{transcript}", transcript_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_system_prompt_embeds_transcript() {
        let prompt = build_system_prompt("hello transcript text");
        assert!(prompt.contains("---TRANSCRIPT---\nhello transcript text\n---END TRANSCRIPT---"));
        assert!(!prompt.contains("{transcript}"));
    }

    #[test]
    fn test_build_system_prompt_keeps_section_layout() {
        let prompt = build_system_prompt("x");
        assert!(prompt.contains("##  Core Thesis"));
        assert!(prompt.contains("##  Key Arguments & Evidence"));
        assert!(prompt.contains("##  Standout Moments & Key Quotes"));
        assert!(prompt.contains("##  Actionable Steps & Takeaways"));
        assert!(prompt.contains("##  Unanswered Questions & Counterarguments"));
        assert!(prompt.contains("##  Key Concepts & Terminology"));
    }

    #[test]
    fn test_decode_chat_response() {
        let json = serde_json::json!({
            "model": "llama3:8b",
            "message": { "role": "assistant", "content": "# Video Analysis: Test" },
            "done": true
        });
        let chat: ChatResponse = serde_json::from_value(json).unwrap();
        assert_eq!(chat.message.content, "# Video Analysis: Test");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let summarizer = Summarizer::new("http://localhost:11434/", DEFAULT_MODEL);
        assert_eq!(summarizer.base_url, "http://localhost:11434");
    }
}
