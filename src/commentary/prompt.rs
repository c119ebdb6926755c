use serde::{Deserialize, Serialize};

use crate::commentary::persona::Persona;
use crate::extractor::Digest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Everything the generator needs for one commentary.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentaryRequest {
    pub persona: Persona,
    pub content_sample: String,
    pub digest: Digest,
}

impl CommentaryRequest {
    pub fn new(persona: Persona, digest: Digest) -> Self {
        Self {
            persona,
            content_sample: digest.content_sample(),
            digest,
        }
    }

    /// System prompt from the persona table, then the digest as the user turn.
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.persona.config().system_prompt),
            ChatMessage::user(format!(
                "Analyze this website using the following information:\n\n{}\n\nContent Sample:\n{}",
                self.metadata_block(),
                self.content_sample
            )),
        ]
    }

    fn metadata_block(&self) -> String {
        format!(
            "Website Analysis:\n- Type: {}\n- Key Elements: {}\n- Main Headings: {}\n- Content Samples: {}",
            self.digest.category,
            pretty_list(&self.digest.type_specific.elements),
            pretty_list(&self.digest.content.headings),
            pretty_list(&self.digest.content.main_content),
        )
    }
}

fn pretty_list(items: &[String]) -> String {
    serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
}
