//! Conversation-to-request transformation.
//!
//! Within a request turn the inline-data part always precedes the text part, and
//! turns keep chronological order: the model pairs each image with the comment
//! adjacent to it.

use crate::types::{Attachment, Role, Turn};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProviderRequest {
    pub contents: Vec<RequestTurn>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestTurn {
    pub role: Role,
    pub parts: Vec<Part>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl From<&Attachment> for InlineData {
    fn from(attachment: &Attachment) -> Self {
        Self {
            mime_type: attachment.mime_type.clone(),
            data: attachment.data.clone(),
        }
    }
}

impl ProviderRequest {
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Number of inline-data parts across the whole request.
    pub fn inline_part_count(&self) -> usize {
        self.contents
            .iter()
            .flat_map(|turn| &turn.parts)
            .filter(|part| matches!(part, Part::InlineData { .. }))
            .count()
    }
}

/// Map prior history plus the new user input onto a provider request.
///
/// Every history turn yields one request turn; the new input is appended as a
/// final `user` turn. Empty text parts are still emitted.
pub fn build(history: &[Turn], new_text: &str, new_attachment: Option<&Attachment>) -> ProviderRequest {
    let mut contents = Vec::with_capacity(history.len() + 1);
    contents.extend(
        history
            .iter()
            .map(|turn| request_turn(turn.role, &turn.text, turn.attachment.as_ref())),
    );
    contents.push(request_turn(Role::User, new_text, new_attachment));
    ProviderRequest { contents }
}

fn request_turn(role: Role, text: &str, attachment: Option<&Attachment>) -> RequestTurn {
    let mut parts = Vec::with_capacity(2);
    if let Some(attachment) = attachment {
        parts.push(Part::InlineData {
            inline_data: attachment.into(),
        });
    }
    parts.push(Part::Text {
        text: text.to_string(),
    });
    RequestTurn { role, parts }
}
