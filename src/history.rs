use crate::types::{Role, Turn};

/// A document the user sent together with the answer it received.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentEvent<'a> {
    pub request: &'a Turn,
    pub response: &'a Turn,
}

impl DocumentEvent<'_> {
    pub fn title(&self) -> &str {
        if self.request.text.trim().is_empty() {
            "Analyzed Document"
        } else {
            &self.request.text
        }
    }

    /// The answer with Markdown emphasis, headers and code ticks removed.
    pub fn preview(&self) -> String {
        self.response
            .text
            .chars()
            .filter(|c| !matches!(c, '#' | '*' | '`'))
            .collect()
    }
}

/// User turns with an attachment that were answered by the next turn, newest first.
pub fn document_history(turns: &[Turn]) -> Vec<DocumentEvent<'_>> {
    let mut events: Vec<_> = turns
        .windows(2)
        .filter_map(|pair| {
            let (request, response) = (&pair[0], &pair[1]);
            (request.role == Role::User && request.attachment.is_some() && response.role == Role::Model)
                .then_some(DocumentEvent { request, response })
        })
        .collect();
    events.reverse();
    events
}
