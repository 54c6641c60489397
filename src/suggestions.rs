/// What clicking a starter card does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuggestionAction {
    /// Put the prompt in the composer for the user to complete (e.g. attach a photo).
    Populate,
    /// Send the prompt right away.
    Send,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub icon: &'static str,
    pub title: &'static str,
    pub prompt: &'static str,
    pub action: SuggestionAction,
}

pub const SUGGESTIONS: &[Suggestion] = &[
    Suggestion {
        icon: "📄",
        title: "Analyze Lab Report",
        prompt: "I'm uploading my recent blood test results. Can you help me understand what they mean?",
        action: SuggestionAction::Populate,
    },
    Suggestion {
        icon: "📸",
        title: "Track Symptoms",
        prompt: "I have a rash on my arm. Here's a photo. What should I know about it?",
        action: SuggestionAction::Populate,
    },
    Suggestion {
        icon: "💊",
        title: "Medication Info",
        prompt: "I was prescribed Lisinopril 10mg. What does this medication do and what should I watch out for?",
        action: SuggestionAction::Send,
    },
    Suggestion {
        icon: "❓",
        title: "Health Question",
        prompt: "What does it mean when my doctor says I have elevated liver enzymes?",
        action: SuggestionAction::Send,
    },
];
