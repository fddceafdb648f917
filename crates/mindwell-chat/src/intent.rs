use std::fmt;

use serde::{Deserialize, Serialize};

/// Conversational intents the template table covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    HelpRequest,
    Sadness,
    Anxiety,
    Loneliness,
    Sleep,
    Gratitude,
    Greeting,
    Farewell,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::HelpRequest => "help_request",
            Intent::Sadness => "sadness",
            Intent::Anxiety => "anxiety",
            Intent::Loneliness => "loneliness",
            Intent::Sleep => "sleep",
            Intent::Gratitude => "gratitude",
            Intent::Greeting => "greeting",
            Intent::Farewell => "farewell",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keywords per intent, in priority order: the first intent with a hit
/// wins, so distress intents are listed before small talk.
///
/// Multi-word keywords match as substrings. Single words must equal a
/// token, or start one for Sinhala and Tamil where suffixes attach to the
/// stem.
const KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::HelpRequest,
        &[
            "need help",
            "help me",
            "talk to someone",
            "counselor",
            "counsellor",
            "can you help",
            "උදව්",
            "உதவி",
        ],
    ),
    (
        Intent::Sadness,
        &[
            "sad",
            "down",
            "depressed",
            "unhappy",
            "hopeless",
            "crying",
            "cry",
            "miserable",
            "දුක",
            "சோகம்",
            "சோகமாக",
        ],
    ),
    (
        Intent::Anxiety,
        &[
            "anxious",
            "anxiety",
            "worried",
            "worry",
            "nervous",
            "panic",
            "stressed",
            "stress",
            "scared",
            "බය",
            "பயம்",
            "பயமாக",
            "கவலை",
        ],
    ),
    (
        Intent::Loneliness,
        &[
            "lonely",
            "alone",
            "no friends",
            "isolated",
            "nobody",
            "තනිකම",
            "තනියම",
            "தனிமை",
            "தனியாக",
        ],
    ),
    (
        Intent::Sleep,
        &["sleep", "insomnia", "awake", "nightmares", "tired", "නින්ද", "தூக்கம்"],
    ),
    (
        Intent::Gratitude,
        &["thanks", "thank you", "thank", "appreciate", "ස්තුතියි", "நன்றி"],
    ),
    (
        Intent::Greeting,
        &["hello", "hi", "hey", "good morning", "good evening", "ආයුබෝවන්", "හෙලෝ", "வணக்கம்"],
    ),
    (
        Intent::Farewell,
        &["bye", "goodbye", "see you", "good night", "ගිහින් එන්නම්", "போய் வருகிறேன்"],
    ),
];

/// Classify a message by keyword. Returns `None` when nothing matches.
pub fn classify(message: &str) -> Option<Intent> {
    let lowered = message.to_lowercase();
    let tokens = mindwell_risk::text::tokenize(&lowered);

    KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| matches_keyword(&lowered, &tokens, k)))
        .map(|(intent, _)| *intent)
}

fn matches_keyword(lowered: &str, tokens: &[String], keyword: &str) -> bool {
    if keyword.contains(' ') {
        return lowered.contains(keyword);
    }
    if keyword.is_ascii() {
        tokens.iter().any(|t| t == keyword)
    } else {
        tokens.iter().any(|t| t.starts_with(keyword))
    }
}
