//! Word lists behind the text heuristics. English lists are the fullest;
//! Sinhala and Tamil lists cover common stems only.

/// Depression-associated keywords, matched as substrings.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "sad",
    "depressed",
    "hopeless",
    "worthless",
    "tired",
    "empty",
    "death",
    "pain",
    "lonely",
    "anxious",
    "worried",
    "exhausted",
    "numb",
    "දුක",
    "තනිකම",
    "මහන්සි",
    "බලාපොරොත්තු රහිත",
    "සෝකය",
    "சோகம்",
    "தனிமை",
    "சோர்வு",
    "கவலை",
    "நம்பிக்கையின்மை",
];

/// Tokens counted as negative polarity.
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "sad",
    "awful",
    "terrible",
    "horrible",
    "miserable",
    "hate",
    "cry",
    "crying",
    "hurt",
    "alone",
    "lonely",
    "hopeless",
    "worthless",
    "useless",
    "failure",
    "tired",
    "empty",
    "worse",
    "worst",
    "afraid",
    "scared",
    "angry",
    "guilty",
    "දුකයි",
    "බයයි",
    "තනියම",
    "சோகமாக",
    "பயமாக",
    "தனியாக",
];

/// Tokens counted as positive polarity.
pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "happy",
    "glad",
    "better",
    "fine",
    "calm",
    "hopeful",
    "excited",
    "love",
    "enjoy",
    "enjoyed",
    "grateful",
    "relaxed",
    "proud",
    "okay",
    "ok",
    "හොඳයි",
    "සතුටුයි",
    "සතුටින්",
    "நன்றாக",
    "மகிழ்ச்சி",
    "சந்தோஷம்",
];

/// First-person singular pronouns.
pub const FIRST_PERSON: &[&str] = &[
    "i", "me", "my", "mine", "myself", "im", "i'm", "i've", "i'd", "i'll",
    "මම", "මට", "මගේ", "මාව",
    "நான்", "என்", "எனக்கு", "என்னை",
];

/// All-or-nothing words.
pub const ABSOLUTIST: &[&str] = &[
    "always",
    "never",
    "nothing",
    "everything",
    "completely",
    "totally",
    "entirely",
    "constantly",
    "nobody",
    "everyone",
    "whole",
    "forever",
];
