use std::collections::BTreeMap;

use mindwell_core::language::Language;
use mindwell_core::models::assessment::{RiskLevel, SeverityTier};
use serde::{Deserialize, Serialize};

use crate::error::InstrumentError;
use crate::scoring::{Domain, ScoreEntry, ScoreRange, ScoreType, Subscale, ValidationError};
use crate::Instrument;

pub const ITEM_COUNT: usize = 9;
pub const MAX_RAW_SCORE: u8 = 27;
/// "Thoughts that you would be better off dead, or of hurting yourself."
pub const SELF_HARM_QUESTION: u8 = 9;

const ITEM_RANGE: ScoreRange = ScoreRange {
    min: 0.0,
    max: 3.0,
    step: Some(1.0),
};

/// PHQ-9: Patient Health Questionnaire, nine items.
/// Each item rated 0–3 over the last two weeks. Total 0–27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let items = [
                ("q1", "Little interest or pleasure"),
                ("q2", "Feeling down, depressed, or hopeless"),
                ("q3", "Sleep problems"),
                ("q4", "Tired or little energy"),
                ("q5", "Poor appetite or overeating"),
                ("q6", "Feeling bad about yourself"),
                ("q7", "Trouble concentrating"),
                ("q8", "Moving or speaking slowly, or restlessness"),
                ("q9", "Thoughts of being better off dead or of self-harm"),
            ];

            let subscales: Vec<Subscale> = items
                .iter()
                .map(|(id, name)| Subscale {
                    id: id.to_string(),
                    name: name.to_string(),
                    score_type: ScoreType::Rating,
                    range: ITEM_RANGE,
                    description: None,
                })
                .collect();

            vec![Domain {
                id: "phq9_items".to_string(),
                name: "PHQ-9 Items".to_string(),
                subscales,
                composite_score_type: Some(ScoreType::Raw),
                composite_range: Some(ScoreRange {
                    min: 0.0,
                    max: MAX_RAW_SCORE as f64,
                    step: Some(1.0),
                }),
                description: Some(
                    "0-4 minimal, 5-9 mild, 10-14 moderate, 15-19 moderately severe, 20-27 severe"
                        .to_string(),
                ),
            }]
        });
        &DOMAINS
    }
}

/// The nine answers of one completed PHQ-9, in question order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    pub answers: Vec<u8>,
}

impl QuestionnaireResponse {
    pub fn new(answers: impl Into<Vec<u8>>) -> Self {
        Self {
            answers: answers.into(),
        }
    }

    /// Assemble a response from answers keyed by question number (1–9),
    /// as collected one question at a time during a chat session.
    pub fn from_numbered(answers: &BTreeMap<u8, u8>) -> Result<Self, ValidationError> {
        let mut ordered = Vec::with_capacity(ITEM_COUNT);
        for number in 1..=ITEM_COUNT as u8 {
            let answer = answers.get(&number).ok_or_else(|| {
                ValidationError::new(format!("q{number}"), format!("question {number} is missing"))
            })?;
            ordered.push(*answer);
        }
        if let Some(extra) = answers.keys().find(|n| !(1..=ITEM_COUNT as u8).contains(n)) {
            return Err(ValidationError::new(
                format!("q{extra}"),
                format!("question {extra} does not exist"),
            ));
        }
        Ok(Self { answers: ordered })
    }

    /// Answer to the self-harm question, if present.
    pub fn self_harm_answer(&self) -> Option<u8> {
        self.answers.get(SELF_HARM_QUESTION as usize - 1).copied()
    }
}

/// Lowest raw score of each tier above minimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityBreakpoints {
    pub mild: u8,
    pub moderate: u8,
    pub moderately_severe: u8,
    pub severe: u8,
}

impl Default for SeverityBreakpoints {
    fn default() -> Self {
        Self {
            mild: 5,
            moderate: 10,
            moderately_severe: 15,
            severe: 20,
        }
    }
}

impl SeverityBreakpoints {
    pub fn tier(&self, raw_score: u8) -> SeverityTier {
        if raw_score >= self.severe {
            SeverityTier::Severe
        } else if raw_score >= self.moderately_severe {
            SeverityTier::ModeratelySevere
        } else if raw_score >= self.moderate {
            SeverityTier::Moderate
        } else if raw_score >= self.mild {
            SeverityTier::Mild
        } else {
            SeverityTier::Minimal
        }
    }

    /// Lowest raw score that lands in `tier`.
    pub fn lower_bound(&self, tier: SeverityTier) -> u8 {
        match tier {
            SeverityTier::Minimal => 0,
            SeverityTier::Mild => self.mild,
            SeverityTier::Moderate => self.moderate,
            SeverityTier::ModeratelySevere => self.moderately_severe,
            SeverityTier::Severe => self.severe,
        }
    }

    /// Breakpoints must be strictly increasing and inside the score range,
    /// otherwise some tier would be unreachable.
    pub fn is_well_formed(&self) -> bool {
        SeverityTier::ALL
            .windows(2)
            .all(|pair| self.lower_bound(pair[0]) < self.lower_bound(pair[1]))
            && self.severe <= MAX_RAW_SCORE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phq9Interpretation {
    pub raw_score: u8,
    pub severity: SeverityTier,
    pub risk_level: RiskLevel,
    pub recommendation: String,
}

impl Phq9 {
    /// Validate a response and return its raw sum.
    pub fn raw_score(&self, response: &QuestionnaireResponse) -> Result<u8, ValidationError> {
        if response.answers.len() != ITEM_COUNT {
            return Err(ValidationError {
                field: "answers".to_string(),
                value: Some(response.answers.len() as f64),
                expected_range: None,
                message: format!(
                    "PHQ-9 requires exactly {ITEM_COUNT} answers, got {}",
                    response.answers.len()
                ),
            });
        }

        let entries: Vec<ScoreEntry> = response
            .answers
            .iter()
            .enumerate()
            .map(|(i, answer)| ScoreEntry {
                subscale_id: format!("q{}", i + 1),
                value: *answer as f64,
            })
            .collect();

        if let Some(error) = self.validate_scores(&entries).into_iter().next() {
            return Err(error);
        }

        Ok(response.answers.iter().sum())
    }

    pub fn interpret(
        &self,
        raw_score: u8,
        breakpoints: &SeverityBreakpoints,
    ) -> Phq9Interpretation {
        let severity = breakpoints.tier(raw_score);
        Phq9Interpretation {
            raw_score,
            severity,
            risk_level: severity.risk_level(),
            recommendation: recommendation(severity).to_string(),
        }
    }

    pub fn question(
        &self,
        number: u8,
        language: Language,
    ) -> Result<&'static str, InstrumentError> {
        if !(1..=ITEM_COUNT as u8).contains(&number) {
            return Err(InstrumentError::UnknownQuestion {
                instrument_id: self.id().to_string(),
                number,
            });
        }
        let table = match language {
            Language::En => &QUESTIONS_EN,
            Language::Si => &QUESTIONS_SI,
            Language::Ta => &QUESTIONS_TA,
        };
        Ok(table[number as usize - 1])
    }

    pub fn answer_options(&self, language: Language) -> &'static [&'static str; 4] {
        match language {
            Language::En => &OPTIONS_EN,
            Language::Si => &OPTIONS_SI,
            Language::Ta => &OPTIONS_TA,
        }
    }

    /// Question text followed by the numbered answer options, one per line.
    pub fn format_question_with_options(
        &self,
        number: u8,
        language: Language,
    ) -> Result<String, InstrumentError> {
        let question = self.question(number, language)?;
        let options = self
            .answer_options(language)
            .iter()
            .enumerate()
            .map(|(score, text)| format!("{score}. {text}"))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(format!("{question}\n\n{options}"))
    }

    /// Number of the question after `current`, or `None` once the last
    /// question has been asked.
    pub fn next_question(&self, current: u8) -> Option<u8> {
        (current < ITEM_COUNT as u8).then_some(current + 1)
    }

    pub fn is_complete(&self, answers: &BTreeMap<u8, u8>) -> bool {
        (1..=ITEM_COUNT as u8).all(|n| answers.contains_key(&n))
    }
}

/// Parse a typed answer into an item score.
///
/// Accepts the digits 0–3 or a frequency phrase in English, Sinhala or
/// Tamil, or a plain "no". Phrases are tried longest first so "nearly
/// every day" is not read as a shorter phrase it contains. Returns `None`
/// when nothing matches.
pub fn parse_answer(answer: &str) -> Option<u8> {
    let answer = answer.trim().to_lowercase();

    if let Ok(score) = answer.parse::<u8>() {
        return (score <= 3).then_some(score);
    }

    static PHRASES: std::sync::LazyLock<Vec<(&'static str, u8)>> = std::sync::LazyLock::new(|| {
        let mut phrases: Vec<(&'static str, u8)> = ANSWER_PHRASES.to_vec();
        phrases.sort_by_key(|(phrase, _)| std::cmp::Reverse(phrase.chars().count()));
        phrases
    });

    PHRASES
        .iter()
        .find(|(phrase, _)| answer.contains(phrase))
        .map(|(_, score)| *score)
        .or_else(|| {
            answer
                .split(|c: char| !c.is_alphanumeric())
                .any(|word| NO_WORDS.contains(&word))
                .then_some(0)
        })
}

/// Bare refusals read as "not at all". Matched as whole words only, so
/// "not" or "know" never count.
const NO_WORDS: &[&str] = &["no", "nope"];

pub fn recommendation(severity: SeverityTier) -> &'static str {
    match severity {
        SeverityTier::Minimal => {
            "Your responses suggest minimal depression symptoms. Continue monitoring your mental health."
        }
        SeverityTier::Mild => {
            "Your responses suggest mild depression. Consider speaking with a mental health professional."
        }
        SeverityTier::Moderate => {
            "Your responses suggest moderate depression. We recommend speaking with a mental health professional or calling 1926."
        }
        SeverityTier::ModeratelySevere => {
            "Your responses suggest moderately severe depression. Please consider immediate support. Call 1926 or speak with a mental health professional."
        }
        SeverityTier::Severe => {
            "Your responses suggest severe depression. Please seek immediate support. Call 1926 now or contact a mental health professional urgently."
        }
    }
}

const ANSWER_PHRASES: &[(&str, u8)] = &[
    ("not at all", 0),
    ("never", 0),
    ("none", 0),
    ("several days", 1),
    ("some days", 1),
    ("sometimes", 1),
    ("few", 1),
    ("more than half", 2),
    ("half", 2),
    ("often", 2),
    ("frequently", 2),
    ("nearly every day", 3),
    ("every day", 3),
    ("daily", 3),
    ("always", 3),
    ("most days", 3),
    ("කිසිසේත් නැත", 0),
    ("නැත", 0),
    ("දින කිහිපයක්", 1),
    ("සමහර දින", 1),
    ("දින අඩකට වඩා", 2),
    ("බොහෝ විට", 2),
    ("දිනපතාම", 3),
    ("සැමදා", 3),
    ("இல்லை", 0),
    ("ஒருபோதும்", 0),
    ("சில நாட்கள்", 1),
    ("சில", 1),
    ("பாதிக்கும் மேற்பட்ட", 2),
    ("பெரும்பாலும்", 2),
    ("கிட்டத்தட்ட ஒவ்வொரு நாளும்", 3),
    ("ஒவ்வொரு நாளும்", 3),
];

const QUESTIONS_EN: [&str; ITEM_COUNT] = [
    "Over the last 2 weeks, how often have you had little interest or pleasure in doing things?",
    "Over the last 2 weeks, how often have you felt down, depressed, or hopeless?",
    "Over the last 2 weeks, how often have you had trouble falling or staying asleep, or sleeping too much?",
    "Over the last 2 weeks, how often have you felt tired or had little energy?",
    "Over the last 2 weeks, how often have you had poor appetite or overeating?",
    "Over the last 2 weeks, how often have you felt bad about yourself or that you are a failure?",
    "Over the last 2 weeks, how often have you had trouble concentrating on things?",
    "Over the last 2 weeks, how often have you been moving or speaking so slowly that others noticed, or the opposite - being so fidgety or restless that you have been moving around a lot?",
    "Over the last 2 weeks, how often have you had thoughts that you would be better off dead, or of hurting yourself?",
];

const QUESTIONS_SI: [&str; ITEM_COUNT] = [
    "අවසන් සති 2 කදී, කර්මාන්ත කිරීමට අඩු උනන්දුවක් හෝ සතුටක් තිබීම කොපමණ වාර ගණනක් ඔබට තිබුණාද?",
    "අවසන් සති 2 කදී, කොපමණ වාර ගණනක් ඔබට දුක්බර, කම්පනයට පත් හෝ බලාපොරොත්තු රහිත යැයි හැඟී ඇත්ද?",
    "අවසන් සති 2 කදී, නින්දට යාමට හෝ නින්දේ රැඳීමට අපහසුතාවයක් හෝ අධික නින්ද තිබීම කොපමණ වාර ගණනක් ඔබට තිබුණාද?",
    "අවසන් සති 2 කදී, කොපමණ වාර ගණනක් ඔබට වෙහෙසකාරී හෝ අඩු ශක්තියක් තිබීම හැඟී ඇත්ද?",
    "අවසන් සති 2 කදී, දුර්වල ආහාර රුචියක් හෝ අධික ආහාර ගැනීම කොපමණ වාර ගණනක් ඔබට තිබුණාද?",
    "අවසන් සති 2 කදී, ඔබ ගැන නරක හැඟීමක් හෝ ඔබ අසාර්ථකයෙක් යැයි හැඟීම කොපමණ වාර ගණනක් ඔබට තිබුණාද?",
    "අවසන් සති 2 කදී, දේවල් වලට අවධානය යොමු කිරීමේ අපහසුතාවයක් කොපමණ වාර ගණනක් ඔබට තිබුණාද?",
    "අවසන් සති 2 කදී, ඔබ එතරම් සෙමින් ගමන් කර හෝ කතා කර ඇති අතර අන් අය දැනගෙන ඇත, හෝ ප්රතිවිරුද්ධව - එතරම් කලබල වී හෝ නිශ්ශබ්ද වී ඇති අතර ඔබ බොහෝ ගමන් කර ඇත?",
    "අවසන් සති 2 කදී, ඔබ මිය යාම වඩා හොඳ වනු ඇතැයි හෝ ඔබවම රැවටීමේ සිතුවිලි කොපමණ වාර ගණනක් ඔබට තිබුණාද?",
];

const QUESTIONS_TA: [&str; ITEM_COUNT] = [
    "கடந்த 2 வாரங்களில், விஷயங்களைச் செய்வதில் சிறிது ஆர்வம் அல்லது மகிழ்ச்சி இருந்தது எத்தனை முறை?",
    "கடந்த 2 வாரங்களில், மனச்சோர்வு, மனச்சோர்வு அல்லது நம்பிக்கையின்மை உணர்ந்தது எத்தனை முறை?",
    "கடந்த 2 வாரங்களில், தூங்குவதில் அல்லது தூங்குவதில் சிக்கல், அல்லது அதிகமாக தூங்குவது எத்தனை முறை?",
    "கடந்த 2 வாரங்களில், சோர்வாக அல்லது குறைந்த ஆற்றல் இருந்தது எத்தனை முறை?",
    "கடந்த 2 வாரங்களில், மோசமான பசி அல்லது அதிகமாக சாப்பிடுவது எத்தனை முறை?",
    "கடந்த 2 வாரங்களில், உங்களைப் பற்றி மோசமாக உணர்ந்தது அல்லது நீங்கள் தோல்வியடைந்தவர் என்று எத்தனை முறை?",
    "கடந்த 2 வாரங்களில், விஷயங்களில் கவனம் செலுத்துவதில் சிக்கல் எத்தனை முறை?",
    "கடந்த 2 வாரங்களில், மற்றவர்கள் கவனித்த அளவுக்கு மெதுவாக அல்லது வேகமாக நகர்ந்தது அல்லது பேசியது எத்தனை முறை?",
    "கடந்த 2 வாரங்களில், நீங்கள் இறந்தால் நல்லது அல்லது உங்களைத் துன்புறுத்தும் எண்ணங்கள் எத்தனை முறை?",
];

const OPTIONS_EN: [&str; 4] = [
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];

const OPTIONS_SI: [&str; 4] = ["කිසිසේත් නැත", "දින කිහිපයක්", "දින අඩකට වඩා", "දිනපතාම"];

const OPTIONS_TA: [&str; 4] = [
    "இல்லை",
    "சில நாட்கள்",
    "பாதிக்கும் மேற்பட்ட நாட்கள்",
    "கிட்டத்தட்ட ஒவ்வொரு நாளும்",
];
