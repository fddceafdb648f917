use mindwell_core::language::Language;
use mindwell_core::models::assessment::RiskLevel;
use mindwell_risk::RiskScorer;
use serde::Serialize;

/// Phrases that read as diagnosis, prescription or treatment instructions.
const MEDICAL_ADVICE_EN: &[&str] = &[
    "prescribe",
    "medication",
    "drug",
    "pill",
    "dosage",
    "take this medicine",
    "diagnosis",
    "diagnose",
    "you have",
    "you are suffering from",
    "treatment plan",
    "therapy technique",
    "exercise this way",
    "you should take",
    "recommend you take",
    "try this medication",
];

const MEDICAL_ADVICE_SI: &[&str] = &[
    "වෛද්‍ය",
    "ඖෂධ",
    "ගත යුතු",
    "නිර්දේශ",
    "රෝග විනිශ්චය",
    "ප්‍රතිකාර",
    "ඔබට ඇති",
    "ඔබ පෙළෙනවා",
];

const MEDICAL_ADVICE_TA: &[&str] = &[
    "மருந்து",
    "மாத்திரை",
    "சிகிச்சை",
    "நோயறிதல்",
    "உங்களுக்கு உள்ளது",
    "நீங்கள் பாதிக்கப்பட்டுள்ளீர்கள்",
];

/// Dismissive phrasing that minimizes what the user is going through.
const HARMFUL_EN: &[&str] = &[
    "just ignore it",
    "it's all in your head",
    "snap out of it",
    "you're being dramatic",
    "others have it worse",
    "get over it",
];

const HARMFUL_SI: &[&str] = &["එය නොසලකා හරින්න", "එය සියල්ල හිසේ", "එයින් ඉවත් වන්න"];

const HARMFUL_TA: &[&str] = &["அதை புறக்கணிக்க", "அது எல்லாம் உங்கள் தலையில்", "வெளியேற"];

fn medical_advice(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => MEDICAL_ADVICE_EN,
        Language::Si => MEDICAL_ADVICE_SI,
        Language::Ta => MEDICAL_ADVICE_TA,
    }
}

fn harmful(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => HARMFUL_EN,
        Language::Si => HARMFUL_SI,
        Language::Ta => HARMFUL_TA,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SafetyViolation {
    #[error("text contains medical advice phrasing {phrase:?}")]
    MedicalAdvice { phrase: &'static str },

    #[error("text contains harmful phrasing {phrase:?}")]
    Harmful { phrase: &'static str },
}

/// Screens outgoing text against the deny-lists for `language` and for
/// English, since English phrases turn up in mixed-language text.
pub fn check_template(text: &str, language: Language) -> Result<(), SafetyViolation> {
    let lowered = text.to_lowercase();

    if let Some(phrase) = find_phrase(&lowered, language, medical_advice) {
        return Err(SafetyViolation::MedicalAdvice { phrase });
    }
    if let Some(phrase) = find_phrase(&lowered, language, harmful) {
        return Err(SafetyViolation::Harmful { phrase });
    }
    Ok(())
}

fn find_phrase(
    lowered: &str,
    language: Language,
    list: fn(Language) -> &'static [&'static str],
) -> Option<&'static str> {
    let english: &[&str] = if language == Language::En {
        &[]
    } else {
        list(Language::En)
    };
    list(language)
        .iter()
        .chain(english)
        .copied()
        .find(|phrase| lowered.contains(phrase))
}

/// Safety flags for one incoming user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafetyReport {
    pub is_crisis: bool,
    pub has_medical_advice: bool,
    pub has_harmful_content: bool,
    pub needs_escalation: bool,
    pub risk_level: RiskLevel,
}

/// Flags a user message for crisis language, medical-advice talk and
/// dismissive phrasing. Only a crisis match requires escalation.
pub fn analyze_message_safety(scorer: &RiskScorer, text: &str, language: Language) -> SafetyReport {
    let is_crisis = scorer.crisis_detector().is_crisis(text);
    let lowered = text.to_lowercase();
    let has_medical_advice = find_phrase(&lowered, language, medical_advice).is_some();
    let has_harmful_content = find_phrase(&lowered, language, harmful).is_some();

    let risk_level = if is_crisis {
        RiskLevel::Severe
    } else if has_medical_advice || has_harmful_content {
        RiskLevel::High
    } else {
        RiskLevel::Low
    };

    SafetyReport {
        is_crisis,
        has_medical_advice,
        has_harmful_content,
        needs_escalation: is_crisis,
        risk_level,
    }
}
