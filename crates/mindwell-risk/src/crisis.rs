use mindwell_core::language::Language;
use serde::Serialize;

use crate::config::ScoringConfig;

/// Which configured keyword fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrisisMatch {
    pub language: Language,
    pub keyword: String,
}

/// Case-insensitive substring matcher over every language's crisis list.
///
/// Every list is checked regardless of the declared language, since users
/// mix languages within one message.
#[derive(Debug, Clone)]
pub struct CrisisDetector {
    keywords: Vec<(Language, String)>,
}

impl CrisisDetector {
    pub fn new(config: &ScoringConfig) -> Self {
        let keywords = config
            .crisis_keywords
            .iter()
            .flat_map(|(language, list)| {
                list.iter()
                    .map(move |keyword| (*language, keyword.trim().to_lowercase()))
            })
            .filter(|(_, keyword)| !keyword.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn detect(&self, text: &str) -> Option<CrisisMatch> {
        let lowered = text.to_lowercase();
        self.keywords
            .iter()
            .find(|(_, keyword)| lowered.contains(keyword.as_str()))
            .map(|(language, keyword)| CrisisMatch {
                language: *language,
                keyword: keyword.clone(),
            })
    }

    pub fn is_crisis(&self, text: &str) -> bool {
        self.detect(text).is_some()
    }
}

/// Fixed response sent instead of any template when a crisis keyword fires.
pub fn crisis_message(language: Language) -> &'static str {
    match language {
        Language::En => {
            "I'm very concerned about what you've shared. Your life has value. Please call 1926 immediately or go to your nearest hospital. You are not alone, and help is available."
        }
        Language::Si => {
            "ඔබ බෙදාගත් දේ ගැන මම බොහෝ කරදර වෙමි. ඔබේ ජීවිතයට වටිනාකමක් ඇත. කරුණාකර වහාම 1926 අමතන්න හෝ ඔබේ ආසන්නතම රෝහලට යන්න. ඔබ තනි නොවේ, සහාය ලබා ගත හැකිය."
        }
        Language::Ta => {
            "நீங்கள் பகிர்ந்ததைப் பற்றி நான் மிகவும் கவலைப்படுகிறேன். உங்கள் வாழ்க்கைக்கு மதிப்பு உள்ளது. தயவுசெய்து உடனடியாக 1926 ஐ அழையுங்கள் அல்லது உங்கள் அருகிலுள்ள மருத்துவமனைக்குச் செல்லுங்கள். நீங்கள் தனியாக இல்லை, உதவி கிடைக்கிறது."
        }
    }
}

/// Message shown when a case is escalated without a crisis keyword.
pub fn escalation_message(language: Language) -> &'static str {
    match language {
        Language::En => {
            "I'm concerned about your wellbeing. Let me connect you with a counselor. For immediate support, please call 1926."
        }
        Language::Si => {
            "මම ඔබේ යහපැවැත්ම ගැන කරදර වෙමි. මට ඔබව උපදේශකයෙකු සමඟ සම්බන්ධ කිරීමට ඉඩ දෙන්න. වහාම සහාය සඳහා, කරුණාකර 1926 අමතන්න."
        }
        Language::Ta => {
            "உங்கள் நல்வாழ்வு குறித்து நான் கவலைப்படுகிறேன். உங்களை ஒரு ஆலோசகருடன் இணைக்க அனுமதியுங்கள். உடனடி ஆதரவுக்கு, தயவுசெய்து 1926 ஐ அழையுங்கள்."
        }
    }
}
