use std::collections::BTreeMap;
use std::sync::LazyLock;

use mindwell_core::language::Language;

use crate::intent::Intent;

type IntentTable = BTreeMap<Intent, &'static [&'static str]>;

/// Per-language, per-intent response templates.
///
/// Every entry here must pass [`crate::safety::check_template`]; the test
/// suite walks the whole table.
pub static TEMPLATES: LazyLock<BTreeMap<Language, IntentTable>> = LazyLock::new(|| {
    BTreeMap::from([
        (Language::En, english()),
        (Language::Si, sinhala()),
        (Language::Ta, tamil()),
    ])
});

/// Templates for an intent, or `None` when the table has no entry.
pub fn templates_for(language: Language, intent: Intent) -> Option<&'static [&'static str]> {
    TEMPLATES
        .get(&language)
        .and_then(|table| table.get(&intent))
        .copied()
}

/// Empathetic replies used when no intent matched or a template was
/// rejected by the safety filter.
pub fn default_empathetic(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => DEFAULT_EN,
        Language::Si => DEFAULT_SI,
        Language::Ta => DEFAULT_TA,
    }
}

/// Last resort when every default for a language is rejected.
pub const LAST_RESORT: &str = "I'm here to listen.";

const DEFAULT_EN: &[&str] = &[
    "I understand this is difficult. I'm here to listen.",
    "Thank you for sharing. How does that make you feel?",
    "That sounds really challenging. Would you like to talk more about it?",
    "I'm sorry you're going through this. You're not alone.",
    "It takes courage to talk about these feelings. Thank you for trusting me.",
    "Your feelings are valid. Would you like to continue talking?",
    "I'm here to support you. What would be most helpful right now?",
    "I appreciate you sharing this with me. Let's take this one step at a time.",
];

const DEFAULT_SI: &[&str] = &[
    "මට තේරෙනවා මෙය අපහසුයි. මම මෙහි සවන් දෙනවා.",
    "බෙදාගැනීමට ස්තුතියි. එය ඔබට කෙසේ හැඟෙනවාද?",
    "එය ඇත්තෙන්ම අභියෝගයක් විය හැකියි. ඔබට එය ගැන තවත් කතා කිරීමට අවශ්‍යද?",
    "මෙය හරහා යනවාට කණගාටුයි. ඔබ තනි නොවේ.",
    "ඔබේ හැඟීම් වලංගුයි. ඔබට කතා කිරීම දිගටම කරගෙන යාමට අවශ්‍යද?",
    "මා සමඟ මෙය බෙදාගැනීමට ස්තුතියි. අපි මෙය පියවරෙන් පියවර ගනිමු.",
];

const DEFAULT_TA: &[&str] = &[
    "இது கடினம் என்பதை நான் புரிந்துகொள்கிறேன். நான் இங்கே கேட்கிறேன்.",
    "பகிர்ந்தமைக்கு நன்றி. அது உங்களுக்கு எப்படி உணர்த்துகிறது?",
    "அது மிகவும் சவாலானது போல் தெரிகிறது. அதைப் பற்றி மேலும் பேச விரும்புகிறீர்களா?",
    "நீங்கள் இதைச் சந்திக்கிறீர்கள் என்பதற்கு வருந்துகிறேன். நீங்கள் தனியாக இல்லை.",
    "உங்கள் உணர்வுகள் செல்லுபடியாகும். நீங்கள் தொடர்ந்து பேச விரும்புகிறீர்களா?",
    "இதை என்னுடன் பகிர்ந்தமைக்கு நன்றி. இதை படிப்படியாக எடுத்துக்கொள்வோம்.",
];

fn table(entries: [(Intent, &'static [&'static str]); 8]) -> IntentTable {
    BTreeMap::from(entries)
}

fn english() -> IntentTable {
    table([
        (
            Intent::HelpRequest,
            &[
                "I'm glad you reached out. I'm here with you. If you'd like to speak with a counselor, the 1926 helpline is available any time.",
                "Asking for help takes strength. Tell me what's on your mind, and remember you can call 1926 to talk to someone right away.",
            ],
        ),
        (
            Intent::Sadness,
            &[
                "I'm sorry you're feeling this way. Would you like to tell me more about what's been weighing on you?",
                "It sounds like things have been really heavy lately. I'm here to listen for as long as you need.",
                "Feeling low can be exhausting. What has your day been like?",
            ],
        ),
        (
            Intent::Anxiety,
            &[
                "That sounds stressful. Let's slow down together for a moment. What's worrying you the most right now?",
                "Feeling anxious can be overwhelming. I'm here with you. Would you like to talk through what's on your mind?",
            ],
        ),
        (
            Intent::Loneliness,
            &[
                "Feeling alone is really hard. I'm glad you're talking to me. You're not alone in this conversation.",
                "I'm sorry you're feeling lonely. Is there someone in your life you've felt close to before?",
            ],
        ),
        (
            Intent::Sleep,
            &[
                "Rest can be hard to find when your mind is busy. How long has sleep been difficult for you?",
                "Restless nights can make everything feel heavier. Would you like to talk about what keeps you up?",
            ],
        ),
        (
            Intent::Gratitude,
            &[
                "You're welcome. I'm always here if you want to talk.",
                "Thank you for talking with me. Take care of yourself.",
            ],
        ),
        (
            Intent::Greeting,
            &[
                "Hello! I'm here to listen. How are you feeling today?",
                "Hi there. It's good to hear from you. What's on your mind?",
            ],
        ),
        (
            Intent::Farewell,
            &[
                "Take care. I'm here whenever you want to talk again.",
                "Goodbye for now. Remember you can call 1926 any time you need support.",
            ],
        ),
    ])
}

fn sinhala() -> IntentTable {
    table([
        (
            Intent::HelpRequest,
            &[
                "ඔබ සම්බන්ධ වීම ගැන මට සතුටුයි. මම ඔබ සමඟ සිටිමි. උපදේශකයෙකු සමඟ කතා කිරීමට 1926 අමතන්න.",
                "උදව් ඉල්ලීමට ශක්තියක් අවශ්‍යයි. ඔබේ සිතේ ඇති දේ මට කියන්න.",
            ],
        ),
        (
            Intent::Sadness,
            &[
                "ඔබට මෙසේ දැනීම ගැන මට කණගාටුයි. ඔබව කරදර කරන දේ ගැන තවත් කියන්න කැමතිද?",
                "මෑතකදී දේවල් ඇත්තෙන්ම බර වූ බව පෙනේ. මම සවන් දීමට මෙහි සිටිමි.",
            ],
        ),
        (
            Intent::Anxiety,
            &[
                "එය ආතතිය දනවන බව පෙනේ. අපි මොහොතකට සෙමින් හුස්ම ගනිමු. දැන් ඔබව වඩාත්ම කනස්සල්ලට පත් කරන්නේ කුමක්ද?",
                "කනස්සල්ල ඉතා බරක් විය හැකියි. මම ඔබ සමඟ සිටිමි.",
            ],
        ),
        (
            Intent::Loneliness,
            &[
                "තනිකම දැනීම ඇත්තෙන්ම අපහසුයි. ඔබ මා සමඟ කතා කිරීම ගැන මට සතුටුයි.",
                "ඔබ තනිකමක් දැනීම ගැන කණගාටුයි. ඔබ කලින් සමීප වූ කෙනෙක් සිටිනවාද?",
            ],
        ),
        (
            Intent::Sleep,
            &[
                "සිත කාර්යබහුල විට විවේකය සොයාගැනීම අපහසුයි. කොපමණ කාලයක සිට නින්ද අපහසු වී තිබේද?",
                "නොනිදා ගත කරන රාත්‍රීන් සියල්ල බර කරයි. ඔබව අවදියෙන් තබන දේ ගැන කතා කරමුද?",
            ],
        ),
        (
            Intent::Gratitude,
            &["සාදරයෙන් පිළිගනිමු. කතා කිරීමට අවශ්‍ය ඕනෑම වේලාවක මම මෙහි සිටිමි."],
        ),
        (
            Intent::Greeting,
            &[
                "ආයුබෝවන්! මම සවන් දීමට මෙහි සිටිමි. අද ඔබට කොහොමද?",
                "හෙලෝ. ඔබෙන් ඇසීම සතුටක්. ඔබේ සිතේ ඇත්තේ කුමක්ද?",
            ],
        ),
        (
            Intent::Farewell,
            &["පරිස්සමෙන් ඉන්න. නැවත කතා කිරීමට අවශ්‍ය ඕනෑම වේලාවක මම මෙහි සිටිමි."],
        ),
    ])
}

fn tamil() -> IntentTable {
    table([
        (
            Intent::HelpRequest,
            &[
                "நீங்கள் தொடர்பு கொண்டதில் மகிழ்ச்சி. நான் உங்களுடன் இருக்கிறேன். ஆலோசகருடன் பேச 1926 ஐ அழையுங்கள்.",
                "உதவி கேட்பதற்கு மன வலிமை தேவை. உங்கள் மனதில் உள்ளதை என்னிடம் சொல்லுங்கள்.",
            ],
        ),
        (
            Intent::Sadness,
            &[
                "நீங்கள் இப்படி உணர்வதற்கு வருந்துகிறேன். உங்களைச் சுமையாக்குவது என்ன என்று மேலும் சொல்ல விரும்புகிறீர்களா?",
                "சமீபத்தில் விஷயங்கள் மிகவும் கனமாக இருந்தது போல் தெரிகிறது. நான் கேட்க இங்கே இருக்கிறேன்.",
            ],
        ),
        (
            Intent::Anxiety,
            &[
                "அது மன அழுத்தமாக தெரிகிறது. ஒரு கணம் மெதுவாக சுவாசிப்போம். இப்போது உங்களை அதிகம் கவலைப்படுத்துவது எது?",
                "பதட்டம் மிகவும் சுமையாக இருக்கலாம். நான் உங்களுடன் இருக்கிறேன்.",
            ],
        ),
        (
            Intent::Loneliness,
            &[
                "தனிமையாக உணர்வது மிகவும் கடினம். நீங்கள் என்னுடன் பேசுவதில் மகிழ்ச்சி.",
                "நீங்கள் தனிமையாக உணர்வதற்கு வருந்துகிறேன். முன்பு நெருக்கமாக உணர்ந்த யாராவது இருக்கிறார்களா?",
            ],
        ),
        (
            Intent::Sleep,
            &[
                "மனம் பரபரப்பாக இருக்கும்போது ஓய்வு கிடைப்பது கடினம். எவ்வளவு காலமாக தூக்கம் சிரமமாக உள்ளது?",
                "அமைதியற்ற இரவுகள் எல்லாவற்றையும் கனமாக்கும். உங்களை விழித்திருக்க வைப்பது பற்றி பேசலாமா?",
            ],
        ),
        (
            Intent::Gratitude,
            &["மகிழ்ச்சி. பேச விரும்பும் எந்த நேரத்திலும் நான் இங்கே இருக்கிறேன்."],
        ),
        (
            Intent::Greeting,
            &[
                "வணக்கம்! நான் கேட்க இங்கே இருக்கிறேன். இன்று நீங்கள் எப்படி உணர்கிறீர்கள்?",
                "வணக்கம். உங்களிடமிருந்து கேட்பதில் மகிழ்ச்சி. உங்கள் மனதில் என்ன இருக்கிறது?",
            ],
        ),
        (
            Intent::Farewell,
            &["கவனமாக இருங்கள். மீண்டும் பேச விரும்பும் போதெல்லாம் நான் இங்கே இருக்கிறேன்."],
        ),
    ])
}
