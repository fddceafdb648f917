use mindwell_chat::intent::{Intent, classify};

#[test]
fn classifies_english_keywords() {
    assert_eq!(classify("hello there"), Some(Intent::Greeting));
    assert_eq!(classify("I feel so sad today"), Some(Intent::Sadness));
    assert_eq!(classify("I'm really anxious about exams"), Some(Intent::Anxiety));
    assert_eq!(classify("I can't sleep at night"), Some(Intent::Sleep));
    assert_eq!(classify("Thanks!"), Some(Intent::Gratitude));
    assert_eq!(classify("ok, bye"), Some(Intent::Farewell));
}

#[test]
fn phrases_match_as_substrings() {
    assert_eq!(classify("I think I need help with this"), Some(Intent::HelpRequest));
    assert_eq!(classify("I have no friends at school"), Some(Intent::Loneliness));
}

#[test]
fn single_words_must_match_whole_tokens() {
    // "this" contains "hi", "shipment" contains "hi"
    assert_eq!(classify("this shipment is late"), None);
}

#[test]
fn distress_intents_win_over_small_talk() {
    assert_eq!(classify("hi, I feel lonely"), Some(Intent::Loneliness));
    assert_eq!(classify("thank you, but I'm still sad"), Some(Intent::Sadness));
}

#[test]
fn classifies_sinhala_and_tamil_with_suffixes() {
    assert_eq!(classify("මට හරිම දුකයි"), Some(Intent::Sadness));
    assert_eq!(classify("ආයුබෝවන්"), Some(Intent::Greeting));
    assert_eq!(classify("வணக்கம்"), Some(Intent::Greeting));
    assert_eq!(classify("எனக்கு தூக்கம் வரவில்லை"), Some(Intent::Sleep));
}

#[test]
fn unmatched_message_has_no_intent() {
    assert_eq!(classify("The weather is nice"), None);
    assert_eq!(classify(""), None);
}
