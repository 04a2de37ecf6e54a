//! Regex intent classification over the raw message text.
//!
//! Each flag is an independent test against the unnormalized message; a
//! message that matches several patterns sets several flags and the chat
//! template includes each corresponding section.

use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentFlags {
    pub is_greeting: bool,
    pub creator_inquiry: bool,
    pub is_hinglish: bool,
    pub wants_live_data: bool,
}

pub fn classify(message: &str) -> IntentFlags {
    IntentFlags {
        is_greeting: greeting_re().is_match(message),
        creator_inquiry: creator_re().is_match(message),
        is_hinglish: hinglish_re().is_match(message),
        wants_live_data: live_data_re().is_match(message),
    }
}

fn greeting_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(hi|hello|hey|greetings|namaste|kem cho|kaise ho|sat sri akal)\b")
            .unwrap()
    })
}

fn creator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(who created you|who built you|who is your creator|creator|origin|tumhara baap kon hai)",
        )
        .unwrap()
    })
}

// Colloquial Hindi-English markers between latin letters. Deliberately
// case-sensitive: uppercase shouting rarely code-switches.
fn hinglish_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"([a-zA-Z]\s*(yaar|bhai|acha|theek hai|kya|kaise|tum|tera|meraa|muje|woh)\s*[a-zA-Z])|([a-zA-Z](hai|ho|tha|thi|the)\s*[a-zA-Z])",
        )
        .unwrap()
    })
}

fn live_data_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(live news|trending|live scores?|latest news|current news|breaking news)")
            .unwrap()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_is_a_greeting_and_nothing_else() {
        let flags = classify("hello");
        assert!(flags.is_greeting);
        assert!(!flags.creator_inquiry);
    }

    #[test]
    fn creator_question_is_not_a_greeting() {
        let flags = classify("who created you");
        assert!(!flags.is_greeting);
        assert!(flags.creator_inquiry);
    }

    #[test]
    fn greeting_only_matches_at_the_start() {
        assert!(classify("hey, what's up").is_greeting);
        assert!(!classify("oh hey there").is_greeting);
        assert!(!classify("hexagon").is_greeting);
    }

    #[test]
    fn creator_variants_match() {
        assert!(classify("Who is your creator?").creator_inquiry);
        assert!(classify("tumhara baap kon hai").creator_inquiry);
        assert!(classify("tell me about your origin").creator_inquiry);
    }

    #[test]
    fn hinglish_markers_are_detected() {
        assert!(classify("kaam ho gaya kya bhai batao").is_hinglish);
        assert!(classify("ye kaise hota hai yaar bata").is_hinglish);
        assert!(!classify("please explain generics").is_hinglish);
    }

    #[test]
    fn overlapping_matches_set_multiple_flags() {
        let flags = classify("hello, who created you");
        assert!(flags.is_greeting);
        assert!(flags.creator_inquiry);
    }

    #[test]
    fn live_data_requests_are_flagged() {
        assert!(classify("show me the latest news").wants_live_data);
        assert!(classify("what's trending today").wants_live_data);
        assert!(classify("live scores please").wants_live_data);
        assert!(!classify("explain borrow checking").wants_live_data);
    }
}
