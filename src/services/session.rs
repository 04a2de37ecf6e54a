use crate::types::session::ChatMessage;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Accumulating "User/AI" transcript handed to the prompt layer.
///
/// The wire format is load-bearing: each completed exchange appends
/// `\nUser: {user}\nAI: {ai}` and the chat template splices the string in
/// verbatim.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    text: String,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn record(&mut self, user: &str, ai: &str) {
        self.text.push_str(&format!("\nUser: {}\nAI: {}", user, ai));
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Drop the oldest whole exchanges until the transcript fits in
    /// `max_chars`. Cuts only at `\nUser: ` boundaries so a partial exchange
    /// never reaches the prompt. A single oversized exchange is kept whole.
    pub fn truncated(&self, max_chars: usize) -> String {
        let mut text = self.text.as_str();
        while text.len() > max_chars {
            match text[1..].find("\nUser: ") {
                Some(idx) => text = &text[idx + 1..],
                None => break,
            }
        }
        text.to_string()
    }
}

pub struct Session {
    pub id: String,
    pub messages: Vec<ChatMessage>,
    pub history: ConversationHistory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: &str) -> Self {
        let now = Utc::now();
        Self {
            id: id.to_string(),
            messages: Vec::new(),
            history: ConversationHistory::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.updated_at = Utc::now();
    }

    pub fn record_exchange(&mut self, user: &str, ai: &str) {
        self.history.record(user, ai);
        self.updated_at = Utc::now();
    }

    /// Session reset: forget messages and transcript alike.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.history = ConversationHistory::new();
        self.updated_at = Utc::now();
    }
}

pub struct SessionManager {
    sessions: HashMap<String, Session>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    pub fn create_session(&mut self, id: &str) -> &Session {
        self.sessions.insert(id.to_string(), Session::new(id));
        self.sessions.get(id).unwrap()
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Session> {
        self.sessions.get_mut(id)
    }

    pub fn get_or_create(&mut self, id: &str) -> &mut Session {
        if !self.sessions.contains_key(id) {
            self.create_session(id);
        }
        self.sessions.get_mut(id).unwrap()
    }

    pub fn count(&self) -> usize {
        self.sessions.len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_accumulates_in_send_order() {
        let mut history = ConversationHistory::new();
        history.record("A", "B");
        history.record("C", "D");
        assert_eq!(history.as_str(), "\nUser: A\nAI: B\nUser: C\nAI: D");
    }

    #[test]
    fn truncation_drops_oldest_whole_exchanges() {
        let mut history = ConversationHistory::new();
        history.record("first question", "first answer");
        history.record("second question", "second answer");
        history.record("third", "answer");

        let truncated = history.truncated(70);
        assert!(truncated.starts_with("\nUser: "));
        assert!(!truncated.contains("first question"));
        assert!(truncated.contains("second question"));
        assert!(truncated.ends_with("\nUser: third\nAI: answer"));
    }

    #[test]
    fn truncation_keeps_single_oversized_exchange() {
        let mut history = ConversationHistory::new();
        history.record("q", &"x".repeat(100));
        let truncated = history.truncated(20);
        assert_eq!(truncated, history.as_str());
    }

    #[test]
    fn truncation_is_a_noop_when_under_limit() {
        let mut history = ConversationHistory::new();
        history.record("hi", "hello");
        assert_eq!(history.truncated(1000), history.as_str());
    }

    #[test]
    fn session_preserves_message_order() {
        let mut session = Session::new("s1");
        session.add_message(crate::types::session::ChatMessage::new_user("one".into()));
        session.add_message(crate::types::session::ChatMessage::new_assistant(
            "two".into(),
            None,
        ));
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].content, "one");
        assert_eq!(session.messages[1].content, "two");
    }

    #[test]
    fn clear_resets_messages_and_history() {
        let mut session = Session::new("s1");
        session.add_message(crate::types::session::ChatMessage::new_user("one".into()));
        session.record_exchange("one", "reply");
        session.clear();
        assert!(session.messages.is_empty());
        assert!(session.history.is_empty());
    }
}
