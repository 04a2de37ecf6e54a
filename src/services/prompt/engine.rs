//! MiniJinja environment over the embedded prompt and page templates

use anyhow::Result;
use minijinja::{context, Environment, Value};

use super::templates;
use crate::services::intent::IntentFlags;

pub struct PromptEngine {
    env: Environment<'static>,
}

impl PromptEngine {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();

        env.set_debug(cfg!(debug_assertions));

        env.add_template("chat", templates::CHAT_PROMPT)?;
        env.add_template("code", templates::CODE_PROMPT)?;
        env.add_template("analyze", templates::ANALYZE_PROMPT)?;
        env.add_template("summarize", templates::SUMMARIZE_PROMPT)?;
        env.add_template("chat.html", templates::CHAT_PAGE)?;

        Ok(Self { env })
    }

    /// Render a template with context
    pub fn render(&self, template_name: &str, ctx: Value) -> Result<String> {
        let template = self.env.get_template(template_name)?;
        Ok(template.render(ctx)?)
    }

    /// Assemble the chat prompt from the message, the (already truncated)
    /// transcript, the classifier flags and optional search results.
    pub fn chat_prompt(
        &self,
        message: &str,
        conversation_history: &str,
        flags: IntentFlags,
        search_results: Option<&str>,
    ) -> Result<String> {
        self.render(
            "chat",
            context! {
                message => message,
                conversation_history => conversation_history,
                is_greeting => flags.is_greeting,
                creator_inquiry => flags.creator_inquiry,
                is_hinglish => flags.is_hinglish,
                search_results => search_results,
            },
        )
    }

    pub fn code_prompt(
        &self,
        prompt: &str,
        language: &str,
        previous_code: Option<&str>,
    ) -> Result<String> {
        self.render(
            "code",
            context! {
                prompt => prompt,
                language => language,
                previous_code => previous_code,
            },
        )
    }

    pub fn analyze_prompt(
        &self,
        file_url: &str,
        file_type: &str,
        file_content: Option<&str>,
    ) -> Result<String> {
        self.render(
            "analyze",
            context! {
                file_url => file_url,
                file_type => file_type,
                file_content => file_content,
            },
        )
    }

    pub fn summarize_prompt(&self, conversation_history: &str) -> Result<String> {
        self.render(
            "summarize",
            context! { conversation_history => conversation_history },
        )
    }

    /// Render the chat page served at `/`.
    pub fn render_chat_page(&self, session_id: &str) -> Result<String> {
        self.render(
            "chat.html",
            context! {
                session_id => session_id,
                version => env!("CARGO_PKG_VERSION"),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PromptEngine {
        PromptEngine::new().expect("templates compile")
    }

    #[test]
    fn greeting_messages_take_the_greeting_branch() {
        let flags = crate::services::intent::classify("hello");
        let prompt = engine().chat_prompt("hello", "", flags, None).unwrap();
        // The greeting branch ends with the 😊🎉 ordering; the default branch
        // reverses it.
        assert!(prompt.contains("Just let me know what you need! 😊🎉"));
    }

    #[test]
    fn creator_inquiries_include_the_creator_branch() {
        let flags = crate::services::intent::classify("who created you");
        let prompt = engine()
            .chat_prompt("who created you", "", flags, None)
            .unwrap();
        assert!(prompt.contains("Created by Jishnu Chauhan"));
    }

    #[test]
    fn plain_messages_skip_the_creator_branch() {
        let flags = crate::services::intent::classify("explain lifetimes");
        let prompt = engine()
            .chat_prompt("explain lifetimes", "", flags, None)
            .unwrap();
        assert!(!prompt.contains("Created by Jishnu Chauhan"));
        assert!(prompt.contains("User: explain lifetimes"));
    }

    #[test]
    fn hinglish_greeting_prefers_the_greeting_branch() {
        let mut flags = crate::services::intent::classify("namaste yaar kya scene hai");
        assert!(flags.is_greeting && flags.is_hinglish);
        let prompt = engine()
            .chat_prompt("namaste yaar kya scene hai", "", flags, None)
            .unwrap();
        assert!(!prompt.contains("Kya haal hai dost!"));

        // Without the greeting the hinglish branch wins.
        flags.is_greeting = false;
        let prompt = engine()
            .chat_prompt("kaam kaise hota hai yaar", "", flags, None)
            .unwrap();
        assert!(prompt.contains("Kya haal hai dost!"));
    }

    #[test]
    fn history_block_appears_only_when_present() {
        let flags = IntentFlags::default();
        let with = engine()
            .chat_prompt("next", "\nUser: A\nAI: B", flags, None)
            .unwrap();
        assert!(with.contains("Conversation History:"));
        assert!(with.contains("\nUser: A\nAI: B"));

        let without = engine().chat_prompt("next", "", flags, None).unwrap();
        assert!(!without.contains("Conversation History:"));
    }

    #[test]
    fn search_results_are_spliced_in_when_supplied() {
        let flags = crate::services::intent::classify("latest news please");
        assert!(flags.wants_live_data);
        let prompt = engine()
            .chat_prompt("latest news please", "", flags, Some("placeholder headlines"))
            .unwrap();
        assert!(prompt.contains("Live search results:"));
        assert!(prompt.contains("placeholder headlines"));
    }

    #[test]
    fn code_prompt_includes_previous_code_conditionally() {
        let with = engine()
            .code_prompt("add a button", "javascript", Some("function x() {}"))
            .unwrap();
        assert!(with.contains("Previous Code:"));
        assert!(with.contains("function x() {}"));

        let without = engine().code_prompt("add a button", "python", None).unwrap();
        assert!(!without.contains("Previous Code:"));
        assert!(without.contains("Language: python"));
    }

    #[test]
    fn analyze_prompt_carries_text_content() {
        let prompt = engine()
            .analyze_prompt("notes.txt", "text/plain", Some("meeting at noon"))
            .unwrap();
        assert!(prompt.contains("File Type: text/plain"));
        assert!(prompt.contains("meeting at noon"));
    }

    #[test]
    fn chat_page_embeds_the_session_id() {
        let html = engine().render_chat_page("0192-abcd").unwrap();
        assert!(html.contains("0192-abcd"));
    }
}
