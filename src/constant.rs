/// names of the chat commands
pub mod commands {
    pub const ROLL: &str = "roll";
    pub const CATEGORY: &str = "category";
    pub const HELP: &str = "help";
}

/// text the bot sends to the channel
pub mod reply {
    pub const ROLLING: &str = "🎲 Rolling...";
    pub const THINKING: &str = "🧠 Thinking... Generating categories...";
    pub const GENERATION_FAILED: &str =
        "⚠️ Sorry, I couldn't generate categories. Please try again later.";
    pub const GENERATOR_NOT_CONFIGURED: &str = "⚠️ Category generation isn't set up on this bot. \
        Ask whoever runs it to configure an OpenAI API key.";

    pub fn rolled(category: &str) -> String {
        format!("🎲 The category is... **{category}**!")
    }

    pub fn generated(category: &str) -> String {
        format!("🎲 The category is...\n\n{category}!")
    }
}
