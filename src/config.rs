use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Configuration {
    pub authentication: Authentication,
    pub generator: Generator,
    pub discord: Discord,
}
impl Configuration {
    const FILENAME: &str = "config.toml";

    /// Loads `config.toml` if there is one, then applies any credentials found
    /// in the environment. The file is never written.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::load_from(Path::new(Self::FILENAME))?;
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    fn load_from(path: &Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(file) => toml::from_str(&file).context("failed to load config"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No {} found; using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => {
                Err(err).with_context(|| format!("failed to read config from {}", path.display()))
            }
        }
    }

    /// Overrides credentials with the values `lookup` returns. Empty values are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let auth = &mut self.authentication;

        if let Some(token) = lookup("DISCORD_TOKEN") {
            auth.discord_token = Some(token);
        }
        if let Some(key) = lookup("OPENAI_API_KEY") {
            auth.openai_api_key = Some(key);
        }
        if let Some(server) = lookup("OPENAI_API_BASE") {
            auth.openai_api_server = Some(server);
        }
    }

    pub fn discord_token(&self) -> anyhow::Result<&str> {
        self.authentication
            .discord_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .context("Missing Discord token: set DISCORD_TOKEN or authentication.discord_token")
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Authentication {
    pub discord_token: Option<String>,
    pub openai_api_server: Option<String>,
    pub openai_api_key: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Generator {
    pub model: String,
    /// Upper bound on the length of the generated category
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub system_prompt: String,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            model: "gpt-4o".into(),
            max_tokens: 100,
            temperature: 1.15,
            top_p: 0.9,
            system_prompt: "You are a highly creative assistant specializing in a logical but unique and diverse category generation.".into(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Discord {
    pub command_prefix: String,
    /// How long `roll` waits between the acknowledgement and the result
    pub roll_delay_ms: u64,
}

impl Default for Discord {
    fn default() -> Self {
        Self {
            command_prefix: "!".into(),
            roll_delay_ms: 3000,
        }
    }
}
