use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs,
    },
};
use thiserror::Error;

use crate::{catalog::Catalog, config};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Api(#[from] OpenAIError),
    #[error("the completion contained no choices")]
    NoChoices,
    #[error("the completion contained no message content")]
    EmptyContent,
}

/// Produces a brand new category on every call.
#[serenity::async_trait]
pub trait CategoryGenerator: Send + Sync {
    async fn generate(&self) -> Result<String, GenerationError>;
}

pub struct OpenAiGenerator {
    client: async_openai::Client<OpenAIConfig>,
    settings: config::Generator,
    catalog_list: String,
}
impl OpenAiGenerator {
    /// Returns `None` when no API key is configured.
    pub fn new(
        authentication: &config::Authentication,
        settings: config::Generator,
        catalog: &Catalog,
    ) -> Option<Self> {
        let key = authentication.openai_api_key.as_deref()?;

        let mut openai_config = OpenAIConfig::default().with_api_key(key);
        if let Some(server) = authentication.openai_api_server.as_deref() {
            openai_config = openai_config.with_api_base(server);
        }

        Some(Self {
            client: async_openai::Client::with_config(openai_config),
            settings,
            catalog_list: catalog.as_prompt_list(),
        })
    }

    // Older OpenAI-compatible servers only read `max_tokens`.
    #[allow(deprecated)]
    pub fn request(&self) -> Result<CreateChatCompletionRequest, OpenAIError> {
        CreateChatCompletionRequestArgs::default()
            .model(self.settings.model.clone())
            .messages([
                ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                    content: self.settings.system_prompt.clone().into(),
                    name: None,
                }),
                ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                    content: user_prompt(&self.catalog_list).into(),
                    name: None,
                }),
            ])
            .max_tokens(self.settings.max_tokens)
            .temperature(self.settings.temperature)
            .top_p(self.settings.top_p)
            .build()
    }
}
#[serenity::async_trait]
impl CategoryGenerator for OpenAiGenerator {
    async fn generate(&self) -> Result<String, GenerationError> {
        let response = self.client.chat().create(self.request()?).await?;
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(GenerationError::NoChoices)?;
        choice.message.content.ok_or(GenerationError::EmptyContent)
    }
}

/// Instructions sent with every request, worded as the community wrote them.
fn user_prompt(catalog_list: &str) -> String {
    format!(
        "Generate 1 unique category for selecting champions for a League of Legends 2v2 ARAM game.
The category must be based on specific in-game mechanics, items, champion abilities, or team compositions.
Avoid vague or overly general names, be specific but its ok to sometimes be simple.
Also avoid anything to do with the league of legends rune system.
Try to make sure the category would fit for approximately 6 or more champions.
Here are some example categories: {catalog_list}. You may use an ideas from this list.
For example from the above list, 'Freljord' includes champions only from that part of Runeterra (e.g. Anivia, Ashe, Braum),
or 'High Risk' includes champs with high-risk, high-reward playstyles (Rengar, Qiyana, Irelia).
Structure your output to **only include the category name**, with a brief description in brackets (but dont include any champion names or abilities), and make it bold."
    )
}

#[cfg(test)]
mod tests {
    use async_openai::types::{
        ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessageContent,
    };

    use super::*;

    fn generator(key: Option<&str>) -> Option<OpenAiGenerator> {
        let authentication = config::Authentication {
            discord_token: None,
            openai_api_server: Some("http://127.0.0.1:9/v1".into()),
            openai_api_key: key.map(String::from),
        };
        OpenAiGenerator::new(
            &authentication,
            config::Generator::default(),
            &Catalog::parse("Freljord\nAP Only"),
        )
    }

    #[test]
    fn test_no_key_no_generator() {
        assert!(generator(None).is_none());
    }

    #[test]
    #[allow(deprecated)]
    fn test_request_parameters() {
        let request = generator(Some("sk-test")).unwrap().request().unwrap();

        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.max_tokens, Some(100));
        assert_eq!(request.max_completion_tokens, None);
        assert_eq!(request.temperature, Some(1.15));
        assert_eq!(request.top_p, Some(0.9));
        assert_eq!(request.messages.len(), 2);

        match &request.messages[0] {
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                content: ChatCompletionRequestSystemMessageContent::Text(text),
                ..
            }) => assert_eq!(text, &config::Generator::default().system_prompt),
            other => panic!("unexpected first message: {other:?}"),
        }
        match &request.messages[1] {
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: ChatCompletionRequestUserMessageContent::Text(text),
                ..
            }) => {
                assert!(text.contains("example categories: Freljord\nAP Only."));
                assert!(text.contains("2v2 ARAM"));
                assert!(text.contains("the league of legends rune system"));
                assert!(text.contains("would fit for approximately 6 or more champions"));
                assert!(text.contains("You may use an ideas from this list."));
                assert!(text.contains("(but dont include any champion names or abilities)"));
            }
            other => panic!("unexpected second message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_an_error() {
        let result = generator(Some("sk-test")).unwrap().generate().await;
        assert!(matches!(result, Err(GenerationError::Api(_))));
    }
}
