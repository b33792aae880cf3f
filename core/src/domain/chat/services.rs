use tracing::instrument;

use crate::domain::{
    chat::{
        ports::ChatService,
        value_objects::{AskInput, ChatAnswer},
    },
    common::{entities::app_errors::CoreError, services::Service},
    ingredient_analysis::{
        ports::{AnalysisProxy, LLMClient},
        prompts::build_chat_prompt,
        value_objects::GenerationSettings,
    },
};

const EMPTY_ANSWER_FALLBACK: &str = "Sorry, I could not process your request.";

impl<LLM, PX> ChatService for Service<LLM, PX>
where
    LLM: LLMClient,
    PX: AnalysisProxy,
{
    #[instrument(skip(self, input), fields(has_context = input.context.is_some()))]
    async fn ask(&self, input: AskInput) -> Result<ChatAnswer, CoreError> {
        let question = input.question.trim();
        if question.is_empty() {
            return Err(CoreError::Invalid("Missing question".to_string()));
        }

        let api_key = self
            .resolve_api_key(input.api_key)
            .ok_or(CoreError::MissingApiKey)?;

        let prompt = build_chat_prompt(question, input.context.as_ref());
        let content = self
            .llm_client
            .generate_with_text(api_key, prompt, GenerationSettings::chat())
            .await?;

        let content = content.trim();
        let content = if content.is_empty() {
            EMPTY_ANSWER_FALLBACK
        } else {
            content
        };

        Ok(ChatAnswer {
            content: content.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::common::fakes::{FakeLlm, FakeProxy, config_with_key};

    fn ask_input(question: &str) -> AskInput {
        AskInput {
            question: question.to_string(),
            context: Some(json!({ "health_score": 64, "flags": ["E102"] })),
            api_key: None,
        }
    }

    #[tokio::test]
    async fn test_ask_forwards_context_and_chat_settings() {
        let llm = FakeLlm::replying("  Limit E102 if you are sensitive to dyes.  ");
        let service = Service::new(llm.clone(), FakeProxy::disabled(), config_with_key(Some("k")));

        let answer = service.ask(ask_input("Is E102 safe?")).await.unwrap();

        assert_eq!(answer.content, "Limit E102 if you are sensitive to dyes.");
        let calls = llm.calls();
        assert_eq!(calls[0].settings, GenerationSettings::chat());
        assert!(calls[0].prompt.contains("\"flags\":[\"E102\"]"));
        assert!(calls[0].prompt.contains("Question: Is E102 safe?"));
    }

    #[tokio::test]
    async fn test_blank_answer_uses_fallback() {
        let llm = FakeLlm::replying("   ");
        let service = Service::new(llm, FakeProxy::disabled(), config_with_key(Some("k")));

        let answer = service.ask(ask_input("Anything?")).await.unwrap();

        assert_eq!(answer.content, EMPTY_ANSWER_FALLBACK);
    }

    #[tokio::test]
    async fn test_ask_requires_question_and_key() {
        let service = Service::new(
            FakeLlm::replying("ok"),
            FakeProxy::disabled(),
            config_with_key(None),
        );

        assert!(matches!(
            service.ask(ask_input("  ")).await,
            Err(CoreError::Invalid(_))
        ));
        assert_eq!(
            service.ask(ask_input("Is salt bad?")).await,
            Err(CoreError::MissingApiKey)
        );
    }
}
