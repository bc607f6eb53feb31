use std::sync::Arc;

use crate::error::Result;
use crate::llm::extract::extract_code_block;
use crate::llm::prompts;
use crate::llm::{CompletionResult, Gateway};
use crate::models::{
    ExplainTask, GenerateTask, OptimizeTask, ProviderSelection, TaskEnvelope, TranslateTask,
};

/// Runs the four code tasks: build prompt, dispatch once, normalize the reply.
#[derive(Clone)]
pub struct CodeAssistant {
    gateway: Arc<Gateway>,
}

impl CodeAssistant {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub async fn generate(&self, task: &GenerateTask) -> Result<TaskEnvelope> {
        let prompt = prompts::generate_prompt(&task.description, &task.language, &task.complexity);
        let completion = self.dispatch(&prompt, &task.selection).await?;

        let mut envelope = TaskEnvelope::from(completion);
        envelope.result = extract_code_block(&envelope.result);
        Ok(envelope)
    }

    pub async fn explain(&self, task: &ExplainTask) -> Result<TaskEnvelope> {
        let prompt = prompts::explain_prompt(&task.code);
        let completion = self.dispatch(&prompt, &task.selection).await?;

        Ok(TaskEnvelope::from(completion))
    }

    pub async fn translate(&self, task: &TranslateTask) -> Result<TaskEnvelope> {
        let prompt =
            prompts::translate_prompt(&task.code, &task.source_language, &task.target_language);
        let completion = self.dispatch(&prompt, &task.selection).await?;

        let mut envelope = TaskEnvelope::from(completion);
        envelope.result = extract_code_block(&envelope.result);
        envelope.source_language = Some(task.source_language.clone());
        envelope.target_language = Some(task.target_language.clone());
        Ok(envelope)
    }

    /// Optimization replies mix code and prose, so they are returned as-is.
    pub async fn optimize(&self, task: &OptimizeTask) -> Result<TaskEnvelope> {
        let prompt = prompts::optimize_prompt(&task.code, &task.language);
        let completion = self.dispatch(&prompt, &task.selection).await?;

        let mut envelope = TaskEnvelope::from(completion);
        envelope.language = Some(task.language.clone());
        Ok(envelope)
    }

    async fn dispatch(
        &self,
        prompt: &str,
        selection: &ProviderSelection,
    ) -> Result<CompletionResult> {
        self.gateway
            .complete(prompt, &selection.provider, selection.model.as_deref())
            .await
    }
}
