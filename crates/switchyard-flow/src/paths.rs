// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The two answering paths.
//!
//! Both paths are infallible by contract: an external-call failure is
//! logged and converted into an error-describing answer, so the flow never
//! surfaces a raw service error to the caller.

use std::sync::Arc;

use switchyard_config::model::EnterpriseConfig;
use switchyard_config::APPLICATION_ID_PLACEHOLDER;
use switchyard_core::{EnterpriseSearch, Query, ReasoningModel};
use tracing::error;

/// Fixed answer returned when the enterprise application id is unset.
pub const NOT_CONFIGURED_ANSWER: &str =
    "Enterprise search is not configured. Set enterprise.application_id.";

/// Answers queries via the hosted enterprise-search service.
pub struct RetrievalPath {
    search: Arc<dyn EnterpriseSearch>,
    application_id: String,
    user_id: Option<String>,
}

impl RetrievalPath {
    /// Create the retrieval path from the enterprise section of the config.
    pub fn new(search: Arc<dyn EnterpriseSearch>, config: &EnterpriseConfig) -> Self {
        Self {
            search,
            application_id: config.application_id.clone(),
            user_id: config.user_id.clone(),
        }
    }

    /// Answer a query. Never fails: configuration and service errors
    /// degrade to a descriptive answer.
    pub async fn answer(&self, query: &Query) -> String {
        if self.application_id == APPLICATION_ID_PLACEHOLDER {
            error!("enterprise.application_id is not configured, skipping retrieval call");
            return NOT_CONFIGURED_ANSWER.to_string();
        }

        match self
            .search
            .chat(query.as_str(), self.user_id.as_deref())
            .await
        {
            Ok(reply) => reply.into_text(),
            Err(e) => {
                error!(error = %e, "enterprise search call failed");
                format!("Error calling enterprise search: {e}")
            }
        }
    }
}

/// Answers queries via a single multi-step reasoning completion.
pub struct ReasoningPath {
    model: Arc<dyn ReasoningModel>,
}

impl ReasoningPath {
    /// Create the reasoning path backed by the given model.
    pub fn new(model: Arc<dyn ReasoningModel>) -> Self {
        Self { model }
    }

    /// Answer a query. Never fails: invocation errors degrade to a
    /// descriptive answer.
    pub async fn answer(&self, query: &Query) -> String {
        let prompt = agent_prompt(query.as_str());
        match self.model.complete(&prompt).await {
            Ok(reply) => reply.into_text(),
            Err(e) => {
                error!(error = %e, "reasoning call failed");
                format!("Error from reasoning model: {e}")
            }
        }
    }
}

/// Build the fixed step-by-step instruction for the reasoning path.
fn agent_prompt(query: &str) -> String {
    format!(
        "You are an autonomous cloud operations agent.\n\
         \n\
         Solve the task step by step and produce a final answer.\n\
         \n\
         Task:\n\
         {query}"
    )
}

#[cfg(test)]
mod tests {
    use switchyard_test_utils::{MockEnterpriseSearch, MockReasoningModel, ScriptedReply};

    use super::*;

    fn configured(user_id: Option<&str>) -> EnterpriseConfig {
        EnterpriseConfig {
            application_id: "app-1234".to_string(),
            user_id: user_id.map(str::to_string),
            ..EnterpriseConfig::default()
        }
    }

    fn query() -> Query {
        Query::new("What is our PTO policy?").unwrap()
    }

    #[tokio::test]
    async fn retrieval_short_circuits_on_placeholder() {
        let search = Arc::new(MockEnterpriseSearch::new());
        let path = RetrievalPath::new(search.clone(), &EnterpriseConfig::default());

        let answer = path.answer(&query()).await;
        assert_eq!(answer, NOT_CONFIGURED_ANSWER);
        assert_eq!(search.call_count(), 0, "service must not be called");
    }

    #[tokio::test]
    async fn retrieval_returns_normalized_reply() {
        let search = Arc::new(MockEnterpriseSearch::with_replies(vec![
            ScriptedReply::text("15 days"),
        ]));
        let path = RetrievalPath::new(search.clone(), &configured(None));

        assert_eq!(path.answer(&query()).await, "15 days");
        assert!(search.last_user_id().await.is_none(), "anonymous by default");
    }

    #[tokio::test]
    async fn retrieval_passes_configured_user_id() {
        let search = Arc::new(MockEnterpriseSearch::with_replies(vec![
            ScriptedReply::text("ok"),
        ]));
        let path = RetrievalPath::new(search.clone(), &configured(Some("alice")));

        path.answer(&query()).await;
        assert_eq!(search.last_user_id().await.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn retrieval_degrades_on_service_failure() {
        let search = Arc::new(MockEnterpriseSearch::with_replies(vec![
            ScriptedReply::error("access denied"),
        ]));
        let path = RetrievalPath::new(search, &configured(None));

        let answer = path.answer(&query()).await;
        assert!(answer.starts_with("Error calling enterprise search:"));
        assert!(answer.contains("access denied"));
    }

    #[tokio::test]
    async fn reasoning_returns_normalized_reply() {
        let model = Arc::new(MockReasoningModel::with_replies(vec![
            ScriptedReply::text("Done: 3 jobs restarted."),
        ]));
        let path = ReasoningPath::new(model);

        let answer = path
            .answer(&Query::new("Restart all failed jobs").unwrap())
            .await;
        assert_eq!(answer, "Done: 3 jobs restarted.");
    }

    #[tokio::test]
    async fn reasoning_degrades_on_invocation_failure() {
        let model = Arc::new(MockReasoningModel::with_replies(vec![
            ScriptedReply::error("model unavailable"),
        ]));
        let path = ReasoningPath::new(model.clone());

        let answer = path.answer(&query()).await;
        assert!(answer.starts_with("Error from reasoning model:"));
        assert_eq!(model.call_count(), 1, "one attempt only");
    }
}
