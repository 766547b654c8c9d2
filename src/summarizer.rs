//! The summary request pipeline: fetch, prompt, complete.
//!
//! All failures collapse into one generic error so callers (and the HTTP
//! surface) never see provider-specific diagnostics. Causes go to the log.

use thiserror::Error;
use tracing::warn;

use crate::agent::Completion;
use crate::fetch::Fetcher;
use crate::style::SummaryStyle;

/// Fixed system instruction for every summarization request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that summarizes articles in \
     various formats. Provide clear, accurate, and well-structured summaries.";

/// The single failure signal surfaced to callers.
#[derive(Error, Debug)]
#[error("Failed to summarize article")]
pub struct SummarizeError;

/// Orchestrates one summarization: fetch the article body, resolve the style
/// template, ask the model.
pub struct Summarizer {
    fetcher: Box<dyn Fetcher>,
    completion: Box<dyn Completion>,
}

impl Summarizer {
    pub fn new(
        fetcher: impl Fetcher + 'static,
        completion: impl Completion + 'static,
    ) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            completion: Box::new(completion),
        }
    }

    /// Summarize the article at `url` in the requested style. Unknown style
    /// tags fall back to "concise". The returned text may be empty if the
    /// provider produced no content.
    pub async fn summarize(&self, url: &str, style_tag: &str) -> Result<String, SummarizeError> {
        let body = self.fetcher.fetch(url).await.map_err(|e| {
            warn!(url, error = %e, "article fetch failed");
            SummarizeError
        })?;

        let style = SummaryStyle::from_tag(style_tag);
        let instruction = style.instruction(&body);

        let summary = self
            .completion
            .complete(SYSTEM_PROMPT, &instruction)
            .await
            .map_err(|e| {
                warn!(url, style = style.tag(), error = %e, "completion failed");
                SummarizeError
            })?;

        Ok(summary)
    }
}
