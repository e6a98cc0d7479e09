use std::sync::Arc;

use tokio::sync::mpsc;

use crate::service::description_service::{DescriptionGenerator, DescriptionService};

/// A finished suggestion, tagged with the keywords it was generated
/// from so late arrivals can be checked against the current input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionSuggestion {
    pub keywords: String,
    pub text: String,
}

impl DescriptionSuggestion {
    /// A suggestion is only applied while the keyword input still says
    /// what it said when the request was fired. Whitespace-only edits
    /// do not count as a change.
    pub fn applies_to(&self, current_keywords: &str) -> bool {
        self.keywords.trim() == current_keywords.trim()
    }
}

/// Fire-and-forget description generation. The form keeps working
/// while the request runs; the result arrives on the channel and the
/// receiver decides (via `applies_to`) whether it is still wanted.
/// A dropped receiver just discards the suggestion.
pub fn spawn_suggestion(
    generator: Arc<dyn DescriptionGenerator>,
    keywords: String,
    tx: mpsc::Sender<DescriptionSuggestion>,
) {
    tokio::spawn(async move {
        let text = DescriptionService::suggest(generator.as_ref(), &keywords).await;
        let _ = tx.send(DescriptionSuggestion { keywords, text }).await;
    });
}
