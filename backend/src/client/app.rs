//! Insights page model: list state plus the add-insight dialog.

use std::sync::Arc;

use tracing::error;

use crate::domain::Insight;

use super::dialog::AddInsightDialog;
use super::gateway::InsightsGateway;

/// State behind the insights page.
///
/// Mirrors what the browser keeps in memory: the fetched list and the add
/// dialog. Mutations go through the gateway and the list only changes once
/// the server confirms, so a failed delete never drops a row locally.
pub struct InsightsApp {
    gateway: Arc<dyn InsightsGateway>,
    insights: Vec<Insight>,
    dialog: AddInsightDialog,
}

impl InsightsApp {
    /// Create a page model with an empty list and a closed dialog.
    pub fn new(gateway: Arc<dyn InsightsGateway>) -> Self {
        Self {
            gateway,
            insights: Vec::new(),
            dialog: AddInsightDialog::new(),
        }
    }

    /// Current list contents.
    pub fn insights(&self) -> &[Insight] {
        &self.insights
    }

    /// Whether the page should render the empty-state message.
    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }

    /// Dialog state for rendering.
    pub fn dialog(&self) -> &AddInsightDialog {
        &self.dialog
    }

    /// Mutable dialog access for form input.
    pub fn dialog_mut(&mut self) -> &mut AddInsightDialog {
        &mut self.dialog
    }

    /// Fetch the list from the server, replacing local state on success.
    ///
    /// On failure the previous list is kept; the page logs and carries on.
    pub async fn load(&mut self) {
        match self.gateway.list().await {
            Ok(insights) => self.insights = insights,
            Err(err) => error!(error = %err, "Failed to fetch insights"),
        }
    }

    /// Delete an insight, dropping it from the local list once the server
    /// confirms.
    pub async fn delete_insight(&mut self, id: i64) {
        match self.gateway.delete(id).await {
            Ok(()) => self.insights.retain(|insight| insight.id() != id),
            Err(err) => error!(error = %err, id, "Failed to delete insight"),
        }
    }

    /// Submit the add-insight dialog.
    ///
    /// Text that trims to nothing never reaches the server. On success the
    /// dialog closes with its fields reset and the list is refreshed; on
    /// failure the dialog keeps its values so the user can retry.
    pub async fn submit_insight(&mut self) {
        if self.dialog.text().trim().is_empty() {
            error!("Insight text cannot be empty");
            return;
        }

        let brand = self.dialog.brand();
        let text = self.dialog.text().to_owned();
        match self.gateway.create(brand, &text).await {
            Ok(()) => {
                self.dialog.complete_submission();
                self.load().await;
            }
            Err(err) => {
                error!(error = %err, "Error adding insight");
                self.dialog.fail_submission();
            }
        }
    }
}
