//! RunChartHandler - Runs the chart workflow for a session.

use std::sync::Arc;

use crate::application::handlers::chart::{chart_error_message, GenerateChartHandler};
use crate::domain::foundation::SessionId;
use crate::domain::session::{ChartStart, SessionState};

use super::{SessionCommandError, SessionRegistry};

/// Handler binding chart generation to a session.
pub struct RunChartHandler {
    registry: SessionRegistry,
    generator: Arc<GenerateChartHandler>,
}

impl RunChartHandler {
    pub fn new(registry: SessionRegistry, generator: Arc<GenerateChartHandler>) -> Self {
        Self {
            registry,
            generator,
        }
    }

    /// Generates the chart unless one is already held or being generated.
    ///
    /// A generation failure is recorded on the session, not returned as an
    /// error. The returned snapshot reflects the session after the run.
    pub async fn handle(&self, session_id: SessionId) -> Result<SessionState, SessionCommandError> {
        let start = self.registry.update(session_id, |s| s.begin_chart())??;

        let (ticket, profile) = match start {
            ChartStart::Ready(_) => {
                tracing::debug!(session_id = %session_id, "Chart already generated");
                return self.registry.get(session_id);
            }
            ChartStart::InFlight => {
                tracing::debug!(session_id = %session_id, "Chart already generating");
                return self.registry.get(session_id);
            }
            ChartStart::Run { ticket, profile } => (ticket, profile),
        };

        let outcome = self
            .generator
            .handle(&profile)
            .await
            .map_err(|err| chart_error_message(&err));

        let applied = self
            .registry
            .update(session_id, |s| s.complete_chart(ticket, outcome))?;
        if !applied {
            tracing::info!(
                session_id = %session_id,
                attempt = ticket.attempt(),
                "Discarded stale chart result"
            );
        }

        self.registry.get(session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockGenerationClient;
    use crate::domain::chart::ChartStatus;
    use crate::domain::profile::{BirthProfile, Gender};
    use crate::domain::session::NavigationError;
    use crate::ports::GenerationError;
    use chrono::{NaiveDate, NaiveTime};
    use std::time::Duration;

    fn profile() -> BirthProfile {
        BirthProfile::new(
            "Ana Silva",
            NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            Gender::Feminine,
            "São Paulo",
        )
        .unwrap()
    }

    fn setup(client: &MockGenerationClient, with_profile: bool) -> (RunChartHandler, SessionId) {
        let registry = SessionRegistry::new();
        let mut session = SessionState::new("ana@example.com");
        if with_profile {
            session.submit_profile(profile());
        }
        let id = session.id();
        registry.insert(session);

        let generator = Arc::new(GenerateChartHandler::new(Arc::new(client.clone())));
        (RunChartHandler::new(registry, generator), id)
    }

    #[tokio::test]
    async fn success_marks_chart_ready() {
        let client = MockGenerationClient::new().with_text("# Mapa de Ana");
        let (handler, id) = setup(&client, true);

        let session = handler.handle(id).await.unwrap();

        assert_eq!(session.chart().status(), ChartStatus::Ready);
        assert_eq!(session.chart().result().unwrap().narrative(), "# Mapa de Ana");
        assert!(session.chart().error().is_none());
    }

    #[tokio::test]
    async fn second_run_reuses_held_narrative() {
        let client = MockGenerationClient::new().with_text("# Mapa de Ana");
        let (handler, id) = setup(&client, true);

        handler.handle(id).await.unwrap();
        handler.handle(id).await.unwrap();

        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn failure_is_recorded_with_user_message() {
        let client =
            MockGenerationClient::new().with_text_error(GenerationError::provider("HTTP 500"));
        let (handler, id) = setup(&client, true);

        let session = handler.handle(id).await.unwrap();

        assert_eq!(session.chart().status(), ChartStatus::Failed);
        assert_eq!(
            session.chart().error(),
            Some("Erro ao alinhar as estrelas. Por favor, tente novamente.")
        );
        assert!(session.chart().result().is_none());
    }

    #[tokio::test]
    async fn retry_after_failure_calls_again() {
        let client = MockGenerationClient::new()
            .with_text_error(GenerationError::provider("HTTP 500"))
            .with_text("# Segunda tentativa");
        let (handler, id) = setup(&client, true);

        handler.handle(id).await.unwrap();
        let session = handler.handle(id).await.unwrap();

        assert_eq!(client.call_count(), 2);
        assert_eq!(session.chart().status(), ChartStatus::Ready);
    }

    #[tokio::test]
    async fn without_profile_is_refused() {
        let client = MockGenerationClient::new();
        let (handler, id) = setup(&client, false);

        assert_eq!(
            handler.handle(id).await.unwrap_err(),
            SessionCommandError::Navigation(NavigationError::ProfileRequired)
        );
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn concurrent_request_waits_for_running_generation() {
        let client = MockGenerationClient::new()
            .with_text("# Mapa de Ana")
            .with_delay(Duration::from_millis(80));
        let (handler, id) = setup(&client, true);
        let handler = Arc::new(handler);

        let running = tokio::spawn({
            let handler = Arc::clone(&handler);
            async move { handler.handle(id).await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;

        let snapshot = handler.handle(id).await.unwrap();
        assert_eq!(snapshot.chart().status(), ChartStatus::Generating);

        let session = running.await.unwrap().unwrap();
        assert_eq!(session.chart().status(), ChartStatus::Ready);
        assert_eq!(session.chart().result().unwrap().narrative(), "# Mapa de Ana");
        assert_eq!(client.call_count(), 1);
    }
}
