//! RunSoulmateHandler - Runs or retries the soulmate reveal for a session.

use std::sync::Arc;

use crate::application::handlers::soulmate::RevealSoulmateHandler;
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionState;
use crate::domain::soulmate::SoulmateStatus;

use super::{SessionCommandError, SessionRegistry};

/// Handler binding the soulmate reveal to a session.
pub struct RunSoulmateHandler {
    registry: SessionRegistry,
    revealer: Arc<RevealSoulmateHandler>,
}

impl RunSoulmateHandler {
    pub fn new(registry: SessionRegistry, revealer: Arc<RevealSoulmateHandler>) -> Self {
        Self { registry, revealer }
    }

    /// Starts a new attempt. Intermediate statuses are written to the
    /// session as the attempt progresses, so concurrent reads observe them.
    pub async fn handle(&self, session_id: SessionId) -> Result<SessionState, SessionCommandError> {
        let start = self.registry.update(session_id, |s| s.begin_soulmate())??;
        let ticket = start.ticket;

        let registry = self.registry.clone();
        let on_progress = move |status: SoulmateStatus| {
            let _ = registry.update(session_id, |s| s.record_soulmate_progress(ticket, status));
        };

        let outcome = self
            .revealer
            .handle(&start.profile, &start.chart, &on_progress)
            .await
            .map_err(|err| {
                tracing::warn!(session_id = %session_id, error = %err, "Soulmate reveal failed");
                err.user_message()
            });

        let applied = self
            .registry
            .update(session_id, |s| s.complete_soulmate(ticket, outcome))?;
        if !applied {
            tracing::info!(
                session_id = %session_id,
                attempt = ticket.attempt(),
                "Discarded stale soulmate result"
            );
        }

        self.registry.get(session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockGenerationClient;
    use crate::adapters::storage::InMemoryPortraitCache;
    use crate::domain::chart::ChartResult;
    use crate::domain::profile::{BirthProfile, Gender};
    use crate::domain::session::{ChartStart, NavigationError};
    use crate::ports::{GeneratedImage, GenerationError};
    use chrono::{NaiveDate, NaiveTime};
    use std::time::Duration;

    fn profile(name: &str) -> BirthProfile {
        BirthProfile::new(
            name,
            NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            Gender::Feminine,
            "São Paulo",
        )
        .unwrap()
    }

    fn session_with_chart(name: &str) -> SessionState {
        let mut session = SessionState::new("ana@example.com");
        session.submit_profile(profile(name));
        if let ChartStart::Run { ticket, .. } = session.begin_chart().unwrap() {
            session.complete_chart(ticket, Ok(ChartResult::new("Sol em Touro")));
        }
        session
    }

    fn handler(client: &MockGenerationClient, registry: &SessionRegistry) -> RunSoulmateHandler {
        let revealer = Arc::new(RevealSoulmateHandler::new(
            Arc::new(client.clone()),
            Arc::new(InMemoryPortraitCache::new()),
        ));
        RunSoulmateHandler::new(registry.clone(), revealer)
    }

    #[tokio::test]
    async fn success_marks_done_with_celebration() {
        let client = MockGenerationClient::new()
            .with_text("Olhar sereno.")
            .with_image(GeneratedImage::new("QUJD", "image/png"));
        let registry = SessionRegistry::new();
        let session = session_with_chart("Ana Silva");
        let id = session.id();
        registry.insert(session);

        let session = handler(&client, &registry).handle(id).await.unwrap();

        assert_eq!(session.soulmate().status(), SoulmateStatus::Done);
        let reveal = session.soulmate().reveal().unwrap();
        assert_eq!(reveal.result.portrait_image(), "QUJD");
        assert!(reveal.celebration.is_some());
    }

    #[tokio::test]
    async fn failure_is_recorded_and_retry_succeeds() {
        let client = MockGenerationClient::new()
            .with_text_error(GenerationError::provider("HTTP 503"))
            .with_text("Aura dourada.")
            .with_image(GeneratedImage::new("WFla", "image/png"));
        let registry = SessionRegistry::new();
        let session = session_with_chart("Ana Silva");
        let id = session.id();
        registry.insert(session);
        let handler = handler(&client, &registry);

        let failed = handler.handle(id).await.unwrap();
        assert_eq!(failed.soulmate().status(), SoulmateStatus::Error);
        assert_eq!(failed.soulmate().error(), Some("Erro ao conectar com o cosmos."));

        let retried = handler.handle(id).await.unwrap();
        assert_eq!(retried.soulmate().status(), SoulmateStatus::Done);
        assert_eq!(client.call_count(), 3);
    }

    #[tokio::test]
    async fn requires_ready_chart() {
        let client = MockGenerationClient::new();
        let registry = SessionRegistry::new();
        let mut session = SessionState::new("ana@example.com");
        session.submit_profile(profile("Ana Silva"));
        let id = session.id();
        registry.insert(session);

        assert_eq!(
            handler(&client, &registry).handle(id).await.unwrap_err(),
            SessionCommandError::Navigation(NavigationError::ChartRequired)
        );
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn intermediate_status_is_visible_while_generating() {
        let client = MockGenerationClient::new()
            .with_text("Olhar sereno.")
            .with_delay(Duration::from_millis(100));
        let registry = SessionRegistry::new();
        let session = session_with_chart("Ana Silva");
        let id = session.id();
        registry.insert(session);
        let handler = Arc::new(handler(&client, &registry));

        let running = tokio::spawn({
            let handler = Arc::clone(&handler);
            async move { handler.handle(id).await }
        });
        tokio::time::sleep(Duration::from_millis(30)).await;

        assert_eq!(
            registry.get(id).unwrap().soulmate().status(),
            SoulmateStatus::GeneratingDescription
        );
        running.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn resubmitting_profile_discards_in_flight_result() {
        let client = MockGenerationClient::new()
            .with_text("Olhar sereno.")
            .with_delay(Duration::from_millis(50));
        let registry = SessionRegistry::new();
        let session = session_with_chart("Ana Silva");
        let id = session.id();
        registry.insert(session);
        let handler = Arc::new(handler(&client, &registry));

        let running = tokio::spawn({
            let handler = Arc::clone(&handler);
            async move { handler.handle(id).await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        registry
            .update(id, |s| s.submit_profile(profile("Maria Souza")))
            .unwrap();

        let session = running.await.unwrap().unwrap();
        assert_eq!(session.soulmate().status(), SoulmateStatus::Idle);
        assert!(session.soulmate().reveal().is_none());
        assert_eq!(session.profile().unwrap().full_name(), "Maria Souza");
    }
}
