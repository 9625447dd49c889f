//! Session aggregate.
//!
//! Holds the submitted profile, the active step, and the progress of both
//! workflows. Workflow runs are started and finished in two halves so the
//! network calls can happen outside any lock; each run carries a [`Ticket`]
//! and its result is dropped if the ticket is stale by the time it lands.

use chrono::{DateTime, Utc};

use super::{NavigationError, Step};
use crate::domain::chart::{ChartResult, ChartStatus};
use crate::domain::foundation::{SessionId, StateMachine};
use crate::domain::profile::BirthProfile;
use crate::domain::soulmate::{SoulmateReveal, SoulmateStatus};

/// Identifies one workflow run against one profile revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    profile_revision: u64,
    attempt: u64,
}

impl Ticket {
    pub fn profile_revision(&self) -> u64 {
        self.profile_revision
    }

    pub fn attempt(&self) -> u64 {
        self.attempt
    }
}

/// Chart workflow progress. Never holds both a result and an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartProgress {
    status: ChartStatus,
    result: Option<ChartResult>,
    error: Option<String>,
    attempt: u64,
}

impl ChartProgress {
    pub fn status(&self) -> ChartStatus {
        self.status
    }

    pub fn result(&self) -> Option<&ChartResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    fn ready_result(&self) -> Option<&ChartResult> {
        if self.status.is_complete() {
            self.result.as_ref()
        } else {
            None
        }
    }
}

/// Soulmate workflow progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoulmateProgress {
    status: SoulmateStatus,
    reveal: Option<SoulmateReveal>,
    error: Option<String>,
    attempt: u64,
}

impl SoulmateProgress {
    pub fn status(&self) -> SoulmateStatus {
        self.status
    }

    pub fn reveal(&self) -> Option<&SoulmateReveal> {
        self.reveal.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn attempt(&self) -> u64 {
        self.attempt
    }
}

/// What `begin_chart` decided.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartStart {
    /// A narrative is already held; nothing to run.
    Ready(ChartResult),
    /// Another run for this profile is still generating.
    InFlight,
    /// Run the workflow for this profile and report back with the ticket.
    Run {
        ticket: Ticket,
        profile: BirthProfile,
    },
}

/// Inputs for one soulmate attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SoulmateStart {
    pub ticket: Ticket,
    pub profile: BirthProfile,
    pub chart: ChartResult,
}

/// Everything the server remembers about one signed-in visitor.
#[derive(Debug, Clone)]
pub struct SessionState {
    id: SessionId,
    identity: String,
    created_at: DateTime<Utc>,
    profile: Option<BirthProfile>,
    profile_revision: u64,
    step: Step,
    chart: ChartProgress,
    soulmate: SoulmateProgress,
}

impl SessionState {
    /// Fresh session on the data entry step.
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            identity: identity.into(),
            created_at: Utc::now(),
            profile: None,
            profile_revision: 0,
            step: Step::DataEntry,
            chart: ChartProgress::default(),
            soulmate: SoulmateProgress::default(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn profile(&self) -> Option<&BirthProfile> {
        self.profile.as_ref()
    }

    pub fn profile_revision(&self) -> u64 {
        self.profile_revision
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn chart(&self) -> &ChartProgress {
        &self.chart
    }

    pub fn soulmate(&self) -> &SoulmateProgress {
        &self.soulmate
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    /// Stores a new profile and moves to the chart step.
    ///
    /// Both workflows are reset and any run still in flight becomes stale.
    pub fn submit_profile(&mut self, profile: BirthProfile) {
        self.profile = Some(profile);
        self.profile_revision += 1;
        self.chart = ChartProgress::default();
        self.soulmate = SoulmateProgress::default();
        self.step = Step::Chart;
    }

    /// Steps whose navigation control is currently enabled.
    pub fn enabled_steps(&self) -> Vec<Step> {
        Step::ALL
            .into_iter()
            .filter(|step| self.check_step(*step).is_ok())
            .collect()
    }

    /// Navigation bar click. Never starts a workflow.
    pub fn select(&mut self, step: Step) -> Result<(), NavigationError> {
        self.check_step(step)?;
        self.step = step;
        Ok(())
    }

    /// The "next" control on the chart step.
    pub fn advance(&mut self) -> Result<(), NavigationError> {
        self.check_step(Step::Soulmate)?;
        self.step = Step::Soulmate;
        Ok(())
    }

    fn check_step(&self, step: Step) -> Result<(), NavigationError> {
        if step == self.step {
            return Ok(());
        }
        if self.profile.is_none() {
            return Err(NavigationError::ProfileRequired);
        }
        if step == Step::Soulmate && self.chart.ready_result().is_none() {
            return Err(NavigationError::ChartRequired);
        }
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Chart workflow
    // ───────────────────────────────────────────────────────────────

    /// Starts a chart run, or returns the narrative already held.
    ///
    /// At most one run is in flight per profile revision.
    pub fn begin_chart(&mut self) -> Result<ChartStart, NavigationError> {
        let profile = self
            .profile
            .clone()
            .ok_or(NavigationError::ProfileRequired)?;

        if let Some(result) = self.chart.ready_result() {
            return Ok(ChartStart::Ready(result.clone()));
        }
        let Ok(generating) = self.chart.status.transition_to(ChartStatus::Generating) else {
            return Ok(ChartStart::InFlight);
        };

        self.chart.attempt += 1;
        self.chart.status = generating;
        self.chart.result = None;
        self.chart.error = None;

        Ok(ChartStart::Run {
            ticket: self.chart_ticket(),
            profile,
        })
    }

    /// Applies the outcome of a chart run. Returns false if the ticket is stale.
    pub fn complete_chart(&mut self, ticket: Ticket, outcome: Result<ChartResult, String>) -> bool {
        let target = match outcome {
            Ok(_) => ChartStatus::Ready,
            Err(_) => ChartStatus::Failed,
        };
        if ticket != self.chart_ticket() || !self.chart.status.can_transition_to(&target) {
            return false;
        }

        self.chart.status = target;
        match outcome {
            Ok(result) => {
                self.chart.result = Some(result);
                self.chart.error = None;
            }
            Err(message) => {
                self.chart.result = None;
                self.chart.error = Some(message);
            }
        }
        true
    }

    fn chart_ticket(&self) -> Ticket {
        Ticket {
            profile_revision: self.profile_revision,
            attempt: self.chart.attempt,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Soulmate workflow
    // ───────────────────────────────────────────────────────────────

    /// Starts a soulmate attempt. Requires a completed chart.
    ///
    /// Any previous reveal or error is cleared.
    pub fn begin_soulmate(&mut self) -> Result<SoulmateStart, NavigationError> {
        let profile = self
            .profile
            .clone()
            .ok_or(NavigationError::ProfileRequired)?;
        let chart = self
            .chart
            .ready_result()
            .cloned()
            .ok_or(NavigationError::ChartRequired)?;

        self.soulmate.attempt += 1;
        self.soulmate.status = SoulmateStatus::CheckingCache;
        self.soulmate.reveal = None;
        self.soulmate.error = None;

        Ok(SoulmateStart {
            ticket: self.soulmate_ticket(),
            profile,
            chart,
        })
    }

    /// Records an intermediate status. Out-of-order or stale updates are ignored.
    pub fn record_soulmate_progress(&mut self, ticket: Ticket, status: SoulmateStatus) -> bool {
        if ticket != self.soulmate_ticket() || !self.soulmate.status.can_transition_to(&status) {
            return false;
        }
        self.soulmate.status = status;
        true
    }

    /// Applies the outcome of a soulmate attempt. Returns false if the ticket is stale.
    pub fn complete_soulmate(
        &mut self,
        ticket: Ticket,
        outcome: Result<SoulmateReveal, String>,
    ) -> bool {
        if ticket != self.soulmate_ticket() || !self.soulmate.status.is_in_flight() {
            return false;
        }
        match outcome {
            Ok(reveal) => {
                self.soulmate.status = SoulmateStatus::Done;
                self.soulmate.reveal = Some(reveal);
                self.soulmate.error = None;
            }
            Err(message) => {
                self.soulmate.status = SoulmateStatus::Error;
                self.soulmate.reveal = None;
                self.soulmate.error = Some(message);
            }
        }
        true
    }

    fn soulmate_ticket(&self) -> Ticket {
        Ticket {
            profile_revision: self.profile_revision,
            attempt: self.soulmate.attempt,
        }
    }
}
