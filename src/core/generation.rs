//! Generation stages reported while a reply is produced, and the gate that keeps
//! input disabled from submit until the provider starts reporting.

use std::time::{Duration, Instant};

/// How long a submitted prompt may wait for the first non-idle stage.
pub const PENDING_START_TIMEOUT: Duration = Duration::from_secs(15);

/// User-facing message when a prompt could not be sent.
pub const API_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationStage {
    #[default]
    Idle,
    ChoosingComponent,
    FetchingContext,
    HydratingComponent,
    StreamingResponse,
    Complete,
    Error,
}

impl GenerationStage {
    /// Stages during which a reply is actively being produced.
    pub fn is_generating(self) -> bool {
        matches!(
            self,
            GenerationStage::ChoosingComponent
                | GenerationStage::FetchingContext
                | GenerationStage::HydratingComponent
                | GenerationStage::StreamingResponse
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            GenerationStage::Idle => "Idle",
            GenerationStage::ChoosingComponent => "Choosing component",
            GenerationStage::FetchingContext => "Fetching context",
            GenerationStage::HydratingComponent => "Hydrating component",
            GenerationStage::StreamingResponse => "Streaming response",
            GenerationStage::Complete => "Complete",
            GenerationStage::Error => "Error",
        }
    }
}

/// Input gating: current stage, the "pending start" latch, and the last send error.
#[derive(Debug, Clone, Default)]
pub struct GenerationGate {
    stage: GenerationStage,
    pending_since: Option<Instant>,
    error: Option<&'static str>,
}

impl GenerationGate {
    #[cfg(test)]
    pub fn stage(&self) -> GenerationStage {
        self.stage
    }

    pub fn is_generating(&self) -> bool {
        self.stage.is_generating()
    }

    pub fn is_pending_start(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Show the "Generating UI..." status.
    pub fn shows_status(&self) -> bool {
        self.is_generating() || self.is_pending_start()
    }

    pub fn is_input_disabled(&self) -> bool {
        self.shows_status()
    }

    /// Example prompts stay clickable during the pending latch; only an active
    /// generation blocks them.
    pub fn example_prompts_enabled(&self) -> bool {
        !self.is_generating()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Try to start a submission. Returns false while input is disabled.
    pub fn begin_submit(&mut self, now: Instant) -> bool {
        if self.is_input_disabled() {
            return false;
        }
        self.error = None;
        self.pending_since = Some(now);
        true
    }

    /// Record a stage reported by the provider. Any non-idle stage releases the latch.
    pub fn observe_stage(&mut self, stage: GenerationStage) {
        self.stage = stage;
        if stage != GenerationStage::Idle {
            self.pending_since = None;
        }
    }

    /// Expire the latch if the provider stayed idle for too long.
    pub fn tick(&mut self, now: Instant) {
        if self.stage == GenerationStage::Idle
            && self
                .pending_since
                .is_some_and(|since| now.saturating_duration_since(since) >= PENDING_START_TIMEOUT)
        {
            log::debug!("pending generation start timed out");
            self.pending_since = None;
        }
    }

    /// The send failed: release the latch and surface the error.
    pub fn fail(&mut self) {
        self.pending_since = None;
        self.stage = GenerationStage::Idle;
        self.error = Some(API_ERROR_MESSAGE);
    }

    /// The reply finished; return to idle.
    pub fn finish(&mut self) {
        self.pending_since = None;
        self.stage = GenerationStage::Idle;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Clear chat: back to idle with no latch and no error.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
