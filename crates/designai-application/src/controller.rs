//! Workspace controller.
//!
//! `WorkspaceController` is the single owner of [`AppState`]. Every user
//! action goes through it: view changes, login and logout, generation and
//! export. The persisted documents are written only from here.
//!
//! # Two-phase operations
//!
//! Login and generation complete after a short simulated delay. Each is split
//! into `begin_*`, which checks every precondition and raises the busy flag,
//! and `complete_*`, which commits the result and lowers it. The async
//! [`WorkspaceController::login`] and [`WorkspaceController::generate`] run
//! both phases with the delay in between. While the flag is raised every other
//! mutating operation fails with [`DesignError::Busy`].

use std::sync::Arc;

use designai_core::chat::{
    ChatMessage, LOGGED_OUT_HINT, NEW_PROJECT, generation_summary, replay_records,
};
use designai_core::clock::Clock;
use designai_core::config::{AppConfig, GENERATION_DELAY, LOGIN_DELAY, LoginPolicy, MAX_RECORDS};
use designai_core::credits::spend_credit;
use designai_core::error::{DesignError, Result};
use designai_core::record::{
    GenerationRecord, GenerationRequest, build_generation_record, empty_preview_html,
};
use designai_core::session::{
    AuthResolution, LoginInput, LoginNotice, Session, create_guest_session, resolve_login,
};
use designai_core::state::{AppState, AuthEntry, Device, View, WorkspaceRepository};
use designai_core::validation::{validate_login_fields, validate_prompt};

use crate::export::{ExportArtifact, ExportFormat, export_record};

/// A login that passed its checks and waits to be committed.
#[derive(Debug)]
#[must_use = "a pending login keeps the workspace busy until completed"]
pub struct PendingLogin {
    input: LoginInput,
}

/// A generation that passed its checks and waits to be committed.
#[derive(Debug)]
#[must_use = "a pending generation keeps the workspace busy until completed"]
pub struct PendingGeneration {
    request: GenerationRequest,
    /// Day the quota was checked against.
    day: String,
}

impl PendingGeneration {
    /// The request with its prompt already trimmed.
    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }
}

pub struct WorkspaceController {
    state: AppState,
    repository: Arc<dyn WorkspaceRepository>,
    clock: Arc<dyn Clock>,
    login_policy: LoginPolicy,
    simulate_latency: bool,
}

impl WorkspaceController {
    /// Restores the workspace from `repository`.
    ///
    /// The initial view is the generator when a session was persisted and the
    /// landing page otherwise. The chat log starts with a replay of the most
    /// recent records.
    pub fn new(repository: Arc<dyn WorkspaceRepository>, clock: Arc<dyn Clock>) -> Self {
        let session = repository.load_session();
        let records = repository.load_records();
        let credits = repository.load_credits(&clock.today_key());

        let mut state = AppState::new(session, records, credits);
        state.chat = replay_records(&state.records);

        tracing::info!(
            view = %state.view,
            records = state.records.len(),
            credits,
            "workspace restored"
        );

        Self {
            state,
            repository,
            clock,
            login_policy: LoginPolicy::default(),
            simulate_latency: true,
        }
    }

    /// Restores the workspace and applies the operational settings.
    pub fn from_config(
        repository: Arc<dyn WorkspaceRepository>,
        clock: Arc<dyn Clock>,
        config: &AppConfig,
    ) -> Self {
        Self::new(repository, clock)
            .with_login_policy(config.auth.login_policy)
            .with_simulated_latency(config.simulation.enabled)
    }

    pub fn with_login_policy(mut self, policy: LoginPolicy) -> Self {
        self.login_policy = policy;
        self
    }

    /// Whether [`login`](Self::login) and [`generate`](Self::generate) wait
    /// before committing.
    pub fn with_simulated_latency(mut self, enabled: bool) -> Self {
        self.simulate_latency = enabled;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Owned copy of the current state for rendering.
    pub fn snapshot(&self) -> AppState {
        self.state.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.loading
    }

    pub fn login_policy(&self) -> LoginPolicy {
        self.login_policy
    }

    /// `"<name> • <company>"`, or `Guest` without a session.
    pub fn profile_label(&self) -> String {
        self.state
            .session
            .as_ref()
            .map(Session::profile_label)
            .unwrap_or_else(|| "Guest".to_string())
    }

    pub fn avatar_initial(&self) -> char {
        self.state
            .session
            .as_ref()
            .map(Session::avatar_initial)
            .unwrap_or('G')
    }

    // ============================================================================
    // View navigation
    // ============================================================================

    /// Landing -> auth through one of the landing page entry points.
    ///
    /// Only valid from the landing page; a signed-in user reaches the auth
    /// view through [`logout`](Self::logout).
    pub fn open_auth(&mut self, entry: AuthEntry) -> Result<()> {
        self.ensure_idle()?;
        if self.state.view != View::Landing {
            return Err(DesignError::InvalidTransition {
                from: self.state.view,
                to: View::Auth,
            });
        }
        self.transition(View::Auth)?;
        self.state.auth_hint = entry.hint().map(str::to_string);
        Ok(())
    }

    /// Auth -> landing.
    pub fn back_to_landing(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.transition(View::Landing)?;
        self.state.auth_hint = None;
        Ok(())
    }

    pub fn select_device(&mut self, device: Device) {
        self.state.active_device = device;
    }

    // ============================================================================
    // Login / logout
    // ============================================================================

    /// Checks that a login may start and marks the workspace busy.
    ///
    /// Under [`LoginPolicy::Strict`] the fields are validated here and a
    /// failure is reported through the auth hint without any other change.
    pub fn begin_login(&mut self, input: LoginInput) -> Result<PendingLogin> {
        self.ensure_idle()?;
        self.ensure_can_enter_generator()?;

        if self.login_policy == LoginPolicy::Strict {
            if let Err(e) =
                validate_login_fields(&input.full_name, &input.email, &input.password, &input.company)
            {
                self.state.auth_hint = Some(e.to_string());
                return Err(e.into());
            }
        }

        self.state.loading = true;
        Ok(PendingLogin { input })
    }

    /// Resolves the pending input into a session and opens the generator.
    pub fn complete_login(&mut self, pending: PendingLogin) -> Result<AuthResolution> {
        let resolution = resolve_login(&pending.input, self.clock.now());
        self.install_session(resolution.session.clone(), &resolution.notices)?;
        Ok(resolution)
    }

    /// Logs in after the simulated delay.
    pub async fn login(&mut self, input: LoginInput) -> Result<AuthResolution> {
        let pending = self.begin_login(input)?;
        if self.simulate_latency {
            tokio::time::sleep(LOGIN_DELAY).await;
        }
        self.complete_login(pending)
    }

    /// Fast-track login with the guest profile. Skips validation and delay.
    pub fn login_guest(&mut self) -> Result<Session> {
        self.ensure_idle()?;
        self.ensure_can_enter_generator()?;

        let session = create_guest_session(self.clock.now());
        self.install_session(session.clone(), &[LoginNotice::FastTrack])?;
        Ok(session)
    }

    /// Generator -> auth, forgetting the session.
    pub fn logout(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.ensure_transition(View::Auth)?;

        self.repository.save_session(None);
        self.state.session = None;
        self.state.view = View::Auth;
        self.state.auth_hint = Some(LOGGED_OUT_HINT.to_string());

        tracing::info!("logged out");
        Ok(())
    }

    fn install_session(&mut self, session: Session, notices: &[LoginNotice]) -> Result<()> {
        if let Err(e) = self.ensure_transition(View::Generator) {
            self.state.loading = false;
            return Err(e);
        }

        self.repository.save_session(Some(&session));

        self.post(ChatMessage::assistant(format!(
            "Welcome {}. Dashboard unlocked.",
            session.full_name
        )));
        if !notices.is_empty() {
            let joined = notices
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            self.post(ChatMessage::assistant(format!("Login notices: {}", joined)));
        }

        tracing::info!(
            email = %session.email,
            notices = notices.len(),
            "logged in"
        );

        self.state.session = Some(session);
        self.state.view = View::Generator;
        self.state.auth_hint = None;
        self.state.loading = false;
        Ok(())
    }

    // ============================================================================
    // Generation
    // ============================================================================

    /// Checks that a generation may start and marks the workspace busy.
    ///
    /// Checks run in order: busy flag, session, view, prompt, credits. With a
    /// session, generation only runs from the generator view. Credits are
    /// re-read for the current day first, so a calendar rollover applies the
    /// daily reset before the quota check. A failed check spends nothing and
    /// creates no record.
    pub fn begin_generation(&mut self, request: GenerationRequest) -> Result<PendingGeneration> {
        self.ensure_idle()?;

        if self.state.session.is_none() {
            if self.state.view != View::Auth {
                self.transition(View::Auth)?;
            }
            self.state.auth_hint = Some(DesignError::AuthRequired.to_string());
            return Err(DesignError::AuthRequired);
        }

        if self.state.view != View::Generator {
            return Err(DesignError::InvalidTransition {
                from: self.state.view,
                to: View::Generator,
            });
        }

        let prompt = request.prompt.trim().to_string();
        if let Err(e) = validate_prompt(&prompt) {
            self.post(ChatMessage::assistant(e.to_string()));
            return Err(e.into());
        }

        let day = self.clock.today_key();
        self.state.credits = self.repository.load_credits(&day);
        if self.state.credits == 0 {
            let err = DesignError::QuotaExceeded;
            self.post(ChatMessage::assistant(err.to_string()));
            return Err(err);
        }

        self.post(ChatMessage::user(prompt.clone()));
        self.state.loading = true;

        Ok(PendingGeneration {
            request: GenerationRequest { prompt, ..request },
            day,
        })
    }

    /// Builds the record and commits it together with the spent credit.
    ///
    /// Records and credits are written only after both have been computed, so
    /// a failure leaves neither changed.
    pub fn complete_generation(&mut self, pending: PendingGeneration) -> Result<GenerationRecord> {
        let outcome = build_generation_record(pending.request, self.clock.now())
            .and_then(|record| spend_credit(self.state.credits).map(|left| (record, left)));

        let (record, remaining) = match outcome {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, "generation failed");
                self.state.loading = false;
                return Err(e);
            }
        };

        let mut records = Vec::with_capacity(MAX_RECORDS);
        records.push(record.clone());
        records.extend(self.state.records.iter().take(MAX_RECORDS - 1).cloned());

        self.repository.save_records(&records);
        self.repository.save_credits(remaining, &pending.day);

        self.state.records = records;
        self.state.credits = remaining;
        self.state.loading = false;
        self.post(ChatMessage::assistant(generation_summary(&record, remaining)));

        tracing::info!(
            id = %record.id,
            complexity = %record.complexity,
            remaining,
            "generated design"
        );
        Ok(record)
    }

    /// Waits for the simulated delay, then commits.
    pub async fn complete_generation_after_delay(
        &mut self,
        pending: PendingGeneration,
    ) -> Result<GenerationRecord> {
        if self.simulate_latency {
            tokio::time::sleep(GENERATION_DELAY).await;
        }
        self.complete_generation(pending)
    }

    /// Generates after the simulated delay.
    pub async fn generate(&mut self, request: GenerationRequest) -> Result<GenerationRecord> {
        let pending = self.begin_generation(request)?;
        self.complete_generation_after_delay(pending).await
    }

    // ============================================================================
    // Preview / export / chat
    // ============================================================================

    /// HTML of the latest record, or the placeholder document.
    pub fn preview_document(&self) -> Result<String> {
        match self.state.latest_record() {
            Some(record) => Ok(record.html.clone()),
            None => empty_preview_html(self.clock.now()),
        }
    }

    /// Exports the latest record and reports the outcome in the chat log.
    pub fn export_latest(&mut self, format: ExportFormat) -> Result<ExportArtifact> {
        match export_record(self.state.latest_record(), format) {
            Ok(artifact) => {
                self.post(ChatMessage::assistant(format!(
                    "Export {} completed.",
                    format.label()
                )));
                tracing::info!(format = %format, bytes = artifact.content.len(), "exported");
                Ok(artifact)
            }
            Err(e) => {
                self.post(ChatMessage::assistant(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn clear_chat(&mut self) {
        self.state.chat.clear();
    }

    pub fn new_project(&mut self) {
        self.post(ChatMessage::assistant(NEW_PROJECT));
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    fn post(&mut self, message: ChatMessage) {
        self.state.chat.push(message);
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.state.loading {
            return Err(DesignError::Busy);
        }
        Ok(())
    }

    fn ensure_transition(&self, to: View) -> Result<()> {
        let from = self.state.view;
        if from.can_transition_to(to) {
            Ok(())
        } else {
            Err(DesignError::InvalidTransition { from, to })
        }
    }

    fn ensure_can_enter_generator(&self) -> Result<()> {
        self.ensure_transition(View::Generator)
    }

    fn transition(&mut self, to: View) -> Result<()> {
        self.ensure_transition(to)?;
        tracing::debug!(from = %self.state.view, %to, "view transition");
        self.state.view = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use designai_core::chat::{ChatRole, WORKSPACE_READY};
    use designai_core::error::ValidationError;
    use designai_infrastructure::WorkspaceStorage;
    use std::sync::{Mutex, PoisonError};

    /// A clock that only moves when told to.
    struct ManualClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl ManualClock {
        fn new(start: DateTime<Utc>) -> Self {
            Self {
                now: Mutex::new(start),
            }
        }

        fn advance(&self, by: Duration) {
            *self.now.lock().unwrap_or_else(PoisonError::into_inner) += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap()
    }

    fn fixture() -> (Arc<WorkspaceStorage>, Arc<ManualClock>) {
        (
            Arc::new(WorkspaceStorage::in_memory()),
            Arc::new(ManualClock::new(start())),
        )
    }

    fn controller(storage: &Arc<WorkspaceStorage>, clock: &Arc<ManualClock>) -> WorkspaceController {
        WorkspaceController::new(storage.clone(), clock.clone()).with_simulated_latency(false)
    }

    fn ana() -> LoginInput {
        LoginInput::new("Ana", "ana@x.com", "longenough", "Acme")
    }

    fn logged_in(storage: &Arc<WorkspaceStorage>, clock: &Arc<ManualClock>) -> WorkspaceController {
        let mut ctrl = controller(storage, clock);
        ctrl.open_auth(AuthEntry::Login).unwrap();
        let pending = ctrl.begin_login(ana()).unwrap();
        ctrl.complete_login(pending).unwrap();
        ctrl
    }

    fn request(prompt: &str) -> GenerationRequest {
        GenerationRequest::new(prompt, "Dashboard", "Executive", Device::Desktop)
    }

    fn brief(n: usize) -> String {
        format!("Dashboard brief number {n} with cards and filters")
    }

    fn run_generation(ctrl: &mut WorkspaceController, prompt: &str) -> Result<GenerationRecord> {
        let pending = ctrl.begin_generation(request(prompt))?;
        ctrl.complete_generation(pending)
    }

    fn last_message(ctrl: &WorkspaceController) -> &str {
        &ctrl.state().chat.last().unwrap().text
    }

    #[test]
    fn test_fresh_workspace_starts_on_landing() {
        let (storage, clock) = fixture();
        let ctrl = controller(&storage, &clock);

        let state = ctrl.state();
        assert_eq!(state.view, View::Landing);
        assert_eq!(state.credits, 20);
        assert!(state.records.is_empty());
        assert!(!state.loading);
        assert_eq!(state.chat, vec![ChatMessage::assistant(WORKSPACE_READY)]);
        assert_eq!(ctrl.profile_label(), "Guest");
        assert_eq!(ctrl.avatar_initial(), 'G');
        assert!(
            ctrl.preview_document()
                .unwrap()
                .contains("No generation yet. Add a prompt and click Generate.")
        );
    }

    #[test]
    fn test_login_with_valid_fields() {
        let (storage, clock) = fixture();
        let mut ctrl = controller(&storage, &clock);
        ctrl.open_auth(AuthEntry::Login).unwrap();

        let pending = ctrl.begin_login(ana()).unwrap();
        assert!(ctrl.is_busy());
        let resolution = ctrl.complete_login(pending).unwrap();

        assert!(resolution.notices.is_empty());
        let expected = Session {
            full_name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            company: "Acme".to_string(),
            login_at: start(),
        };
        assert_eq!(resolution.session, expected);
        assert_eq!(ctrl.state().session.as_ref(), Some(&expected));
        assert_eq!(ctrl.state().view, View::Generator);
        assert!(!ctrl.is_busy());
        assert_eq!(last_message(&ctrl), "Welcome Ana. Dashboard unlocked.");
        assert_eq!(ctrl.profile_label(), "Ana • Acme");
        assert_eq!(ctrl.avatar_initial(), 'A');

        // Persisted: a restart opens the generator directly.
        let restarted = controller(&storage, &clock);
        assert_eq!(restarted.state().view, View::Generator);
        assert_eq!(restarted.state().session, Some(expected));
    }

    #[test]
    fn test_login_with_empty_fields_uses_fallbacks() {
        let (storage, clock) = fixture();
        let mut ctrl = controller(&storage, &clock);
        ctrl.open_auth(AuthEntry::GetStarted).unwrap();

        let pending = ctrl.begin_login(LoginInput::default()).unwrap();
        let resolution = ctrl.complete_login(pending).unwrap();

        assert_eq!(
            resolution.notices,
            vec![
                LoginNotice::NameFallback,
                LoginNotice::EmailFallback,
                LoginNotice::CompanyFallback,
                LoginNotice::DemoPassword,
            ]
        );
        assert_eq!(resolution.session.full_name, "Guest User");
        assert_eq!(resolution.session.email, "guest@local.invalid");
        assert_eq!(resolution.session.company, "Independent");
        assert_eq!(
            last_message(&ctrl),
            "Login notices: Name missing - fallback profile applied. \
             Email not valid - using demo email. \
             Company missing - default company assigned. \
             Password not verified - demo mode login enabled."
        );
    }

    #[test]
    fn test_strict_policy_rejects_invalid_login() {
        let (storage, clock) = fixture();
        let mut ctrl = controller(&storage, &clock).with_login_policy(LoginPolicy::Strict);
        ctrl.open_auth(AuthEntry::Login).unwrap();

        let err = ctrl
            .begin_login(LoginInput::new("Ana", "not-an-email", "longenough", "Acme"))
            .unwrap_err();

        assert!(matches!(
            err,
            DesignError::Validation(ValidationError::InvalidEmail)
        ));
        assert_eq!(ctrl.state().view, View::Auth);
        assert!(ctrl.state().session.is_none());
        assert!(!ctrl.is_busy());
        assert_eq!(
            ctrl.state().auth_hint.as_deref(),
            Some("Please enter a valid email address.")
        );
        assert!(storage.load_session().is_none());

        // Valid input still goes through.
        let pending = ctrl.begin_login(ana()).unwrap();
        ctrl.complete_login(pending).unwrap();
        assert_eq!(ctrl.state().view, View::Generator);
    }

    #[test]
    fn test_login_only_from_auth_view() {
        let (storage, clock) = fixture();
        let mut ctrl = controller(&storage, &clock);

        let err = ctrl.begin_login(ana()).unwrap_err();
        assert!(matches!(
            err,
            DesignError::InvalidTransition {
                from: View::Landing,
                to: View::Generator
            }
        ));
        assert!(ctrl.login_guest().is_err());
        assert!(!ctrl.is_busy());
        assert_eq!(ctrl.state().view, View::Landing);
    }

    #[test]
    fn test_guest_login() {
        let (storage, clock) = fixture();
        let mut ctrl = controller(&storage, &clock);
        ctrl.open_auth(AuthEntry::Demo).unwrap();
        assert!(ctrl.state().auth_hint.as_deref().unwrap().starts_with("Demo mode active."));

        let session = ctrl.login_guest().unwrap();

        assert_eq!(session.full_name, "Guest User");
        assert_eq!(ctrl.state().view, View::Generator);
        assert!(ctrl.state().auth_hint.is_none());
        assert_eq!(ctrl.profile_label(), "Guest User • Independent");
        assert_eq!(
            last_message(&ctrl),
            "Login notices: Fast-track enabled. Logged in with guest profile."
        );
        assert_eq!(storage.load_session(), Some(session));
    }

    #[test]
    fn test_logout() {
        let (storage, clock) = fixture();
        let mut ctrl = logged_in(&storage, &clock);

        ctrl.logout().unwrap();

        assert_eq!(ctrl.state().view, View::Auth);
        assert!(ctrl.state().session.is_none());
        assert_eq!(ctrl.state().auth_hint.as_deref(), Some(LOGGED_OUT_HINT));
        assert!(storage.load_session().is_none());

        // Logging out again is not a valid transition.
        assert!(matches!(
            ctrl.logout().unwrap_err(),
            DesignError::InvalidTransition { .. }
        ));
    }

    #[test]
    fn test_view_navigation() {
        let (storage, clock) = fixture();
        let mut ctrl = controller(&storage, &clock);

        assert!(ctrl.back_to_landing().is_err());
        assert_eq!(ctrl.state().view, View::Landing);

        ctrl.open_auth(AuthEntry::Pricing).unwrap();
        assert_eq!(
            ctrl.state().auth_hint.as_deref(),
            Some("Starter: 20 credits/day. Pro: unlimited projects and team features.")
        );
        assert!(ctrl.open_auth(AuthEntry::Login).is_err());

        ctrl.back_to_landing().unwrap();
        assert_eq!(ctrl.state().view, View::Landing);
        assert!(ctrl.state().auth_hint.is_none());
    }

    #[test]
    fn test_signed_in_user_cannot_reopen_auth() {
        let (storage, clock) = fixture();
        let mut ctrl = controller(&storage, &clock);
        ctrl.open_auth(AuthEntry::Demo).unwrap();
        ctrl.login_guest().unwrap();

        let err = ctrl.open_auth(AuthEntry::Pricing).unwrap_err();

        assert!(matches!(
            err,
            DesignError::InvalidTransition {
                from: View::Generator,
                to: View::Auth
            }
        ));
        assert_eq!(ctrl.state().view, View::Generator);
        assert!(ctrl.state().session.is_some());
        assert!(ctrl.state().auth_hint.is_none());
    }

    #[test]
    fn test_generation_with_session_needs_generator_view() {
        let (storage, clock) = fixture();
        let session = designai_core::session::create_guest_session(start());
        storage.save_session(Some(&session));

        // Restart lands on the generator; force the auth view with the session kept.
        let mut ctrl = controller(&storage, &clock);
        ctrl.state.view = View::Auth;

        let err = run_generation(&mut ctrl, &brief(1)).unwrap_err();

        assert!(matches!(
            err,
            DesignError::InvalidTransition {
                from: View::Auth,
                to: View::Generator
            }
        ));
        assert!(ctrl.state().records.is_empty());
        assert_eq!(ctrl.state().credits, 20);
        assert!(!ctrl.is_busy());
    }

    #[test]
    fn test_generate_requires_session() {
        let (storage, clock) = fixture();
        let mut ctrl = controller(&storage, &clock);

        let err = ctrl.begin_generation(request(&brief(1))).unwrap_err();

        assert!(err.is_auth_required());
        assert_eq!(ctrl.state().view, View::Auth);
        assert_eq!(
            ctrl.state().auth_hint.as_deref(),
            Some("Please open login page and continue to dashboard first.")
        );
        assert!(ctrl.state().records.is_empty());
        assert_eq!(ctrl.state().credits, 20);
        assert!(!ctrl.is_busy());
    }

    #[test]
    fn test_short_prompt_changes_nothing() {
        let (storage, clock) = fixture();
        let mut ctrl = logged_in(&storage, &clock);

        let err = run_generation(&mut ctrl, "short").unwrap_err();

        assert!(matches!(
            err,
            DesignError::Validation(ValidationError::PromptTooShort { min: 20 })
        ));
        assert!(ctrl.state().records.is_empty());
        assert_eq!(ctrl.state().credits, 20);
        assert_eq!(storage.load_credits("2026-10-18"), 20);
        assert!(!ctrl.is_busy());
        assert_eq!(last_message(&ctrl), err.to_string());
    }

    #[test]
    fn test_blocked_prompt_changes_nothing() {
        let (storage, clock) = fixture();
        let mut ctrl = logged_in(&storage, &clock);

        let err = run_generation(&mut ctrl, "Login page that doubles as a PHISHING kit").unwrap_err();

        assert!(matches!(
            err,
            DesignError::Validation(ValidationError::BlockedTerms)
        ));
        assert!(ctrl.state().records.is_empty());
        assert_eq!(ctrl.state().credits, 20);
    }

    #[test]
    fn test_generation_commits_record_and_credit() {
        let (storage, clock) = fixture();
        let mut ctrl = logged_in(&storage, &clock);
        ctrl.select_device(Device::Tablet);

        let pending = ctrl
            .begin_generation(GenerationRequest::new(
                "   Pricing page with three tiers and an FAQ section   ",
                "Landing Page",
                "Playful",
                ctrl.state().active_device,
            ))
            .unwrap();
        assert!(ctrl.is_busy());
        assert_eq!(
            pending.request().prompt,
            "Pricing page with three tiers and an FAQ section"
        );
        let record = ctrl.complete_generation(pending).unwrap();

        assert_eq!(record.prompt, "Pricing page with three tiers and an FAQ section");
        assert_eq!(record.device, Device::Tablet);
        assert_eq!(ctrl.state().records, vec![record.clone()]);
        assert_eq!(ctrl.state().credits, 19);
        assert!(!ctrl.is_busy());

        assert_eq!(storage.load_records(), vec![record.clone()]);
        assert_eq!(storage.load_credits("2026-10-18"), 19);
        assert_eq!(ctrl.preview_document().unwrap(), record.html);

        let chat = &ctrl.state().chat;
        assert_eq!(chat[chat.len() - 2], ChatMessage::user(record.prompt.clone()));
        assert_eq!(
            last_message(&ctrl),
            "Generated Landing Page (Playful) with Low complexity. Remaining credits: 19."
        );
    }

    #[test]
    fn test_twenty_generations_exhaust_quota() {
        let (storage, clock) = fixture();
        let mut ctrl = logged_in(&storage, &clock);

        for n in 0..20 {
            run_generation(&mut ctrl, &brief(n)).unwrap();
        }
        assert_eq!(ctrl.state().credits, 0);
        assert_eq!(storage.load_credits("2026-10-18"), 0);

        let err = run_generation(&mut ctrl, &brief(20)).unwrap_err();
        assert!(err.is_quota_exceeded());
        assert_eq!(ctrl.state().records.len(), 20);
        assert_eq!(storage.load_records().len(), 20);
        assert!(!ctrl.is_busy());
        assert_eq!(
            last_message(&ctrl),
            "Daily credits exhausted. New credits reset tomorrow."
        );
    }

    #[test]
    fn test_credits_reset_when_day_rolls_over() {
        let (storage, clock) = fixture();
        let mut ctrl = logged_in(&storage, &clock);
        for n in 0..20 {
            run_generation(&mut ctrl, &brief(n)).unwrap();
        }

        clock.advance(Duration::days(1));
        run_generation(&mut ctrl, &brief(20)).unwrap();

        assert_eq!(ctrl.state().credits, 19);
        assert_eq!(storage.load_credits("2026-10-19"), 19);
    }

    #[test]
    fn test_record_list_keeps_fifty_newest() {
        let (storage, clock) = fixture();
        let mut ctrl = logged_in(&storage, &clock);

        for n in 0..60 {
            if n > 0 && n % 20 == 0 {
                clock.advance(Duration::days(1));
            }
            run_generation(&mut ctrl, &brief(n)).unwrap();
        }

        let records = &ctrl.state().records;
        assert_eq!(records.len(), 50);
        assert_eq!(records[0].prompt, brief(59));
        assert_eq!(records[49].prompt, brief(10));
        assert_eq!(&storage.load_records(), records);
    }

    #[test]
    fn test_busy_flag_blocks_other_operations() {
        let (storage, clock) = fixture();
        let mut ctrl = logged_in(&storage, &clock);

        let pending = ctrl.begin_generation(request(&brief(1))).unwrap();
        assert!(ctrl.begin_generation(request(&brief(2))).unwrap_err().is_busy());
        assert!(ctrl.logout().unwrap_err().is_busy());
        assert_eq!(ctrl.state().credits, 20);

        ctrl.complete_generation(pending).unwrap();
        assert!(!ctrl.is_busy());
        assert_eq!(ctrl.state().records.len(), 1);
        run_generation(&mut ctrl, &brief(2)).unwrap();
    }

    #[test]
    fn test_export_latest() {
        let (storage, clock) = fixture();
        let mut ctrl = logged_in(&storage, &clock);

        let err = ctrl.export_latest(ExportFormat::Html).unwrap_err();
        assert!(matches!(err, DesignError::NothingToExport));
        assert_eq!(
            last_message(&ctrl),
            "Nothing to export yet. Generate a design first."
        );

        let record = run_generation(&mut ctrl, &brief(1)).unwrap();
        let first = ctrl.export_latest(ExportFormat::Html).unwrap();
        let second = ctrl.export_latest(ExportFormat::Html).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.content, record.html);
        assert_eq!(last_message(&ctrl), "Export HTML completed.");

        let json = ctrl.export_latest(ExportFormat::Json).unwrap();
        assert_eq!(json.file_name, "design-export.json");
        assert_eq!(last_message(&ctrl), "Export JSON completed.");
    }

    #[test]
    fn test_restart_replays_recent_records() {
        let (storage, clock) = fixture();
        {
            let mut ctrl = logged_in(&storage, &clock);
            for n in 0..8 {
                run_generation(&mut ctrl, &brief(n)).unwrap();
            }
        }

        let ctrl = controller(&storage, &clock);
        let chat = &ctrl.state().chat;
        assert_eq!(ctrl.state().view, View::Generator);
        assert_eq!(ctrl.state().credits, 12);
        assert_eq!(chat.len(), 12);
        assert_eq!(chat[0], ChatMessage::user(brief(2)));
        assert_eq!(chat[10], ChatMessage::user(brief(7)));
        assert_eq!(chat[11].role, ChatRole::Assistant);
    }

    #[test]
    fn test_chat_helpers() {
        let (storage, clock) = fixture();
        let mut ctrl = logged_in(&storage, &clock);

        ctrl.clear_chat();
        assert!(ctrl.state().chat.is_empty());
        ctrl.new_project();
        assert_eq!(ctrl.state().chat, vec![ChatMessage::assistant(NEW_PROJECT)]);
    }

    #[test]
    fn test_from_config() {
        let (storage, clock) = fixture();
        let mut config = AppConfig::default();
        config.auth.login_policy = LoginPolicy::Strict;
        config.simulation.enabled = false;

        let ctrl = WorkspaceController::from_config(storage, clock, &config);
        assert_eq!(ctrl.login_policy(), LoginPolicy::Strict);
        assert!(!ctrl.simulate_latency);
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_operations_wait_for_simulated_latency() {
        let (storage, clock) = fixture();
        let mut ctrl = WorkspaceController::new(storage.clone(), clock.clone());
        ctrl.open_auth(AuthEntry::Login).unwrap();

        let started = tokio::time::Instant::now();
        ctrl.login(ana()).await.unwrap();
        assert!(started.elapsed() >= LOGIN_DELAY);

        let started = tokio::time::Instant::now();
        let record = ctrl.generate(request(&brief(1))).await.unwrap();
        assert!(started.elapsed() >= GENERATION_DELAY);

        assert!(!ctrl.is_busy());
        assert_eq!(ctrl.state().records, vec![record]);
        assert_eq!(ctrl.state().credits, 19);
    }
}
