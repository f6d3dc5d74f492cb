//! Workspace state domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::chat::ChatMessage;
use crate::record::GenerationRecord;
use crate::session::Session;

/// Top-level screen of the workspace.
///
/// Allowed transitions: landing→auth, auth→generator, auth→landing and
/// generator→auth. Everything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum View {
    Landing,
    Auth,
    Generator,
}

impl View {
    /// View shown at startup.
    pub fn initial(has_session: bool) -> Self {
        if has_session {
            Self::Generator
        } else {
            Self::Landing
        }
    }

    pub fn can_transition_to(self, to: View) -> bool {
        matches!(
            (self, to),
            (Self::Landing, Self::Auth)
                | (Self::Auth, Self::Generator)
                | (Self::Auth, Self::Landing)
                | (Self::Generator, Self::Auth)
        )
    }
}

/// Landing-page entry point that leads to the auth view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEntry {
    Login,
    GetStarted,
    Demo,
    Pricing,
}

impl AuthEntry {
    /// Hint shown on the auth view for this entry point, if any.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            Self::Login | Self::GetStarted => None,
            Self::Demo => Some(
                "Demo mode active. You can continue to dashboard without valid credentials.",
            ),
            Self::Pricing => {
                Some("Starter: 20 credits/day. Pro: unlimited projects and team features.")
            }
        }
    }
}

/// Preview viewport a record was generated for.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Device {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceSize {
    pub width: u32,
    pub height: u32,
}

impl Device {
    pub const ALL: [Device; 3] = [Device::Desktop, Device::Tablet, Device::Mobile];

    pub fn dimensions(self) -> DeviceSize {
        match self {
            Self::Desktop => DeviceSize {
                width: 1280,
                height: 720,
            },
            Self::Tablet => DeviceSize {
                width: 834,
                height: 1112,
            },
            Self::Mobile => DeviceSize {
                width: 390,
                height: 844,
            },
        }
    }
}

/// In-memory workspace snapshot handed to the UI for rendering.
///
/// Built at startup from the persisted session, records and credits. Only
/// those three parts are persisted, each as its own document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub view: View,
    pub session: Option<Session>,
    /// Newest first, at most [`crate::config::MAX_RECORDS`].
    pub records: Vec<GenerationRecord>,
    pub credits: u32,
    /// Busy flag of the in-flight login/generation.
    pub loading: bool,
    pub active_device: Device,
    pub auth_hint: Option<String>,
    pub chat: Vec<ChatMessage>,
}

impl AppState {
    pub fn new(session: Option<Session>, records: Vec<GenerationRecord>, credits: u32) -> Self {
        Self {
            view: View::initial(session.is_some()),
            session,
            records,
            credits,
            loading: false,
            active_device: Device::default(),
            auth_hint: None,
            chat: Vec::new(),
        }
    }

    pub fn latest_record(&self) -> Option<&GenerationRecord> {
        self.records.first()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}
