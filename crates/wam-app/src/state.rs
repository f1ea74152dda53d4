//! Application state (Model in TEA pattern)

use wam_core::{AppPhase, DashboardFilter, ViewSelector};

use crate::composer::{ComposerModal, ComposerState};
use crate::config::Settings;
use crate::connect::ConnectOverlayState;
use crate::request::{RequestId, RequestSeq};

/// Which screen receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Connect overlay, shown until the user confirms
    Connect,
    Dashboard,
    Composer,
    AiDialog,
    AddButtonDialog,
    ImagePrompt,
}

/// State owned by the mounted dashboard view
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardState {
    pub filter: DashboardFilter,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Settings from `.wam/config.toml`
    pub settings: Settings,

    /// Set once by [`AppState::connect`], never cleared
    connected: bool,

    /// Present until the user confirms the connection
    pub connect_overlay: Option<ConnectOverlayState>,

    view: ViewSelector,

    /// Mounted while `view` is Dashboard
    pub dashboard: Option<DashboardState>,

    /// Mounted while `view` is NewCampaign
    pub composer: Option<ComposerState>,

    request_seq: RequestSeq,

    /// Animation frame counter, advanced on every tick
    pub tick_count: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            settings,
            connected: false,
            connect_overlay: Some(ConnectOverlayState::new()),
            view: ViewSelector::default(),
            dashboard: None,
            composer: None,
            request_seq: RequestSeq::new(),
            tick_count: 0,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn view(&self) -> ViewSelector {
        self.view
    }

    /// Dismiss the connect overlay and mount the selected view.
    ///
    /// Returns `false` if already connected.
    pub fn connect(&mut self) -> bool {
        if self.connected {
            return false;
        }
        self.connected = true;
        self.connect_overlay = None;
        self.mount(self.view);
        true
    }

    /// Select a view, remounting it when it changes.
    ///
    /// Before connection only the selection is recorded. Returns `true` if
    /// the selection changed.
    pub fn set_view(&mut self, view: ViewSelector) -> bool {
        if self.view == view {
            return false;
        }
        self.view = view;
        if self.connected {
            self.mount(view);
        }
        true
    }

    /// Build fresh state for `view` and drop the other view's state
    fn mount(&mut self, view: ViewSelector) {
        match view {
            ViewSelector::Dashboard => {
                self.composer = None;
                self.dashboard = Some(DashboardState::default());
            }
            ViewSelector::NewCampaign => {
                self.dashboard = None;
                self.composer = Some(ComposerState::new());
            }
        }
    }

    /// Current input mode
    pub fn ui_mode(&self) -> UiMode {
        if !self.connected {
            return UiMode::Connect;
        }
        match self.view {
            ViewSelector::Dashboard => UiMode::Dashboard,
            ViewSelector::NewCampaign => match self.composer.as_ref().and_then(|c| c.modal.as_ref())
            {
                None => UiMode::Composer,
                Some(ComposerModal::AiGenerator(_)) => UiMode::AiDialog,
                Some(ComposerModal::AddButton(_)) => UiMode::AddButtonDialog,
                Some(ComposerModal::ImagePath(_)) => UiMode::ImagePrompt,
            },
        }
    }

    pub fn next_request_id(&mut self) -> RequestId {
        self.request_seq.next()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
