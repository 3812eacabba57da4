//! Application bootstrap and process-wide state container
//!
//! Business rules live behind the error taxonomy in `todoli-core`; this
//! module only wires the skeleton together. Any failure escaping [`run`]
//! is already a typed [`Error`](todoli_core::Error) and is presented at
//! the single catch-point in `main`.

use todoli_core::prelude::*;

use crate::config::Settings;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Application is initializing
    #[default]
    Initializing,
    /// Main screen is active
    Running,
    /// Application is shutting down
    ShuttingDown,
}

/// Process-wide application state
///
/// Constructed once at the entry point and passed down explicitly;
/// nothing reaches for it through global state.
#[derive(Debug)]
pub struct App {
    pub settings: Settings,
    pub phase: AppPhase,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            phase: AppPhase::Initializing,
        }
    }

    pub fn set_phase(&mut self, phase: AppPhase) {
        debug!("App phase: {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}

/// Run the application with the given settings.
///
/// Builds the state container, brings up the initial screen, and returns
/// once the user quits. The screen itself is a placeholder for now.
pub fn run(settings: Settings) -> Result<()> {
    let mut app = App::new(settings);
    info!("Theme: {}", app.settings.ui.theme);

    app.set_phase(AppPhase::Running);
    info!("Todoli ready");

    app.set_phase(AppPhase::ShuttingDown);
    info!("Todoli shutting down");
    Ok(())
}
