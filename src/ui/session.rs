use std::mem;

use crate::model::rolemap::RoleMap;
use crate::service::data_manager::{DataManager, DataRetrievalError, DataRetrievalResult};

use super::dispatch;
use super::input::Key;
use super::state::{Effect, StatsSnapshot, ViewState};

/// Which service call a loading phase is waiting on. Retrying after an error
/// always re-issues the plain fetch, matching the retry affordance on the
/// error screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Fetch,
    Update,
}

pub enum Phase {
    Loading(FetchKind),
    Error(String),
    Ready(StatsSnapshot),
}

pub enum Flow {
    Continue,
    Exit,
}

enum Action {
    Retry,
    Refresh,
    Exit,
}

/// Top-level owner of the session phase and the active view. Exactly one
/// fetch is ever in flight: the event loop never feeds keys in here while the
/// phase is `Loading`.
pub struct Session {
    manager: DataManager,
    pub phase: Phase,
    pub view: ViewState,
}

impl Session {
    pub fn new(manager: DataManager) -> Self {
        Self {
            manager,
            phase: Phase::Loading(FetchKind::Fetch),
            view: ViewState::default(),
        }
    }

    pub fn pending_fetch(&self) -> Option<FetchKind> {
        match self.phase {
            Phase::Loading(kind) => Some(kind),
            _ => None,
        }
    }

    /// Runs the pending service call to completion and folds the result into
    /// the phase. The caller draws the loading screen first; this blocks.
    pub fn complete_fetch(&mut self) {
        let Some(kind) = self.pending_fetch() else {
            return;
        };

        let result = match kind {
            FetchKind::Fetch => self.manager.get_role_map().cloned(),
            FetchKind::Update => {
                let manager = &mut self.manager;
                manager.update().and_then(|_| manager.get_role_map().cloned())
            }
        };

        self.apply_fetch_result(kind, result);
    }

    fn apply_fetch_result(&mut self, kind: FetchKind, result: DataRetrievalResult<RoleMap>) {
        match result {
            Ok(role_map) => {
                self.phase = Phase::Ready(StatsSnapshot::new(role_map));
                // A fresh map may have different roles and counts; any held
                // index could dangle, so navigation restarts at the menu.
                self.view = ViewState::default();
            }
            Err(error) => self.phase = Phase::Error(failure_message(kind, &error)),
        }
    }

    pub fn handle_key(&mut self, key: Key) -> Flow {
        let action = match &self.phase {
            Phase::Loading(_) => None,
            Phase::Error(_) => match key {
                Key::Enter => Some(Action::Retry),
                Key::Escape | Key::Char('q') => Some(Action::Exit),
                _ => None,
            },
            Phase::Ready(snapshot) => {
                let step = dispatch::dispatch(mem::take(&mut self.view), snapshot, key);
                self.view = step.view;
                step.effect.map(|effect| match effect {
                    Effect::Refresh => Action::Refresh,
                    Effect::Exit => Action::Exit,
                })
            }
        };

        match action {
            Some(Action::Retry) => {
                self.phase = Phase::Loading(FetchKind::Fetch);
                Flow::Continue
            }
            Some(Action::Refresh) => {
                self.phase = Phase::Loading(FetchKind::Update);
                Flow::Continue
            }
            Some(Action::Exit) => Flow::Exit,
            None => Flow::Continue,
        }
    }
}

/// Rate-limit refusals are shown in the service's own words; everything else
/// gets a prefix naming the call that failed.
fn failure_message(kind: FetchKind, error: &DataRetrievalError) -> String {
    if let Some(message) = error.rate_limit_message() {
        return message.to_string();
    }

    match kind {
        FetchKind::Fetch => format!("Failed to fetch data: {}", error),
        FetchKind::Update => format!("Failed to update data: {}", error),
    }
}
