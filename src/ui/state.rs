use crate::model::{
    champion::{AnnotatedChampion, ChampionRecord},
    rolemap::RoleMap,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    BrowseRoles,
    SearchCounters,
    RefreshData,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 4] = [
        MenuOption::BrowseRoles,
        MenuOption::SearchCounters,
        MenuOption::RefreshData,
        MenuOption::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::BrowseRoles => "View Best Champions",
            MenuOption::SearchCounters => "Champion Counters",
            MenuOption::RefreshData => "Update Data",
            MenuOption::Exit => "Exit Application",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuOption::BrowseRoles => "Browse top performing champions by role",
            MenuOption::SearchCounters => "Find counters for specific champions",
            MenuOption::RefreshData => "Refresh champion statistics",
            MenuOption::Exit => "Close the champion analyzer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<AnnotatedChampion>,
    pub selected: usize,
    pub detail: Option<AnnotatedChampion>,
}

/// Which screen is on and where the user is on it. Holds indices and strings
/// only, never references into the loaded data, so resetting it is cheap and
/// always safe.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Menu { selected: usize },
    RoleSelection { roles: Vec<String>, selected: usize },
    ChampionPage { role: String, page: usize },
    Search(SearchState),
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Menu { selected: 0 }
    }
}

/// Side-effect requests a reducer can emit alongside the next view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Refresh,
    Exit,
}

/// The loaded role map plus the flattened champion list derived from it.
/// Rebuilt wholesale whenever a fetch replaces the data, never per keystroke.
#[derive(Debug, Clone, Default)]
pub struct StatsSnapshot {
    role_map: RoleMap,
    all_champions: Vec<AnnotatedChampion>,
}

impl StatsSnapshot {
    pub fn new(role_map: RoleMap) -> Self {
        let all_champions = role_map.flatten();
        Self {
            role_map,
            all_champions,
        }
    }

    pub fn role_names(&self) -> Vec<String> {
        self.role_map.role_names()
    }

    pub fn role_champions(&self, role: &str) -> &[ChampionRecord] {
        self.role_map.champions(role)
    }

    pub fn all_champions(&self) -> &[AnnotatedChampion] {
        &self.all_champions
    }
}
