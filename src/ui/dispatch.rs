use super::input::Key;
use super::pagination::{self, CHAMPS_PER_PAGE};
use super::search::search_champions;
use super::state::{Effect, MenuOption, SearchState, StatsSnapshot, ViewState};

/// Result of feeding one key event through a screen's reducer.
#[derive(Debug, PartialEq)]
pub struct Step {
    pub view: ViewState,
    pub effect: Option<Effect>,
}

impl Step {
    fn stay(view: ViewState) -> Self {
        Self { view, effect: None }
    }

    fn request(view: ViewState, effect: Effect) -> Self {
        Self {
            view,
            effect: Some(effect),
        }
    }
}

/// Routes a key event to the reducer of the active screen. Every held index
/// is clamped here on mutation; screens never leave their bounds.
pub fn dispatch(view: ViewState, data: &StatsSnapshot, key: Key) -> Step {
    match view {
        ViewState::Menu { selected } => menu(selected, data, key),
        ViewState::RoleSelection { roles, selected } => role_selection(roles, selected, key),
        ViewState::ChampionPage { role, page } => champion_page(role, page, data, key),
        ViewState::Search(state) => search_screen(state, data, key),
    }
}

fn menu(selected: usize, data: &StatsSnapshot, key: Key) -> Step {
    match key {
        Key::Up => Step::stay(ViewState::Menu {
            selected: selected.saturating_sub(1),
        }),
        Key::Down => Step::stay(ViewState::Menu {
            selected: (selected + 1).min(MenuOption::ALL.len() - 1),
        }),
        Key::Enter => match MenuOption::ALL[selected] {
            MenuOption::BrowseRoles => Step::stay(ViewState::RoleSelection {
                roles: data.role_names(),
                selected: 0,
            }),
            MenuOption::SearchCounters => Step::stay(ViewState::Search(SearchState::default())),
            MenuOption::RefreshData => {
                Step::request(ViewState::Menu { selected }, Effect::Refresh)
            }
            MenuOption::Exit => Step::request(ViewState::Menu { selected }, Effect::Exit),
        },
        _ => Step::stay(ViewState::Menu { selected }),
    }
}

fn role_selection(roles: Vec<String>, selected: usize, key: Key) -> Step {
    match key {
        Key::Up => {
            let selected = selected.saturating_sub(1);
            Step::stay(ViewState::RoleSelection { roles, selected })
        }
        Key::Down => {
            let selected = (selected + 1).min(roles.len().saturating_sub(1));
            Step::stay(ViewState::RoleSelection { roles, selected })
        }
        Key::Enter => match roles.get(selected) {
            Some(role) => Step::stay(ViewState::ChampionPage {
                role: role.clone(),
                page: 0,
            }),
            None => Step::stay(ViewState::RoleSelection { roles, selected }),
        },
        Key::Escape | Key::Char('q') => Step::stay(ViewState::Menu { selected: 0 }),
        _ => Step::stay(ViewState::RoleSelection { roles, selected }),
    }
}

fn champion_page(role: String, page: usize, data: &StatsSnapshot, key: Key) -> Step {
    let total_pages = pagination::page_count(data.role_champions(&role).len(), CHAMPS_PER_PAGE);
    match key {
        Key::Left => {
            let page = page.saturating_sub(1);
            Step::stay(ViewState::ChampionPage { role, page })
        }
        Key::Right => {
            let page = (page + 1).min(total_pages - 1);
            Step::stay(ViewState::ChampionPage { role, page })
        }
        Key::Escape | Key::Char('q') => Step::stay(ViewState::RoleSelection {
            roles: data.role_names(),
            selected: 0,
        }),
        _ => Step::stay(ViewState::ChampionPage { role, page }),
    }
}

fn search_screen(mut state: SearchState, data: &StatsSnapshot, key: Key) -> Step {
    // With a detail open, the result list is frozen underneath; only closing
    // the detail is allowed.
    if state.detail.is_some() {
        if matches!(key, Key::Escape | Key::Char('q')) {
            state.detail = None;
        }
        return Step::stay(ViewState::Search(state));
    }

    match key {
        Key::Escape | Key::Char('q') => return Step::stay(ViewState::Menu { selected: 0 }),
        Key::Up => state.selected = state.selected.saturating_sub(1),
        Key::Down => {
            if !state.results.is_empty() {
                state.selected = (state.selected + 1).min(state.results.len() - 1);
            }
        }
        Key::Enter => {
            if let Some(hit) = state.results.get(state.selected) {
                state.detail = Some(hit.clone());
            }
        }
        Key::Backspace => {
            if state.query.pop().is_some() {
                rerun_query(&mut state, data);
            }
        }
        Key::Char(c) => {
            state.query.push(c);
            rerun_query(&mut state, data);
        }
        _ => {}
    }

    Step::stay(ViewState::Search(state))
}

fn rerun_query(state: &mut SearchState, data: &StatsSnapshot) {
    state.results = search_champions(data.all_champions(), &state.query);
    state.selected = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{champion::ChampionRecord, rolemap::RoleMap};

    fn record(name: &str, winrate: Option<&str>) -> ChampionRecord {
        ChampionRecord {
            name: name.to_string(),
            winrate: winrate.map(str::to_string),
            pick_rate: None,
            counters: vec!["Nunu".to_string()],
        }
    }

    fn snapshot() -> StatsSnapshot {
        StatsSnapshot::new(RoleMap::new(vec![
            (
                "top".to_string(),
                vec![record("Darius", Some("53%")), record("Garen", Some("49%"))],
            ),
            ("jungle".to_string(), vec![record("Elise", Some("51%"))]),
        ]))
    }

    fn feed(view: ViewState, data: &StatsSnapshot, keys: &[Key]) -> ViewState {
        keys.iter().fold(view, |view, &key| {
            let step = dispatch(view, data, key);
            assert_eq!(step.effect, None);
            step.view
        })
    }

    #[test]
    fn menu_selection_clamps_at_both_ends() {
        let data = snapshot();

        let view = feed(ViewState::Menu { selected: 0 }, &data, &[Key::Up]);
        assert_eq!(view, ViewState::Menu { selected: 0 });

        let view = feed(
            ViewState::Menu { selected: 3 },
            &data,
            &[Key::Down, Key::Down],
        );
        assert_eq!(view, ViewState::Menu { selected: 3 });
    }

    #[test]
    fn menu_enter_routes_to_the_selected_option() {
        let data = snapshot();

        let browse = dispatch(ViewState::Menu { selected: 0 }, &data, Key::Enter);
        assert_eq!(
            browse.view,
            ViewState::RoleSelection {
                roles: vec!["top".to_string(), "jungle".to_string()],
                selected: 0,
            }
        );

        let search = dispatch(ViewState::Menu { selected: 1 }, &data, Key::Enter);
        assert_eq!(search.view, ViewState::Search(SearchState::default()));

        let refresh = dispatch(ViewState::Menu { selected: 2 }, &data, Key::Enter);
        assert_eq!(refresh.effect, Some(Effect::Refresh));

        let exit = dispatch(ViewState::Menu { selected: 3 }, &data, Key::Enter);
        assert_eq!(exit.effect, Some(Effect::Exit));
    }

    #[test]
    fn role_selection_opens_champion_page_at_page_zero() {
        let data = snapshot();
        let view = ViewState::RoleSelection {
            roles: data.role_names(),
            selected: 0,
        };

        let step = dispatch(view, &data, Key::Enter);
        assert_eq!(
            step.view,
            ViewState::ChampionPage {
                role: "top".to_string(),
                page: 0,
            }
        );
    }

    #[test]
    fn role_selection_clamps_and_escapes_to_menu() {
        let data = snapshot();
        let view = feed(
            ViewState::RoleSelection {
                roles: data.role_names(),
                selected: 0,
            },
            &data,
            &[Key::Down, Key::Down, Key::Down],
        );
        assert_eq!(
            view,
            ViewState::RoleSelection {
                roles: data.role_names(),
                selected: 1,
            }
        );

        let step = dispatch(view, &data, Key::Char('q'));
        assert_eq!(step.view, ViewState::Menu { selected: 0 });
    }

    #[test]
    fn champion_page_ignores_paging_past_the_boundaries() {
        let data = snapshot();
        let view = ViewState::ChampionPage {
            role: "top".to_string(),
            page: 0,
        };

        // two champions fit on one page, so both directions are no-ops
        let view = feed(view, &data, &[Key::Right, Key::Right, Key::Left]);
        assert_eq!(
            view,
            ViewState::ChampionPage {
                role: "top".to_string(),
                page: 0,
            }
        );
    }

    #[test]
    fn champion_page_escapes_back_to_role_selection() {
        let data = snapshot();
        let step = dispatch(
            ViewState::ChampionPage {
                role: "top".to_string(),
                page: 0,
            },
            &data,
            Key::Escape,
        );
        assert_eq!(
            step.view,
            ViewState::RoleSelection {
                roles: data.role_names(),
                selected: 0,
            }
        );
    }

    #[test]
    fn typing_recomputes_results_and_resets_selection() {
        let data = snapshot();
        let view = feed(
            ViewState::Search(SearchState::default()),
            &data,
            &[Key::Char('d'), Key::Char('a'), Key::Char('r')],
        );

        match view {
            ViewState::Search(state) => {
                assert_eq!(state.query, "dar");
                assert_eq!(state.results.len(), 1);
                assert_eq!(state.results[0].name(), "Darius");
                assert_eq!(state.selected, 0);
            }
            other => panic!("expected search state, got {:?}", other),
        }
    }

    #[test]
    fn appending_then_removing_a_character_round_trips() {
        let data = snapshot();
        let before = feed(
            ViewState::Search(SearchState::default()),
            &data,
            &[Key::Char('e')],
        );

        let after = feed(before.clone(), &data, &[Key::Char('x'), Key::Backspace]);
        assert_eq!(after, before);
    }

    #[test]
    fn backspace_on_empty_query_is_inert() {
        let data = snapshot();
        let view = feed(
            ViewState::Search(SearchState::default()),
            &data,
            &[Key::Backspace],
        );
        assert_eq!(view, ViewState::Search(SearchState::default()));
    }

    #[test]
    fn enter_with_no_results_is_inert() {
        let data = snapshot();
        let view = feed(
            ViewState::Search(SearchState::default()),
            &data,
            &[Key::Enter],
        );
        assert_eq!(view, ViewState::Search(SearchState::default()));
    }

    #[test]
    fn detail_opens_and_closes_without_losing_the_query() {
        let data = snapshot();
        let list = feed(
            ViewState::Search(SearchState::default()),
            &data,
            &[Key::Char('d'), Key::Char('a'), Key::Char('r')],
        );

        let detail = feed(list.clone(), &data, &[Key::Enter]);
        match &detail {
            ViewState::Search(state) => {
                assert_eq!(
                    state.detail.as_ref().map(|champ| champ.name()),
                    Some("Darius")
                );
            }
            other => panic!("expected search state, got {:?}", other),
        }

        // While the detail is open every other key is ignored
        let still_detail = feed(detail, &data, &[Key::Char('x'), Key::Up, Key::Enter]);
        let closed = feed(still_detail, &data, &[Key::Escape]);
        assert_eq!(closed, list);
    }

    #[test]
    fn result_selection_clamps_to_result_count() {
        let data = snapshot();
        let view = feed(
            ViewState::Search(SearchState::default()),
            &data,
            &[Key::Char('e'), Key::Down, Key::Down, Key::Down, Key::Down],
        );

        match view {
            ViewState::Search(state) => {
                // "e" matches Garen and Elise
                assert_eq!(state.results.len(), 2);
                assert_eq!(state.selected, 1);
            }
            other => panic!("expected search state, got {:?}", other),
        }
    }

    #[test]
    fn search_escape_returns_to_menu() {
        let data = snapshot();
        let step = dispatch(ViewState::Search(SearchState::default()), &data, Key::Escape);
        assert_eq!(step.view, ViewState::Menu { selected: 0 });
    }
}
