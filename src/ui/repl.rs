use std::io::{stdin, stdout, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::service::data_manager::DataManager;
use crate::ui::{
    input,
    session::{Flow, Phase, Session},
    state::{MenuOption, ViewState},
    views,
};

use super::ReplError;

pub fn run(manager: DataManager) -> Result<(), ReplError> {
    // Without raw input there is nothing to navigate; show the state once.
    if !stdin().is_tty() {
        return run_readonly(&manager);
    }

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = Session::new(manager);
    let result = run_loop(&mut terminal, &mut session);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut Session,
) -> Result<(), ReplError> {
    loop {
        terminal.draw(|f| render(f, session))?;

        // The loading screen is on the terminal now; the blocking service
        // call happens here, so no input is read while a fetch is in flight.
        if session.pending_fetch().is_some() {
            session.complete_fetch();
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                if let Some(decoded) = input::decode(&key) {
                    if let Flow::Exit = session.handle_key(decoded) {
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn render(frame: &mut Frame, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(frame.area());

    let title = Paragraph::new(" A minimalist way to check matchups and counters")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title("Riftstats - League Champion Statistics")
                .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(title, chunks[0]);

    match &session.phase {
        Phase::Loading(_) => views::status::render_loading(frame, chunks[1]),
        Phase::Error(message) => views::status::render_error(frame, chunks[1], message),
        Phase::Ready(snapshot) => match &session.view {
            ViewState::Menu { selected } => views::menu::render(frame, chunks[1], *selected),
            ViewState::RoleSelection { roles, selected } => {
                views::roles::render(frame, chunks[1], roles, *selected)
            }
            ViewState::ChampionPage { role, page } => views::champions::render(
                frame,
                chunks[1],
                role,
                snapshot.role_champions(role),
                *page,
            ),
            ViewState::Search(state) => views::search::render(frame, chunks[1], state),
        },
    }
}

fn run_readonly(manager: &DataManager) -> Result<(), ReplError> {
    println!("Riftstats - League Champion Statistics");
    println!("Fetching champion data...\n");

    match manager.get_role_map() {
        Ok(role_map) => {
            for option in MenuOption::ALL {
                println!("  {:<22} {}", option.label(), option.description());
            }
            println!();
            println!("Data loaded for roles: {}", role_map.role_names().join(", "));
            println!("Interactive navigation requires a terminal with raw input support.");
        }
        Err(error) => println!("Failed to fetch data: {}", error),
    }

    Ok(())
}
