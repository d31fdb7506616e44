// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, request results)
// - Layered key dispatch: Modal → Global → View-specific

pub mod app;
pub mod clipboard;
pub mod input;
pub mod modal;
pub mod toast;
pub mod ui;

use crate::api::ApiClient;
use crate::config::Config;
use crate::events::AppEvent;
use crate::session::SessionStore;
use anyhow::{Context, Result};
use app::{App, Route, View};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the client UI
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal on the way out.
pub async fn run_tui(
    config: Config,
    api: ApiClient,
    session: SessionStore,
    initial: Option<Route>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (tx, mut rx) = mpsc::channel(64);
    let mut app = App::new(config, api, session, tx);
    app.start(initial);

    let result = run_event_loop(&mut terminal, &mut app, &mut rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three things at once with tokio::select!: keyboard input, a
/// periodic redraw tick, and completion events from spawned request tasks.
/// The UI stays responsive while any number of requests are in flight.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mut mpsc::Receiver<AppEvent>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick: toast expiry and redraw
            _ = tick_interval.tick() => {
                app.tick();
            }

            // Request results from spawned tasks
            Some(app_event) = rx.recv() => {
                app.handle_event(app_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Layered key dispatch: Modal → Global → View-specific
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C quits from anywhere, even mid-typing
    if key_event.code == KeyCode::Char('c')
        && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        app.should_quit = true;
        return;
    }

    // Layer 1: an open modal captures all input
    if app.handle_modal_key(key_event.code) {
        return;
    }

    // Layer 2: single-letter globals, suspended while a text input has focus
    if !app.text_input_active() {
        match key_event.code {
            KeyCode::Char('q') => {
                app.should_quit = true;
                return;
            }
            KeyCode::Char('L') => {
                if app.session.is_authenticated() {
                    app.logout();
                }
                return;
            }
            _ => {}
        }
    }

    // Layer 3: the active view
    match app.view {
        View::Login => handle_login_keys(app, &key_event),
        View::ArticleList => handle_list_keys(app, &key_event),
        View::ArticleDetail(_) => handle_reader_keys(app, &key_event),
        View::AdminConsole => handle_console_keys(app, &key_event),
        View::AdminEditor => handle_editor_keys(app, &key_event),
    }
}

fn handle_login_keys(app: &mut App, key: &KeyEvent) {
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Enter => app.submit_auth(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.auth.toggle_focus(),
        // F2 flips between sign-in and sign-up
        KeyCode::F(2) => app.auth.toggle_mode(),
        _ => {
            let field = match app.auth.focus {
                app::AuthFocus::Username => &mut app.auth.username,
                app::AuthFocus::Password => &mut app.auth.password,
            };
            field.handle_key(key);
        }
    }
}

fn handle_list_keys(app: &mut App, key: &KeyEvent) {
    if app.articles.searching {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.articles.searching = false,
            // Ctrl+U clears the whole term
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.articles.search.clear();
                app.articles.clamp_selection();
            }
            _ => {
                if app.articles.search.handle_key(key) {
                    app.articles.clamp_selection();
                }
            }
        }
        return;
    }

    match key.code {
        KeyCode::Char('/') => app.articles.searching = true,
        KeyCode::Up | KeyCode::Char('k') => app.articles.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.articles.select_next(),
        KeyCode::Enter => {
            if let Some(article) = app.articles.selected_article() {
                let id = article.id;
                app.navigate(Route::Article(id));
            }
        }
        KeyCode::Char('a') => app.navigate(Route::Admin),
        KeyCode::Char('r') => app.refresh_articles(),
        _ => {}
    }
}

fn handle_reader_keys(app: &mut App, key: &KeyEvent) {
    if app.reader.composing {
        match key.code {
            KeyCode::Esc => app.reader.composing = false,
            // Ctrl+S submits the comment (Enter inserts a newline)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.submit_comment();
            }
            _ => {
                app.reader.comment_input.handle_key(key);
            }
        }
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.navigate(Route::Articles),
        KeyCode::Char('c') => app.reader.composing = true,
        KeyCode::Up | KeyCode::Char('k') => app.reader.scroll = app.reader.scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => {
            app.reader.scroll = app.reader.scroll.saturating_add(1)
        }
        KeyCode::PageUp => app.reader.scroll = app.reader.scroll.saturating_sub(10),
        KeyCode::PageDown => app.reader.scroll = app.reader.scroll.saturating_add(10),
        KeyCode::Tab => app.reader.select_next_comment(),
        KeyCode::Char('d') => app.request_delete_comment(),
        KeyCode::Char('s') => {
            if let Some(article) = app.reader.article.clone() {
                app.open_share(&article);
            }
        }
        KeyCode::Char('y') => {
            if let Some(article) = &app.reader.article {
                let url = crate::share::article_url(&app.config.site_url, article.id);
                app.copy_with_toast("link", &url);
            }
        }
        KeyCode::Char('r') => {
            let View::ArticleDetail(id) = app.view else {
                return;
            };
            app.navigate(Route::Article(id));
        }
        _ => {}
    }
}

fn handle_console_keys(app: &mut App, key: &KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('b') => app.navigate(Route::Articles),
        KeyCode::Up | KeyCode::Char('k') => app.admin.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.admin.select_next(),
        KeyCode::Char('n') => app.open_editor(None),
        KeyCode::Char('e') => {
            if let Some(article) = app.admin.selected_article().cloned() {
                app.open_editor(Some(&article));
            }
        }
        KeyCode::Enter | KeyCode::Char('v') => {
            if let Some(article) = app.admin.selected_article() {
                let id = article.id;
                app.navigate(Route::Article(id));
            }
        }
        KeyCode::Char('d') => app.request_delete_article(),
        KeyCode::Char('s') => {
            if let Some(article) = app.admin.selected_article().cloned() {
                app.open_share(&article);
            }
        }
        KeyCode::Char('r') => app.refresh_my_articles(),
        _ => {}
    }
}

fn handle_editor_keys(app: &mut App, key: &KeyEvent) {
    use crate::controllers::admin::EditorFocus;

    match key.code {
        KeyCode::Esc => app.cancel_editor(),
        KeyCode::Tab | KeyCode::BackTab => app.admin.toggle_focus(),
        // Ctrl+S saves; the form refuses while a field is empty
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => app.save_draft(),
        // Ctrl+P toggles the published flag on the draft
        KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.admin.draft.published = !app.admin.draft.published;
        }
        _ => match app.admin.focus {
            EditorFocus::Title => {
                // Enter in the headline drops focus into the body
                if key.code == KeyCode::Enter {
                    app.admin.toggle_focus();
                } else {
                    app.admin.draft.title.handle_key(key);
                }
            }
            EditorFocus::Content => {
                app.admin.draft.content.handle_key(key);
            }
        },
    }
}
