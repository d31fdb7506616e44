// UI rendering logic
//
// All drawing lives here. Each view gets one draw function; the shared
// chrome is a one-line masthead on top and a key-hint status bar at the
// bottom. Overlays (modal, toast) render last so they sit on top.

use super::app::{App, AuthFocus, AuthMode, View};
use super::modal::Modal;
use crate::api::types::{Article, Comment};
use crate::controllers::admin::EditorFocus;
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

const ACCENT: Color = Color::Cyan;
const DIM: Color = Color::DarkGray;

/// Top-level draw entry point
pub fn draw(f: &mut Frame, app: &App) {
    if app.view == View::Login {
        draw_login(f, app);
    } else {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

        draw_masthead(f, chunks[0], app);
        match app.view {
            View::Login => unreachable!("handled above"),
            View::ArticleList => draw_list(f, chunks[1], app),
            View::ArticleDetail(_) => draw_reader(f, chunks[1], app),
            View::AdminConsole => draw_console(f, chunks[1], app),
            View::AdminEditor => draw_editor(f, chunks[1], app),
        }
        draw_status_bar(f, chunks[2], app);
    }

    if let Some(modal) = &app.modal {
        draw_modal(f, modal);
    }
    if let Some(toast) = &app.toast {
        let area = f.area();
        toast.render(f, area);
    }
}

/// One-line masthead: brand on the left, identity on the right
fn draw_masthead(f: &mut Frame, area: Rect, app: &App) {
    let identity = match app.session.user() {
        Some(user) if user.is_admin() => format!("{} (editor)", user.username),
        Some(user) => user.username.clone(),
        None if app.resolving_session => "resolving session…".to_string(),
        None => String::new(),
    };

    let left = Span::styled(" BROADSHEET ", Style::default().fg(ACCENT).bold());
    let view_name = Span::styled(format!("· {}", app.view.name()), Style::default().fg(DIM));
    let pad = area
        .width
        .saturating_sub((14 + app.view.name().len() + 3 + identity.len()) as u16);
    let right = Span::styled(identity, Style::default().fg(DIM).italic());

    let line = Line::from(vec![
        left,
        view_name,
        Span::raw(" ".repeat(pad as usize)),
        right,
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Bottom hint bar, varies per view
fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.view {
        View::Login => "Enter submit │ Tab field │ F2 login/signup │ Esc quit",
        View::ArticleList => {
            if app.articles.searching {
                "type to filter │ Ctrl+U clear │ Esc/Enter done"
            } else {
                "↑↓ select │ Enter read │ / search │ a desk │ r refresh │ L logout │ q quit"
            }
        }
        View::ArticleDetail(_) => {
            if app.reader.composing {
                "type your comment │ Ctrl+S post │ Esc cancel"
            } else {
                "↑↓ scroll │ c comment │ Tab comments │ d delete │ s share │ y copy link │ Esc back"
            }
        }
        View::AdminConsole => {
            "↑↓ select │ n new │ e edit │ Enter read │ d delete │ s share │ Esc back"
        }
        View::AdminEditor => "Tab field │ Ctrl+S save │ Ctrl+P publish │ Esc cancel",
    };

    let bar = Paragraph::new(format!(" {hints}"))
        .style(Style::default().fg(DIM))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(bar, area);
}

/// Render an input value with a visible cursor mark when focused
fn with_cursor(value: &str, cursor: usize, focused: bool) -> String {
    if !focused {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len() + 3);
    for (i, c) in value.chars().enumerate() {
        if i == cursor {
            out.push('▏');
        }
        out.push(c);
    }
    if cursor >= value.chars().count() {
        out.push('▏');
    }
    out
}

// ── login ───────────────────────────────────────────────────────────────────

fn draw_login(f: &mut Frame, app: &App) {
    let area = centered_rect(f.area(), 46, 13);

    let title = match app.auth.mode {
        AuthMode::Login => "The Daily Log",
        AuthMode::Signup => "New Subscription",
    };
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let masked = "•".repeat(app.auth.password.value().chars().count());
    let focus = app.auth.focus;
    let field_style = |focused: bool| {
        if focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default()
        }
    };

    let mut lines = vec![
        Line::from(Span::styled("Username", Style::default().fg(DIM))),
        Line::from(Span::styled(
            with_cursor(
                app.auth.username.value(),
                app.auth.username.cursor(),
                focus == AuthFocus::Username,
            ),
            field_style(focus == AuthFocus::Username),
        )),
        Line::default(),
        Line::from(Span::styled("Password", Style::default().fg(DIM))),
        Line::from(Span::styled(
            with_cursor(
                &masked,
                app.auth.password.cursor(),
                focus == AuthFocus::Password,
            ),
            field_style(focus == AuthFocus::Password),
        )),
        Line::default(),
    ];

    if app.auth.submitting {
        lines.push(Line::from(Span::styled(
            "Signing in…",
            Style::default().fg(DIM).italic(),
        )));
    } else if let Some(error) = &app.auth.error {
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )));
    } else {
        let switch = match app.auth.mode {
            AuthMode::Login => "No credentials? F2 to apply.",
            AuthMode::Signup => "Already subscribed? F2 to sign in.",
        };
        lines.push(Line::from(Span::styled(
            switch,
            Style::default().fg(DIM).italic(),
        )));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

// ── article list ────────────────────────────────────────────────────────────

fn draw_list(f: &mut Frame, area: Rect, app: &App) {
    let chunks =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);

    // Search box
    let search_focused = app.articles.searching;
    let search_block = Block::default()
        .title(" Search by headline ")
        .borders(Borders::ALL)
        .border_style(if search_focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(DIM)
        });
    let term = with_cursor(
        app.articles.search.value(),
        app.articles.search.cursor(),
        search_focused,
    );
    f.render_widget(Paragraph::new(term).block(search_block), chunks[0]);

    // Article rows
    let filtered = app.articles.filtered();
    if app.articles.loading && !app.articles.loaded_once {
        f.render_widget(loading_line(), chunks[1]);
        return;
    }
    if filtered.is_empty() {
        let msg = Paragraph::new(app.articles.empty_message())
            .alignment(Alignment::Center)
            .style(Style::default().fg(DIM).italic());
        f.render_widget(msg, chunks[1]);
        return;
    }

    let width = chunks[1].width.saturating_sub(16) as usize;
    let items: Vec<ListItem> = filtered
        .iter()
        .enumerate()
        .map(|(i, article)| list_row(article, width, i == app.articles.selected))
        .collect();

    let title = if app.articles.search.value().is_empty() {
        format!(" Front page ({}) ", filtered.len())
    } else {
        format!(" Found {} ", filtered.len())
    };
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DIM)),
    );
    f.render_widget(list, chunks[1]);
}

fn list_row(article: &Article, width: usize, selected: bool) -> ListItem<'static> {
    let date = article.created_at.format("%b %d").to_string();
    let title = truncate_to_width(&article.title, width);
    let style = if selected {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    ListItem::new(Line::from(vec![
        Span::styled(if selected { "▸ " } else { "  " }, style),
        Span::styled(format!("{date:<8}"), Style::default().fg(DIM)),
        Span::styled(title, style),
    ]))
}

// ── article reader ──────────────────────────────────────────────────────────

fn draw_reader(f: &mut Frame, area: Rect, app: &App) {
    if !app.reader.ready() {
        f.render_widget(loading_line(), area);
        return;
    }
    let Some(article) = &app.reader.article else {
        // Distinct not-found state, not an error screen
        let msg = Paragraph::new("Page intentionally left blank.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(DIM).italic());
        f.render_widget(msg, area);
        return;
    };

    let composer_height = if app.reader.composing {
        (app.reader.comment_input.line_count() as u16 + 2).clamp(3, 8)
    } else {
        0
    };
    let comment_rows = (app.reader.comments.len() as u16 * 2).clamp(1, 10) + 1;
    let chunks = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(comment_rows),
        Constraint::Length(composer_height),
    ])
    .split(area);

    // Article body with header
    let mut lines = vec![
        Line::from(Span::styled(
            article.title.clone(),
            Style::default().bold(),
        )),
        Line::from(Span::styled(
            format!(
                "By {} · {}",
                article.author_name,
                article.created_at.format("%A, %B %d, %Y")
            ),
            Style::default().fg(DIM).italic(),
        )),
        Line::default(),
    ];
    for paragraph in article.paragraphs() {
        lines.push(Line::raw(paragraph.to_string()));
    }
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.reader.scroll, 0))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(DIM)));
    f.render_widget(body, chunks[0]);

    // Comments
    draw_comments(f, chunks[1], app);

    // Composer
    if app.reader.composing {
        let composer = Paragraph::new(with_cursor(
            app.reader.comment_input.value(),
            app.reader.comment_input.cursor(),
            true,
        ))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(if app.reader.submitting {
                    " Posting… "
                } else {
                    " Add your voice "
                })
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        );
        f.render_widget(composer, chunks[2]);
    }
}

fn draw_comments(f: &mut Frame, area: Rect, app: &App) {
    let comments = &app.reader.comments;
    let block = Block::default()
        .title(format!(" Reader commentary ({}) ", comments.len()))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(DIM));

    if comments.is_empty() {
        let empty = Paragraph::new("No comments yet. Be the first to share your thoughts.")
            .style(Style::default().fg(DIM).italic())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let moderator = crate::controllers::reader::can_moderate(
        app.session.user(),
        app.reader.article.as_ref(),
    );
    let items: Vec<ListItem> = comments
        .iter()
        .enumerate()
        .map(|(i, c)| comment_row(c, moderator && i == app.reader.selected_comment))
        .collect();
    f.render_widget(List::new(items).block(block), area);
}

fn comment_row(comment: &Comment, selected: bool) -> ListItem<'static> {
    let head_style = if selected {
        Style::default().fg(ACCENT).bold()
    } else {
        Style::default().fg(DIM)
    };
    ListItem::new(vec![
        Line::from(Span::styled(
            format!(
                "{}@{} · {}",
                if selected { "▸ " } else { "  " },
                comment.username,
                comment.created_at.format("%b %d, %Y")
            ),
            head_style,
        )),
        Line::from(Span::raw(format!("    {}", comment.content))),
    ])
}

// ── admin console ───────────────────────────────────────────────────────────

fn draw_console(f: &mut Frame, area: Rect, app: &App) {
    if app.admin.loading && !app.admin.loaded_once {
        f.render_widget(loading_line(), area);
        return;
    }

    let block = Block::default()
        .title(" Editor's desk · your articles ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIM));

    if app.admin.articles.is_empty() {
        let empty = Paragraph::new("Nothing on the desk yet. Press n to draft a piece.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(DIM).italic())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let width = area.width.saturating_sub(26) as usize;
    let items: Vec<ListItem> = app
        .admin
        .articles
        .iter()
        .enumerate()
        .map(|(i, article)| {
            let selected = i == app.admin.selected;
            let style = if selected {
                Style::default().fg(ACCENT).bold()
            } else {
                Style::default()
            };
            let marker = if article.published { "●" } else { "○" };
            ListItem::new(Line::from(vec![
                Span::styled(if selected { "▸ " } else { "  " }, style),
                Span::styled(format!("{marker} "), Style::default().fg(DIM)),
                Span::styled(
                    format!("{:<12}", article.created_at.format("%Y-%m-%d")),
                    Style::default().fg(DIM),
                ),
                Span::styled(truncate_to_width(&article.title, width), style),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(block), area);
}

// ── editor ──────────────────────────────────────────────────────────────────

fn draw_editor(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .split(area);

    let draft = &app.admin.draft;
    let focus = app.admin.focus;

    let title_block = Block::default()
        .title(if draft.is_update() {
            " Edit manuscript · headline "
        } else {
            " Draft new piece · headline "
        })
        .borders(Borders::ALL)
        .border_style(if focus == EditorFocus::Title {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(DIM)
        });
    f.render_widget(
        Paragraph::new(with_cursor(
            draft.title.value(),
            draft.title.cursor(),
            focus == EditorFocus::Title,
        ))
        .block(title_block),
        chunks[0],
    );

    let content_block = Block::default()
        .title(" Body copy ")
        .borders(Borders::ALL)
        .border_style(if focus == EditorFocus::Content {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(DIM)
        });
    f.render_widget(
        Paragraph::new(with_cursor(
            draft.content.value(),
            draft.content.cursor(),
            focus == EditorFocus::Content,
        ))
        .wrap(Wrap { trim: false })
        .block(content_block),
        chunks[1],
    );

    let status = if app.admin.saving {
        Span::styled("Saving…", Style::default().fg(DIM).italic())
    } else if draft.payload().is_none() {
        Span::styled(
            "Headline and body are both required",
            Style::default().fg(DIM).italic(),
        )
    } else if draft.published {
        Span::styled("Will publish", Style::default().fg(ACCENT))
    } else {
        Span::styled("Draft (unpublished)", Style::default().fg(DIM))
    };
    f.render_widget(Paragraph::new(Line::from(status)), chunks[2]);
}

// ── overlays ────────────────────────────────────────────────────────────────

fn draw_modal(f: &mut Frame, modal: &Modal) {
    match modal {
        Modal::Confirm { message, .. } => {
            let area = centered_rect(f.area(), 50, 7);
            let block = Block::default()
                .title(" Confirm ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red));
            let inner = block.inner(area);
            f.render_widget(Clear, area);
            f.render_widget(block, area);
            let lines = vec![
                Line::raw(message.clone()),
                Line::default(),
                Line::from(Span::styled(
                    "[y] delete    [n] keep",
                    Style::default().fg(DIM),
                )),
            ];
            f.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: false }),
                inner,
            );
        }
        Modal::Notice(message) => {
            let area = centered_rect(f.area(), 50, 6);
            let block = Block::default()
                .title(" Notice ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Yellow));
            let inner = block.inner(area);
            f.render_widget(Clear, area);
            f.render_widget(block, area);
            let lines = vec![
                Line::raw(message.clone()),
                Line::default(),
                Line::from(Span::styled("press any key", Style::default().fg(DIM))),
            ];
            f.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: false }),
                inner,
            );
        }
        Modal::Share {
            title,
            url,
            links,
            selected,
        } => {
            let area = centered_rect(f.area(), 60, (links.len() as u16) + 8);
            let block = Block::default()
                .title(format!(" Share: {} ", truncate_to_width(title, 40)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT));
            let inner = block.inner(area);
            f.render_widget(Clear, area);
            f.render_widget(block, area);

            let mut lines =
                vec![Line::from(Span::styled(url.clone(), Style::default().fg(DIM)))];
            lines.push(Line::default());
            for (i, (target, _)) in links.iter().enumerate() {
                let style = if i == *selected {
                    Style::default().fg(ACCENT).bold()
                } else {
                    Style::default()
                };
                lines.push(Line::from(Span::styled(
                    format!(
                        "{} {}",
                        if i == *selected { "▸" } else { " " },
                        target.label()
                    ),
                    style,
                )));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Enter copy network link │ y copy article link │ Esc close",
                Style::default().fg(DIM),
            )));
            f.render_widget(Paragraph::new(lines), inner);
        }
    }
}

fn loading_line<'a>() -> Paragraph<'a> {
    Paragraph::new("Loading…")
        .alignment(Alignment::Center)
        .style(Style::default().fg(DIM).italic())
}

/// Fixed-size rect centered in `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
