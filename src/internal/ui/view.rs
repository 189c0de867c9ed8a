use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use super::app::{App, InputMode};
use crate::content::{ABOUT, Post};
use crate::internal::nav::Screen;
use crate::utils::text::{split_paragraphs, wrap_text};

pub fn draw(app: &mut App, f: &mut Frame) {
    let start = std::time::Instant::now();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_top_bar(app, f, chunks[0]);

    match app.state.screen.clone() {
        Screen::Listing => render_listing(app, f, chunks[1]),
        Screen::PostDetail { post_id } => render_detail(app, f, chunks[1], &post_id),
        Screen::About => render_about(app, f, chunks[1]),
    }

    render_status_bar(app, f, chunks[2]);

    // Render search overlay if in search mode
    if app.input_mode == InputMode::Search {
        render_search_overlay(app, f);
    }

    // Render notification overlay if present
    if app.notification.is_some() {
        render_notification(app, f);
    }

    if app.config.logging.enable_performance_metrics && cfg!(debug_assertions) {
        tracing::debug!(elapsed = ?start.elapsed(), "render.draw");
    }
}

fn render_listing(app: &mut App, f: &mut Frame, area: Rect) {
    let filtered = app.filtered_posts();

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|post| {
            let content = Line::from(vec![
                Span::styled(
                    format!("[{}] ", post.category),
                    Style::default()
                        .fg(app.theme.badge_fg)
                        .bg(app.theme.badge_bg),
                ),
                Span::styled(
                    post.title.clone(),
                    Style::default().fg(app.theme.foreground),
                ),
                Span::styled(
                    format!(" (by {} | {})", post.author, post.read_time),
                    Style::default().fg(app.theme.muted),
                ),
            ]);
            ListItem::new(content)
        })
        .collect();

    let count = filtered.len();
    let noun = if count == 1 { "post" } else { "posts" };
    let title = if app.state.search_query.is_empty() {
        format!(
            "BoringJava v{} - {} ({} {})",
            app.app_version, app.state.active_category, count, noun
        )
    } else {
        format!(
            "BoringJava v{} - {} ({} {}) (Filter: {})",
            app.app_version, app.state.active_category, count, noun, app.state.search_query
        )
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border))
                .title(title)
                .title_style(Style::default().fg(app.theme.foreground)),
        )
        .style(Style::default().bg(app.theme.background))
        .highlight_style(
            Style::default()
                .bg(app.theme.selection_bg)
                .fg(app.theme.selection_fg)
                .add_modifier(Modifier::BOLD),
        );

    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_detail(app: &App, f: &mut Frame, area: Rect, post_id: &str) {
    let Some(post) = app.store.post_by_id(post_id) else {
        // Unreachable through the navigation controller; keep the draw total.
        let p = Paragraph::new("Post not found.")
            .style(Style::default().fg(app.theme.foreground).bg(app.theme.background));
        f.render_widget(p, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let meta = vec![
        Line::from(Span::styled(
            format!(" {} ", post.category),
            Style::default()
                .fg(app.theme.badge_fg)
                .bg(app.theme.badge_bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            post.title.clone(),
            Style::default()
                .fg(app.theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} | {} | {} read", post.author, post.date, post.read_time),
            Style::default().fg(app.theme.muted),
        )),
    ];

    let meta_p = Paragraph::new(meta)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(meta_p, chunks[0]);

    let body = body_lines(app, post, chunks[1].width.saturating_sub(4));
    let p = Paragraph::new(body)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border))
                .title("Reader (Esc to go back)")
                .title_style(Style::default().fg(app.theme.foreground)),
        )
        .scroll((app.detail_scroll as u16, 0));
    f.render_widget(p, chunks[1]);
}

/// Paragraph-split, wrapped body with the optional code snippet appended.
fn body_lines<'a>(app: &App, post: &'a Post, width: u16) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    let body_style = Style::default().fg(app.theme.foreground);

    for paragraph in split_paragraphs(&post.content) {
        for wrapped in wrap_text(paragraph, width) {
            lines.push(Line::from(Span::styled(wrapped, body_style)));
        }
        lines.push(Line::default());
    }

    if let Some(snippet) = &post.code_snippet {
        lines.push(Line::from(Span::styled(
            "Example Implementation",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        for code_line in snippet.lines() {
            lines.push(Line::from(Span::styled(
                format!("  {}", code_line),
                Style::default().fg(app.theme.muted),
            )));
        }
    }

    lines
}

fn render_about(app: &App, f: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(4);
    let text_style = Style::default().fg(app.theme.foreground);
    let heading_style = Style::default()
        .fg(app.theme.accent)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for wrapped in wrap_text(ABOUT.intro, width) {
        lines.push(Line::from(Span::styled(wrapped, text_style)));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Tech Stack", heading_style)));
    for item in ABOUT.tech_stack {
        lines.push(Line::from(Span::styled(format!("  - {}", item), text_style)));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Current Role", heading_style)));
    for wrapped in wrap_text(ABOUT.current_role, width) {
        lines.push(Line::from(Span::styled(wrapped, text_style)));
    }
    lines.push(Line::default());

    for wrapped in wrap_text(ABOUT.tagline, width) {
        lines.push(Line::from(Span::styled(
            wrapped,
            Style::default()
                .fg(app.theme.muted)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let p = Paragraph::new(lines)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border))
                .title(ABOUT.heading)
                .title_style(Style::default().fg(app.theme.foreground)),
        );
    f.render_widget(p, area);
}

fn render_top_bar(app: &App, f: &mut Frame, area: Rect) {
    let p = Paragraph::new(format!("Theme: {}", app.state.theme_mode))
        .alignment(Alignment::Right)
        .style(
            Style::default()
                .bg(app.theme.background)
                .fg(app.theme.muted),
        );
    f.render_widget(p, area);
}

fn render_status_bar(app: &App, f: &mut Frame, area: Rect) {
    let status = if app.input_mode == InputMode::Search {
        "Search: Type to filter | Backspace: Delete | Enter/Esc: Finish".to_string()
    } else {
        match app.state.screen {
            Screen::Listing => {
                let filter_hint = if !app.state.search_query.is_empty() {
                    format!(" | Filter: {} | C: Clear", app.state.search_query)
                } else {
                    String::new()
                };
                format!(
                    "1-5: Category | /: Search | j/k: Nav | Enter: Read | a: About | h: Home | t: Theme | q: Quit{}",
                    filter_hint
                )
            }
            Screen::PostDetail { .. } => "Esc/q: Back | j/k: Scroll | t: Theme".to_string(),
            Screen::About => "Esc/q: Back | h: Home | t: Theme".to_string(),
        }
    };

    let p = Paragraph::new(status).style(
        Style::default()
            .bg(app.theme.selection_bg)
            .fg(app.theme.selection_fg),
    );
    f.render_widget(p, area);
}

fn render_notification(app: &App, f: &mut Frame) {
    if let Some(n) = &app.notification {
        let area = f.area();

        // Create centered popup
        let popup_width = (n.message.len() as u16 + 4).min(area.width.saturating_sub(4));
        let popup_height = 3;

        let popup_x = (area.width.saturating_sub(popup_width)) / 2;
        let popup_y = (area.height.saturating_sub(popup_height)) / 2;

        let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

        let popup = Paragraph::new(n.message.as_str())
            .style(
                Style::default()
                    .bg(app.theme.selection_bg)
                    .fg(app.theme.selection_fg)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border))
                    .title("Info")
                    .title_style(Style::default().fg(app.theme.foreground)),
            )
            .alignment(Alignment::Center);

        f.render_widget(Clear, popup_area);
        f.render_widget(popup, popup_area);
    }
}

fn render_search_overlay(app: &App, f: &mut Frame) {
    let area = f.area();

    let search_width = 60.min(area.width.saturating_sub(4));
    let search_height = 3;

    let search_x = (area.width.saturating_sub(search_width)) / 2;
    let search_y = (area.height.saturating_sub(search_height)) / 2;

    let search_area = Rect::new(search_x, search_y, search_width, search_height);

    // Display the search query with cursor
    let display_text = format!("{}█", app.state.search_query);

    let search_box = Paragraph::new(display_text)
        .style(
            Style::default()
                .fg(app.theme.foreground)
                .bg(app.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.selection_bg))
                .title(" Search posts (Esc to finish) ")
                .title_style(
                    Style::default()
                        .fg(app.theme.selection_fg)
                        .bg(app.theme.selection_bg)
                        .add_modifier(Modifier::BOLD),
                ),
        );

    f.render_widget(Clear, search_area);
    f.render_widget(search_box, search_area);
}
