use ratatui::{Terminal, backend::TestBackend};
use tui_blog_app::internal::ui::app::{Action, App};
use tui_blog_app::internal::ui::view;

fn draw_to_text(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| view::draw(app, f)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
        }
        out.push('\n');
    }
    out
}

#[test]
fn listing_shows_all_posts_and_count() {
    let mut app = App::new().unwrap();
    let text = draw_to_text(&mut app, 100, 30);

    assert!(text.contains("BoringJava"));
    assert!(text.contains("Welcome to BoringJava"));
    assert!(text.contains("HashMap is Cool"));
    assert!(text.contains("2 posts"));
    assert!(text.contains("Theme: light"));
}

#[test]
fn filtered_listing_shows_match_and_filter_hint() {
    let mut app = App::new().unwrap();
    app.state.set_search_query("hashmap");
    let text = draw_to_text(&mut app, 100, 30);

    assert!(text.contains("HashMap is Cool"));
    assert!(!text.contains("Welcome to BoringJava"));
    assert!(text.contains("1 post"));
    assert!(text.contains("Filter: hashmap"));
}

#[test]
fn detail_view_renders_metadata_body_and_snippet() {
    let mut app = App::new().unwrap();
    app.state.set_search_query("welcome");
    app.handle_action(Action::Enter);
    let text = draw_to_text(&mut app, 120, 40);

    assert!(text.contains("Welcome to BoringJava"));
    assert!(text.contains("3 min read"));
    // Body text is wrapped, so assert on fragments short enough to stay on
    // one line at this width.
    assert!(text.contains("boring code is good code"));
    assert!(text.contains("Example Implementation"));
    assert!(text.contains("public record BlogPost("));
}

#[test]
fn about_view_renders_static_content() {
    let mut app = App::new().unwrap();
    app.handle_action(Action::OpenAbout);
    let text = draw_to_text(&mut app, 100, 30);

    assert!(text.contains("About Me"));
    assert!(text.contains("Tech Stack"));
    assert!(text.contains("Current Role"));
}

#[test]
fn theme_toggle_is_reflected_in_the_top_bar() {
    let mut app = App::new().unwrap();
    app.handle_action(Action::ToggleTheme);
    let text = draw_to_text(&mut app, 100, 30);
    assert!(text.contains("Theme: dark"));
}

#[test]
fn listing_titles_snapshot() {
    let app = App::new().unwrap();
    let titles: Vec<String> = app
        .filtered_posts()
        .iter()
        .map(|p| p.title.clone())
        .collect();
    insta::assert_debug_snapshot!(titles);
}
