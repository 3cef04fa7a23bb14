//! Dispatching console lines through the home and blog consoles.

mod common;

use common::{settle, submit, test_app};
use folio::console::{DispatchOutcome, LineKind};
use folio::content::{Anchor, Route};

fn last_line(app: &folio::app::App) -> (LineKind, String) {
    let console = app.active_console().unwrap();
    let line = console.transcript().lines().last().unwrap();
    (line.kind, line.content.clone())
}

#[test]
fn test_unknown_command_reports_not_found() {
    let mut app = test_app();
    let outcome = app.home_console.dispatch(
        "sudo rm -rf",
        &mut app.theme,
        &app.catalog.projects,
    );

    assert_eq!(outcome, DispatchOutcome::NotFound("sudo".to_string()));
    let lines = app.home_console.transcript().lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].kind, LineKind::Input);
    assert_eq!(lines[0].content, "anjola@home ~ % sudo rm -rf");
    assert_eq!(lines[1].kind, LineKind::Error);
    assert_eq!(
        lines[1].content,
        "Command not found: sudo. Type 'help' for available commands."
    );
}

#[test]
fn test_blank_line_is_ignored() {
    let mut app = test_app();
    let outcome = app
        .home_console
        .dispatch("   ", &mut app.theme, &app.catalog.projects);

    assert_eq!(outcome, DispatchOutcome::Ignored);
    assert!(app.home_console.transcript().is_empty());
    assert!(app.home_console.history().is_empty());
}

#[test]
fn test_commands_are_case_insensitive() {
    let mut app = test_app();
    submit(&mut app, "ECHO Hello World");

    assert_eq!(last_line(&app), (LineKind::Output, "hello world".to_string()));
    assert!(app.home_console.line().is_empty());
}

#[test]
fn test_help_lists_every_home_command() {
    let mut app = test_app();
    submit(&mut app, "help");

    let (kind, text) = last_line(&app);
    assert_eq!(kind, LineKind::Output);
    assert!(text.starts_with("Available commands:"));
    for name in [
        "projects", "work", "about", "contact", "blog", "project <name>", "theme", "linkedin",
        "github", "email", "resume", "echo", "clear",
    ] {
        assert!(text.contains(name), "help is missing {}", name);
    }
    assert!(text.ends_with("Current theme: dark"));
}

#[test]
fn test_section_command_scrolls_after_render() {
    let mut app = test_app();
    app.set_page_layout(
        [(Anchor::Contact, 30)].into_iter().collect(),
        100,
    );

    submit(&mut app, "contact");
    assert_eq!(
        last_line(&app),
        (LineKind::Output, "Navigating to contact section...".to_string())
    );
    assert_eq!(app.scroll.target(), 0);

    settle(&mut app);
    assert_eq!(app.scroll.target(), 30);
    assert!(app.route.is_home());
}

#[test]
fn test_clear_empties_transcript() {
    let mut app = test_app();
    submit(&mut app, "echo one");
    submit(&mut app, "echo two");
    submit(&mut app, "clear");

    assert!(app.home_console.transcript().is_empty());
    assert_eq!(app.home_console.history().len(), 3);
    assert!(app.home_console.effects().is_empty());
}

#[test]
fn test_project_command_opens_post() {
    let mut app = test_app();
    submit(&mut app, "project PenguinFramework");
    assert_eq!(
        last_line(&app),
        (
            LineKind::Output,
            "Opening blog page for project: penguinframework...".to_string()
        )
    );

    settle(&mut app);
    assert_eq!(
        app.route,
        Route::BlogPost {
            slug: "penguinframework".to_string()
        }
    );
}

#[test]
fn test_project_without_name_prints_usage() {
    let mut app = test_app();
    submit(&mut app, "project");

    assert_eq!(
        last_line(&app),
        (LineKind::Output, "Usage: project <name>".to_string())
    );
    assert!(app.home_console.effects().is_empty());
}

#[test]
fn test_blog_console_has_its_own_commands() {
    let mut app = test_app();
    app.navigate_to(Route::blog());

    submit(&mut app, "linkedin");
    assert_eq!(
        last_line(&app),
        (
            LineKind::Error,
            "Command not found: linkedin. Type 'help' for available commands.".to_string()
        )
    );

    submit(&mut app, "home");
    settle(&mut app);
    assert!(app.route.is_home());
}
