//! Input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::{App, Page};
use crate::console::{ConsoleSession, EffectSink};
use crate::content::Route;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('t') => {
                    let theme = self.theme.toggle();
                    debug!("Theme toggled to {}", theme);
                }
                _ => {}
            }
            return;
        }

        match (key.code, self.page()) {
            (KeyCode::PageUp, _) => self.scroll.scroll_by(-self.page_step()),
            (KeyCode::PageDown, _) => self.scroll.scroll_by(self.page_step()),
            (_, Page::Home | Page::BlogIndex) => self.handle_console_key(key),
            (_, Page::BlogPost) => self.handle_post_key(key),
        }
    }

    fn handle_console_key(&mut self, key: KeyEvent) {
        let on_blog = self.page() == Page::BlogIndex;

        match key.code {
            KeyCode::Enter => self.submit_console(),
            KeyCode::Tab if on_blog => self.select_post(true),
            KeyCode::BackTab if on_blog => self.select_post(false),
            KeyCode::Up => self.with_console(|c| c.recall_older()),
            KeyCode::Down => self.with_console(|c| c.recall_newer()),
            KeyCode::Left => self.with_console(|c| c.line_mut().move_left()),
            KeyCode::Right => self.with_console(|c| c.line_mut().move_right()),
            KeyCode::Home => self.with_console(|c| c.line_mut().move_home()),
            KeyCode::End => self.with_console(|c| c.line_mut().move_end()),
            KeyCode::Backspace => self.with_console(|c| c.line_mut().backspace()),
            KeyCode::Delete => self.with_console(|c| c.line_mut().delete()),
            KeyCode::Esc => self.with_console(|c| c.line_mut().clear()),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => {
                self.with_console(|c| c.line_mut().insert(ch))
            }
            _ => {}
        }
    }

    fn handle_post_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => self.navigate_to(Route::blog()),
            KeyCode::Tab => self.select_tag(true),
            KeyCode::BackTab => self.select_tag(false),
            KeyCode::Enter => self.open_selected_tag(),
            KeyCode::Char('o') => self.open_post_repo(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.scroll_by(1),
            KeyCode::Home | KeyCode::Char('g') => self.scroll.scroll_by(-i32::from(u16::MAX)),
            KeyCode::End | KeyCode::Char('G') => self.scroll.scroll_by(i32::from(u16::MAX)),
            _ => {}
        }
    }

    fn with_console(&mut self, f: impl FnOnce(&mut ConsoleSession)) {
        if let Some(console) = self.active_console_mut() {
            f(console);
        }
    }

    /// Enter on a console page. An empty blog line opens the selected post,
    /// or clears the filter when nothing matched it.
    fn submit_console(&mut self) {
        match self.page() {
            Page::Home => {
                self.home_console
                    .submit(&mut self.theme, &self.catalog.projects);
            }
            Page::BlogIndex => {
                if self.blog_console.line().text().trim().is_empty() {
                    if self.blog_filter.is_active() && self.visible_posts().is_empty() {
                        self.reset_filter();
                    } else {
                        self.open_selected_post();
                    }
                } else {
                    self.blog_console
                        .submit(&mut self.theme, &self.catalog.projects);
                }
            }
            Page::BlogPost => {}
        }
    }

    /// Bracketed paste goes into the console line.
    pub fn handle_paste(&mut self, text: &str) {
        self.with_console(|c| c.line_mut().insert_str(text));
        self.mark_dirty();
    }

    /// Mouse wheel, in rows.
    pub fn handle_scroll(&mut self, delta: i32) {
        self.scroll.scroll_by(delta);
        self.mark_dirty();
    }
}
