//! Terminal rendering and mouse hit-testing
//!
//! Everything here is a pure function of `RenderState`; the same layout
//! helpers drive both drawing and click mapping so the two never disagree.

pub mod card;
pub mod overlay;
pub mod palette;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{prelude::*, widgets::*};

use crate::constants::APP_NAME;
use crate::messages::ui_events::InputMode;
use crate::messages::{RenderState, UiEvent};
use crate::models::Theme;
use card::{AccountCard, CardIntent};
use overlay::{AccountOverlay, OverlayIntent};
use palette::Palette;

/// Label of the dismiss/remove control drawn on card and overlay borders
pub const CLOSE_LABEL: &str = "[x]";
pub const CLOSE_WIDTH: u16 = 3;

/// Where a dismiss control sits: top border, just left of the corner
pub fn close_control_area(area: Rect) -> Rect {
    if area.width < CLOSE_WIDTH + 2 || area.height == 0 {
        return Rect::new(area.x, area.y, 0, 0);
    }
    Rect::new(area.right() - 1 - CLOSE_WIDTH, area.y, CLOSE_WIDTH, 1)
}

/// Top-level screen regions
#[derive(Clone, Copy, Debug)]
pub struct MainLayout {
    pub title: Rect,
    pub theme_toggle: Rect,
    pub search: Rect,
    pub grid: Rect,
    pub status: Rect,
}

pub fn main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(3), // Search box
            Constraint::Min(0),    // Card grid
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let toggle_width = theme_toggle_label(Theme::Light).chars().count() as u16;
    let title = chunks[0];
    let theme_toggle = Rect::new(
        title.right().saturating_sub(toggle_width),
        title.y,
        toggle_width.min(title.width),
        title.height,
    );

    MainLayout {
        title,
        theme_toggle,
        search: chunks[1],
        grid: chunks[2],
        status: chunks[3],
    }
}

fn theme_toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => " [t] ☀ light ",
        Theme::Light => " [t] ☾ dark  ",
    }
}

/// Draw the whole screen
pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();
    let p = Palette::for_theme(state.theme);
    let layout = main_layout(area);

    f.render_widget(Block::default().style(p.base()), area);

    draw_title_bar(f, state, &layout, p);
    draw_search_box(f, state, layout.search, p);
    draw_card_grid(f, state, layout.grid, p);
    draw_status_bar(f, state, layout.status, p);

    if let Some(view) = &state.overlay {
        f.render_widget(AccountOverlay { view, palette: p }, area);
    }

    if state.show_help {
        draw_help_popup(f, area, p);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, layout: &MainLayout, p: Palette) {
    let title = Line::from(vec![
        Span::styled(format!(" {} ", APP_NAME), p.title()),
        Span::styled(format!("· Saved accounts ({})", state.accounts.len()), p.muted()),
    ]);
    f.render_widget(Paragraph::new(title), layout.title);
    f.render_widget(
        Paragraph::new(theme_toggle_label(state.theme)).style(Style::default().fg(p.accent)),
        layout.theme_toggle,
    );
}

fn draw_search_box(f: &mut Frame, state: &RenderState, area: Rect, p: Palette) {
    let editing = state.input_mode == InputMode::Editing && state.overlay.is_none();
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        p.border(false)
    };

    let loading = if state.is_searching { " [searching...]" } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!(" Search GitHub username{} ", loading));

    let input = if state.search.is_empty() && !editing {
        Paragraph::new("Press / to search...").style(p.muted())
    } else {
        Paragraph::new(state.search.as_str()).style(Style::default().fg(p.fg))
    };
    f.render_widget(input.block(block), area);

    if editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_col = state.search[..state.cursor_position.min(state.search.len())]
            .chars()
            .count() as u16;
        let cursor_x = (area.x + cursor_col + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_card_grid(f: &mut Frame, state: &RenderState, area: Rect, p: Palette) {
    if state.accounts.is_empty() {
        let hint = Paragraph::new("No saved accounts yet.\n\nSearch for a GitHub username to add one.")
            .style(p.muted())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        f.render_widget(hint, area.inner(Margin::new(1, 1)));
        return;
    }

    for (index, rect) in card::visible_cards(area, state.accounts.len(), state.selected_card) {
        let selected = index == state.selected_card && state.overlay.is_none();
        f.render_widget(AccountCard::new(&state.accounts[index], selected, p), rect);
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect, p: Palette) {
    let status = if state.is_searching {
        " Searching... "
    } else if state.overlay.is_some() {
        " ↑/↓:select repo | Enter/o:open in browser | Esc:close | t:theme | q:quit "
    } else if state.input_mode == InputMode::Editing {
        " Enter:search | Esc:stop editing | ←/→:move "
    } else {
        " /:search | arrows:select | Enter:open | d:remove | t:theme | ?:help | q:quit "
    };

    let mut spans = Vec::new();
    if let (Some(message), false) = (&state.status, state.is_searching) {
        spans.push(Span::styled(format!(" {} ", message), Style::default().fg(p.accent)));
        spans.push(Span::styled("|", p.muted()));
    }
    spans.push(Span::styled(status, p.muted()));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect, p: Palette) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 GITHUB EXPLORER - Keyboard Shortcuts

 SEARCH
   / or i             Edit search box
   Enter              Look up the username
   Esc                Stop editing

 SAVED ACCOUNTS
   arrows / Tab       Move between cards
   Enter / click      Open account details
   d / Del / [x]      Remove from saved accounts

 DETAILS
   ↑ / ↓              Select repository
   Enter / o / click  Open repository in browser
   Esc / [x]          Close

 GENERAL
   t                  Toggle dark/light theme
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(p.base());

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

/// Map a mouse event to a UiEvent. Only left clicks do anything.
pub fn mouse_to_ui_event(mouse: MouseEvent, state: &RenderState, area: Rect) -> Option<UiEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => click_to_ui_event(state, area, mouse.column, mouse.row),
        MouseEventKind::ScrollDown if state.overlay.is_some() => Some(UiEvent::NextRepo),
        MouseEventKind::ScrollUp if state.overlay.is_some() => Some(UiEvent::PrevRepo),
        _ => None,
    }
}

/// Resolve a click to at most one intent, topmost layer first
pub fn click_to_ui_event(state: &RenderState, area: Rect, column: u16, row: u16) -> Option<UiEvent> {
    if state.show_help {
        return Some(UiEvent::CloseHelp);
    }

    if let Some(view) = &state.overlay {
        // The overlay is modal: clicks never reach the cards underneath
        return overlay::hit_test(area, view, column, row).map(|intent| match intent {
            OverlayIntent::Dismiss => UiEvent::CloseOverlay,
            OverlayIntent::OpenRepo(index) => UiEvent::OpenRepoLink(index),
        });
    }

    let layout = main_layout(area);
    let pos = Position::new(column, row);
    if layout.theme_toggle.contains(pos) {
        return Some(UiEvent::ToggleTheme);
    }
    if layout.search.contains(pos) {
        return Some(UiEvent::StartEditing);
    }

    card::visible_cards(layout.grid, state.accounts.len(), state.selected_card)
        .into_iter()
        .find_map(|(index, rect)| {
            card::hit_test(rect, column, row).map(|intent| match intent {
                CardIntent::Open => UiEvent::OpenCard(index),
                CardIntent::Remove => UiEvent::RemoveCard(index),
            })
        })
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
