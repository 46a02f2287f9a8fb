//! Account card - one saved account in the grid

use ratatui::{prelude::*, widgets::*};

use crate::models::Account;
use crate::ui::palette::Palette;
use crate::ui::{close_control_area, CLOSE_LABEL, CLOSE_WIDTH};

pub const CARD_HEIGHT: u16 = 7;
pub const CARD_MIN_WIDTH: u16 = 34;
const MAX_COLUMNS: u16 = 3;

/// What a click on a card means
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardIntent {
    Open,
    Remove,
}

/// Summary of one saved account: login, name, bio and avatar address
pub struct AccountCard<'a> {
    pub avatar_url: &'a str,
    pub login: &'a str,
    pub name: Option<&'a str>,
    pub bio: Option<&'a str>,
    pub saved_at: Option<String>,
    pub selected: bool,
    pub palette: Palette,
}

impl<'a> AccountCard<'a> {
    pub fn new(account: &'a Account, selected: bool, palette: Palette) -> Self {
        AccountCard {
            avatar_url: &account.avatar_url,
            login: &account.login,
            name: account.name.as_deref(),
            bio: account.bio.as_deref(),
            saved_at: account.saved_at_display(),
            selected,
            palette,
        }
    }
}

impl Widget for AccountCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut title_style = p.title();
        if self.selected {
            title_style = title_style.add_modifier(Modifier::REVERSED);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.selected { BorderType::Thick } else { BorderType::Rounded })
            .border_style(p.border(self.selected))
            .style(p.base())
            .title(Span::styled(format!(" {} ", self.login), title_style));
        let inner = block.inner(area);
        block.render(area, buf);

        let close = close_control_area(area);
        if close.width == CLOSE_WIDTH {
            buf.set_string(close.x, close.y, CLOSE_LABEL, Style::default().fg(p.danger));
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Name
                Constraint::Length(2), // Bio
                Constraint::Length(1), // Avatar
                Constraint::Length(1), // Saved at
            ])
            .split(inner);

        Paragraph::new(self.name.unwrap_or_default())
            .style(Style::default().fg(p.fg))
            .render(rows[0], buf);

        Paragraph::new(self.bio.unwrap_or_default())
            .style(p.muted())
            .wrap(Wrap { trim: true })
            .render(rows[1], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("avatar ", p.muted()),
            Span::styled(self.avatar_url, p.muted().add_modifier(Modifier::DIM)),
        ]))
        .render(rows[2], buf);

        if let Some(saved_at) = self.saved_at {
            Paragraph::new(format!("saved {}", saved_at))
                .style(p.muted().add_modifier(Modifier::ITALIC))
                .render(rows[3], buf);
        }
    }
}

/// Map a click to at most one intent. The remove control is checked first,
/// so a click on it never also opens the card.
pub fn hit_test(card: Rect, column: u16, row: u16) -> Option<CardIntent> {
    let pos = Position::new(column, row);
    if !card.contains(pos) {
        return None;
    }
    if close_control_area(card).contains(pos) {
        Some(CardIntent::Remove)
    } else {
        Some(CardIntent::Open)
    }
}

/// Number of card columns that fit the width
pub fn grid_columns(width: u16) -> u16 {
    (width / CARD_MIN_WIDTH).clamp(1, MAX_COLUMNS)
}

/// Cards visible in `area`, scrolled so `selected` is on screen
pub fn visible_cards(area: Rect, count: usize, selected: usize) -> Vec<(usize, Rect)> {
    if count == 0 || area.height < CARD_HEIGHT || area.width == 0 {
        return Vec::new();
    }

    let cols = grid_columns(area.width) as usize;
    let visible_rows = (area.height / CARD_HEIGHT) as usize;
    let selected_row = selected.min(count - 1) / cols;
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let card_width = area.width / cols as u16;

    let mut cards = Vec::new();
    for r in 0..visible_rows {
        for c in 0..cols {
            let index = (first_row + r) * cols + c;
            if index >= count {
                return cards;
            }
            let x = area.x + c as u16 * card_width;
            let width = if c == cols - 1 {
                area.width - c as u16 * card_width
            } else {
                card_width
            };
            let y = area.y + r as u16 * CARD_HEIGHT;
            cards.push((index, Rect::new(x, y, width, CARD_HEIGHT)));
        }
    }
    cards
}
