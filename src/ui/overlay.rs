//! Account detail overlay - profile header plus repository list

use ratatui::{prelude::*, widgets::*};

use crate::messages::OverlayView;
use crate::models::{Account, Repository};
use crate::ui::palette::Palette;
use crate::ui::{centered_rect, close_control_area, CLOSE_LABEL, CLOSE_WIDTH};

pub const REPO_ENTRY_HEIGHT: u16 = 4;
const HEADER_HEIGHT: u16 = 7;

/// What a click inside the overlay means
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayIntent {
    Dismiss,
    OpenRepo(usize),
}

/// Screen regions of the overlay
#[derive(Clone, Copy, Debug)]
pub struct OverlayLayout {
    pub popup: Rect,
    pub close: Rect,
    pub header: Rect,
    pub repos: Rect,
}

pub fn overlay_layout(screen: Rect) -> OverlayLayout {
    let popup = centered_rect(80, 85, screen);
    let inner = Block::default().borders(Borders::ALL).inner(popup);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(1), // "Repositories" heading
            Constraint::Min(0),
        ])
        .split(inner);

    OverlayLayout {
        popup,
        close: close_control_area(popup),
        header: chunks[0],
        repos: chunks[2],
    }
}

/// Repository entries visible in `area`, scrolled so `selected` is on screen
pub fn visible_repos(area: Rect, count: usize, selected: usize) -> Vec<(usize, Rect)> {
    let rows = (area.height / REPO_ENTRY_HEIGHT) as usize;
    if count == 0 || rows == 0 {
        return Vec::new();
    }
    let first = selected.min(count - 1).saturating_sub(rows - 1);
    (first..count.min(first + rows))
        .enumerate()
        .map(|(slot, index)| {
            let y = area.y + slot as u16 * REPO_ENTRY_HEIGHT;
            (index, Rect::new(area.x, y, area.width, REPO_ENTRY_HEIGHT))
        })
        .collect()
}

/// Map a click to an overlay intent
pub fn hit_test(screen: Rect, view: &OverlayView, column: u16, row: u16) -> Option<OverlayIntent> {
    let layout = overlay_layout(screen);
    let pos = Position::new(column, row);
    if layout.close.contains(pos) {
        return Some(OverlayIntent::Dismiss);
    }
    visible_repos(layout.repos, view.repos.len(), view.selected_repo)
        .into_iter()
        .find(|(_, rect)| rect.contains(pos))
        .map(|(index, _)| OverlayIntent::OpenRepo(index))
}

/// Full account info and its repositories, drawn over the card grid
pub struct AccountOverlay<'a> {
    pub view: &'a OverlayView,
    pub palette: Palette,
}

impl Widget for AccountOverlay<'_> {
    fn render(self, screen: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let layout = overlay_layout(screen);

        Clear.render(layout.popup, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(p.focus))
            .style(p.base())
            .title(Span::styled(format!(" {} ", self.view.account.login), p.title()))
            .title_bottom(Line::from(" ↑/↓ select  Enter open in browser  Esc close ").right_aligned())
            .render(layout.popup, buf);
        if layout.close.width == CLOSE_WIDTH {
            buf.set_string(layout.close.x, layout.close.y, CLOSE_LABEL, Style::default().fg(p.danger));
        }

        render_header(&self.view.account, layout.header, buf, p);

        let heading_area = Rect::new(layout.header.x, layout.header.bottom(), layout.header.width, 1);
        let count = if self.view.loading {
            String::from(" (loading...)")
        } else {
            format!(" ({})", self.view.repos.len())
        };
        Paragraph::new(Line::from(vec![
            Span::styled("Repositories", p.title()),
            Span::styled(count, p.muted()),
        ]))
        .render(heading_area, buf);

        if self.view.loading {
            Paragraph::new("Loading repositories...")
                .style(p.muted())
                .render(layout.repos, buf);
            return;
        }
        if self.view.repos.is_empty() {
            Paragraph::new("No public repositories to show.")
                .style(p.muted())
                .render(layout.repos, buf);
            return;
        }

        for (index, rect) in visible_repos(layout.repos, self.view.repos.len(), self.view.selected_repo) {
            render_repo(&self.view.repos[index], index == self.view.selected_repo, rect, buf, p);
        }
    }
}

fn render_header(account: &Account, area: Rect, buf: &mut Buffer, p: Palette) {
    let mut lines = vec![
        Line::from(Span::styled(
            account.name.clone().unwrap_or_else(|| account.login.clone()),
            Style::default().fg(p.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(account.bio.clone().unwrap_or_default(), p.muted())),
    ];

    let mut stats = vec![
        Span::raw(format!("{} repos", account.public_repos)),
        Span::styled("  ·  ", p.muted()),
        Span::raw(format!("{} followers", account.followers)),
        Span::styled("  ·  ", p.muted()),
        Span::raw(format!("{} following", account.following)),
    ];
    for extra in [&account.location, &account.company].into_iter().flatten() {
        stats.push(Span::styled("  ·  ", p.muted()));
        stats.push(Span::raw(extra.clone()));
    }
    lines.push(Line::from(stats));

    lines.push(Line::from(vec![
        Span::styled("avatar  ", p.muted()),
        Span::styled(account.avatar_url.clone(), p.muted().add_modifier(Modifier::DIM)),
    ]));
    if let Some(url) = &account.html_url {
        lines.push(Line::from(vec![
            Span::styled("profile ", p.muted()),
            Span::styled(url.clone(), Style::default().fg(p.accent).add_modifier(Modifier::UNDERLINED)),
        ]));
    }
    if let Some(blog) = account.blog.as_ref().filter(|b| !b.is_empty()) {
        lines.push(Line::from(vec![
            Span::styled("blog    ", p.muted()),
            Span::raw(blog.clone()),
        ]));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::BOTTOM).border_style(p.border(false)))
        .render(area, buf);
}

fn render_repo(repo: &Repository, selected: bool, area: Rect, buf: &mut Buffer, p: Palette) {
    let mut stats = vec![
        Span::styled("★ ", Style::default().fg(Color::Yellow)),
        Span::raw(repo.stargazers_count.to_string()),
        Span::styled("   ⑂ ", p.muted()),
        Span::raw(repo.forks_count.to_string()),
    ];
    if let Some(language) = &repo.language {
        stats.push(Span::styled(format!("   {}", language), p.muted()));
    }

    let lines = vec![
        Line::from(Span::styled(repo.name.clone(), p.title())),
        Line::from(Span::styled(repo.description.clone().unwrap_or_default(), p.muted())),
        Line::from(stats),
        Line::from(Span::styled(
            repo.html_url.clone(),
            p.muted().add_modifier(Modifier::UNDERLINED),
        )),
    ];

    let marker = if selected {
        Style::default().fg(p.focus).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(p.bg)
    };
    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::LEFT)
                .border_type(BorderType::Thick)
                .border_style(marker),
        )
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;

    fn repo(id: u64, name: &str, language: Option<&str>) -> Repository {
        Repository {
            id,
            name: name.into(),
            description: Some(format!("{} description", name)),
            html_url: format!("https://github.com/octocat/{}", name),
            stargazers_count: 42,
            forks_count: 7,
            language: language.map(String::from),
        }
    }

    fn view(repos: Vec<Repository>, loading: bool) -> OverlayView {
        let mut account = Account::new("octocat");
        account.name = Some("The Octocat".into());
        OverlayView {
            account,
            repos,
            loading,
            selected_repo: 0,
        }
    }

    fn render_text(view: &OverlayView) -> String {
        let screen = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(screen);
        AccountOverlay {
            view,
            palette: Palette::for_theme(Theme::Dark),
        }
        .render(screen, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_renders_repository_details() {
        let text = render_text(&view(
            vec![repo(1, "hello-world", Some("Rust")), repo(2, "spoon-knife", None)],
            false,
        ));
        assert!(text.contains("The Octocat"));
        assert!(text.contains("hello-world"));
        assert!(text.contains("spoon-knife description"));
        assert!(text.contains("42"));
        assert!(text.contains("Rust"));
        assert!(text.contains("https://github.com/octocat/hello-world"));
    }

    #[test]
    fn test_empty_list_is_not_an_error() {
        let text = render_text(&view(Vec::new(), false));
        assert!(text.contains("No public repositories"));
        assert!(!text.to_lowercase().contains("error"));
    }

    #[test]
    fn test_loading_placeholder() {
        let text = render_text(&view(Vec::new(), true));
        assert!(text.contains("Loading repositories"));
    }

    #[test]
    fn test_hit_test_close_and_entries() {
        let screen = Rect::new(0, 0, 100, 40);
        let v = view(vec![repo(1, "a", None), repo(2, "b", None)], false);
        let layout = overlay_layout(screen);

        assert_eq!(
            hit_test(screen, &v, layout.close.x, layout.close.y),
            Some(OverlayIntent::Dismiss)
        );
        assert_eq!(
            hit_test(screen, &v, layout.repos.x + 2, layout.repos.y + REPO_ENTRY_HEIGHT),
            Some(OverlayIntent::OpenRepo(1))
        );
        assert_eq!(hit_test(screen, &v, 0, 0), None);
    }

    #[test]
    fn test_visible_repos_window() {
        let area = Rect::new(0, 0, 50, REPO_ENTRY_HEIGHT * 3);
        let indices: Vec<usize> = visible_repos(area, 10, 7).into_iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![5, 6, 7]);
        assert!(visible_repos(area, 0, 0).is_empty());
    }
}
