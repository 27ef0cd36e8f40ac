//! TUI rendering — orchestrates all panes.

pub mod fact_card;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::{app::View, i18n::labels};
use oddfacts_core::Language;

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, view: &View) {
  let area = f.area();

  // Vertical stack: header, tagline, card, navigation, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Length(2), // tagline
      Constraint::Min(5),    // card
      Constraint::Length(1), // navigation
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], view);
  draw_tagline(f, rows[1], view);
  fact_card::draw(f, rows[2], view);
  draw_navigation(f, rows[3], view);
  draw_status(f, rows[4], view);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, view: &View) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " Useless Facts",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );

  let mut right: Vec<Span> = Language::ALL
    .iter()
    .map(|&lang| {
      let code = format!(" {} ", lang.code().to_uppercase());
      if lang == view.language {
        Span::styled(
          code,
          Style::default()
            .fg(Color::White)
            .bg(Color::Indexed(61))
            .add_modifier(Modifier::BOLD),
        )
      } else {
        Span::styled(code, Style::default().fg(Color::Gray))
      }
    })
    .collect();
  right.push(Span::styled(
    format!("  {date} "),
    Style::default().fg(Color::Gray),
  ));

  // Simple left-right header: pad the middle.
  let left_width = left.width() as u16;
  let right_width: u16 = right.iter().map(|s| s.width() as u16).sum();
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let mut spans = vec![left, Span::raw(" ".repeat(pad as usize))];
  spans.extend(right);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_tagline(f: &mut Frame, area: Rect, view: &View) {
  let l = labels(view.language);
  let lines = vec![
    Line::from(Span::styled(
      l.badge.to_uppercase(),
      Style::default()
        .fg(Color::Indexed(61))
        .add_modifier(Modifier::BOLD),
    )),
    Line::from(Span::styled(l.tagline, Style::default().fg(Color::Gray))),
  ];
  f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

// ─── Navigation ───────────────────────────────────────────────────────────────

fn draw_navigation(f: &mut Frame, area: Rect, view: &View) {
  let l = labels(view.language);
  let enabled = Style::default().fg(Color::White);
  let disabled = Style::default().fg(Color::DarkGray);

  let back_style = if view.can_go_back && !view.pending { enabled } else { disabled };
  let forward_style =
    if view.can_go_forward && !view.pending { enabled } else { disabled };

  let position = view
    .position
    .map(|(i, len)| format!(" {i}/{len} "))
    .unwrap_or_else(|| " -/- ".to_string());

  let action = if view.pending {
    Span::styled(format!("[ {} ]", l.loading), Style::default().fg(Color::Yellow))
  } else {
    Span::styled(
      format!("[n] {}", l.another),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    )
  };

  let line = Line::from(vec![
    Span::styled(format!("◀ h {}", l.back), back_style),
    Span::styled(position, Style::default().fg(Color::Gray)),
    action,
    Span::raw("  "),
    Span::styled(format!("{} l ▶", l.forward), forward_style),
  ]);
  f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, view: &View) {
  let l = labels(view.language);
  let (mode_label, mode_bg) = if view.pending {
    ("LOADING", Color::Yellow)
  } else if view.error.is_some() {
    ("ERROR", Color::Red)
  } else {
    ("READY", Color::Cyan)
  };

  let status = if view.status_msg.is_empty() {
    let retry = if view.error.is_some() {
      format!("r {}  ", l.retry.to_lowercase())
    } else {
      String::new()
    };
    format!(
      "n new  {retry}←→/hl browse  e/i/t language  s {}  q {}",
      l.share, l.quit
    )
  } else {
    view.status_msg.to_string()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(mode_bg)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {status}"),
    Style::default().fg(Color::Gray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
