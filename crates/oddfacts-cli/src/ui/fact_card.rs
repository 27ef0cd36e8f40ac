//! The fact card — the current fact, a loading placeholder, or the error.

use oddfacts_core::Fact;
use ratatui::{
  Frame,
  layout::{Alignment, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{app::View, i18n::labels};

/// Source whose attribution line is not shown.
const HIDDEN_SOURCE: &str = "djtech.net";

/// The attribution line for `fact`, if it should be shown.
pub fn attribution(fact: &Fact) -> Option<String> {
  let source = fact.source();
  (!source.is_empty() && source != HIDDEN_SOURCE).then(|| format!("SOURCE: {source}"))
}

// ─── Public entry ─────────────────────────────────────────────────────────────

/// Render the card into `area`.
pub fn draw(f: &mut Frame, area: Rect, view: &View) {
  if let Some(error) = view.error {
    draw_error(f, area, view, error);
    return;
  }

  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Indexed(61)))
    .padding(Padding::uniform(1));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let Some(fact) = view.fact else {
    let dots = Paragraph::new(vec![
      Line::from(Span::styled("●  ●  ●", Style::default().fg(Color::Indexed(61)))),
      Line::from(""),
      Line::from(Span::styled(
        labels(view.language).loading,
        Style::default().fg(Color::DarkGray),
      )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(dots, inner);
    return;
  };

  // Dim the previous fact while the next one loads.
  let text_style = if view.pending {
    Style::default().fg(Color::DarkGray)
  } else {
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD)
  };

  let mut lines = vec![Line::from(Span::styled(fact.text().to_string(), text_style))];
  if let Some(attr) = attribution(fact) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(attr, Style::default().fg(Color::Gray))));
  }

  let para = Paragraph::new(lines)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
  f.render_widget(para, inner);
}

fn draw_error(f: &mut Frame, area: Rect, view: &View, error: &str) {
  let l = labels(view.language);
  let block = Block::default()
    .title(format!(" {} ", l.error))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Red))
    .padding(Padding::uniform(1));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let lines = vec![
    Line::from(Span::styled(error.to_string(), Style::default().fg(Color::LightRed))),
    Line::from(""),
    Line::from(Span::styled(
      format!("[r] {}", l.retry),
      Style::default().fg(Color::Gray),
    )),
  ];
  f.render_widget(
    Paragraph::new(lines)
      .alignment(Alignment::Center)
      .wrap(Wrap { trim: true }),
    inner,
  );
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn attribution_hides_the_default_source() {
    let fact = Fact::new("1", "x").with_attribution("djtech.net", "");
    assert_eq!(attribution(&fact), None);
  }

  #[test]
  fn attribution_names_other_sources() {
    let fact = Fact::new("1", "x").with_attribution("snapple.com", "");
    assert_eq!(attribution(&fact).as_deref(), Some("SOURCE: snapple.com"));
  }

  #[test]
  fn attribution_is_omitted_without_a_source() {
    assert_eq!(attribution(&Fact::new("1", "x")), None);
  }
}
