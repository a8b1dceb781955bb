//! Command console widget
//!
//! Scrollback of console entries plus the input line. Free text is sent to
//! the device verbatim on Enter.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use gdeck_app::PanelState;
use gdeck_core::{format_timestamp, ConsoleKind};

use crate::theme::{palette, styles};

pub struct ConsolePanel<'a> {
    state: &'a PanelState,
}

impl<'a> ConsolePanel<'a> {
    pub fn new(state: &'a PanelState) -> Self {
        Self { state }
    }
}

fn entry_decoration(kind: ConsoleKind) -> (&'static str, Style) {
    match kind {
        ConsoleKind::Command => ("› ", Style::default().fg(palette::CONSOLE_COMMAND)),
        ConsoleKind::Response => ("‹ ", Style::default().fg(palette::CONSOLE_RESPONSE)),
        ConsoleKind::Error => ("✗ ", Style::default().fg(palette::CONSOLE_ERROR)),
    }
}

impl Widget for ConsolePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("Console");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let [scrollback, input] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let entries = self.state.console.entries();
        if entries.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "Type a command and press Enter — e.g. 'rgb 255 0 0'",
                styles::text_muted(),
            )))
            .render(scrollback, buf);
        } else {
            // The scroll offset counts entries up from the bottom.
            let shown = entries.len().saturating_sub(self.state.console_scroll);
            let window = &entries[..shown];
            let start = window.len().saturating_sub(scrollback.height as usize);

            let lines: Vec<Line> = window[start..]
                .iter()
                .map(|entry| {
                    let (prefix, style) = entry_decoration(entry.kind);
                    Line::from(vec![
                        Span::styled(
                            format!("{} ", format_timestamp(entry.timestamp)),
                            styles::text_muted(),
                        ),
                        Span::styled(prefix, style),
                        Span::styled(entry.text.clone(), style),
                    ])
                })
                .collect();
            Paragraph::new(lines).render(scrollback, buf);
        }

        let input_line = Line::from(vec![
            Span::styled("> ", styles::accent_bold()),
            Span::styled(self.state.console_input.clone(), styles::text_primary()),
            Span::styled("▏", styles::accent()),
        ]);
        Paragraph::new(input_line).render(input, buf);
    }
}
