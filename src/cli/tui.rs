use std::io::{self, Stdout};
use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info};

use zeta_intent::client::AgentService;
use zeta_intent::config::NetworkConfig;
use zeta_intent::error::ZetaResult;
use zeta_intent::panel::{ConfirmControl, Panel, PanelView, Response, Ticket};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Result of a key press.
#[derive(Debug, PartialEq)]
pub enum KeyOutcome {
    Continue,
    Dispatch(Ticket),
    Quit,
}

pub async fn run_tui(service: Arc<dyn AgentService>, network: NetworkConfig) -> ZetaResult<()> {
    info!("🖥️ Starting TUI interface");

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, service, network).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> ZetaResult<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> ZetaResult<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn event_loop(
    terminal: &mut Tui,
    service: Arc<dyn AgentService>,
    network: NetworkConfig,
) -> ZetaResult<()> {
    let mut panel = Panel::new(network);
    let (tx, mut rx) = mpsc::channel::<(u64, Response)>(8);
    let mut events = EventStream::new();

    loop {
        let view = panel.view();
        terminal.draw(|frame| render(frame, &view))?;

        tokio::select! {
            Some((id, response)) = rx.recv() => {
                panel.complete(id, response);
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    match handle_key(&mut panel, key) {
                        KeyOutcome::Quit => break,
                        KeyOutcome::Dispatch(ticket) => spawn_request(service.clone(), ticket, tx.clone()),
                        KeyOutcome::Continue => {}
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }

    info!("TUI closed");
    Ok(())
}

fn spawn_request(service: Arc<dyn AgentService>, ticket: Ticket, tx: mpsc::Sender<(u64, Response)>) {
    debug!("Dispatching {:?} request {}", ticket.request.kind(), ticket.id);
    tokio::spawn(async move {
        let response = ticket.request.dispatch(service.as_ref()).await;
        let _ = tx.send((ticket.id, response)).await;
    });
}

/// Enter analyzes, Ctrl+E executes, Esc cancels, Ctrl+C quits; anything else edits the prompt.
pub fn handle_key(panel: &mut Panel, key: KeyEvent) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => KeyOutcome::Quit,
        KeyCode::Char('e') if ctrl => panel
            .begin_execute()
            .map_or(KeyOutcome::Continue, KeyOutcome::Dispatch),
        KeyCode::Enter => panel
            .begin_submit()
            .map_or(KeyOutcome::Continue, KeyOutcome::Dispatch),
        KeyCode::Esc => {
            panel.cancel();
            KeyOutcome::Continue
        }
        KeyCode::Backspace => {
            panel.pop_char();
            KeyOutcome::Continue
        }
        KeyCode::Char(c) if !ctrl => {
            panel.push_char(c);
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}

fn render(frame: &mut Frame, view: &PanelView) {
    let mut constraints = vec![Constraint::Length(1), Constraint::Length(4)];
    if let Some(json) = &view.intent_json {
        constraints.push(Constraint::Length(confirm_height(json)));
    }
    if view.transaction.is_some() {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Min(4));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" Natural Language ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled("│ ", Style::default().fg(Color::DarkGray)),
        Span::styled("Intent → Transaction", Style::default().fg(Color::LightBlue)),
    ]));
    frame.render_widget(title, chunks[0]);

    let mut next = 1;
    render_prompt(frame, chunks[next], view);
    next += 1;

    if let Some(json) = &view.intent_json {
        render_confirm(frame, chunks[next], json, &view.confirm);
        next += 1;
    }
    if view.transaction.is_some() {
        render_success(frame, chunks[next], view);
        next += 1;
    }
    render_logs(frame, chunks[next], &view.log_lines);
}

/// Borders, heading and trigger line around the intent JSON.
fn confirm_height(json: &str) -> u16 {
    u16::try_from(json.lines().count())
        .unwrap_or(u16::MAX)
        .saturating_add(5)
}

fn trigger_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_prompt(frame: &mut Frame, area: Rect, view: &PanelView) {
    let input_style = if view.input_enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let prompt = if view.prompt.is_empty() {
        Span::styled("e.g. Send 0.001 ZETA to 0x123...", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(view.prompt.as_str(), input_style)
    };
    let cursor = if view.input_enabled { "│" } else { "" };

    let body = Paragraph::new(vec![
        Line::from(vec![prompt, Span::styled(cursor, Style::default().fg(Color::Cyan))]),
        Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(Color::DarkGray)),
            Span::styled(view.analyze_label, trigger_style(view.analyze_enabled)),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title(" 1. Ask the Agent "));
    frame.render_widget(body, area);
}

fn render_confirm(frame: &mut Frame, area: Rect, json: &str, confirm: &ConfirmControl) {
    let mut lines = vec![Line::from("The agent identified the following intent:")];
    lines.extend(
        json.lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Yellow)))),
    );
    match confirm {
        ConfirmControl::Hidden => {}
        ConfirmControl::ParseError(notice) => {
            lines.push(Line::from(Span::styled(*notice, Style::default().fg(Color::Red))));
        }
        ConfirmControl::Trigger { label, enabled } => {
            lines.push(Line::from(vec![
                Span::styled("[Ctrl+E] ", Style::default().fg(Color::DarkGray)),
                Span::styled(*label, trigger_style(*enabled)),
            ]));
        }
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" 2. Confirm Plan "));
    frame.render_widget(body, area);
}

fn render_success(frame: &mut Frame, area: Rect, view: &PanelView) {
    let Some(tx) = &view.transaction else {
        return;
    };

    let mut lines = vec![Line::from(format!("Transaction Hash: {}", tx.tx_hash))];
    if let Some(url) = &tx.explorer_url {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", tx.explorer_label), Style::default().fg(Color::Green)),
            Span::styled(
                url.as_str(),
                Style::default().fg(Color::LightBlue).add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" 3. Success! "));
    frame.render_widget(body, area);
}

fn render_logs(frame: &mut Frame, area: Rect, log_lines: &[String]) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = log_lines.len().saturating_sub(visible);
    let lines: Vec<Line> = log_lines[start..]
        .iter()
        .map(|l| Line::from(Span::styled(l.as_str(), Style::default().fg(Color::Gray))))
        .collect();

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Logs ", Style::default().fg(Color::DarkGray))),
    );
    frame.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_then_enter_dispatches_parse() {
        let mut panel = Panel::default();
        for c in "hi".chars() {
            assert_eq!(handle_key(&mut panel, press(KeyCode::Char(c))), KeyOutcome::Continue);
        }
        assert_eq!(panel.prompt(), "hi");

        match handle_key(&mut panel, press(KeyCode::Enter)) {
            KeyOutcome::Dispatch(ticket) => assert_eq!(ticket.request.kind(), zeta_intent::panel::RequestKind::Parse),
            other => panic!("expected dispatch, got {:?}", other),
        }
        // Input is frozen while the parse is in flight.
        handle_key(&mut panel, press(KeyCode::Char('x')));
        assert_eq!(panel.prompt(), "hi");
    }

    #[test]
    fn enter_on_empty_prompt_does_nothing() {
        let mut panel = Panel::default();
        assert_eq!(handle_key(&mut panel, press(KeyCode::Enter)), KeyOutcome::Continue);
        assert!(!panel.is_busy());
        assert!(panel.log().is_empty());
    }

    #[test]
    fn confirm_height_saturates() {
        assert_eq!(confirm_height("{\n  \"type\": \"transfer\"\n}"), 8);
        let huge = "x\n".repeat(70_000);
        assert_eq!(confirm_height(&huge), u16::MAX);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut panel = Panel::default();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut panel, key), KeyOutcome::Quit);
    }
}
