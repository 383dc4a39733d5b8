use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::settings::{
    resource_group_or_default, validate_subscription_id, Region, SettingsDraft,
};
use crate::ui::layout::{centered_rect, split_vertical};
use crate::ui::styles::{header_text, secondary_line, selection_style, ACCENT};
use crate::ui::{TerminalGuard, UiRoute};

/// Walk the user through the three settings prompts. Returns `None` when the
/// form is cancelled partway; nothing is echoed or stored in that case.
pub fn run_settings_form(existing: Option<&SettingsDraft>) -> Result<Option<SettingsDraft>> {
    let initial_subscription = existing.map(|draft| draft.subscription_id.as_str());
    let subscription_id = match text_dialog(
        "Azure Subscription ID",
        "Enter your Azure Subscription ID",
        initial_subscription,
        true,
    )? {
        Some(value) => value,
        None => return Ok(None),
    };

    let initial_group = existing.map(|draft| draft.resource_group.as_str());
    let resource_group = match text_dialog(
        "Resource Group",
        "Enter default Resource Group name (blank uses rg-infra-creator)",
        initial_group,
        false,
    )? {
        Some(value) => resource_group_or_default(&value),
        None => return Ok(None),
    };

    let region = match region_picker(existing.map(|draft| draft.region)) {
        Ok(region) => region,
        Err(AppError::Cancelled) => return Ok(None),
        Err(err) => return Err(err),
    };

    Ok(Some(SettingsDraft {
        subscription_id,
        resource_group,
        region,
    }))
}

/// Single-line input dialog inside the alternate screen. `required` makes
/// blank submissions reprompt with an inline error instead of returning.
fn text_dialog(
    field_title: &str,
    instructions: &str,
    initial: Option<&str>,
    required: bool,
) -> Result<Option<String>> {
    let mut guard = TerminalGuard::new()?;
    let mut buffer = initial.unwrap_or_default().to_string();
    let mut error: Option<&'static str> = None;

    loop {
        guard.terminal_mut().draw(|f| {
            let size = f.size();
            let area = centered_rect(60, 30, size);
            f.render_widget(Clear, area);

            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!("{} — {}", UiRoute::Settings.title(), field_title));
            f.render_widget(block.clone(), area);
            let inner = block.inner(area);

            let chunks = split_vertical(
                inner,
                &[
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Min(1),
                ],
            );

            let instructions_widget = Paragraph::new(secondary_line(instructions));
            f.render_widget(instructions_widget, chunks[0]);

            let mut display = buffer.clone();
            display.push('_');
            let input = Paragraph::new(display)
                .style(Style::default().fg(ACCENT))
                .block(Block::default().borders(Borders::ALL).title(field_title));
            f.render_widget(input, chunks[1]);

            let message = error.unwrap_or("Enter to confirm • Esc to cancel • Backspace delete");
            let message_widget = Paragraph::new(secondary_line(message));
            f.render_widget(message_widget, chunks[2]);
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc => {
                        guard.restore()?;
                        return Ok(None);
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        guard.restore()?;
                        return Ok(None);
                    }
                    KeyCode::Enter => {
                        if required {
                            match validate_subscription_id(&buffer) {
                                Ok(valid) => {
                                    guard.restore()?;
                                    return Ok(Some(valid));
                                }
                                Err(message) => error = Some(message),
                            }
                        } else {
                            guard.restore()?;
                            return Ok(Some(buffer.trim().to_string()));
                        }
                    }
                    KeyCode::Backspace => {
                        buffer.pop();
                        error = None;
                    }
                    KeyCode::Char(ch) => {
                        if !ch.is_control() {
                            buffer.push(ch);
                            error = None;
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Fixed-list picker over the six Azure regions. Esc cancels.
fn region_picker(current: Option<Region>) -> Result<Region> {
    let mut guard = TerminalGuard::new()?;
    let mut selected = current
        .and_then(|region| Region::ALL.iter().position(|r| *r == region))
        .unwrap_or(0);

    loop {
        guard.terminal_mut().draw(|f| {
            let size = f.size();
            let area = split_vertical(
                size,
                &[
                    Constraint::Length(3),
                    Constraint::Min(3),
                    Constraint::Length(1),
                ],
            );

            let title = Paragraph::new(header_text("Select default Azure region"));
            f.render_widget(title, area[0]);

            let items: Vec<ListItem> = Region::ALL
                .iter()
                .enumerate()
                .map(|(idx, region)| {
                    let mut item = ListItem::new(Line::from(region.as_str()));
                    if idx == selected {
                        item = item.style(selection_style());
                    }
                    item
                })
                .collect();

            let list = List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(UiRoute::Settings.title()),
            );
            f.render_widget(list, area[1]);

            let help = Paragraph::new(secondary_line(
                "↑/↓ or j/k move • Enter select • Esc cancel",
            ));
            f.render_widget(help, area[2]);
        })?;

        if event::poll(Duration::from_millis(150))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        if selected == 0 {
                            selected = Region::ALL.len() - 1;
                        } else {
                            selected -= 1;
                        }
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        selected = (selected + 1) % Region::ALL.len();
                    }
                    KeyCode::Enter => {
                        let choice = Region::ALL[selected];
                        guard.restore()?;
                        return Ok(choice);
                    }
                    KeyCode::Esc => {
                        guard.restore()?;
                        return Err(AppError::Cancelled);
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        guard.restore()?;
                        return Err(AppError::Cancelled);
                    }
                    _ => {}
                }
            }
        }
    }
}
