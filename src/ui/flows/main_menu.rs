use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::prelude::Stylize;
use ratatui::{prelude::*, widgets::*};
use std::time::Duration;

use crate::error::Result;
use crate::settings::SettingsDraft;
use crate::ui::layout::split_vertical;
use crate::ui::styles::{header_text, secondary_line, secondary_span, selection_style};
use crate::ui::{MenuAction, TerminalGuard, UiRoute};

pub fn run_main_menu(settings: Option<&SettingsDraft>) -> Result<MenuAction> {
    // Ensure raw mode and the alternate screen are always restored regardless of how we exit.
    let mut guard = TerminalGuard::new()?;

    let items: Vec<(&str, &str, MenuAction)> = vec![
        (
            "Create Infrastructure",
            "Provision a new Azure resource",
            MenuAction::Create,
        ),
        (
            "View Resources",
            "List resources provisioned by this tool",
            MenuAction::View,
        ),
        (
            UiRoute::Settings.title(),
            "Set subscription, resource group, and region",
            MenuAction::Settings,
        ),
        (
            UiRoute::Exit.title(),
            "Leave Azure Infrastructure Creator",
            MenuAction::Exit,
        ),
    ];
    let mut selected = 0usize;

    loop {
        guard.terminal_mut().draw(|f| {
            let size = f.size();
            let chunks = split_vertical(
                size,
                &[
                    Constraint::Length(3),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ],
            );

            let header_content = match settings {
                Some(draft) => format!(
                    "Azure Infrastructure Creator — Main Menu\nSubscription: {}\nResource Group: {} — Region: {}",
                    draft.subscription_id, draft.resource_group, draft.region
                ),
                None => String::from(
                    "Azure Infrastructure Creator — Main Menu\nSubscription: not configured\nResource Group: not configured",
                ),
            };
            let header = Paragraph::new(header_text(header_content));
            f.render_widget(header, chunks[0]);

            let list_items: Vec<ListItem> = items
                .iter()
                .enumerate()
                .map(|(i, (label, description, _))| {
                    let line: Line = vec![
                        Span::from(format!("{:<22}", label)).bold(),
                        "  ".into(),
                        secondary_span(*description),
                    ]
                    .into();
                    let item = ListItem::new(line);
                    if i == selected {
                        item.style(selection_style())
                    } else {
                        item
                    }
                })
                .collect();
            let list = List::new(list_items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(UiRoute::MainMenu.title()),
            );
            f.render_widget(list, chunks[1]);

            let help = Paragraph::new(secondary_line(
                "↑/↓ or j/k navigate • Enter select • Esc exit • Ctrl+C exit",
            ));
            f.render_widget(help, chunks[2]);
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(k) = event::read()? {
                match k.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        // Wrap-around navigation keeps the UI snappy for keyboard users.
                        if selected == 0 {
                            selected = items.len() - 1;
                        } else {
                            selected -= 1;
                        }
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        selected = (selected + 1) % items.len();
                    }
                    KeyCode::Enter => {
                        // Leave the alternate screen before returning so the caller can print freely.
                        let action = items[selected].2;
                        guard.restore()?;
                        return Ok(action);
                    }
                    KeyCode::Esc => {
                        guard.restore()?;
                        return Ok(MenuAction::Exit);
                    }
                    KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                        guard.restore()?;
                        return Ok(MenuAction::Exit);
                    }
                    _ => {}
                }
            }
        }
    }
}
