use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::prelude::Stylize;
use ratatui::{prelude::*, widgets::*};
use std::time::Duration;

use crate::error::Result;
use crate::provision::ResourceType;
use crate::ui::layout::split_vertical;
use crate::ui::styles::{header_text, secondary_line, secondary_span, selection_style};
use crate::ui::{CreateMenuAction, TerminalGuard, UiRoute};

pub fn run_create_menu() -> Result<CreateMenuAction> {
    let mut guard = TerminalGuard::new()?;

    let entries: Vec<(&str, &str, CreateMenuAction)> = vec![
        (
            ResourceType::Vm.label(),
            "Compute instance with managed disks",
            CreateMenuAction::Resource(ResourceType::Vm),
        ),
        (
            ResourceType::Storage.label(),
            "Blob, file, and queue storage",
            CreateMenuAction::Resource(ResourceType::Storage),
        ),
        (
            ResourceType::Database.label(),
            "Managed SQL or Cosmos DB instance",
            CreateMenuAction::Resource(ResourceType::Database),
        ),
        (
            ResourceType::Network.label(),
            "Virtual network, subnets, and NSGs",
            CreateMenuAction::Resource(ResourceType::Network),
        ),
        (
            ResourceType::WebApp.label(),
            "App Service plan and web app",
            CreateMenuAction::Resource(ResourceType::WebApp),
        ),
        ("Back", "Return to the main menu", CreateMenuAction::Back),
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

            let title = Paragraph::new(header_text(
                "Create Infrastructure — choose a resource type",
            ));
            f.render_widget(title, chunks[0]);

            let list_items: Vec<ListItem> = entries
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
                    .title(UiRoute::CreateInfra.title()),
            );
            f.render_widget(list, chunks[1]);

            let help = Paragraph::new(secondary_line(
                "↑/↓ or j/k navigate • Enter select • Esc back",
            ));
            f.render_widget(help, chunks[2]);
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(k) = event::read()? {
                match k.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        if selected == 0 {
                            selected = entries.len() - 1;
                        } else {
                            selected -= 1;
                        }
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        selected = (selected + 1) % entries.len();
                    }
                    KeyCode::Enter => {
                        let action = entries[selected].2;
                        guard.restore()?;
                        return Ok(action);
                    }
                    KeyCode::Esc => {
                        guard.restore()?;
                        return Ok(CreateMenuAction::Back);
                    }
                    KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                        guard.restore()?;
                        return Ok(CreateMenuAction::Back);
                    }
                    _ => {}
                }
            }
        }
    }
}
