use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Wrap},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    centered_rect, BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding,
};

use super::theme::{ACCENT_GOLD, ACCENT_RED, BG_PANEL_ALT, TEXT_DIM, TEXT_MAIN};
use super::Component;
use crate::action::Action;
use crate::state::{Dialog, DialogKind};

const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 9;

/// Blocking message box
#[derive(Default)]
pub struct DialogBox {
    modal: Modal,
}

#[derive(Clone, Copy)]
pub struct DialogBoxProps<'a> {
    pub dialog: &'a Dialog,
}

impl DialogBox {
    pub fn new() -> Self {
        Self::default()
    }
}

fn accent(kind: DialogKind) -> Style {
    let color = match kind {
        DialogKind::Warning => ACCENT_GOLD,
        DialogKind::Error => ACCENT_RED,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

impl Component<Action> for DialogBox {
    type Props<'a> = DialogBoxProps<'a>;

    /// Enter or Esc dismiss; every other key is swallowed.
    fn handle_event(
        &mut self,
        event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Enter | KeyCode::Esc => Some(Action::DialogDismiss),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let dialog = props.dialog;
        let modal_area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let chunks = Layout::vertical([
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(content_area);

            let title = Paragraph::new(Line::styled(dialog.title.as_str(), accent(dialog.kind)))
                .alignment(Alignment::Center);
            frame.render_widget(title, chunks[0]);

            let message = Paragraph::new(Text::styled(
                dialog.message.as_str(),
                Style::default().fg(TEXT_MAIN),
            ))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            frame.render_widget(message, chunks[1]);

            let hint = Paragraph::new(Line::styled(
                "Enter / Esc to close",
                Style::default().fg(TEXT_DIM),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(hint, chunks[2]);
        };

        self.modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: true,
                area: modal_area,
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(BG_PANEL_ALT),
                        padding: Padding::all(1),
                        border: None,
                        fg: None,
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: || Action::DialogDismiss,
                render_content: &mut render_content,
            },
        );
    }
}
