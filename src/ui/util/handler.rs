use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        traits::Action,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui).await?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            app.update(evt);
        }

        Ok(())
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            _ => {}
        }

        Ok(())
    }

    async fn handle_key_event(app: &mut App, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Quit must work even while an input field is capturing keys.
        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            app.update(Event::Quit);
            return;
        }

        let action = app.router.handle_input(key, &app.state, &app.ctx).await;
        if let Some(action) = action {
            match action {
                Action::Quit => app.should_quit = true,
                Action::None => {}
            }
            return;
        }

        if let Some(event) = InputHandler::handle_key(key) {
            app.update(event);
        }
    }
}
