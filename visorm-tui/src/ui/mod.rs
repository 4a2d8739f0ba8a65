mod components;
mod handlers;
mod screens;

use std::io;

pub use components::SchemaDesignerUI;
use crossterm::event::KeyCode;
use ratatui::{prelude::CrosstermBackend, Terminal};

pub trait UIHandler {
    async fn handle_sidebar_input(&mut self, key: KeyCode);
    async fn handle_designer_input(&mut self, key: KeyCode) -> io::Result<()>;
    async fn handle_preview_input(&mut self, key: KeyCode);
}

pub trait UIRenderer {
    async fn render_designer_screen(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()>;
    async fn render_preview_screen(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()>;
}
