use ui::SchemaDesignerUI;

mod ui;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let mut tui = SchemaDesignerUI::new();
    tui.run_ui().await?;

    Ok(())
}
