mod app;
mod error;
mod terminal;
mod theme;
mod view;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use swipelist_lib::Catalog;

use crate::app::App;
use crate::error::AppError;
use crate::terminal::Terminal;
use crate::theme::Theme;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
    }
}

fn run() -> Result<(), AppError> {
    let log_file = File::create("swipelist-tui.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let theme = Theme::new();
    let mut term = Terminal::new()?;
    let mut app = App::new(Catalog::new());

    while app.running() {
        let (width, height) = term.size()?;
        let frame = view::draw(&app, &theme, width, height);
        term.draw(&frame)?;

        if let Some(key) = term.next_key()? {
            app.handle(key);
        }
    }

    Ok(())
}
