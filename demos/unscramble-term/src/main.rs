//! Terminal front-end for Unscramble.
//!
//! Usage: `unscramble-term [settings.json]`. Logs go to stderr and are
//! filtered with `RUST_LOG`.

mod command;
mod render;

use tokio::io::{AsyncBufReadExt, BufReader};
use unscramble::prelude::*;

use crate::command::Command;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    unscramble::logging::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let mut session = settings.into_session()?;
    let max_rounds = session.config().max_rounds;
    tracing::info!(max_rounds, words = session.catalog().len(), "starting unscramble");

    // Redraw whenever the session publishes a new snapshot.
    let mut updates = session.subscribe();
    let renderer = tokio::spawn(async move {
        loop {
            let frame = render::frame(&updates.borrow_and_update(), max_rounds);
            println!("{frame}");
            if updates.changed().await.is_err() {
                break;
            }
        }
    });

    println!("{}", render::HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match command::parse(&line) {
            Command::Guess(text) => {
                session.update_guess(text);
                session.check_guess();
            }
            Command::Skip => session.skip_word(),
            Command::Reset => session.reset_game(),
            Command::Help => println!("{}", render::HELP),
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown(cmd) => println!("unknown command {cmd}, try :help"),
        }
    }

    // Dropping the session closes the channel and stops the renderer.
    drop(session);
    renderer.await?;
    Ok(())
}
