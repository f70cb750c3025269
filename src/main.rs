use std::io;
use std::process::ExitCode;
use textsweeper::session::{exit_status, Session};
use tracing::Level;

fn main() -> ExitCode {
    // stdout belongs to the game; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    let mut session = Session::new(
        io::stdin().lock(),
        io::stdout().lock(),
        rand::thread_rng(),
    );

    let result = session.run();
    if let Err(e) = &result {
        eprintln!("Game error: {}", e);
    }
    ExitCode::from(exit_status(&result))
}
