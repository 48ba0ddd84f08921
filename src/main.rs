use anyhow::Context;
use clap::Parser;

use wordmatch::cli::Cli;
use wordmatch::game::MatchController;
use wordmatch::logging::init_tracing;
use wordmatch::shutdown::ShutdownHandle;
use wordmatch::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_file = init_tracing();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    // Resolved up front and logged, for --seed replays.
    let seed = config.game.seed.unwrap_or_else(rand::random);
    tracing::info!(
        seed,
        config = %cli.config_path().display(),
        log = ?log_file,
        "new game; replay with --seed {seed}"
    );
    let controller = MatchController::new(Some(seed));

    if cli.print_board {
        println!("{}", serde_json::to_string_pretty(&controller.board())?);
        return Ok(());
    }

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("failed to install signal handlers")?;
    runtime::run(controller, &config.ui, shutdown).context("terminal UI failed")?;
    Ok(())
}
