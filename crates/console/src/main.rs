use std::io::{self, BufRead, Write};

use stockroom_console::{AppConfig, Flow, Shell};

fn main() -> anyhow::Result<()> {
    let (config, ignored) = AppConfig::from_env();
    stockroom_observability::init(config.log_format);
    for note in ignored {
        tracing::warn!("{note}");
    }

    let mut shell = Shell::new();
    if config.seed_demo {
        shell.seed_demo();
    }

    tracing::info!("stockroom console ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        if shell.handle_line(&line?, &mut stdout)? == Flow::Quit {
            break;
        }
    }

    tracing::info!("stockroom console closed");
    Ok(())
}
