use std::io::{self, BufRead, Write};

use teardrops::rpc::{encode_response, handle_line, ServerState};

fn main() -> anyhow::Result<()> {
    teardrops::init_logging();
    tracing::info!("Starting teardrop server...");

    let mut state = ServerState::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::error!("Error reading stdin: {}", e);
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(&mut state, &line);

        if let Some(err) = &response.error {
            tracing::warn!("Request failed ({}): {}", err.code, err.message);
        }

        writeln!(stdout, "{}", encode_response(&response))?;
        stdout.flush()?;
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}
