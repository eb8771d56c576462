// src/app.rs
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use multab_domain::RawRangeInput;
use multab_infra::FormatRenderer;
use multab_shared_kernel::MultabError;
use multab_usecase::{GenerateTable, Outcome, TableSession};

use crate::config::Config;

/// Run one invocation. A rejected one-shot input comes back as a
/// [`MultabError`] carrying the validation failure.
pub fn run(config: &Config) -> Result<()> {
    let renderer = FormatRenderer::new(config.format, config.output.clone());
    let usecase = GenerateTable::new(&renderer);
    let mut session = TableSession::new(config.limits);

    if config.interactive {
        let stdin = std::io::stdin();
        return run_interactive(&usecase, &mut session, stdin.lock(), &mut std::io::stderr());
    }

    match usecase.run(&mut session, &config.input).context("failed to emit output")? {
        Outcome::Rendered(_) => Ok(()),
        Outcome::Failed(err) => Err(MultabError::from(err.clone()).into()),
    }
}

/// Treat each input line as one submission. Validation errors are written to
/// `errors` and the loop carries on; blank lines and `#` comments are skipped.
pub fn run_interactive(
    usecase: &GenerateTable<'_>,
    session: &mut TableSession,
    input: impl BufRead,
    errors: &mut impl Write,
) -> Result<()> {
    for (index, line) in input.lines().enumerate() {
        let line = line.context("failed to read input")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }

        let tokens = split_fields(line);
        if tokens.len() > 4 {
            log::warn!("line {}: ignoring {} extra value(s)", index + 1, tokens.len() - 4);
        }

        let raw = RawRangeInput::from_tokens(tokens.iter().copied());
        if let Outcome::Failed(err) = usecase.run(session, &raw).context("failed to emit output")? {
            writeln!(errors, "error: {err}")?;
        }
    }
    log::debug!("input closed after {} submission(s)", session.submissions());
    Ok(())
}

/// Comma-separated lines keep empty fields in place so a blank value is
/// reported as missing; otherwise fields are whitespace-separated.
fn split_fields(line: &str) -> Vec<&str> {
    if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    }
}
