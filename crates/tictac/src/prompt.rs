//! Line-oriented play: type a row and column, read the board back.

use anyhow::Result;
use std::io::{BufRead, Write};
use tictac_core::{Coord, Outcome, Session};
use tracing::{debug, info, instrument};

/// Parses `"row col"` or `"row,col"` into two numbers.
pub fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Reads one trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Plays games at a prompt until the user quits or input ends.
#[instrument(skip_all)]
pub fn run_prompt<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "{}", session.human())?;
    writeln!(output, "{}", session.computer())?;

    loop {
        writeln!(output, "\n{}\n", session.board())?;
        write!(output, "Your move (row col, 0-2, q to quit): ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            info!("Input closed");
            return Ok(());
        };
        if line.eq_ignore_ascii_case("q") {
            info!("User quit");
            return Ok(());
        }

        let played = if let Some((row, col)) = parse_move(&line) {
            session.play_at(row, col)
        } else if let Some(coord) = Coord::from_label_or_index(&line) {
            session.play(coord)
        } else {
            debug!(%line, "Unparsable move");
            writeln!(
                output,
                "Could not read '{}'. Enter `row col` like `1 2`, a cell number 0-8, or a name like `center`.",
                line
            )?;
            continue;
        };

        let turn = match played {
            Ok(turn) => turn,
            Err(e) => {
                writeln!(output, "{}. Try again.", e)?;
                continue;
            }
        };

        writeln!(output, "You played {}.", turn.human.label())?;
        if let Some(reply) = turn.computer {
            writeln!(output, "Computer played {}.", reply.coord.label())?;
        }

        if turn.outcome.is_terminal() {
            writeln!(output, "\n{}\n", session.board())?;
            writeln!(output, "{}", announce(turn.outcome))?;
            write!(output, "Play again? [y/N]: ")?;
            output.flush()?;

            match read_line(&mut input)? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => session.reset(),
                _ => return Ok(()),
            }
        }
    }
}

fn announce(outcome: Outcome) -> String {
    match outcome.winner() {
        Some(winner) => format!("{} wins!", winner),
        None => "It's a draw!".to_string(),
    }
}
