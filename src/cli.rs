//! Text front end: board rendering, coordinate prompts and the game loop.
//!
//! Everything here writes to a caller-supplied `Write` and reads from a
//! `BufRead`, so the binary passes stdin/stdout and tests pass buffers.

#![cfg(feature = "std")]

use std::io::{BufRead, Write};

use anyhow::{bail, Context};

use crate::{common::AttackResult, game::Game};

/// Print the board with column indices across the top and row indices down
/// the side. `reveal` shows unhit piece segments as `S`.
pub fn render_board<W: Write>(out: &mut W, game: &Game, reveal: bool) -> std::io::Result<()> {
    let board = game.board();
    let width = board.size().saturating_sub(1).to_string().len();
    write!(out, "{:w$}  ", "", w = width)?;
    for c in 0..board.size() {
        write!(out, " {:>w$}", c, w = width)?;
    }
    writeln!(out)?;
    for (r, row) in board.rows().enumerate() {
        write!(out, "{:>w$}  ", r, w = width)?;
        for cell in row {
            write!(out, " {:>w$}", cell.symbol(reveal), w = width)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Prompt until the player enters a whole number.
pub fn read_coordinate<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> anyhow::Result<isize> {
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;
        let mut line = String::new();
        let read = input.read_line(&mut line).context("reading player input")?;
        if read == 0 {
            bail!("input closed before the game was won");
        }
        match line.trim().parse::<isize>() {
            Ok(v) => return Ok(v),
            Err(_) => writeln!(out, "Please enter a whole number, got '{}'", line.trim())?,
        }
    }
}

/// Tell the player what their shot did.
pub fn report<W: Write>(out: &mut W, result: AttackResult) -> std::io::Result<()> {
    writeln!(out, "{}", result)
}

/// Run the turn loop until every piece is sunk.
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    out: &mut W,
    reveal: bool,
) -> anyhow::Result<()> {
    while !game.is_over() {
        render_board(out, game, reveal)?;
        writeln!(out, "Number of attempts: {}", game.attempts())?;
        writeln!(out, "Number of hits: {}", game.hits())?;

        let row = read_coordinate(input, out, "Enter row to attack: ")?;
        let col = read_coordinate(input, out, "Enter column to attack: ")?;
        let result = game.attack(row, col);
        report(out, result)?;
    }
    render_board(out, game, reveal)?;
    writeln!(
        out,
        "All {} pieces sunk in {} attempts.",
        game.pieces().len(),
        game.attempts()
    )?;
    writeln!(out, "Congratulations! You won!")?;
    Ok(())
}
