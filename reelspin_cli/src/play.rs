use std::io::{BufRead, Write};

use reelspin_core::{BetConfig, MachineConfig};
use tracing::{debug, info};

use crate::input::{parse_bet, parse_deposit, parse_lines, prompt_until};
use crate::session::{Session, SessionError, SpinRng};

/// Runs the interactive game until the player quits or input ends.
/// Returns the balance the player leaves with.
pub fn run<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    config: &MachineConfig,
    rng: SpinRng,
) -> anyhow::Result<u64> {
    if let Some(hash) = rng.server_seed_hash_hex() {
        writeln!(output, "Server seed hash: {hash}")?;
    }

    let Some(deposit) = prompt_until(
        input,
        output,
        "Please enter the amount of money to deposit: $",
        parse_deposit,
    )?
    else {
        writeln!(output, "You left with $0.")?;
        return Ok(0);
    };
    info!(deposit, "session started");

    let mut session = Session::new(deposit, config.clone(), rng);
    let lines_prompt = format!("Enter the number of lines to bet on (1-{}): ", config.max_lines);
    let bet_prompt = format!(
        "Enter your bet per line (${}-${}): ",
        config.min_bet, config.max_bet
    );

    'rounds: loop {
        writeln!(output, "Current balance: ${}", session.balance())?;
        if !session.can_afford_minimum() {
            writeln!(
                output,
                "Your balance is below the minimum bet of ${}.",
                config.min_bet
            )?;
            break;
        }
        write!(output, "Press Enter to play (or 'q' to quit): ")?;
        output.flush()?;
        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 || answer.trim().eq_ignore_ascii_case("q") {
            break;
        }

        let Some(lines) = prompt_until(input, output, &lines_prompt, |s| {
            parse_lines(s, config.max_lines)
        })?
        else {
            break;
        };

        let (bet, stake) = loop {
            let Some(per_line) = prompt_until(input, output, &bet_prompt, |s| {
                parse_bet(s, config.min_bet, config.max_bet)
            })?
            else {
                break 'rounds;
            };
            let bet = BetConfig::new(lines, per_line);
            match session.check_stake(&bet) {
                Ok(stake) => break (bet, stake),
                Err(e @ SessionError::InsufficientBalance { stake, .. }) => {
                    debug!(stake, "stake exceeds balance");
                    writeln!(output, "{e}")?;
                }
                Err(e) => return Err(e.into()),
            }
        };

        writeln!(
            output,
            "You are betting ${} on {} lines. Total bet: ${}",
            bet.bet_per_line, bet.lines, stake
        )?;
        if let Some(nonce) = session.rng().nonce() {
            writeln!(output, "Spin nonce: {nonce}")?;
        }

        let outcome = session.play_round(bet)?;
        write!(output, "{}", outcome.grid)?;
        writeln!(output, "You won ${}.", outcome.winnings())?;
        if outcome.winning_lines().is_empty() {
            writeln!(output, "No winning lines.")?;
        } else {
            let lines: Vec<String> = outcome
                .winning_lines()
                .iter()
                .map(|l| l.to_string())
                .collect();
            writeln!(output, "You won on lines: {}", lines.join(", "))?;
        }
    }

    let balance = session.balance();
    writeln!(output, "You left with ${balance}.")?;
    info!(balance, rounds = session.rounds(), "session ended");
    Ok(balance)
}
