//! Pentago console
//!
//! Plays Pentago against the AI in the terminal. Moves are typed as
//! `Q/C QD`, e.g. `1/5 2R`: place in quadrant 1 cell 5, then rotate
//! quadrant 2 clockwise (`R`) or counter-clockwise (`L`).

use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};

use clap::Parser;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pentago::engine::DEFAULT_DEPTH;
use pentago::{AIEngine, Board, Marble, Move, Outcome};

#[derive(Parser)]
#[command(author, version, about = "Play Pentago against the AI in the terminal", long_about = None)]
struct Args {
    /// AI look-ahead in plies
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    /// Seed for side assignment (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Player name (asked interactively when omitted)
    #[arg(short, long)]
    name: Option<String>,
}

/// Line-oriented prompt: questions and reports go to `output`, answers
/// come from `input`.
struct Prompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Print `question` and read one trimmed line. `None` on end of input.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }
}

/// Sides for one game
struct Seating {
    human: Marble,
    ai: Marble,
    first: Marble,
}

impl Seating {
    fn random(rng: &mut impl Rng) -> Self {
        let ai = if rng.gen_bool(0.5) { Marble::Black } else { Marble::White };
        let first = if rng.gen_bool(0.5) { ai } else { ai.opponent() };
        Self {
            human: ai.opponent(),
            ai,
            first,
        }
    }
}

/// Play one game. `None` when input ends mid-game.
fn play_game<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    engine: &mut AIEngine,
    seating: &Seating,
    name: &str,
) -> Result<Option<Outcome>, Box<dyn Error>> {
    let mut board = Board::new();
    let mut turn = seating.first;

    prompt.say(format_args!("{}\n", board))?;

    loop {
        if turn == seating.ai {
            prompt.say(format_args!("AI's turn ({})", seating.ai.name()))?;
            let result = engine.choose_move_with_stats(&board, seating.ai);
            let Some(mv) = result.best_move else {
                break;
            };
            board.apply_move(mv, seating.ai)?;
            prompt.say(format_args!("AI plays {} ({} nodes, {}ms)", mv, result.nodes, result.time_ms))?;
        } else {
            let question = format!("{}'s turn ({}), enter a move like 1/5 2R: ", name, seating.human.name());
            loop {
                let Some(line) = prompt.ask(&question)? else {
                    return Ok(None);
                };
                match line.parse::<Move>().and_then(|mv| board.apply_move(mv, seating.human)) {
                    Ok(()) => break,
                    Err(err) => {
                        debug!("rejected move {:?}: {}", line, err);
                        prompt.say(format_args!("Move invalid ({}). Please re-enter a valid move.", err))?;
                    }
                }
            }
        }

        prompt.say(format_args!("{}\n", board))?;

        let outcome = board.outcome();
        if outcome.is_terminal() {
            return Ok(Some(outcome));
        }
        turn = turn.opponent();
    }

    Ok(Some(board.outcome()))
}

/// End-of-game announcement from the human's side
fn verdict(outcome: Outcome, human: Marble) -> &'static str {
    match outcome.winner() {
        Some(winner) if winner == human => "Congratulations! You won!",
        Some(_) => "Sorry, the AI won. Better luck next time.",
        None => "You and the AI tied.",
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let stdin = io::stdin();
    let mut prompt = Prompt {
        input: stdin.lock(),
        output: io::stdout(),
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut engine = AIEngine::with_depth(args.depth);

    prompt.say("Welcome to PENTAGO!\n")?;
    let name = match args.name {
        Some(name) => name,
        None => match prompt.ask("What's your name? ")? {
            Some(name) if !name.is_empty() => name,
            Some(_) => "Player".to_string(),
            None => return Ok(()),
        },
    };

    loop {
        let seating = Seating::random(&mut rng);
        let (first_name, second_name) = if seating.first == seating.ai {
            ("AI", name.as_str())
        } else {
            (name.as_str(), "AI")
        };
        prompt.say(format_args!(
            "\n{} ({}) moves first, {} ({}) second.",
            first_name,
            seating.first.name(),
            second_name,
            seating.first.opponent().name()
        ))?;

        let Some(outcome) = play_game(&mut prompt, &mut engine, &seating, &name)? else {
            break;
        };
        prompt.say(verdict(outcome, seating.human))?;

        match prompt.ask("Would you like to play again? (y/n): ")? {
            Some(answer) if answer.to_ascii_lowercase().starts_with('y') => continue,
            _ => break,
        }
    }

    prompt.say("Thanks for playing! Goodbye!")?;
    Ok(())
}
