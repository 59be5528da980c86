//! CLI high-card showdown example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use ace_showdown::{Card, DealOutcome, Game, GameOptions, GameState, Outcome, Scoreboard};

fn main() {
    println!("Ace Showdown CLI example");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        print_scores(game.scores());
        println!("Cards left: {}", game.cards_remaining());

        let label = if game.state() == GameState::Initial {
            "draw cards"
        } else {
            "draw again"
        };
        let prompt = format!("[d]{label} [n]ew deck [r]eset score [q]uit: ");

        match prompt_line(&prompt).as_str() {
            "d" | "draw" | "" => draw(&mut game),
            "n" | "new" => {
                game.new_game();
                println!("New deck shuffled.");
            }
            "r" | "reset" => {
                game.reset_scores();
                println!("Scores reset.");
            }
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Unknown command."),
        }
    }
}

fn draw(game: &mut Game) {
    let dealt = match game.deal_round() {
        Ok(DealOutcome::Dealt(dealt)) => dealt,
        Ok(DealOutcome::Restarted) => {
            println!("Not enough cards left! Starting a new game.");
            return;
        }
        Err(err) => {
            println!("Draw error: {err}");
            return;
        }
    };

    println!("\nYour card:       {}", format_card(&dealt.player));
    println!("Computer's card: {}", format_card(&dealt.computer));

    match game.reveal() {
        Ok(result) => println!("{}\n", format_outcome(result.outcome)),
        Err(err) => println!("Reveal error: {err}"),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        // EOF
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_scores(scores: Scoreboard) {
    println!(
        "You {} - {} Computer",
        colorize(&scores.player.to_string(), "33"),
        colorize(&scores.computer.to_string(), "31")
    );
}

fn format_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Player => colorize("You Win!", "33"),
        Outcome::Computer => colorize("Computer Wins!", "31"),
        Outcome::Tie => "It's a Tie!".to_string(),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = if card.suit.is_red() { "31" } else { "37" };
    colorize(&card.to_string(), color_code)
}
