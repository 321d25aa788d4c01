use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use defuse_core::GameError;

mod args;
mod command;
mod render;
mod session;

use args::Args;
use command::Command;
use session::{Session, Step, fresh_seed};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = args.game_config()?;
    let seed = args.seed.unwrap_or_else(fresh_seed);
    log::debug!("seed: {}, config: {:?}", seed, config);

    let mut session = Session::new(config, seed, args.show_all).context("could not start a game")?;

    if args.moves.is_empty() {
        play_interactive(&mut session)?;
    } else {
        play_script(&mut session, &args.moves)?;
    }
    log::info!("Stopped with status {:?}", session.game().status());

    if args.json {
        let summary = serde_json::to_string_pretty(&session.summary())?;
        println!("{}", summary);
    }
    Ok(())
}

fn play_script(session: &mut Session, moves: &[Command]) -> anyhow::Result<()> {
    for (index, &command) in moves.iter().enumerate() {
        let step = session
            .apply(command)
            .with_context(|| format!("move {} ({:?}) failed", index + 1, command))?;
        if step != Step::Continue {
            break;
        }
    }
    print!("{}", session.render());
    Ok(())
}

fn play_interactive(session: &mut Session) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Reveal with `x,y`, mark with `m x,y`, `s` toggles show-all, `r` restarts, `q` quits.");
    print!("{}", session.render());

    for line in stdin.lock().lines() {
        let line = line.context("could not read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        match session.apply(command) {
            Ok(Step::Quit) => break,
            Ok(_) => {}
            Err(GameError::AlreadyEnded) => println!("Game over, `r` to play again or `q` to quit."),
            Err(err) => println!("{}", err),
        }

        print!("{}", session.render());
        stdout.flush()?;
    }

    Ok(())
}
