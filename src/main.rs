//=========================================================================
// Sidescroll
//=========================================================================
//
// Binary entry point.
//
// Usage:
//   sidescroll [--skip-intro] [--no-music] [--fps] [--play-level E L]
//
// Log output goes to stderr; RUST_LOG overrides the default `info`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::process::ExitCode;

use log::error;

//=== Internal Dependencies ===============================================

use sidescroll_runtime::core::config::GameOptions;
use sidescroll_runtime::EngineBuilder;

//=== Command Line ========================================================

const USAGE: &str = "usage: sidescroll [--skip-intro] [--no-music] [--fps] [--play-level EPISODE LEVEL]";

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<GameOptions, String> {
    let mut options = GameOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--skip-intro" => options.skip_intro = true,
            "--no-music" => options.enable_music = false,
            "--fps" => options.show_fps = true,
            "--play-level" => {
                let episode = parse_number(args.next(), "episode")?;
                let level = parse_number(args.next(), "level")?;
                options.level_to_jump_to = Some((episode, level));
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }

    Ok(options)
}

fn parse_number(arg: Option<String>, what: &str) -> Result<u8, String> {
    let arg = arg.ok_or_else(|| format!("--play-level needs an {} number", what))?;
    arg.parse()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| format!("invalid {} '{}'", what, arg))
}

//=== Entry Point =========================================================

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match parse_options(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            return ExitCode::from(2);
        }
    };

    match EngineBuilder::new().with_options(options).build().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
