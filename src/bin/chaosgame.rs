extern crate chaosgame;
extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;

use chaosgame::config::parse_pair;
use chaosgame::{run, Config, Framebuffer, HeadlessFrontend, RatioMode};
use clap::{App, Arg, ArgMatches};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const SIDES: &str = "sides";
const RATIO: &str = "ratio";
const STEPS: &str = "steps";
const SEED: &str = "seed";
const FLUSH: &str = "flush-every";
const RETRY_CAP: &str = "retry-cap";

fn args<'a>() -> ArgMatches<'a> {
    App::new("chaosgame")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Chaos game fractal renderer")
        .arg(
            Arg::with_name(SIDES)
                .required(false)
                .long(SIDES)
                .short("n")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1usize,
                        "Could not parse side count",
                        "Side count must be at least 1",
                    )
                })
                .help("Number of sides of the polygon (prompted for if missing)"),
        )
        .arg(
            Arg::with_name(RATIO)
                .required(false)
                .long(RATIO)
                .short("r")
                .takes_value(true)
                .validator(|s| RatioMode::from_str(&s).map(|_| ()).map_err(|e| e.to_string()))
                .help("Contraction ratio, or 'optimal' (prompted for if missing)"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x800")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse canvas size"))
                .help("Size of the canvas"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("simulation.jpg")
                .help("Output file; the format follows the extension"),
        )
        .arg(
            Arg::with_name(STEPS)
                .required(false)
                .long(STEPS)
                .takes_value(true)
                .default_value("1000000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1u64,
                        "Could not parse step count",
                        "Step count must be at least 1",
                    )
                })
                .help("Number of steps to run before writing the image"),
        )
        .arg(
            Arg::with_name(FLUSH)
                .required(false)
                .long(FLUSH)
                .takes_value(true)
                .default_value("5000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1u64,
                        "Could not parse flush interval",
                        "Flush interval must be at least 1",
                    )
                })
                .help("Report progress every this many steps"),
        )
        .arg(
            Arg::with_name(SEED)
                .required(false)
                .long(SEED)
                .takes_value(true)
                .validator(|s| {
                    validate_range(&s, 0u64, "Could not parse seed", "Seed must not be negative")
                })
                .help("Seed for the random number generator"),
        )
        .arg(
            Arg::with_name(RETRY_CAP)
                .required(false)
                .long(RETRY_CAP)
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1usize,
                        "Could not parse retry cap",
                        "Retry cap must be at least 1",
                    )
                })
                .help("Give up on vertex redraws after this many tries"),
        )
        .get_matches()
}

/// Ask a question on the console and return the trimmed answer.
fn prompt(question: &str) -> io::Result<String> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(question.as_bytes())?;
    out.flush()?;

    let mut answer = String::new();
    let stdin = io::stdin();
    stdin.lock().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

fn config(matches: &ArgMatches) -> chaosgame::Result<Config> {
    let sides = match matches.value_of(SIDES) {
        Some(s) => s.to_string(),
        None => prompt("Enter the number of sides of the polygon: ")?,
    };
    let sides = usize::from_str(&sides).map_err(|_| {
        chaosgame::Error::InvalidConfig(format!("Could not parse side count '{}'", sides))
    })?;

    let ratio = match matches.value_of(RATIO) {
        Some(r) => r.to_string(),
        None => prompt("Enter the ratio ('optimal' for optimal ratio): ")?,
    };
    let ratio = RatioMode::from_str(&ratio)?;

    // The validators have already seen these.
    let (width, height) = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair(s, 'x'))
        .unwrap_or((800, 800));
    let defaults = Config::default();
    let number = |name: &str, default: u64| {
        matches
            .value_of(name)
            .and_then(|s| u64::from_str(s).ok())
            .unwrap_or(default)
    };

    let config = Config {
        width,
        height,
        sides,
        ratio,
        seed: matches.value_of(SEED).and_then(|s| u64::from_str(s).ok()),
        steps: number(STEPS, defaults.steps),
        flush_every: number(FLUSH, defaults.flush_every),
        output: matches
            .value_of(OUTPUT)
            .map(PathBuf::from)
            .unwrap_or(defaults.output),
        retry_cap: matches
            .value_of(RETRY_CAP)
            .and_then(|s| usize::from_str(s).ok()),
    };
    config.validate()?;
    Ok(config)
}

fn render(config: &Config) -> chaosgame::Result<()> {
    let mut game = config.game()?;
    println!(
        "Starting chaos simulation - sides: {}, ratio: {}.",
        config.sides,
        game.ratio()
    );

    let mut framebuffer = Framebuffer::new(game.canvas());
    let mut frontend = HeadlessFrontend::new(config.steps);
    let steps = run(&mut game, &mut framebuffer, &mut frontend, config.flush_every);
    debug!("{} steps done, exporting", steps);
    framebuffer.export(&config.output)
}

fn main() {
    env_logger::init();
    let matches = args();

    let config = match config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration failure: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = render(&config) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
