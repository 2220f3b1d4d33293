use std::error::Error;
use std::io::{self, BufRead};

use clap::{Parser, Subcommand};
use log::{debug, info};
use textprobe::checker::{
    AnswerLayout, Checker, Selection, DEFAULT_CANDIDATE_TEMPLATE, DEFAULT_CASES,
    DEFAULT_EXPECTED_TEMPLATE,
};
use textprobe::error::read_text;
use textprobe::repeat::analyze;

/// Command-line arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report the longest repeated substring and smallest repeating unit of a file
    Repeat {
        /// Input text file
        #[arg(default_value = "prt.txt")]
        input: String,
    },

    /// Compare candidate outputs with expected answers
    Check {
        /// Case to check; when omitted, one line is read from stdin
        #[arg(short = 'i', long = "index")]
        index: Option<usize>,

        /// Number of cases checked in batch mode
        #[arg(short = 'n', long = "cases", default_value_t = DEFAULT_CASES)]
        cases: usize,

        /// Expected answer path template
        #[arg(long = "expected", default_value = DEFAULT_EXPECTED_TEMPLATE)]
        expected: String,

        /// Candidate output path template
        #[arg(long = "candidate", default_value = DEFAULT_CANDIDATE_TEMPLATE)]
        candidate: String,

        /// Also report differing lines
        #[arg(long = "by-line")]
        by_line: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize the logger
    if args.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match args.command {
        Command::Repeat { input } => {
            info!("Reading input file: {}", input);
            let text = read_text(&input)?;
            let report = analyze(&text);
            println!("{}", report);
        }
        Command::Check {
            index,
            cases,
            expected,
            candidate,
            by_line,
        } => {
            let selection = match index {
                Some(index) => Selection::Single(index),
                None => {
                    let mut line = String::new();
                    io::stdin().lock().read_line(&mut line)?;
                    Selection::from_input(&line)
                }
            };
            debug!("Selected {:?}.", selection);

            let checker = Checker {
                layout: AnswerLayout::new(expected, candidate),
                cases,
                by_line,
            };
            let stdout = io::stdout();
            checker.run(selection, &mut stdout.lock())?;
        }
    }

    Ok(())
}
