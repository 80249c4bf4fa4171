use clap::Parser;
use log::info;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use wordle_clue_filter::*;

/// Lists the words that are still possible given the Wordle clues you've seen so far.
///
/// Each clue is five characters: a letter where the guess showed that colour, and '_' elsewhere.
/// For example, if you guessed "crane" and only the 'a' was yellow, you would pass
/// `--yellow __a__ --gray cr_ne`.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the list of possible answers, with one word on each line.
    #[arg(long, env = "WORDLE_ANSWERS", default_value = "answers.txt")]
    answers: String,

    /// Path to the extended list of allowed guesses, with one word on each line.
    #[arg(long, env = "WORDLE_ALLOWED", default_value = "allowed.txt")]
    allowed: String,

    /// Letters that are in the right place. May be repeated.
    #[arg(long, value_name = "CLUE")]
    green: Vec<String>,

    /// Letters that are in the word, but not in this place. May be repeated.
    #[arg(long, value_name = "CLUE")]
    yellow: Vec<String>,

    /// Letters that are not in the word at this place. May be repeated.
    #[arg(long, value_name = "CLUE")]
    gray: Vec<String>,

    /// Also list matching words from the allowed-guess list, after the possible answers.
    #[arg(long)]
    include_allowed: bool,

    /// Print only the number of matching words.
    #[arg(long)]
    count: bool,
}

fn main() {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();

    let words = match run(&args) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(e) = write_words(&mut out, &words, args.count).and_then(|_| out.flush()) {
        // A closed stdout, e.g. when piped into `head`, is not a failure.
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("Error: can't write results: {}", e);
            std::process::exit(1);
        }
    }

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );
}

/// Loads the word lists, records the clues, and returns the matching words.
///
/// Nothing is filtered unless every clue is valid.
fn run(args: &Args) -> Result<Vec<Arc<str>>, WordleError> {
    let mut filter = ClueFilter::from_paths(&args.answers, &args.allowed)?;
    add_clues(&mut filter, args)?;

    let words = if args.include_allowed {
        filter.possible_guesses()
    } else {
        filter.possible_solutions()
    };
    info!("{} words match {} clues.", words.len(), filter.clues().len());
    Ok(words)
}

/// Records every clue from the command line, stopping at the first invalid one.
fn add_clues(filter: &mut ClueFilter, args: &Args) -> Result<(), WordleError> {
    for clue in &args.green {
        filter.add_green(clue)?;
    }
    for clue in &args.yellow {
        filter.add_yellow(clue)?;
    }
    for clue in &args.gray {
        filter.add_gray(clue)?;
    }
    Ok(())
}

fn write_words<W: Write>(out: &mut W, words: &[Arc<str>], count_only: bool) -> io::Result<()> {
    if count_only {
        return writeln!(out, "{}", words.len());
    }
    for word in words {
        writeln!(out, "{}", word)?;
    }
    Ok(())
}
