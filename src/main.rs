use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn, Level};

use wf_helper::{grid_hash, logging, FinderError, GridIndex, ResultStore, WordRanker};

#[derive(Parser, Debug)]
#[command(name = "wf_helper", about = "Find the most requested words hidden in a character grid", version)]
struct Cli {
    /// Record each ranked result in this SQLite database
    #[arg(long = "db")]
    db: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(long = "verbose", short = 'v')]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum SessionError {
    #[error(transparent)]
    Finder(#[from] FinderError),
    #[error("Input is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Next line without its terminator; `None` at EOF.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, SessionError> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8(buf)?;
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Grid rows up to the first blank line or EOF.
fn read_grid<R: BufRead>(reader: &mut R) -> Result<Vec<String>, SessionError> {
    let mut rows = Vec::new();
    while let Some(row) = read_line(reader)? {
        if row.trim().is_empty() {
            break;
        }
        rows.push(row);
    }
    Ok(rows)
}

/// One line of whitespace separated words; `None` at EOF.
fn read_words<R: BufRead>(reader: &mut R) -> Result<Option<Vec<String>>, SessionError> {
    Ok(read_line(reader)?.map(|line| line.split_whitespace().map(str::to_string).collect()))
}

fn search<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    store: Option<&mut ResultStore>,
) -> Result<Vec<String>, SessionError> {
    writeln!(out, "Enter the matrix, line by line (press Enter after each line, leave blank to finish):")?;
    out.flush()?;
    let grid = GridIndex::new(read_grid(reader)?)?;

    writeln!(out, "Enter the words of the wordstream separated by spaces:")?;
    out.flush()?;
    let words = read_words(reader)?;
    writeln!(out)?;

    let found = WordRanker::new(&grid).find(words)?;
    if let Some(store) = store {
        store.record(&grid_hash(&grid), &found)?;
    }
    Ok(found)
}

/// Runs one interactive session. Every failure, bad input included, is
/// reported on `out`; only a failure to write that report escapes.
fn run<R: BufRead, W: Write>(reader: &mut R, out: &mut W, store: Option<&mut ResultStore>) -> anyhow::Result<()> {
    match search(reader, out, store) {
        Ok(found) => {
            info!(count = found.len(), "search finished");
            writeln!(out, "Found words:")?;
            for word in &found {
                writeln!(out, "{}", word)?;
            }
        }
        Err(e) => {
            warn!(error = %e, "search failed");
            writeln!(out, "ERROR!")?;
            writeln!(out, "Error Message: {}", e)?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(if cli.verbose { Level::INFO } else { Level::WARN });

    let mut store = match cli.db {
        Some(ref path) => match ResultStore::open(path) {
            Ok(s) => Some(s),
            Err(e) => {
                println!("ERROR!");
                println!("Error Message: {}", e);
                return Ok(());
            }
        },
        None => None,
    };

    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = std::io::stdout();
    run(&mut reader, &mut stdout, store.as_mut())
}
