use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Write};
use tracing::{info, warn, Level};

use wf_helper::{grid_hash, logging, FinderError, GridIndex, ResultStore, WordRanker};

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Msg {
    Init {
        grid: Option<Vec<String>>, // rows top to bottom
        db_path: Option<String>,
    },
    Find {
        words: Option<Vec<String>>,
    },
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "type")]
enum Out {
    Ready { rows: usize, cols: usize },
    Found { words: Vec<String> },
    Error { message: String },
}

struct State {
    grid: GridIndex,
    grid_hash: String,
    store: Option<ResultStore>,
}

fn init(grid: Option<Vec<String>>, db_path: Option<String>) -> Result<State, FinderError> {
    // an absent grid is rejected the same way as an empty one
    let grid = GridIndex::new(grid.unwrap_or_default())?;
    let store = match db_path {
        Some(path) => Some(ResultStore::open(path)?),
        None => None,
    };
    let grid_hash = grid_hash(&grid);
    Ok(State { grid, grid_hash, store })
}

fn find(state: &mut State, words: Option<Vec<String>>) -> Result<Vec<String>, FinderError> {
    let found = WordRanker::new(&state.grid).find(words)?;
    if let Some(ref mut store) = state.store {
        store.record(&state.grid_hash, &found)?;
    }
    Ok(found)
}

fn handle(line: &str, state_opt: &mut Option<State>) -> Out {
    let msg: Msg = match serde_json::from_str(line) {
        Ok(m) => m,
        Err(e) => return Out::Error { message: format!("bad json: {}", e) },
    };
    match msg {
        Msg::Init { grid, db_path } => match init(grid, db_path) {
            Ok(state) => {
                let out = Out::Ready { rows: state.grid.rows(), cols: state.grid.cols() };
                info!(hash = %state.grid_hash, "worker initialized");
                *state_opt = Some(state);
                out
            }
            Err(e) => {
                *state_opt = None;
                Out::Error { message: e.to_string() }
            }
        },
        Msg::Find { words } => match state_opt {
            Some(state) => match find(state, words) {
                Ok(words) => Out::Found { words },
                Err(e) => Out::Error { message: e.to_string() },
            },
            None => Out::Error { message: "not initialized".into() },
        },
    }
}

fn run<R: BufRead, W: Write>(mut reader: R, writer: &mut W) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    let mut state_opt: Option<State> = None;

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 { break; }
        let out = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => handle(line, &mut state_opt),
            Err(e) => Out::Error { message: format!("bad json: {}", e) },
        };
        if let Out::Error { ref message } = out {
            warn!(%message, "request failed");
        }
        writeln!(writer, "{}", serde_json::to_string(&out)?)?;
        writer.flush()?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    logging::init(Level::WARN);
    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());
    let mut stdout = std::io::stdout();
    run(reader, &mut stdout)
}
