// Grid search and ranking through the public API

use wf_helper::{FinderError, GridIndex, GridProblem, WordRanker, MAX_DIM, TOP_N};

fn find(rows: &[&str], words: &[&str]) -> Vec<String> {
    let grid = GridIndex::new(rows.iter().copied()).unwrap();
    WordRanker::new(&grid).find(Some(words.iter().copied())).unwrap()
}

#[test]
fn test_words_along_top_row() {
    let rows = [
        "testwords", "xxxxxxxxa", "xxxxxxxxb", "xxxxxxxxc", "xxxxxxxxd", "xxxxxxxxe", "xxxxxxxxf",
        "xxxxxxxxg",
    ];
    let out = find(&rows, &["test", "words", "other", "this", "here"]);
    assert_eq!(out, vec!["test", "words"]);
}

#[test]
fn test_nothing_found() {
    let out = find(&["abc", "def", "ghi"], &["xyz", "uvw"]);
    assert!(out.is_empty());
}

#[test]
fn test_equal_counts_are_alphabetical() {
    let out = find(
        &["abcd", "efgh", "ijkl", "mnop"],
        &["ab", "ei", "ij", "gk", "dh", "gh"],
    );
    assert_eq!(out, vec!["ab", "dh", "ei", "gh", "gk", "ij"]);
}

#[test]
fn test_vertical_and_horizontal() {
    let out = find(
        &["chwxz", "hello", "aladt", "tcomx"],
        &["chat", "hello", "down", "zotx"],
    );
    assert_eq!(out, vec!["chat", "hello", "zotx"]);
}

#[test]
fn test_counts_every_occurrence() {
    let out = find(
        &["abcd", "efgh", "ijkl", "mnop"],
        &["ab", "mnop", "mnop", "ab", "mnop", "cg", "zz", "zz", "zz", "zz"],
    );
    assert_eq!(out, vec!["mnop", "ab", "cg"]);
}

#[test]
fn test_result_never_exceeds_top_n() {
    let rows: Vec<String> = (0..MAX_DIM)
        .map(|r| (0..MAX_DIM).map(|c| if (r + c) % 2 == 0 { 'a' } else { 'b' }).collect())
        .collect();
    let grid = GridIndex::new(&rows).unwrap();

    let words: Vec<String> = (1..=40)
        .map(|n| (0..n).map(|i| if i % 2 == 0 { 'a' } else { 'b' }).collect())
        .collect();
    let out = WordRanker::new(&grid).find(Some(&words)).unwrap();
    assert_eq!(out.len(), TOP_N);
    // all count 1, so the shortest prefixes win on word order
    assert_eq!(out[0], "a");
    assert_eq!(out[1], "ab");
}

#[test]
fn test_placed_word_found_only_where_it_fits() {
    let mut rows = vec!["..........".to_string(); 10];
    rows[3].replace_range(6..10, "rust");
    let grid = GridIndex::new(&rows).unwrap();
    assert!(grid.contains("rust"));
    assert!(!grid.contains("rusty"));
    assert!(!grid.contains("tsur"));

    let mut cols = vec!["..........".to_string(); 10];
    for (i, ch) in "crab".chars().enumerate() {
        cols[6 + i].replace_range(2..3, &ch.to_string());
    }
    let grid = GridIndex::new(&cols).unwrap();
    assert!(grid.contains("crab"));
    assert!(!grid.contains("crabs"));
}

#[test]
fn test_construction_failures() {
    assert!(matches!(
        GridIndex::new(Vec::<&str>::new()),
        Err(FinderError::InvalidGrid(GridProblem::Empty))
    ));
    assert!(matches!(
        GridIndex::new(["abc", "ab"]),
        Err(FinderError::InvalidGrid(GridProblem::Ragged { .. }))
    ));
    let big = vec!["a".repeat(65); 65];
    assert!(matches!(
        GridIndex::new(&big),
        Err(FinderError::InvalidGrid(GridProblem::TooLarge { rows: 65, cols: 65 }))
    ));
}

#[test]
fn test_find_failures() {
    let grid = GridIndex::new(["abc", "def", "ghi"]).unwrap();
    let ranker = WordRanker::new(&grid);
    assert!(matches!(ranker.find(None::<Vec<String>>), Err(FinderError::NullInput)));
    assert!(matches!(ranker.find(Some(["abc", ""])), Err(FinderError::InvalidWord)));
    assert_eq!(ranker.find(Some(Vec::<String>::new())).unwrap(), Vec::<String>::new());
}

#[test]
fn test_error_messages() {
    let err = GridIndex::new(["abc", "ab"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "All rows in the matrix must have the same number of characters."
    );
    assert_eq!(FinderError::NullInput.to_string(), "Wordstream cannot be null.");
}
