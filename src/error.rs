use thiserror::Error;

/// Why a set of rows could not become a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridProblem {
    #[error("Matrix cannot be null or empty.")]
    Empty,
    #[error("Matrix size cannot exceed 64x64.")]
    TooLarge { rows: usize, cols: usize },
    #[error("All rows in the matrix must have the same number of characters.")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Error)]
pub enum FinderError {
    #[error(transparent)]
    InvalidGrid(#[from] GridProblem),

    #[error("Wordstream cannot be null.")]
    NullInput,

    #[error("Words in the wordstream cannot be null or empty.")]
    InvalidWord,

    #[error("result store: {0}")]
    Store(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, FinderError>;
