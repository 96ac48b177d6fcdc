use std::io::{self, BufRead};
use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("line {line}: `{content}` is not an integer")]
    Parse {
        line: usize,
        content: String,
        source: ParseIntError,
    },

    #[error("no scores on input, nothing to summarize")]
    EmptyInput,

    #[error("unable to read input")]
    Io(#[from] io::Error),
}

/// Parses one input line. Surrounding whitespace is ignored, anything else
/// that is not a base-10 `i64` is rejected.
pub fn parse_score(line: usize, content: &str) -> Result<i64, Error> {
    content.trim().parse().map_err(|source| Error::Parse {
        line,
        content: content.to_owned(),
        source,
    })
}

/// Reads one score per line until end of stream. Stops at the first line that
/// does not parse.
pub fn read_scores<R: BufRead>(reader: R) -> Result<Vec<i64>, Error> {
    let mut scores = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        scores.push(parse_score(idx + 1, &line?)?);
    }

    if scores.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(scores)
}
