mod scores;
mod stats;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use argh::FromArgs;
use stats::Stats;

#[derive(FromArgs, Debug)]
/// Reads one integer per line from stdin and prints min, max, mean, median
/// and total
struct Args {}

/// Reads every score before writing anything, so a bad line leaves `output`
/// untouched.
fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<()> {
    let scores = scores::read_scores(input).context("unable to read scores")?;
    let stats = Stats::compute(&scores).context("unable to compute statistics")?;

    write!(output, "{}", stats.report()).context("unable to write report")?;
    output.flush().context("unable to write report")
}

fn main() -> Result<()> {
    let _args: Args = argh::from_env();
    run(io::stdin().lock(), io::stdout().lock())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scores::Error;

    #[test]
    fn test_run_writes_report() -> Result<()> {
        let mut output = Vec::new();
        run("4\n3\n2\n1\n".as_bytes(), &mut output)?;
        assert_eq!(
            String::from_utf8(output)?,
            "Min: 1\nMax: 4\nMean: 2.5\nMedian: 2.5\nTotal: 10\n"
        );
        Ok(())
    }

    #[test]
    fn test_late_parse_error_writes_nothing() {
        let mut output = Vec::new();
        let err = run("1\n2\n3\nabc\n".as_bytes(), &mut output).unwrap_err();
        assert!(output.is_empty());
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Parse { line: 4, .. })
        ));
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let mut output = Vec::new();
        let err = run("".as_bytes(), &mut output).unwrap_err();
        assert!(output.is_empty());
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::EmptyInput)));
    }
}
