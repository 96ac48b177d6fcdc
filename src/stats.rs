use std::fmt;

use crate::scores::Error;

/// A derived statistic. Whole results stay integers so they print exactly,
/// only a fractional quotient falls back to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    fn ratio(numerator: i128, denominator: i128) -> Number {
        if numerator % denominator == 0 {
            Number::Int(numerator / denominator)
        } else {
            Number::Float(numerator as f64 / denominator as f64)
        }
    }

    #[cfg(test)]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Float(value) => value,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            Number::Float(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Stats {
    pub min: i64,
    pub max: i64,
    pub mean: Number,
    pub median: Number,
    pub total: i128,
}

impl Stats {
    pub fn compute(data: &[i64]) -> Result<Stats, Error> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut sorted = data.to_vec();
        sorted.sort_unstable();

        let n = sorted.len();
        let total: i128 = sorted.iter().map(|&value| i128::from(value)).sum();
        let mean = Number::ratio(total, n as i128);
        let median = if n % 2 == 1 {
            Number::Int(i128::from(sorted[n / 2]))
        } else {
            Number::ratio(i128::from(sorted[n / 2 - 1]) + i128::from(sorted[n / 2]), 2)
        };

        Ok(Stats {
            min: sorted[0],
            max: sorted[n - 1],
            mean,
            median,
            total,
        })
    }

    pub fn report(&self) -> Report<'_> {
        Report {
            stats: self,
            with_total: true,
        }
    }
}

/// Fixed line-per-statistic layout. Fractional values use `f64`'s `Display`,
/// so nothing switches to exponent notation.
pub struct Report<'a> {
    stats: &'a Stats,
    with_total: bool,
}

impl Report<'_> {
    /// Older layout without the `Total` line.
    #[cfg(test)]
    pub fn without_total(self) -> Self {
        Report {
            with_total: false,
            ..self
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Min: {}", self.stats.min)?;
        writeln!(f, "Max: {}", self.stats.max)?;
        writeln!(f, "Mean: {}", self.stats.mean)?;
        writeln!(f, "Median: {}", self.stats.median)?;
        if self.with_total {
            writeln!(f, "Total: {}", self.stats.total)?;
        }
        Ok(())
    }
}
