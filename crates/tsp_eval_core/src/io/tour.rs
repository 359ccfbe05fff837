use std::{
    fmt::{self, Display, Formatter},
    fs,
    path::Path,
};

use crate::{Error, Result};

/// Visiting order over an instance's point indices, read as a closed cycle.
///
/// Entries are kept exactly as read, so a file with repeated, missing, or
/// out-of-range indices still loads and can be inspected. Whether the order is
/// a permutation is checked by [`crate::TourEvaluator`] in strict mode.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tour {
    order: Vec<i64>,
}

impl Tour {
    pub fn new(order: Vec<i64>) -> Self {
        Self { order }
    }

    /// Reads a whitespace-separated stream of integers in encounter order.
    /// Line structure is irrelevant.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("tour: reading path={}", path.display());

        let text = fs::read_to_string(path)?;
        let tour = Self::parse(&text)?;

        log::info!("tour: loaded path={} len={}", path.display(), tour.len());
        Ok(tour)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let order = text
            .split_whitespace()
            .enumerate()
            .map(|(idx, tok)| {
                tok.parse::<i64>().map_err(|e| {
                    Error::format(format!("Token {}: invalid tour index '{tok}': {e}", idx + 1))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { order })
    }

    /// Writes the order space-separated on a single line.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string())?;
        log::info!("tour: wrote path={} len={}", path.display(), self.len());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn order(&self) -> &[i64] {
        &self.order
    }
}

impl From<Vec<i64>> for Tour {
    fn from(order: Vec<i64>) -> Self {
        Self::new(order)
    }
}

impl Display for Tour {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut it = self.order.iter();
        if let Some(first) = it.next() {
            write!(f, "{first}")?;
            for idx in it {
                write!(f, " {idx}")?;
            }
        }
        writeln!(f)
    }
}
