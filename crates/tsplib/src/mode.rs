use std::fmt::{Display, Formatter};

/// How tolerant the reader is of loosely structured files.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ParseMode {
    /// Short records after `NODE_COORD_SECTION` are skipped and a file without
    /// the section yields no points.
    #[default]
    Lenient,
    /// Any skipped record, or an empty result, is a format error.
    Strict,
}

impl ParseMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }

    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }
}

impl Display for ParseMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}
