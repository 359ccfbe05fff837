//! TSPLIB problem-file reader for the `NODE_COORD_SECTION` subset.

use std::{fs, path::Path};

use crate::{ParseMode, TsplibError, TsplibResult};

const NODE_COORD_SECTION_HEADER: &str = "NODE_COORD_SECTION";
const EOF_MARKER: &str = "EOF";
const MIN_RECORD_TOKENS: usize = 3;

/// Entry in `NODE_COORD_SECTION`. The node id is not kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeCoord {
    pub x: f64,
    pub y: f64,
}

impl NodeCoord {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Points and header metadata extracted from a TSPLIB problem file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TsplibProblem {
    pub name: Option<String>,
    pub comment_lines: Vec<String>,
    /// `DIMENSION` as declared by the header, if it parsed. Not checked against
    /// the coordinate count.
    pub dimension: Option<usize>,
    pub node_coord_section: Vec<NodeCoord>,
    /// Records after the section marker that had fewer than three tokens.
    pub skipped_lines: usize,
    pub has_node_coord_section: bool,
}

impl TsplibProblem {
    /// Reads and parses a TSPLIB problem file from disk.
    pub fn from_file(file_path: impl AsRef<Path>, mode: ParseMode) -> TsplibResult<Self> {
        let text = fs::read_to_string(file_path.as_ref()).map_err(TsplibError::Io)?;
        Self::parse(&text, mode)
    }

    /// Parses TSPLIB problem text.
    ///
    /// Lines before `NODE_COORD_SECTION` are header metadata and never fail the
    /// parse. After the marker every line with at least three tokens is an
    /// `id x y` record; scanning stops at a line holding the `EOF` token or at
    /// the first blank line. In [`ParseMode::Lenient`] shorter lines are
    /// skipped, in [`ParseMode::Strict`] they are rejected, as is a result with
    /// no points.
    pub fn parse(text: &str, mode: ParseMode) -> TsplibResult<Self> {
        let mut problem = Self::default();

        for (idx, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            let line_no = idx + 1;

            if !problem.has_node_coord_section {
                if line.contains(NODE_COORD_SECTION_HEADER) {
                    problem.has_node_coord_section = true;
                } else {
                    problem.read_header_line(line);
                }
                continue;
            }

            if line.is_empty() || line.split_whitespace().any(|token| token == EOF_MARKER) {
                break;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < MIN_RECORD_TOKENS {
                if mode.is_strict() {
                    return Err(TsplibError::format(format!(
                        "Line {line_no}: expected 'id x y' but got '{line}'"
                    )));
                }
                problem.skipped_lines += 1;
                continue;
            }

            let x = parse_coord(tokens[1], "x", line_no)?;
            let y = parse_coord(tokens[2], "y", line_no)?;
            problem.node_coord_section.push(NodeCoord::new(x, y));
        }

        if mode.is_strict() {
            if !problem.has_node_coord_section {
                return Err(TsplibError::format(format!(
                    "Missing {NODE_COORD_SECTION_HEADER}"
                )));
            }
            if problem.node_coord_section.is_empty() {
                return Err(TsplibError::format(format!(
                    "{NODE_COORD_SECTION_HEADER} has no coordinate records"
                )));
            }
        }

        Ok(problem)
    }

    pub fn len(&self) -> usize {
        self.node_coord_section.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_coord_section.is_empty()
    }

    /// Coordinates in encounter order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.node_coord_section.iter().map(|c| (c.x, c.y))
    }

    fn read_header_line(&mut self, line: &str) {
        let Some((key, value)) = line
            .split_once(':')
            .map(|(key, value)| (key.trim().to_ascii_uppercase(), value.trim()))
        else {
            return;
        };

        match key.as_str() {
            "NAME" => self.name = Some(value.to_string()),
            "COMMENT" => self.comment_lines.push(value.to_string()),
            "DIMENSION" => self.dimension = value.parse::<usize>().ok(),
            _ => {}
        }
    }
}

fn parse_coord(token: &str, axis: &str, line_no: usize) -> TsplibResult<f64> {
    token.parse::<f64>().map_err(|e| {
        TsplibError::format(format!("Line {line_no}: bad {axis} coordinate '{token}': {e}"))
    })
}
