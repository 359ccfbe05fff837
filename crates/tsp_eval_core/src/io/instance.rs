use std::{
    fmt::{self, Display, Formatter},
    fs,
    path::Path,
};

use crate::{Error, Point, Result};

const COMMENT_PREFIX: char = '#';

/// Ordered point set of a problem instance, zero-indexed.
///
/// The declared point count of the plain format is not stored separately: it
/// is always the length of `points`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Instance {
    points: Vec<Point>,
}

impl Instance {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Reads an instance in the plain format:
    ///
    /// ```text
    /// n
    /// x_1 y_1
    /// ...
    /// x_n y_n
    /// ```
    ///
    /// Blank lines and `#` comment lines are skipped. Anything after the
    /// `n`-th coordinate line is ignored.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("instance: reading path={}", path.display());

        let text = fs::read_to_string(path)?;
        let instance = Self::parse(&text)?;

        log::info!("instance: loaded path={} n={}", path.display(), instance.n());
        Ok(instance)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT_PREFIX));

        let Some((count_line_no, count_line)) = lines.next() else {
            return Err(Error::format("Missing point count line"));
        };
        let n: usize = count_line.parse().map_err(|e| {
            Error::format(format!(
                "Line {count_line_no}: invalid point count '{count_line}': {e}"
            ))
        })?;

        let points = lines
            .take(n)
            .map(|(line_no, line)| parse_point(line_no, line))
            .collect::<Result<Vec<_>>>()?;

        if points.len() != n {
            return Err(Error::format(format!(
                "Expected {n} coordinate lines, read {}",
                points.len()
            )));
        }

        Ok(Self { points })
    }

    /// Writes the plain format, one `x y` line per point in order.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string())?;
        log::info!("instance: wrote path={} n={}", path.display(), self.n());
        Ok(())
    }

    pub fn n(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn get(&self, idx: usize) -> Option<Point> {
        self.points.get(idx).copied()
    }
}

impl FromIterator<Point> for Instance {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Display for Instance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.n())?;
        for point in &self.points {
            writeln!(f, "{point}")?;
        }
        Ok(())
    }
}

fn parse_point(line_no: usize, line: &str) -> Result<Point> {
    let mut it = line.split_whitespace();
    let (Some(x_s), Some(y_s), None) = (it.next(), it.next(), it.next()) else {
        return Err(Error::format(format!(
            "Line {line_no}: expected 'x y' but got '{line}'"
        )));
    };

    let x: f64 = x_s.parse().map_err(|_| {
        Error::format(format!("Line {line_no}: invalid x coordinate: {x_s}"))
    })?;
    let y: f64 = y_s.parse().map_err(|_| {
        Error::format(format!("Line {line_no}: invalid y coordinate: {y_s}"))
    })?;

    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        path::PathBuf,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::Instance;
    use crate::{Error, Point};

    fn unique_temp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("tsp-eval-tests-{name}-{nanos}"))
    }

    #[test]
    fn parse_reads_count_then_coordinates() {
        let instance = Instance::parse("3\n0 0\n3 0\n3.5 -4e2\n").expect("parse");
        assert_eq!(instance.n(), 3);
        assert_eq!(instance.points()[2], Point::new(3.5, -400.0));
    }

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        let text = "# berlin subset\n\n2\n# first\n565.0 575.0\n\n   25.0\t185.0  \n";
        let instance = Instance::parse(text).expect("parse");
        assert_eq!(
            instance.points(),
            &[Point::new(565.0, 575.0), Point::new(25.0, 185.0)]
        );
    }

    #[test]
    fn parse_accepts_zero_points_and_ignores_trailing_lines() {
        assert!(Instance::parse("0\n").expect("parse").is_empty());

        let instance = Instance::parse("1\n1 2\n3 4\n").expect("parse");
        assert_eq!(instance.n(), 1);
    }

    #[test]
    fn parse_rejects_non_integer_count() {
        for text in ["three\n0 0\n", "-1\n", "2.5\n", ""] {
            let err = Instance::parse(text).expect_err("bad count");
            assert!(matches!(err, Error::Format(_)), "{text:?} gave {err}");
        }
    }

    #[test]
    fn parse_rejects_missing_coordinate_lines() {
        let err = Instance::parse("3\n0 0\n1 1\n").expect_err("short file");
        assert!(err.to_string().contains("Expected 3 coordinate lines, read 2"));
    }

    #[test]
    fn parse_rejects_malformed_coordinate_lines() {
        let err = Instance::parse("2\n0 0\n1 y\n").expect_err("bad y");
        assert!(err.to_string().contains("Line 3: invalid y coordinate: y"));

        let err = Instance::parse("1\n1 2 3\n").expect_err("extra token");
        assert!(err.to_string().contains("expected 'x y'"));

        let err = Instance::parse("1\n7\n").expect_err("missing token");
        assert!(err.to_string().contains("expected 'x y'"));
    }

    #[test]
    fn display_writes_plain_format() {
        let instance = Instance::new(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.5)]);
        assert_eq!(instance.to_string(), "2\n0.0 0.0\n3.0 4.5\n");
        assert_eq!(Instance::default().to_string(), "0\n");
    }

    #[test]
    fn save_then_load_preserves_points() {
        let dir = unique_temp_dir("instance-round-trip");
        fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("cities.txt");

        let original: Instance = [
            Point::new(0.1, 0.2),
            Point::new(-1234.5678, 1e-9),
            Point::new(6.02e23, 42.0),
        ]
        .into_iter()
        .collect();
        original.save(&path).expect("save instance");

        let loaded = Instance::load(&path).expect("load instance");
        assert_eq!(loaded.n(), original.n());
        for (a, b) in loaded.points().iter().zip(original.points()) {
            assert!((a.x - b.x).abs() <= f64::EPSILON * b.x.abs().max(1.0));
            assert!((a.y - b.y).abs() <= f64::EPSILON * b.y.abs().max(1.0));
        }

        fs::remove_dir_all(&dir).expect("cleanup temp dir");
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let err = Instance::load(unique_temp_dir("missing").join("none.txt"))
            .expect_err("missing file");
        assert!(matches!(err, Error::Io(_)));
    }
}
