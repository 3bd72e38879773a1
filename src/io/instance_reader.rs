//! # Instance Reader
//!
//! Reads a [`BipartiteInstance`] from the line-oriented instance format described in the
//! [module documentation](super).

use log::warn;

use super::*;

/// A reader for the instance format
#[derive(Debug, Clone)]
pub struct InstanceReader {
    /// If *true*, a truncated edge list ends the input instead of failing
    lenient_edges: bool,
}

impl Default for InstanceReader {
    /// Default to accepting truncated edge lists
    fn default() -> Self {
        Self {
            lenient_edges: true,
        }
    }
}

impl InstanceReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates whether fewer edges than announced are accepted
    pub fn lenient_edges(mut self, lenient: bool) -> InstanceReader {
        self.lenient_edges = lenient;
        self
    }

    /// Tries to read an instance from a given reader
    pub fn try_read_instance<R: BufRead>(&self, reader: R) -> Result<BipartiteInstance> {
        let mut lines = reader.lines();

        let n: NumNodes =
            parse_single_value(&next_line(&mut lines, "number of items")?, "number of items")?;
        raise_error_unless!(
            n % 2 == 0,
            ErrorKind::InvalidData,
            format!("Number of items must be even, found {n}.")
        );
        raise_error_unless!(
            n <= MAX_ITEMS,
            ErrorKind::InvalidData,
            format!("Number of items must not exceed {MAX_ITEMS}, found {n}.")
        );

        // grows with the input instead of trusting `n`
        let mut labels = Vec::new();
        for _ in 0..n {
            let label = next_line(&mut lines, "item labels")?;
            labels.push(label.trim().to_string());
        }
        let right = labels.split_off(n as usize / 2);
        let mut instance = BipartiteInstance::from_labels(labels, right);

        let m: NumEdges =
            parse_single_value(&next_line(&mut lines, "number of edges")?, "number of edges")?;

        // edges may be spread over the remaining input arbitrarily
        let mut rest = String::new();
        for line in lines {
            rest.push_str(&line?);
            rest.push('\n');
        }
        let mut tokens = rest.split_whitespace();

        for i in 0..m {
            let from: Node = match tokens.next().map(str::parse) {
                Some(Ok(from)) => from,
                _ if self.lenient_edges => {
                    warn!("Expected {m} edges but found only {i}; ignoring the remaining input.");
                    break;
                }
                _ => {
                    return Err(io_error!(
                        ErrorKind::InvalidData,
                        format!("Expected {m} edges but found only {i}.")
                    ));
                }
            };
            let to: Node = parse_next_value!(tokens, "target of an edge");

            raise_error_unless!(
                (1..=n).contains(&from) && (1..=n).contains(&to),
                ErrorKind::InvalidData,
                format!("Edge ({from},{to}) is out of bounds for {n} items.")
            );

            if !(instance.is_left(from) && instance.is_right(to)) {
                warn!("Edge ({from},{to}) does not lead from the left to the right side.");
            }

            instance.add_edge(from, to);
        }

        Ok(instance)
    }

    /// Tries to read an instance from a given file
    pub fn try_read_instance_file<P: AsRef<Path>>(&self, path: P) -> Result<BipartiteInstance> {
        self.try_read_instance(BufReader::new(File::open(path)?))
    }
}

/// Trait for reading instances with default [`InstanceReader`] settings
pub trait InstanceRead: Sized {
    /// Tries to read the instance from a given reader
    fn try_read_instance<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the instance from a given file
    fn try_read_instance_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_instance(BufReader::new(File::open(path)?))
    }
}

impl InstanceRead for BipartiteInstance {
    fn try_read_instance<R: BufRead>(reader: R) -> Result<Self> {
        InstanceReader::default().try_read_instance(reader)
    }
}

/// Returns the next line or fails with a description of what was expected
fn next_line<I>(lines: &mut I, name: &str) -> Result<String>
where
    I: Iterator<Item = Result<String>>,
{
    lines.next().unwrap_or_else(|| {
        Err(io_error!(
            ErrorKind::InvalidData,
            format!("Premature end of input when reading {name}.")
        ))
    })
}

/// Parses a line that consists of exactly one value
fn parse_single_value<T>(line: &str, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Debug,
{
    let mut parts = line.split_whitespace();
    let value = parse_next_value!(parts, name);
    raise_error_unless!(
        parts.next().is_none(),
        ErrorKind::InvalidData,
        format!("Unexpected trailing input after {name}.")
    );
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    const FOUR_BY_FOUR: &str = "8\nA\nB\nC\nD\nW\nX\nY\nZ\n6\n1 5\n1 6\n2 5\n3 6\n3 7\n4 8\n";

    #[test]
    fn read_instance() {
        let instance = BipartiteInstance::try_read_instance(FOUR_BY_FOUR.as_bytes()).unwrap();

        assert_eq!(instance.number_of_items(), 8);
        assert_eq!(instance.left_labels(), &["A", "B", "C", "D"]);
        assert_eq!(instance.right_labels(), &["W", "X", "Y", "Z"]);
        assert_eq!(
            instance.edges().iter().map(|e| (e.0, e.1)).collect_vec(),
            vec![(1, 5), (1, 6), (2, 5), (3, 6), (3, 7), (4, 8)]
        );
    }

    #[test]
    fn whitespace_is_trimmed() {
        let input = " 4 \r\n  Ann Lee \r\nBob\nX\n Y\n 2\n1 3 2\n\n  3\n";
        let instance = BipartiteInstance::try_read_instance(input.as_bytes()).unwrap();

        assert_eq!(instance.left_labels(), &["Ann Lee", "Bob"]);
        assert_eq!(instance.right_labels(), &["X", "Y"]);
        assert_eq!(instance.edges(), &[Edge(1, 3), Edge(2, 3)]);
    }

    #[test]
    fn truncated_edges() {
        let input = "4\nA\nB\nX\nY\n3\n1 3\n";

        let instance = InstanceReader::new()
            .try_read_instance(input.as_bytes())
            .unwrap();
        assert_eq!(instance.edges(), &[Edge(1, 3)]);

        let err = InstanceReader::new()
            .lenient_edges(false)
            .try_read_instance(input.as_bytes())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn non_numeric_edge_stops_lenient_reading() {
        let input = "4\nA\nB\nX\nY\n2\n1 3\nend\n";
        let instance = BipartiteInstance::try_read_instance(input.as_bytes()).unwrap();
        assert_eq!(instance.number_of_edges(), 1);
    }

    #[test]
    fn malformed_input() {
        for input in [
            "",
            "x\n",
            "3\nA\nB\nC\n0\n",
            "4\nA\nB\nX\n",
            "4\nA\nB\nX\nY\n",
            "4\nA\nB\nX\nY\ntwo\n",
            "4 4\nA\nB\nX\nY\n0\n",
            "4\nA\nB\nX\nY\n1\n1\n",
            "4\nA\nB\nX\nY\n1\n1 x\n",
            "4\nA\nB\nX\nY\n1\n1 5\n",
            "4\nA\nB\nX\nY\n1\n0 3\n",
        ] {
            let err = BipartiteInstance::try_read_instance(input.as_bytes()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{input:?}");
        }
    }

    #[test]
    fn huge_item_count() {
        // fails on the missing labels without reserving space for them
        let err = BipartiteInstance::try_read_instance("4000000000\nA\nB\n".as_bytes())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        for n in [MAX_ITEMS + 1, Node::MAX - 1] {
            let err = BipartiteInstance::try_read_instance(format!("{n}\n").as_bytes())
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{n}");
        }
    }

    #[test]
    fn missing_file() {
        let err = BipartiteInstance::try_read_instance_file("/nonexistent/instance.txt").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
