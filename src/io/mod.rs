/*!
# IO

Utilities for reading matching instances and writing computed matchings.

## Input Format

An instance is given line by line:
- the number of items `n` (even),
- `n / 2` lines with the labels of the left items,
- `n / 2` lines with the labels of the right items,
- the number of edges `m`,
- `m` edges `u v` using 1-based item indices (whitespace separated, line breaks are optional).

## Output Format

One line `"<left label> / <right label>"` per matched pair followed by `"<N> total matches"`.

## Traits

- [`InstanceRead`] reads a [`BipartiteInstance`] with default settings; [`InstanceReader`] is
  the configurable reader behind it.
- [`MatchingWrite`] writes the matching of a [`ResidualNetwork`] with default settings;
  [`MatchingWriter`] is the configurable writer behind it.
*/

pub mod instance_reader;
pub mod matching_writer;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use crate::{algo::ResidualNetwork, instance::BipartiteInstance, *};

pub use instance_reader::*;
pub use matching_writer::*;

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of input when parsing {}.", $name)
        );

        let parsed = next.unwrap().trim().parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap()
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
