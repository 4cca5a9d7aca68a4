//! `--click` argument values.

use std::fmt;
use std::str::FromStr;

/// A header click, either by column or by pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    Column(usize),
    At { x: u16, y: u16 },
}

impl FromStr for Click {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((x, y)) = s.split_once(',') {
            let x = x
                .trim()
                .parse()
                .map_err(|_| format!("invalid x coordinate in '{s}'"))?;
            let y = y
                .trim()
                .parse()
                .map_err(|_| format!("invalid y coordinate in '{s}'"))?;
            return Ok(Click::At { x, y });
        }
        s.parse()
            .map(Click::Column)
            .map_err(|_| format!("expected a column index or X,Y, got '{s}'"))
    }
}

impl fmt::Display for Click {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Click::Column(column) => write!(f, "column {column}"),
            Click::At { x, y } => write!(f, "point ({x}, {y})"),
        }
    }
}
