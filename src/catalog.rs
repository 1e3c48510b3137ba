//! Item catalog: the immutable problem instance.
//!
//! A [`Catalog`] is an ordered list of [`Item`]s plus a capacity. Item
//! position is significant: bit `i` of every chromosome refers to item `i`.
//!
//! # Text format
//!
//! ```text
//! 3 35        <- item count, capacity
//! 100 20      <- value, weight
//! 150 10
//! 60 5
//! ```
//!
//! Blank lines are ignored. Fields are separated by any whitespace.

use crate::error::{KnapsackError, Result};
use std::path::Path;
use std::str::FromStr;

/// A single item that may be placed in the knapsack.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Value gained by including the item.
    pub value: f64,
    /// Weight consumed by including the item.
    pub weight: f64,
}

impl Item {
    /// Creates an item.
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// The problem instance: items and the capacity limit.
///
/// Constructed once and borrowed read-only for the whole run.
///
/// ```
/// use knapsack_ga::{Catalog, Item};
///
/// let catalog = Catalog::new(
///     vec![Item::new(100.0, 20.0), Item::new(150.0, 10.0)],
///     25.0,
/// ).unwrap();
/// assert_eq!(catalog.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCatalog"))]
pub struct Catalog {
    items: Vec<Item>,
    capacity: f64,
}

impl Catalog {
    /// Creates a catalog, rejecting empty item lists and negative or
    /// non-finite numbers.
    pub fn new(items: Vec<Item>, capacity: f64) -> Result<Self> {
        if items.is_empty() {
            return Err(KnapsackError::EmptyCatalog);
        }
        if !is_non_negative(capacity) {
            return Err(KnapsackError::invalid_catalog(format!(
                "capacity must be a non-negative number, got {capacity}"
            )));
        }
        for (i, item) in items.iter().enumerate() {
            if !is_non_negative(item.value) || !is_non_negative(item.weight) {
                return Err(KnapsackError::invalid_catalog(format!(
                    "item {i} must have non-negative value and weight, got ({}, {})",
                    item.value, item.weight
                )));
            }
        }
        Ok(Self { items, capacity })
    }

    /// Convenience constructor from `(value, weight)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)], capacity: f64) -> Result<Self> {
        let items = pairs.iter().map(|&(v, w)| Item::new(v, w)).collect();
        Self::new(items, capacity)
    }

    /// Parses the text format described in the module docs.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (header_line, header) = lines
            .next()
            .ok_or_else(|| KnapsackError::malformed(1, "missing header line"))?;
        let (count, capacity) = parse_pair(header_line, header)?;
        let count: usize = count.parse().map_err(|_| {
            KnapsackError::malformed(header_line, format!("invalid item count `{count}`"))
        })?;
        let capacity = parse_number(header_line, capacity)?;

        // The header count is untrusted; every item needs at least one byte.
        let mut items = Vec::with_capacity(count.min(text.len()));
        let mut last_line = header_line;
        for _ in 0..count {
            let (line_no, line) = lines.next().ok_or_else(|| {
                KnapsackError::malformed(
                    last_line + 1,
                    format!("expected {count} items, found {}", items.len()),
                )
            })?;
            let (value, weight) = parse_pair(line_no, line)?;
            items.push(Item::new(
                parse_number(line_no, value)?,
                parse_number(line_no, weight)?,
            ));
            last_line = line_no;
        }

        if let Some((line_no, _)) = lines.next() {
            return Err(KnapsackError::malformed(
                line_no,
                format!("unexpected record after {count} items"),
            ));
        }

        Self::new(items, capacity)
    }

    /// Reads and parses an item file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Items in positional order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The capacity limit.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Number of items (chromosome length).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false` for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Unvalidated wire form; deserialization goes through [`Catalog::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCatalog {
    items: Vec<Item>,
    capacity: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCatalog> for Catalog {
    type Error = KnapsackError;

    fn try_from(raw: RawCatalog) -> Result<Self> {
        Self::new(raw.items, raw.capacity)
    }
}

impl FromStr for Catalog {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn is_non_negative(x: f64) -> bool {
    x.is_finite() && x >= 0.0
}

fn parse_pair(line_no: usize, line: &str) -> Result<(&str, &str)> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(a), Some(b), None) => Ok((a, b)),
        _ => Err(KnapsackError::malformed(
            line_no,
            format!("expected two fields, got `{line}`"),
        )),
    }
}

fn parse_number(line_no: usize, field: &str) -> Result<f64> {
    let x: f64 = field
        .parse()
        .map_err(|_| KnapsackError::malformed(line_no, format!("invalid number `{field}`")))?;
    if !is_non_negative(x) {
        return Err(KnapsackError::malformed(
            line_no,
            format!("expected a non-negative number, got `{field}`"),
        ));
    }
    Ok(x)
}
