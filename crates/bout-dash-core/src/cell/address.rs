//! Cell address and range types

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "L6")
///
/// Column letters are base-26 (A-XFD) and row numbers are 1-based in A1 notation.
/// Both are stored 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., XFD=16383)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address from 0-based indices
    pub const fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Decode a cell address from A1-style notation
    ///
    /// Surrounding whitespace is ignored and column letters are case-insensitive.
    ///
    /// # Examples
    /// ```
    /// use bout_dash_core::CellAddress;
    ///
    /// let addr = CellAddress::decode("L6").unwrap();
    /// assert_eq!(addr.row, 5);
    /// assert_eq!(addr.col, 11);
    ///
    /// let addr = CellAddress::decode(" aa1 ").unwrap();
    /// assert_eq!(addr.row, 0);
    /// assert_eq!(addr.col, 26);
    /// ```
    pub fn decode(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (letters, digits) = s.split_at(split);

        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let col = Self::letters_to_column(letters)?;

        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        // Row 0 would decode to a negative index
        if row == 0 || row > MAX_ROWS {
            return Err(Error::InvalidAddress(format!(
                "row number must be in 1..={} in '{}'",
                MAX_ROWS, s
            )));
        }

        Ok(Self { row: row - 1, col })
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: u16) -> String {
        let mut result = String::new();
        let mut n = col as u32 + 1;

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
    pub fn letters_to_column(letters: &str) -> Result<u16> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
            if col > MAX_COLS as u32 {
                return Err(Error::InvalidAddress(format!(
                    "column '{}' is past {}",
                    letters,
                    Self::column_to_letters(MAX_COLS - 1)
                )));
            }
        }

        Ok((col - 1) as u16)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.col), self.row + 1)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

/// A pair of corner addresses (e.g., "C1:L1")
///
/// Corners are kept in the order they were written. [`RangeSpec::top_left`] and
/// [`RangeSpec::bottom_right`] give the normalized rectangle, so `"L1:C1"` and
/// `"C1:L1"` cover the same cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeSpec {
    /// First corner as written
    pub first: CellAddress,
    /// Second corner as written
    pub second: CellAddress,
}

impl RangeSpec {
    /// Create a range from two corners in any order
    pub fn new(first: CellAddress, second: CellAddress) -> Self {
        Self { first, second }
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self {
            first: addr,
            second: addr,
        }
    }

    /// Parse a range from `X:Y` notation; a lone address is a one-cell range
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        match s.split_once(':') {
            Some((a, b)) => {
                if b.contains(':') {
                    return Err(Error::InvalidRange(s.to_string()));
                }
                Ok(Self::new(CellAddress::decode(a)?, CellAddress::decode(b)?))
            }
            None => Ok(Self::single(CellAddress::decode(s)?)),
        }
    }

    /// Top-left corner of the covered rectangle
    pub fn top_left(&self) -> CellAddress {
        CellAddress::new(
            self.first.row.min(self.second.row),
            self.first.col.min(self.second.col),
        )
    }

    /// Bottom-right corner of the covered rectangle
    pub fn bottom_right(&self) -> CellAddress {
        CellAddress::new(
            self.first.row.max(self.second.row),
            self.first.col.max(self.second.col),
        )
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> usize {
        (self.bottom_right().row - self.top_left().row) as usize + 1
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> usize {
        (self.bottom_right().col - self.top_left().col) as usize + 1
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        let (start, end) = (self.top_left(), self.bottom_right());
        addr.row >= start.row && addr.row <= end.row && addr.col >= start.col && addr.col <= end.col
    }

    /// Format as normalized `A1:B10` string
    pub fn to_a1_string(&self) -> String {
        let (start, end) = (self.top_left(), self.bottom_right());
        if start == end {
            start.to_a1_string()
        } else {
            format!("{}:{}", start, end)
        }
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for RangeSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
