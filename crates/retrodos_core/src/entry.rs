/*
    retrodos
    https://github.com/retrodos/retrodos

    Copyright 2024-2025 The retrodos developers

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------

    core::entry.rs

    Parser for edit.conf override files.

*/

//! An override file is a version marker line followed by `section|item|value` lines:
//!
//! ```text
//! ver.22.03.14
//! 8|0|dynamic
//! 7|3|64
//! 20|0|800x16
//! ```
//!
//! The format is tolerant: anything that isn't a version marker or a well-formed data line is
//! skipped without complaint.

use crate::schema::SchemaVersion;

pub const VERSION_PREFIX: &str = "ver.";
pub const FIELD_DELIMITER: char = '|';

/// One `section|item|value` line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverrideEntry {
    pub section: u32,
    pub item:    u32,
    pub value:   String,
}

impl OverrideEntry {
    pub fn new(section: u32, item: u32, value: impl Into<String>) -> Self {
        Self {
            section,
            item,
            value: value.into(),
        }
    }
}

/// The result of parsing an override file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedOverride {
    /// The `YYMMDD` version number, or 0 if the marker was missing or malformed.
    pub version: u32,
    pub entries: Vec<OverrideEntry>,
}

impl ParsedOverride {
    pub fn schema_version(&self) -> SchemaVersion {
        SchemaVersion::from_version_number(self.version)
    }
}

/// Parse a version marker of the form `ver.YY.MM.DD` into `YYMMDD`. Anything unparseable is 0.
pub fn parse_version(line: &str) -> u32 {
    let line = line.trim();
    let Some(digits) = line.strip_prefix(VERSION_PREFIX) else {
        return 0;
    };

    digits.replace('.', "").parse::<u32>().unwrap_or(0)
}

/// Parse a single data line. Returns `None` for anything that isn't a valid entry.
pub fn parse_entry(line: &str) -> Option<OverrideEntry> {
    let mut parts = line.splitn(3, FIELD_DELIMITER);

    let section = parts.next()?.trim().parse::<u32>().ok()?;
    let item = parts.next()?.trim().parse::<u32>().ok()?;
    // splitn keeps any further delimiters inside the value.
    let value = parts.next()?;

    Some(OverrideEntry::new(section, item, value))
}

/// Parse the full text of an override file.
pub fn parse(text: &str) -> ParsedOverride {
    let mut parsed = ParsedOverride::default();

    for raw_line in text.lines() {
        let line = raw_line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        if line.trim_start().starts_with(VERSION_PREFIX) {
            parsed.version = parse_version(line);
            continue;
        }
        match parse_entry(line) {
            Some(entry) => parsed.entries.push(entry),
            None => log::trace!("parse(): skipping line: {:?}", line),
        }
    }

    parsed
}
