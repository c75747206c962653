//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! .po (Portable Object) file reader
//!
//! Only what searching needs is kept from each entry: the strings, the
//! flags, the reference comments and the line the `msgid` keyword sits on.
//!
//! Recognized syntax:
//! - `#` comments; `#,` flags and `#:` references are kept, others skipped
//! - `#~` obsolete entries, parsed like live ones and flagged
//! - `msgctxt`, `msgid`, `msgid_plural`, `msgstr`, `msgstr[N]`
//! - continuation strings on the following lines
//!
//! Anything else is a syntax error: the file is not a translation file.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// A single message entry from a .po file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoEntry {
    /// 1-based line of the `msgid` keyword
    pub line: usize,
    /// Reference comments (#: file:line)
    pub references: Vec<String>,
    /// Flags (#, fuzzy, c-format)
    pub flags: Vec<String>,
    pub msgctxt: Option<String>,
    pub msgid: String,
    pub msgid_plural: Option<String>,
    /// One element for singular entries, one per plural form otherwise
    pub msgstr: Vec<String>,
    pub is_obsolete: bool,
}

impl PoEntry {
    /// Check if this is the header entry (empty msgid)
    pub fn is_header(&self) -> bool {
        self.msgid.is_empty() && self.msgctxt.is_none() && !self.is_obsolete
    }

    pub fn is_plural(&self) -> bool {
        self.msgid_plural.is_some()
    }

    pub fn is_fuzzy(&self) -> bool {
        self.flags.iter().any(|flag| flag == "fuzzy")
    }

    /// The translated text: `msgstr`, or `msgstr[0]` for plural entries.
    pub fn translation(&self) -> &str {
        self.msgstr.first().map_or("", String::as_str)
    }
}

/// Parsed .po file
#[derive(Debug, Clone, Default)]
pub struct PoFile {
    /// Header entry (msgid = "")
    pub header: Option<PoEntry>,
    /// Message entries, obsolete ones included
    pub entries: Vec<PoEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum PoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {0}: {1}")]
    Syntax(usize, String),

    #[error("line {0}: unterminated string")]
    UnterminatedString(usize),
}

/// A physical line with the obsolete marker already stripped.
#[derive(Debug)]
struct Line {
    number: usize,
    text: String,
    obsolete: bool,
}

/// Parser for .po files
pub struct PoParser<R> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
    peeked: Option<Line>,
}

impl<R: Read> PoParser<R> {
    pub fn new(reader: R) -> Self {
        PoParser {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::new(),
            peeked: None,
        }
    }

    pub fn parse(&mut self) -> Result<PoFile, PoError> {
        let mut po_file = PoFile::default();

        while let Some(entry) = self.parse_entry()? {
            if entry.is_header() && po_file.header.is_none() && po_file.entries.is_empty() {
                po_file.header = Some(entry);
            } else {
                po_file.entries.push(entry);
            }
        }

        Ok(po_file)
    }

    fn next_line(&mut self) -> Result<Option<Line>, PoError> {
        if let Some(line) = self.peeked.take() {
            return Ok(Some(line));
        }

        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let raw = self.buffer.trim();
        let (text, obsolete) = match raw.strip_prefix("#~") {
            // "#~|" is the previous msgid of an obsolete entry: a comment
            Some(rest) if !rest.starts_with('|') => (rest.trim_start(), true),
            _ => (raw, false),
        };

        Ok(Some(Line {
            number: self.line_number,
            text: text.to_string(),
            obsolete,
        }))
    }

    fn peek_line(&mut self) -> Result<Option<&Line>, PoError> {
        if self.peeked.is_none() {
            self.peeked = self.next_line()?;
        }
        Ok(self.peeked.as_ref())
    }

    fn unread_line(&mut self, line: Line) {
        self.peeked = Some(line);
    }

    fn parse_entry(&mut self) -> Result<Option<PoEntry>, PoError> {
        let mut entry = PoEntry::default();

        // Leading blank lines and comments
        loop {
            let line = match self.next_line()? {
                Some(line) => line,
                None => return Ok(None),
            };

            if line.text.is_empty() {
                continue;
            }

            if let Some(rest) = line.text.strip_prefix('#') {
                parse_comment(&mut entry, rest);
            } else if keyword_rest(&line.text, "msgctxt").is_some()
                || keyword_rest(&line.text, "msgid").is_some()
            {
                self.unread_line(line);
                break;
            } else {
                return Err(PoError::Syntax(
                    line.number,
                    format!("unexpected content: {}", line.text),
                ));
            }
        }

        let mut msgid_seen = false;

        while let Some(line) = self.next_line()? {
            if line.text.is_empty() {
                break;
            }

            // A comment or a second msgctxt/msgid starts the next entry
            if line.text.starts_with('#')
                || (msgid_seen && keyword_rest(&line.text, "msgctxt").is_some())
                || (msgid_seen && keyword_rest(&line.text, "msgid").is_some())
            {
                self.unread_line(line);
                break;
            }

            entry.is_obsolete |= line.obsolete;

            if let Some(rest) = keyword_rest(&line.text, "msgctxt") {
                entry.msgctxt = Some(self.parse_string_value(rest, line.number)?);
            } else if let Some(rest) = keyword_rest(&line.text, "msgid_plural") {
                entry.msgid_plural = Some(self.parse_string_value(rest, line.number)?);
            } else if let Some(rest) = keyword_rest(&line.text, "msgid") {
                entry.line = line.number;
                entry.msgid = self.parse_string_value(rest, line.number)?;
                msgid_seen = true;
            } else if let Some(rest) = line.text.strip_prefix("msgstr[") {
                let (index, value) = rest.split_once(']').ok_or_else(|| {
                    PoError::Syntax(line.number, "unterminated msgstr index".to_string())
                })?;
                let index: usize = index.trim().parse().map_err(|_| {
                    PoError::Syntax(line.number, "invalid msgstr index".to_string())
                })?;
                let value = self.parse_string_value(value, line.number)?;

                if entry.msgstr.len() <= index {
                    entry.msgstr.resize(index + 1, String::new());
                }
                entry.msgstr[index] = value;
            } else if let Some(rest) = keyword_rest(&line.text, "msgstr") {
                entry.msgstr = vec![self.parse_string_value(rest, line.number)?];
            } else {
                return Err(PoError::Syntax(
                    line.number,
                    format!("unexpected content: {}", line.text),
                ));
            }
        }

        if !msgid_seen {
            return Err(PoError::Syntax(
                self.line_number,
                "entry without msgid".to_string(),
            ));
        }

        if entry.msgstr.is_empty() {
            entry.msgstr.push(String::new());
        }

        Ok(Some(entry))
    }

    /// Parse the quoted value after a keyword plus its continuation lines
    fn parse_string_value(&mut self, rest: &str, line_number: usize) -> Result<String, PoError> {
        let mut result = parse_quoted_string(rest, line_number)?;

        loop {
            match self.peek_line()? {
                Some(line) if line.text.starts_with('"') => {}
                _ => break,
            }
            if let Some(line) = self.next_line()? {
                result.push_str(&parse_quoted_string(&line.text, line.number)?);
            }
        }

        Ok(result)
    }
}

impl PoFile {
    /// Parse a .po file from a string
    pub fn parse(s: &str) -> Result<Self, PoError> {
        PoParser::new(s.as_bytes()).parse()
    }

    pub fn parse_from<R: Read>(reader: R) -> Result<Self, PoError> {
        PoParser::new(reader).parse()
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PoError> {
        Self::parse_from(File::open(path)?)
    }
}

/// Text after `keyword` when the line really starts with that keyword,
/// so that `msgid` does not match `msgid_plural`.
fn keyword_rest<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    if rest.starts_with(|c: char| c.is_whitespace() || c == '"') {
        Some(rest)
    } else {
        None
    }
}

fn parse_comment(entry: &mut PoEntry, rest: &str) {
    if let Some(content) = rest.strip_prefix(':') {
        entry.references.push(content.trim().to_string());
    } else if let Some(content) = rest.strip_prefix(',') {
        entry.flags.extend(
            content
                .split(',')
                .map(str::trim)
                .filter(|flag| !flag.is_empty())
                .map(str::to_string),
        );
    }
}

/// Parse a quoted string (including escape sequences)
fn parse_quoted_string(s: &str, line_number: usize) -> Result<String, PoError> {
    let s = s.trim();
    let Some(s) = s.strip_prefix('"') else {
        return Err(PoError::Syntax(
            line_number,
            "expected quoted string".to_string(),
        ));
    };

    let mut result = String::new();
    let mut chars = s.chars();

    loop {
        match chars.next() {
            None => return Err(PoError::UnterminatedString(line_number)),
            Some('"') => break,
            Some('\\') => match chars.next() {
                None => return Err(PoError::UnterminatedString(line_number)),
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some('r') => result.push('\r'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some('0') => result.push('\0'),
                Some(c) => {
                    // Unknown escape - keep as-is
                    result.push('\\');
                    result.push(c);
                }
            },
            Some(c) => result.push(c),
        }
    }

    Ok(result)
}
