// src/csv.rs
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// A parsed CSV file: first row is the header, the rest are records.
/// Records may be shorter or longer than the header (relaxed column count).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
    /// Records dropped because they could not be parsed
    pub skipped: usize,
}

impl Table {
    /// Index of the first alias (in order) that matches a header, case-insensitively.
    pub fn column(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|alias| {
            self.headers.iter().position(|h| h.eq_ignore_ascii_case(alias))
        })
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

/// Cell lookup that tolerates short records and unresolved columns.
pub fn cell(record: &[String], col: Option<usize>) -> &str {
    col.and_then(|i| record.get(i)).map(String::as_str).unwrap_or("")
}

/// Parse CSV text with a header row.
///
/// Tolerances:
/// - UTF-8 BOM and blank lines are ignored
/// - a `"` inside an unquoted field is kept literally
/// - records with a stray character after a closing quote, or an
///   unterminated quoted field at EOF, are skipped (only that record)
/// - column count is not enforced
pub fn parse_table(text: &str, sep: char) -> Table {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = parse_records(text, sep).into_iter();

    let mut skipped = 0;
    let headers = loop {
        match rows.next() {
            Some(Ok(h)) => break h.into_iter().map(|s| s.trim().to_string()).collect(),
            Some(Err(())) => skipped += 1,
            None => return Table { skipped, ..Table::default() },
        }
    };

    let mut records = Vec::new();
    for r in rows {
        match r {
            Ok(rec) => records.push(rec),
            Err(()) => skipped += 1,
        }
    }

    Table { headers, records, skipped }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    /// At the start of a field
    FieldStart,
    /// Inside an unquoted field
    Unquoted,
    /// Inside a quoted field
    Quoted,
    /// Just saw a quote while in a quoted field (escape or close)
    QuoteInQuoted,
    /// Record is broken; discard everything up to the next line break
    Broken,
}

/// Split into records. `Err(())` marks a record that failed to parse.
fn parse_records(text: &str, sep: char) -> Vec<Result<Vec<String>, ()>> {
    let mut out = Vec::new();
    let mut field = s!();
    let mut row: Vec<String> = Vec::new();
    let mut state = State::FieldStart;
    let mut chars = text.chars().peekable();

    let end_row = |row: &mut Vec<String>, out: &mut Vec<Result<Vec<String>, ()>>| {
        // blank line → nothing
        if !(row.len() == 1 && row[0].is_empty()) {
            out.push(Ok(take(row)));
        } else {
            row.clear();
        }
    };

    while let Some(ch) = chars.next() {
        let newline = ch == '\n' || ch == '\r';
        if newline && ch == '\r' && state != State::Quoted && matches!(chars.peek(), Some('\n')) {
            chars.next();
        }

        match state {
            State::Broken => {
                if newline {
                    out.push(Err(()));
                    field.clear();
                    row.clear();
                    state = State::FieldStart;
                }
            }
            State::FieldStart | State::Unquoted => {
                if ch == '"' && state == State::FieldStart {
                    state = State::Quoted;
                } else if ch == sep {
                    row.push(take(&mut field));
                    state = State::FieldStart;
                } else if newline {
                    row.push(take(&mut field));
                    end_row(&mut row, &mut out);
                    state = State::FieldStart;
                } else {
                    field.push(ch);
                    state = State::Unquoted;
                }
            }
            State::Quoted => {
                if ch == '"' {
                    state = State::QuoteInQuoted;
                } else {
                    field.push(ch);
                }
            }
            State::QuoteInQuoted => {
                if ch == '"' {
                    field.push('"'); // double-quote escape
                    state = State::Quoted;
                } else if ch == sep {
                    row.push(take(&mut field));
                    state = State::FieldStart;
                } else if newline {
                    row.push(take(&mut field));
                    end_row(&mut row, &mut out);
                    state = State::FieldStart;
                } else {
                    state = State::Broken;
                }
            }
        }
    }

    // Flush trailing record (no final newline)
    match state {
        State::Quoted | State::Broken => out.push(Err(())),
        _ => {
            if !field.is_empty() || !row.is_empty() {
                row.push(field);
                end_row(&mut row, &mut out);
            }
        }
    }

    out
}
