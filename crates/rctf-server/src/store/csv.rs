use super::*;

use std::{iter::Peekable, str::Chars};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CsvError {
    #[error("CSV has no header line")]
    MissingHeader,
    #[error("Line {line} has {found} fields, expected {expected}")]
    RowWidth {
        line: usize,
        found: usize,
        expected: usize,
    },
    #[error("Quoted field starting on line {line} is never closed")]
    UnterminatedQuote { line: usize },
    #[error("Unexpected `\"` on line {line}")]
    StrayQuote { line: usize },
}

/// A flat CSV file: a header line naming the columns and rows of text.
///
/// Fields may be wrapped in double quotes, which lets them hold commas,
/// line breaks and `""` for a literal quote. Empty lines are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, CsvError> {
        let mut records = records(text)?.into_iter();

        let (_, columns) = records.next().ok_or(CsvError::MissingHeader)?;

        let rows = records
            .map(|(line, row)| {
                if row.len() != columns.len() {
                    return Err(CsvError::RowWidth {
                        line,
                        found: row.len(),
                        expected: columns.len(),
                    });
                }
                Ok(row)
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            name: name.into(),
            columns,
            rows,
        })
    }

    pub(super) fn create_statement(&self) -> String {
        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|column| format!("{} TEXT", quote_identifier(column)))
            .collect();
        format!(
            "CREATE TABLE {} ({})",
            quote_identifier(&self.name),
            columns.join(", ")
        )
    }

    pub(super) fn insert_statement(&self) -> String {
        let placeholders = vec!["?"; self.columns.len()];
        format!(
            "INSERT INTO {} VALUES ({})",
            quote_identifier(&self.name),
            placeholders.join(", ")
        )
    }
}

/// Splits the text into records, each paired with the line it starts on.
fn records(text: &str) -> Result<Vec<(usize, Vec<String>)>, CsvError> {
    let mut reader = Reader {
        chars: text.chars().peekable(),
        line: 1,
    };
    let mut records = Vec::new();
    while reader.chars.peek().is_some() {
        let start = reader.line;
        let (record, blank) = reader.record()?;
        if !blank {
            records.push((start, record));
        }
    }
    Ok(records)
}

struct Reader<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl Reader<'_> {
    /// Reads one record up to and including its line break. Also tells
    /// whether the line was blank.
    fn record(&mut self) -> Result<(Vec<String>, bool), CsvError> {
        let mut record = Vec::new();
        let mut quoted = false;
        loop {
            let field = if self.chars.peek() == Some(&'"') {
                quoted = true;
                self.quoted_field()?
            } else {
                self.plain_field()?
            };
            record.push(field);

            match self.chars.next() {
                Some(',') => continue,
                Some('\r') => {
                    self.chars.next_if_eq(&'\n');
                    self.line += 1;
                }
                Some('\n') => self.line += 1,
                _ => {}
            }
            break;
        }

        let blank = !quoted && record.len() == 1 && record[0].trim().is_empty();
        Ok((record, blank))
    }

    fn plain_field(&mut self) -> Result<String, CsvError> {
        let mut field = String::new();
        while let Some(c) = self.chars.next_if(|&c| !matches!(c, ',' | '\r' | '\n')) {
            if c == '"' {
                return Err(CsvError::StrayQuote { line: self.line });
            }
            field.push(c);
        }
        Ok(field)
    }

    fn quoted_field(&mut self) -> Result<String, CsvError> {
        let start = self.line;
        self.chars.next();

        let mut field = String::new();
        loop {
            match self.chars.next() {
                Some('"') if self.chars.next_if_eq(&'"').is_some() => field.push('"'),
                Some('"') => break,
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    field.push(c);
                }
                None => return Err(CsvError::UnterminatedQuote { line: start }),
            }
        }

        match self.chars.peek() {
            None | Some(',' | '\r' | '\n') => Ok(field),
            Some(_) => Err(CsvError::StrayQuote { line: self.line }),
        }
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
