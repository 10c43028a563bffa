/// Delimited-text options for dataset ingestion.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: char,
    pub quote: char,
    /// Discard the first line.
    pub header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            header: true,
        }
    }
}

/// Split one line into trimmed fields.
///
/// Each quote character flips an in-quotes flag and is dropped; delimiters
/// inside quotes are kept as text. An unclosed quote swallows the rest of the
/// line into the current field. There is no escape sequence for the quote.
pub fn parse_csv_line(line: &str, opts: &CsvOptions) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        if c == opts.quote {
            in_quotes = !in_quotes;
        } else if c == opts.delimiter && !in_quotes {
            fields.push(field.trim().to_string());
            field.clear();
        } else {
            field.push(c);
        }
    }
    fields.push(field.trim().to_string());

    fields
}
