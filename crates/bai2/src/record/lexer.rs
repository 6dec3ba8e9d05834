//! Разбиение входного буфера на физические записи.

use super::Record;
use crate::options::ParseOptions;

/// Разбивает `data` на [`Record`], по одной на физическую строку.
///
/// Возвраты каретки и хвостовые пробелы отбрасываются, пустые строки в конце
/// буфера удаляются, а каждая строка очищается от разделителей согласно
/// `options`. Продолжения возвращаются отдельными записями, см.
/// [`merge_continuations`](super::merge_continuations).
pub fn lex(data: &str, options: &ParseOptions) -> Vec<Record> {
    let mut lines: Vec<&str> = data.lines().map(str::trim_end).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| Record::new(clean_delimiters(line, options).to_string(), idx + 1))
        .collect()
}

/// Убирает из строки разделитель конца записи BAI2.
///
/// По умолчанию строка обрывается на `/` первого маркера `,/`, а одиночный
/// `/` в конце удаляется. С опцией
/// [`continuations_slash_delimit_end_of_line_only`](ParseOptions::continuations_slash_delimit_end_of_line_only)
/// удаляется только `/` в конце, и текст может содержать `,/`.
///
/// ```
/// use bai2::{ParseOptions, record::clean_delimiters};
///
/// let default = ParseOptions::default();
/// assert_eq!(clean_delimiters("49,100,3/", &default), "49,100,3");
/// assert_eq!(clean_delimiters("03,123,USD,/ padding", &default), "03,123,USD,");
///
/// let eol = ParseOptions { continuations_slash_delimit_end_of_line_only: true, ..default };
/// assert_eq!(clean_delimiters("88,/REF 1/2", &eol), "88,/REF 1/2");
/// ```
pub fn clean_delimiters<'a>(line: &'a str, options: &ParseOptions) -> &'a str {
    let line = line.trim_end();
    let line = if options.continuations_slash_delimit_end_of_line_only {
        line
    } else {
        match line.find(",/") {
            Some(pos) => &line[..=pos],
            None => line,
        }
    };
    line.strip_suffix('/').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordCode;

    const EOL_ONLY: ParseOptions = ParseOptions {
        account_control_ignores_summary_amounts: false,
        continuations_slash_delimit_end_of_line_only: true,
    };

    #[test]
    fn lex_tolerates_crlf_and_trailing_blank_lines() {
        let data = "01,A,B,150401,0900,1,,,2/\r\n99,0,0,2/\r\n\r\n\n";
        let records = lex(data, &ParseOptions::default());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code(), RecordCode::FileHeader);
        assert_eq!(records[0].raw(), "01,A,B,150401,0900,1,,,2");
        assert_eq!(records[1].raw(), "99,0,0,2");
        assert_eq!(records[1].line(), 2);
    }

    #[test]
    fn lex_keeps_blank_lines_in_the_middle() {
        let records = lex("01,A/\n\n99,0/\n", &ParseOptions::default());
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].code(), RecordCode::Unrecognized);
    }

    #[test]
    fn lex_empty_buffer() {
        assert!(lex("", &ParseOptions::default()).is_empty());
        assert!(lex("\n\n", &ParseOptions::default()).is_empty());
    }

    #[test]
    fn default_cleanup_stops_at_filler_marker() {
        let opts = ParseOptions::default();
        assert_eq!(clean_delimiters("03,1,USD,010,500,,/", &opts), "03,1,USD,010,500,,");
        assert_eq!(clean_delimiters("16,174,1,0,R,C,/  junk", &opts), "16,174,1,0,R,C,");
        assert_eq!(clean_delimiters("88,/ACH CREDIT", &opts), "88,");
        assert_eq!(clean_delimiters("16,174,1,0,R,C,TEXT", &opts), "16,174,1,0,R,C,TEXT");
    }

    #[test]
    fn end_of_line_cleanup_keeps_inner_slashes() {
        assert_eq!(clean_delimiters("88,/ACH CREDIT/", &EOL_ONLY), "88,/ACH CREDIT");
        assert_eq!(clean_delimiters("03,1,USD,/", &EOL_ONLY), "03,1,USD,");
        assert_eq!(clean_delimiters("49,10,2", &EOL_ONLY), "49,10,2");
    }

    #[test]
    fn option_is_threaded_into_every_record() {
        let data = "16,174,1,0,R,C,A,/B/\n88,/C";
        let default = lex(data, &ParseOptions::default());
        let eol = lex(data, &EOL_ONLY);

        assert_eq!(default[0].raw(), "16,174,1,0,R,C,A,");
        assert_eq!(default[1].raw(), "88,");
        assert_eq!(eol[0].raw(), "16,174,1,0,R,C,A,/B");
        assert_eq!(eol[1].raw(), "88,/C");
    }
}
