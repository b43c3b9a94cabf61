//! Line-oriented employee record reader.
//!
//! Each field sits on its own line; blank lines are skipped and surrounding
//! whitespace is trimmed. A record is:
//!
//! ```text
//! <role token>
//! <last name>
//! <first name>
//! <SIN>
//! <birth month>
//! <birth day>
//! <birth year>
//! <hourly pay rate>
//! <hours worked>
//! <sales>          (commissioned roles only)
//! ```
//!
//! The stream ends at a line reading `END`.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::PayrollPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{BirthDate, Name, PersonalInfo, RawRecord};

/// The role token that terminates the input.
pub const END_SENTINEL: &str = "END";

/// Reads the whole input file into memory.
///
/// # Errors
///
/// Returns [`EngineError::InputNotFound`] when the file cannot be read.
pub fn load_input<P: AsRef<Path>>(path: P) -> EngineResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|_| EngineError::InputNotFound {
        path: path.display().to_string(),
    })
}

/// Reads every record up to the `END` sentinel.
///
/// # Errors
///
/// Stops at the first unknown role token or malformed field.
pub fn read_records(input: &str, policy: &PayrollPolicy) -> EngineResult<Vec<RawRecord>> {
    RecordReader::new(input, policy).collect()
}

/// Iterator over the raw records of an input text.
///
/// Every record is read in full, whether or not the registry will have room
/// for it, so the stream stays aligned on record boundaries. After the first
/// error the iterator is exhausted.
///
/// # Example
///
/// ```
/// use payroll_engine::config::presets;
/// use payroll_engine::input::RecordReader;
///
/// let input = "manager\nLovelace\nAda\n123456789\nDecember\n10\n1985\n50\n40\nEND\n";
/// let policy = presets::basic();
/// let records: Vec<_> = RecordReader::new(input, &policy).collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].personal.name.first, "Ada");
/// ```
#[derive(Debug)]
pub struct RecordReader<'a> {
    lines: Vec<(usize, &'a str)>,
    position: usize,
    policy: &'a PayrollPolicy,
    finished: bool,
}

impl<'a> RecordReader<'a> {
    /// Creates a reader over `input` that recognizes the roles of `policy`.
    pub fn new(input: &'a str, policy: &'a PayrollPolicy) -> Self {
        let lines = input
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();
        Self {
            lines,
            position: 0,
            policy,
            finished: false,
        }
    }

    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let line = self.lines.get(self.position).copied();
        if line.is_some() {
            self.position += 1;
        }
        line
    }

    fn last_line_number(&self) -> usize {
        self.position
            .checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(|(number, _)| *number)
            .unwrap_or(0)
    }

    fn field(&mut self, field: &str) -> EngineResult<(usize, &'a str)> {
        let after = self.last_line_number();
        self.next_line().ok_or_else(|| EngineError::MalformedRecord {
            line: after + 1,
            field: field.to_string(),
            message: "is missing; input ended mid-record".to_string(),
        })
    }

    fn number<T: FromStr>(&mut self, field: &str) -> EngineResult<T> {
        let (line, text) = self.field(field)?;
        text.parse::<T>().map_err(|_| EngineError::MalformedRecord {
            line,
            field: field.to_string(),
            message: format!("is not a number: '{}'", text),
        })
    }

    fn read_record(
        &mut self,
        start_line: usize,
        role: &str,
        commissioned: bool,
    ) -> EngineResult<RawRecord> {
        let (_, last) = self.field("last_name")?;
        let (_, first) = self.field("first_name")?;
        let (_, sin) = self.field("sin")?;
        let (month_line, month) = self.field("birth_month")?;
        let day: u32 = self.number("birth_day")?;
        let year: i32 = self.number("birth_year")?;
        let birth_date = BirthDate::new(month, day, year);
        if !birth_date.is_calendar_date() {
            warn!(
                line = month_line,
                birth_date = %birth_date,
                "Birth date is not a calendar date; kept as read"
            );
        }
        let pay_rate: Decimal = self.number("pay_rate")?;
        let hours_worked: Decimal = self.number("hours_worked")?;
        let sales = if commissioned {
            Some(self.number::<Decimal>("sales")?)
        } else {
            None
        };

        Ok(RawRecord {
            role: role.to_string(),
            personal: PersonalInfo {
                name: Name::new(first, last),
                birth_date,
                sin: sin.to_string(),
            },
            pay_rate,
            hours_worked,
            sales,
            line: start_line,
        })
    }
}

impl Iterator for RecordReader<'_> {
    type Item = EngineResult<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some((line, token)) = self.next_line() else {
            warn!("Input ended without an '{}' line", END_SENTINEL);
            self.finished = true;
            return None;
        };
        if token == END_SENTINEL {
            self.finished = true;
            return None;
        }

        let policy = self.policy;
        let Some(role) = policy.role(token) else {
            self.finished = true;
            return Some(Err(EngineError::UnknownRole {
                token: token.to_string(),
                line,
            }));
        };

        let result = self.read_record(line, &role.token, role.scheme.is_commissioned());
        if result.is_err() {
            self.finished = true;
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const BASIC_INPUT: &str = "\
manager
Lovelace
Ada
123456789
December
10
1985
50
0

salesperson
Hopper
Grace
987654321
december
9
1906
15
40
1000
END
";

    #[test]
    fn test_reads_records_until_end() {
        let policy = presets::basic();
        let records = read_records(BASIC_INPUT, &policy).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].role, "manager");
        assert_eq!(records[0].personal.name, Name::new("Ada", "Lovelace"));
        assert_eq!(records[0].personal.sin, "123456789");
        assert_eq!(records[0].pay_rate, dec("50"));
        assert_eq!(records[0].sales, None);
        assert_eq!(records[0].line, 1);

        assert_eq!(records[1].role, "salesperson");
        assert_eq!(records[1].personal.birth_date.month, "December");
        assert_eq!(records[1].sales, Some(dec("1000")));
        assert_eq!(records[1].line, 11);
    }

    #[test]
    fn test_multi_word_role_token() {
        let policy = presets::extended();
        let input = "human resource\nDoe\nJane\n555666777\nApril\n1\n1990\n25.50\n46\nEND\n";
        let records = read_records(input, &policy).unwrap();

        assert_eq!(records[0].role, "human resource");
        assert_eq!(records[0].pay_rate, dec("25.50"));
    }

    #[test]
    fn test_text_after_end_is_ignored() {
        let policy = presets::basic();
        let input = "END\nmanager\nnot a record\n";
        assert!(read_records(input, &policy).unwrap().is_empty());
    }

    #[test]
    fn test_missing_end_keeps_records_read() {
        let policy = presets::basic();
        let input = BASIC_INPUT.replace("END\n", "");
        assert_eq!(read_records(&input, &policy).unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_role_is_fatal() {
        let policy = presets::basic();
        let input = "manager\nLovelace\nAda\n123456789\nDecember\n10\n1985\n50\n0\njanitor\n";
        match read_records(input, &policy) {
            Err(EngineError::UnknownRole { token, line }) => {
                assert_eq!(token, "janitor");
                assert_eq!(line, 10);
            }
            other => panic!("Expected UnknownRole, got {:?}", other),
        }
    }

    #[test]
    fn test_extended_role_unknown_to_basic_policy() {
        let policy = presets::basic();
        let input = "accountant\nX\nY\n1\nMay\n1\n1990\n20\n40\nEND\n";
        assert!(matches!(
            read_records(input, &policy),
            Err(EngineError::UnknownRole { .. })
        ));
    }

    #[test]
    fn test_non_numeric_hours_is_malformed() {
        let policy = presets::basic();
        let input = "secretary\nX\nY\n1\nMay\n1\n1990\n20\nforty\nEND\n";
        match read_records(input, &policy) {
            Err(EngineError::MalformedRecord { line, field, message }) => {
                assert_eq!(line, 9);
                assert_eq!(field, "hours_worked");
                assert!(message.contains("forty"));
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_record_is_malformed() {
        let policy = presets::basic();
        let input = "salesperson\nX\nY\n1\nMay\n1\n1990\n20\n40\n";
        match read_records(input, &policy) {
            Err(EngineError::MalformedRecord { field, line, .. }) => {
                assert_eq!(field, "sales");
                assert_eq!(line, 10);
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognised_birth_month_is_kept() {
        let policy = presets::basic();
        let input = "manager\nLovelace\nAda\n123456789\nSmarch\n10\n1985\n50\n40\nEND\n";
        let records = read_records(input, &policy).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].personal.birth_date.to_string(), "Smarch 10, 1985");
        assert_eq!(records[0].pay_rate, dec("50"));
    }

    #[test]
    fn test_impossible_birth_day_is_kept() {
        let policy = presets::basic();
        let input = "manager\nX\nY\n1\nFebruary\n31\n1990\n20\n40\nEND\n";
        let records = read_records(input, &policy).unwrap();

        assert_eq!(records[0].personal.birth_date.to_string(), "February 31, 1990");
        assert!(!records[0].personal.birth_date.is_calendar_date());
    }

    #[test]
    fn test_non_numeric_birth_day_is_malformed() {
        let policy = presets::basic();
        let input = "manager\nX\nY\n1\nFebruary\ntenth\n1990\n20\n40\nEND\n";
        match read_records(input, &policy) {
            Err(EngineError::MalformedRecord { field, line, .. }) => {
                assert_eq!(field, "birth_day");
                assert_eq!(line, 6);
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_values_are_read_as_is() {
        let policy = presets::basic();
        let input = "salesperson\nX\nY\n1\nMay\n1\n1990\n-20\n-3\n-100\nEND\n";
        let records = read_records(input, &policy).unwrap();
        assert_eq!(records[0].pay_rate, dec("-20"));
        assert_eq!(records[0].hours_worked, dec("-3"));
        assert_eq!(records[0].sales, Some(dec("-100")));
    }

    #[test]
    fn test_load_input_missing_file() {
        match load_input("/nonexistent/employees.txt") {
            Err(EngineError::InputNotFound { path }) => assert!(path.contains("employees.txt")),
            other => panic!("Expected InputNotFound, got {:?}", other),
        }
    }
}
