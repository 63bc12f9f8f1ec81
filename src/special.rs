//! Special phrases.
//!
//! A special phrase maps a literal ASCII command to one or more expansion
//! strings, so typing `aazhi` can offer `AA制` next to the ordinary
//! conversion. The table is read from `phrases.txt` in the user's config
//! directory, falling back to the packaged copy. One command may carry
//! several values; lookups return them in file order.
//!
//! A value starting with `#` is a template expanded at lookup time with
//! the current wall clock:
//!
//! | token | expansion |
//! |-------|-----------|
//! | `%year`, `%year_yy` | year in Chinese digits, full or two-digit |
//! | `%month`, `%day`, `%weekday` | date fields in Chinese numerals |
//! | `%fullhour`, `%halfhour` | 24-hour and 12-hour hour |
//! | `%hour`, `%minute`, `%second` | time fields in Chinese numerals |
//! | `%{name}` | named variable, empty when unknown |
//! | `%%` | a literal `%` |

use std::path::Path;

use chrono::{DateTime, Datelike, Local, Timelike};
use indexmap::IndexMap;
use tracing::warn;

/// The packaged default table.
const DEFAULT_PHRASES: &str = include_str!("../data/phrases.txt");

#[derive(Clone, Debug, PartialEq)]
enum SpecialPhrase {
    Static(String),
    Dynamic(String),
}

impl SpecialPhrase {
    fn expand(&self, now: &DateTime<Local>) -> String {
        match self {
            SpecialPhrase::Static(text) => text.clone(),
            SpecialPhrase::Dynamic(template) => expand_template(template, now),
        }
    }
}

#[derive(Debug, Default)]
pub struct SpecialPhraseTable {
    map: IndexMap<String, Vec<SpecialPhrase>>,
}

impl SpecialPhraseTable {
    /// Loads `phrases.txt` from `config_dir`, then the packaged copy.
    pub fn load(config_dir: &Path) -> SpecialPhraseTable {
        let user_path = config_dir.join("phrases.txt");
        match std::fs::read_to_string(&user_path) {
            Ok(source) => SpecialPhraseTable::parse(&source),
            Err(err) => {
                if user_path.exists() {
                    warn!(
                        "cannot read {}: {err}; using packaged special phrases",
                        user_path.display()
                    );
                }
                SpecialPhraseTable::parse(DEFAULT_PHRASES)
            }
        }
    }

    /// Parses the `command=value` format; `;` starts a comment line.
    pub fn parse(source: &str) -> SpecialPhraseTable {
        let mut table = SpecialPhraseTable::default();
        for line in source.lines() {
            if line.is_empty() || line.starts_with(';') {
                continue;
            }
            let Some((command, value)) = line.split_once('=') else {
                continue;
            };
            if command.is_empty() || value.is_empty() {
                continue;
            }
            let phrase = match value.strip_prefix('#') {
                Some(template) if !template.is_empty() => {
                    SpecialPhrase::Dynamic(template.to_string())
                }
                Some(_) => continue,
                None => SpecialPhrase::Static(value.to_string()),
            };
            table
                .map
                .entry(command.to_string())
                .or_default()
                .push(phrase);
        }
        table
    }

    /// Expands every value registered for `command`, in insertion order.
    /// Returns true if any was found.
    pub fn lookup(&self, command: &str, result: &mut Vec<String>) -> bool {
        result.clear();
        if let Some(phrases) = self.map.get(command) {
            let now = Local::now();
            result.extend(phrases.iter().map(|phrase| phrase.expand(&now)));
        }
        !result.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn expand_template(template: &str, now: &DateTime<Local>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 1..];
        if let Some(stripped) = rest.strip_prefix('%') {
            out.push('%');
            rest = stripped;
            continue;
        }
        if let Some(after) = rest.strip_prefix('{') {
            match after.split_once('}') {
                Some((name, tail)) => {
                    out.push_str(&variable(name));
                    rest = tail;
                }
                None => {
                    out.push('%');
                }
            }
            continue;
        }
        // Longest keyword first, so %year_yy is not read as %year.
        const KEYWORDS: &[&str] = &[
            "year_yy", "year", "month", "day", "weekday", "fullhour", "halfhour", "hour",
            "minute", "second",
        ];
        match KEYWORDS.iter().find(|kw| rest.starts_with(**kw)) {
            Some(keyword) => {
                out.push_str(&keyword_value(keyword, now));
                rest = &rest[keyword.len()..];
            }
            None => out.push('%'),
        }
    }
    out.push_str(rest);
    out
}

fn keyword_value(keyword: &str, now: &DateTime<Local>) -> String {
    match keyword {
        "year" => year_cn(now.year(), false),
        "year_yy" => year_cn(now.year(), true),
        "month" => number_cn(now.month()),
        "day" => number_cn(now.day()),
        "weekday" => weekday_cn(now.weekday().num_days_from_sunday()),
        "fullhour" | "hour" => number_cn(now.hour()),
        "halfhour" => number_cn(match now.hour() % 12 {
            0 => 12,
            hour => hour,
        }),
        "minute" => two_digits_cn(now.minute()),
        "second" => two_digits_cn(now.second()),
        _ => String::new(),
    }
}

/// Named variables are reserved for host extensions; unknown names expand
/// to nothing.
fn variable(name: &str) -> String {
    warn!("unknown special phrase variable %{{{name}}}");
    String::new()
}

const DIGITS_CN: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];
const WEEKDAYS_CN: [char; 7] = ['日', '一', '二', '三', '四', '五', '六'];

fn digit_cn(digit: u32) -> char {
    DIGITS_CN[digit as usize % 10]
}

/// Digit-wise year: 2026 → 二〇二六.
fn year_cn(year: i32, two_digit: bool) -> String {
    let year = year.unsigned_abs();
    let digits: Vec<u32> = if two_digit {
        vec![year / 10 % 10, year % 10]
    } else {
        let mut digits = Vec::new();
        let mut rest = year;
        loop {
            digits.insert(0, rest % 10);
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        digits
    };
    digits.into_iter().map(digit_cn).collect()
}

/// Compositional numeral for 0..=99: 21 → 二十一, 10 → 十.
fn number_cn(value: u32) -> String {
    let mut out = String::new();
    match value {
        0..=9 => out.push(digit_cn(value)),
        10..=19 => {
            out.push('十');
            if value % 10 != 0 {
                out.push(digit_cn(value % 10));
            }
        }
        _ => {
            out.push(digit_cn(value / 10 % 10));
            out.push('十');
            if value % 10 != 0 {
                out.push(digit_cn(value % 10));
            }
        }
    }
    out
}

/// Zero-padded pair for minutes and seconds: 5 → 〇五, 30 → 三十.
fn two_digits_cn(value: u32) -> String {
    if value < 10 {
        let mut out = String::from('〇');
        out.push(digit_cn(value));
        out
    } else {
        number_cn(value)
    }
}

fn weekday_cn(days_from_sunday: u32) -> String {
    WEEKDAYS_CN[days_from_sunday as usize % 7].to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::{expand_template, number_cn, year_cn, SpecialPhraseTable};

    #[test]
    fn parses_commands_and_comments() {
        let table = SpecialPhraseTable::parse(
            "; comment\naazhi=AA制\naazhi=AA 制\nbad line\nempty=\nrq=#%year年\n",
        );
        let mut result = Vec::new();
        assert!(table.lookup("aazhi", &mut result));
        assert_eq!(vec!["AA制", "AA 制"], result);
        assert!(!table.lookup("empty", &mut result));
        assert!(!table.lookup("missing", &mut result));
        assert!(table.lookup("rq", &mut result));
        assert!(result[0].ends_with('年'));
    }

    #[test]
    fn packaged_default_is_loadable() {
        let table = SpecialPhraseTable::parse(super::DEFAULT_PHRASES);
        assert!(!table.is_empty());
        let mut result = Vec::new();
        assert!(table.lookup("aazhi", &mut result));
        assert_eq!("AA制", result[0]);
    }

    #[test]
    fn templates_expand_date_fields() {
        let now = Local.with_ymd_and_hms(2026, 8, 1, 14, 5, 30).unwrap();
        assert_eq!("二〇二六年八月一日", expand_template("%year年%month月%day日", &now));
        assert_eq!("二六", expand_template("%year_yy", &now));
        assert_eq!("十四时〇五分三十秒", expand_template("%fullhour时%minute分%second秒", &now));
        assert_eq!("二", expand_template("%halfhour", &now));
        assert_eq!("星期六", expand_template("星期%weekday", &now));
    }

    #[test]
    fn templates_handle_escapes_and_unknowns() {
        let now = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!("100%", expand_template("100%%", &now));
        assert_eq!("a%zb", expand_template("a%zb", &now));
        assert_eq!("xy", expand_template("x%{nothing}y", &now));
        assert_eq!("%{oops", expand_template("%{oops", &now));
    }

    #[test]
    fn chinese_numerals() {
        assert_eq!("〇", number_cn(0));
        assert_eq!("十", number_cn(10));
        assert_eq!("十二", number_cn(12));
        assert_eq!("二十", number_cn(20));
        assert_eq!("三十一", number_cn(31));
        assert_eq!("一九九九", year_cn(1999, false));
        assert_eq!("九九", year_cn(1999, true));
    }
}
