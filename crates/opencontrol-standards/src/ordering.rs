//! Natural ordering for control identifiers.
//!
//! Identifiers such as `AC-2`, `AC-10` or `1.2.10` are split into maximal runs
//! of ASCII digits and maximal runs of everything else. Runs are compared
//! left to right: digit runs by numeric value, other runs by bytes, and a digit
//! run always sorts before a non-digit run at the same position.

use std::cmp::Ordering;

/// One maximal run of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Digits(&'a str),
    Text(&'a str),
}

/// Iterator over the segments of an identifier.
pub(crate) struct Segments<'a> {
    rest: &'a str,
}

pub(crate) fn segments(key: &str) -> Segments<'_> {
    Segments { rest: key }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.bytes().next()?;
        let numeric = first.is_ascii_digit();
        // ASCII digits are single bytes, so the first byte of the other kind is
        // always a char boundary.
        let end = self
            .rest
            .bytes()
            .position(|b| b.is_ascii_digit() != numeric)
            .unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(if numeric {
            Segment::Digits(head)
        } else {
            Segment::Text(head)
        })
    }
}

/// Compare two control identifiers in natural order.
///
/// Keys whose segments are all equal (only possible when digit runs differ in
/// leading zeros, e.g. `01` and `1`) fall back to byte order of the whole key,
/// so distinct keys never compare equal.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = segments(a);
    let mut right = segments(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = compare_segments(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn compare_segments(a: Segment<'_>, b: Segment<'_>) -> Ordering {
    match (a, b) {
        (Segment::Digits(x), Segment::Digits(y)) => compare_digits(x, y),
        (Segment::Digits(_), Segment::Text(_)) => Ordering::Less,
        (Segment::Text(_), Segment::Digits(_)) => Ordering::Greater,
        (Segment::Text(x), Segment::Text(y)) => x.as_bytes().cmp(y.as_bytes()),
    }
}

/// Numeric comparison of two digit runs of any length.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(key: &str) -> Vec<Segment<'_>> {
        segments(key).collect()
    }

    #[test]
    fn splits_mixed_identifiers() {
        assert_eq!(
            split("AC-12(3)"),
            vec![
                Segment::Text("AC-"),
                Segment::Digits("12"),
                Segment::Text("("),
                Segment::Digits("3"),
                Segment::Text(")"),
            ]
        );
        assert_eq!(
            split("1.10"),
            vec![
                Segment::Digits("1"),
                Segment::Text("."),
                Segment::Digits("10")
            ]
        );
        assert!(split("").is_empty());
    }

    #[test]
    fn non_ascii_digits_are_text() {
        assert_eq!(split("٣a"), vec![Segment::Text("٣a")]);
        assert_eq!(split("é1"), vec![Segment::Text("é"), Segment::Digits("1")]);
    }

    #[test]
    fn digit_runs_compare_by_value() {
        assert_eq!(natural_cmp("2", "10"), Ordering::Less);
        assert_eq!(natural_cmp("AC-9", "AC-10"), Ordering::Less);
        assert_eq!(natural_cmp("1.2.10", "1.2.9"), Ordering::Greater);
    }

    #[test]
    fn long_digit_runs_do_not_overflow() {
        let big = "123456789012345678901234567890";
        let bigger = "123456789012345678901234567891";
        assert_eq!(natural_cmp(big, bigger), Ordering::Less);
        assert_eq!(natural_cmp("99", big), Ordering::Less);
    }

    #[test]
    fn digits_sort_before_text() {
        assert_eq!(natural_cmp("1", "b"), Ordering::Less);
        assert_eq!(natural_cmp("AB-2", "1.1.1"), Ordering::Greater);
        assert_eq!(natural_cmp("AB-2", "AC-1"), Ordering::Less);
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        assert_eq!(natural_cmp("AC-1", "AC-1(1)"), Ordering::Less);
        assert_eq!(natural_cmp("1.1", "1.1.1"), Ordering::Less);
    }

    #[test]
    fn text_runs_are_case_sensitive() {
        assert_eq!(natural_cmp("Ab", "ab"), Ordering::Less);
        assert_eq!(natural_cmp("a", "B"), Ordering::Greater);
    }

    #[test]
    fn leading_zeros_tie_break_on_bytes() {
        assert_eq!(natural_cmp("01", "1"), Ordering::Less);
        assert_eq!(natural_cmp("1", "01"), Ordering::Greater);
        assert_eq!(natural_cmp("007", "8"), Ordering::Less);
        assert_eq!(natural_cmp("AC-1", "AC-1"), Ordering::Equal);
    }
}
