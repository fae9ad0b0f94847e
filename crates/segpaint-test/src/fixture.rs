//! ASCII mask fixtures
//!
//! Small masks are easiest to review as pictures. Each row is one string:
//! `.` is background, `1`-`9` are labels, `#` is shorthand for label 1.

use crate::error::{TestError, TestResult};
use segpaint_core::{BACKGROUND, Mask};

/// Build a mask from ASCII rows.
///
/// # Errors
///
/// Returns [`TestError::RaggedFixture`] when rows differ in width,
/// [`TestError::UnknownCell`] for unsupported characters, and
/// [`TestError::Core`] for an empty fixture.
pub fn mask_from_ascii(rows: &[&str]) -> TestResult<Mask> {
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut labels = Vec::with_capacity(width * rows.len());

    for (row, line) in rows.iter().enumerate() {
        let actual = line.chars().count();
        if actual != width {
            return Err(TestError::RaggedFixture {
                row,
                expected: width,
                actual,
            });
        }
        for (column, cell) in line.chars().enumerate() {
            let label = match cell {
                '.' => BACKGROUND,
                '#' => 1,
                '1'..='9' => cell.to_digit(10).unwrap_or(0),
                _ => return Err(TestError::UnknownCell { row, column, cell }),
            };
            labels.push(label);
        }
    }

    Ok(Mask::from_labels(width as u32, rows.len() as u32, labels)?)
}

/// Render a mask as ASCII rows joined by newlines.
///
/// Labels above 9 are drawn as `*`.
pub fn mask_to_ascii(mask: &Mask) -> String {
    let mut out = String::with_capacity(((mask.width() + 1) * mask.height()) as usize);

    for y in 0..mask.height() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..mask.width() {
            let cell = match mask.get_label_unchecked(x, y) {
                BACKGROUND => '.',
                v @ 1..=9 => char::from_digit(v, 10).unwrap_or('*'),
                _ => '*',
            };
            out.push(cell);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let rows = [".#.", "2.3", "..."];
        let mask = mask_from_ascii(&rows).unwrap();
        assert_eq!(mask.dimensions(), (3, 3));
        assert_eq!(mask.get_label(1, 0), Some(1));
        assert_eq!(mask.get_label(0, 1), Some(2));
        assert_eq!(mask.get_label(2, 1), Some(3));
        assert_eq!(mask_to_ascii(&mask), ".1.\n2.3\n...");
    }

    #[test]
    fn test_ragged_rows() {
        let err = mask_from_ascii(&["...", ".."]).unwrap_err();
        assert!(matches!(
            err,
            TestError::RaggedFixture {
                row: 1,
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_unknown_cell() {
        let err = mask_from_ascii(&["..x"]).unwrap_err();
        assert!(matches!(
            err,
            TestError::UnknownCell {
                row: 0,
                column: 2,
                cell: 'x'
            }
        ));
    }

    #[test]
    fn test_empty_fixture() {
        assert!(matches!(mask_from_ascii(&[]), Err(TestError::Core(_))));
    }
}
