//! Canonical text form of vectors.
//!
//! A vector is written as `x [<x>] y [<y>] z [<z>] w [<w>]`, with the `z` and
//! `w` fields omitted for the lower arities. This is the form used for
//! vectors in configuration files, e.g. `meetingPos="x [32] y [120]"`.

use crate::num::Scalar;
use anyhow::{Context, Result, anyhow};
use std::fmt;

const FIELD_NAMES: [&str; 4] = ["x", "y", "z", "w"];

/// Splits the given text on every occurrence of the literal `delimiter`
/// substring.
///
/// There is always at least one token: if the delimiter does not occur, or is
/// empty, the whole text is the only token.
pub fn tokenize<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        return vec![text];
    }
    text.split(delimiter).collect()
}

/// Parses a scalar of type `T` from the given text, independently of the
/// locale of the process.
///
/// # Errors
/// Returns an error if the text contains anything other than whitespace
/// after the number.
pub fn parse_scalar<T: Scalar>(text: &str) -> Result<T> {
    T::parse_text(text)
}

pub(crate) fn parse_number<T: Default>(
    text: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T> {
    let number = text.trim();
    if number.is_empty() {
        return Ok(T::default());
    }
    parse(number).ok_or_else(|| anyhow!("Error converting from string to number, found: [{text}]"))
}

pub(crate) fn write_fields<T: Scalar>(f: &mut fmt::Formatter<'_>, fields: &[T]) -> fmt::Result {
    for (idx, (name, value)) in FIELD_NAMES.iter().zip(fields).enumerate() {
        if idx > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{name} [")?;
        value.write_text(f)?;
        f.write_str("]")?;
    }
    Ok(())
}

pub(crate) fn parse_fields<T: Scalar, const N: usize>(text: &str) -> Result<[T; N]> {
    let mut fields = [T::default(); N];

    let segments = tokenize(text, "[");
    if segments.len() != N + 1 {
        log::debug!(
            "Expected {} bracketed fields in vector string `{text}` but found {}, using zero vector",
            N,
            segments.len() - 1
        );
        return Ok(fields);
    }

    let mut numbers = [""; N];
    for (number, &segment) in numbers.iter_mut().zip(&segments[1..]) {
        let &[value, _] = tokenize(segment, "]").as_slice() else {
            log::debug!("Unterminated field `{segment}` in vector string `{text}`, using zero vector");
            return Ok(fields);
        };
        *number = value;
    }

    for ((field, number), name) in fields.iter_mut().zip(numbers).zip(FIELD_NAMES) {
        *field = parse_scalar(number)
            .with_context(|| format!("Invalid {name}-component in vector string `{text}`"))?;
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizing_splits_on_every_delimiter() {
        assert_eq!(tokenize("x [32] y [120]", "["), vec!["x ", "32] y ", "120]"]);
        assert_eq!(tokenize("a::b::c", "::"), vec!["a", "b", "c"]);
    }

    #[test]
    fn tokenizing_without_delimiter_gives_whole_text() {
        assert_eq!(tokenize("no delimiter", "["), vec!["no delimiter"]);
        assert_eq!(tokenize("", "["), vec![""]);
        assert_eq!(tokenize("abc", ""), vec!["abc"]);
    }

    #[test]
    fn tokenizing_keeps_empty_tokens() {
        assert_eq!(tokenize("[[", "["), vec!["", "", ""]);
        assert_eq!(tokenize("12]", "]"), vec!["12", ""]);
    }

    #[test]
    fn parsing_fields_works() {
        let fields: [i32; 2] = parse_fields("x [32] y [120]").unwrap();
        assert_eq!(fields, [32, 120]);

        let fields: [f32; 3] = parse_fields("x [0.5] y [-1] z [2e1]").unwrap();
        assert_eq!(fields, [0.5, -1.0, 20.0]);
    }

    #[test]
    fn parsing_fields_ignores_field_names() {
        let fields: [i32; 2] = parse_fields("a [1] b [2]").unwrap();
        assert_eq!(fields, [1, 2]);
    }

    #[test]
    fn parsing_wrong_number_of_fields_gives_zeros() {
        let fields: [i32; 2] = parse_fields("x [32]").unwrap();
        assert_eq!(fields, [0, 0]);

        let fields: [i32; 2] = parse_fields("x [1] y [2] z [3]").unwrap();
        assert_eq!(fields, [0, 0]);

        let fields: [i32; 2] = parse_fields("").unwrap();
        assert_eq!(fields, [0, 0]);
    }

    #[test]
    fn parsing_unterminated_field_gives_zeros() {
        let fields: [i32; 2] = parse_fields("x [1 y [2]").unwrap();
        assert_eq!(fields, [0, 0]);

        let fields: [i32; 2] = parse_fields("x [1]] y [2]").unwrap();
        assert_eq!(fields, [0, 0]);
    }

    #[test]
    fn parsing_malformed_number_in_field_fails() {
        let result: Result<[i32; 2]> = parse_fields("x [32] y [abc]");
        let error = result.unwrap_err();
        assert!(format!("{error:#}").contains("y-component"));
    }

    #[test]
    fn parsing_empty_field_gives_zero() {
        let fields: [i32; 2] = parse_fields("x [] y [5]").unwrap();
        assert_eq!(fields, [0, 5]);
    }
}
