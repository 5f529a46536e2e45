//! Type tag inference and coercion.
//!
//! Tags are committed when an argument is added to a message, so the
//! packer later dispatches on the variant alone.

use crate::encoding::{EncodeError, EncodeResult};
use crate::types::OscArg;

/// Type tag a value maps to when no hint is given.
///
/// `A` is a pseudo tag for arrays; it expands to a bracketed group and
/// never appears in an encoded tag string.
pub(crate) fn infer(arg: &OscArg) -> char {
    use OscArg::*;
    match arg {
        Int32(_) => 'i',
        Float32(_) => 'f',
        Float64(_) => 'd',
        Str(_) => 's',
        True => 'T',
        False => 'F',
        Nil => 'N',
        Infinitum => 'I',
        Timetag(_) => 't',
        Blob(_) => 'b',
        Array(_) => 'A',
    }
}

/// Appends the inferred tag for `arg` to `tags`, expanding arrays.
pub(crate) fn append_inferred(arg: &OscArg, tags: &mut String) {
    match arg {
        OscArg::Array(elements) => {
            tags.push('[');
            for element in elements {
                append_inferred(element, tags);
            }
            tags.push(']');
        }
        other => tags.push(infer(other)),
    }
}

/// Converts `arg` to the canonical variant for `hint` and appends the
/// committed tag characters to `tags`.
///
/// The float hints `f` and `d` accept any of the three numeric variants
/// and cast; `i` takes only an int32. Every other hint requires the
/// matching variant. `c` is an alias that commits `s`. The boolean tags
/// are authoritative: hinting `T` commits true no matter which boolean
/// was supplied, mirroring the wire format where the tag character
/// itself carries the value.
pub(crate) fn coerce(arg: OscArg, hint: char, tags: &mut String) -> EncodeResult<OscArg> {
    use OscArg::*;

    let canonical = match (hint, arg) {
        ('i', value @ Int32(_)) => {
            tags.push('i');
            value
        }
        ('f', Int32(value)) => {
            tags.push('f');
            Float32(value as f32)
        }
        ('f', value @ Float32(_)) => {
            tags.push('f');
            value
        }
        ('f', Float64(value)) => {
            tags.push('f');
            Float32(value as f32)
        }
        ('d', Int32(value)) => {
            tags.push('d');
            Float64(f64::from(value))
        }
        ('d', Float32(value)) => {
            tags.push('d');
            Float64(f64::from(value))
        }
        ('d', value @ Float64(_)) => {
            tags.push('d');
            value
        }
        ('s' | 'c', value @ Str(_)) => {
            tags.push('s');
            value
        }
        ('T', True | False) => {
            tags.push('T');
            True
        }
        ('F', True | False) => {
            tags.push('F');
            False
        }
        ('N', Nil) => {
            tags.push('N');
            Nil
        }
        ('I', Infinitum) => {
            tags.push('I');
            Infinitum
        }
        ('t', value @ Timetag(_)) => {
            tags.push('t');
            value
        }
        ('b', value @ Blob(_)) => {
            tags.push('b');
            value
        }
        ('A', Array(elements)) => {
            tags.push('[');
            for element in &elements {
                append_inferred(element, tags);
            }
            tags.push(']');
            Array(elements)
        }
        ('i' | 'f' | 'd' | 's' | 'c' | 'T' | 'F' | 'N' | 'I' | 't' | 'b' | 'A', other) => {
            return Err(EncodeError::UnsupportedType {
                tag: hint,
                kind: other.kind(),
            });
        }
        (unknown, _) => {
            return Err(EncodeError::UnknownTypeTag { tag: unknown });
        }
    };

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Blob, Timetag};

    #[test]
    fn test_infer_covers_every_variant() {
        assert_eq!(infer(&OscArg::Int32(1)), 'i');
        assert_eq!(infer(&OscArg::Float32(1.0)), 'f');
        assert_eq!(infer(&OscArg::Float64(1.0)), 'd');
        assert_eq!(infer(&OscArg::Str("x".to_string())), 's');
        assert_eq!(infer(&OscArg::True), 'T');
        assert_eq!(infer(&OscArg::False), 'F');
        assert_eq!(infer(&OscArg::Nil), 'N');
        assert_eq!(infer(&OscArg::Infinitum), 'I');
        assert_eq!(infer(&OscArg::Timetag(Timetag::IMMEDIATE)), 't');
        assert_eq!(infer(&OscArg::Blob(Blob::new(vec![1]))), 'b');
        assert_eq!(infer(&OscArg::Array(Vec::new())), 'A');
    }

    #[test]
    fn test_append_inferred_expands_nested_arrays() {
        let arg = OscArg::Array(vec![
            OscArg::Int32(1),
            OscArg::Array(vec![OscArg::Str("x".to_string()), OscArg::True]),
        ]);
        let mut tags = String::from(",");
        append_inferred(&arg, &mut tags);
        assert_eq!(tags, ",[i[sT]]");
    }

    #[test]
    fn test_coerce_numeric_casts() {
        let mut tags = String::new();
        assert_eq!(
            coerce(OscArg::Int32(3), 'f', &mut tags).unwrap(),
            OscArg::Float32(3.0)
        );
        assert_eq!(
            coerce(OscArg::Int32(3), 'd', &mut tags).unwrap(),
            OscArg::Float64(3.0)
        );
        assert_eq!(
            coerce(OscArg::Float32(2.5), 'd', &mut tags).unwrap(),
            OscArg::Float64(2.5)
        );
        assert_eq!(
            coerce(OscArg::Float64(2.5), 'f', &mut tags).unwrap(),
            OscArg::Float32(2.5)
        );
        assert_eq!(tags, "fddf");
    }

    #[test]
    fn test_coerce_char_alias_commits_string_tag() {
        let mut tags = String::new();
        let canonical = coerce(OscArg::Str("q".to_string()), 'c', &mut tags).unwrap();
        assert_eq!(canonical, OscArg::Str("q".to_string()));
        assert_eq!(tags, "s");
    }

    #[test]
    fn test_coerce_boolean_tag_is_authoritative() {
        let mut tags = String::new();
        assert_eq!(coerce(OscArg::False, 'T', &mut tags).unwrap(), OscArg::True);
        assert_eq!(coerce(OscArg::True, 'F', &mut tags).unwrap(), OscArg::False);
        assert_eq!(tags, "TF");
    }

    #[test]
    fn test_coerce_array_hint_expands() {
        let mut tags = String::new();
        let arg = OscArg::Array(vec![OscArg::Int32(1), OscArg::Float32(2.0)]);
        coerce(arg, 'A', &mut tags).unwrap();
        assert_eq!(tags, "[if]");
    }

    #[test]
    fn test_coerce_empty_array() {
        let mut tags = String::new();
        coerce(OscArg::Array(Vec::new()), 'A', &mut tags).unwrap();
        assert_eq!(tags, "[]");
    }

    #[test]
    fn test_coerce_rejects_mismatched_value() {
        let mut tags = String::new();
        let err = coerce(OscArg::Int32(1), 't', &mut tags).unwrap_err();
        assert_eq!(
            err,
            EncodeError::UnsupportedType {
                tag: 't',
                kind: "int32"
            }
        );

        let err = coerce(OscArg::Str("x".to_string()), 'i', &mut tags).unwrap_err();
        assert_eq!(
            err,
            EncodeError::UnsupportedType {
                tag: 'i',
                kind: "string"
            }
        );

        // No narrowing of floats into the int tag.
        let err = coerce(OscArg::Float64(2.5), 'i', &mut tags).unwrap_err();
        assert_eq!(
            err,
            EncodeError::UnsupportedType {
                tag: 'i',
                kind: "float64"
            }
        );
        assert!(tags.is_empty());
    }

    #[test]
    fn test_coerce_rejects_unknown_tag() {
        let mut tags = String::new();
        let err = coerce(OscArg::Int32(1), 'x', &mut tags).unwrap_err();
        assert_eq!(err, EncodeError::UnknownTypeTag { tag: 'x' });
    }
}
