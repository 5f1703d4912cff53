//! Positional `{N}` placeholder substitution.

use std::fmt::{self, Write};

/// A substitution value; anything displayable.
pub type Arg<'a> = &'a dyn fmt::Display;

/// Replace every `{N}` in `text` with `args[N]`.
///
/// Placeholders whose index is out of range, and anything between braces
/// that is not a plain decimal index (`{01}` included), are left as written. Unused args are
/// ignored.
pub fn substitute(text: &str, args: &[Arg<'_>]) -> String {
    if args.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let closed = digits > 0 && after.as_bytes().get(digits) == Some(&b'}');
        let canonical = digits == 1 || !after.starts_with('0');
        let arg = if closed && canonical {
            after[..digits]
                .parse::<usize>()
                .ok()
                .and_then(|i| args.get(i))
        } else {
            None
        };
        match arg {
            Some(arg) => {
                // Writing into a String cannot fail.
                let _ = write!(out, "{arg}");
                rest = &after[digits + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_positional() {
        assert_eq!(substitute("Hi {0}", &[&"Ana"]), "Hi Ana");
        assert_eq!(substitute("{1} then {0}", &[&"a", &"b"]), "b then a");
    }

    #[test]
    fn test_repeated_placeholder() {
        assert_eq!(substitute("{0}-{0}", &[&7]), "7-7");
    }

    #[test]
    fn test_no_args_leaves_text() {
        assert_eq!(substitute("Hi {0}", &[]), "Hi {0}");
    }

    #[test]
    fn test_out_of_range_left_literal() {
        assert_eq!(substitute("{0} and {2}", &[&"x"]), "x and {2}");
    }

    #[test]
    fn test_non_numeric_braces_left_literal() {
        assert_eq!(
            substitute("{name} {} {0x} {-1} {0", &[&"x"]),
            "{name} {} {0x} {-1} {0"
        );
    }

    #[test]
    fn test_leading_zero_index_left_literal() {
        assert_eq!(substitute("{01} {00} {0}", &[&"a", &"b"]), "{01} {00} a");
        assert_eq!(substitute("{10}", &[&0, &1, &2, &3, &4, &5, &6, &7, &8, &9, &"ten"]), "ten");
    }

    #[test]
    fn test_display_conversion() {
        assert_eq!(substitute("{0} files, {1}%", &[&3, &12.5]), "3 files, 12.5%");
    }

    #[test]
    fn test_huge_index_left_literal() {
        let text = "{99999999999999999999999}";
        assert_eq!(substitute(text, &[&"x"]), text);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(substitute("¡Hola {0}! ✓", &[&"Ana"]), "¡Hola Ana! ✓");
    }
}
