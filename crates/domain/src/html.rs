//! HTML-to-text conversion for server-provided strings.
//!
//! Log output and paste bodies arrive HTML-escaped. Before display they are
//! turned back into plain text: markup is dropped and character references
//! are decoded, the same result a browser gives for an element's text content.
//!
//! Numeric references are decoded in full. Named references cover the
//! markup escapes plus the Latin-1 symbols and typographic punctuation
//! listed in `named_entity`; other names are kept as literal text.

/// Convert an HTML fragment to its plain-text content.
#[must_use]
pub fn to_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(pos) = rest.find(['<', '&']) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if rest.starts_with('<') {
            match tag_len(rest) {
                Some(len) => rest = &rest[len..],
                None => {
                    out.push('<');
                    rest = &rest[1..];
                }
            }
        } else {
            match decode_reference(rest) {
                Some((ch, len)) => {
                    out.push(ch);
                    rest = &rest[len..];
                }
                None => {
                    out.push('&');
                    rest = &rest[1..];
                }
            }
        }
    }

    out.push_str(rest);
    out
}

/// Length of the tag at the start of `input`, if it is one.
///
/// A `<` only opens a tag when followed by a letter, `/` or `!`; anything
/// else is literal text.
fn tag_len(input: &str) -> Option<usize> {
    let next = input[1..].chars().next()?;
    if !(next.is_ascii_alphabetic() || next == '/' || next == '!') {
        return None;
    }
    input.find('>').map(|end| end + 1)
}

/// Decode the character reference at the start of `input`.
///
/// Returns the decoded character and the number of bytes consumed.
fn decode_reference(input: &str) -> Option<(char, usize)> {
    let end = input[1..].find(';')? + 1;
    let body = &input[1..end];
    if body.is_empty() || body.len() > 10 {
        return None;
    }

    let ch = if let Some(num) = body.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        char::from_u32(code)?
    } else {
        named_entity(body)?
    };

    Some((ch, end + 1))
}

/// Character for a named reference, without the `&` and `;`.
fn named_entity(name: &str) -> Option<char> {
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "iexcl" => '¡',
        "cent" => '¢',
        "pound" => '£',
        "curren" => '¤',
        "yen" => '¥',
        "brvbar" => '¦',
        "sect" => '§',
        "uml" => '¨',
        "copy" => '©',
        "ordf" => 'ª',
        "laquo" => '«',
        "not" => '¬',
        "shy" => '\u{ad}',
        "reg" => '®',
        "macr" => '¯',
        "deg" => '°',
        "plusmn" => '±',
        "sup2" => '²',
        "sup3" => '³',
        "acute" => '´',
        "micro" => 'µ',
        "para" => '¶',
        "middot" => '·',
        "cedil" => '¸',
        "sup1" => '¹',
        "ordm" => 'º',
        "raquo" => '»',
        "frac14" => '¼',
        "frac12" => '½',
        "frac34" => '¾',
        "iquest" => '¿',
        "times" => '×',
        "divide" => '÷',
        "ndash" => '–',
        "mdash" => '—',
        "lsquo" => '‘',
        "rsquo" => '’',
        "sbquo" => '‚',
        "ldquo" => '“',
        "rdquo" => '”',
        "bdquo" => '„',
        "dagger" => '†',
        "Dagger" => '‡',
        "bull" => '•',
        "hellip" => '…',
        "permil" => '‰',
        "prime" => '′',
        "lsaquo" => '‹',
        "rsaquo" => '›',
        "euro" => '€',
        "trade" => '™',
        "larr" => '←',
        "uarr" => '↑',
        "rarr" => '→',
        "darr" => '↓',
        "harr" => '↔',
        "ensp" => '\u{2002}',
        "emsp" => '\u{2003}',
        "thinsp" => '\u{2009}',
        "zwnj" => '\u{200c}',
        "zwj" => '\u{200d}',
        _ => return None,
    };
    Some(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_leave_plain_text_untouched() {
        assert_eq!(to_text("hello world"), "hello world");
    }

    #[test]
    fn should_decode_named_entities() {
        assert_eq!(
            to_text("a &lt; b &amp;&amp; c &gt; d &quot;e&quot; &apos;f&apos;"),
            "a < b && c > d \"e\" 'f'"
        );
    }

    #[test]
    fn should_decode_common_named_entities() {
        assert_eq!(
            to_text("&copy; ACME&trade; &hellip; &laquo;ok&raquo; 3&times;4 &euro;5 &mdash; x"),
            "© ACME™ … «ok» 3×4 €5 — x"
        );
    }

    #[test]
    fn should_decode_numeric_entities() {
        assert_eq!(to_text("&#65;&#x42;&#X43;"), "ABC");
    }

    #[test]
    fn should_strip_markup() {
        assert_eq!(to_text("<b>bold</b> and <i>italic</i>"), "bold and italic");
    }

    #[test]
    fn should_keep_lone_angle_bracket_and_ampersand() {
        assert_eq!(to_text("1 < 2 & 3 > 2"), "1 < 2 & 3 > 2");
    }

    #[test]
    fn should_keep_unknown_entity_verbatim() {
        assert_eq!(to_text("&bogus; &"), "&bogus; &");
    }

    #[test]
    fn should_decode_escaped_markup_into_visible_text() {
        assert_eq!(
            to_text("&lt;script&gt;alert(1)&lt;/script&gt;"),
            "<script>alert(1)</script>"
        );
    }

    #[test]
    fn should_preserve_newlines_in_log_output() {
        assert_eq!(to_text("line 1\nline 2\n"), "line 1\nline 2\n");
    }
}
