//! Text helpers shared by the name parsers.
//!
//! Scene titles cannot carry characters that are illegal in file names, so
//! they are written with a reserved escape alphabet: words are separated by
//! dots and `;c` `;d` `;a` `;q` `;l` `;g` stand for `:` `.` `*` `?` `<` `>`.

/// Escape sequences, in the order they are decoded.
const ESCAPES: &[(&str, &str)] = &[
    (";c", ":"),
    (";d", "."),
    (";a", "*"),
    (";q", "?"),
    (";l", "<"),
    (";g", ">"),
];

/// Decode a dot-separated, escaped title into its display form.
///
/// Dots become spaces before the escape sequences are expanded, so an
/// escaped dot (`;d`) survives as a literal dot.
pub fn unescape_title(escaped: &str) -> String {
    let mut title = escaped.replace('.', " ");
    for (sequence, plain) in ESCAPES {
        title = title.replace(sequence, plain);
    }
    title
}

/// Encode a display title into the dot-separated escaped form.
pub fn escape_title(title: &str) -> String {
    let mut escaped = title.to_string();
    for (sequence, plain) in ESCAPES {
        escaped = escaped.replace(plain, sequence);
    }
    escaped.replace(' ', ".")
}

/// Split on `delimiter`, dropping trailing empty fields.
pub fn split_fields(text: &str, delimiter: char) -> Vec<&str> {
    let mut fields: Vec<&str> = text.split(delimiter).collect();
    while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_title() {
        assert_eq!(unescape_title("The.Matrix"), "The Matrix");
        assert_eq!(unescape_title("Star.Wars;c.Episode.IV"), "Star Wars: Episode IV");
        assert_eq!(unescape_title("Mr;d.Robot"), "Mr. Robot");
        assert_eq!(unescape_title("What.If;q"), "What If?");
        assert_eq!(unescape_title("Stars;a.;lA;g"), "Stars* <A>");
    }

    #[test]
    fn test_escape_title() {
        assert_eq!(escape_title("Star Wars: Episode IV"), "Star.Wars;c.Episode.IV");
        assert_eq!(escape_title("Mr. Robot"), "Mr;d.Robot");
    }

    #[test]
    fn test_escape_round_trip() {
        let titles = [
            "Who Framed Roger Rabbit?",
            "M*A*S*H",
            "Alien: Covenant",
            "<Untitled> 2.0",
            "Plain Title",
        ];
        for title in titles {
            assert_eq!(unescape_title(&escape_title(title)), title, "{}", title);
        }
    }

    #[test]
    fn test_split_fields_drops_trailing_empty() {
        assert_eq!(split_fields("a_b__", '_'), vec!["a", "b"]);
        assert_eq!(split_fields("a__b", '_'), vec!["a", "", "b"]);
        assert_eq!(split_fields("", '_'), vec![""]);
        assert_eq!(split_fields("whole", '.'), vec!["whole"]);
    }
}
