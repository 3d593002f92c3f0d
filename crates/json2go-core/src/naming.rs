//! Go identifier formatting for JSON keys and type names.
//!
//! Keys are turned into exported identifiers following golint conventions:
//! words are capitalized, well-known initialisms are fully upper-cased
//! (`user_id` → `UserID`), and anything that is not an ASCII letter or digit
//! is dropped. Formatting is deterministic but not collision-free.

/// Identifier emitted when a key has no usable characters.
pub const NAMING_FAILED: &str = "NAMING_FAILED";

/// Initialisms that golint wants fully upper-cased.
pub const COMMON_INITIALISMS: &[&str] = &[
    "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP", "JSON",
    "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SSH", "TCP", "TLS", "TTL", "UDP", "UI",
    "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XSRF", "XSS",
];

const DIGIT_WORDS: [&str; 10] = [
    "Zero_", "One_", "Two_", "Three_", "Four_", "Five_", "Six_", "Seven_", "Eight_", "Nine_",
];

/// Format a raw JSON key as an exported Go identifier.
///
/// ```
/// use json2go_core::naming::format_identifier;
/// assert_eq!(format_identifier("user_id"), "UserID");
/// assert_eq!(format_identifier("123"), "Num123");
/// assert_eq!(format_identifier("3d_model"), "ThreeDModel");
/// assert_eq!(format_identifier("$$"), "NAMING_FAILED");
/// ```
pub fn format_identifier(raw: &str) -> String {
    let prefixed = prefix_digits(raw);
    let cased = capitalize_camel_runs(&capitalize_words(&prefixed));
    let ident: String = cased.chars().filter(char::is_ascii_alphanumeric).collect();
    if ident.is_empty() {
        NAMING_FAILED.to_string()
    } else {
        ident
    }
}

/// True if `word`, upper-cased, is one of [`COMMON_INITIALISMS`].
pub fn is_initialism(word: &str) -> bool {
    let upper = word.to_ascii_uppercase();
    COMMON_INITIALISMS.contains(&upper.as_str())
}

/// Go identifiers cannot start with a digit.
fn prefix_digits(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(_) if raw.chars().all(|c| c.is_ascii_digit()) => format!("Num{raw}"),
        Some(first @ '0'..='9') => {
            let word = DIGIT_WORDS[first as usize - '0' as usize];
            format!("{word}{}", chars.as_str())
        }
        _ => raw.to_string(),
    }
}

/// Capitalize every lowercase run that starts a word, i.e. sits at the start
/// of the string or right after a character that is not an ASCII letter.
/// Runs that spell an initialism are upper-cased entirely.
fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    let mut rest = s;

    while let Some(c) = rest.chars().next() {
        if c.is_ascii_lowercase() && !prev_is_letter {
            let end = rest
                .find(|ch: char| !ch.is_ascii_lowercase())
                .unwrap_or(rest.len());
            let run = &rest[..end];
            if is_initialism(run) {
                out.push_str(&run.to_ascii_uppercase());
            } else {
                out.push(c.to_ascii_uppercase());
                out.push_str(&run[1..]);
            }
            rest = &rest[end..];
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = c.is_ascii_alphabetic();
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}

/// Upper-case `[A-Z][a-z]+` runs that spell an initialism, so camel-cased
/// keys such as `userId` come out as `UserID`.
fn capitalize_camel_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(c) = rest.chars().next() {
        let tail = &rest[c.len_utf8()..];
        let run_len = tail
            .find(|ch: char| !ch.is_ascii_lowercase())
            .unwrap_or(tail.len());
        if c.is_ascii_uppercase() && run_len > 0 {
            let run = &rest[..1 + run_len];
            if is_initialism(run) {
                out.push_str(&run.to_ascii_uppercase());
            } else {
                out.push_str(run);
            }
            rest = &rest[1 + run_len..];
        } else {
            out.push(c);
            rest = tail;
        }
    }
    out
}
