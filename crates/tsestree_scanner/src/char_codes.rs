//! Character classification used by the scanner.

use unicode_xid::UnicodeXID;

pub const LINE_SEPARATOR: char = '\u{2028}';
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';
const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Check if a character is a line terminator.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | LINE_SEPARATOR | PARAGRAPH_SEPARATOR)
}

/// Check if a character is whitespace (not line break).
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\u{000B}' // vertical tab
            | '\u{000C}' // form feed
            | '\u{00A0}' // no-break space
            | '\u{1680}' // ogham space mark
            | '\u{2000}'..='\u{200A}' // various spaces
            | '\u{202F}' // narrow no-break space
            | '\u{205F}' // medium mathematical space
            | '\u{3000}' // ideographic space
            | '\u{FEFF}' // BOM / zero-width no-break space
    )
}

#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

#[inline]
pub fn is_octal_digit(byte: u8) -> bool {
    matches!(byte, b'0'..=b'7')
}

#[inline]
pub fn is_binary_digit(byte: u8) -> bool {
    matches!(byte, b'0' | b'1')
}

#[inline]
pub fn is_hex_digit(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

#[inline]
pub fn is_ascii_identifier_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_' || byte == b'$'
}

#[inline]
pub fn is_ascii_identifier_part(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$'
}

/// Check if a character can start an identifier.
pub fn is_identifier_start(ch: char) -> bool {
    if ch.is_ascii() {
        is_ascii_identifier_start(ch as u8)
    } else {
        ch.is_xid_start()
    }
}

/// Check if a character can be part of an identifier.
pub fn is_identifier_part(ch: char) -> bool {
    if ch.is_ascii() {
        is_ascii_identifier_part(ch as u8)
    } else {
        ch.is_xid_continue() || ch == ZERO_WIDTH_NON_JOINER || ch == ZERO_WIDTH_JOINER
    }
}

/// The numeric value of a hex digit.
#[inline]
pub fn hex_value(byte: u8) -> Option<u32> {
    (byte as char).to_digit(16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_classes() {
        assert!(is_identifier_start('$'));
        assert!(is_identifier_start('é'));
        assert!(is_identifier_start('中'));
        assert!(!is_identifier_start('1'));
        assert!(is_identifier_part('1'));
        assert!(is_identifier_part('\u{200D}'));
        assert!(!is_identifier_part('-'));
    }

    #[test]
    fn test_whitespace_and_line_breaks() {
        assert!(is_white_space_single_line('\u{FEFF}'));
        assert!(is_white_space_single_line('\u{3000}'));
        assert!(!is_white_space_single_line('\n'));
        assert!(is_line_break('\u{2029}'));
    }
}
