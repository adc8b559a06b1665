//! Stateless key-to-action translation
//!
//! A pure table lookup from (key, modifiers) to the edit action the key
//! produces. Keys the engine has no mapping for resolve to `None` and are
//! silently ignored; that is an expected outcome, not an error.

use input_types::{KeyCode, Modifiers};
use serde::{Deserialize, Serialize};

/// Symbols produced by shift-holding the digits 0..=9, indexed by digit
const SHIFTED_DIGITS: &[u8; 10] = b")!@#$%^&*(";

/// Number of spaces a Tab press expands to
pub const TAB_WIDTH: usize = 4;

/// Discrete edit action resolved from a winning key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditAction {
    /// Insert a single literal byte
    Char(u8),
    /// Insert `TAB_WIDTH` spaces
    Tab,
    /// Insert a newline
    Enter,
    /// Delete the byte before the cursor
    Backspace,
}

/// Resolves a key plus modifier state to an edit action.
///
/// Letters honor shift XOR caps-lock for case; digits substitute the
/// shifted symbol row; punctuation keys carry explicit shifted pairs.
/// Directional and unknown keys resolve to `None`.
pub fn resolve(key: KeyCode, modifiers: Modifiers) -> Option<EditAction> {
    let shift = modifiers.is_shift();

    match key {
        KeyCode::Tab => return Some(EditAction::Tab),
        KeyCode::Enter => return Some(EditAction::Enter),
        KeyCode::Backspace => return Some(EditAction::Backspace),
        KeyCode::Space => return Some(EditAction::Char(b' ')),
        _ => {}
    }

    if let Some(letter) = lowercase_letter(key) {
        let uppercase = shift ^ modifiers.is_caps_lock();
        let byte = if uppercase {
            letter.to_ascii_uppercase()
        } else {
            letter
        };
        return Some(EditAction::Char(byte));
    }

    if let Some(digit) = digit_index(key) {
        let byte = if shift {
            SHIFTED_DIGITS[digit as usize]
        } else {
            b'0' + digit
        };
        return Some(EditAction::Char(byte));
    }

    punctuation(key, shift).map(EditAction::Char)
}

/// Base lowercase byte for a letter key
fn lowercase_letter(key: KeyCode) -> Option<u8> {
    let byte = match key {
        KeyCode::A => b'a',
        KeyCode::B => b'b',
        KeyCode::C => b'c',
        KeyCode::D => b'd',
        KeyCode::E => b'e',
        KeyCode::F => b'f',
        KeyCode::G => b'g',
        KeyCode::H => b'h',
        KeyCode::I => b'i',
        KeyCode::J => b'j',
        KeyCode::K => b'k',
        KeyCode::L => b'l',
        KeyCode::M => b'm',
        KeyCode::N => b'n',
        KeyCode::O => b'o',
        KeyCode::P => b'p',
        KeyCode::Q => b'q',
        KeyCode::R => b'r',
        KeyCode::S => b's',
        KeyCode::T => b't',
        KeyCode::U => b'u',
        KeyCode::V => b'v',
        KeyCode::W => b'w',
        KeyCode::X => b'x',
        KeyCode::Y => b'y',
        KeyCode::Z => b'z',
        _ => return None,
    };
    Some(byte)
}

/// Digit value 0..=9 for a digit key
fn digit_index(key: KeyCode) -> Option<u8> {
    let digit = match key {
        KeyCode::Num0 => 0,
        KeyCode::Num1 => 1,
        KeyCode::Num2 => 2,
        KeyCode::Num3 => 3,
        KeyCode::Num4 => 4,
        KeyCode::Num5 => 5,
        KeyCode::Num6 => 6,
        KeyCode::Num7 => 7,
        KeyCode::Num8 => 8,
        KeyCode::Num9 => 9,
        _ => return None,
    };
    Some(digit)
}

/// Unshifted/shifted byte pair for a punctuation key
fn punctuation(key: KeyCode, shift: bool) -> Option<u8> {
    let byte = match (key, shift) {
        (KeyCode::Comma, false) => b',',
        (KeyCode::Comma, true) => b'<',
        (KeyCode::Period, false) => b'.',
        (KeyCode::Period, true) => b'>',
        (KeyCode::Semicolon, false) => b';',
        (KeyCode::Semicolon, true) => b':',
        (KeyCode::Quote, false) => b'\'',
        (KeyCode::Quote, true) => b'"',
        (KeyCode::LeftBracket, false) => b'[',
        (KeyCode::LeftBracket, true) => b'{',
        (KeyCode::RightBracket, false) => b']',
        (KeyCode::RightBracket, true) => b'}',
        (KeyCode::Backslash, false) => b'\\',
        (KeyCode::Backslash, true) => b'|',
        (KeyCode::Slash, false) => b'/',
        (KeyCode::Slash, true) => b'?',
        (KeyCode::Equal, false) => b'=',
        (KeyCode::Equal, true) => b'+',
        (KeyCode::Minus, false) => b'-',
        (KeyCode::Minus, true) => b'_',
        (KeyCode::Grave, false) => b'`',
        (KeyCode::Grave, true) => b'~',
        _ => return None,
    };
    Some(byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_letter() {
        assert_eq!(
            resolve(KeyCode::A, Modifiers::none()),
            Some(EditAction::Char(b'a'))
        );
    }

    #[test]
    fn test_shift_uppercases_letter() {
        assert_eq!(
            resolve(KeyCode::A, Modifiers::SHIFT),
            Some(EditAction::Char(b'A'))
        );
    }

    #[test]
    fn test_caps_lock_uppercases_letter() {
        assert_eq!(
            resolve(KeyCode::Q, Modifiers::CAPS_LOCK),
            Some(EditAction::Char(b'Q'))
        );
    }

    #[test]
    fn test_shift_with_caps_lock_cancels_out() {
        assert_eq!(
            resolve(KeyCode::Z, Modifiers::SHIFT.with(Modifiers::CAPS_LOCK)),
            Some(EditAction::Char(b'z'))
        );
    }

    #[test]
    fn test_plain_digits() {
        assert_eq!(
            resolve(KeyCode::Num0, Modifiers::none()),
            Some(EditAction::Char(b'0'))
        );
        assert_eq!(
            resolve(KeyCode::Num9, Modifiers::none()),
            Some(EditAction::Char(b'9'))
        );
    }

    #[test]
    fn test_shifted_digits_substitute_symbols() {
        let expected = [
            (KeyCode::Num0, b')'),
            (KeyCode::Num1, b'!'),
            (KeyCode::Num2, b'@'),
            (KeyCode::Num3, b'#'),
            (KeyCode::Num4, b'$'),
            (KeyCode::Num5, b'%'),
            (KeyCode::Num6, b'^'),
            (KeyCode::Num7, b'&'),
            (KeyCode::Num8, b'*'),
            (KeyCode::Num9, b'('),
        ];
        for (key, symbol) in expected {
            assert_eq!(
                resolve(key, Modifiers::SHIFT),
                Some(EditAction::Char(symbol)),
                "shifted {}",
                key
            );
        }
    }

    #[test]
    fn test_caps_lock_does_not_shift_digits() {
        assert_eq!(
            resolve(KeyCode::Num1, Modifiers::CAPS_LOCK),
            Some(EditAction::Char(b'1'))
        );
    }

    #[test]
    fn test_punctuation_pairs() {
        let pairs = [
            (KeyCode::Comma, b',', b'<'),
            (KeyCode::Period, b'.', b'>'),
            (KeyCode::Semicolon, b';', b':'),
            (KeyCode::Quote, b'\'', b'"'),
            (KeyCode::LeftBracket, b'[', b'{'),
            (KeyCode::RightBracket, b']', b'}'),
            (KeyCode::Backslash, b'\\', b'|'),
            (KeyCode::Slash, b'/', b'?'),
            (KeyCode::Equal, b'=', b'+'),
            (KeyCode::Minus, b'-', b'_'),
            (KeyCode::Grave, b'`', b'~'),
        ];
        for (key, plain, shifted) in pairs {
            assert_eq!(
                resolve(key, Modifiers::none()),
                Some(EditAction::Char(plain))
            );
            assert_eq!(
                resolve(key, Modifiers::SHIFT),
                Some(EditAction::Char(shifted))
            );
        }
    }

    #[test]
    fn test_space_and_control_keys() {
        assert_eq!(
            resolve(KeyCode::Space, Modifiers::none()),
            Some(EditAction::Char(b' '))
        );
        assert_eq!(resolve(KeyCode::Tab, Modifiers::none()), Some(EditAction::Tab));
        assert_eq!(
            resolve(KeyCode::Enter, Modifiers::none()),
            Some(EditAction::Enter)
        );
        assert_eq!(
            resolve(KeyCode::Backspace, Modifiers::none()),
            Some(EditAction::Backspace)
        );
    }

    #[test]
    fn test_unmapped_keys_resolve_to_none() {
        assert_eq!(resolve(KeyCode::Left, Modifiers::none()), None);
        assert_eq!(resolve(KeyCode::Up, Modifiers::SHIFT), None);
        assert_eq!(resolve(KeyCode::Unknown, Modifiers::none()), None);
    }

    #[test]
    fn test_edit_action_serialization() {
        let action = EditAction::Char(b'%');
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: EditAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
