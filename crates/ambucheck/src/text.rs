//! Text preparation for the standard PDF fonts.
//!
//! Helvetica is used without embedding, so every string is drawn through the
//! WinAnsi (Windows-1252) encoding. Typographic characters common in the
//! catalog are first folded to plain ASCII equivalents.

use tracing::warn;

/// Byte written for characters WinAnsi cannot represent.
pub const REPLACEMENT: u8 = b'?';

/// Fold typographic characters to WinAnsi-friendly equivalents.
#[must_use]
pub fn sanitize_win_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '≥' => out.push_str(">="),
            '≤' => out.push_str("<="),
            '–' | '—' => out.push('-'),
            '“' | '”' => out.push('"'),
            '‘' | '’' => out.push('\''),
            '…' => out.push_str("..."),
            'º' => out.push('o'),
            'ª' => out.push('a'),
            other => out.push(other),
        }
    }
    out
}

/// Map one character to its WinAnsi code, if it has one.
#[must_use]
pub fn win_ansi_byte(ch: char) -> Option<u8> {
    let code = u32::from(ch);
    match code {
        0x20..=0x7E | 0xA0..=0xFF => u8::try_from(code).ok(),
        _ => match ch {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            '\t' => Some(b' '),
            _ => None,
        },
    }
}

/// Sanitize and encode text as WinAnsi bytes.
///
/// Characters without a WinAnsi code become [`REPLACEMENT`].
#[must_use]
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let sanitized = sanitize_win_ansi(text);
    let mut bytes = Vec::with_capacity(sanitized.len());
    for ch in sanitized.chars() {
        if let Some(byte) = win_ansi_byte(ch) {
            bytes.push(byte);
        } else {
            warn!(character = %ch, "No WinAnsi code for character, substituting");
            bytes.push(REPLACEMENT);
        }
    }
    bytes
}
