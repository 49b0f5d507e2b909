//! Caret and `M-` notation for non-printing bytes.
//!
//! Every byte maps to one of:
//! - itself (tab, line-feed, printable ASCII)
//! - `^X` for control bytes, where `X` is the byte XOR 64 (`0x01` -> `^A`, `0x7f` -> `^?`)
//! - `M-` followed by the form of `byte - 128` for high bytes (`0xe9` -> `M-i`, `0x81` -> `M-^A`)

/// Longest escape produced: `M-^X`.
const MAX_ESCAPE_LEN: usize = 4;

/// The escaped form of a single byte, stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escaped {
    buf: [u8; MAX_ESCAPE_LEN],
    len: u8,
}

impl Escaped {
    fn one(byte: u8) -> Self {
        Self {
            buf: [byte, 0, 0, 0],
            len: 1,
        }
    }

    fn caret(byte: u8) -> Self {
        Self {
            buf: [b'^', byte ^ 0x40, 0, 0],
            len: 2,
        }
    }

    fn meta(low: Self) -> Self {
        let mut buf = [b'M', b'-', 0, 0];
        let low = low.as_bytes();
        buf[2..2 + low.len()].copy_from_slice(low);
        Self {
            buf,
            len: (2 + low.len()) as u8,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

/// Whether `byte` is printable ASCII (space through tilde).
pub fn is_printable(byte: u8) -> bool {
    (0x20..=0x7e).contains(&byte)
}

/// Escape one byte for display.
///
/// Tab and line-feed are left alone; whether they get a visible form is
/// decided by the line renderer (`-T`, `-E`), not here.
pub fn escape(byte: u8) -> Escaped {
    match byte {
        b'\t' | b'\n' => Escaped::one(byte),
        b if is_printable(b) => Escaped::one(b),
        0x80..=0xff => Escaped::meta(escape_low(byte - 0x80)),
        _ => Escaped::caret(byte),
    }
}

/// The part after `M-`. Unlike [`escape`], tab and line-feed are escaped
/// here too (`0x89` -> `M-^I`).
fn escape_low(low: u8) -> Escaped {
    if is_printable(low) {
        Escaped::one(low)
    } else {
        Escaped::caret(low)
    }
}
