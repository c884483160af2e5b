//! Digit font for the time layer
//!
//! 5x7 glyphs for `0`-`9` and `:`, drawn scaled up. Each glyph row is a
//! bitmask with bit 4 as the leftmost column. Unknown characters render
//! as blank cells.

/// Glyph width in font pixels
pub const GLYPH_WIDTH: i16 = 5;

/// Glyph height in font pixels
pub const GLYPH_HEIGHT: i16 = 7;

/// Horizontal advance per character in font pixels (one column of spacing)
pub const GLYPH_ADVANCE: i16 = GLYPH_WIDTH + 1;

/// Screen pixels per font pixel for the time layer
pub const TEXT_SCALE: i16 = 4;

const DIGITS: [[u8; 7]; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
];

const COLON: [u8; 7] = [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00];

const BLANK: [u8; 7] = [0; 7];

/// Bitmap rows for a character
pub fn glyph(ch: char) -> &'static [u8; 7] {
    match ch {
        '0'..='9' => &DIGITS[(ch as u8 - b'0') as usize],
        ':' => &COLON,
        _ => &BLANK,
    }
}

/// Width in screen pixels of `text` drawn at `scale`
pub fn text_width(text: &str, scale: i16) -> i16 {
    let chars = text.chars().count() as i16;
    if chars == 0 {
        return 0;
    }
    (chars * GLYPH_ADVANCE - 1) * scale
}
