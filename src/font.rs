//! Bitmap fonts for text rendering.
//!
//! A font is a table of glyph descriptors over a contiguous range of character codes, plus one
//! shared blob of glyph bitmaps. Glyph bitmaps are stored in the vertical byte orientation (bit 0
//! at the top), one page row of `width` bytes after another, so a glyph is drawn with the same
//! blitter as any other vertical bitmap.

use core::convert::TryFrom;

use crate::command::consts::NUM_PAGES;

/// Where one glyph lives in a font's bitmap blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphDescriptor {
    /// Width of the glyph in pixels.
    pub width: u8,
    /// Index of the glyph's first byte in the font's bitmap blob.
    pub offset: u16,
}

/// An immutable bitmap font covering the character codes `first..=last`.
#[derive(Debug)]
pub struct Font {
    /// First character code with a glyph.
    pub first: u8,
    /// Last character code with a glyph.
    pub last: u8,
    /// Glyph height in whole pages of 8 pixels.
    pub height_pages: u8,
    /// One descriptor per character code, starting at `first`.
    pub descriptors: &'static [GlyphDescriptor],
    /// Bitmaps of all glyphs, each `width * height_pages` bytes long.
    pub bitmaps: &'static [u8],
}

/// The bitmap of a single character, ready to blit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub width: u8,
    pub height: u8,
    pub data: &'static [u8],
}

impl Font {
    /// Glyph height in pixels.
    pub fn height(&self) -> u16 {
        u16::from(self.height_pages) * 8
    }

    /// Look up the glyph for `c`, if the font has one. Fonts taller than the panel have none.
    pub fn glyph(&self, c: char) -> Option<Glyph> {
        let code = u8::try_from(u32::from(c)).ok()?;
        if code < self.first || code > self.last || self.height_pages > NUM_PAGES {
            return None;
        }
        let descriptor = self.descriptors.get((code - self.first) as usize)?;
        let start = descriptor.offset as usize;
        let len = descriptor.width as usize * self.height_pages as usize;
        let data = self.bitmaps.get(start..start + len)?;
        Some(Glyph {
            width: descriptor.width,
            height: self.height_pages * 8,
            data,
        })
    }
}

/// Descriptors for a font whose glyphs all share one width and sit back to back in the blob.
const fn fixed_width_descriptors<const N: usize>(width: u8, height_pages: u8) -> [GlyphDescriptor; N] {
    let mut descriptors = [GlyphDescriptor {
        width: 0,
        offset: 0,
    }; N];
    let mut i = 0;
    while i < N {
        descriptors[i] = GlyphDescriptor {
            width,
            offset: (i * width as usize * height_pages as usize) as u16,
        };
        i += 1;
    }
    descriptors
}

const FONT_5X8_GLYPHS: usize = 96;

static FONT_5X8_DESCRIPTORS: [GlyphDescriptor; FONT_5X8_GLYPHS] = fixed_width_descriptors(5, 1);

#[cfg_attr(rustfmt, rustfmt_skip)]
static FONT_5X8_BITMAPS: [u8; FONT_5X8_GLYPHS * 5] = [
    0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x00, 0x5F, 0x00, 0x00, // '!'
    0x00, 0x07, 0x00, 0x07, 0x00, // '"'
    0x14, 0x7F, 0x14, 0x7F, 0x14, // '#'
    0x24, 0x2A, 0x7F, 0x2A, 0x12, // '$'
    0x23, 0x13, 0x08, 0x64, 0x62, // '%'
    0x36, 0x49, 0x55, 0x22, 0x50, // '&'
    0x00, 0x05, 0x03, 0x00, 0x00, // '\''
    0x00, 0x1C, 0x22, 0x41, 0x00, // '('
    0x00, 0x41, 0x22, 0x1C, 0x00, // ')'
    0x14, 0x08, 0x3E, 0x08, 0x14, // '*'
    0x08, 0x08, 0x3E, 0x08, 0x08, // '+'
    0x00, 0x50, 0x30, 0x00, 0x00, // ','
    0x08, 0x08, 0x08, 0x08, 0x08, // '-'
    0x00, 0x60, 0x60, 0x00, 0x00, // '.'
    0x20, 0x10, 0x08, 0x04, 0x02, // '/'
    0x3E, 0x51, 0x49, 0x45, 0x3E, // '0'
    0x00, 0x42, 0x7F, 0x40, 0x00, // '1'
    0x42, 0x61, 0x51, 0x49, 0x46, // '2'
    0x21, 0x41, 0x45, 0x4B, 0x31, // '3'
    0x18, 0x14, 0x12, 0x7F, 0x10, // '4'
    0x27, 0x45, 0x45, 0x45, 0x39, // '5'
    0x3C, 0x4A, 0x49, 0x49, 0x30, // '6'
    0x01, 0x71, 0x09, 0x05, 0x03, // '7'
    0x36, 0x49, 0x49, 0x49, 0x36, // '8'
    0x06, 0x49, 0x49, 0x29, 0x1E, // '9'
    0x00, 0x36, 0x36, 0x00, 0x00, // ':'
    0x00, 0x56, 0x36, 0x00, 0x00, // ';'
    0x08, 0x14, 0x22, 0x41, 0x00, // '<'
    0x14, 0x14, 0x14, 0x14, 0x14, // '='
    0x00, 0x41, 0x22, 0x14, 0x08, // '>'
    0x02, 0x01, 0x51, 0x09, 0x06, // '?'
    0x32, 0x49, 0x79, 0x41, 0x3E, // '@'
    0x7E, 0x11, 0x11, 0x11, 0x7E, // 'A'
    0x7F, 0x49, 0x49, 0x49, 0x36, // 'B'
    0x3E, 0x41, 0x41, 0x41, 0x22, // 'C'
    0x7F, 0x41, 0x41, 0x22, 0x1C, // 'D'
    0x7F, 0x49, 0x49, 0x49, 0x41, // 'E'
    0x7F, 0x09, 0x09, 0x09, 0x01, // 'F'
    0x3E, 0x41, 0x49, 0x49, 0x7A, // 'G'
    0x7F, 0x08, 0x08, 0x08, 0x7F, // 'H'
    0x00, 0x41, 0x7F, 0x41, 0x00, // 'I'
    0x20, 0x40, 0x41, 0x3F, 0x01, // 'J'
    0x7F, 0x08, 0x14, 0x22, 0x41, // 'K'
    0x7F, 0x40, 0x40, 0x40, 0x40, // 'L'
    0x7F, 0x02, 0x0C, 0x02, 0x7F, // 'M'
    0x7F, 0x04, 0x08, 0x10, 0x7F, // 'N'
    0x3E, 0x41, 0x41, 0x41, 0x3E, // 'O'
    0x7F, 0x09, 0x09, 0x09, 0x06, // 'P'
    0x3E, 0x41, 0x51, 0x21, 0x5E, // 'Q'
    0x7F, 0x09, 0x19, 0x29, 0x46, // 'R'
    0x46, 0x49, 0x49, 0x49, 0x31, // 'S'
    0x01, 0x01, 0x7F, 0x01, 0x01, // 'T'
    0x3F, 0x40, 0x40, 0x40, 0x3F, // 'U'
    0x1F, 0x20, 0x40, 0x20, 0x1F, // 'V'
    0x3F, 0x40, 0x38, 0x40, 0x3F, // 'W'
    0x63, 0x14, 0x08, 0x14, 0x63, // 'X'
    0x07, 0x08, 0x70, 0x08, 0x07, // 'Y'
    0x61, 0x51, 0x49, 0x45, 0x43, // 'Z'
    0x00, 0x7F, 0x41, 0x41, 0x00, // '['
    0x02, 0x04, 0x08, 0x10, 0x20, // '\\'
    0x00, 0x41, 0x41, 0x7F, 0x00, // ']'
    0x04, 0x02, 0x01, 0x02, 0x04, // '^'
    0x40, 0x40, 0x40, 0x40, 0x40, // '_'
    0x00, 0x01, 0x02, 0x04, 0x00, // '`'
    0x20, 0x54, 0x54, 0x54, 0x78, // 'a'
    0x7F, 0x48, 0x44, 0x44, 0x38, // 'b'
    0x38, 0x44, 0x44, 0x44, 0x20, // 'c'
    0x38, 0x44, 0x44, 0x48, 0x7F, // 'd'
    0x38, 0x54, 0x54, 0x54, 0x18, // 'e'
    0x08, 0x7E, 0x09, 0x01, 0x02, // 'f'
    0x0C, 0x52, 0x52, 0x52, 0x3E, // 'g'
    0x7F, 0x08, 0x04, 0x04, 0x78, // 'h'
    0x00, 0x44, 0x7D, 0x40, 0x00, // 'i'
    0x20, 0x40, 0x44, 0x3D, 0x00, // 'j'
    0x7F, 0x10, 0x28, 0x44, 0x00, // 'k'
    0x00, 0x41, 0x7F, 0x40, 0x00, // 'l'
    0x7C, 0x04, 0x18, 0x04, 0x78, // 'm'
    0x7C, 0x08, 0x04, 0x04, 0x78, // 'n'
    0x38, 0x44, 0x44, 0x44, 0x38, // 'o'
    0x7C, 0x14, 0x14, 0x14, 0x08, // 'p'
    0x08, 0x14, 0x14, 0x18, 0x7C, // 'q'
    0x7C, 0x08, 0x04, 0x04, 0x08, // 'r'
    0x48, 0x54, 0x54, 0x54, 0x20, // 's'
    0x04, 0x3F, 0x44, 0x40, 0x20, // 't'
    0x3C, 0x40, 0x40, 0x20, 0x7C, // 'u'
    0x1C, 0x20, 0x40, 0x20, 0x1C, // 'v'
    0x3C, 0x40, 0x30, 0x40, 0x3C, // 'w'
    0x44, 0x28, 0x10, 0x28, 0x44, // 'x'
    0x0C, 0x50, 0x50, 0x50, 0x3C, // 'y'
    0x44, 0x64, 0x54, 0x4C, 0x44, // 'z'
    0x00, 0x08, 0x36, 0x41, 0x00, // '{'
    0x00, 0x00, 0x7F, 0x00, 0x00, // '|'
    0x00, 0x41, 0x36, 0x08, 0x00, // '}'
    0x10, 0x08, 0x08, 0x10, 0x08, // '~'
    0x78, 0x46, 0x41, 0x46, 0x78, // DEL
];

/// The built-in 5x8 ASCII font covering 0x20 (space) to 0x7F. With the blank leading column added
/// by the text renderer each character occupies a 6x8 cell.
pub static FONT_5X8: Font = Font {
    first: 0x20,
    last: 0x7F,
    height_pages: 1,
    descriptors: &FONT_5X8_DESCRIPTORS,
    bitmaps: &FONT_5X8_BITMAPS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_font_covers_printable_ascii() {
        assert_eq!(FONT_5X8.height(), 8);
        for c in ' '..='~' {
            let glyph = FONT_5X8.glyph(c).unwrap();
            assert_eq!(glyph.width, 5);
            assert_eq!(glyph.data.len(), 5);
        }
    }

    #[test]
    fn glyph_bitmaps() {
        assert_eq!(FONT_5X8.glyph(' ').unwrap().data, &[0, 0, 0, 0, 0]);
        assert_eq!(FONT_5X8.glyph('!').unwrap().data, &[0x00, 0x00, 0x5F, 0x00, 0x00]);
        assert_eq!(FONT_5X8.glyph('A').unwrap().data, &[0x7E, 0x11, 0x11, 0x11, 0x7E]);
    }

    #[test]
    fn unsupported_characters() {
        assert!(FONT_5X8.glyph('\n').is_none());
        assert!(FONT_5X8.glyph('\u{80}').is_none());
        assert!(FONT_5X8.glyph('é').is_none());
        assert!(FONT_5X8.glyph('€').is_none());
    }

    #[test]
    fn variable_width_lookup() {
        static DESCRIPTORS: [GlyphDescriptor; 2] = [
            GlyphDescriptor { width: 1, offset: 0 },
            GlyphDescriptor { width: 3, offset: 2 },
        ];
        static BITMAPS: [u8; 8] = [0xAA, 0xBB, 1, 2, 3, 4, 5, 6];
        let font = Font {
            first: b'a',
            last: b'b',
            height_pages: 2,
            descriptors: &DESCRIPTORS,
            bitmaps: &BITMAPS,
        };
        assert_eq!(font.glyph('a').unwrap().data, &[0xAA, 0xBB]);
        let b = font.glyph('b').unwrap();
        assert_eq!((b.width, b.height), (3, 16));
        assert_eq!(b.data, &[1, 2, 3, 4, 5, 6]);
        assert!(font.glyph('c').is_none());
    }

    #[test]
    fn taller_than_panel() {
        static DESCRIPTORS: [GlyphDescriptor; 1] = [GlyphDescriptor { width: 1, offset: 0 }];
        static BITMAPS: [u8; 40] = [0xFF; 40];
        let font = |height_pages| Font {
            first: b'a',
            last: b'a',
            height_pages,
            descriptors: &DESCRIPTORS,
            bitmaps: &BITMAPS,
        };
        assert_eq!(font(8).glyph('a').unwrap().height, 64);
        assert!(font(9).glyph('a').is_none());
        assert_eq!(font(32).height(), 256);
        assert_eq!(font(255).height(), 2040);
        assert!(font(32).glyph('a').is_none());
    }
}
