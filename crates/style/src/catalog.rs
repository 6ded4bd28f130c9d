//! The fixed set of font variants the target renderer has built in.
//!
//! Row order is significant: every lookup scans first to last and takes the
//! first qualifying row, so the table doubles as the fallback precedence.

/// One renderable (face, size, bold, italic) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleRow {
    pub face: u8,
    pub size: u8,
    pub bold: bool,
    pub italic: bool,
}

impl StyleRow {
    const fn new(face: u8, size: u8, bold: u8, italic: u8) -> Self {
        Self {
            face,
            size,
            bold: bold != 0,
            italic: italic != 0,
        }
    }

    pub fn size_pt(&self) -> f32 {
        f32::from(self.size)
    }

    pub fn matches_exactly(&self, face: u8, size: f32, bold: bool, italic: bool) -> bool {
        self.face == face && self.size_pt() == size && self.bold == bold && self.italic == italic
    }

    /// True when this row is at least as large as `size`.
    pub fn size_at_least(&self, size: f32) -> bool {
        self.size_pt() >= size
    }
}

/// Row used when nothing else matches: face 0, 10pt, regular.
pub const DEFAULT_STYLE_ROW: usize = 2;

#[rustfmt::skip]
pub static STYLE_CATALOG: [StyleRow; 61] = [
    //             face size bold italic
    StyleRow::new(0,   6,   0,   0), // 00
    StyleRow::new(0,   8,   0,   0), // 01
    StyleRow::new(0,  10,   0,   0), // 02
    StyleRow::new(0,  12,   0,   0), // 03
    StyleRow::new(0,  14,   0,   0), // 04
    StyleRow::new(0,  18,   0,   0), // 05
    StyleRow::new(0,   6,   1,   0), // 06
    StyleRow::new(0,   8,   1,   0), // 07
    StyleRow::new(0,  10,   1,   0), // 08
    StyleRow::new(0,  12,   1,   0), // 09
    StyleRow::new(0,  14,   1,   0), // 10
    StyleRow::new(0,  18,   1,   0), // 11
    StyleRow::new(0,   6,   0,   1), // 12
    StyleRow::new(0,   8,   0,   1), // 13
    StyleRow::new(0,  10,   0,   1), // 14
    StyleRow::new(0,  12,   0,   1), // 15
    StyleRow::new(0,  14,   0,   1), // 16
    StyleRow::new(0,  18,   0,   1), // 17
    StyleRow::new(0,   6,   1,   1), // 18
    StyleRow::new(0,   8,   1,   1), // 19
    StyleRow::new(0,  10,   1,   1), // 20
    StyleRow::new(0,  12,   1,   1), // 21
    StyleRow::new(0,  14,   1,   1), // 22
    StyleRow::new(0,  18,   1,   1), // 23
    StyleRow::new(1,   6,   0,   0), // 24
    StyleRow::new(1,   8,   0,   0), // 25
    StyleRow::new(1,  10,   0,   0), // 26
    StyleRow::new(1,  12,   0,   0), // 27
    StyleRow::new(1,  14,   0,   0), // 28
    StyleRow::new(1,  18,   0,   0), // 29
    StyleRow::new(1,   6,   1,   0), // 30
    StyleRow::new(1,   8,   1,   0), // 31
    StyleRow::new(1,  10,   1,   0), // 32
    StyleRow::new(1,  12,   1,   0), // 33
    StyleRow::new(1,  14,   1,   0), // 34
    StyleRow::new(1,  18,   1,   0), // 35
    StyleRow::new(1,   6,   0,   1), // 36
    StyleRow::new(1,   8,   0,   1), // 37
    StyleRow::new(1,  10,   0,   1), // 38
    StyleRow::new(1,  12,   0,   1), // 39
    StyleRow::new(1,  14,   0,   1), // 40
    StyleRow::new(1,  18,   0,   1), // 41
    StyleRow::new(2,   8,   0,   0), // 42
    StyleRow::new(2,  10,   0,   0), // 43
    StyleRow::new(2,  12,   0,   0), // 44
    StyleRow::new(2,  14,   0,   0), // 45
    StyleRow::new(2,  12,   0,   0), // 46 was 18pt, shadowed by 44
    StyleRow::new(3,   8,   0,   0), // 47
    StyleRow::new(3,  10,   0,   0), // 48
    StyleRow::new(3,  12,   0,   0), // 49
    StyleRow::new(4,  12,   0,   0), // 50
    StyleRow::new(0,   9,   0,   0), // 51
    StyleRow::new(0,   9,   1,   0), // 52
    StyleRow::new(0,   9,   0,   1), // 53
    StyleRow::new(0,   9,   1,   1), // 54
    StyleRow::new(1,   9,   0,   0), // 55
    StyleRow::new(1,   9,   1,   0), // 56
    StyleRow::new(1,   9,   1,   1), // 57
    StyleRow::new(4,  10,   0,   0), // 58
    StyleRow::new(5,  10,   0,   0), // 59
    StyleRow::new(5,  12,   0,   0), // 60
];
