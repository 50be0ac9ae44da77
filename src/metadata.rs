use std::ops::Deref;

use crate::error::{QRError, QRResult};
use crate::mask::MaskingPattern;

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct Version(i16);

impl Deref for Version {
    type Target = i16;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Version {
    pub const fn new(version: i16) -> Self {
        debug_assert!(1 <= version && version <= 40, "Invalid version");
        Self(version)
    }

    pub const fn width(self) -> i16 {
        self.0 * 4 + 17
    }

    /// Total codewords in the encoding region, data and error correction
    /// together. Closed form over the module count less function patterns,
    /// format info, and, for version 7 and above, version info.
    pub fn total_codewords(self) -> usize {
        let v = self.0 as i32;
        let mut bits = (16 * v + 128) * v + 64;
        if v >= 2 {
            let num_align = v / 7 + 2;
            bits -= (25 * num_align - 10) * num_align - 55;
            if v >= 7 {
                bits -= 36;
            }
        }
        (bits / 8) as usize
    }

    pub fn ecc_per_block(self, ec_level: ECLevel) -> usize {
        ECC_CODEWORDS_PER_BLOCK[ec_level as usize][self.0 as usize] as usize
    }

    pub fn num_blocks(self, ec_level: ECLevel) -> usize {
        ECC_BLOCK_COUNT[ec_level as usize][self.0 as usize] as usize
    }

    /// Alignment pattern center coordinates, identical for rows and
    /// columns. Empty for version 1. Version 32 takes a fixed step, every
    /// other version spreads evenly from column 6 to the right edge.
    pub fn alignment_centers(self) -> Vec<i16> {
        let v = self.0;
        if v == 1 {
            return Vec::new();
        }
        let n = self.width();
        let num_align = (v / 7 + 2) as usize;
        let step = if v == 32 {
            26
        } else {
            let strides = num_align as i16 * 2 - 2;
            (n - 13 + strides - 1) / strides * 2
        };
        let mut centers = vec![6];
        let mut pos = n - 7;
        while centers.len() < num_align {
            centers.insert(1, pos);
            pos -= step;
        }
        centers
    }
}

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    pub(crate) fn format_bits(self) -> u32 {
        self as u32 ^ 1
    }
}

// Capacity table
//------------------------------------------------------------------------------

/// Per-level data codeword capacities, indexed by version. A level is
/// usable only if its table carries an entry per version; the stub rows
/// are rejected at construction instead of producing a corrupt symbol.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CapacityTable {
    entries: &'static [i16],
}

impl CapacityTable {
    pub fn for_level(ec_level: ECLevel) -> QRResult<Self> {
        let entries: &[i16] = match ec_level {
            ECLevel::L => &DATA_CAPACITY_L,
            ECLevel::M => &DATA_CAPACITY_M,
            ECLevel::Q => &DATA_CAPACITY_Q,
            ECLevel::H => &DATA_CAPACITY_H,
        };
        if entries.len() < 2 {
            return Err(QRError::UnsupportedLevel);
        }
        Ok(Self { entries })
    }

    /// Smallest version able to hold `char_count` characters plus the two
    /// mode and count header codewords.
    pub fn fit_version(&self, char_count: usize) -> QRResult<Version> {
        let needed = char_count + 2;
        self.entries
            .iter()
            .position(|&cap| cap > 0 && needed <= cap as usize)
            .map(|v| Version::new(v as i16))
            .ok_or(QRError::DataTooLong)
    }

    pub fn data_codewords(&self, version: Version) -> usize {
        self.entries[*version as usize] as usize
    }
}

// Format & version info
//------------------------------------------------------------------------------

/// 15-bit format word: level code and mask index protected by a 10-bit
/// BCH remainder, XOR-ed with the fixed mask constant.
pub(crate) fn format_info(ec_level: ECLevel, pattern: MaskingPattern) -> u32 {
    let data = (ec_level.format_bits() << 3) | *pattern as u32;
    let mut rem = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * 0x537);
    }
    ((data << 10) | rem) ^ 21522
}

/// 18-bit version word: version number protected by a 12-bit BCH
/// remainder. Only drawn for version 7 and above.
pub(crate) fn version_info(version: Version) -> u32 {
    debug_assert!(matches!(*version, 7..=40), "Invalid version");

    let v = *version as u32;
    let mut rem = v;
    for _ in 0..12 {
        rem = (rem << 1) ^ ((rem >> 11) * 0x1F25);
    }
    (v << 12) | rem
}

// Global constants
//------------------------------------------------------------------------------

pub(crate) const FORMAT_INFO_BIT_LEN: usize = 15;

pub(crate) const FORMAT_INFO_COORDS_MAIN: [(i16, i16); 15] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

pub(crate) const FORMAT_INFO_COORDS_SIDE: [(i16, i16); 15] = [
    (-1, 8),
    (-2, 8),
    (-3, 8),
    (-4, 8),
    (-5, 8),
    (-6, 8),
    (-7, 8),
    (8, -8),
    (8, -7),
    (8, -6),
    (8, -5),
    (8, -4),
    (8, -3),
    (8, -2),
    (8, -1),
];

pub(crate) const VERSION_INFO_BIT_LEN: usize = 18;

pub(crate) const VERSION_INFO_COORDS_BL: [(i16, i16); 18] = [
    (-9, 5),
    (-10, 5),
    (-11, 5),
    (-9, 4),
    (-10, 4),
    (-11, 4),
    (-9, 3),
    (-10, 3),
    (-11, 3),
    (-9, 2),
    (-10, 2),
    (-11, 2),
    (-9, 1),
    (-10, 1),
    (-11, 1),
    (-9, 0),
    (-10, 0),
    (-11, 0),
];

pub(crate) const VERSION_INFO_COORDS_TR: [(i16, i16); 18] = [
    (5, -9),
    (5, -10),
    (5, -11),
    (4, -9),
    (4, -10),
    (4, -11),
    (3, -9),
    (3, -10),
    (3, -11),
    (2, -9),
    (2, -10),
    (2, -11),
    (1, -9),
    (1, -10),
    (1, -11),
    (0, -9),
    (0, -10),
    (0, -11),
];

static DATA_CAPACITY_L: [i16; 1] = [0];

static DATA_CAPACITY_M: [i16; 1] = [0];

static DATA_CAPACITY_Q: [i16; 1] = [0];

static DATA_CAPACITY_H: [i16; 21] = [
    -1, 9, 16, 26, 36, 46, 60, 66, 86, 100, 122, 140, 158, 180, 197, 223, 253, 283, 313, 341, 385,
];

static ECC_CODEWORDS_PER_BLOCK: [[i16; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ],
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
];

static ECC_BLOCK_COUNT: [[i16; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ],
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ],
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ],
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ],
];
