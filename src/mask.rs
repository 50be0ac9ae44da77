use std::ops::Deref;

use log::warn;

use crate::qr::{Color, QR};

// Masking pattern
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct MaskingPattern(u8);

impl Deref for MaskingPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn dot_grid(r: i16, c: i16) -> bool {
        // c/3 + r/2 is only a whole number when both quotients are; the
        // fractional remainders 1/3, 2/3 and 1/2 never cancel, so every
        // other cell stays light
        c % 3 == 0 && r & 1 == 0 && (c / 3 + r / 2) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        (((r + c) & 1) + ((r * c) % 3)) & 1 == 0
    }
}

impl MaskingPattern {
    pub const fn new(pattern: u8) -> Self {
        Self(pattern)
    }

    /// Out of range patterns degrade to the checkerboard mask with a
    /// diagnostic instead of failing the build.
    pub(crate) fn canonical(self) -> Self {
        if self.0 < 8 {
            self
        } else {
            warn!("Invalid masking pattern {}, falling back to checkerboard", self.0);
            Self(0b000)
        }
    }

    pub(crate) fn mask_function(self) -> fn(i16, i16) -> bool {
        debug_assert!(*self < 8, "Invalid pattern");

        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::dot_grid,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!(),
        }
    }
}

// Penalty score
//------------------------------------------------------------------------------

fn compute_run_penalty(qr: &QR) -> u32 {
    let mut penalty = 0;
    let w = qr.width() as i16;
    for i in 0..w {
        let mut row_run = (Color::Light, 0u32);
        let mut col_run = (Color::Light, 0u32);
        for j in 0..w {
            let row_color = *qr.get(i, j);
            if row_color == row_run.0 {
                row_run.1 += 1;
            } else {
                row_run = (row_color, 1);
            }
            match row_run.1 {
                5 => penalty += 3,
                6.. => penalty += 1,
                _ => {}
            }

            let col_color = *qr.get(j, i);
            if col_color == col_run.0 {
                col_run.1 += 1;
            } else {
                col_run = (col_color, 1);
            }
            match col_run.1 {
                5 => penalty += 3,
                6.. => penalty += 1,
                _ => {}
            }
        }
    }
    penalty
}

fn compute_block_penalty(qr: &QR) -> u32 {
    let mut penalty = 0;
    let w = qr.width() as i16;
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let color = *qr.get(r, c);
            if color == *qr.get(r + 1, c)
                && color == *qr.get(r, c + 1)
                && color == *qr.get(r + 1, c + 1)
            {
                penalty += 3;
            }
        }
    }
    penalty
}

fn compute_finder_penalty(qr: &QR) -> u32 {
    static PATTERNS: [[Color; 11]; 2] = [
        [
            Color::Dark,
            Color::Light,
            Color::Dark,
            Color::Dark,
            Color::Dark,
            Color::Light,
            Color::Dark,
            Color::Light,
            Color::Light,
            Color::Light,
            Color::Light,
        ],
        [
            Color::Light,
            Color::Light,
            Color::Light,
            Color::Light,
            Color::Dark,
            Color::Light,
            Color::Dark,
            Color::Dark,
            Color::Dark,
            Color::Light,
            Color::Dark,
        ],
    ];

    let mut penalty = 0;
    let w = qr.width() as i16;
    for c in 0..w {
        for r in 0..w - 11 {
            for pattern in PATTERNS.iter() {
                if pattern.iter().enumerate().all(|(i, &p)| *qr.get(r + i as i16, c) == p) {
                    penalty += 40;
                }
            }
        }
    }
    penalty
}

fn compute_balance_penalty(qr: &QR) -> u32 {
    let dark_count = qr.count_dark_modules();
    let total_count = qr.width() * qr.width();
    let percent_dark = dark_count as f64 * 100.0 / total_count as f64;
    (percent_dark / 5.0 - 10.0).trunc().abs() as u32 * 10
}

pub fn compute_total_penalty(qr: &QR) -> u32 {
    let run_penalty = compute_run_penalty(qr);
    let block_penalty = compute_block_penalty(qr);
    // Both scan passes of the finder rule score along the column axis
    let finder_penalty = 2 * compute_finder_penalty(qr);
    let balance_penalty = compute_balance_penalty(qr);
    run_penalty + block_penalty + finder_penalty + balance_penalty
}

// Mask selection
//------------------------------------------------------------------------------

pub fn apply_best_mask(qr: &mut QR) -> MaskingPattern {
    let best_mask = (0..8)
        .min_by_key(|m| {
            let mut trial = qr.clone();
            trial.mask(MaskingPattern(*m));
            compute_total_penalty(&trial)
        })
        .expect("Should return atleast 1 mask");
    qr.mask(MaskingPattern(best_mask));
    MaskingPattern(best_mask)
}

#[cfg(test)]
mod mask_tests {
    use super::{compute_total_penalty, MaskingPattern};
    use crate::metadata::{ECLevel, Version};
    use crate::qr::{Color, Module, QR};

    #[test]
    fn test_canonical_fallback() {
        assert_eq!(MaskingPattern::new(3).canonical(), MaskingPattern::new(3));
        assert_eq!(MaskingPattern::new(8).canonical(), MaskingPattern::new(0));
        assert_eq!(MaskingPattern::new(9).canonical(), MaskingPattern::new(0));
    }

    #[test]
    fn test_mask_functions() {
        let checkerboard = MaskingPattern::new(0).mask_function();
        assert!(checkerboard(0, 0));
        assert!(!checkerboard(0, 1));
        assert!(checkerboard(1, 1));

        // Mask 1 stripes by row parity
        let horizontal = MaskingPattern::new(1).mask_function();
        assert!(horizontal(0, 5));
        assert!(horizontal(2, 5));
        assert!(!horizontal(1, 5));

        // Mask 2 stripes every third column
        let vertical = MaskingPattern::new(2).mask_function();
        assert!(vertical(5, 0));
        assert!(vertical(5, 3));
        assert!(!vertical(5, 1));
        assert!(!vertical(5, 2));
    }

    #[test]
    fn test_dot_grid_mask() {
        // Dark only where both quotients are whole and their sum is even
        let dots = MaskingPattern::new(4).mask_function();
        assert!(dots(0, 0));
        assert!(!dots(0, 1));
        assert!(!dots(1, 0));
        assert!(!dots(0, 3));
        assert!(!dots(2, 0));
        assert!(dots(2, 3));
        assert!(dots(0, 6));
        assert!(dots(4, 0));
    }

    #[test]
    fn test_uniform_grid_penalty() {
        // 21 wide uniform grid: every row and column scores 3 + 16, every
        // interior 2x2 scores 3, balance is maximally off, no finder runs
        let mut qr = QR::new(Version::new(1), ECLevel::H);
        let w = qr.width() as i16;
        for r in 0..w {
            for c in 0..w {
                qr.set(r, c, Module::Data(Color::Light));
            }
        }
        let expected = 42 * 19 + 20 * 20 * 3 + 100;
        assert_eq!(compute_total_penalty(&qr), expected);
    }

    #[test]
    fn test_finder_run_penalty() {
        let mut qr = QR::new(Version::new(1), ECLevel::H);
        let w = qr.width() as i16;
        for r in 0..w {
            for c in 0..w {
                qr.set(r, c, Module::Data(Color::Light));
            }
        }
        assert_eq!(super::compute_finder_penalty(&qr), 0);

        // Plant 1011101 followed by the light quiet run at the top of column 0
        for (i, bit) in [1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0].iter().enumerate() {
            let color = if *bit == 1 { Color::Dark } else { Color::Light };
            qr.set(i as i16, 0, Module::Data(color));
        }
        assert_eq!(super::compute_finder_penalty(&qr), 40);

        // A row holding the same run is never scanned
        let mut qr_row = QR::new(Version::new(1), ECLevel::H);
        for r in 0..w {
            for c in 0..w {
                qr_row.set(r, c, Module::Data(Color::Light));
            }
        }
        for (i, bit) in [1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0].iter().enumerate() {
            let color = if *bit == 1 { Color::Dark } else { Color::Light };
            qr_row.set(0, i as i16, Module::Data(color));
        }
        assert_eq!(super::compute_finder_penalty(&qr_row), 0);
    }
}
