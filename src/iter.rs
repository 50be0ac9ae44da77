use crate::metadata::Version;

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

const VERT_TIMING_COL: i16 = 6;

pub(crate) struct EncRegionIter {
    r: i16,
    c: i16,
    width: i16,
}

impl EncRegionIter {
    pub const fn new(version: Version) -> Self {
        let w = version.width();
        Self { r: w - 1, c: w - 1, width: w }
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);
    fn next(&mut self) -> Option<Self::Item> {
        let adjusted_col = if self.c <= VERT_TIMING_COL { self.c + 1 } else { self.c };
        if self.c < 0 {
            return None;
        }
        let res = (self.r, self.c);
        let col_type = (self.width - adjusted_col) % 4;
        match col_type {
            2 if self.r > 0 => {
                self.r -= 1;
                self.c += 1;
            }
            0 if self.r < self.width - 1 => {
                self.r += 1;
                self.c += 1;
            }
            0 | 2 if self.c == VERT_TIMING_COL + 1 => {
                self.c -= 2;
            }
            _ => {
                self.c -= 1;
            }
        }
        Some(res)
    }
}

#[cfg(test)]
mod enc_region_iter_tests {
    use std::collections::HashSet;

    use super::{EncRegionIter, VERT_TIMING_COL};
    use crate::metadata::Version;

    #[test]
    fn test_zigzag_start() {
        let coords = EncRegionIter::new(Version::new(1)).take(6).collect::<Vec<_>>();
        assert_eq!(coords, vec![(20, 20), (20, 19), (19, 20), (19, 19), (18, 20), (18, 19)]);
    }

    #[test]
    fn test_direction_flips_at_top() {
        let coords = EncRegionIter::new(Version::new(1)).collect::<Vec<_>>();
        let top = coords.iter().position(|&p| p == (0, 20)).unwrap();
        assert_eq!(&coords[top..top + 4], [(0, 20), (0, 19), (0, 18), (0, 17)]);
        assert_eq!(coords[top + 4], (1, 18));
    }

    #[test]
    fn test_covers_all_but_timing_column() {
        for v in [1, 2, 7] {
            let version = Version::new(v);
            let w = version.width();
            let coords = EncRegionIter::new(version).collect::<Vec<_>>();
            assert_eq!(coords.len(), (w * (w - 1)) as usize);
            let unique = coords.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), coords.len());
            assert!(coords.iter().all(|&(r, c)| {
                0 <= r && r < w && 0 <= c && c < w && c != VERT_TIMING_COL
            }));
        }
    }
}
