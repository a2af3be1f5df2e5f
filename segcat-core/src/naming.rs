use crate::config::Config;

/// Naming scheme shared by every segment in a capture directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkNaming {
    pub digits: usize,
    pub prefix: String,
    pub extension: String,
}

impl ChunkNaming {
    pub fn new(digits: usize, prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            digits,
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.digits, cfg.prefix.clone(), cfg.extension.clone())
    }

    pub fn name(&self, index: u64) -> String {
        format(index, self.digits, &self.prefix, &self.extension)
    }

    /// True when `index` needs no more than `digits` characters, i.e. its name
    /// still sorts in numeric order next to its neighbours.
    pub fn fits(&self, index: u64) -> bool {
        decimal_len(index) <= self.digits
    }
}

/// `prefix + zero-padded index + "." + extension`. Wider indices are kept whole.
pub fn format(index: u64, width: usize, prefix: &str, extension: &str) -> String {
    format!("{prefix}{index:0>width$}.{extension}")
}

fn decimal_len(mut x: u64) -> usize {
    let mut n = 1;
    while x >= 10 {
        x /= 10;
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_width() {
        assert_eq!(format(7, 9, "", "ts"), "000000007.ts");
        assert_eq!(format(1, 3, "out-", "ts"), "out-001.ts");
        assert_eq!(format(0, 1, "", "ts"), "0.ts");
    }

    #[test]
    fn wider_index_is_not_truncated() {
        assert_eq!(format(12345, 3, "out-", "ts"), "out-12345.ts");
        assert_eq!(format(999, 3, "", "ts"), "999.ts");
    }

    #[test]
    fn padded_part_ends_with_decimal_index() {
        for width in 1..12 {
            for index in [0u64, 1, 9, 10, 99, 100, 4096, 123_456_789, u64::MAX] {
                let name = format(index, width, "", "x");
                let stem = name.strip_suffix(".x").unwrap();
                assert!(stem.len() >= width);
                assert!(stem.ends_with(&index.to_string()));
            }
        }
    }

    #[test]
    fn sort_order_matches_numeric_order_within_width() {
        let naming = ChunkNaming::new(3, "out-", "ts");
        let mut names: Vec<String> = (0..1000u64).rev().map(|i| naming.name(i)).collect();
        names.sort();
        let expected: Vec<String> = (0..1000u64).map(|i| naming.name(i)).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn fits_tracks_digit_width() {
        let naming = ChunkNaming::new(3, "", "ts");
        assert!(naming.fits(0));
        assert!(naming.fits(999));
        assert!(!naming.fits(1000));
        assert!(ChunkNaming::new(20, "", "ts").fits(u64::MAX));
    }
}
