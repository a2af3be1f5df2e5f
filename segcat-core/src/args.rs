/// Coerces a positional index argument to a `u64`.
///
/// Surrounding whitespace is ignored and a single leading `+` is accepted.
/// The value is the longest run of ASCII digits that follows; anything
/// after it is ignored. Input without a leading digit (a leading `-`
/// included) yields 0, and values past `u64::MAX` saturate.
pub fn parse_index(raw: &str) -> u64 {
    let s = raw.trim();
    let s = s.strip_prefix('+').unwrap_or(s);
    s.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

/// Index range requested on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexRange {
    pub min: u64,
    pub max: Option<u64>,
}

impl IndexRange {
    /// Absent `min` means 0, absent `max` means "through the last segment".
    pub fn from_args(min: Option<&str>, max: Option<&str>) -> Self {
        Self {
            min: min.map(parse_index).unwrap_or(0),
            max: max.map(parse_index),
        }
    }
}
