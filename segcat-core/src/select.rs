/// Inclusive range of segment names to pick out of a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Boundary {
    pub start: String,
    /// `None` selects through the last entry.
    pub end: Option<String>,
}

impl Boundary {
    pub fn new(start: impl Into<String>, end: Option<String>) -> Self {
        Self {
            start: start.into(),
            end,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scan {
    Seeking,
    Active,
    Finished,
}

/// Sorts `listing` and returns the entries from `start` through `end`,
/// both inclusive. Matching is exact. Nothing past `end` is examined.
pub fn select(mut listing: Vec<String>, boundary: &Boundary) -> Vec<String> {
    listing.sort();

    let mut picked = Vec::new();
    let mut state = Scan::Seeking;
    for name in listing {
        if state == Scan::Seeking && name == boundary.start {
            state = Scan::Active;
        }
        if state == Scan::Active {
            let last = boundary.end.as_deref() == Some(name.as_str());
            picked.push(name);
            if last {
                state = Scan::Finished;
            }
        }
        if state == Scan::Finished {
            break;
        }
    }
    picked
}
