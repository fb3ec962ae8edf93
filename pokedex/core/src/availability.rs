/// Whether an entry can still be obtained in the current generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    Current,
    Past,
}

impl Availability {
    /// Reads the non-standard marker of a record. Only `Past` flags an entry
    /// as legacy; every other marker still counts as available.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some("Past") => Self::Past,
            _ => Self::Current,
        }
    }

    pub fn is_past(self) -> bool {
        self == Self::Past
    }
}
