use crate::Availability;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub desc: String,
    pub generation_introduced: u32,
    pub availability: Availability,
}
