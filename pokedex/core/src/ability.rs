#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub name: String,
    pub desc: Option<String>,
    pub short_desc: String,
}

impl Ability {
    pub fn description(&self) -> &str {
        self.desc
            .as_deref()
            .filter(|desc| !desc.is_empty())
            .unwrap_or(&self.short_desc)
    }
}
