use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Pokemon {
    pub species: String,
    pub number: i32,
    /// First dex entry served for the species.
    pub flavor: String,
    pub types: Vec<Type>,
    /// In meters.
    pub height: f64,
    /// In kilograms.
    pub weight: f64,
    pub gender: Gender,
    /// Flattened chain, closest ancestor first.
    pub preevolutions: Vec<Evolution>,
    /// Flattened chain, depth-first.
    pub evolutions: Vec<Evolution>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type(pub String);

impl Type {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gender {
    Genderless,
    /// Percentages, each in `0.0..=100.0`.
    Ratio { male: f64, female: f64 },
}

impl Gender {
    pub fn new(male: f64, female: f64) -> Self {
        if male == 0.0 && female == 0.0 {
            Self::Genderless
        } else {
            Self::Ratio { male, female }
        }
    }

    /// Parses the percentage strings served by the dex (e.g. `"87.5%"`).
    pub fn parse(male: &str, female: &str) -> Result<Self, ParseGenderError> {
        Ok(Self::new(percentage(male)?, percentage(female)?))
    }
}

fn percentage(value: &str) -> Result<f64, ParseGenderError> {
    value
        .trim()
        .trim_end_matches('%')
        .trim()
        .parse()
        .map_err(|_| ParseGenderError(value.to_owned()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGenderError(pub String);

impl fmt::Display for ParseGenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid gender percentage: {}", self.0)
    }
}

impl std::error::Error for ParseGenderError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evolution {
    pub species: String,
    pub condition: Option<Condition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Level(u32),
    Item(String),
    Special(String),
}

impl Condition {
    /// Classifies an evolution requirement as served by the dex: a bare
    /// number is a level, `use ...` names an item, anything else is free text.
    pub fn parse(condition: &str) -> Self {
        let condition = condition.trim();

        if let Ok(level) = condition.parse() {
            return Self::Level(level);
        }

        match condition.strip_prefix("use ") {
            Some(item) => Self::Item(item.to_owned()),
            None => Self::Special(condition.to_owned()),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level(level) => write!(f, "Level: {level}"),
            Self::Item(item) => write!(f, "Special Condition: use {item}"),
            Self::Special(text) => write!(f, "Special Condition: {text}"),
        }
    }
}
