use serde::{Deserialize, Serialize};

/// The fixed set of spending categories. The persisted snapshot and the
/// per-category breakdown both assume exactly these five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Entertainment,
    Bills,
    Shopping,
    Other,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Entertainment,
            Self::Bills,
            Self::Shopping,
            Self::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }

    /// Case-insensitive lookup; `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<Category> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "entertainment" => Some(Self::Entertainment),
            "bills" => Some(Self::Bills),
            "shopping" => Some(Self::Shopping),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
