use std::fmt;

use serde::{Deserialize, Serialize};

/// A course offering. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: String,
    name: String,
    credits: u32,
}

impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>, credits: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            credits,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {} credits", self.id, self.name, self.credits)
    }
}
