use std::fmt;

use serde::{Deserialize, Serialize};

/// A registered student and their current credit load.
///
/// Invariant: `current_credits` only grows through [`Student::add_credits`],
/// and the enrollment service never lets it pass `max_credits`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: String,
    name: String,
    email: String,
    #[serde(default)]
    current_credits: u32,
    max_credits: u32,
}

impl Student {
    /// Create a student with no credits taken yet.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        max_credits: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            current_credits: 0,
            max_credits,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn current_credits(&self) -> u32 {
        self.current_credits
    }

    pub fn max_credits(&self) -> u32 {
        self.max_credits
    }

    /// Credits the student would carry after taking `credits` more.
    ///
    /// Saturates instead of wrapping, so an absurd request always reads as
    /// over the limit.
    pub fn projected_credits(&self, credits: u32) -> u32 {
        self.current_credits.saturating_add(credits)
    }

    /// Whether `credits` more would still fit under the limit.
    pub fn can_take(&self, credits: u32) -> bool {
        self.projected_credits(credits) <= self.max_credits
    }

    /// Record credits from a new enrollment.
    pub fn add_credits(&mut self, credits: u32) {
        self.current_credits = self.projected_credits(credits);
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {}/{} credits",
            self.id, self.name, self.current_credits, self.max_credits
        )
    }
}
