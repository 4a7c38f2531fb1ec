//! Age buckets used as classification labels.
use std::fmt;

/// Coarse age category of an author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgeBucket {
    Teens,
    Twenties,
    Thirties,
}

impl AgeBucket {
    pub const ALL: [AgeBucket; 3] = [AgeBucket::Teens, AgeBucket::Twenties, AgeBucket::Thirties];

    /// Bucket an age. No bounds checking is done: ages come from the corpus.
    pub fn from_age(age: i32) -> Self {
        if age < 20 {
            AgeBucket::Teens
        } else if age < 30 {
            AgeBucket::Twenties
        } else {
            AgeBucket::Thirties
        }
    }

    /// Directory name of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBucket::Teens => "10s",
            AgeBucket::Twenties => "20s",
            AgeBucket::Thirties => "30s",
        }
    }
}

impl From<i32> for AgeBucket {
    fn from(age: i32) -> Self {
        Self::from_age(age)
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
