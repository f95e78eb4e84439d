//! Fixed label vocabulary: gender and status categories.

use crate::AnnotatorError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// All options in display order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Name written to the TSV file.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Noble,
    Warrior,
    Incarnation,
    Commoner,
}

impl Status {
    /// All options in display order; position + 1 is the shortcut digit.
    pub const ALL: [Status; 4] = [
        Status::Noble,
        Status::Warrior,
        Status::Incarnation,
        Status::Commoner,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Noble => "noble",
            Status::Warrior => "warrior",
            Status::Incarnation => "incarnation",
            Status::Commoner => "commoner",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Status::Noble => "Noble",
            Status::Warrior => "Warrior",
            Status::Incarnation => "Incarnation",
            Status::Commoner => "Commoner",
        }
    }

    /// 1-based shortcut digit.
    pub fn shortcut(self) -> usize {
        Status::ALL
            .iter()
            .position(|s| *s == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }

    /// Selector caption, e.g. `"2: Warrior"`.
    pub fn option_label(self) -> String {
        format!("{}: {}", self.shortcut(), self.display_name())
    }

    /// Status for a 1-based shortcut digit.
    pub fn from_shortcut(digit: usize) -> Option<Status> {
        digit.checked_sub(1).and_then(|i| Status::ALL.get(i)).copied()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AnnotatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| AnnotatorError::UnknownLabel {
                kind: "gender",
                value: s.to_string(),
            })
    }
}

impl FromStr for Status {
    type Err = AnnotatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| AnnotatorError::UnknownLabel {
                kind: "status",
                value: s.to_string(),
            })
    }
}

/// The (gender, status) pair assigned to one image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LabelPair {
    pub gender: Gender,
    pub status: Status,
}

impl LabelPair {
    pub fn new(gender: Gender, status: Status) -> Self {
        Self { gender, status }
    }

    /// Apply a single-character shortcut (`m`, `f`, `1`..`4`, case-insensitive).
    /// Returns false and leaves the pair untouched for any other key.
    pub fn apply_key(&mut self, key: char) -> bool {
        match key.to_ascii_lowercase() {
            'm' => self.gender = Gender::Male,
            'f' => self.gender = Gender::Female,
            c => match c
                .to_digit(10)
                .and_then(|d| Status::from_shortcut(d as usize))
            {
                Some(status) => self.status = status,
                None => return false,
            },
        }
        true
    }
}
