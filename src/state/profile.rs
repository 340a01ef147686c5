//! Mentee profile model.
//!
//! The profile is view-local: seeded from the signed-in user and kept as a
//! per-user draft in browser storage. There is no backend endpoint for it.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// Which tag list an edit applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileList {
    Skills,
    Goals,
    Interests,
}

impl ProfileList {
    pub fn title(self) -> &'static str {
        match self {
            Self::Skills => "Skills",
            Self::Goals => "Learning Goals",
            Self::Interests => "Interests",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Skills => "Add a skill",
            Self::Goals => "Add a goal",
            Self::Interests => "Add an interest",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenteeProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl MenteeProfile {
    /// Fresh profile for `user`.
    pub fn for_user(user: &User) -> Self {
        Self { name: user.display_name().to_owned(), email: user.email.clone(), ..Self::default() }
    }

    pub fn list(&self, which: ProfileList) -> &[String] {
        match which {
            ProfileList::Skills => &self.skills,
            ProfileList::Goals => &self.goals,
            ProfileList::Interests => &self.interests,
        }
    }

    fn list_mut(&mut self, which: ProfileList) -> &mut Vec<String> {
        match which {
            ProfileList::Skills => &mut self.skills,
            ProfileList::Goals => &mut self.goals,
            ProfileList::Interests => &mut self.interests,
        }
    }

    /// Add a trimmed entry. Blank and duplicate entries are rejected.
    pub fn add(&mut self, which: ProfileList, entry: &str) -> bool {
        let entry = entry.trim();
        let list = self.list_mut(which);
        if entry.is_empty() || list.iter().any(|e| e == entry) {
            return false;
        }
        list.push(entry.to_owned());
        true
    }

    pub fn remove(&mut self, which: ProfileList, entry: &str) {
        self.list_mut(which).retain(|e| e != entry);
    }

    /// Uppercase first letter of the name for the avatar placeholder.
    pub fn initial(&self) -> char {
        self.name
            .trim()
            .chars()
            .next()
            .map_or('?', |c| c.to_uppercase().next().unwrap_or(c))
    }
}
