//! Mentor directory filter and sort state.
//!
//! DESIGN
//! ======
//! The full list is fetched once per visit and held in memory; filtering is a
//! pure pass over it so the same rules back both the page and its tests.

#[cfg(test)]
#[path = "mentors_test.rs"]
mod mentors_test;

use std::cmp::Ordering;

use crate::net::types::Mentor;

/// Skill chips offered in the directory filter.
pub const FILTER_SKILLS: &[&str] = &[
    "JavaScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "C++",
    "TypeScript",
    "Angular",
    "Vue.js",
    "PHP",
    "Ruby",
    "Go",
    "AWS",
    "Docker",
    "Kubernetes",
    "Machine Learning",
    "AI",
    "Data Science",
    "DevOps",
    "Mobile Development",
    "UI/UX",
];

/// Minimum-years options: `(value, label)`.
pub const EXPERIENCE_OPTIONS: &[(u32, &str)] =
    &[(1, "1+ years"), (3, "3+ years"), (5, "5+ years"), (10, "10+ years")];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Experience,
    Rating,
}

impl SortKey {
    pub const ALL: [Self; 3] = [Self::Name, Self::Experience, Self::Rating];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Experience => "experience",
            Self::Rating => "rating",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Experience => "Experience",
            Self::Rating => "Rating",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "experience" => Self::Experience,
            "rating" => Self::Rating,
            _ => Self::Name,
        }
    }
}

/// Directory filter inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MentorFilter {
    pub search: String,
    pub selected_skills: Vec<String>,
    pub min_experience: Option<u32>,
    pub sort: SortKey,
}

impl MentorFilter {
    pub fn toggle_skill(&mut self, skill: &str) {
        if let Some(pos) = self.selected_skills.iter().position(|s| s == skill) {
            self.selected_skills.remove(pos);
        } else {
            self.selected_skills.push(skill.to_owned());
        }
    }

    pub fn is_skill_selected(&self, skill: &str) -> bool {
        self.selected_skills.iter().any(|s| s == skill)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, mentor: &Mentor) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() {
            let hit = mentor.name.to_lowercase().contains(&needle)
                || mentor.bio.to_lowercase().contains(&needle)
                || mentor.skills.iter().any(|s| s.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if !self.selected_skills.is_empty() && !self.selected_skills.iter().any(|s| mentor.skills.contains(s)) {
            return false;
        }
        if let Some(min) = self.min_experience {
            if mentor.experience_years().unwrap_or(0) < min {
                return false;
            }
        }
        true
    }

    /// Filtered and sorted copy of `mentors`.
    pub fn apply(&self, mentors: &[Mentor]) -> Vec<Mentor> {
        let mut out: Vec<Mentor> = mentors.iter().filter(|m| self.matches(m)).cloned().collect();
        out.sort_by(|a, b| compare(self.sort, a, b));
        out
    }
}

fn compare(sort: SortKey, a: &Mentor, b: &Mentor) -> Ordering {
    match sort {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Experience => b
            .experience_years()
            .unwrap_or(0)
            .cmp(&a.experience_years().unwrap_or(0)),
        SortKey::Rating => b.rating.unwrap_or(0.0).total_cmp(&a.rating.unwrap_or(0.0)),
    }
}

/// A fetched mentor list, whether a fetch is in flight, and which row is
/// being deleted.
#[derive(Clone, Debug, Default)]
pub struct MentorsState {
    pub items: Vec<Mentor>,
    pub loading: bool,
    pub deleting: Option<String>,
}

impl MentorsState {
    /// A list waiting for its first fetch.
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn loaded(&mut self, items: Vec<Mentor>) {
        self.items = items;
        self.loading = false;
    }

    /// Mark `id` as being deleted. Refused while another delete is in flight.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if self.deleting.is_some() {
            return false;
        }
        self.deleting = Some(id.to_owned());
        true
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.as_deref() == Some(id)
    }

    /// Clear the in-flight delete; drop the row when the backend removed it.
    pub fn finish_delete(&mut self, id: &str, removed: bool) {
        if removed {
            self.items.retain(|m| m.id != id);
        }
        if self.is_deleting(id) {
            self.deleting = None;
        }
    }
}

/// Result count line under the filter bar.
pub fn result_summary(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} mentors")
}

/// Parse the experience `<select>` value; anything but a known threshold means "any".
pub fn parse_min_experience(raw: &str) -> Option<u32> {
    let Ok(value) = raw.trim().parse::<u32>() else {
        return None;
    };
    EXPERIENCE_OPTIONS.iter().any(|(v, _)| *v == value).then_some(value)
}
