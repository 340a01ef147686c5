//! Admin dashboard state: section navigation and the create-mentor form.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::error::ApiError;
use crate::net::types::NewMentor;

/// Availability values the backend accepts for a mentor record.
pub const MENTOR_AVAILABILITY: &[&str] = &["NOT-AVAILABLE", "AVAILABLE", "PENDING"];

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";
pub const MENTOR_CREATED: &str = "Mentor created successfully!";
pub const CREATE_FAILED: &str = "Failed to create mentor.";
pub const FETCH_FAILED: &str = "Failed to fetch mentors.";
pub const DELETE_FAILED: &str = "Failed to delete mentor.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminSection {
    #[default]
    CreateMentor,
    AssignRoles,
    BookSessions,
    ViewMentors,
}

impl AdminSection {
    pub const ALL: [Self; 4] = [Self::CreateMentor, Self::AssignRoles, Self::BookSessions, Self::ViewMentors];

    pub fn label(self) -> &'static str {
        match self {
            Self::CreateMentor => "Create Mentor",
            Self::AssignRoles => "Assign Roles",
            Self::BookSessions => "Book Sessions",
            Self::ViewMentors => "View All Mentors",
        }
    }

    /// Sections without backend support render a placeholder panel.
    pub fn is_placeholder(self) -> bool {
        matches!(self, Self::AssignRoles | Self::BookSessions)
    }
}

/// Fields of the create-mentor form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewMentorField {
    Name,
    Email,
    Password,
    Topic,
    Experience,
    Availability,
    Bio,
}

impl NewMentorField {
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Email,
        Self::Password,
        Self::Topic,
        Self::Experience,
        Self::Availability,
        Self::Bio,
    ];

    pub fn get(self, form: &NewMentor) -> &str {
        match self {
            Self::Name => &form.name,
            Self::Email => &form.email,
            Self::Password => &form.password,
            Self::Topic => &form.topic,
            Self::Experience => &form.experience,
            Self::Availability => &form.availability,
            Self::Bio => &form.bio,
        }
    }

    pub fn set(self, form: &mut NewMentor, value: String) {
        let slot = match self {
            Self::Name => &mut form.name,
            Self::Email => &mut form.email,
            Self::Password => &mut form.password,
            Self::Topic => &mut form.topic,
            Self::Experience => &mut form.experience,
            Self::Availability => &mut form.availability,
            Self::Bio => &mut form.bio,
        };
        *slot = value;
    }
}

/// Every field must be non-blank before the form is sent.
///
/// # Errors
///
/// [`ALL_FIELDS_REQUIRED`] when any field is blank.
pub fn validate_new_mentor(form: &NewMentor) -> Result<(), &'static str> {
    if NewMentorField::ALL.iter().any(|f| f.get(form).trim().is_empty()) {
        return Err(ALL_FIELDS_REQUIRED);
    }
    Ok(())
}

/// Apply the backend's answer to a create request. Success clears the draft;
/// failure keeps it so the admin can correct and resend.
///
/// # Errors
///
/// The message to show when the backend refused the mentor.
pub fn apply_create_result(draft: &mut NewMentor, result: Result<(), ApiError>) -> Result<&'static str, String> {
    match result {
        Ok(()) => {
            *draft = NewMentor::default();
            Ok(MENTOR_CREATED)
        }
        Err(err) => Err(err.display_message(CREATE_FAILED)),
    }
}
