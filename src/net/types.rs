//! JSON DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! The backend is external and loosely typed: ids arrive as `id` or `_id`,
//! numbers sometimes arrive as strings, and the mentor list comes in three
//! envelope shapes. Those quirks are absorbed here so views only ever see
//! one normalized shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Role string the backend assigns to administrators.
pub const ADMIN_ROLE: &str = "admin";

/// A signed-in user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawUser")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Open-ended role string; only [`ADMIN_ROLE`] is compared anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Wire form of [`User`]: the id may arrive as `id`, `_id`, or both.
#[derive(Deserialize)]
struct RawUser {
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar")]
    id: Option<String>,
    #[serde(default, rename = "_id", deserialize_with = "deserialize_opt_string_from_scalar")]
    underscore_id: Option<String>,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    email: String,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar")]
    name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar")]
    role: Option<String>,
}

impl TryFrom<RawUser> for User {
    type Error = String;

    fn try_from(raw: RawUser) -> Result<Self, Self::Error> {
        let id = merge_ids(raw.id, raw.underscore_id).ok_or_else(|| "missing field `id`".to_owned())?;
        Ok(Self { id, email: raw.email, name: raw.name, role: raw.role })
    }
}

impl User {
    /// Name if set, else the email address.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.email)
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Success body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Success body of `GET /api/auth/getUserData`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserDataResponse {
    pub user: User,
}

/// A mentor record from `GET /api/get-mentors`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawMentor")]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub skills: Vec<String>,
    /// Years of experience as sent (e.g. `"8"`, `8`, `"3-5"`).
    pub experience: String,
    pub location: Option<String>,
    pub hourly_rate: Option<f64>,
    pub rating: Option<f64>,
    pub availability: Option<String>,
    pub avatar: Option<String>,
    pub specialization: Option<String>,
    pub topic: Option<String>,
}

/// Wire form of [`Mentor`]. Every field is optional and nulls read as empty,
/// so one sparse record cannot fail the whole list.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMentor {
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar")]
    id: Option<String>,
    #[serde(default, rename = "_id", deserialize_with = "deserialize_opt_string_from_scalar")]
    underscore_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_from_scalar")]
    name: String,
    #[serde(default, deserialize_with = "deserialize_string_from_scalar")]
    email: String,
    #[serde(default, deserialize_with = "deserialize_string_from_scalar")]
    bio: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    skills: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_string_from_scalar")]
    experience: String,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar")]
    location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_number_from_scalar")]
    hourly_rate: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_number_from_scalar")]
    rating: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar")]
    availability: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar")]
    avatar: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar")]
    specialization: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar")]
    topic: Option<String>,
}

impl From<RawMentor> for Mentor {
    fn from(raw: RawMentor) -> Self {
        Self {
            id: merge_ids(raw.id, raw.underscore_id).unwrap_or_default(),
            name: raw.name,
            email: raw.email,
            bio: raw.bio,
            skills: raw.skills,
            experience: raw.experience,
            location: raw.location,
            hourly_rate: raw.hourly_rate,
            rating: raw.rating,
            availability: raw.availability,
            avatar: raw.avatar,
            specialization: raw.specialization,
            topic: raw.topic,
        }
    }
}

impl Mentor {
    /// Leading whole number of years in `experience`, if any.
    pub fn experience_years(&self) -> Option<u32> {
        let digits: String = self
            .experience
            .trim()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    }

    /// Uppercase first letter of the name, used for avatar placeholders.
    pub fn initial(&self) -> char {
        self.name
            .trim()
            .chars()
            .next()
            .map_or('M', |c| c.to_uppercase().next().unwrap_or(c))
    }

    /// First word of the name, used in "Connect with ..." buttons.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("Mentor")
    }
}

/// The mentor list in any of the envelopes the backend has been seen to use.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MentorListResponse {
    Bare(Vec<Mentor>),
    Wrapped { mentors: Vec<Mentor> },
    Data { data: Vec<Mentor> },
}

impl MentorListResponse {
    pub fn into_mentors(self) -> Vec<Mentor> {
        match self {
            Self::Bare(mentors) | Self::Wrapped { mentors } | Self::Data { data: mentors } => mentors,
        }
    }
}

/// Body of `POST /api/addMentor` (admin create-mentor form).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMentor {
    pub name: String,
    pub email: String,
    pub availability: String,
    pub bio: String,
    pub topic: String,
    pub password: String,
    pub experience: String,
}

/// `id` wins when it is non-blank, else `_id`.
fn merge_ids(id: Option<String>, underscore_id: Option<String>) -> Option<String> {
    id.into_iter()
        .chain(underscore_id)
        .find(|candidate| !candidate.trim().is_empty())
}

fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_opt_string_from_scalar(deserializer)?.unwrap_or_default())
}

fn deserialize_opt_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        serde_json::Value::Null => Ok(None),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

/// Numbers that may arrive as JSON numbers or numeric strings. Blank or
/// non-numeric strings read as absent.
fn deserialize_opt_number_from_scalar<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(n) => Ok(n.as_f64()),
        serde_json::Value::String(s) => Ok(s.trim().parse::<f64>().ok()),
        serde_json::Value::Null => Ok(None),
        _ => Err(D::Error::custom("expected number or numeric string")),
    }
}

fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
