//! "Become a mentor" application wizard.
//!
//! DESIGN
//! ======
//! Five linear steps. Which fields each step requires lives in one table,
//! [`VALIDATION_RULES`], so step transitions can be tested without any
//! rendering. `next_step` only advances when every rule of the current step
//! passes; failing fields get a message each.

#[cfg(test)]
#[path = "mentor_form_test.rs"]
mod mentor_form_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub const INDUSTRIES: &[&str] = &[
    "Software Development",
    "Data Science",
    "Machine Learning",
    "Web Development",
    "Mobile Development",
    "DevOps",
    "Cloud Computing",
    "Cybersecurity",
    "Product Management",
    "UI/UX Design",
    "Digital Marketing",
    "Business",
    "Finance",
    "Healthcare",
    "Education",
    "Other",
];

pub const SKILL_OPTIONS: &[&str] = &[
    "JavaScript", "Python", "React", "Node.js", "Java", "C++", "TypeScript", "Angular", "Vue.js", "PHP", "Ruby",
    "Go", "Rust", "Swift", "Kotlin", "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Terraform", "Jenkins", "Git",
    "MongoDB", "PostgreSQL", "MySQL", "Redis", "Elasticsearch", "TensorFlow", "PyTorch", "Scikit-learn", "Pandas",
    "NumPy", "Tableau", "Power BI", "Figma", "Adobe XD", "Sketch", "Agile", "Scrum", "Kanban",
];

pub const MENTORSHIP_AREAS: &[&str] = &[
    "Career Guidance",
    "Technical Skills",
    "Interview Preparation",
    "Project Management",
    "Leadership Development",
    "Communication Skills",
    "Problem Solving",
    "Code Review",
    "System Design",
    "Architecture",
    "Testing",
    "Performance Optimization",
    "Security Best Practices",
    "DevOps Practices",
    "Cloud Migration",
    "Startup Advice",
];

/// `(value, label)` pairs for the select inputs.
pub const EXPERIENCE_LEVELS: &[(&str, &str)] = &[
    ("1-2", "1-2 years"),
    ("3-5", "3-5 years"),
    ("6-10", "6-10 years"),
    ("11-15", "11-15 years"),
    ("15+", "15+ years"),
];
pub const AVAILABILITY_OPTIONS: &[(&str, &str)] = &[
    ("1-5", "1-5 hours/week"),
    ("5-10", "5-10 hours/week"),
    ("10-15", "10-15 hours/week"),
    ("15+", "15+ hours/week"),
];
pub const MAX_MENTEE_OPTIONS: &[(&str, &str)] =
    &[("1-2", "1-2 mentees"), ("3-5", "3-5 mentees"), ("6-10", "6-10 mentees"), ("10+", "10+ mentees")];

static EMAIL_SHAPE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").ok());

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    #[default]
    Personal,
    Professional,
    Skills,
    Mentorship,
    Terms,
}

impl Step {
    pub const ALL: [Self; 5] = [Self::Personal, Self::Professional, Self::Skills, Self::Mentorship, Self::Terms];

    /// 1-based position shown in the progress bar.
    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Professional => "Professional Background",
            Self::Skills => "Skills & Expertise",
            Self::Mentorship => "Mentorship Details",
            Self::Terms => "Terms & Conditions",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Personal => Self::Professional,
            Self::Professional => Self::Skills,
            Self::Skills => Self::Mentorship,
            Self::Mentorship | Self::Terms => Self::Terms,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Personal | Self::Professional => Self::Personal,
            Self::Skills => Self::Professional,
            Self::Mentorship => Self::Skills,
            Self::Terms => Self::Mentorship,
        }
    }

    pub fn is_last(self) -> bool {
        self == Self::Terms
    }
}

/// Every input of the application form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Location,
    Linkedin,
    Github,
    CurrentRole,
    Company,
    YearsOfExperience,
    Industry,
    Specialization,
    Skills,
    Certifications,
    Languages,
    MentorshipAreas,
    Availability,
    HourlyRate,
    MaxMentees,
    Bio,
    Motivation,
    SuccessStories,
    AgreeToTerms,
    AgreeToPrivacy,
    AgreeToCodeOfConduct,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Non-blank text, non-empty list, or a ticked box.
    Required,
    /// Text shaped like `x@y.z`.
    Email,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub step: Step,
    pub field: Field,
    pub rule: Rule,
    pub message: &'static str,
}

const fn rule(step: Step, field: Field, rule: Rule, message: &'static str) -> FieldRule {
    FieldRule { step, field, rule, message }
}

/// Transition guards. For one field the first failing rule supplies the message.
pub const VALIDATION_RULES: &[FieldRule] = &[
    rule(Step::Personal, Field::FirstName, Rule::Required, "First name is required"),
    rule(Step::Personal, Field::LastName, Rule::Required, "Last name is required"),
    rule(Step::Personal, Field::Email, Rule::Required, "Email is required"),
    rule(Step::Personal, Field::Email, Rule::Email, "Email is invalid"),
    rule(Step::Personal, Field::Phone, Rule::Required, "Phone number is required"),
    rule(Step::Personal, Field::Location, Rule::Required, "Location is required"),
    rule(Step::Professional, Field::CurrentRole, Rule::Required, "Current role is required"),
    rule(Step::Professional, Field::Company, Rule::Required, "Company is required"),
    rule(Step::Professional, Field::YearsOfExperience, Rule::Required, "Years of experience is required"),
    rule(Step::Professional, Field::Industry, Rule::Required, "Industry is required"),
    rule(Step::Professional, Field::Specialization, Rule::Required, "Specialization is required"),
    rule(Step::Skills, Field::Skills, Rule::Required, "Please select at least one skill"),
    rule(Step::Skills, Field::MentorshipAreas, Rule::Required, "Please select at least one mentorship area"),
    rule(Step::Mentorship, Field::Bio, Rule::Required, "Bio is required"),
    rule(Step::Mentorship, Field::Motivation, Rule::Required, "Motivation is required"),
    rule(Step::Mentorship, Field::Availability, Rule::Required, "Availability is required"),
    rule(Step::Mentorship, Field::HourlyRate, Rule::Required, "Hourly rate is required"),
    rule(Step::Terms, Field::AgreeToTerms, Rule::Required, "You must agree to the terms and conditions"),
    rule(Step::Terms, Field::AgreeToPrivacy, Rule::Required, "You must agree to the privacy policy"),
    rule(Step::Terms, Field::AgreeToCodeOfConduct, Rule::Required, "You must agree to the code of conduct"),
];

/// Borrowed view of one field's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
    Flag(bool),
}

impl FieldValue<'_> {
    fn satisfies(self, rule: Rule) -> bool {
        match (rule, self) {
            (Rule::Required, Self::Text(text)) => !text.trim().is_empty(),
            (Rule::Required, Self::List(items)) => !items.is_empty(),
            (Rule::Required, Self::Flag(flag)) => flag,
            (Rule::Email, Self::Text(text)) => looks_like_email(text),
            (Rule::Email, _) => false,
        }
    }
}

pub fn looks_like_email(raw: &str) -> bool {
    EMAIL_SHAPE.as_ref().is_some_and(|re| re.is_match(raw))
}

/// Everything the applicant enters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorApplication {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub current_role: String,
    pub company: String,
    pub years_of_experience: String,
    pub industry: String,
    pub specialization: String,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub mentorship_areas: Vec<String>,
    pub availability: String,
    pub hourly_rate: String,
    pub max_mentees: String,
    pub bio: String,
    pub motivation: String,
    pub success_stories: String,
    pub agree_to_terms: bool,
    pub agree_to_privacy: bool,
    pub agree_to_code_of_conduct: bool,
}

impl MentorApplication {
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Skills => FieldValue::List(&self.skills),
            Field::Certifications => FieldValue::List(&self.certifications),
            Field::Languages => FieldValue::List(&self.languages),
            Field::MentorshipAreas => FieldValue::List(&self.mentorship_areas),
            Field::AgreeToTerms => FieldValue::Flag(self.agree_to_terms),
            Field::AgreeToPrivacy => FieldValue::Flag(self.agree_to_privacy),
            Field::AgreeToCodeOfConduct => FieldValue::Flag(self.agree_to_code_of_conduct),
            _ => FieldValue::Text(self.text_ref(field).map_or("", String::as_str)),
        }
    }

    fn text_ref(&self, field: Field) -> Option<&String> {
        Some(match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Location => &self.location,
            Field::Linkedin => &self.linkedin,
            Field::Github => &self.github,
            Field::CurrentRole => &self.current_role,
            Field::Company => &self.company,
            Field::YearsOfExperience => &self.years_of_experience,
            Field::Industry => &self.industry,
            Field::Specialization => &self.specialization,
            Field::Availability => &self.availability,
            Field::HourlyRate => &self.hourly_rate,
            Field::MaxMentees => &self.max_mentees,
            Field::Bio => &self.bio,
            Field::Motivation => &self.motivation,
            Field::SuccessStories => &self.success_stories,
            _ => return None,
        })
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        Some(match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Location => &mut self.location,
            Field::Linkedin => &mut self.linkedin,
            Field::Github => &mut self.github,
            Field::CurrentRole => &mut self.current_role,
            Field::Company => &mut self.company,
            Field::YearsOfExperience => &mut self.years_of_experience,
            Field::Industry => &mut self.industry,
            Field::Specialization => &mut self.specialization,
            Field::Availability => &mut self.availability,
            Field::HourlyRate => &mut self.hourly_rate,
            Field::MaxMentees => &mut self.max_mentees,
            Field::Bio => &mut self.bio,
            Field::Motivation => &mut self.motivation,
            Field::SuccessStories => &mut self.success_stories,
            _ => return None,
        })
    }

    fn list_mut(&mut self, field: Field) -> Option<&mut Vec<String>> {
        match field {
            Field::Skills => Some(&mut self.skills),
            Field::Certifications => Some(&mut self.certifications),
            Field::Languages => Some(&mut self.languages),
            Field::MentorshipAreas => Some(&mut self.mentorship_areas),
            _ => None,
        }
    }

    fn flag_mut(&mut self, field: Field) -> Option<&mut bool> {
        match field {
            Field::AgreeToTerms => Some(&mut self.agree_to_terms),
            Field::AgreeToPrivacy => Some(&mut self.agree_to_privacy),
            Field::AgreeToCodeOfConduct => Some(&mut self.agree_to_code_of_conduct),
            _ => None,
        }
    }
}

/// Error messages keyed by field.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Run the rules of `step` against `data`.
pub fn validate_step(step: Step, data: &MentorApplication) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for r in VALIDATION_RULES.iter().filter(|r| r.step == step) {
        if errors.contains_key(&r.field) {
            continue;
        }
        if !data.value(r.field).satisfies(r.rule) {
            errors.insert(r.field, r.message);
        }
    }
    errors
}

/// Wizard state: current step, entered data, and visible errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MentorWizard {
    step: Step,
    data: MentorApplication,
    errors: FieldErrors,
}

impl MentorWizard {
    /// A wizard with the applicant's email prefilled.
    pub fn for_email(email: &str) -> Self {
        let mut wizard = Self::default();
        wizard.data.email = email.to_owned();
        wizard
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn data(&self) -> &MentorApplication {
        &self.data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Validate the current step and advance if it passes.
    pub fn next_step(&mut self) -> bool {
        self.errors = validate_step(self.step, &self.data);
        if !self.errors.is_empty() {
            return false;
        }
        self.step = self.step.next();
        true
    }

    pub fn prev_step(&mut self) {
        self.step = self.step.prev();
    }

    pub fn set_text(&mut self, field: Field, value: String) {
        if let Some(slot) = self.data.text_mut(field) {
            *slot = value;
            self.errors.remove(&field);
        }
    }

    pub fn set_flag(&mut self, field: Field, value: bool) {
        if let Some(slot) = self.data.flag_mut(field) {
            *slot = value;
            self.errors.remove(&field);
        }
    }

    /// Add `item` to a list field, or remove it if already present.
    pub fn toggle_item(&mut self, field: Field, item: &str) {
        if let Some(list) = self.data.list_mut(field) {
            if let Some(pos) = list.iter().position(|i| i == item) {
                list.remove(pos);
            } else {
                list.push(item.to_owned());
            }
            self.errors.remove(&field);
        }
    }

    /// Append a free-text entry (certifications, languages). Blank and
    /// duplicate entries are ignored.
    pub fn add_item(&mut self, field: Field, item: &str) -> bool {
        let item = item.trim();
        let Some(list) = self.data.list_mut(field) else {
            return false;
        };
        if item.is_empty() || list.iter().any(|i| i == item) {
            return false;
        }
        list.push(item.to_owned());
        self.errors.remove(&field);
        true
    }

    /// Validate every step. On failure the wizard moves to the first failing
    /// step and shows its errors.
    ///
    /// # Errors
    ///
    /// Returns the first step whose rules fail.
    pub fn submit(&mut self) -> Result<MentorApplication, Step> {
        for step in Step::ALL {
            let errors = validate_step(step, &self.data);
            if !errors.is_empty() {
                self.step = step;
                self.errors = errors;
                return Err(step);
            }
        }
        self.errors.clear();
        Ok(self.data.clone())
    }
}
