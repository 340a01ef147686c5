use super::*;

fn fill_personal(w: &mut MentorWizard) {
    w.set_text(Field::FirstName, "Ada".to_owned());
    w.set_text(Field::LastName, "Lovelace".to_owned());
    w.set_text(Field::Email, "ada@example.com".to_owned());
    w.set_text(Field::Phone, "555-0100".to_owned());
    w.set_text(Field::Location, "London".to_owned());
}

fn fill_professional(w: &mut MentorWizard) {
    w.set_text(Field::CurrentRole, "Engineer".to_owned());
    w.set_text(Field::Company, "Analytical Engines".to_owned());
    w.set_text(Field::YearsOfExperience, "6-10".to_owned());
    w.set_text(Field::Industry, "Software Development".to_owned());
    w.set_text(Field::Specialization, "Compilers".to_owned());
}

fn fill_skills(w: &mut MentorWizard) {
    w.toggle_item(Field::Skills, "Rust");
    w.toggle_item(Field::MentorshipAreas, "Code Review");
}

fn fill_mentorship(w: &mut MentorWizard) {
    w.set_text(Field::Bio, "Bio".to_owned());
    w.set_text(Field::Motivation, "Give back".to_owned());
    w.set_text(Field::Availability, "5-10".to_owned());
    w.set_text(Field::HourlyRate, "60".to_owned());
}

fn fill_terms(w: &mut MentorWizard) {
    w.set_flag(Field::AgreeToTerms, true);
    w.set_flag(Field::AgreeToPrivacy, true);
    w.set_flag(Field::AgreeToCodeOfConduct, true);
}

// =============================================================
// Step transitions
// =============================================================

#[test]
fn next_step_with_missing_fields_stays_and_reports_each() {
    let mut w = MentorWizard::default();
    w.set_text(Field::FirstName, "Ada".to_owned());

    assert!(!w.next_step());
    assert_eq!(w.step(), Step::Personal);
    for field in [Field::LastName, Field::Email, Field::Phone, Field::Location] {
        assert!(w.error(field).is_some_and(|m| !m.is_empty()), "missing error for {field:?}");
    }
    assert_eq!(w.error(Field::FirstName), None);
}

#[test]
fn every_step_blocks_when_empty() {
    let mut w = MentorWizard::default();
    let fillers: [fn(&mut MentorWizard); 4] = [fill_personal, fill_professional, fill_skills, fill_mentorship];
    for (step, fill) in Step::ALL.into_iter().zip(fillers) {
        assert_eq!(w.step(), step);
        assert!(!w.next_step());
        assert_eq!(w.step(), step);
        let expected = VALIDATION_RULES.iter().filter(|r| r.step == step).map(|r| r.field).collect::<std::collections::BTreeSet<_>>();
        assert_eq!(w.errors().keys().copied().collect::<std::collections::BTreeSet<_>>(), expected);
        fill(&mut w);
        assert!(w.next_step());
    }
    assert_eq!(w.step(), Step::Terms);
    assert!(!w.next_step());
    assert_eq!(w.errors().len(), 3);
}

#[test]
fn next_step_caps_at_terms() {
    let mut w = MentorWizard::default();
    fill_personal(&mut w);
    fill_professional(&mut w);
    fill_skills(&mut w);
    fill_mentorship(&mut w);
    fill_terms(&mut w);
    for _ in 0..6 {
        w.next_step();
    }
    assert_eq!(w.step(), Step::Terms);
    assert_eq!(w.step().number(), 5);
}

#[test]
fn prev_step_floors_at_personal() {
    let mut w = MentorWizard::default();
    fill_personal(&mut w);
    assert!(w.next_step());
    w.prev_step();
    w.prev_step();
    assert_eq!(w.step(), Step::Personal);
}

// =============================================================
// Field rules
// =============================================================

#[test]
fn invalid_email_gets_format_message() {
    let mut w = MentorWizard::default();
    fill_personal(&mut w);
    w.set_text(Field::Email, "not-an-email".to_owned());
    assert!(!w.next_step());
    assert_eq!(w.error(Field::Email), Some("Email is invalid"));
}

#[test]
fn blank_email_gets_required_message_only() {
    let mut w = MentorWizard::default();
    fill_personal(&mut w);
    w.set_text(Field::Email, "   ".to_owned());
    assert!(!w.next_step());
    assert_eq!(w.error(Field::Email), Some("Email is required"));
}

#[test]
fn whitespace_only_text_counts_as_missing() {
    let mut w = MentorWizard::default();
    fill_personal(&mut w);
    w.set_text(Field::Phone, " \t ".to_owned());
    assert!(!w.next_step());
    assert_eq!(w.error(Field::Phone), Some("Phone number is required"));
}

#[test]
fn editing_a_field_clears_its_error() {
    let mut w = MentorWizard::default();
    w.next_step();
    assert!(w.error(Field::LastName).is_some());
    w.set_text(Field::LastName, "L".to_owned());
    assert_eq!(w.error(Field::LastName), None);
    assert!(w.error(Field::Phone).is_some());
}

#[test]
fn toggle_item_adds_then_removes() {
    let mut w = MentorWizard::default();
    w.toggle_item(Field::Skills, "Go");
    assert_eq!(w.data().skills, vec!["Go".to_owned()]);
    w.toggle_item(Field::Skills, "Go");
    assert!(w.data().skills.is_empty());
}

#[test]
fn add_item_trims_and_dedupes() {
    let mut w = MentorWizard::default();
    assert!(w.add_item(Field::Languages, " English "));
    assert!(!w.add_item(Field::Languages, "English"));
    assert!(!w.add_item(Field::Languages, "  "));
    assert!(!w.add_item(Field::FirstName, "x"));
    assert_eq!(w.data().languages, vec!["English".to_owned()]);
}

#[test]
fn looks_like_email_accepts_common_addresses() {
    assert!(looks_like_email("a@b.co"));
    assert!(!looks_like_email("a@b"));
    assert!(!looks_like_email("@."));
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_returns_application_when_all_steps_pass() {
    let mut w = MentorWizard::for_email("ada@example.com");
    fill_personal(&mut w);
    fill_professional(&mut w);
    fill_skills(&mut w);
    fill_mentorship(&mut w);
    fill_terms(&mut w);
    let app = w.submit().unwrap();
    assert_eq!(app.skills, vec!["Rust".to_owned()]);
    assert!(app.agree_to_code_of_conduct);
}

#[test]
fn submit_jumps_to_first_failing_step() {
    let mut w = MentorWizard::default();
    fill_personal(&mut w);
    fill_skills(&mut w);
    assert_eq!(w.submit(), Err(Step::Professional));
    assert_eq!(w.step(), Step::Professional);
    assert_eq!(w.error(Field::Company), Some("Company is required"));
}

#[test]
fn application_serializes_camel_case() {
    let value = serde_json::to_value(MentorApplication::default()).unwrap();
    assert!(value.get("yearsOfExperience").is_some());
    assert!(value.get("agreeToCodeOfConduct").is_some());
}

#[test]
fn step_titles_follow_order() {
    let titles: Vec<&str> = Step::ALL.iter().map(|s| s.title()).collect();
    assert_eq!(
        titles,
        vec![
            "Personal Information",
            "Professional Background",
            "Skills & Expertise",
            "Mentorship Details",
            "Terms & Conditions"
        ]
    );
}
