//! "Become a mentor" application wizard page.
//!
//! Step state and validation live in `state::mentor_form`; this page only
//! renders the current step's inputs and forwards edits. There is no backend
//! endpoint for applications yet, so a valid submission is logged and the
//! applicant is sent back to their profile.

#[cfg(test)]
#[path = "become_mentor_test.rs"]
mod become_mentor_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_header::NavHeader;
use crate::state::mentor_form::{
    AVAILABILITY_OPTIONS, EXPERIENCE_LEVELS, Field, FieldValue, INDUSTRIES, MAX_MENTEE_OPTIONS, MENTORSHIP_AREAS,
    MentorWizard, SKILL_OPTIONS, Step,
};
use crate::util::auth::use_auth;
use crate::util::dialog;

pub const SUBMITTED: &str =
    "Application submitted successfully! We will review your application and get back to you within 3-5 business days.";

/// Width of the progress bar for `step`, in percent.
pub fn progress_percent(step: Step) -> usize {
    step.number() * 100 / Step::ALL.len()
}

/// `(value, label)` pairs for a plain list of options.
fn same_value_options(options: &'static [&'static str]) -> Vec<(&'static str, &'static str)> {
    options.iter().map(|o| (*o, *o)).collect()
}

#[component]
pub fn BecomeMentorPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let email = auth.with_untracked(|s| s.user().map(|u| u.email.clone()).unwrap_or_default());
    let wizard = RwSignal::new(MentorWizard::for_email(&email));
    let step = Memo::new(move |_| wizard.with(MentorWizard::step));

    let on_next = move |_| {
        if !wizard.try_update(MentorWizard::next_step).unwrap_or(false) {
            log::debug!("step {} has validation errors", step.get_untracked().number());
        }
    };
    let on_prev = move |_| wizard.update(MentorWizard::prev_step);
    let on_submit = move |_| match wizard.try_update(MentorWizard::submit) {
        Some(Ok(application)) => {
            match serde_json::to_string(&application) {
                Ok(json) => log::info!("mentor application submitted: {json}"),
                Err(err) => log::warn!("mentor application submitted (unserializable: {err})"),
            }
            dialog::alert(SUBMITTED);
            navigate("/profile", NavigateOptions::default());
        }
        Some(Err(failed)) => log::debug!("application incomplete at step {}", failed.number()),
        None => {}
    };

    view! {
        <div class="become-mentor-page">
            <NavHeader/>
            <div class="wizard">
                <h1>"Become a Mentor"</h1>
                <p class="wizard__lead">"Share your experience and help others grow."</p>

                <div class="wizard__progress">
                    <ol class="wizard__steps">
                        {Step::ALL
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <li
                                        class="wizard__dot"
                                        class:wizard__dot--done=move || s.number() <= step.get().number()
                                    >
                                        {s.number()}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                    <div class="wizard__bar">
                        <div
                            class="wizard__bar-fill"
                            style:width=move || format!("{}%", progress_percent(step.get()))
                        ></div>
                    </div>
                    <p class="wizard__caption">
                        {move || format!("Step {} of {}: {}", step.get().number(), Step::ALL.len(), step.get().title())}
                    </p>
                </div>

                <div class="wizard__body">
                    {move || match step.get() {
                        Step::Personal => view! { <PersonalStep wizard=wizard/> }.into_any(),
                        Step::Professional => view! { <ProfessionalStep wizard=wizard/> }.into_any(),
                        Step::Skills => view! { <SkillsStep wizard=wizard/> }.into_any(),
                        Step::Mentorship => view! { <MentorshipStep wizard=wizard/> }.into_any(),
                        Step::Terms => view! { <TermsStep wizard=wizard/> }.into_any(),
                    }}
                </div>

                <div class="wizard__nav">
                    <button
                        class="btn btn--secondary"
                        type="button"
                        disabled=move || step.get() == Step::Personal
                        on:click=on_prev
                    >
                        "Previous"
                    </button>
                    <Show
                        when=move || step.get().is_last()
                        fallback=move || {
                            view! {
                                <button class="btn btn--primary" type="button" on:click=on_next>
                                    "Next"
                                </button>
                            }
                        }
                    >
                        <button class="btn btn--primary" type="button" on:click=on_submit.clone()>
                            "Submit Application"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PersonalStep(wizard: RwSignal<MentorWizard>) -> impl IntoView {
    view! {
        <div class="wizard__grid">
            <TextInput wizard=wizard field=Field::FirstName label="First Name *"/>
            <TextInput wizard=wizard field=Field::LastName label="Last Name *"/>
            <TextInput wizard=wizard field=Field::Email label="Email *" kind="email"/>
            <TextInput wizard=wizard field=Field::Phone label="Phone *" kind="tel"/>
            <TextInput wizard=wizard field=Field::Location label="Location *" placeholder="City, Country"/>
            <TextInput wizard=wizard field=Field::Linkedin label="LinkedIn" kind="url"/>
            <TextInput wizard=wizard field=Field::Github label="GitHub" kind="url"/>
        </div>
    }
}

#[component]
fn ProfessionalStep(wizard: RwSignal<MentorWizard>) -> impl IntoView {
    view! {
        <div class="wizard__grid">
            <TextInput wizard=wizard field=Field::CurrentRole label="Current Role *"/>
            <TextInput wizard=wizard field=Field::Company label="Company *"/>
            <SelectInput
                wizard=wizard
                field=Field::YearsOfExperience
                label="Years of Experience *"
                options=EXPERIENCE_LEVELS.to_vec()
            />
            <SelectInput wizard=wizard field=Field::Industry label="Industry *" options=same_value_options(INDUSTRIES)/>
            <TextInput wizard=wizard field=Field::Specialization label="Specialization *"/>
        </div>
    }
}

#[component]
fn SkillsStep(wizard: RwSignal<MentorWizard>) -> impl IntoView {
    view! {
        <div class="wizard__stack">
            <ChipPicker wizard=wizard field=Field::Skills label="Skills *" options=SKILL_OPTIONS/>
            <ChipPicker wizard=wizard field=Field::MentorshipAreas label="Mentorship Areas *" options=MENTORSHIP_AREAS/>
            <FreeList wizard=wizard field=Field::Certifications label="Certifications" placeholder="Add a certification"/>
            <FreeList wizard=wizard field=Field::Languages label="Languages" placeholder="Add a language"/>
        </div>
    }
}

#[component]
fn MentorshipStep(wizard: RwSignal<MentorWizard>) -> impl IntoView {
    view! {
        <div class="wizard__stack">
            <TextArea wizard=wizard field=Field::Bio label="Bio *" placeholder="Tell mentees about yourself"/>
            <TextArea wizard=wizard field=Field::Motivation label="Why do you want to mentor? *"/>
            <div class="wizard__grid">
                <SelectInput
                    wizard=wizard
                    field=Field::Availability
                    label="Availability *"
                    options=AVAILABILITY_OPTIONS.to_vec()
                />
                <TextInput wizard=wizard field=Field::HourlyRate label="Hourly Rate (USD) *" kind="number"/>
                <SelectInput
                    wizard=wizard
                    field=Field::MaxMentees
                    label="Maximum Mentees"
                    options=MAX_MENTEE_OPTIONS.to_vec()
                />
            </div>
            <TextArea wizard=wizard field=Field::SuccessStories label="Success Stories"/>
        </div>
    }
}

#[component]
fn TermsStep(wizard: RwSignal<MentorWizard>) -> impl IntoView {
    view! {
        <div class="wizard__stack">
            <CheckInput wizard=wizard field=Field::AgreeToTerms label="I agree to the Terms and Conditions *"/>
            <CheckInput wizard=wizard field=Field::AgreeToPrivacy label="I agree to the Privacy Policy *"/>
            <CheckInput wizard=wizard field=Field::AgreeToCodeOfConduct label="I agree to the Code of Conduct *"/>
        </div>
    }
}

fn text_of(wizard: RwSignal<MentorWizard>, field: Field) -> String {
    wizard.with(|w| match w.data().value(field) {
        FieldValue::Text(text) => text.to_owned(),
        FieldValue::List(_) | FieldValue::Flag(_) => String::new(),
    })
}

#[component]
fn FieldError(wizard: RwSignal<MentorWizard>, field: Field) -> impl IntoView {
    move || wizard.with(|w| w.error(field)).map(|message| view! { <p class="form-field__error">{message}</p> })
}

#[component]
fn TextInput(
    wizard: RwSignal<MentorWizard>,
    field: Field,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                class:form-field__input--invalid=move || wizard.with(|w| w.error(field).is_some())
                type=kind
                placeholder=placeholder
                prop:value=move || text_of(wizard, field)
                on:input=move |ev| wizard.update(|w| w.set_text(field, event_target_value(&ev)))
            />
            <FieldError wizard=wizard field=field/>
        </label>
    }
}

#[component]
fn TextArea(
    wizard: RwSignal<MentorWizard>,
    field: Field,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <textarea
                class="form-field__input form-field__input--area"
                class:form-field__input--invalid=move || wizard.with(|w| w.error(field).is_some())
                rows="4"
                placeholder=placeholder
                prop:value=move || text_of(wizard, field)
                on:input=move |ev| wizard.update(|w| w.set_text(field, event_target_value(&ev)))
            ></textarea>
            <FieldError wizard=wizard field=field/>
        </label>
    }
}

#[component]
fn SelectInput(
    wizard: RwSignal<MentorWizard>,
    field: Field,
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <select
                class="form-field__input"
                class:form-field__input--invalid=move || wizard.with(|w| w.error(field).is_some())
                prop:value=move || text_of(wizard, field)
                on:change=move |ev| wizard.update(|w| w.set_text(field, event_target_value(&ev)))
            >
                <option value="">"Select..."</option>
                {options
                    .into_iter()
                    .map(|(value, text)| view! { <option value=value>{text}</option> })
                    .collect_view()}
            </select>
            <FieldError wizard=wizard field=field/>
        </label>
    }
}

#[component]
fn ChipPicker(
    wizard: RwSignal<MentorWizard>,
    field: Field,
    label: &'static str,
    options: &'static [&'static str],
) -> impl IntoView {
    let is_selected = move |item: &str| {
        wizard.with(|w| match w.data().value(field) {
            FieldValue::List(items) => items.iter().any(|i| i == item),
            FieldValue::Text(_) | FieldValue::Flag(_) => false,
        })
    };
    view! {
        <fieldset class="form-field">
            <legend class="form-field__label">{label}</legend>
            <div class="chip-picker">
                {options
                    .iter()
                    .map(|item| {
                        view! {
                            <button
                                type="button"
                                class="chip chip--toggle"
                                class:chip--active=move || is_selected(item)
                                on:click=move |_| wizard.update(|w| w.toggle_item(field, item))
                            >
                                {*item}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <FieldError wizard=wizard field=field/>
        </fieldset>
    }
}

#[component]
fn FreeList(
    wizard: RwSignal<MentorWizard>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let items = move || {
        wizard.with(|w| match w.data().value(field) {
            FieldValue::List(items) => items.to_vec(),
            FieldValue::Text(_) | FieldValue::Flag(_) => Vec::new(),
        })
    };
    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let entry = draft.get_untracked();
        if wizard.try_update(|w| w.add_item(field, &entry)).unwrap_or(false) {
            draft.set(String::new());
        }
    };
    view! {
        <div class="form-field">
            <span class="form-field__label">{label}</span>
            <ul class="tag-list">
                {move || {
                    items()
                        .into_iter()
                        .map(|item| {
                            let shown = item.clone();
                            view! {
                                <li class="chip">
                                    {shown}
                                    <button
                                        type="button"
                                        class="chip__remove"
                                        aria-label="Remove"
                                        on:click=move |_| wizard.update(|w| w.toggle_item(field, &item))
                                    >
                                        "✕"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <form class="tag-input" on:submit=on_add>
                <input
                    class="form-field__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn btn--secondary" type="submit">"Add"</button>
            </form>
        </div>
    }
}

#[component]
fn CheckInput(wizard: RwSignal<MentorWizard>, field: Field, label: &'static str) -> impl IntoView {
    let checked = move || wizard.with(|w| matches!(w.data().value(field), FieldValue::Flag(true)));
    view! {
        <label class="form-check">
            <input
                type="checkbox"
                prop:checked=checked
                on:change=move |ev| wizard.update(|w| w.set_flag(field, event_target_checked(&ev)))
            />
            <span>{label}</span>
            <FieldError wizard=wizard field=field/>
        </label>
    }
}
