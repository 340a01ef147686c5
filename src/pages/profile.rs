//! Mentee profile page.
//!
//! The profile is seeded from the signed-in user and edited locally. "Save
//! Profile" stores a per-user draft in localStorage; nothing is sent to the
//! backend.

use leptos::prelude::*;

use crate::components::error_banner::NoticeBanner;
use crate::components::nav_header::NavHeader;
use crate::net::types::User;
use crate::state::profile::{MenteeProfile, ProfileList};
use crate::state::session::BrowserStorage;
use crate::util::auth::use_auth;
use crate::util::ui_persistence::{load_profile_draft, save_profile_draft};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let user = auth.with_untracked(|s| s.user().cloned());

    view! {
        <div class="profile-page">
            <NavHeader/>
            {match user {
                Some(user) => view! { <ProfileEditor user=user/> }.into_any(),
                None => view! { <p class="profile-page__empty">"No profile loaded."</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProfileEditor(user: User) -> impl IntoView {
    let profile = RwSignal::new(load_profile_draft(&mut BrowserStorage, &user));
    let editing = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);
    let role = user.role.clone().unwrap_or_else(|| "mentee".to_owned());

    let on_save = move |_| {
        profile.with_untracked(|p| save_profile_draft(&mut BrowserStorage, &user, p));
        editing.set(false);
        notice.set(Some("Profile saved.".to_owned()));
        log::info!("saved profile draft");
    };

    view! {
        <div class="profile">
            <NoticeBanner message=notice/>
            <header class="profile__header">
                <div class="profile__avatar">{move || profile.with(MenteeProfile::initial).to_string()}</div>
                <div>
                    <h1 class="profile__name">{move || profile.with(|p| p.name.clone())}</h1>
                    <p class="profile__email">{move || profile.with(|p| p.email.clone())}</p>
                    <span class="profile__role">{role}</span>
                </div>
                <div class="profile__actions">
                    <Show
                        when=move || editing.get()
                        fallback=move || {
                            view! {
                                <button class="btn btn--secondary" type="button" on:click=move |_| editing.set(true)>
                                    "Edit Profile"
                                </button>
                            }
                        }
                    >
                        <button class="btn btn--secondary" type="button" on:click=move |_| editing.set(false)>
                            "Cancel"
                        </button>
                    </Show>
                    <a class="btn btn--danger" href="/logout">"Logout"</a>
                </div>
            </header>

            <section class="profile__details">
                <ProfileText profile=profile editing=editing label="Name" read=|p| p.name.clone() write=|p, v| p.name = v/>
                <ProfileText
                    profile=profile
                    editing=editing
                    label="Location"
                    read=|p| p.location.clone()
                    write=|p, v| p.location = v
                />
                <ProfileText
                    profile=profile
                    editing=editing
                    label="Experience"
                    read=|p| p.experience.clone()
                    write=|p, v| p.experience = v
                />
                <ProfileText
                    profile=profile
                    editing=editing
                    label="Bio"
                    multiline=true
                    read=|p| p.bio.clone()
                    write=|p, v| p.bio = v
                />
            </section>

            <section class="profile__lists">
                <TagList profile=profile editing=editing which=ProfileList::Skills/>
                <TagList profile=profile editing=editing which=ProfileList::Goals/>
                <TagList profile=profile editing=editing which=ProfileList::Interests/>
            </section>

            <Show when=move || editing.get()>
                <button class="btn btn--primary" type="button" on:click=on_save.clone()>
                    "Save Profile"
                </button>
            </Show>
        </div>
    }
}

#[component]
fn ProfileText(
    profile: RwSignal<MenteeProfile>,
    editing: RwSignal<bool>,
    label: &'static str,
    read: fn(&MenteeProfile) -> String,
    write: fn(&mut MenteeProfile, String),
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || profile.with(read);
    view! {
        <div class="profile-field">
            <span class="profile-field__label">{label}</span>
            {move || {
                if !editing.get() {
                    let shown = value();
                    let shown = if shown.trim().is_empty() { "Not provided".to_owned() } else { shown };
                    return view! { <p class="profile-field__value">{shown}</p> }.into_any();
                }
                if multiline {
                    view! {
                        <textarea
                            class="form-field__input form-field__input--area"
                            rows="4"
                            prop:value=value
                            on:input=move |ev| profile.update(|p| write(p, event_target_value(&ev)))
                        ></textarea>
                    }
                    .into_any()
                } else {
                    view! {
                        <input
                            class="form-field__input"
                            type="text"
                            prop:value=value
                            on:input=move |ev| profile.update(|p| write(p, event_target_value(&ev)))
                        />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn TagList(profile: RwSignal<MenteeProfile>, editing: RwSignal<bool>, which: ProfileList) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let entry = draft.get_untracked();
        if profile.try_update(|p| p.add(which, &entry)).unwrap_or(false) {
            draft.set(String::new());
        }
    };

    view! {
        <div class="profile-tags">
            <h2 class="profile-tags__title">{which.title()}</h2>
            <ul class="tag-list">
                {move || {
                    profile
                        .with(|p| p.list(which).to_vec())
                        .into_iter()
                        .map(|item| {
                            let shown = item.clone();
                            view! {
                                <li class="chip">
                                    {shown}
                                    <Show when=move || editing.get()>
                                        <button
                                            type="button"
                                            class="chip__remove"
                                            aria-label="Remove"
                                            on:click={
                                                let item = item.clone();
                                                move |_| profile.update(|p| p.remove(which, &item))
                                            }
                                        >
                                            "✕"
                                        </button>
                                    </Show>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <Show when=move || editing.get()>
                <form class="tag-input" on:submit=on_add>
                    <input
                        class="form-field__input"
                        type="text"
                        placeholder=which.placeholder()
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button class="btn btn--secondary" type="submit">"Add"</button>
                </form>
            </Show>
        </div>
    }
}
