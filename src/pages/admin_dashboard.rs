//! Admin dashboard: create, list, and delete mentor records.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable only through `ProtectedRoute` with the `admin` role. The mentor
//! list is refetched every time its section is opened; a `RequestSeq` keeps
//! only the newest response when the admin flips sections quickly. The
//! create-mentor draft lives at dashboard level so it survives section
//! switches.

use leptos::prelude::*;

use crate::components::error_banner::{ErrorBanner, NoticeBanner};
use crate::components::mentor_card::MentorCard;
use crate::net::api::ApiClient;
use crate::net::types::NewMentor;
use crate::state::admin::{
    AdminSection, DELETE_FAILED, FETCH_FAILED, MENTOR_AVAILABILITY, NewMentorField, apply_create_result,
    validate_new_mentor,
};
use crate::state::mentors::MentorsState;
use crate::util::auth::{authed_client, use_api, use_auth};
use crate::util::dialog;
use crate::util::request_seq::{RequestSeq, ViewLiveness, should_apply};

const DELETE_QUESTION: &str = "Are you sure you want to delete this mentor?";

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let section = RwSignal::new(AdminSection::default());
    let draft = RwSignal::new(NewMentor::default());
    let admin_name = move || auth.with(|s| s.user().map(|u| u.display_name().to_owned()).unwrap_or_default());

    view! {
        <div class="admin-page">
            <aside class="admin-sidebar">
                <h1 class="admin-sidebar__title">"Admin Dashboard"</h1>
                <nav class="admin-sidebar__nav">
                    {AdminSection::ALL
                        .into_iter()
                        .map(|s| {
                            view! {
                                <button
                                    type="button"
                                    class="admin-sidebar__item"
                                    class:admin-sidebar__item--active=move || section.get() == s
                                    on:click=move |_| section.set(s)
                                >
                                    {s.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <p class="admin-sidebar__user">"Signed in as " {admin_name}</p>
                <a class="btn btn--danger" href="/logout">"Logout"</a>
            </aside>
            <main class="admin-main">
                {move || match section.get() {
                    AdminSection::CreateMentor => view! { <CreateMentorPanel api=api.clone() form=draft/> }.into_any(),
                    AdminSection::ViewMentors => view! { <MentorListPanel api=api.clone()/> }.into_any(),
                    placeholder => view! { <PlaceholderPanel section=placeholder/> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn PlaceholderPanel(section: AdminSection) -> impl IntoView {
    view! {
        <section class="admin-panel admin-panel--placeholder">
            <h2>{section.label()}</h2>
            <p>"Coming soon."</p>
        </section>
    }
}

#[component]
fn CreateMentorPanel(api: ApiClient, form: RwSignal<NewMentor>) -> impl IntoView {
    let auth = use_auth();
    let liveness = ViewLiveness::for_current_view();
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        notice.set(None);
        let mentor = form.get_untracked();
        if let Err(message) = validate_new_mentor(&mentor) {
            error.set(Some(message.to_owned()));
            return;
        }
        busy.set(true);
        let client = authed_client(auth, &api);
        let liveness = liveness.clone();
        leptos::task::spawn_local(async move {
            let result = client.add_mentor(&mentor).await;
            match &result {
                Ok(()) => log::info!("created mentor {}", mentor.email),
                Err(err) => log::warn!("create mentor failed: {err}"),
            }
            // The draft is dashboard state and outlives this panel.
            let outcome = form.try_update(|f| apply_create_result(f, result));
            liveness.apply_if_alive(|| {
                match outcome {
                    Some(Ok(message)) => notice.set(Some(message.to_owned())),
                    Some(Err(message)) => error.set(Some(message)),
                    None => {}
                }
                busy.set(false);
            });
        });
    };

    view! {
        <section class="admin-panel">
            <h2>"Create Mentor"</h2>
            <ErrorBanner message=error/>
            <NoticeBanner message=notice/>
            <form class="admin-form" on:submit=on_submit>
                <FormInput form=form field=NewMentorField::Name label="Name"/>
                <FormInput form=form field=NewMentorField::Email label="Email" kind="email"/>
                <FormInput form=form field=NewMentorField::Password label="Password" kind="password"/>
                <FormInput form=form field=NewMentorField::Topic label="Topic"/>
                <FormInput form=form field=NewMentorField::Experience label="Experience (years)" kind="number"/>
                <label class="form-field">
                    <span class="form-field__label">"Availability"</span>
                    <select
                        class="form-field__input"
                        prop:value=move || form.with(|f| f.availability.clone())
                        on:change=move |ev| {
                            form.update(|f| NewMentorField::Availability.set(f, event_target_value(&ev)));
                        }
                    >
                        <option value="">"Select availability"</option>
                        {MENTOR_AVAILABILITY
                            .iter()
                            .map(|value| view! { <option value=*value>{*value}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Bio"</span>
                    <textarea
                        class="form-field__input form-field__input--area"
                        rows="4"
                        prop:value=move || form.with(|f| f.bio.clone())
                        on:input=move |ev| form.update(|f| NewMentorField::Bio.set(f, event_target_value(&ev)))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create Mentor" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn FormInput(
    form: RwSignal<NewMentor>,
    field: NewMentorField,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=kind
                prop:value=move || form.with(|f| field.get(f).to_owned())
                on:input=move |ev| form.update(|f| field.set(f, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
fn MentorListPanel(api: ApiClient) -> impl IntoView {
    let auth = use_auth();
    let mentors = RwSignal::new(MentorsState::loading());
    let error = RwSignal::new(None::<String>);
    let seq = RequestSeq::default();
    let liveness = ViewLiveness::for_current_view();

    {
        let ticket = seq.begin();
        let client = authed_client(auth, &api);
        let seq = seq.clone();
        let liveness = liveness.clone();
        leptos::task::spawn_local(async move {
            let result = client.fetch_mentors().await;
            if !should_apply(&seq, &liveness, ticket) {
                return;
            }
            match result {
                Ok(items) => mentors.update(|m| m.loaded(items)),
                Err(err) => {
                    log::warn!("admin mentor fetch failed: {err}");
                    error.set(Some(err.display_message(FETCH_FAILED)));
                    mentors.update(|m| m.loading = false);
                }
            }
        });
    }

    let on_delete = Callback::new(move |id: String| {
        if mentors.with_untracked(|m| m.deleting.is_some()) || !dialog::confirm(DELETE_QUESTION) {
            return;
        }
        if !mentors.try_update(|m| m.begin_delete(&id)).unwrap_or(false) {
            return;
        }
        error.set(None);
        let client = authed_client(auth, &api);
        let liveness = liveness.clone();
        leptos::task::spawn_local(async move {
            let result = client.delete_mentor(&id).await;
            if !liveness.is_alive() {
                return;
            }
            match &result {
                Ok(()) => log::info!("deleted mentor {id}"),
                Err(err) => {
                    log::warn!("delete mentor {id} failed: {err}");
                    error.set(Some(err.display_message(DELETE_FAILED)));
                }
            }
            mentors.update(|m| m.finish_delete(&id, result.is_ok()));
        });
    });

    view! {
        <section class="admin-panel">
            <h2>"All Mentors"</h2>
            <ErrorBanner message=error/>
            <Show
                when=move || !mentors.with(|m| m.loading)
                fallback=|| view! { <p class="admin-panel__loading">"Loading mentors..."</p> }
            >
                <Show
                    when=move || mentors.with(|m| !m.items.is_empty())
                    fallback=|| view! { <p class="admin-panel__empty">"No mentors found."</p> }
                >
                    <div class="mentor-grid">
                        <For
                            each=move || mentors.with(|m| m.items.clone())
                            key=|mentor| (mentor.id.clone(), mentor.email.clone())
                            children=move |mentor| {
                                let id = mentor.id.clone();
                                let deleting = Signal::derive(move || mentors.with(|m| m.is_deleting(&id)));
                                view! { <MentorCard mentor=mentor on_delete=on_delete deleting=deleting/> }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}
