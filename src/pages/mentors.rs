//! Mentor directory: fetch once per visit, filter and sort locally.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list comes from `GET /api/get-mentors`. Fetches are tagged with a
//! `RequestSeq` ticket so a retry supersedes an earlier in-flight request,
//! and responses landing after the page unmounts are dropped.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::mentor_card::MentorCard;
use crate::components::nav_header::NavHeader;
use crate::state::mentors::{
    EXPERIENCE_OPTIONS, FILTER_SKILLS, MentorFilter, MentorsState, SortKey, parse_min_experience, result_summary,
};
use crate::util::auth::{authed_client, use_api, use_auth};
use crate::util::request_seq::{RequestSeq, ViewLiveness, should_apply};

const LOAD_FAILED: &str = "Failed to load mentors. Please try again later.";

#[component]
pub fn MentorsPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let mentors = RwSignal::new(MentorsState::loading());
    let filter = RwSignal::new(MentorFilter::default());
    let error = RwSignal::new(None::<String>);
    let seq = RequestSeq::default();
    let liveness = ViewLiveness::for_current_view();

    let load = Callback::new(move |()| {
        let ticket = seq.begin();
        mentors.update(|m| m.loading = true);
        error.set(None);
        let client = authed_client(auth, &api);
        let seq = seq.clone();
        let liveness = liveness.clone();
        leptos::task::spawn_local(async move {
            let result = client.fetch_mentors().await;
            if !should_apply(&seq, &liveness, ticket) {
                log::debug!("dropping stale mentor list response");
                return;
            }
            match result {
                Ok(items) => {
                    log::info!("loaded {} mentors", items.len());
                    mentors.update(|m| m.loaded(items));
                }
                Err(err) => {
                    log::warn!("mentor fetch failed: {err}");
                    error.set(Some(err.display_message(LOAD_FAILED)));
                    mentors.update(|m| m.loading = false);
                }
            }
        });
    });
    load.run(());

    let visible = Memo::new(move |_| mentors.with(|m| filter.with(|f| f.apply(&m.items))));
    let summary = move || result_summary(visible.with(Vec::len), mentors.with(|m| m.items.len()));

    view! {
        <div class="mentors-page">
            <NavHeader/>
            <section class="mentors-page__intro">
                <h1>"Find Your Mentor"</h1>
                <p>"Browse experienced professionals and filter by the skills you want to grow."</p>
            </section>

            <section class="mentor-filters">
                <input
                    class="mentor-filters__search"
                    type="search"
                    placeholder="Search mentors..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    class="mentor-filters__select"
                    on:change=move |ev| filter.update(|f| f.min_experience = parse_min_experience(&event_target_value(&ev)))
                    prop:value=move || filter.with(|f| f.min_experience.map(|v| v.to_string()).unwrap_or_default())
                >
                    <option value="">"Any experience"</option>
                    {EXPERIENCE_OPTIONS
                        .iter()
                        .map(|(value, label)| view! { <option value=value.to_string()>{*label}</option> })
                        .collect_view()}
                </select>
                <select
                    class="mentor-filters__select"
                    on:change=move |ev| filter.update(|f| f.sort = SortKey::parse(&event_target_value(&ev)))
                    prop:value=move || filter.with(|f| f.sort.as_str())
                >
                    {SortKey::ALL
                        .iter()
                        .map(|key| view! { <option value=key.as_str()>"Sort by " {key.label()}</option> })
                        .collect_view()}
                </select>
                <button class="btn btn--secondary" type="button" on:click=move |_| filter.update(MentorFilter::clear)>
                    "Clear Filters"
                </button>
                <div class="mentor-filters__skills">
                    {FILTER_SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <button
                                    type="button"
                                    class="chip chip--toggle"
                                    class:chip--active=move || filter.with(|f| f.is_skill_selected(skill))
                                    on:click=move |_| filter.update(|f| f.toggle_skill(skill))
                                >
                                    {*skill}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="mentor-filters__summary">{summary}</p>
            </section>

            <ErrorBanner message=error/>
            <Show when=move || error.with(Option::is_some)>
                <button class="btn btn--secondary" type="button" on:click=move |_| load.run(())>"Retry"</button>
            </Show>

            <Show
                when=move || !mentors.with(|m| m.loading)
                fallback=|| view! { <p class="mentors-page__loading">"Loading mentors..."</p> }
            >
                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=|| {
                        view! {
                            <div class="mentors-page__empty">
                                <h3>"No mentors found"</h3>
                                <p>"Try adjusting your search or filters."</p>
                            </div>
                        }
                    }
                >
                    <div class="mentor-grid">
                        <For
                            each=move || visible.get()
                            key=|mentor| (mentor.id.clone(), mentor.email.clone())
                            children=|mentor| view! { <MentorCard mentor=mentor/> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
