//! Card for one mentor in the directory and the admin list.

use leptos::prelude::*;

use crate::net::types::Mentor;

/// A mentor summary. With `on_delete` set, a delete button is shown and
/// reports the mentor id; `deleting` disables it while a request is in flight.
#[component]
pub fn MentorCard(
    mentor: Mentor,
    #[prop(optional)] on_delete: Option<Callback<String>>,
    #[prop(optional)] deleting: Option<Signal<bool>>,
) -> impl IntoView {
    let is_deleting = move || deleting.is_some_and(|d| d.get());
    let initial = mentor.initial().to_string();
    let connect_label = format!("Connect with {}", mentor.first_name());
    let mailto = format!("mailto:{}", mentor.email);
    let headline = mentor
        .specialization
        .clone()
        .or_else(|| mentor.topic.clone())
        .unwrap_or_default();
    let experience = match mentor.experience_years() {
        Some(years) => format!("{years} years experience"),
        None if mentor.experience.trim().is_empty() => String::new(),
        None => mentor.experience.clone(),
    };
    let rating = mentor.rating.map(|r| format!("★ {r:.1}"));
    let rate = mentor.hourly_rate.map(|r| format!("${r:.0}/hr"));
    let location = mentor.location.clone().filter(|l| !l.trim().is_empty());
    let availability = mentor.availability.clone().filter(|a| !a.trim().is_empty());
    let avatar = mentor.avatar.clone().filter(|a| !a.trim().is_empty());
    let skills = mentor.skills.clone();
    let id = mentor.id.clone();

    view! {
        <article class="mentor-card">
            <header class="mentor-card__header">
                {match avatar {
                    Some(src) => view! { <img class="mentor-card__avatar" src=src alt=mentor.name.clone()/> }.into_any(),
                    None => view! { <div class="mentor-card__avatar mentor-card__avatar--initial">{initial}</div> }.into_any(),
                }}
                <div>
                    <h3 class="mentor-card__name">{mentor.name.clone()}</h3>
                    <p class="mentor-card__headline">{headline}</p>
                </div>
            </header>
            <p class="mentor-card__bio">{mentor.bio.clone()}</p>
            <ul class="mentor-card__skills">
                {skills.into_iter().map(|skill| view! { <li class="chip">{skill}</li> }).collect_view()}
            </ul>
            <dl class="mentor-card__facts">
                {(!experience.is_empty()).then(|| view! { <dd>{experience}</dd> })}
                {location.map(|l| view! { <dd>{l}</dd> })}
                {availability.map(|a| view! { <dd>{a}</dd> })}
                {rating.map(|r| view! { <dd class="mentor-card__rating">{r}</dd> })}
                {rate.map(|r| view! { <dd class="mentor-card__rate">{r}</dd> })}
            </dl>
            <footer class="mentor-card__actions">
                <a class="btn btn--primary" href=mailto>{connect_label}</a>
                {on_delete.map(|on_delete| {
                    view! {
                        <button
                            class="btn btn--danger"
                            type="button"
                            disabled=is_deleting
                            on:click=move |_| on_delete.run(id.clone())
                        >
                            {move || if is_deleting() { "Deleting..." } else { "Delete" }}
                        </button>
                    }
                })}
            </footer>
        </article>
    }
}
