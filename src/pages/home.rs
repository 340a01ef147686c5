//! Public landing page.

use leptos::prelude::*;

use crate::components::nav_header::NavHeader;

const STATS: &[(&str, &str)] =
    &[("500+", "Active Mentors"), ("2000+", "Successful Matches"), ("95%", "Satisfaction Rate")];

const FEATURES: &[(&str, &str)] = &[
    ("Expert Mentors", "Connect with industry experts who have walked the path you want to take."),
    ("Flexible Scheduling", "Book sessions that fit your schedule with our flexible meeting options."),
    ("Proven Results", "Join thousands of mentees who have achieved their goals through our platform."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <NavHeader/>
            <section class="hero">
                <div class="hero__content">
                    <h1 class="hero__title">
                        "Unlock Your " <span class="hero__accent">"Potential"</span>
                    </h1>
                    <p class="hero__subtitle">
                        "Connect with experienced mentors who can guide you on your journey to success. "
                        "Whether you're starting your career or looking to grow, we have the right mentor for you."
                    </p>
                    <div class="hero__actions">
                        <a class="btn btn--primary" href="/mentors">"Find a Mentor"</a>
                        <a class="btn btn--secondary" href="/become-mentor">"Become a Mentor"</a>
                    </div>
                    <ul class="hero__stats">
                        {STATS
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <li class="hero__stat">
                                        <span class="hero__stat-value">{*value}</span>
                                        <span class="hero__stat-label">{*label}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </section>
            <section class="features">
                <h2>"Why Choose Our Platform?"</h2>
                <p class="features__lead">
                    "We provide the tools and connections you need to accelerate your growth and achieve your goals."
                </p>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|(title, body)| {
                            view! {
                                <article class="feature-card">
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <footer class="site-footer">
                <p>"Mentorship Platform"</p>
                <p class="site-footer__tagline">
                    "Empowering individuals to reach their full potential through meaningful mentorship connections."
                </p>
            </footer>
        </div>
    }
}
