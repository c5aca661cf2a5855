//! Public landing page: project intro, feature sections and the roadmap.

use leptos::prelude::*;

use crate::components::roadmap::{Roadmap, RoadmapItem, Stage};

const ROADMAP: &[RoadmapItem] = &[
    RoadmapItem {
        id: "mvp",
        title: "MVP backend: tasks, moderation, history",
        period: "Q3 2025",
        stage: Stage::Done,
        points: &["Backend planning and implementation"],
    },
    RoadmapItem {
        id: "frontend",
        title: "Admin front end",
        period: "Q4 2025",
        stage: Stage::InProgress,
        points: &["Interface development and testing", "Backend integration"],
    },
    RoadmapItem {
        id: "recs",
        title: "Recommendation system v1",
        period: "Next",
        stage: Stage::Planned,
        points: &["Similar tasks after mistakes", "Adaptive difficulty"],
    },
    RoadmapItem {
        id: "integration",
        title: "Backend integration with the model",
        period: "Next",
        stage: Stage::Planned,
        points: &["Serve recommendations through the API"],
    },
];

struct Section {
    kicker: &'static str,
    title: &'static str,
    bullets: &'static [&'static str],
    link: Option<(&'static str, &'static str)>,
}

const SECTIONS: &[Section] = &[
    Section {
        kicker: "section",
        title: "Tasks",
        bullets: &["Quick search", "Drafts", "Statuses: APPROVED / REJECTED / PENDING"],
        link: Some(("/tasks", "Open tasks")),
    },
    Section {
        kicker: "process",
        title: "Content moderation",
        bullets: &["Review queue", "Moderator decisions", "Action audit"],
        link: Some(("/moderation", "Go to moderation")),
    },
    Section {
        kicker: "analytics",
        title: "Solution history",
        bullets: &["Status, score and time", "Filters by status"],
        link: Some(("/task-history", "View history")),
    },
    Section {
        kicker: "access",
        title: "Users and roles",
        bullets: &["Admin, moderator, teacher, student", "Access depends on role"],
        link: None,
    },
    Section {
        kicker: "soon",
        title: "Recommendations",
        bullets: &["Similar tasks after mistakes", "Adaptive difficulty"],
        link: None,
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <div class="hero">
                <h1>"Task Bank: a task platform with recommendations"</h1>
                <p class="hero__lead">
                    "Task bank, moderation, solution history and the groundwork for a "
                    "recommendation system. Roles and the moderation pipeline are ready."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/tasks">"Go to tasks"</a>
                    <a class="btn" href="/task-history">"My history"</a>
                </div>
            </div>
            {SECTIONS
                .iter()
                .map(|section| {
                    view! {
                        <article class="section-card">
                            <span class="section-card__kicker">{section.kicker}</span>
                            <h2 class="section-card__title">{section.title}</h2>
                            <ul class="section-card__bullets">
                                {section.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                            </ul>
                            {section
                                .link
                                .map(|(href, label)| view! { <a class="btn btn--small" href=href>{label}</a> })}
                        </article>
                    }
                })
                .collect_view()}
            <Roadmap items=ROADMAP/>
        </section>
    }
}
