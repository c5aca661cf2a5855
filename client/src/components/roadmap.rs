//! Project roadmap timeline for the home page.

#[cfg(test)]
#[path = "roadmap_test.rs"]
mod roadmap_test;

use leptos::prelude::*;

/// Progress of one roadmap stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Done,
    InProgress,
    Planned,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Done => "Done",
            Self::InProgress => "In progress",
            Self::Planned => "Planned",
        }
    }

    /// CSS modifier for the node and pill.
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoadmapItem {
    pub id: &'static str,
    pub title: &'static str,
    pub period: &'static str,
    pub stage: Stage,
    pub points: &'static [&'static str],
}

#[component]
pub fn Roadmap(items: &'static [RoadmapItem]) -> impl IntoView {
    view! {
        <section class="roadmap">
            <header class="roadmap__header">
                <span class="roadmap__tag">"roadmap"</span>
                <h2>"Roadmap"</h2>
            </header>
            <ol class="roadmap__list">
                {items
                    .iter()
                    .map(|item| {
                        let modifier = item.stage.modifier();
                        view! {
                            <li class="roadmap__item" data-id=item.id>
                                <span class=format!("roadmap__node roadmap__node--{modifier}") aria-hidden="true"></span>
                                <article class="roadmap__card">
                                    <div class="roadmap__heading">
                                        <h3>{item.title}</h3>
                                        <span class="roadmap__period">{item.period}</span>
                                        <span class=format!("roadmap__pill roadmap__pill--{modifier}")>
                                            {item.stage.label()}
                                        </span>
                                    </div>
                                    <ul class="roadmap__points">
                                        {item.points.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                                    </ul>
                                </article>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
