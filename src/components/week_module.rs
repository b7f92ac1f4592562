use yew::prelude::*;

use crate::state::WeekTab;

#[derive(Clone, PartialEq)]
pub struct KeyPoint {
    pub title: AttrValue,
    pub description: AttrValue,
}

#[derive(Properties, PartialEq, Clone)]
pub struct WeekModuleProps {
    pub week: u32,
    pub hours: u32,
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub objectives: Vec<AttrValue>,
    pub key_points: Vec<KeyPoint>,
    pub practice: Vec<AttrValue>,
}

#[function_component(WeekModule)]
pub fn week_module(props: &WeekModuleProps) -> Html {
    let active = use_state(WeekTab::default);

    let tabs = WeekTab::ALL.iter().map(|&tab| {
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(tab))
        };
        let color = if *active == tab { "#6fc2ff" } else { "transparent" };
        html! {
            <button key={tab.id()} {onclick}
                style={format!("background:none; border:none; border-bottom:2px solid {color}; color:inherit; padding:8px 0; cursor:pointer;")}>
                { tab.label() }
            </button>
        }
    });

    let body = match *active {
        WeekTab::Objectives => props
            .objectives
            .iter()
            .map(|o| html! { <p style="margin:0 0 8px 0;">{ "✓ " }{ o.clone() }</p> })
            .collect::<Html>(),
        WeekTab::KeyPoints => props
            .key_points
            .iter()
            .map(|p| html! {
                <details style="margin-bottom:8px;">
                    <summary style="cursor:pointer; font-weight:600;">{ p.title.clone() }</summary>
                    <p style="margin:6px 0 0 0; opacity:0.8;">{ p.description.clone() }</p>
                </details>
            })
            .collect::<Html>(),
        WeekTab::Practice => props
            .practice
            .iter()
            .enumerate()
            .map(|(i, c)| html! { <p style="margin:0 0 8px 0;">{ format!("{}. ", i + 1) }{ c.clone() }</p> })
            .collect::<Html>(),
    };

    html! {<section id={format!("week-{}", props.week)} style="background:#161b22; border:1px solid #30363d; border-radius:8px; overflow:hidden;">
        <header style="padding:16px 20px; background:linear-gradient(90deg, #1f6feb, #6fc2ff);">
            <div style="font-size:12px; display:flex; gap:12px;">
                <span>{ format!("Week {}", props.week) }</span>
                <span>{ format!("⏱ {} hours", props.hours) }</span>
            </div>
            <h2 style="margin:6px 0 4px 0;">{ props.title.clone() }</h2>
            <p style="margin:0; opacity:0.9;">{ props.subtitle.clone() }</p>
        </header>
        <nav style="display:flex; gap:24px; padding:0 20px; border-bottom:1px solid #30363d;">{ for tabs }</nav>
        <div style="padding:16px 20px;">{ body }</div>
    </section>}
}
