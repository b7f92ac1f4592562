use super::{
    feature_card::FeatureCard,
    figure_card::FigureCard,
    image_modal::ImageModal,
    navigation::{NavItem, Navigation},
    week_module::{KeyPoint, WeekModule},
};
use crate::config::SiteConfig;
use crate::state::{FeatureList, ToggleWording};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct Figure {
    title: &'static str,
    caption: &'static str,
    src: &'static str,
}

const FIGURES: &[Figure] = &[
    Figure {
        title: "Agent architecture",
        caption: "Planner, tools and memory in one loop",
        src: "assets/agent-architecture.png",
    },
    Figure {
        title: "Course roadmap",
        caption: "Eight weeks from prompts to production",
        src: "assets/roadmap.png",
    },
    Figure {
        title: "Tooling comparison",
        caption: "Editors and assistants side by side",
        src: "assets/tooling.png",
    },
];

struct Offering {
    title: &'static str,
    tagline: &'static str,
    features: &'static [&'static str],
}

const ASSISTANTS: &[Offering] = &[
    Offering {
        title: "Editor assistant",
        tagline: "Inline completion and chat inside the IDE",
        features: &[
            "Multi-file edits",
            "Codebase indexing",
            "Terminal commands",
            "Custom rules",
            "Model switching",
            "Review mode",
        ],
    },
    Offering {
        title: "CLI agent",
        tagline: "Runs tasks from the terminal",
        features: &["Headless runs", "Git aware", "Scriptable"],
    },
];

const PLANS: &[Offering] = &[Offering {
    title: "Team plan",
    tagline: "Shared workspace billing",
    features: &[
        "Seat management",
        "Usage dashboard",
        "SSO",
        "Priority support",
        "Audit log",
    ],
}];

fn attr_list(items: &[&'static str]) -> Vec<AttrValue> {
    items.iter().copied().map(AttrValue::Static).collect()
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: SiteConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    // Index into FIGURES shown in the modal; None while closed
    let selected = use_state(|| None::<usize>);

    let nav_items = vec![
        NavItem { label: "Materials".into(), href: "#materials".into() },
        NavItem { label: "Compare".into(), href: "#compare".into() },
        NavItem { label: "Roadmap".into(), href: "#roadmap".into() },
    ];

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let cards = FIGURES.iter().enumerate().map(|(i, fig)| {
        let on_open = {
            let selected = selected.clone();
            Callback::from(move |_: ()| selected.set(Some(i)))
        };
        html! {
            <FigureCard key={i} title={fig.title} caption={fig.caption} src={fig.src} {on_open} />
        }
    });

    let content_key: AttrValue = (*selected)
        .and_then(|i| FIGURES.get(i))
        .map(|fig| AttrValue::Static(fig.src))
        .unwrap_or_default();
    let modal_content = (*selected).and_then(|i| FIGURES.get(i)).map(|fig| {
        html! { <img src={fig.src} alt={fig.title} style="max-width:80vw; max-height:80vh; display:block;" draggable="false" /> }
    });

    let comparisons = ASSISTANTS.iter().map(|o| html! {
        <FeatureCard key={o.title} title={o.title} tagline={o.tagline}
            features={attr_list(o.features)} collapsed_limit={FeatureList::COMPARISON_LIMIT} />
    });
    let plans = PLANS.iter().map(|o| html! {
        <FeatureCard key={o.title} title={o.title} tagline={o.tagline} highlight={true}
            features={attr_list(o.features)} collapsed_limit={FeatureList::PRICING_LIMIT}
            wording={ToggleWording::ShowMore} />
    });

    let week_one = html! {
        <WeekModule week={1} hours={6} title="Prompting foundations"
            subtitle="From single prompts to structured conversations"
            objectives={attr_list(&["Write task-focused prompts", "Compare model outputs"])}
            key_points={vec![
                KeyPoint {
                    title: "Context windows".into(),
                    description: "What fits and what gets dropped".into(),
                },
                KeyPoint {
                    title: "Few-shot examples".into(),
                    description: "Steering output format".into(),
                },
            ]}
            practice={attr_list(&["Rewrite three prompts", "Log results in a table"])} />
    };

    html! {
        <ContextProvider<SiteConfig> context={props.config.clone()}>
            <Navigation brand="AI Course" items={nav_items} />
            <main id="materials" style="padding:88px 20px 40px; max-width:1100px; margin:0 auto;">
                <h2 style="margin:0 0 16px 0;">{"Materials"}</h2>
                <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(280px, 1fr)); gap:16px;">
                    { for cards }
                </div>
                <h2 id="compare" style="margin:32px 0 16px 0;">{"Compare"}</h2>
                <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(280px, 1fr)); gap:16px;">
                    { for comparisons }
                    { for plans }
                </div>
                <h2 id="roadmap" style="margin:32px 0 16px 0;">{"Roadmap"}</h2>
                { week_one }
            </main>
            <ImageModal is_open={selected.is_some()} {on_close} {content_key}>
                { for modal_content }
            </ImageModal>
        </ContextProvider<SiteConfig>>
    }
}
