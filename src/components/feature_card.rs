use yew::prelude::*;

use crate::state::{FeatureList, FeatureListAction, ToggleWording};

#[derive(Properties, PartialEq, Clone)]
pub struct FeatureCardProps {
    pub title: AttrValue,
    pub tagline: AttrValue,
    pub features: Vec<AttrValue>,
    /// Items shown while collapsed.
    pub collapsed_limit: usize,
    #[prop_or_default]
    pub wording: ToggleWording,
    #[prop_or_default]
    pub highlight: bool,
}

/// Card listing provider or plan features, collapsed to the first few.
#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let list = {
        let (total, limit, wording) = (props.features.len(), props.collapsed_limit, props.wording);
        use_reducer(move || FeatureList::new(total, limit, wording))
    };

    {
        let list = list.dispatcher();
        use_effect_with(props.features.len(), move |total| {
            list.dispatch(FeatureListAction::Resize(*total));
            || ()
        });
    }

    let toggle = {
        let list = list.dispatcher();
        Callback::from(move |_: MouseEvent| list.dispatch(FeatureListAction::Toggle))
    };

    let border = if props.highlight { "2px solid #6fc2ff" } else { "1px solid #30363d" };
    let items = props.features.iter().take(list.visible_count()).map(|f| {
        html! { <li style="margin-bottom:6px;">{ "✓ " }{ f.clone() }</li> }
    });

    html! {<div style={format!("background:#161b22; border:{border}; border-radius:8px; padding:16px;")}>
        <h3 style="margin:0 0 4px 0;">{ props.title.clone() }</h3>
        <p style="margin:0 0 12px 0; font-size:13px; opacity:0.7;">{ props.tagline.clone() }</p>
        <ul style="list-style:none; padding:0; margin:0; font-size:14px;">{ for items }</ul>
        if let Some(label) = list.toggle_label() {
            <button onclick={toggle}
                style="margin-top:10px; background:none; border:none; color:#6fc2ff; cursor:pointer; padding:0;">
                { label }
            </button>
        }
    </div>}
}
