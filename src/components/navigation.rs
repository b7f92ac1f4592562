use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom::{self, Passive, Subscribe};
use crate::state::{NavAction, NavState};

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: AttrValue,
    pub href: AttrValue,
}

#[derive(Properties, PartialEq, Clone)]
pub struct NavigationProps {
    pub brand: AttrValue,
    pub items: Vec<NavItem>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let nav = {
        let nav_config = config.nav.clone();
        use_reducer(move || NavState::new(&nav_config))
    };

    // Window scroll listener for the component lifetime
    {
        let nav = nav.clone();
        use_effect_with((), move |_| {
            let listener = dom::window_target().map(move |target| {
                target.subscribe(
                    "scroll",
                    Passive::Yes,
                    Box::new(move |_: &web_sys::Event| {
                        if let Ok(win) = dom::window() {
                            if let Ok(y) = win.scroll_y() {
                                nav.dispatch(NavAction::Scrolled(y));
                            }
                        }
                    }),
                )
            });
            if let Err(err) = &listener {
                log::warn!("navigation will not auto-hide: {err}");
            }
            move || drop(listener)
        });
    }

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::ToggleMenu))
    };
    let close_menu = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::CloseMenu))
    };

    let bar_style = format!(
        "position:fixed; top:0; left:0; right:0; z-index:50; transition:transform 0.3s; transform:translateY({});",
        if nav.visible { "0" } else { "-100%" }
    );
    let menu_style = format!(
        "position:fixed; top:64px; left:0; right:0; bottom:0; background:#0e1116; padding:20px; display:flex; flex-direction:column; gap:16px; transition:opacity 0.3s; opacity:{}; pointer-events:{};",
        if nav.menu_open { "1" } else { "0" },
        if nav.menu_open { "auto" } else { "none" }
    );

    html! {
        <nav style={bar_style}>
            <div style="height:64px; display:flex; align-items:center; justify-content:space-between; padding:0 20px; background:rgba(22,27,34,0.9); border-bottom:1px solid #30363d; backdrop-filter:blur(12px);">
                <a href="/" style="font-size:20px; font-weight:600; color:#58a6ff; text-decoration:none;">{ props.brand.clone() }</a>
                <div class="nav-desktop" style="display:flex; gap:24px;">
                    { for props.items.iter().map(|item| html! {
                        <a key={item.href.to_string()} href={item.href.clone()} style="color:#c9d1d9; text-decoration:none; font-weight:500;">{ item.label.clone() }</a>
                    }) }
                </div>
                <button class="nav-toggle" onclick={toggle_menu} aria-label="Toggle menu" style="padding:4px 10px;">
                    { if nav.menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            <div class="nav-mobile" style={menu_style}>
                { for props.items.iter().map(|item| html! {
                    <a key={item.href.to_string()} href={item.href.clone()} onclick={close_menu.clone()} style="color:#c9d1d9; text-decoration:none; font-size:20px; font-weight:600;">{ item.label.clone() }</a>
                }) }
            </div>
        </nav>
    }
}
