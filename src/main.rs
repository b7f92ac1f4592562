mod components;
mod config;
mod dom;
mod error;
mod state;
mod util;

use components::app::{App, AppProps};
use config::SiteConfig;

fn main() {
    let (config, warning) = SiteConfig::load();
    util::init_logging(config.log_level);
    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
    log::info!(
        "starting with viewport scale range [{}, {}]",
        config.viewport.min_scale,
        config.viewport.max_scale
    );
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
