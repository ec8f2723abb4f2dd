use super::drawing_surface::DrawingSurface;
use crate::config::SurfaceConfig;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Stored overrides are read once per page load.
    let config = use_state(SurfaceConfig::load);

    html! { <DrawingSurface config={(*config).clone()} /> }
}
