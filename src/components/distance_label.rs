use yew::prelude::*;

use crate::config::SurfaceConfig;
use crate::model::LabelView;
use crate::util::format_distance;

#[derive(Properties, PartialEq, Clone)]
pub struct DistanceLabelProps {
    pub view: LabelView,
    pub config: SurfaceConfig,
}

#[function_component(DistanceLabel)]
pub fn distance_label(props: &DistanceLabelProps) -> Html {
    let view = props.view;
    if !view.is_rendered() {
        return html! {};
    }
    let config = &props.config;
    let style = format!(
        "position:fixed; pointer-events:none; top:{}px; left:{}px; transform:translateX(-50%); \
         opacity:{}; transition:opacity {}ms; color:{}; font-family:{}; font-size:{}; \
         letter-spacing:{}; font-weight:700; filter:drop-shadow(0 4px 3px rgba(0,0,0,0.07)) \
         drop-shadow(0 2px 2px rgba(0,0,0,0.06)); white-space:nowrap;",
        view.at.y - config.label_offset_y,
        view.at.x,
        view.opacity(),
        config.label_fade_ms,
        config.label_color,
        config.label_font_family,
        config.label_font_size,
        config.label_letter_spacing,
    );
    html! {
        <div class="distance-label" style={style}>
            { format_distance(view.distance, config.distance_divisor, &config.unit_suffix) }
        </div>
    }
}
