use gloo_events::EventListener;
use tracing::warn;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::distance_label::DistanceLabel;
use crate::config::SurfaceConfig;
use crate::error::{Result, SurfaceError};
use crate::model::{LabelView, StrokeState};
use crate::surface::DrawingSession;

#[derive(Properties, PartialEq, Clone)]
pub struct DrawingSurfaceProps {
    #[prop_or_default]
    pub config: SurfaceConfig,
}

fn canvas_style(config: &SurfaceConfig) -> String {
    format!(
        "position:fixed; inset:0; z-index:0; display:block; touch-action:none; cursor:crosshair; background:{};",
        config.background
    )
}

#[function_component(DrawingSurface)]
pub fn drawing_surface(props: &DrawingSurfaceProps) -> Html {
    let canvas_ref = use_node_ref();
    // Lives as long as the component, so the distance survives config changes.
    let stroke = use_mut_ref(StrokeState::new);
    let label = use_state(LabelView::default);

    {
        let canvas_ref = canvas_ref.clone();
        let stroke = stroke.clone();
        let label = label.clone();
        use_effect_with(props.config.clone(), move |config| {
            let mount = || -> Result<Vec<EventListener>> {
                let element = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or(SurfaceError::CanvasNotMounted)?;
                let on_label = Callback::from(move |view: LabelView| label.set(view));
                let session = DrawingSession::new(element, stroke, on_label, config)?;
                Ok(session.attach())
            };
            let listeners = mount().unwrap_or_else(|error| {
                warn!(%error, "drawing surface disabled");
                Vec::new()
            });
            move || drop(listeners)
        });
    }

    html! {
        <>
            <canvas ref={canvas_ref} class="drawing-surface" style={canvas_style(&props.config)} />
            <DistanceLabel view={*label} config={props.config.clone()} />
        </>
    }
}
