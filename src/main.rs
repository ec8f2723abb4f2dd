fn main() {
    if let Err(error) = drawing_surface::logging::configure() {
        // Drawing still works without logging.
        tracing::error!(error = error.to_string());
    }

    yew::Renderer::<drawing_surface::App>::new().render();
}
