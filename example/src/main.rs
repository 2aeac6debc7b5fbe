use double_slider::{HeadlessSurface, PointerEvent, PointerHub, Region, SliderSurface, Thumb};
use example::{ProductListPage, ProductStatus};
use tracing::info;

const DEFAULT_BACKEND: &str = "http://localhost:3000/";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("off,double_slider=info,example=info"))?;
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let backend = std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND.to_owned());
    let hub = PointerHub::new();
    let page = ProductListPage::new(&backend, HeadlessSurface::default(), &hub)?;
    let slider = page.slider();

    // Drag the low thumb a quarter of the way in.
    let low = slider.with_surface(|s| s.rect(Region::ThumbLeft).map(|r| r.right()));
    slider.press_thumb(Thumb::Low, low.unwrap_or_default());
    for x in [80.0, 160.0, 250.0] {
        hub.dispatch(PointerEvent::moved(x));
    }
    hub.dispatch(PointerEvent::released(250.0));

    // Pull the high thumb down to 60%.
    let high = slider.with_surface(|s| s.rect(Region::ThumbRight).map(|r| r.left));
    slider.press_thumb(Thumb::High, high.unwrap_or_default());
    hub.dispatch(PointerEvent::moved(600.0));
    hub.dispatch(PointerEvent::released(600.0));
    info!(value = ?slider.value(), "price range selected");

    page.search_title("chair");
    page.filter_status(Some(ProductStatus::Active));
    page.load_more();
    page.clear_filters();

    for url in page.requests() {
        println!("{url}");
    }
    Ok(())
}
