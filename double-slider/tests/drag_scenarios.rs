use std::{cell::RefCell, rc::Rc};

use double_slider::{
    DoubleSlider, Edge, HeadlessSurface, PointerEvent, PointerHub, Rect, Region, Selection,
    SliderConfig, SliderSurface, Thumb, ThumbPercentages,
};

struct Harness {
    hub: PointerHub,
    slider: DoubleSlider<HeadlessSurface>,
    committed: Rc<RefCell<Vec<Selection>>>,
}

impl Harness {
    fn new(config: SliderConfig) -> Self {
        Self::with_surface(config, HeadlessSurface::default())
    }

    fn with_surface(config: SliderConfig, surface: HeadlessSurface) -> Self {
        let hub = PointerHub::new();
        let slider = DoubleSlider::new(&config, surface, &hub).unwrap();
        let committed = Rc::new(RefCell::new(Vec::new()));
        let sink = committed.clone();
        slider.subscribe(move |selection| sink.borrow_mut().push(selection));
        Self {
            hub,
            slider,
            committed,
        }
    }

    /// Client x of the thumb's logical edge.
    fn thumb_x(&self, thumb: Thumb) -> f64 {
        self.slider.with_surface(|surface| {
            let rect = surface.rect(thumb.region()).unwrap();
            match thumb {
                Thumb::Low => rect.right(),
                Thumb::High => rect.left,
            }
        })
    }

    fn x_at(&self, percent: f64) -> f64 {
        self.slider.with_surface(|surface| surface.client_x_at(percent))
    }

    /// Presses `thumb` on its edge, drags to `client_x` and releases.
    fn drag(&self, thumb: Thumb, client_x: f64) {
        assert!(self.slider.press_thumb(thumb, self.thumb_x(thumb)));
        self.hub.dispatch(PointerEvent::moved(client_x));
        self.hub.dispatch(PointerEvent::released(client_x));
    }

    fn commits(&self) -> Vec<Selection> {
        self.committed.borrow().clone()
    }
}

#[test]
fn initial_percentages_are_floored() {
    let harness = Harness::new(
        SliderConfig::default()
            .min(100.0)
            .max(200.0)
            .selected(Selection::new(120.0, 180.0)),
    );
    assert_eq!(
        harness.slider.percentages(),
        ThumbPercentages::new(20.0, 20.0)
    );

    let uneven = Harness::new(
        SliderConfig::default()
            .min(0.0)
            .max(3.0)
            .selected(Selection::new(1.0, 2.0)),
    );
    assert_eq!(uneven.slider.percentages(), ThumbPercentages::new(33.0, 33.0));
}

#[test]
fn construction_round_trips_selection() {
    for (from, to) in [(100.0, 200.0), (120.0, 180.0), (150.0, 150.0), (101.0, 199.0)] {
        let harness = Harness::new(SliderConfig::default().selected(Selection::new(from, to)));
        assert_eq!(harness.slider.value(), Selection::new(from, to));
    }

    // With a domain wider than 100 the whole-percent floor loses precision.
    let harness = Harness::new(
        SliderConfig::default()
            .min(0.0)
            .max(4000.0)
            .selected(Selection::new(1234.0, 3210.0)),
    );
    let value = harness.slider.value();
    assert!((value.from - 1234.0).abs() <= 40.0);
    assert!((value.to - 3210.0).abs() <= 40.0);
    assert!(value.from <= 1234.0 && value.to >= 3210.0);
}

#[test]
fn low_thumb_stops_at_high_thumb() {
    let harness = Harness::new(SliderConfig::default());
    harness.drag(Thumb::High, harness.x_at(70.0));
    assert_eq!(harness.slider.percentages().right, 30.0);

    harness.drag(Thumb::Low, harness.x_at(90.0));
    assert_eq!(harness.slider.percentages(), ThumbPercentages::new(70.0, 30.0));
    assert_eq!(
        harness.commits(),
        vec![Selection::new(100.0, 170.0), Selection::new(170.0, 170.0)]
    );
}

#[test]
fn high_thumb_stops_at_low_thumb() {
    let harness = Harness::new(SliderConfig::default());
    harness.drag(Thumb::Low, harness.x_at(40.0));
    harness.drag(Thumb::High, harness.x_at(10.0));
    assert_eq!(harness.slider.percentages(), ThumbPercentages::new(40.0, 60.0));
    assert_eq!(harness.slider.value(), Selection::new(140.0, 140.0));
}

#[test]
fn negative_domain_rounds_halves_up() {
    let harness = Harness::new(SliderConfig::default().min(-10.0).max(0.0));
    harness.drag(Thumb::Low, harness.x_at(25.0));
    harness.drag(Thumb::High, harness.x_at(75.0));

    assert_eq!(
        harness.commits(),
        vec![Selection::new(-7.0, 0.0), Selection::new(-7.0, -2.0)]
    );
    harness.slider.with_surface(|surface| {
        assert_eq!(surface.text(Region::From), "$-7");
        assert_eq!(surface.text(Region::To), "$-2");
    });
}

#[test]
fn grab_point_inside_a_wide_thumb_is_kept() {
    let harness = Harness::with_surface(
        SliderConfig::default(),
        HeadlessSurface::default().with_thumb_width(40.0),
    );
    let middle = harness.thumb_x(Thumb::Low) - 20.0;
    assert!(harness.slider.press_thumb(Thumb::Low, middle));
    harness.hub.dispatch(PointerEvent::moved(480.0));
    assert_eq!(harness.slider.percentages().left, 50.0);

    harness.hub.dispatch(PointerEvent::released(480.0));
    assert_eq!(harness.commits(), vec![Selection::new(150.0, 200.0)]);
}

#[test]
fn drag_keeps_going_past_the_track() {
    let harness = Harness::new(SliderConfig::default().selected(Selection::new(150.0, 160.0)));
    assert!(harness.slider.press_thumb(Thumb::Low, harness.thumb_x(Thumb::Low)));
    harness.hub.dispatch(PointerEvent::moved(-400.0));
    assert_eq!(harness.slider.percentages().left, 0.0);
    harness.hub.dispatch(PointerEvent::released(-400.0));
    assert_eq!(harness.commits(), vec![Selection::new(100.0, 160.0)]);
}

#[test]
fn intermediate_moves_are_not_committed() {
    let harness = Harness::new(SliderConfig::default());
    assert!(harness.slider.press_thumb(Thumb::Low, harness.thumb_x(Thumb::Low)));
    for percent in [10.0, 20.0, 30.0, 25.0] {
        harness.hub.dispatch(PointerEvent::moved(harness.x_at(percent)));
        assert_eq!(harness.slider.percentages().left, percent);
        assert!(harness.commits().is_empty());
    }
    harness.hub.dispatch(PointerEvent::released(harness.x_at(25.0)));
    assert_eq!(harness.commits(), vec![Selection::new(125.0, 200.0)]);
}

#[test]
fn value_reflects_drag_in_progress() {
    let harness = Harness::new(SliderConfig::default());
    assert!(harness.slider.press_thumb(Thumb::High, harness.thumb_x(Thumb::High)));
    harness.hub.dispatch(PointerEvent::moved(harness.x_at(55.0)));
    assert_eq!(harness.slider.value(), Selection::new(100.0, 155.0));
    assert!(harness.slider.is_dragging());
}

#[test]
fn labels_follow_their_own_thumb() {
    let harness = Harness::new(SliderConfig::default().format_value(|v| format!("{v} ₽")));
    assert!(harness.slider.press_thumb(Thumb::High, harness.thumb_x(Thumb::High)));
    harness.hub.dispatch(PointerEvent::moved(harness.x_at(75.0)));
    harness.slider.with_surface(|surface| {
        assert_eq!(surface.text(Region::From), "100 ₽");
        assert_eq!(surface.text(Region::To), "175 ₽");
        assert_eq!(surface.edge(Region::ThumbRight, Edge::Right), Some(25.0));
        assert_eq!(surface.edge(Region::Progress, Edge::Right), Some(25.0));
        assert_eq!(surface.edge(Region::ThumbLeft, Edge::Left), Some(0.0));
    });
}

#[test]
fn track_is_measured_on_every_move() {
    let harness = Harness::new(SliderConfig::default());
    assert!(harness.slider.press_thumb(Thumb::Low, harness.thumb_x(Thumb::Low)));
    harness.hub.dispatch(PointerEvent::moved(500.0));
    assert_eq!(harness.slider.percentages().left, 50.0);

    // The page reflowed: the track now starts at 200px and is 400px wide.
    harness
        .slider
        .with_surface_mut(|surface| surface.set_track(Rect::new(200.0, 0.0, 400.0, 4.0)));
    harness.hub.dispatch(PointerEvent::moved(500.0));
    assert_eq!(harness.slider.percentages().left, 75.0);
}

#[test]
fn zero_width_track_moves_are_ignored() {
    let harness = Harness::new(SliderConfig::default().selected(Selection::new(130.0, 200.0)));
    assert!(harness.slider.press_thumb(Thumb::Low, harness.thumb_x(Thumb::Low)));
    harness
        .slider
        .with_surface_mut(|surface| surface.set_track(Rect::new(40.0, 0.0, 0.0, 0.0)));
    harness.hub.dispatch(PointerEvent::moved(900.0));
    assert_eq!(harness.slider.percentages().left, 30.0);

    harness.hub.dispatch(PointerEvent::released(900.0));
    assert_eq!(harness.commits(), vec![Selection::new(130.0, 200.0)]);
}

#[test]
fn release_without_press_is_a_no_op() {
    let harness = Harness::new(SliderConfig::default());
    let before = harness.slider.with_surface(|s| s.mutations());
    assert_eq!(harness.hub.dispatch(PointerEvent::released(0.0)), 0);
    harness.hub.dispatch(PointerEvent::moved(10.0));
    assert!(harness.commits().is_empty());
    assert_eq!(harness.slider.with_surface(|s| s.mutations()), before);
}

#[test]
fn reset_after_dragging_restores_original_bounds() {
    let harness = Harness::new(SliderConfig::default().selected(Selection::new(120.0, 180.0)));
    harness.drag(Thumb::Low, harness.x_at(45.0));
    harness.drag(Thumb::High, harness.x_at(60.0));
    assert_eq!(harness.slider.value(), Selection::new(145.0, 160.0));

    harness.slider.reset();
    assert_eq!(harness.slider.value(), Selection::new(100.0, 200.0));
    assert_eq!(harness.slider.percentages(), ThumbPercentages::FULL);
    harness.slider.with_surface(|surface| {
        assert_eq!(surface.text(Region::From), "$100");
        assert_eq!(surface.text(Region::To), "$200");
    });
}

#[test]
fn reset_is_idempotent() {
    let harness = Harness::new(SliderConfig::default().selected(Selection::new(110.0, 190.0)));
    harness.drag(Thumb::Low, harness.x_at(33.0));

    harness.slider.reset();
    let once = (
        harness.slider.state(),
        harness.slider.with_surface(|s| {
            (
                s.text(Region::From).to_owned(),
                s.text(Region::To).to_owned(),
                s.rect(Region::Progress),
            )
        }),
    );
    harness.slider.reset();
    let twice = (
        harness.slider.state(),
        harness.slider.with_surface(|s| {
            (
                s.text(Region::From).to_owned(),
                s.text(Region::To).to_owned(),
                s.rect(Region::Progress),
            )
        }),
    );
    assert_eq!(once, twice);
}

#[test]
fn reset_mid_drag_detaches_listener() {
    let harness = Harness::new(SliderConfig::default());
    assert!(harness.slider.press_thumb(Thumb::High, harness.thumb_x(Thumb::High)));
    harness.hub.dispatch(PointerEvent::moved(harness.x_at(50.0)));
    harness.slider.reset();

    assert_eq!(harness.hub.listener_count(), 0);
    assert!(!harness.slider.with_surface(|s| s.is_dragging()));
    harness.hub.dispatch(PointerEvent::moved(harness.x_at(20.0)));
    harness.hub.dispatch(PointerEvent::released(harness.x_at(20.0)));
    assert!(harness.commits().is_empty());
    assert_eq!(harness.slider.value(), Selection::new(100.0, 200.0));

    // A fresh drag works after the forced reset.
    harness.drag(Thumb::High, harness.x_at(80.0));
    assert_eq!(harness.commits(), vec![Selection::new(100.0, 180.0)]);
}

#[test]
fn destroy_then_document_move_changes_nothing() {
    let harness = Harness::new(SliderConfig::default());
    assert!(harness.slider.press_thumb(Thumb::Low, harness.thumb_x(Thumb::Low)));
    harness.slider.destroy();

    let mutations = harness.slider.with_surface(|s| s.mutations());
    assert!(!harness.slider.with_surface(|s| s.is_attached()));
    assert_eq!(harness.hub.listener_count(), 0);

    assert_eq!(harness.hub.dispatch(PointerEvent::moved(600.0)), 0);
    assert_eq!(harness.hub.dispatch(PointerEvent::released(600.0)), 0);
    assert_eq!(harness.slider.with_surface(|s| s.mutations()), mutations);
    assert!(harness.commits().is_empty());
}

#[test]
fn destroy_is_idempotent_and_final() {
    let harness = Harness::new(SliderConfig::default());
    harness.slider.destroy();
    harness.slider.destroy();
    let mutations = harness.slider.with_surface(|s| s.mutations());

    assert!(harness.slider.is_destroyed());
    assert!(!harness.slider.press_thumb(Thumb::Low, 0.0));
    harness.slider.reset();
    harness
        .slider
        .set_selected(Selection::new(150.0, 160.0))
        .unwrap();
    assert_eq!(harness.slider.with_surface(|s| s.mutations()), mutations);
    assert_eq!(harness.hub.listener_count(), 0);
}

#[test]
fn sliders_sharing_a_hub_stay_independent() {
    let hub = PointerHub::new();
    let price = DoubleSlider::new(&SliderConfig::default(), HeadlessSurface::default(), &hub)
        .unwrap();
    let weight = DoubleSlider::new(
        &SliderConfig::default().min(0.0).max(10.0),
        HeadlessSurface::new(Rect::new(0.0, 100.0, 1000.0, 4.0)),
        &hub,
    )
    .unwrap();

    assert!(price.press_thumb(Thumb::Low, 0.0));
    hub.dispatch(PointerEvent::moved(500.0));
    hub.dispatch(PointerEvent::released(500.0));

    assert_eq!(price.value(), Selection::new(150.0, 200.0));
    assert_eq!(weight.value(), Selection::new(0.0, 10.0));
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn handler_destroying_another_slider_mid_dispatch() {
    let hub = PointerHub::new();
    let first = DoubleSlider::new(&SliderConfig::default(), HeadlessSurface::default(), &hub)
        .unwrap();
    let second = Rc::new(
        DoubleSlider::new(&SliderConfig::default(), HeadlessSurface::default(), &hub).unwrap(),
    );

    let victim = second.clone();
    first.subscribe(move |_| victim.destroy());

    assert!(first.press_thumb(Thumb::Low, 0.0));
    assert!(second.press_thumb(Thumb::High, 1000.0));
    hub.dispatch(PointerEvent::released(0.0));

    assert!(second.is_destroyed());
    assert_eq!(hub.listener_count(), 0);
}
