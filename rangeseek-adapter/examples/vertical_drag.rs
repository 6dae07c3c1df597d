use rangeseek::{Orientation, PointerAction, RangeSeekOptions};
use rangeseek_adapter::{
    AdapterOptions, Controller, MeasureSpec, Padding, PointerEvent, ThumbSize,
};

fn main() {
    // Example: a vertical three-thumb bar hosted without any UI objects.
    //
    // An adapter would:
    // - call measure(..) and on_layout(..) from its layout pass
    // - forward raw pointer events in view coordinates
    // - redraw from geometry() whenever take_needs_redraw() reports a change
    let mut c = Controller::new(
        RangeSeekOptions::new(3),
        AdapterOptions::default()
            .with_orientation(Orientation::Vertical)
            .with_thumb_size(ThumbSize::new(24.0, 24.0))
            .with_padding(Padding::uniform(8.0)),
    );

    let size = c.measure(MeasureSpec::AtMost(400.0), MeasureSpec::Exactly(320.0));
    println!("measured={size:?}");
    c.on_layout(size.width, size.height);
    println!("values={:?}", c.seek_bar().values());

    let start = c.seek_bar().position(1).unwrap_or_default() + 8.0;
    c.on_pointer(PointerEvent::new(PointerAction::Down, 20.0, start));
    for dy in [10.0, 25.0, 60.0, 200.0] {
        c.on_pointer(PointerEvent::new(PointerAction::Move, 20.0, start + dy));
        if c.take_needs_redraw() {
            if let Some(g) = c.geometry() {
                println!("thumb1={:?} range={:?}", g.thumbs[1].rect, g.range);
            }
        }
    }
    c.on_pointer(PointerEvent::new(PointerAction::Up, 20.0, start + 200.0));

    println!("done: values={:?}", c.seek_bar().values());
}
