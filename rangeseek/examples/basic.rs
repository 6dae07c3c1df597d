// Example: a two-thumb min/max selector driven by a simulated drag.
use rangeseek::{PointerAction, RangeSeekBar, RangeSeekOptions, SeekEvent};

fn main() {
    let options = RangeSeekOptions::new(2)
        .with_scale_range(0.0, 100.0, 5.0)
        .expect("valid scale")
        .with_on_event(Some(|_: &RangeSeekBar, e: &SeekEvent| {
            println!("{:?} thumb={} value={}", e.kind, e.index, e.value);
        }));
    let mut bar = RangeSeekBar::new(options);

    // A 220 px wide track with 20 px wide thumbs.
    bar.set_layout(220.0, 10.0);
    println!("track={:?} values={:?}", bar.track(), bar.values());

    bar.on_pointer(PointerAction::Down, 60.0);
    for x in [80.0, 120.0, 170.0, 250.0] {
        bar.on_pointer(PointerAction::Move, x);
    }
    bar.on_pointer(PointerAction::Up, 250.0);

    println!("after drag: values={:?}", bar.values());
}
