// Example: thumbs piled up at the end of the track hand the drag to the first of them.
use rangeseek::{PointerAction, RangeSeekBar, RangeSeekOptions};

fn main() {
    let mut bar = RangeSeekBar::new(RangeSeekOptions::new(3));
    bar.set_layout(120.0, 10.0);
    for i in 0..bar.thumb_count() {
        bar.set_value(i, 100.0).expect("index in range");
    }
    println!("piled up: positions={:?}", bar.thumbs().positions());

    bar.on_pointer(PointerAction::Down, 40.0);
    println!(
        "active={:?} positions={:?}",
        bar.active_index(),
        bar.thumbs().positions()
    );
    bar.on_pointer(PointerAction::Up, 40.0);
    println!("values={:?}", bar.values());
}
