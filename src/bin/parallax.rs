//! Scrolling background demo
//!
//! Headless: scrolls one background tile drawn twice side by side and logs
//! the draw offsets once per virtual second.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use food_ninja::consts::{FRAMES_PER_SECOND, SCREEN_WIDTH};
    use food_ninja::sim::WrappingScroll;

    env_logger::init();

    let seconds: u32 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);

    let mut scroll = WrappingScroll::new(SCREEN_WIDTH, 2.0);
    log::info!("Scrolling {}px tile at {}px/frame for {}s", scroll.tile_width, scroll.speed, seconds);

    for frame in 1..=seconds * FRAMES_PER_SECOND as u32 {
        scroll.advance();
        if frame % FRAMES_PER_SECOND as u32 == 0 {
            let [left, right] = scroll.offsets();
            log::info!("t={:>3}s tiles at x={} and x={}", frame / FRAMES_PER_SECOND as u32, left, right);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Native-only demo
}
