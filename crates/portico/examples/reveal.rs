//! Drives the sign-in reveal headlessly and prints the animated values.
//!
//! Run with: cargo run -p portico --example reveal [config.toml]

use std::time::{Duration, Instant};

use portico::prelude::*;

fn print_frame(frame: usize, screen: &SignInScreen) {
    let values = screen.derived();
    println!(
        "{frame:>3}  progress {:.3}  buttons y {:>6.1}  background y {:>7.1}  form opacity {:.2}  close {:>5.1}°",
        values.progress,
        values.button_y,
        values.background_y,
        values.form_opacity,
        values.close_icon_rotation,
    );
}

fn run(screen: &mut SignInScreen, start: Instant) -> Instant {
    let frame_time = Duration::from_millis(16);
    let mut now = start;
    let mut frame = 0;
    screen.advance_to(now);
    while screen.is_animating() {
        now += frame_time;
        screen.advance_to(now);
        if frame % 4 == 0 || !screen.is_animating() {
            print_frame(frame, screen);
        }
        frame += 1;
    }
    now
}

fn main() -> portico::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => RevealConfig::from_path(path)?,
        None => RevealConfig::default(),
    };
    let mut screen = SignInScreen::mount(config)?;

    println!("-- tap SIGN IN");
    screen.handle_gesture(GestureEvent::tap(NodeId::SignInButton));
    let now = run(&mut screen, Instant::now());

    for node in &screen.layout().nodes {
        println!("   {:?} at {:?} opacity {:.2}", node.id, node.frame, node.opacity);
    }

    println!("-- tap close");
    screen.handle_gesture(GestureEvent::tap(NodeId::CloseButton));
    run(&mut screen, now);

    screen.unmount();
    Ok(())
}
