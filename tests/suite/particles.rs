//! Particle field behavior through the app loop and the overlay renderer.

use std::time::Duration;

use folio_engine::{App, MAX_PARTICLES, UiOptions};
use folio_types::particle::SEED_BURST;

use crate::common::render;

#[test]
fn the_field_seeds_once_layout_is_known() {
    let mut app = App::new(UiOptions::default(), None);
    assert!(app.particles.is_empty(), "nothing spawns before layout");

    render(&mut app);
    app.advance(Duration::ZERO);
    assert_eq!(app.particles.len(), SEED_BURST);
}

#[test]
fn the_field_grows_to_the_cap_and_no_further() {
    let mut app = App::new(UiOptions::default(), None);
    render(&mut app);
    app.advance(Duration::ZERO);
    app.advance(Duration::from_secs(60));
    assert_eq!(app.particles.len(), MAX_PARTICLES);
}

#[test]
fn reduced_motion_clears_the_field() {
    let mut app = App::new(UiOptions::default(), None);
    render(&mut app);
    app.advance(Duration::ZERO);
    assert!(!app.particles.is_empty());

    app.toggle_reduced_motion();
    assert!(app.particles.is_empty());

    app.advance(Duration::from_secs(5));
    assert!(app.particles.is_empty());
}

#[test]
fn particles_off_in_options_spawns_none() {
    let mut app = App::new(
        UiOptions {
            particles: false,
            ..UiOptions::default()
        },
        None,
    );
    render(&mut app);
    app.advance(Duration::from_secs(5));
    assert!(app.particles.is_empty());
}

#[test]
fn particle_glyphs_reach_the_frame() {
    let mut app = App::new(UiOptions::default(), None);
    render(&mut app);
    app.advance(Duration::from_secs(3));
    let buffer = render(&mut app);

    let ramp = folio_tui::glyphs(app.view.ui_options).particles;
    let mut drawn = 0;
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).expect("cell");
            if ramp.contains(&cell.symbol()) {
                drawn += 1;
            }
        }
    }
    assert!(drawn > 0, "no particle glyphs rendered");
}
