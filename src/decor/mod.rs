//! Decorative layer: particle animation and smooth scrolling.
//!
//! No state worth testing beyond "does not throw"; the particle interval
//! still returns a cancellable handle like every other scheduled task.

use crate::schedule::{self, TaskHandle};
use crate::surface::FormSurface;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

/// One transient background particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Diameter in pixels, 2–6.
    pub size_px: f32,
    /// Horizontal start position as a percentage of the viewport.
    pub left_pct: f32,
    /// Rise animation duration in milliseconds, 2000–5000.
    pub duration_ms: u64,
}

impl Particle {
    /// A particle with randomized size, position, and duration.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: rng.random_range(2.0..6.0),
            left_pct: rng.random_range(0.0..100.0),
            duration_ms: rng.random_range(2_000..5_000),
        }
    }
}

/// Spawn a particle through the surface every `period` until the returned
/// handle is cancelled.
///
/// Must be called within a Tokio runtime.
pub fn start_particles(surface: Arc<dyn FormSurface>, period: Duration) -> TaskHandle {
    schedule::every(period, move || {
        let particle = Particle::random(&mut rand::rng());
        surface.spawn_particle(&particle);
    })
}

/// Smooth-scroll handler for same-page anchor links.
///
/// Returns `true` when the href was an anchor and the scroll was issued;
/// other hrefs are left to default navigation.
pub fn follow_anchor(surface: &dyn FormSurface, href: &str) -> bool {
    match href.strip_prefix('#') {
        Some(target) if !target.is_empty() => {
            surface.scroll_to(target);
            true
        }
        _ => false,
    }
}
