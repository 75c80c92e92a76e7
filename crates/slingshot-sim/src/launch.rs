//! Launch builder: turns a press-drag-release gesture into a projectile.

use slingshot_core::components::Projectile;
use slingshot_core::types::Point;

/// Build a projectile at `anchor` whose velocity is the drag vector
/// `release - anchor` divided by `velocity_scale`.
///
/// `velocity_scale` must be nonzero; `SimConfig::validate` enforces this.
pub fn build(anchor: Point, release: Point, mass: f64, velocity_scale: f64) -> Projectile {
    let velocity = Point::new(
        (release.x - anchor.x) / velocity_scale,
        (release.y - anchor.y) / velocity_scale,
    );
    Projectile::new(anchor, velocity, mass)
}
