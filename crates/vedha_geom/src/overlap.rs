//! Disk-disk overlap area.

use std::f64::consts::PI;

/// Area of intersection of two circular disks with radii `r1` and `r2`
/// whose centers are `d` apart. Units are the caller's; the result is in
/// their square.
///
/// Callers gate on a cheap bounding test first, so the inputs satisfy
/// `d < r1 + r2` up to rounding. Full enclosure (including `d == 0` and
/// equal radii) is handled by a dedicated branch and never reaches the
/// two-segment formula, whose denominators vanish there.
pub fn overlap_area(r1: f64, r2: f64, d: f64) -> f64 {
    let (big, small) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };

    if big >= small + d {
        return PI * small * small;
    }

    let d2 = d * d;
    // Standard two-circular-segment lens formula.
    let seg_small = ((d2 + small * small - big * big) / (2.0 * d * small))
        .clamp(-1.0, 1.0)
        .acos();
    let seg_big = ((d2 + big * big - small * small) / (2.0 * d * big))
        .clamp(-1.0, 1.0)
        .acos();
    let radicand =
        ((-d + small + big) * (d + small - big) * (d - small + big) * (d + small + big)).max(0.0);

    small * small * seg_small + big * big * seg_big - 0.5 * radicand.sqrt()
}
