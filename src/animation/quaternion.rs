//! Quaternion exponential map and SQUAD helpers.
//!
//! `glam` only handles unit quaternions; the tangent construction below
//! needs the general exponential and logarithm, which leave the unit sphere.

use glam::{DQuat, DVec3};

/// Below this imaginary-part norm the vector part is treated as zero.
const NORM_EPSILON: f64 = 1e-12;

/// Quaternion exponential `e^q`.
pub fn exp(q: DQuat) -> DQuat {
    let v = DVec3::new(q.x, q.y, q.z);
    let norm = v.length();
    let scale = q.w.exp();

    if norm <= NORM_EPSILON {
        return DQuat::from_xyzw(0.0, 0.0, 0.0, scale * norm.cos());
    }

    let v = v * (scale * norm.sin() / norm);
    DQuat::from_xyzw(v.x, v.y, v.z, scale * norm.cos())
}

/// Principal quaternion logarithm, with the branch cut on the negative real
/// axis.
pub fn log(q: DQuat) -> DQuat {
    let v = DVec3::new(q.x, q.y, q.z);
    let norm = v.length();
    let w = q.length().ln();

    if norm <= NORM_EPSILON {
        return DQuat::from_xyzw(0.0, 0.0, 0.0, w);
    }

    let v = v * (norm.atan2(q.w) / norm);
    DQuat::from_xyzw(v.x, v.y, v.z, w)
}

/// SQUAD inner control quaternion at knot `q` between `prev` and `next`:
/// `q · exp(-(log(q⁻¹·next) + log(q⁻¹·prev)) / 4)`.
pub fn squad_tangent(prev: DQuat, q: DQuat, next: DQuat) -> DQuat {
    let inv = q.inverse();
    let sum = log(inv * next) + log(inv * prev);
    (q * exp(-sum / 4.0)).normalize()
}

/// Spherical quadrangle interpolation between knots `q0`, `q1` with inner
/// control quaternions `s0`, `s1`.
pub fn squad(q0: DQuat, q1: DQuat, s0: DQuat, s1: DQuat, h: f64) -> DQuat {
    q0.slerp(q1, h).slerp(s0.slerp(s1, h), 2.0 * h * (1.0 - h))
}
