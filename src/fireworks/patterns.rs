//! Burst pattern samplers. Each sampler returns the initial velocity of
//! every spark in a burst, in world units per tick, centered on the
//! detonation point.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::BurstPattern;

/// Downward pull applied to every spark each tick.
pub const SPARK_GRAVITY: f32 = 0.1;
/// Per-tick alpha fade; a spark lives 1.0 / SPARK_FADE ticks.
pub const SPARK_FADE: f32 = 0.02;

pub fn sample_burst(pattern: BurstPattern, rng: &mut impl Rng) -> Vec<Vec2> {
    match pattern {
        BurstPattern::Ring => ring(rng),
        BurstPattern::Heart => heart(rng),
        BurstPattern::TwinRing => twin_ring(rng),
        BurstPattern::Spiral => spiral(rng),
    }
}

/// Evenly spaced ring, 8-15 sparks, shared random speed.
fn ring(rng: &mut impl Rng) -> Vec<Vec2> {
    let count = 8 + rng.gen_range(0..8);
    let speed = rng.gen_range(2.0..5.0);
    (0..count)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / count as f32;
            Vec2::new(angle.cos(), angle.sin()) * speed
        })
        .collect()
}

/// The classic parametric heart curve, traced by 20 sparks.
fn heart(rng: &mut impl Rng) -> Vec<Vec2> {
    let scale = rng.gen_range(0.15..0.3);
    (0..20)
        .map(|i| {
            let t = std::f32::consts::TAU * i as f32 / 20.0;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            Vec2::new(x, y) * scale
        })
        .collect()
}

/// Two concentric rings, the outer fast and the inner slow, with the
/// inner ring's angles offset half a step.
fn twin_ring(rng: &mut impl Rng) -> Vec<Vec2> {
    let count = 10;
    let outer = rng.gen_range(3.5..5.0);
    let inner = rng.gen_range(1.5..2.5);
    let mut sparks = Vec::with_capacity(count * 2);
    for i in 0..count {
        let angle = std::f32::consts::TAU * i as f32 / count as f32;
        sparks.push(Vec2::new(angle.cos(), angle.sin()) * outer);
        let offset = angle + std::f32::consts::TAU / (2 * count) as f32;
        sparks.push(Vec2::new(offset.cos(), offset.sin()) * inner);
    }
    sparks
}

/// Golden-angle spiral: speed grows with each spark so the burst
/// unwinds outward.
fn spiral(rng: &mut impl Rng) -> Vec<Vec2> {
    const GOLDEN_ANGLE: f32 = 2.399_963;
    let count = 24;
    let base = rng.gen_range(1.0..2.0);
    (0..count)
        .map(|i| {
            let angle = GOLDEN_ANGLE * i as f32;
            let speed = base + 3.0 * i as f32 / count as f32;
            Vec2::new(angle.cos(), angle.sin()) * speed
        })
        .collect()
}
