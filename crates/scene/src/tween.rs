//! Fire-and-forget property tweens
//!
//! The reveal systems attach a [`Tween`] to an entity and move on; a
//! per-frame system advances it, writes the animated property, and removes
//! the component once the run is over. Nothing ever waits on a tween, and a
//! despawned entity takes its in-flight tween with it.

use bevy::prelude::*;

/// Property a tween animates.
#[derive(Debug, Clone, Copy)]
pub enum TweenTarget {
    /// Transform scale.
    Scale { from: Vec3, to: Vec3 },
    /// Base-color alpha of the entity's standard material.
    Alpha { from: f32, to: f32 },
}

/// A single in-flight animation on one entity.
#[derive(Component, Debug, Clone)]
pub struct Tween {
    pub target: TweenTarget,
    /// Seconds to wait before the animation starts.
    pub delay: f32,
    /// Seconds from start to finish once the delay has elapsed.
    pub duration: f32,
    pub ease: EaseFunction,
    elapsed: f32,
}

impl Tween {
    pub fn scale(from: Vec3, to: Vec3, duration: f32, delay: f32, ease: EaseFunction) -> Self {
        Self {
            target: TweenTarget::Scale { from, to },
            delay,
            duration,
            ease,
            elapsed: 0.0,
        }
    }

    pub fn alpha(from: f32, to: f32, duration: f32, delay: f32, ease: EaseFunction) -> Self {
        Self {
            target: TweenTarget::Alpha { from, to },
            delay,
            duration,
            ease,
            elapsed: 0.0,
        }
    }

    fn tick(&mut self, delta: f32) {
        self.elapsed += delta;
    }

    /// Eased progress in `[0, 1]`, or `None` while still delayed.
    fn progress(&self) -> Option<f32> {
        if self.elapsed < self.delay {
            return None;
        }
        let t = if self.duration > 0.0 {
            ((self.elapsed - self.delay) / self.duration).min(1.0)
        } else {
            1.0
        };
        Some(EasingCurve::new(0.0, 1.0, self.ease).sample_clamped(t))
    }

    fn finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }
}

pub struct TweenPlugin;

impl Plugin for TweenPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, advance_tweens);
    }
}

/// Advance every tween and write the animated property.
fn advance_tweens(
    time: Res<Time>,
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut tweens: Query<(
        Entity,
        &mut Tween,
        Option<&mut Transform>,
        Option<&MeshMaterial3d<StandardMaterial>>,
    )>,
) {
    for (entity, mut tween, transform, material) in &mut tweens {
        tween.tick(time.delta_secs());
        let Some(t) = tween.progress() else {
            continue;
        };

        match tween.target {
            TweenTarget::Scale { from, to } => {
                if let Some(mut transform) = transform {
                    transform.scale = from.lerp(to, t);
                }
            }
            TweenTarget::Alpha { from, to } => {
                if let Some(handle) = material {
                    if let Some(material) = materials.get_mut(&handle.0) {
                        let alpha = from + (to - from) * t;
                        material.base_color = material.base_color.with_alpha(alpha);
                    }
                }
            }
        }

        if tween.finished() {
            commands.entity(entity).remove::<Tween>();
        }
    }
}
