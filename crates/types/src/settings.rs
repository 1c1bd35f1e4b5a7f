//! Tunable visualizer settings.

use serde::{Deserialize, Serialize};

/// Scene lighting configuration.
///
/// The rig is a bright key light, a dimmer fill light from the opposite
/// side, and a flat ambient term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightingSettings {
    /// Direction from the origin toward the key light.
    pub key_direction: [f32; 3],
    /// Key light illuminance in lux.
    pub key_illuminance: f32,
    /// Fill light illuminance in lux (shines opposite the key).
    pub fill_illuminance: f32,
    /// Ambient light color (linear RGB).
    pub ambient_color: [f32; 3],
    /// Ambient brightness.
    pub ambient_brightness: f32,
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            key_direction: [5.0, 5.0, 5.0],
            key_illuminance: 8_000.0,
            fill_illuminance: 2_500.0,
            ambient_color: [1.0, 1.0, 1.0],
            ambient_brightness: 120.0,
        }
    }
}

/// Timing for the reveal animations.
///
/// Stagger values are the per-index start-time offsets that create the
/// sequential reveal effect; durations are per-element once started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationSettings {
    /// Seconds between consecutive vertex marker pops.
    pub vertex_stagger: f32,
    /// Seconds each marker takes to scale up.
    pub marker_duration: f32,
    /// Seconds between consecutive edge/face fade-ins.
    pub fade_stagger: f32,
    /// Seconds each edge/face takes to fade in.
    pub fade_duration: f32,
    /// Final opacity of face patches.
    pub face_opacity: f32,
    /// Seconds the assembled mesh takes to scale up.
    pub assemble_duration: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            vertex_stagger: 0.05,
            marker_duration: 0.45,
            fade_stagger: 0.05,
            fade_duration: 0.5,
            face_opacity: 0.7,
            assemble_duration: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_animation_settings() {
        let settings = AnimationSettings::default();
        assert_eq!(settings.vertex_stagger, 0.05);
        assert_eq!(settings.face_opacity, 0.7);
        assert_eq!(settings.assemble_duration, 1.0);
    }
}
