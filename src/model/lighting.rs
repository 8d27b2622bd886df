use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightingMode {
    Night,
    Day,
}

impl LightingMode {
    pub fn preset(self) -> &'static LightingPreset {
        match self {
            LightingMode::Night => &NIGHT,
            LightingMode::Day => &DAY,
        }
    }
}

/// Where a point light sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightAnchor {
    Fixed(Vec3),
    /// Follows the candle in the player's hand
    Hand,
}

/// Diffuse colour of a point light. The animated variants cycle red/blue
/// with elapsed seconds while green stays at 0.8.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diffuse {
    Constant(Vec3),
    CosSin,
    SinCos,
}

impl Diffuse {
    pub fn at(self, elapsed_secs: f32) -> Vec3 {
        let (s, c) = elapsed_secs.sin_cos();
        match self {
            Diffuse::Constant(color) => color,
            Diffuse::CosSin => Vec3::new(c, 0.8, s),
            Diffuse::SinCos => Vec3::new(s, 0.8, c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLightSpec {
    pub anchor: LightAnchor,
    pub ambient: Vec3,
    pub diffuse: Diffuse,
    pub specular: Vec3,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

/// A point light with everything resolved for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingPreset {
    pub mode: LightingMode,
    /// Backdrop behind the room
    pub clear_color: [f64; 3],
    pub shininess: f32,
    pub directional: DirectionalLight,
    pub point_lights: [PointLightSpec; 4],
}

impl LightingPreset {
    pub fn resolve(&self, hand: Vec3, elapsed_secs: f32) -> [PointLight; 4] {
        self.point_lights.map(|spec| PointLight {
            position: match spec.anchor {
                LightAnchor::Fixed(p) => p,
                LightAnchor::Hand => hand,
            },
            ambient: spec.ambient,
            diffuse: spec.diffuse.at(elapsed_secs),
            specular: spec.specular,
            constant: spec.constant,
            linear: spec.linear,
            quadratic: spec.quadratic,
        })
    }
}

const MOON: DirectionalLight = DirectionalLight {
    direction: Vec3::new(-0.2, -1.0, -0.3),
    ambient: Vec3::new(0.00001, 0.00001, 0.001),
    diffuse: Vec3::ZERO,
    specular: Vec3::splat(0.5),
};

const fn point(
    anchor: LightAnchor,
    ambient: f32,
    diffuse: Diffuse,
    constant: f32,
    linear: f32,
    quadratic: f32,
) -> PointLightSpec {
    PointLightSpec {
        anchor,
        ambient: Vec3::splat(ambient),
        diffuse,
        specular: Vec3::ONE,
        constant,
        linear,
        quadratic,
    }
}

pub const NIGHT: LightingPreset = LightingPreset {
    mode: LightingMode::Night,
    clear_color: [0.0, 0.0, 0.0],
    shininess: 32.0,
    directional: MOON,
    point_lights: [
        point(LightAnchor::Fixed(Vec3::new(50.0, 6.0, -5.1)), 0.05, Diffuse::CosSin, 1.0, 0.09, 0.032),
        point(LightAnchor::Fixed(Vec3::new(-2.30034, 5.45702, -4.67766)), 0.05, Diffuse::SinCos, 1.0, 1.0, 0.42),
        point(LightAnchor::Hand, 0.00005, Diffuse::Constant(Vec3::new(1.0, 1.0, 0.5)), 1.0, 0.9, 0.32),
        point(LightAnchor::Fixed(Vec3::new(0.0, 40.0, 0.0)), 0.15, Diffuse::Constant(Vec3::splat(0.8)), 0.1, 0.04, 0.0032),
    ],
};

pub const DAY: LightingPreset = LightingPreset {
    mode: LightingMode::Day,
    clear_color: [0.5, 0.8, 1.0],
    shininess: 32.0,
    directional: MOON,
    point_lights: [
        point(LightAnchor::Fixed(Vec3::new(0.8, 6.0, -5.1)), 0.05, Diffuse::Constant(Vec3::splat(0.8)), 1.0, 0.09, 0.032),
        point(LightAnchor::Fixed(Vec3::new(-0.8, 6.0, -5.1)), 0.05, Diffuse::Constant(Vec3::splat(0.8)), 1.0, 0.09, 0.042),
        point(LightAnchor::Fixed(Vec3::new(3.55, 2.1, -4.6)), 0.05, Diffuse::Constant(Vec3::new(1.0, 1.0, 0.5)), 1.0, 0.09, 0.0032),
        point(LightAnchor::Fixed(Vec3::new(0.0, 40.0, 0.0)), 0.15, Diffuse::Constant(Vec3::splat(0.8)), 0.01, 0.0004, 0.0013),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_keyed_by_mode() {
        assert_eq!(LightingMode::Night.preset().mode, LightingMode::Night);
        assert_eq!(LightingMode::Day.preset().mode, LightingMode::Day);
    }

    #[test]
    fn night_candle_follows_hand() {
        let hand = Vec3::new(1.0, 2.0, 3.0);
        let lights = NIGHT.resolve(hand, 0.0);
        assert_eq!(lights[2].position, hand);
        assert_eq!(lights[0].position, Vec3::new(50.0, 6.0, -5.1));
    }

    #[test]
    fn day_lights_ignore_hand() {
        let a = DAY.resolve(Vec3::ZERO, 0.0);
        let b = DAY.resolve(Vec3::splat(9.0), 17.0);
        assert_eq!(a, b);
    }

    #[test]
    fn night_colours_cycle_with_time() {
        let at_zero = NIGHT.resolve(Vec3::ZERO, 0.0);
        assert!(at_zero[0].diffuse.abs_diff_eq(Vec3::new(1.0, 0.8, 0.0), 1e-6));
        assert!(at_zero[1].diffuse.abs_diff_eq(Vec3::new(0.0, 0.8, 1.0), 1e-6));

        let quarter = NIGHT.resolve(Vec3::ZERO, std::f32::consts::FRAC_PI_2);
        assert!(quarter[0].diffuse.abs_diff_eq(Vec3::new(0.0, 0.8, 1.0), 1e-6));
    }
}
