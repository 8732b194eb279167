//! Parameter-override table behind the debug panel.
//!
//! The panel never touches scene objects. It writes clamped values into
//! [`ParamOverrides`] and the frame updaters read them back when they build
//! the lights and the plane tilt for the next frame.

use crate::constants::PLANE_BASE_TILT;
use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Light2X,
    Light2Y,
    Light2Z,
    Light2Intensity,
    Light3X,
    Light3Y,
    Light3Z,
    Light3Intensity,
    PlaneRotationX,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamSpec {
    pub key: ParamKey,
    pub id: &'static str,
    pub group: &'static str,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl ParamSpec {
    const fn position(
        key: ParamKey,
        id: &'static str,
        group: &'static str,
        label: &'static str,
        default: f32,
    ) -> Self {
        Self {
            key,
            id,
            group,
            label,
            min: -7.0,
            max: 7.0,
            step: 0.01,
            default,
        }
    }

    const fn intensity(key: ParamKey, id: &'static str, group: &'static str, default: f32) -> Self {
        Self {
            key,
            id,
            group,
            label: "intensity",
            min: 0.0,
            max: 10.0,
            step: 0.01,
            default,
        }
    }

    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Every tunable, in panel order.
pub static PARAM_SPECS: [ParamSpec; 9] = [
    ParamSpec::position(ParamKey::Light2Y, "light2.y", "light 2", "y", -2.0),
    ParamSpec::position(ParamKey::Light2X, "light2.x", "light 2", "x", -3.08),
    ParamSpec::position(ParamKey::Light2Z, "light2.z", "light 2", "z", -4.6),
    ParamSpec::intensity(ParamKey::Light2Intensity, "light2.intensity", "light 2", 3.0),
    ParamSpec::position(ParamKey::Light3Y, "light3.y", "light 3", "y", 1.7),
    ParamSpec::position(ParamKey::Light3X, "light3.x", "light 3", "x", 1.7),
    ParamSpec::position(ParamKey::Light3Z, "light3.z", "light 3", "z", -3.78),
    ParamSpec::intensity(ParamKey::Light3Intensity, "light3.intensity", "light 3", 3.0),
    ParamSpec {
        key: ParamKey::PlaneRotationX,
        id: "plane.rotation.x",
        group: "plane",
        label: "rotation x",
        min: -3.15,
        max: 3.15,
        step: 0.01,
        default: PLANE_BASE_TILT,
    },
];

impl ParamKey {
    pub fn spec(self) -> &'static ParamSpec {
        PARAM_SPECS
            .iter()
            .find(|s| s.key == self)
            .unwrap_or(&PARAM_SPECS[0])
    }
}

impl std::str::FromStr for ParamKey {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PARAM_SPECS
            .iter()
            .find(|spec| spec.id == s)
            .map(|spec| spec.key)
            .ok_or_else(|| ParamError::UnknownKey(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("unknown parameter `{0}`")]
    UnknownKey(String),
    #[error("value for `{key}` is not a finite number: {raw}")]
    NotFinite { key: &'static str, raw: String },
}

/// Overrides written by the debug panel. Missing keys fall back to the
/// slider default.
#[derive(Clone, Debug, Default)]
pub struct ParamOverrides {
    values: FnvHashMap<ParamKey, f32>,
}

impl ParamOverrides {
    /// Store `value` clamped into the key's range and return what was stored.
    pub fn set(&mut self, key: ParamKey, value: f32) -> f32 {
        let v = key.spec().clamp(value);
        self.values.insert(key, v);
        v
    }

    /// Parse a slider id and its raw text value, as delivered by the DOM.
    pub fn set_from_str(&mut self, id: &str, raw: &str) -> Result<f32, ParamError> {
        let key: ParamKey = id.parse()?;
        let value = raw
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParamError::NotFinite {
                key: key.spec().id,
                raw: raw.to_string(),
            })?;
        Ok(self.set(key, value))
    }

    pub fn get(&self, key: ParamKey) -> f32 {
        self.values
            .get(&key)
            .copied()
            .unwrap_or(key.spec().default)
    }
}
