//! Scene bundle - JSON description of the bodies, triggers and settings a
//! session starts with.

use serde::{Deserialize, Serialize};

use crate::rigid_body::{RigidBody, Shape, Vec2, VisualSlot};

use super::settings::SimSettings;

pub const SCENE_FORMAT_VERSION: u32 = 1;

/// Setup-time failures. The running simulation itself has no error paths.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("scene json is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported scene format version {0}")]
    UnsupportedVersion(u32),

    #[error("body {id}: {reason}")]
    InvalidBody { id: u32, reason: &'static str },

    #[error("body {id}: invalid color {value:?}")]
    InvalidColor { id: u32, value: String },

    #[error("invalid surface {width}x{height} at scale {scale}")]
    InvalidSurface { width: f32, height: f32, scale: f32 },

    #[error("no body with id {id}")]
    UnknownBody { id: u32 },

    #[error("alpha mask {width}x{height} does not match {len} bytes")]
    AlphaMaskSize { width: u32, height: u32, len: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerEvent {
    Grab,
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerAction {
    EnableGravity,
    DisableGravity,
}

/// Scenario hook keyed on a body tag
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerSpec {
    pub tag: String,
    pub on: TriggerEvent,
    pub action: TriggerAction,
    #[serde(default = "default_once")]
    pub once: bool,
}

fn default_once() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ShapeSpec {
    Disk { radius: f32 },
    Sprite { width: f32, height: f32 },
}

impl From<&ShapeSpec> for Shape {
    fn from(spec: &ShapeSpec) -> Self {
        match *spec {
            ShapeSpec::Disk { radius } => Shape::disk(radius),
            ShapeSpec::Sprite { width, height } => Shape::sprite(width, height),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySpec {
    pub shape: ShapeSpec,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub vx: f32,
    #[serde(default)]
    pub vy: f32,
    /// Degrees; sprites only
    #[serde(default)]
    pub rotation: f32,
    /// `#rrggbb` or `#rrggbbaa`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Asset path; the body is not drawn until the host reports it decoded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneBundle {
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    #[serde(default)]
    pub settings: SimSettings,
    pub bodies: Vec<BodySpec>,
    #[serde(default)]
    pub triggers: Vec<TriggerSpec>,
}

fn default_format_version() -> u32 {
    SCENE_FORMAT_VERSION
}

impl SceneBundle {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let bundle: SceneBundle = serde_json::from_str(json)?;
        if bundle.format_version != SCENE_FORMAT_VERSION {
            return Err(SceneError::UnsupportedVersion(bundle.format_version));
        }
        Ok(bundle)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Four plain disks on a friction-only table
    pub fn default_scene() -> Self {
        let disk = |x: f32, y: f32, radius: f32, color: &str| BodySpec {
            shape: ShapeSpec::Disk { radius },
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            rotation: 0.0,
            color: Some(color.to_string()),
            tag: None,
            visual: None,
        };
        SceneBundle {
            format_version: SCENE_FORMAT_VERSION,
            settings: SimSettings::default(),
            bodies: vec![
                disk(100.0, 100.0, 20.0, "#ff0000"),
                disk(200.0, 150.0, 25.0, "#0000ff"),
                disk(300.0, 200.0, 30.0, "#008000"),
                disk(300.0, 400.0, 30.0, "#ffff00"),
            ],
            triggers: Vec::new(),
        }
    }

    /// Instantiate bodies in bundle order; ids start at 1
    pub fn build_bodies(&self) -> Result<Vec<RigidBody>, SceneError> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(idx, spec)| build_body(idx as u32 + 1, spec))
            .collect()
    }
}

fn build_body(id: u32, spec: &BodySpec) -> Result<RigidBody, SceneError> {
    let shape = Shape::from(&spec.shape);
    let mut body = RigidBody::new(id, shape, Vec2::new(spec.x, spec.y))?;

    let velocity = Vec2::new(spec.vx, spec.vy);
    if !velocity.is_finite() {
        return Err(SceneError::InvalidBody {
            id,
            reason: "velocity must be finite",
        });
    }
    body.velocity = velocity;

    if !spec.rotation.is_finite() {
        return Err(SceneError::InvalidBody {
            id,
            reason: "rotation must be finite",
        });
    }
    if shape.is_sprite() {
        body.rotation = spec.rotation;
    }
    if let Some(color) = spec.color.as_deref() {
        body.color = parse_color(color).ok_or_else(|| SceneError::InvalidColor {
            id,
            value: color.to_string(),
        })?;
    }
    body.tag = spec.tag.clone();
    if let Some(path) = spec.visual.as_deref() {
        body.visual = VisualSlot::pending(path);
    }
    Ok(body)
}

/// Parse `#rrggbb` / `#rrggbbaa` into 0xRRGGBBAA
pub fn parse_color(s: &str) -> Option<u32> {
    let hex = s.strip_prefix('#')?;
    // from_str_radix alone would accept a sign
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        6 => Some((value << 8) | 0xFF),
        8 => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_bundle() {
        let json = r##"{
            "bodies": [
                { "shape": { "kind": "disk", "radius": 20 }, "x": 10, "y": 20, "color": "#ff000080" },
                { "shape": { "kind": "sprite", "width": 40, "height": 30 }, "x": 50, "y": 60,
                  "rotation": 15, "tag": "duck", "visual": "assets/duck.png" }
            ],
            "triggers": [ { "tag": "duck", "on": "release", "action": "enableGravity" } ]
        }"##;
        let bundle = SceneBundle::from_json(json).unwrap();
        assert_eq!(bundle.triggers[0].on, TriggerEvent::Release);
        assert!(bundle.triggers[0].once);

        let bodies = bundle.build_bodies().unwrap();
        assert_eq!(bodies[0].id, 1);
        assert_eq!(bodies[0].color, 0xFF000080);
        assert_eq!(bodies[1].rotation, 15.0);
        assert!(bodies[1].visual.is_pending());
        assert!(bodies[1].has_tag("duck"));
    }

    #[test]
    fn rejects_unknown_version() {
        let err = SceneBundle::from_json(r#"{ "formatVersion": 9, "bodies": [] }"#).unwrap_err();
        assert!(matches!(err, SceneError::UnsupportedVersion(9)));
    }

    #[test]
    fn rejects_negative_radius() {
        let mut bundle = SceneBundle::default_scene();
        bundle.bodies[2].shape = ShapeSpec::Disk { radius: -1.0 };
        let err = bundle.build_bodies().unwrap_err();
        assert!(matches!(err, SceneError::InvalidBody { id: 3, .. }));
    }

    #[test]
    fn rejects_bad_color() {
        let mut bundle = SceneBundle::default_scene();
        bundle.bodies[0].color = Some("red".to_string());
        assert!(matches!(
            bundle.build_bodies().unwrap_err(),
            SceneError::InvalidColor { id: 1, .. }
        ));
    }

    #[test]
    fn color_requires_plain_hex_digits() {
        assert_eq!(parse_color("#ff0000"), Some(0xFF0000FF));
        assert_eq!(parse_color("#00ff0080"), Some(0x00FF0080));
        assert_eq!(parse_color("#+fffff"), None);
        assert_eq!(parse_color("#-fffff"), None);
        assert_eq!(parse_color("#fff"), None);
    }

    #[test]
    fn rejects_non_finite_rotation_like_velocity() {
        let mut bundle = SceneBundle::default_scene();
        bundle.bodies[1].rotation = f32::INFINITY;
        assert!(matches!(
            bundle.build_bodies().unwrap_err(),
            SceneError::InvalidBody { id: 2, .. }
        ));

        let mut bundle = SceneBundle::default_scene();
        bundle.bodies[3].vy = f32::NAN;
        assert!(matches!(
            bundle.build_bodies().unwrap_err(),
            SceneError::InvalidBody { id: 4, .. }
        ));
    }

    #[test]
    fn default_scene_survives_json() {
        let bundle = SceneBundle::default_scene();
        let back = SceneBundle::from_json(&bundle.to_json()).unwrap();
        assert_eq!(back, bundle);
        assert_eq!(back.build_bodies().unwrap().len(), 4);
    }
}
