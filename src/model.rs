//! Scene composition for the brain viewer.
//! Everything here is plain data: the renderer receives a `SceneConfig`
//! serialized to JSON and never sees the controller.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportMode {
    /// Display width at or below the breakpoint (phones, small tablets).
    Narrow,
    #[default]
    Wide,
}

impl ViewportMode {
    pub fn from_matches(matches: bool) -> Self {
        if matches { Self::Narrow } else { Self::Wide }
    }

    pub fn is_narrow(self) -> bool {
        matches!(self, Self::Narrow)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePose {
    pub camera_position: Vec3,
    pub object_scale: f32,
    pub object_position: Vec3,
}

impl ScenePose {
    pub fn for_mode(mode: ViewportMode) -> Self {
        match mode {
            ViewportMode::Narrow => Self {
                camera_position: Vec3::new(25.0, 0.0, 25.0),
                object_scale: 1.2,
                object_position: Vec3::new(0.0, -2.0, 0.0),
            },
            ViewportMode::Wide => Self {
                camera_position: Vec3::new(20.0, 3.0, 0.0),
                object_scale: 1.25,
                object_position: Vec3::new(0.0, -2.5, 0.0),
            },
        }
    }
}

pub const CAMERA_FOV_DEG: f32 = 25.0;
pub const OBJECT_ROTATION: Vec3 = Vec3::new(-0.01, 1.9, -0.1);
pub const SHADOW_MAP_SIZE: u32 = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSettings {
    pub position: Vec3,
    pub fov_deg: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectTransform {
    pub scale: f32,
    pub position: Vec3,
    pub rotation: Vec3,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HemisphereLight {
    pub intensity: f32,
    pub ground_color: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotLight {
    pub position: Vec3,
    pub angle: f32,
    pub penumbra: f32,
    pub intensity: f32,
    pub cast_shadow: bool,
    pub shadow_map_size: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionalLight {
    pub position: Vec3,
    pub intensity: f32,
    pub cast_shadow: bool,
    pub shadow_map_size: u32,
}

/// Fixed rig, identical in both viewport modes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightingRig {
    pub hemisphere: HemisphereLight,
    pub spot: SpotLight,
    pub point: PointLight,
    pub directional: [DirectionalLight; 2],
}

impl Default for LightingRig {
    fn default() -> Self {
        let directional = |position: Vec3| DirectionalLight {
            position,
            intensity: 0.3,
            cast_shadow: true,
            shadow_map_size: SHADOW_MAP_SIZE,
        };
        Self {
            hemisphere: HemisphereLight {
                intensity: 0.15,
                ground_color: "black".to_string(),
            },
            spot: SpotLight {
                position: Vec3::new(0.0, 150.0, 10.0),
                angle: 0.12,
                penumbra: 1.0,
                intensity: 1.0,
                cast_shadow: true,
                shadow_map_size: SHADOW_MAP_SIZE,
            },
            point: PointLight { intensity: 1.0 },
            directional: [directional(Vec3::splat(5.0)), directional(Vec3::splat(-5.0))],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitSettings {
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub rotate_speed: f32,
    pub target: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Radians. Equal min/max pins the camera to the horizon.
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            enable_zoom: false,
            enable_pan: false,
            rotate_speed: 0.5,
            target: Vec3::ZERO,
            min_distance: 10.0,
            max_distance: 30.0,
            min_polar_angle: FRAC_PI_2,
            max_polar_angle: FRAC_PI_2,
            auto_rotate: true,
            auto_rotate_speed: 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RendererSettings {
    pub shadows: bool,
    /// Device pixel ratio clamp, [min, max].
    pub dpr: [f32; 2],
    pub preserve_drawing_buffer: bool,
    pub preload_all: bool,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            shadows: true,
            dpr: [1.0, 2.0],
            preserve_drawing_buffer: true,
            preload_all: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    pub mode: ViewportMode,
    pub model_url: String,
    pub camera: CameraSettings,
    pub object: ObjectTransform,
    pub lights: LightingRig,
    pub orbit: OrbitSettings,
    pub renderer: RendererSettings,
}

impl SceneConfig {
    pub fn for_mode(mode: ViewportMode, model_url: &str) -> Self {
        let pose = ScenePose::for_mode(mode);
        Self {
            mode,
            model_url: model_url.to_string(),
            camera: CameraSettings {
                position: pose.camera_position,
                fov_deg: CAMERA_FOV_DEG,
            },
            object: ObjectTransform {
                scale: pose.object_scale,
                position: pose.object_position,
                rotation: OBJECT_ROTATION,
            },
            lights: LightingRig::default(),
            orbit: OrbitSettings::default(),
            renderer: RendererSettings::default(),
        }
    }

    pub fn pose(&self) -> ScenePose {
        ScenePose {
            camera_position: self.camera.position,
            object_scale: self.object.scale,
            object_position: self.object.position,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_mode_uses_the_mobile_framing() {
        let pose = ScenePose::for_mode(ViewportMode::Narrow);
        assert_eq!(pose.camera_position, Vec3::new(25.0, 0.0, 25.0));
        assert_eq!(pose.object_scale, 1.2);
        assert_eq!(pose.object_position, Vec3::new(0.0, -2.0, 0.0));
    }

    #[test]
    fn wide_mode_uses_the_desktop_framing() {
        let pose = ScenePose::for_mode(ViewportMode::Wide);
        assert_eq!(pose.camera_position, Vec3::new(20.0, 3.0, 0.0));
        assert_eq!(pose.object_scale, 1.25);
        assert_eq!(pose.object_position, Vec3::new(0.0, -2.5, 0.0));
    }

    #[test]
    fn only_the_pose_differs_between_modes() {
        let narrow = SceneConfig::for_mode(ViewportMode::Narrow, "m.gltf");
        let wide = SceneConfig::for_mode(ViewportMode::Wide, "m.gltf");
        assert_eq!(narrow.camera.fov_deg, 25.0);
        assert_eq!(wide.camera.fov_deg, 25.0);
        assert_eq!(narrow.lights, wide.lights);
        assert_eq!(narrow.orbit, wide.orbit);
        assert_eq!(narrow.object.rotation, wide.object.rotation);
        assert_eq!(narrow.pose(), ScenePose::for_mode(ViewportMode::Narrow));
        assert_eq!(wide.pose(), ScenePose::for_mode(ViewportMode::Wide));
    }

    #[test]
    fn lighting_rig_matches_the_fixed_setup() {
        let rig = LightingRig::default();
        assert_eq!(rig.spot.position, Vec3::new(0.0, 150.0, 10.0));
        assert!(rig.spot.cast_shadow);
        assert_eq!(rig.directional[0].position, Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(rig.directional[1].position, Vec3::new(-5.0, -5.0, -5.0));
        assert!(rig.directional.iter().all(|d| d.intensity == 0.3));
    }

    #[test]
    fn orbit_locks_polar_angle_and_disables_zoom_and_pan() {
        let orbit = OrbitSettings::default();
        assert!(!orbit.enable_zoom && !orbit.enable_pan);
        assert_eq!(orbit.min_polar_angle, orbit.max_polar_angle);
        assert!(orbit.min_distance < orbit.max_distance);
        assert!(orbit.auto_rotate);
    }

    #[test]
    fn scene_config_serializes_camel_case_for_the_renderer() {
        let json = SceneConfig::for_mode(ViewportMode::Narrow, "./neuralnet/scene.gltf")
            .to_json()
            .unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["mode"], "Narrow");
        assert_eq!(v["modelUrl"], "./neuralnet/scene.gltf");
        assert_eq!(v["camera"]["fovDeg"], 25.0);
        assert_eq!(v["camera"]["position"], serde_json::json!([25.0, 0.0, 25.0]));
        assert_eq!(v["orbit"]["enableZoom"], false);
        assert_eq!(v["lights"]["directional"].as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn breakpoint_match_maps_to_mode() {
        assert_eq!(ViewportMode::from_matches(true), ViewportMode::Narrow);
        assert_eq!(ViewportMode::from_matches(false), ViewportMode::Wide);
        assert!(!ViewportMode::default().is_narrow());
    }
}
