use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::PathError;
use crate::path::CameraPath;
use crate::pose::CameraPose;
use crate::quat::IDENTITY;
use crate::rotation::RotationStrategy;

/// Public API: parse a stored camera path (see fixtures/paths/*.json) into a
/// [`CameraPath`].
///
/// Notes:
/// - Every field is optional. A point without `param` is placed one second
///   after the previous point (the first one at 0).
/// - Missing `position`/`rotation`/`timescale` default to origin, identity, 1.
/// - Unknown `rotType` tags fall back to Slerp with a warning.
/// - Points are re-added in file order, so unsorted input still yields a
///   sorted path.
pub fn parse_stored_path_json(s: &str, cfg: Config) -> Result<CameraPath, PathError> {
    let sp: StoredPath = serde_json::from_str(s)?;
    to_camera_path(sp, cfg)
}

/// Read a stored path from any reader.
pub fn load_stored_path<R: Read>(reader: R, cfg: Config) -> Result<CameraPath, PathError> {
    let sp: StoredPath = serde_json::from_reader(reader)?;
    to_camera_path(sp, cfg)
}

/// Serialize a path; points are written in (sorted) sequence order.
pub fn stored_path_json(path: &CameraPath) -> Result<String, PathError> {
    Ok(serde_json::to_string_pretty(&to_stored(path))?)
}

pub fn save_stored_path<W: Write>(path: &CameraPath, writer: W) -> Result<(), PathError> {
    serde_json::to_writer_pretty(writer, &to_stored(path))?;
    Ok(())
}

fn to_camera_path(sp: StoredPath, cfg: Config) -> Result<CameraPath, PathError> {
    let mut path = CameraPath::with_config(sp.name.unwrap_or_default(), cfg);
    path.scale_time = sp.scale_time.unwrap_or(false);
    path.set_rotation(
        sp.rot_type
            .as_deref()
            .map(RotationStrategy::from_tag_or_default)
            .unwrap_or_default(),
    );

    let mut last_param = -1.0f32;
    for (index, p) in sp.points.into_iter().enumerate() {
        let param = p.param.unwrap_or(last_param + 1.0);
        if !param.is_finite() {
            return Err(PathError::InvalidParam { index, param });
        }
        last_param = param;
        let timescale = p.timescale.unwrap_or(1.0);
        if timescale < 0.0 {
            log::warn!("point {index}: negative timescale {timescale} clamped to 0");
        }
        path.add_key(
            param,
            CameraPose {
                position: p.position.unwrap_or([0.0; 3]),
                rotation: p.rotation.unwrap_or(IDENTITY),
                timescale: timescale.max(0.0),
            },
        );
    }
    log::debug!("loaded path '{}' with {} keys", path.name, path.len());
    Ok(path)
}

fn to_stored(path: &CameraPath) -> StoredPath {
    StoredPath {
        name: Some(path.name.clone()),
        scale_time: Some(path.scale_time),
        rot_type: Some(path.rotation().tag().to_string()),
        points: path
            .keys()
            .iter()
            .map(|k| StoredPoint {
                param: Some(k.param()),
                position: Some(k.value().position),
                rotation: Some(k.value().rotation),
                timescale: Some(k.value().timescale),
            })
            .collect(),
    }
}

// ----- JSON schema (serde) -----

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPath {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    scale_time: Option<bool>,
    #[serde(default)]
    rot_type: Option<String>,
    #[serde(default)]
    points: Vec<StoredPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPoint {
    #[serde(default)]
    param: Option<f32>,
    #[serde(default)]
    position: Option<[f32; 3]>,
    /// (x, y, z, w)
    #[serde(default)]
    rotation: Option<[f32; 4]>,
    #[serde(default)]
    timescale: Option<f32>,
}
