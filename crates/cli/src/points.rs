use anyhow::{Context, Result};
use hull2::{Hull, Vec2};
use serde::Deserialize;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk points file: `{"points": [[x, y], ...]}`.
#[derive(Deserialize)]
struct PointsFile {
    points: Vec<[f64; 2]>,
}

/// Read a points JSON file into library points.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Vec2<f64>>> {
    let path = path.as_ref();
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: PointsFile =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(file
        .points
        .into_iter()
        .map(|[x, y]| Vec2::new(x, y))
        .collect())
}

/// Write a points JSON file (parents created as needed).
pub fn write_points<P: AsRef<Path>>(path: P, pts: &[Vec2<f64>]) -> Result<()> {
    let doc = json!({
        "points": pts.iter().map(|p| [p.x, p.y]).collect::<Vec<[f64; 2]>>(),
    });
    write_json(path, &doc)
}

/// Hull as a JSON document the host layer can render from.
pub fn hull_to_json(hull: &Hull) -> Value {
    json!({
        "kind": hull_kind(hull),
        "vertices": hull
            .vertices()
            .iter()
            .map(|p| [p.x, p.y])
            .collect::<Vec<[f64; 2]>>(),
        "area": hull.area(),
    })
}

pub fn hull_kind(hull: &Hull) -> &'static str {
    match hull {
        Hull::Empty => "empty",
        Hull::Point(_) => "point",
        Hull::Segment(_, _) => "segment",
        Hull::Polygon(_) => "polygon",
    }
}

/// Pretty-print JSON to `path`, creating parent directories first.
pub fn write_json<P: AsRef<Path>>(path: P, doc: &Value) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// `<artifact>.meta.json` sidecar path for run metadata.
pub fn meta_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".meta.json");
    artifact.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn points_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.json");
        let pts = vec![Vec2::new(1.0, 2.0), Vec2::new(-3.5, 4.25)];
        write_points(&path, &pts).unwrap();
        let back = read_points(&path).unwrap();
        assert_eq!(back, pts);
    }

    #[test]
    fn malformed_points_file_names_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, b"{\"points\": [[1.0]]}").unwrap();
        let err = read_points(&path).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }

    #[test]
    fn hull_json_shape() {
        let hull = Hull::Polygon(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(1.0, 1.0),
        ]);
        let doc = hull_to_json(&hull);
        assert_eq!(doc["kind"], "polygon");
        assert_eq!(doc["vertices"].as_array().unwrap().len(), 3);
        assert!(doc["area"].as_f64().unwrap() > 0.0);
        assert_eq!(hull_kind(&Hull::Empty), "empty");
    }

    #[test]
    fn meta_path_rewrites_extension() {
        let base = Path::new("/tmp/output/run.json");
        assert_eq!(meta_path(base), Path::new("/tmp/output/run.meta.json"));
    }
}
