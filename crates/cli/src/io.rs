use anyhow::{Context, Result};
use mms::Polygon;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read a JSON list of polygons (`[[[x, y], ...], ...]`, meters).
pub fn read_polygons<P: AsRef<Path>>(path: P) -> Result<Vec<Polygon>> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let polys: Vec<Polygon> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing polygons from {}", path.display()))?;
    tracing::debug!(count = polys.len(), path = %path.display(), "read polygons");
    Ok(polys)
}

/// Pretty-print `value` as JSON to `out`, or to stdout when `out` is `None`.
pub fn write_json<T: Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    let Some(out) = out else {
        println!("{text}");
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(out = %out.display(), "wrote result");
    Ok(())
}

/// Parse `"a,b,c,..."` into exactly `N` floats.
pub fn parse_floats<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got {}", parts.len()));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid number {part:?}: {e}"))?;
    }
    Ok(out)
}
