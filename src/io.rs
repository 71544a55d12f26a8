//! NumPy file I/O for recordings and cleaned arrays.
//!
//! Reader: `.npy` holding the sensor array directly, or `.npz` holding it
//! under the key `y` (a `trig` channel next to it is ignored).
//! Writer: `.npy`, keeping the array's dtype and shape.
use anyhow::{bail, Context, Result};
use log::{info, warn};
use ndarray::{ArrayD, IxDyn, OwnedRepr};
use ndarray_npy::{
    NpzReader, ReadNpyError, ReadNpyExt, ReadNpzError, ReadableElement, WritableElement,
    WriteNpyExt,
};
use std::fs::File;
use std::io::{BufWriter, Read, Seek};
use std::path::{Path, PathBuf};

/// Key of the sensor array inside an `.npz` archive.
pub const SAMPLES_KEY: &str = "y";

/// Key of the trigger channel inside an `.npz` archive.
pub const TRIGGER_KEY: &str = "trig";

// ── Decoding with dtype fallback ──────────────────────────────────────────────
//
// Each candidate dtype is tried in turn. Only a descriptor mismatch moves on to
// the next one; any other failure (truncated data, bad header) is final.

const UNSUPPORTED_DTYPE: &str = "unsupported dtype (expected f64, f32, i64, i32 or i16)";

/// `Ok(None)` when the payload holds a different dtype than `A`.
fn try_npy<A, F>(bytes: &[u8], widen: F) -> Result<Option<ArrayD<f64>>>
where
    A: ReadableElement + Clone,
    F: Fn(A) -> f64,
{
    match ArrayD::<A>::read_npy(bytes) {
        Ok(a) => Ok(Some(a.mapv(widen))),
        Err(ReadNpyError::WrongDescriptor(_)) => Ok(None),
        Err(e) => Err(e).context("malformed .npy payload"),
    }
}

/// Decode one `.npy` payload, widening any supported dtype to `f64`.
fn decode_npy(bytes: &[u8]) -> Result<ArrayD<f64>> {
    if let Some(a) = try_npy::<f64, _>(bytes, |v| v)? {
        return Ok(a);
    }
    if let Some(a) = try_npy::<f32, _>(bytes, f64::from)? {
        return Ok(a);
    }
    if let Some(a) = try_npy::<i32, _>(bytes, f64::from)? {
        return Ok(a);
    }
    if let Some(a) = try_npy::<i16, _>(bytes, f64::from)? {
        return Ok(a);
    }
    // Counts from acquisition hardware fit comfortably in f64's mantissa.
    if let Some(a) = try_npy::<i64, _>(bytes, |v| v as f64)? {
        return Ok(a);
    }
    bail!(UNSUPPORTED_DTYPE)
}

/// `Ok(None)` when the entry holds a different dtype than `A`.
fn try_npz<R, A, F>(npz: &mut NpzReader<R>, name: &str, widen: F) -> Result<Option<ArrayD<f64>>>
where
    R: Read + Seek,
    A: ReadableElement + Clone,
    F: Fn(A) -> f64,
{
    match npz.by_name::<OwnedRepr<A>, IxDyn>(name) {
        Ok(a) => Ok(Some(a.mapv(widen))),
        Err(ReadNpzError::Npy(ReadNpyError::WrongDescriptor(_))) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("malformed npz entry '{name}'")),
    }
}

fn read_npz_entry<R: Read + Seek>(npz: &mut NpzReader<R>, name: &str) -> Result<ArrayD<f64>> {
    if let Some(a) = try_npz::<_, f64, _>(npz, name, |v| v)? {
        return Ok(a);
    }
    if let Some(a) = try_npz::<_, f32, _>(npz, name, f64::from)? {
        return Ok(a);
    }
    if let Some(a) = try_npz::<_, i32, _>(npz, name, f64::from)? {
        return Ok(a);
    }
    if let Some(a) = try_npz::<_, i16, _>(npz, name, f64::from)? {
        return Ok(a);
    }
    if let Some(a) = try_npz::<_, i64, _>(npz, name, |v| v as f64)? {
        return Ok(a);
    }
    bail!("npz entry '{name}': {UNSUPPORTED_DTYPE}")
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a single `.npy` array as `f64`.
pub fn load_npy(path: &Path) -> Result<ArrayD<f64>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    decode_npy(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Load the sensor array from an `.npz` archive.
///
/// Entry names are matched with or without the `.npy` suffix.
pub fn load_npz_samples(path: &Path) -> Result<ArrayD<f64>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut npz = NpzReader::new(file).with_context(|| format!("reading {}", path.display()))?;
    let names = npz.names()?;

    if names.iter().any(|n| entry_key(n) == TRIGGER_KEY) {
        info!("ignoring '{TRIGGER_KEY}' in {}", path.display());
    }
    let Some(entry) = names.iter().find(|n| entry_key(n) == SAMPLES_KEY) else {
        bail!("no '{SAMPLES_KEY}' variable found in {}", path.display());
    };
    read_npz_entry(&mut npz, entry).with_context(|| format!("parsing {}", path.display()))
}

/// Load a recording's sensor array from a `.npy` or `.npz` file.
pub fn load_samples(path: &Path) -> Result<ArrayD<f64>> {
    match extension(path).as_deref() {
        Some("npy") => load_npy(path),
        Some("npz") => load_npz_samples(path),
        _ => bail!("unsupported file type: {}", path.display()),
    }
}

/// Write `array` to `path` as `.npy`.
pub fn write_npy<A, D>(path: &Path, array: &ndarray::Array<A, D>) -> Result<()>
where
    A: WritableElement,
    D: ndarray::Dimension,
{
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    array
        .write_npy(BufWriter::new(file))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// All `.npy` / `.npz` files directly inside `dir`, sorted by name.
pub fn discover_recordings(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        match extension(&path).as_deref() {
            Some("npy") | Some("npz") => out.push(path),
            _ => {}
        }
    }
    out.sort();
    if out.is_empty() {
        warn!("no .npy/.npz files in {}", dir.display());
    }
    Ok(out)
}

/// File stem as a `String`, used to name derived outputs.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "recording".to_string())
}

fn entry_key(name: &str) -> &str {
    name.strip_suffix(".npy").unwrap_or(name)
}

fn extension(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase())
}
