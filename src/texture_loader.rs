use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use tracing::{debug, warn};

use crate::slide::Slide;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read directory {path:?}: {source}")]
    ReadDir { path: PathBuf, source: std::io::Error },

    #[error("Failed to read file {path:?}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },

    #[error("Failed to decode image {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("Failed to create texture for {path:?}: {reason}")]
    Texture { path: PathBuf, reason: String },
}

fn is_image(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif"),
        None => false,
    }
}

/// Image files directly inside `dir_path`, sorted by file name.
/// An empty result is not an error: the carousel just stays idle.
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let read_dir_error =
        |source: std::io::Error| LoadError::ReadDir { path: dir_path.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

// EXIF orientation, only read for JPEG files. 1 (no rotation) when absent.
fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
            Some(Value::Short(values)) if !values.is_empty() => values[0],
            _ => 1,
        },
        Err(e) => {
            // Non-critical: proceed without rotation
            warn!("Could not read EXIF data for {:?}: {}", image_path, e);
            1
        }
    }
}

/// Decodes `file_bytes` into a CPU-side image and applies the EXIF orientation.
/// No window is needed for this part.
pub fn decode_image(image_path: &Path, file_bytes: &[u8]) -> Result<Image, LoadError> {
    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, file_bytes)
    } else {
        1
    };

    // Provide extension hint for loading from memory
    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), file_bytes)
        .map_err(|e| LoadError::Decode { path: image_path.to_path_buf(), reason: e.to_string() })?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Flipped orientations are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("Applied EXIF orientation {} to {:?}", orientation, image_path);
    }

    Ok(image)
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, LoadError> {
    let file_bytes = fs::read(image_path)
        .map_err(|source| LoadError::ReadFile { path: image_path.to_path_buf(), source })?;
    let image = decode_image(image_path, &file_bytes)?;

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| LoadError::Texture { path: image_path.to_path_buf(), reason: e.to_string() })?;

    Ok(texture)
}

/// Loads one slide, falling back to a placeholder when the image is broken.
pub fn load_slide(rl: &mut RaylibHandle, thread: &RaylibThread, image_path: &Path) -> Slide {
    slide_or_placeholder(load_texture_with_exif_rotation(rl, thread, image_path))
}

fn slide_or_placeholder(loaded: Result<Texture2D, LoadError>) -> Slide {
    match loaded {
        Ok(texture) => Slide::Image(texture),
        Err(e) => {
            warn!("{e}, using placeholder");
            Slide::Placeholder
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths.iter().map(|p| p.file_name().unwrap().to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn lists_images_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.png", "a.JPG", "b.jpeg", "notes.txt", "d.gif", "e.bmp", "README"] {
            touch(dir.path(), name);
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let paths = load_sorted_image_paths(dir.path()).unwrap();
        assert_eq!(names(&paths), ["a.JPG", "b.jpeg", "c.png", "d.gif", "e.bmp"]);
    }

    #[test]
    fn empty_directory_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_sorted_image_paths(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = load_sorted_image_paths(&missing).unwrap_err();
        assert!(matches!(err, LoadError::ReadDir { .. }));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_image(Path::new("broken.png"), b"definitely not a png").unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
        assert!(err.to_string().contains("broken.png"));
    }

    #[test]
    fn broken_image_becomes_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        fs::write(&path, b"not a jpeg").unwrap();

        let bytes = fs::read(&path).unwrap();
        let loaded: Result<Texture2D, LoadError> = match decode_image(&path, &bytes) {
            Ok(_) => panic!("garbage bytes decoded as an image"),
            Err(e) => Err(e),
        };
        assert!(matches!(slide_or_placeholder(loaded), Slide::Placeholder));
    }

    #[test]
    fn unreadable_file_becomes_placeholder() {
        let missing = Path::new("no/such/slide.png").to_path_buf();
        let loaded = Err(LoadError::ReadFile {
            path: missing,
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert!(matches!(slide_or_placeholder(loaded), Slide::Placeholder));
    }

    #[test]
    fn garbage_jpeg_has_no_orientation() {
        assert_eq!(exif_orientation(Path::new("broken.jpg"), b"not a jpeg"), 1);
    }
}
