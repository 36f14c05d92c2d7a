//! Map dump reader.
//!
//! A map dump is a JSON object whose `data` array holds one entry per
//! polyline, each entry carrying a `points` array of `{ "x": .., "y": .. }`
//! objects. Only the outer shape is checked here.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use mapplot_core::MapDocument;

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read map file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid map document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    fn io(path: &Path, source: io::Error) -> Self {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

// ── Loader ────────────────────────────────────────────────────────────

pub struct MapLoader<R: Read> {
    reader: R,
    source: PathBuf,
}

impl<R: Read> MapLoader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            source: PathBuf::from("<stream>"),
        }
    }

    /// Read the whole stream and parse it as a map document.
    pub fn read(mut self) -> Result<MapDocument, LoadError> {
        let mut bytes = Vec::new();
        self.reader
            .read_to_end(&mut bytes)
            .map_err(|e| LoadError::io(&self.source, e))?;

        let doc = MapDocument::from_slice(&bytes)?;
        log::debug!(
            "Map document from {} holds {} polylines",
            self.source.display(),
            doc.polyline_count()
        );
        Ok(doc)
    }
}

impl MapLoader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
        let mut loader = Self::new(BufReader::new(file));
        loader.source = path.to_path_buf();
        Ok(loader)
    }
}

/// Open `path` and parse it as a map document.
pub fn load_map(path: impl AsRef<Path>) -> Result<MapDocument, LoadError> {
    let path = path.as_ref();
    log::info!("Loading map: {}", path.display());
    MapLoader::open(path)?.read()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_map(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_load_map_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_map(
            &dir,
            "map.json",
            br#"{"data":[{"points":[{"x":0,"y":0},{"x":1,"y":1}]}]}"#,
        );

        let doc = load_map(&path).unwrap();
        assert_eq!(doc.polyline_count(), 1);
        assert_eq!(doc.data[0]["points"][1]["x"], 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");

        let err = load_map(&path).unwrap_err();
        match err {
            LoadError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_map(&dir, "broken.json", b"{\"data\": [ {\"points\": ");

        assert!(matches!(load_map(&path), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_missing_data_is_parse_error() {
        let err = MapLoader::new(&br#"{"points":[]}"#[..]).read().unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().contains("data"));
    }

    #[test]
    fn test_non_utf8_is_parse_error() {
        let err = MapLoader::new(&[0xff, 0xfe, 0x00][..]).read().unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_bad_points_survive_loading() {
        // Coordinate checks happen at render time.
        let doc = MapLoader::new(&br#"{"data":[{"points":[{"x":"a"}]}]}"#[..])
            .read()
            .unwrap();
        assert_eq!(doc.polyline_count(), 1);
    }

    #[test]
    fn test_io_error_message_names_path() {
        let err = load_map("/nonexistent/dir/map.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dir/map.json"));
    }
}
