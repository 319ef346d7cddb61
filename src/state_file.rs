use serde_json::{from_reader, to_writer_pretty};
use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::SavedState;

/// Saved state stored as json on disk, so it survives process restarts
#[derive(Clone, Debug)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load saved state. A missing file is an empty state.
    pub fn load(&self) -> io::Result<SavedState> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("No saved state at {}", self.path.display());
                return Ok(SavedState::new());
            }
            Err(err) => return Err(err),
        };
        let state: SavedState = from_reader(BufReader::new(file))?;
        info!("Loaded {} keys from {}", state.len(), self.path.display());
        Ok(state)
    }

    pub fn save(&self, state: &SavedState) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = BufWriter::new(File::create(&self.path)?);
        to_writer_pretty(&mut writer, state)?;
        writer.flush()?;
        info!("Saved {} keys to {}", state.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bundle;
    use std::{env, process};

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir()
            .join(format!("multi-selection-{}", process::id()))
            .join(name)
    }

    #[test]
    fn missing_file_is_empty() {
        let state_file = StateFile::open(temp_path("missing.json"));
        assert!(state_file.load().unwrap().is_empty());
    }

    #[test]
    fn save_load() {
        let path = temp_path("save_load.json");
        let state_file = StateFile::open(&path);

        let mut bundle = Bundle::new();
        bundle.put_long_array("selection", &[5, 9]);
        let mut state = SavedState::new();
        state.insert("selection".to_string(), bundle);

        state_file.save(&state).unwrap();
        assert_eq!(state_file.load().unwrap(), state);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn invalid_json() {
        let path = temp_path("invalid.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{\"selection\": [5, 9]}").unwrap();
        let err = StateFile::open(&path).load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_file(&path).unwrap();
    }
}
