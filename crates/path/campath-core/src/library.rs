//! Owned collection of camera paths plus the current selection.

use crate::config::Config;
use crate::error::PathError;
use crate::path::CameraPath;

#[derive(Debug, Default)]
pub struct PathLibrary {
    cfg: Config,
    paths: Vec<CameraPath>,
    selected: Option<usize>,
    /// Paths created so far; drives default names and never decreases.
    created: u32,
}

impl PathLibrary {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CameraPath> {
        self.paths.iter()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&CameraPath> {
        self.paths.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut CameraPath> {
        self.paths.get_mut(index)
    }

    /// Create an empty path named "Path #N". Returns its index.
    pub fn new_path(&mut self) -> usize {
        self.created += 1;
        let name = format!("Path #{}", self.created);
        self.insert(CameraPath::with_config(name, self.cfg.clone()))
    }

    /// Add an existing (e.g. loaded) path. Returns its index.
    pub fn insert(&mut self, path: CameraPath) -> usize {
        log::debug!("library: add path '{}'", path.name);
        self.paths.push(path);
        self.paths.len() - 1
    }

    /// Remove a path. The selection is cleared if it pointed at the removed
    /// path and shifted down if it pointed past it.
    pub fn remove_path_at(&mut self, index: usize) -> Result<CameraPath, PathError> {
        self.check(index)?;
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        Ok(self.paths.remove(index))
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: Option<usize>) -> Result<(), PathError> {
        if let Some(i) = index {
            self.check(i)?;
        }
        self.selected = index;
        Ok(())
    }

    pub fn selected_path(&self) -> Option<&CameraPath> {
        self.selected.and_then(|i| self.paths.get(i))
    }

    pub fn selected_path_mut(&mut self) -> Option<&mut CameraPath> {
        self.selected.and_then(|i| self.paths.get_mut(i))
    }

    fn check(&self, index: usize) -> Result<(), PathError> {
        if index < self.paths.len() {
            Ok(())
        } else {
            Err(PathError::IndexOutOfRange {
                index,
                len: self.paths.len(),
            })
        }
    }
}
