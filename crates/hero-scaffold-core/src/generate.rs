//! Turning a pattern into file writes.
//!
//! Generation happens in two phases. [`plan`] reads every matcher target, splits
//! it, and renders every template entirely in memory; any failure there aborts the
//! run before a single byte reaches disk. [`GenerationPlan::write`] then writes the
//! rendered files and undoes its own changes if a write fails part way.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::catalog::{Matcher, Pattern};
use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::naming::CrateName;
use crate::segments::SegmentMap;
use crate::splitter::gather_variables;
use crate::templates::renderer::TemplateRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    /// The file is new.
    Create,
    /// An existing file is replaced with its edited contents.
    Update,
}

/// One rendered file, addressed relative to the workspace root.
#[derive(Debug, Clone)]
pub struct PlannedWrite {
    pub path: PathBuf,
    pub contents: String,
    pub action: WriteAction,
}

/// Everything one pattern run would write.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub pattern: &'static str,
    pub writes: Vec<PlannedWrite>,
}

impl GenerationPlan {
    /// Write every planned file under `root`.
    ///
    /// All parent directories are created first, then new files, then edits. New
    /// files are opened with `create_new`, so a file that appeared after planning is
    /// never overwritten. If any step fails, everything this call created is removed
    /// and edited files get their previous contents back.
    pub fn write(&self, root: &Path) -> Result<()> {
        let mut journal = WriteJournal::default();
        let result = self.write_with(root, &mut journal);
        if result.is_err() {
            journal.roll_back();
        }
        result
    }

    fn write_with(&self, root: &Path, journal: &mut WriteJournal) -> Result<()> {
        for write in &self.writes {
            if let Some(parent) = root.join(&write.path).parent() {
                journal.create_dirs(parent)?;
            }
        }

        let creates = self.writes.iter().filter(|w| w.action == WriteAction::Create);
        let updates = self.writes.iter().filter(|w| w.action == WriteAction::Update);
        for write in creates.chain(updates) {
            let path = root.join(&write.path);
            match write.action {
                WriteAction::Create => journal.create_file(&path, &write.contents)?,
                WriteAction::Update => journal.update_file(&path, &write.contents)?,
            }
            info!(path = %write.path.display(), action = ?write.action, "wrote");
        }
        Ok(())
    }
}

/// What one [`GenerationPlan::write`] call changed so far.
#[derive(Debug, Default)]
struct WriteJournal {
    /// Directories created by this run, outermost first.
    dirs: Vec<PathBuf>,
    files: Vec<PathBuf>,
    originals: Vec<(PathBuf, Vec<u8>)>,
}

fn write_error(path: &Path, source: std::io::Error) -> ScaffoldError {
    ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    }
}

impl WriteJournal {
    fn create_dirs(&mut self, dir: &Path) -> Result<()> {
        let missing: Vec<PathBuf> = dir
            .ancestors()
            .take_while(|d| !d.exists())
            .map(Path::to_path_buf)
            .collect();
        std::fs::create_dir_all(dir).map_err(|e| write_error(dir, e))?;
        self.dirs.extend(missing.into_iter().rev());
        Ok(())
    }

    fn create_file(&mut self, path: &Path, contents: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| write_error(path, e))?;
        self.files.push(path.to_path_buf());
        file.write_all(contents.as_bytes())
            .map_err(|e| write_error(path, e))
    }

    fn update_file(&mut self, path: &Path, contents: &str) -> Result<()> {
        let original = std::fs::read(path).map_err(|e| write_error(path, e))?;
        self.originals.push((path.to_path_buf(), original));
        std::fs::write(path, contents).map_err(|e| write_error(path, e))
    }

    fn roll_back(self) {
        for (path, original) in self.originals.iter().rev() {
            if let Err(e) = std::fs::write(path, original) {
                warn!(path = %path.display(), error = %e, "could not restore edited file");
            }
        }
        for path in self.files.iter().rev() {
            if let Err(e) = std::fs::remove_file(path) {
                warn!(path = %path.display(), error = %e, "could not remove created file");
            }
        }
        for dir in self.dirs.iter().rev() {
            if let Err(e) = std::fs::remove_dir(dir) {
                warn!(path = %dir.display(), error = %e, "could not remove created directory");
            }
        }
    }
}

/// The variables shared by every template of a run: naming plus configured extras.
pub fn naming_variables(name: &CrateName, config: &ScaffoldConfig) -> Result<Map<String, Value>> {
    let mut vars = Map::new();
    vars.insert("crate_name".into(), Value::String(name.snake().into()));
    vars.insert("crate_name_pascal".into(), Value::String(name.pascal().into()));
    vars.insert("crate_prefix".into(), Value::String(config.crate_prefix.clone()));
    for (key, value) in &config.variables {
        if vars.contains_key(key) {
            return Err(ScaffoldError::VariableConflict(key.clone()));
        }
        vars.insert(key.clone(), Value::String(value.clone()));
    }
    Ok(vars)
}

/// Merge a segment map into the shared variables. Names must not collide.
fn merge_segments(base: &Map<String, Value>, segments: &SegmentMap) -> Result<Value> {
    let mut vars = base.clone();
    for (name, text) in segments.iter() {
        if vars.contains_key(name) {
            return Err(ScaffoldError::VariableConflict(name.to_string()));
        }
        vars.insert(name.to_string(), Value::String(text.to_string()));
    }
    Ok(Value::Object(vars))
}

/// Read a matcher's target and split it into its segments.
pub fn check_matcher(matcher: &Matcher, root: &Path) -> Result<SegmentMap> {
    let target = root.join(matcher.target);
    let text = std::fs::read_to_string(&target).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ScaffoldError::TargetNotFound(PathBuf::from(matcher.target)),
        _ => ScaffoldError::Io(e),
    })?;
    gather_variables(&text, &matcher.plan).map_err(|e| ScaffoldError::Matcher {
        path: PathBuf::from(matcher.target),
        source: Box::new(e),
    })
}

/// Render every file `pattern` would produce for `name` inside the workspace at `root`.
pub fn plan(
    pattern: &Pattern,
    root: &Path,
    name: &CrateName,
    config: &ScaffoldConfig,
) -> Result<GenerationPlan> {
    let renderer = TemplateRenderer::new();
    let vars = naming_variables(name, config)?;
    let data = Value::Object(vars.clone());
    let mut writes = Vec::with_capacity(pattern.files.len() + pattern.matchers.len());

    for file in pattern.files {
        let path = PathBuf::from(renderer.render(file.path, &data)?);
        let full = root.join(&path);
        if full.exists() {
            return Err(ScaffoldError::FileExists(path));
        }
        // The closest existing ancestor has to be a directory we can create into.
        if let Some(blocker) = full.ancestors().skip(1).find(|a| a.exists()) {
            if !blocker.is_dir() {
                let blocker = blocker.strip_prefix(root).unwrap_or(blocker);
                return Err(ScaffoldError::NotADirectory(blocker.to_path_buf()));
            }
        }
        debug!(path = %path.display(), "planned new file");
        writes.push(PlannedWrite {
            contents: renderer.render(file.template, &data)?,
            path,
            action: WriteAction::Create,
        });
    }

    for matcher in pattern.matchers {
        let segments = check_matcher(matcher, root)?;
        let contents = renderer.render(matcher.template, &merge_segments(&vars, &segments)?)?;
        debug!(path = matcher.target, segments = segments.len(), "planned edit");
        writes.push(PlannedWrite {
            path: PathBuf::from(matcher.target),
            contents,
            action: WriteAction::Update,
        });
    }

    Ok(GenerationPlan {
        pattern: pattern.name,
        writes,
    })
}
