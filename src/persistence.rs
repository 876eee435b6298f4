use crate::core::engine::DeclensionEngine;
use crate::core::report::{ClassificationBuckets, DeclensionReport};
use crate::core::rules::DeclensionRules;
use crate::core::substitution::SubstitutionDictionary;
use crate::core::types::Category;
use crate::error::{DeclensionError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// What survives between runs: the memo and the diagnostic buckets.
/// The dictionary is reloaded from its list every run.
#[derive(Serialize, Deserialize)]
struct SerializableState {
    category: Category,
    cache: HashMap<String, String>,
    buckets: ClassificationBuckets,
}

/// Writes `path` through a temp file in the same directory, then renames.
fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&NamedTempFile>) -> Result<()>,
{
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(|e| DeclensionError::io(parent_dir, e))?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| DeclensionError::io(parent_dir, e))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        write(&mut writer)?;
        writer.flush().map_err(|e| DeclensionError::io(path, e))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| DeclensionError::io(path, e.error))?;
    Ok(())
}

/// Saves the engine's cache and buckets in bincode form.
pub fn save_snapshot<R: DeclensionRules>(engine: &DeclensionEngine<R>, path: &Path) -> Result<()> {
    let state = SerializableState {
        category: engine.category(),
        cache: engine.cache().clone(),
        buckets: engine.buckets().clone(),
    };

    write_atomically(path, |writer| {
        bincode::serialize_into(writer, &state)?;
        Ok(())
    })?;

    tracing::info!(category = %state.category, path = %path.display(), cached = state.cache.len(), "snapshot saved");
    Ok(())
}

/// Rebuilds an engine from a snapshot, with a freshly loaded dictionary.
pub fn load_snapshot<R: DeclensionRules>(
    rules: R,
    dictionary: SubstitutionDictionary,
    path: &Path,
) -> Result<DeclensionEngine<R>> {
    let file = File::open(path).map_err(|e| DeclensionError::io(path, e))?;
    let state: SerializableState = bincode::deserialize_from(BufReader::new(file))?;
    Ok(restore(rules, dictionary, state, path))
}

fn load_snapshot_file(path: &Path) -> Result<Option<SerializableState>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(DeclensionError::io(path, e)),
    };
    Ok(Some(bincode::deserialize_from(BufReader::new(file))?))
}

fn restore<R: DeclensionRules>(
    rules: R,
    dictionary: SubstitutionDictionary,
    state: SerializableState,
    path: &Path,
) -> DeclensionEngine<R> {
    if state.category != rules.category() {
        tracing::warn!(
            expected = %rules.category(),
            found = %state.category,
            path = %path.display(),
            "snapshot is for another category, starting fresh"
        );
        return DeclensionEngine::new(rules, dictionary);
    }

    let (cache, buckets) = reconcile(state.cache, state.buckets, &dictionary);
    DeclensionEngine::from_parts(rules, dictionary, cache, buckets)
}

/// Forgets every earlier decision about a token the current dictionary now
/// covers, so dictionary entries added since the snapshot still take effect.
fn reconcile(
    mut cache: HashMap<String, String>,
    mut buckets: ClassificationBuckets,
    dictionary: &SubstitutionDictionary,
) -> (HashMap<String, String>, ClassificationBuckets) {
    let stale: Vec<(String, String)> = cache
        .iter()
        .filter(|(token, _)| dictionary.lookup(token).is_some())
        .map(|(token, value)| (token.clone(), value.clone()))
        .collect();

    for (token, _) in &stale {
        cache.remove(token);
    }
    for (_, value) in &stale {
        // A rule result stays reported while another cached token still maps to it.
        if !cache.values().any(|v| v == value) {
            buckets.replaced.remove(value);
        }
    }

    let not_in_dictionary = |token: &String| dictionary.lookup(token).is_none();
    buckets.excluded.retain(not_in_dictionary);
    buckets.filtered_after_all.retain(not_in_dictionary);
    buckets.unresolved.retain(not_in_dictionary);

    if !stale.is_empty() {
        tracing::info!(list = %dictionary.label(), dropped = stale.len(), "snapshot entries superseded by dictionary");
    }
    (cache, buckets)
}

/// Like [`load_snapshot`], but a missing snapshot yields a fresh engine.
pub fn load_snapshot_or_new<R: DeclensionRules>(
    rules: R,
    dictionary: SubstitutionDictionary,
    path: &Path,
) -> Result<DeclensionEngine<R>> {
    match load_snapshot_file(path)? {
        Some(state) => Ok(restore(rules, dictionary, state, path)),
        None => Ok(DeclensionEngine::new(rules, dictionary)),
    }
}

/// Writes the end-of-run reports as pretty JSON.
pub fn save_report(reports: &[DeclensionReport], path: &Path) -> Result<()> {
    write_atomically(path, |writer| {
        serde_json::to_writer_pretty(writer, reports)?;
        Ok(())
    })
}

/// Reads back a report written by [`save_report`].
pub fn load_report(path: &Path) -> Result<Vec<DeclensionReport>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(DeclensionError::io(path, e)),
    };
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
