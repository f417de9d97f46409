use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use log::{debug, warn};

use crate::io::loader::convert_csv_error;
use crate::io::{EdgeRecord, HEADER};
use crate::Result;

/// Settings for turning a directory tree into an edge list
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Directories that are linked to but never descended into
    pub ignore: Vec<PathBuf>,
    /// Length of a parent -> subdirectory edge
    pub subdir_length: f64,
    /// Length of a symlink -> resolved target edge
    pub symlink_length: f64,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        WalkerConfig {
            ignore: ["/proc", "/sys", "/run", "/var/run"]
                .iter()
                .map(PathBuf::from)
                .collect(),
            subdir_length: 1.0,
            symlink_length: 0.5,
        }
    }
}

impl WalkerConfig {
    fn is_ignored(&self, path: &Path) -> bool {
        self.ignore.iter().any(|ignored| ignored == path)
    }
}

/// Walks the directory tree under `root`, passing each edge to `emit`.
///
/// Every real subdirectory yields `(parent, child, subdir_length)`. A symlink that resolves
/// to a directory outside the ignore list yields `(parent, link, subdir_length)` and
/// `(link, target, symlink_length)`, so the link is not a second zero in-degree vertex.
/// Links back to the root or to a directory enclosing the current one are dropped, so
/// the root stays the only zero in-degree vertex. Entries are visited in sorted order and
/// each resolved directory is descended at most once. Unreadable directories below `root` are skipped
/// with a warning. Returns the number of emitted edges.
pub fn walk_tree<F>(root: &Path, config: &WalkerConfig, emit: &mut F) -> Result<usize>
where
    F: FnMut(EdgeRecord) -> Result<()>,
{
    // Fail early when the root itself cannot be listed
    fs::read_dir(root)?;

    let mut walker = Walker {
        config,
        emit,
        root: fs::canonicalize(root)?,
        visited: HashSet::new(),
        emitted: 0,
    };
    walker.descend(root)?;
    Ok(walker.emitted)
}

/// Writes the edge list for `root` as CSV, header included. Returns the number of edges.
pub fn write_edge_list<W: Write>(root: &Path, config: &WalkerConfig, writer: W) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer
        .write_record(HEADER)
        .map_err(|err| convert_csv_error(err, 1))?;

    let count = walk_tree(root, config, &mut |record| {
        csv_writer
            .serialize(&record)
            .map_err(|err| convert_csv_error(err, 0))
    })?;

    csv_writer.flush()?;
    Ok(count)
}

struct Walker<'a, F> {
    config: &'a WalkerConfig,
    emit: &'a mut F,
    root: PathBuf,
    visited: HashSet<PathBuf>,
    emitted: usize,
}

impl<F> Walker<'_, F>
where
    F: FnMut(EdgeRecord) -> Result<()>,
{
    fn edge(&mut self, from: &Path, to: &Path, length: f64) -> Result<()> {
        self.emitted += 1;
        (self.emit)(EdgeRecord::new(
            from.to_string_lossy(),
            to.to_string_lossy(),
            length,
        ))
    }

    fn descend(&mut self, dir: &Path) -> Result<()> {
        let resolved = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
        if !self.visited.insert(resolved.clone()) {
            debug!("Already visited {}", dir.display());
            return Ok(());
        }

        let entries = match sorted_entries(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("Skipping {}: {}", dir.display(), err);
                return Ok(());
            }
        };

        let mut links = Vec::new();
        for path in entries {
            let metadata = match fs::symlink_metadata(&path) {
                Ok(metadata) => metadata,
                Err(err) => {
                    warn!("Skipping {}: {}", path.display(), err);
                    continue;
                }
            };

            if metadata.file_type().is_symlink() {
                links.push(path);
            } else if metadata.is_dir() {
                self.edge(dir, &path, self.config.subdir_length)?;
                if !self.config.is_ignored(&path) {
                    self.descend(&path)?;
                }
            }
        }

        for link in links {
            // Dangling links resolve to nothing and are dropped
            let Ok(target) = fs::canonicalize(&link) else {
                continue;
            };
            // A link back to the root or an enclosing directory would close a cycle
            if resolved.starts_with(&target) || target == self.root {
                debug!("Dropping back link {} -> {}", link.display(), target.display());
                continue;
            }
            if target.is_dir() && !self.config.is_ignored(&target) {
                self.edge(dir, &link, self.config.subdir_length)?;
                self.edge(&link, &target, self.config.symlink_length)?;
                self.descend(&target)?;
            }
        }

        Ok(())
    }
}

fn sorted_entries(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();
    Ok(entries)
}
