use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use crate::error::{Result, TsExportsError};
use crate::file_system::{AbsoluteFsPath, FileSystem, ReadonlyFileSystem};
use crate::plugin::{LoadResult, TsExportsPlugin};

/// Load every module concurrently. Results are sorted by path.
pub fn load_all<F: ReadonlyFileSystem>(
    plugin: &TsExportsPlugin<F>,
    files: &[AbsoluteFsPath],
) -> Vec<(AbsoluteFsPath, Result<LoadResult>)> {
    let start = Instant::now();
    plugin
        .logger()
        .info(&format!("Loading {} modules in parallel...", files.len()));

    let mut results: Vec<_> = files
        .par_iter()
        .map(|file| (file.clone(), plugin.load(file)))
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));

    plugin
        .logger()
        .info(&format!("Loading finished in {:?}", start.elapsed()));
    results
}

/// Where the `.js` output of `src_file` goes under `out_dir`, keeping its
/// path relative to `root`.
pub fn output_path(root: &Path, out_dir: &Path, src_file: &Path) -> PathBuf {
    let relative_path = src_file.strip_prefix(root).unwrap_or_else(|_| {
        // Outside the root: fall back to the file name.
        src_file
            .file_name()
            .map(Path::new)
            .unwrap_or(src_file)
    });
    let mut out_path = out_dir.join(relative_path);
    out_path.set_extension("js");
    out_path
}

/// Write successful loads below `out_dir`, with a `.js.map` next to each file
/// that has a source map. Returns the written output paths.
pub fn emit_results<F: FileSystem>(
    fs: &F,
    root: &Path,
    out_dir: &Path,
    results: &[(AbsoluteFsPath, Result<LoadResult>)],
) -> Result<Vec<AbsoluteFsPath>> {
    let mut written = Vec::new();
    for (file, result) in results {
        let Ok(loaded) = result else {
            continue;
        };
        let out_path = AbsoluteFsPath::from(output_path(root, out_dir, file.as_path()));
        let parent = AbsoluteFsPath::new(fs.dirname(out_path.as_str()));
        fs.ensure_dir(&parent)
            .map_err(|e| TsExportsError::io(&parent, e))?;

        let mut code = loaded.code.clone();
        if let Some(map) = &loaded.map {
            let map_path = AbsoluteFsPath::new(format!("{}.map", out_path));
            fs.write_file(&map_path, map.as_bytes())
                .map_err(|e| TsExportsError::io(&map_path, e))?;
            let map_name = fs.basename(map_path.as_str());
            code.push_str(&format!("\n//# sourceMappingURL={}\n", map_name));
        }

        fs.write_file(&out_path, code.as_bytes())
            .map_err(|e| TsExportsError::io(&out_path, e))?;
        written.push(out_path);
    }
    Ok(written)
}
