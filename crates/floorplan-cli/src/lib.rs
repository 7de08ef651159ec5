//! Slicing floorplan evaluation pipeline.
//!
//! Reads a postorder floorplan, then produces the structural, dimension, and
//! placement dumps. Everything is computed in memory first; output files are
//! staged next to their targets and only moved into place once all three
//! have been written. Staged files get the permissions a plain create would
//! give them (or keep those of the file they replace), and an output path
//! that is a symlink is written through to its target.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use floorplan_core::{FloorplanError, Rect};
use floorplan_export::Dump;
use floorplan_layout::{compute_layout, LayoutOptions};
use floorplan_parser::{parse_tree, ParseOptions};
use log::debug;
use tempfile::{Builder, NamedTempFile};

/// Positional command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub input: PathBuf,
    pub structure: PathBuf,
    pub dimensions: PathBuf,
    pub placement: PathBuf,
}

impl Args {
    /// Accept exactly four paths, program name excluded.
    pub fn from_args<I>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        let parsed = Self {
            input: args.next()?.into(),
            structure: args.next()?.into(),
            dimensions: args.next()?.into(),
            placement: args.next()?.into(),
        };
        match args.next() {
            Some(_) => None,
            None => Some(parsed),
        }
    }
}

/// The three rendered dumps of one floorplan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outputs {
    pub structure: String,
    pub dimensions: String,
    pub placement: String,
    /// Region covered by the root
    pub bounds: Rect,
    pub blocks: usize,
}

/// Parse, evaluate, and render a floorplan.
///
/// The structural dump is rendered before evaluation, matching the order in
/// which the dumps are defined.
pub fn evaluate<R: BufRead>(
    input: R,
    parse_options: &ParseOptions,
    layout_options: &LayoutOptions,
) -> Result<Outputs, FloorplanError> {
    let mut tree = parse_tree(input, parse_options)?;
    let structure = Dump::Structure.render(&tree)?;

    let bounds = compute_layout(&mut tree, layout_options)?;
    let dimensions = Dump::Dimensions.render(&tree)?;
    let placement = Dump::Placement.render(&tree)?;

    Ok(Outputs {
        structure,
        dimensions,
        placement,
        bounds,
        blocks: tree.leaf_count(),
    })
}

/// Run the whole pipeline for the given paths.
pub fn run(args: &Args) -> Result<Outputs> {
    let file = File::open(&args.input)
        .with_context(|| format!("cannot open input {}", args.input.display()))?;
    let outputs = evaluate(
        BufReader::new(file),
        &ParseOptions::default(),
        &LayoutOptions::default(),
    )
    .with_context(|| format!("cannot evaluate {}", args.input.display()))?;

    let staged = [
        (&args.structure, &outputs.structure),
        (&args.dimensions, &outputs.dimensions),
        (&args.placement, &outputs.placement),
    ]
    .into_iter()
    .map(|(path, contents)| stage(path, contents))
    .collect::<Result<Vec<_>>>()?;

    for (target, file) in staged {
        file.persist(&target)
            .with_context(|| format!("cannot write output {}", target.display()))?;
        debug!("wrote {}", target.display());
    }

    Ok(outputs)
}

/// Write `contents` to a temporary file beside the file `path` resolves to.
///
/// Returns the resolved target together with the staged file.
fn stage(path: &Path, contents: &str) -> Result<(PathBuf, NamedTempFile)> {
    // Existing outputs, symlinks included, are replaced at their real location
    let existing = fs::canonicalize(path).ok();
    let target = existing.clone().unwrap_or_else(|| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut file = staging_builder()
        .tempfile_in(&dir)
        .with_context(|| format!("cannot create output {}", path.display()))?;
    if let Some(existing) = &existing {
        let permissions = fs::metadata(existing)?.permissions();
        file.as_file()
            .set_permissions(permissions)
            .with_context(|| format!("cannot keep permissions of {}", path.display()))?;
    }
    file.write_all(contents.as_bytes())
        .with_context(|| format!("cannot write output {}", path.display()))?;
    file.flush()?;
    Ok((target, file))
}

/// Temp file builder creating files like `File::create`: mode 0666 masked by
/// the process umask.
fn staging_builder<'a, 'b>() -> Builder<'a, 'b> {
    #[allow(unused_mut)]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder
}
