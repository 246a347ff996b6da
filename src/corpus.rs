//! Corpus loading. The on-disk cache layout is
//! `<root>/vendors/tops/<vendor>/<package>.txt`, one raw listing line
//! per package file, directories marked by a trailing `/`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::models::{Corpus, Package, Vendor};

/// Resolve the tops directory: `<root>/vendors/tops` when present, the
/// root itself otherwise, so both the cache parent and the cache dir
/// can be passed on the command line.
pub fn tops_dir(root: &Path) -> PathBuf {
    let nested = root.join("vendors").join("tops");
    if nested.is_dir() {
        nested
    } else {
        root.to_path_buf()
    }
}

/// Load every vendor's cached package listings under `root`.
///
/// Dot-prefixed vendor directories and non-`.txt` files are ignored.
/// A package whose listing is empty is skipped (no data, not an
/// error), and a vendor left without packages is dropped. Both walks
/// are sorted by name so corpus iteration order is stable across runs
/// and filesystems.
pub fn load(root: &Path, quiet: bool) -> Result<Corpus> {
    let tops = tops_dir(root);

    let mut vendor_dirs: Vec<(String, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(&tops)
        .with_context(|| format!("cannot read corpus directory {}", tops.display()))?
    {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !entry.path().is_dir() {
            continue;
        }
        vendor_dirs.push((name, entry.path()));
    }
    vendor_dirs.sort();

    // Collect listing paths up front so the progress bar has a length.
    let mut listings: Vec<(usize, String, PathBuf)> = Vec::new();
    for (vendor_idx, (_, dir)) in vendor_dirs.iter().enumerate() {
        let mut files: Vec<(String, PathBuf)> = Vec::new();
        for entry in std::fs::read_dir(dir)
            .with_context(|| format!("cannot read vendor directory {}", dir.display()))?
        {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let package = match file_name.strip_suffix(".txt") {
                Some(stem) if !stem.is_empty() => stem.to_string(),
                _ => continue,
            };
            files.push((package, entry.path()));
        }
        files.sort();
        for (package, path) in files {
            listings.push((vendor_idx, package, path));
        }
    }

    let pb = if !quiet {
        let pb = ProgressBar::new(listings.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut vendors: Vec<Vendor> = vendor_dirs
        .iter()
        .map(|(name, _)| Vendor {
            name: name.clone(),
            packages: Vec::new(),
        })
        .collect();

    for (vendor_idx, package, path) in listings {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read listing {}", path.display()))?;
        let package = Package::from_listing(package, content.lines());
        if !package.entries.is_empty() {
            vendors[vendor_idx].packages.push(package);
        }
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    vendors.retain(|v| !v.packages.is_empty());
    Ok(Corpus { vendors })
}
