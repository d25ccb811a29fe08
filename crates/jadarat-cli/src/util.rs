use anyhow::Result;
use std::{fs, path::Path};

const POSTINGS_EXTENSIONS: [&str; 2] = ["csv", "tsv"];

/// Check that `path` names an existing `.csv` or `.tsv` postings export.
pub fn validate_postings_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    let has_known_extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            POSTINGS_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false);
    if !has_known_extension {
        anyhow::bail!(
            "Postings file must have a .csv or .tsv extension: {}",
            path.display()
        );
    }

    if !path.is_file() {
        anyhow::bail!("Postings file does not exist: {}", path.display());
    }

    Ok(())
}

/// Write `bytes` to `path`, creating missing parent directories first.
pub fn write_bytes_to_file<P: AsRef<Path>>(path: P, bytes: &[u8]) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)
}
