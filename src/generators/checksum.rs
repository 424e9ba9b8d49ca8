//! MD5 hash manifest (`.md5`) generator.

use crate::Result;
use chrono::Utc;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// Hash manifest file extension.
pub const MD5_EXTENSION: &str = "md5";

/// Compute the MD5 digest of a file as lowercase hex.
pub fn md5_file(path: &Path) -> Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut context = ::md5::Context::new();
    let mut buffer = [0u8; 64 * 1024];

    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        context.consume(&buffer[..read]);
    }

    Ok(format!("{:x}", context.compute()))
}

/// Build manifest content: a comment header, then `<digest> *<file name>` per file.
pub fn generate_manifest(files: &[&Path]) -> Result<String> {
    let mut content = format!(
        "; Generated by {} v{} on {}\r\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );

    for file in files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        content.push_str(&format!("{} *{}\r\n", md5_file(file)?, name));
    }

    Ok(content)
}

/// Write a manifest covering `files` to `output`.
pub fn write_manifest(files: &[&Path], output: &Path) -> Result<()> {
    let content = generate_manifest(files)?;
    let mut file = File::create(output)?;
    file.write_all(content.as_bytes())?;
    tracing::debug!("Hash manifest written: {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_md5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("abc.txt");
        std::fs::write(&path, "abc").unwrap();
        assert_eq!(md5_file(&path).unwrap(), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_manifest_lists_files() {
        let dir = TempDir::new().unwrap();
        let movie = dir.path().join("Heat.avi");
        let info = dir.path().join("Heat.mnfo");
        std::fs::write(&movie, "").unwrap();
        std::fs::write(&info, "abc").unwrap();

        let content = generate_manifest(&[&movie, &info]).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[0].starts_with("; Generated by"));
        assert_eq!(lines[1], "d41d8cd98f00b204e9800998ecf8427e *Heat.avi");
        assert_eq!(lines[2], "900150983cd24fb0d6963f7d28e17f72 *Heat.mnfo");
    }

    #[test]
    fn test_missing_file_fails() {
        assert!(md5_file(Path::new("/nonexistent/file.mkv")).is_err());
    }
}
