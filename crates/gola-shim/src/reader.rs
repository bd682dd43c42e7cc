//! Shebang extraction from plain scripts and zip archives.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek};
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{Error, Result};

const SHEBANG: [u8; 2] = *b"#!";
const ZIP_MAGIC: [u8; 2] = *b"PK";

/// Read the shebang line of the script at `path`.
///
/// Plain files starting with `#!` yield their first line. Zip archives yield
/// the first line of the first entry of `members` (in that order) present in
/// the archive. Anything else, including an archive without a matching
/// member, yields an empty string. The trailing newline is kept.
pub fn read_shebang(path: &Path, members: &[String]) -> Result<String> {
    let mut file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut magic = [0u8; 2];
    file.read_exact(&mut magic).map_err(|source| match source.kind() {
        io::ErrorKind::UnexpectedEof => Error::Signature {
            path: path.to_path_buf(),
            expected: magic.len(),
        },
        _ => Error::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    match magic {
        SHEBANG => {
            file.rewind().map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
            first_line(BufReader::new(file), path)
        }
        ZIP_MAGIC => read_archive(file, path, members),
        _ => Ok(String::new()),
    }
}

fn read_archive<R: Read + Seek>(reader: R, path: &Path, members: &[String]) -> Result<String> {
    let mut archive = ZipArchive::new(reader).map_err(|source| Error::Archive {
        path: path.to_path_buf(),
        source,
    })?;

    for member in members {
        match archive.by_name(member) {
            Ok(entry) => {
                tracing::debug!(archive = %path.display(), member = %member, "reading shebang from archive member");
                return first_line(BufReader::new(entry), path);
            }
            Err(ZipError::FileNotFound) => continue,
            Err(source) => {
                return Err(Error::Member {
                    path: path.to_path_buf(),
                    member: member.clone(),
                    source,
                });
            }
        }
    }

    tracing::debug!(archive = %path.display(), "no configured member in archive");
    Ok(String::new())
}

fn first_line<R: BufRead>(mut reader: R, path: &Path) -> Result<String> {
    let mut line = Vec::new();
    reader
        .read_until(b'\n', &mut line)
        .map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(String::from_utf8_lossy(&line).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn zip_with(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in entries {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(data.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn members(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_first_line_without_newline() {
        let line = first_line(Cursor::new("#!/bin/sh"), Path::new("x")).unwrap();
        assert_eq!(line, "#!/bin/sh");
    }

    #[test]
    fn test_first_line_stops_at_newline() {
        let line = first_line(Cursor::new("#!/bin/sh\necho hi\n"), Path::new("x")).unwrap();
        assert_eq!(line, "#!/bin/sh\n");
    }

    #[test]
    fn test_first_line_empty_stream() {
        assert_eq!(first_line(Cursor::new(""), Path::new("x")).unwrap(), "");
    }

    #[test]
    fn test_archive_member_order_follows_config() {
        let data = zip_with(&[
            ("main.rb", "#!/usr/bin/env ruby\n"),
            ("__main__.py", "#!/usr/bin/env python\nprint()\n"),
        ]);

        let line = read_archive(
            Cursor::new(data),
            Path::new("a.pyz"),
            &members(&["__main__.py", "main.rb"]),
        )
        .unwrap();
        assert_eq!(line, "#!/usr/bin/env python\n");
    }

    #[test]
    fn test_archive_without_member() {
        let data = zip_with(&[("lib/util.py", "x = 1\n")]);

        let line = read_archive(Cursor::new(data), Path::new("a.pyz"), &members(&["__main__.py"]))
            .unwrap();
        assert_eq!(line, "");
    }

    #[test]
    fn test_archive_member_name_is_exact() {
        let data = zip_with(&[("pkg/__main__.py", "#!/usr/bin/env python\n")]);

        let line = read_archive(Cursor::new(data), Path::new("a.pyz"), &members(&["__main__.py"]))
            .unwrap();
        assert_eq!(line, "");
    }

    #[test]
    fn test_malformed_archive() {
        let err = read_archive(
            Cursor::new(b"PK\x03\x04garbage".to_vec()),
            Path::new("bad.zip"),
            &members(&["__main__.py"]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Archive { .. }));
    }
}
