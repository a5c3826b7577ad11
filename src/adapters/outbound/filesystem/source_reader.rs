use crate::inventory::domain::{SourceBlock, SourceLocation};
use crate::ports::outbound::{SourceEvent, SourceFailure, SourceReader};
use crate::shared::error::GrabberError;
use crate::shared::security::{validate_file_size, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs::{self, File};
use std::io::Read;
use flate2::read::GzDecoder;
use std::path::{Path, PathBuf};
use tar::Archive;
use walkdir::WalkDir;
use zip::ZipArchive;

/// Archive containers opened during the walk, recognised by file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArchiveKind {
    Zip,
    Tar,
    TarGz,
}

impl ArchiveKind {
    fn detect(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".zip") {
            Some(Self::Zip)
        } else if lower.ends_with(".tar.gz") || lower.ends_with(".tgz") {
            Some(Self::TarGz)
        } else if lower.ends_with(".tar") {
            Some(Self::Tar)
        } else {
            None
        }
    }
}

/// FileSystemSourceReader adapter for enumerating captures on disk
///
/// Walks the scan root recursively in file-name order without following
/// symbolic links. Zip and tar (plain or gzip) archives are opened and every
/// member becomes its own capture; all other regular files are read whole and decoded as UTF-8,
/// replacing invalid sequences.
pub struct FileSystemSourceReader {
    scan_archives: bool,
    excluded: Vec<PathBuf>,
}

impl FileSystemSourceReader {
    pub fn new() -> Self {
        Self {
            scan_archives: true,
            excluded: Vec::new(),
        }
    }

    /// Enables or disables opening archives
    pub fn with_archives(mut self, scan_archives: bool) -> Self {
        self.scan_archives = scan_archives;
        self
    }

    /// Skips the given path during the walk (the report being written)
    pub fn excluding(mut self, path: PathBuf) -> Self {
        self.excluded.push(path);
        self
    }

    fn validate_root(root: &Path) -> Result<()> {
        let metadata = fs::metadata(root).map_err(|_| GrabberError::InvalidRootPath {
            path: root.to_path_buf(),
            reason: "Folder does not exist".to_string(),
        })?;

        if !metadata.is_dir() {
            return Err(GrabberError::InvalidRootPath {
                path: root.to_path_buf(),
                reason: "Path is not a folder".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.excluded.iter().any(|excluded| {
            excluded == path
                || matches!(
                    (excluded.canonicalize(), path.canonicalize()),
                    (Ok(a), Ok(b)) if a == b
                )
        })
    }

    fn archive_kind(path: &Path) -> Option<ArchiveKind> {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(ArchiveKind::detect)
    }

    fn read_file(path: &Path, relative: &str) -> Result<String> {
        let size = fs::metadata(path)?.len();
        validate_file_size(size, relative, MAX_FILE_SIZE)?;
        let bytes = fs::read(path)?;
        Ok(decode(&bytes))
    }

    fn read_archive(
        &self,
        path: &Path,
        kind: ArchiveKind,
        relative: &str,
        sink: &mut dyn FnMut(SourceEvent),
    ) {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                sink(SourceEvent::Failed(SourceFailure::new(relative, e.to_string())));
                return;
            }
        };

        match kind {
            ArchiveKind::Zip => Self::read_zip(file, relative, sink),
            ArchiveKind::Tar => Self::read_tar(Archive::new(file), relative, sink),
            ArchiveKind::TarGz => {
                Self::read_tar(Archive::new(GzDecoder::new(file)), relative, sink)
            }
        }
    }

    fn read_zip(file: File, relative: &str, sink: &mut dyn FnMut(SourceEvent)) {
        let mut archive = match ZipArchive::new(file) {
            Ok(archive) => archive,
            Err(e) => {
                sink(SourceEvent::Failed(SourceFailure::new(relative, e.to_string())));
                return;
            }
        };

        sink(SourceEvent::ArchiveOpened(relative.to_string()));

        for index in 0..archive.len() {
            let mut entry = match archive.by_index(index) {
                Ok(entry) => entry,
                Err(e) => {
                    sink(SourceEvent::Failed(SourceFailure::new(
                        format!("{} > #{}", relative, index),
                        e.to_string(),
                    )));
                    continue;
                }
            };

            let member = entry.name().replace('\\', "/");
            if entry.is_dir() || ArchiveKind::detect(&member).is_some() {
                continue;
            }

            let location = SourceLocation::archive_member(relative, member);
            let size = entry.size();
            Self::emit_member(&mut entry, size, location, sink);
        }
    }

    /// Tar has no index, so the archive only counts as opened once its
    /// first header reads cleanly
    fn read_tar<R: Read>(
        mut archive: Archive<R>,
        relative: &str,
        sink: &mut dyn FnMut(SourceEvent),
    ) {
        let entries = match archive.entries() {
            Ok(entries) => entries,
            Err(e) => {
                sink(SourceEvent::Failed(SourceFailure::new(relative, e.to_string())));
                return;
            }
        };

        let mut opened = false;
        for (index, entry) in entries.enumerate() {
            let mut entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let source_id = if opened {
                        format!("{} > #{}", relative, index)
                    } else {
                        relative.to_string()
                    };
                    sink(SourceEvent::Failed(SourceFailure::new(source_id, e.to_string())));
                    // The stream position is lost after a bad header
                    return;
                }
            };

            if !opened {
                sink(SourceEvent::ArchiveOpened(relative.to_string()));
                opened = true;
            }

            if !entry.header().entry_type().is_file() {
                continue;
            }
            let member = match entry.path() {
                Ok(member) => member.to_string_lossy().replace('\\', "/"),
                Err(e) => {
                    sink(SourceEvent::Failed(SourceFailure::new(
                        format!("{} > #{}", relative, index),
                        e.to_string(),
                    )));
                    continue;
                }
            };
            if ArchiveKind::detect(&member).is_some() {
                continue;
            }

            let location = SourceLocation::archive_member(relative, member);
            let size = entry.size();
            Self::emit_member(&mut entry, size, location, sink);
        }

        if !opened {
            // An empty tar is still an archive
            sink(SourceEvent::ArchiveOpened(relative.to_string()));
        }
    }

    fn emit_member(
        reader: &mut dyn Read,
        size: u64,
        location: SourceLocation,
        sink: &mut dyn FnMut(SourceEvent),
    ) {
        let content =
            validate_file_size(size, &location.identifier(), MAX_FILE_SIZE).and_then(|_| {
                let mut bytes = Vec::new();
                reader.read_to_end(&mut bytes)?;
                Ok(decode(&bytes))
            });

        match content {
            Ok(content) => sink(SourceEvent::Block(SourceBlock::new(content, location))),
            Err(e) => sink(SourceEvent::Failed(SourceFailure::new(
                location.identifier(),
                e.to_string(),
            ))),
        }
    }
}

impl Default for FileSystemSourceReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceReader for FileSystemSourceReader {
    fn read_sources(&self, root: &Path, sink: &mut dyn FnMut(SourceEvent)) -> Result<()> {
        Self::validate_root(root)?;

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let source_id = e
                        .path()
                        .map(|p| relative_path(root, p))
                        .unwrap_or_else(|| root.display().to_string());
                    sink(SourceEvent::Failed(SourceFailure::new(source_id, e.to_string())));
                    continue;
                }
            };

            if !entry.file_type().is_file() || self.is_excluded(entry.path()) {
                continue;
            }

            let relative = relative_path(root, entry.path());

            if let Some(kind) = Self::archive_kind(entry.path()) {
                if self.scan_archives {
                    self.read_archive(entry.path(), kind, &relative, sink);
                }
                continue;
            }

            match Self::read_file(entry.path(), &relative) {
                Ok(content) => sink(SourceEvent::Block(SourceBlock::new(
                    content,
                    SourceLocation::file(relative),
                ))),
                Err(e) => sink(SourceEvent::Failed(SourceFailure::new(relative, e.to_string()))),
            }
        }

        Ok(())
    }
}

/// Decodes capture bytes, substituting U+FFFD for invalid UTF-8
fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Path below the scan root with `/` separators
fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
