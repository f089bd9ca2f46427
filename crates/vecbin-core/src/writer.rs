//! Artifact output.
//!
//! The output root is created exactly once per run and must not exist
//! beforehand. Each (case, role) pair owns one file, created with
//! `create_new` and never reopened.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::VecbinError;
use crate::grammar::{ArtifactLayout, IdentifierStyle};

/// Decoded bytes of one field, ready to be written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedField {
    pub role: &'static str,
    pub bytes: Vec<u8>,
}

/// A file written for one field of one case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WrittenArtifact {
    pub role: &'static str,
    pub path: PathBuf,
    pub size: usize,
}

#[derive(Debug)]
pub struct ArtifactWriter {
    root: PathBuf,
    layout: ArtifactLayout,
}

impl ArtifactWriter {
    /// Create the output root and a writer for it.
    ///
    /// # Errors
    ///
    /// Returns [`VecbinError::DirectoryExists`] if `root` already exists and
    /// [`VecbinError::DirectoryCreate`] if it cannot be created.
    pub fn create(root: impl Into<PathBuf>, layout: ArtifactLayout) -> Result<Self, VecbinError> {
        let root = root.into();
        match fs::create_dir(&root) {
            Ok(()) => {
                tracing::debug!(root = %root.display(), "created output directory");
                Ok(Self { root, layout })
            }
            Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
                Err(VecbinError::DirectoryExists { path: root })
            }
            Err(source) => Err(VecbinError::DirectoryCreate { path: root, source }),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn artifact_path(&self, index: usize, role: &str) -> PathBuf {
        self.root.join(self.layout.file_name(index, role))
    }

    /// Unquoted identifier of case `index` for the report list.
    #[must_use]
    pub fn identifier(&self, index: usize) -> String {
        match self.layout.identifier {
            IdentifierStyle::Index => index.to_string(),
            IdentifierStyle::RootedStem => {
                format!("{}/{}", self.root.display(), self.layout.stem(index))
            }
        }
    }

    /// Write every field of case `index`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`VecbinError::WriteArtifact`] on the first file that cannot be
    /// created or written. Files written before it are left in place.
    pub fn write_case(
        &self,
        index: usize,
        fields: &[DecodedField],
    ) -> Result<Vec<WrittenArtifact>, VecbinError> {
        fields
            .iter()
            .map(|field| {
                let path = self.artifact_path(index, field.role);
                write_new_file(&path, &field.bytes)
                    .map_err(|source| VecbinError::WriteArtifact {
                        path: path.clone(),
                        source,
                    })?;
                tracing::debug!(path = %path.display(), size = field.bytes.len(), "wrote artifact");
                Ok(WrittenArtifact {
                    role: field.role,
                    path,
                    size: field.bytes.len(),
                })
            })
            .collect()
    }
}

fn write_new_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(bytes)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::grammar::FixtureGrammar;

    #[test]
    fn refuses_existing_root() {
        let tmp = TempDir::new().expect("tempdir");
        let error = ArtifactWriter::create(tmp.path(), FixtureGrammar::Bcrypt.layout()).unwrap_err();
        assert!(matches!(error, VecbinError::DirectoryExists { .. }));
        assert!(error.is_output_directory());
    }

    #[test]
    fn missing_parent_is_a_create_error() {
        let tmp = TempDir::new().expect("tempdir");
        let root = tmp.path().join("missing").join("out");
        let error = ArtifactWriter::create(&root, FixtureGrammar::Bcrypt.layout()).unwrap_err();
        assert!(matches!(error, VecbinError::DirectoryCreate { .. }));
        assert!(error.is_output_directory());
    }

    #[test]
    fn writes_one_file_per_field() {
        let tmp = TempDir::new().expect("tempdir");
        let root = tmp.path().join("out");
        let writer = ArtifactWriter::create(&root, FixtureGrammar::BlockCipher.layout())
            .expect("create root");

        let written = writer
            .write_case(
                1,
                &[
                    DecodedField {
                        role: "key",
                        bytes: vec![0x00, 0x01],
                    },
                    DecodedField {
                        role: "input",
                        bytes: vec![0xff],
                    },
                ],
            )
            .expect("write case");

        assert_eq!(written.len(), 2);
        assert_eq!(written[0].path, root.join("1.key.bin"));
        assert_eq!(fs::read(root.join("1.key.bin")).expect("read"), [0x00, 0x01]);
        assert_eq!(fs::read(root.join("1.input.bin")).expect("read"), [0xff]);
    }

    #[test]
    fn never_overwrites_an_artifact() {
        let tmp = TempDir::new().expect("tempdir");
        let root = tmp.path().join("out");
        let writer =
            ArtifactWriter::create(&root, FixtureGrammar::Digest.layout()).expect("create root");
        let field = DecodedField {
            role: "input",
            bytes: b"abc".to_vec(),
        };

        writer.write_case(1, &[field.clone()]).expect("first write");
        let error = writer.write_case(1, &[field]).unwrap_err();
        assert!(matches!(error, VecbinError::WriteArtifact { .. }));
    }

    #[test]
    fn identifiers_follow_layout() {
        let tmp = TempDir::new().expect("tempdir");

        let bcrypt = ArtifactWriter::create(tmp.path().join("a"), FixtureGrammar::Bcrypt.layout())
            .expect("create root");
        assert_eq!(bcrypt.identifier(7), "7");

        let root = tmp.path().join("b");
        let digest =
            ArtifactWriter::create(&root, FixtureGrammar::Digest.layout()).expect("create root");
        assert_eq!(digest.identifier(2), format!("{}/test2", root.display()));
    }
}
