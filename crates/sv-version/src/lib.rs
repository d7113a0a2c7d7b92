//! Parsing and precedence of `major.minor.patch-pre.release+build.metadata` versions.

pub mod error;
pub mod identifier;

use std::cmp::Ordering;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};
use tracing::debug;

pub use error::{ErrorKind, VersionError};

/// Separates pre-release identifiers from build metadata, both in version
/// strings and in the identifier list passed to [`Version::new`].
pub const METADATA_MARKER: &str = "+";

/// Numbers a version starts out with before parsed parts are applied.
const DEFAULT_NUMBERS: [i64; 3] = [1, 0, 0];

/// A version made of three numbers, pre-release identifiers and build metadata.
///
/// Equality covers every part, including metadata. Precedence does not look at
/// metadata, which is why ranking goes through [`Version::less_than`] and
/// [`Version::precedence`] rather than `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, DeserializeFromStr, SerializeDisplay)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Vec<String>,
    metadata: Vec<String>,
}

impl Version {
    /// Build a version from its numbers and a flat list of identifiers.
    ///
    /// Identifiers before the first [`METADATA_MARKER`] are pre-release
    /// identifiers, the ones after it are build metadata. Every identifier is
    /// sanitized, identifiers left empty by that are dropped, and negative
    /// numbers are clamped to zero.
    pub fn new<I>(major: i64, minor: i64, patch: i64, identifiers: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut pre_release = Vec::new();
        let mut metadata = Vec::new();
        let mut in_metadata = false;

        for id in identifiers {
            let id = id.as_ref();
            if !in_metadata && id == METADATA_MARKER {
                in_metadata = true;
                continue;
            }

            let sanitized = identifier::sanitize(id, !in_metadata);
            if sanitized.is_empty() {
                debug!("Dropped identifier {id:?}, nothing valid is left after sanitizing");
                continue;
            }

            if in_metadata {
                metadata.push(sanitized);
            } else {
                pre_release.push(sanitized);
            }
        }

        Self {
            major: clamp(major),
            minor: clamp(minor),
            patch: clamp(patch),
            pre_release,
            metadata,
        }
    }

    /// A plain release version without identifiers.
    pub fn from_numbers(major: i64, minor: i64, patch: i64) -> Self {
        Self::new(major, minor, patch, std::iter::empty::<&str>())
    }

    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        let (number_and_pre, metadata) = raw.split_once(METADATA_MARKER).unwrap_or((raw, ""));
        let (number, pre_release) = number_and_pre
            .split_once('-')
            .unwrap_or((number_and_pre, ""));

        let [major, minor, patch] = parse_numbers(number)
            .inspect_err(|err| debug!("Rejected version {raw:?}: {err}"))?;

        let mut identifiers = Vec::new();
        if !pre_release.is_empty() {
            identifiers.extend(pre_release.split('.'));
        }
        identifiers.push(METADATA_MARKER);
        if !metadata.is_empty() {
            identifiers.extend(metadata.split('.'));
        }

        Ok(Self::new(major, minor, patch, identifiers))
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release identifiers joined with dots, empty if there are none.
    pub fn pre_release(&self) -> String {
        self.pre_release.join(".")
    }

    /// Build metadata identifiers joined with dots, empty if there are none.
    pub fn metadata(&self) -> String {
        self.metadata.join(".")
    }

    pub fn pre_release_identifiers(&self) -> &[String] {
        &self.pre_release
    }

    pub fn metadata_identifiers(&self) -> &[String] {
        &self.metadata
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Does this version have a lower precedence than `other`?
    pub fn less_than(&self, other: &Self) -> bool {
        self.precedence(other) == Ordering::Less
    }

    /// Do both versions rank the same, metadata aside?
    pub fn same_precedence(&self, other: &Self) -> bool {
        self.precedence(other) == Ordering::Equal
    }

    /// Rank this version against `other`.
    ///
    /// Numbers are compared first. With equal numbers the pre-release
    /// identifiers decide: integers by value, anything else as text, and when
    /// one list runs out first the longer one ranks lower. This puts
    /// `1.0.0-alpha` before `1.0.0`, and also `1.0.0-alpha.1` before
    /// `1.0.0-alpha`.
    ///
    /// Identifiers mixing letters and digits compare as text against integers,
    /// so the ranking is not transitive across such mixes (`2 < 10 < 1a < 2`).
    pub fn precedence(&self, other: &Self) -> Ordering {
        if self.major != other.major {
            self.major.cmp(&other.major)
        } else if self.minor != other.minor {
            self.minor.cmp(&other.minor)
        } else if self.patch != other.patch {
            self.patch.cmp(&other.patch)
        } else {
            identifier::compare_lists(&self.pre_release, &other.pre_release)
        }
    }
}

/// Parse a version string.
pub fn parse(raw: &str) -> Result<Version, VersionError> {
    Version::parse(raw)
}

fn clamp(number: i64) -> u64 {
    number.max(0).unsigned_abs()
}

fn parse_numbers(number: &str) -> Result<[i64; 3], VersionError> {
    let count = number.split('.').count();
    if count > DEFAULT_NUMBERS.len() {
        return Err(VersionError::PartCount {
            number: number.to_string(),
            count,
        });
    }

    let mut numbers = DEFAULT_NUMBERS;
    for (slot, part) in numbers.iter_mut().zip(number.split('.')) {
        let value: i64 = part.parse().map_err(|source| VersionError::InvalidPart {
            part: part.to_string(),
            source,
        })?;
        if value < 0 {
            return Err(VersionError::NegativePart { part: value });
        }
        *slot = value;
    }

    Ok(numbers)
}

impl Default for Version {
    fn default() -> Self {
        let [major, minor, patch] = DEFAULT_NUMBERS;
        Self::from_numbers(major, minor, patch)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release())?;
        }
        if !self.metadata.is_empty() {
            write!(f, "{METADATA_MARKER}{}", self.metadata())?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        Version::parse(s)
    }
}
