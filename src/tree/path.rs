//! Node naming: the path strings that feed each node's hash

use path_clean::PathClean;
use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Name of the root node. The root contributes no path bytes to its hash.
pub fn root_name() -> PathBuf {
    PathBuf::new()
}

/// Name of a directory entry: the parent's path joined with the entry name,
/// lexically cleaned (`./a.txt` becomes `a.txt`, `dir//x` becomes `dir/x`).
///
/// `parent` is the path the parent directory was opened with, not the parent
/// node's name; they only differ for the root.
pub fn child_name(parent: &Path, entry: &OsStr, unicode_nfc: bool) -> PathBuf {
    let joined = parent.join(entry).clean();
    if unicode_nfc {
        normalize_nfc(&joined)
    } else {
        joined
    }
}

/// Normalize a path to Unicode NFC (Canonical Composition)
pub fn normalize_nfc(path: &Path) -> PathBuf {
    let normalized: String = path.to_string_lossy().nfc().collect();
    PathBuf::from(normalized)
}

/// Bytes of a node name as they enter the hash.
///
/// On Unix these are the raw OS bytes; elsewhere the lossy UTF-8 form.
pub fn name_bytes(name: &Path) -> Cow<'_, [u8]> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        Cow::Borrowed(name.as_os_str().as_bytes())
    }
    #[cfg(not(unix))]
    {
        match name.to_string_lossy() {
            Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
            Cow::Owned(s) => Cow::Owned(s.into_bytes()),
        }
    }
}
