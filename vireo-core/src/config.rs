//! Injected external tool locations.
//!
//! The transcoder path is resolved once at startup and passed around as a
//! plain value, rather than computed lazily in a process-wide static on
//! first use. Extraction and invocation of the binary belong to the
//! hosting application, not to this crate.

use std::path::{Path, PathBuf};

/// Resolved locations of the external transcoder toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscoderConfig {
    /// Directory holding the transcoder tools under the program-data root.
    pub tool_dir: PathBuf,
    /// Full path of the ffmpeg binary inside [`Self::tool_dir`].
    pub ffmpeg_path: PathBuf,
}

impl TranscoderConfig {
    /// Compute tool locations beneath `program_data_dir`. Pure path math;
    /// nothing is created or checked on disk.
    pub fn new(program_data_dir: impl AsRef<Path>) -> Self {
        let tool_dir = program_data_dir.as_ref().join("ffmpeg");
        let ffmpeg_path = tool_dir.join(FFMPEG_BINARY);
        Self {
            tool_dir,
            ffmpeg_path,
        }
    }
}

#[cfg(windows)]
const FFMPEG_BINARY: &str = "ffmpeg.exe";
#[cfg(not(windows))]
const FFMPEG_BINARY: &str = "ffmpeg";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_rooted_in_program_data() {
        let config = TranscoderConfig::new("/var/lib/vireo");
        assert_eq!(config.tool_dir, PathBuf::from("/var/lib/vireo/ffmpeg"));
        assert!(config.ffmpeg_path.starts_with(&config.tool_dir));
        assert!(
            config
                .ffmpeg_path
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("ffmpeg")
        );
    }

    #[test]
    fn construction_is_deterministic() {
        assert_eq!(
            TranscoderConfig::new("/data"),
            TranscoderConfig::new("/data")
        );
    }
}
