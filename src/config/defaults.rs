//! Default configuration values

/// Manifest file name, looked up in the current working directory
pub const MANIFEST_FILE: &str = "cbuild.txt";

/// Leading character that marks a manifest line as a comment
pub const COMMENT_TAG: char = '#';

/// Output executable name when `-out` is not given
pub const DEFAULT_EXECUTABLE_NAME: &str = "program";

/// Compiler binary, resolved on PATH
pub const COMPILER: &str = "gcc";

/// Flag that precedes the output executable name
pub const OUTPUT_FLAG: &str = "-o";

/// Default log directive when `RUST_LOG` is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";
