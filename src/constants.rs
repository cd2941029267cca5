//! Naming conventions shared by the parser and the generation engine.

/// File name of the per-directory hook module
pub const HOOK_FILE: &str = "_poop.js";

/// Suffix marking a file as a template; stripped from the destination name
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Rendered files with this suffix are re-serialized as indented JSON
pub const JSON_SUFFIX: &str = ".json";

/// Opening and closing brackets of a literal (escaped) name
pub const ESCAPE_OPEN: char = '[';
pub const ESCAPE_CLOSE: char = ']';

/// Directory prefix flattening the directory into its parent
pub const PATHLESS_SIGIL: char = '_';

/// Directory prefix including the directory only if the named data key is truthy
pub const INCLUDE_IF_SIGIL: char = '+';

/// Directory prefix including the directory only if the named data key is falsy or absent
pub const EXCLUDE_IF_SIGIL: char = '-';

/// Environment variables passed to hook scripts
pub const HOOK_PHASE_ENV: &str = "SPROUT_PHASE";
pub const HOOK_DEST_ENV: &str = "SPROUT_DEST";
