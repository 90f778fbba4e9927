/// Shared constants for the pipeline's fixed file layout and tip formatting.
/// Stages never read these directly; they arrive through `EtlConfig`.

// Default file layout (overridable via etl.toml)
pub const DEFAULT_SOURCE_CSV: &str = "student_ids.csv";
pub const DEFAULT_STORE_FILE: &str = "student_data.json";
pub const DEFAULT_OUTPUT_FILE: &str = "student_data_updated.json";

/// Icon attached to every generated tip.
pub const TIP_ICON: &str = "📚";

/// Description length at which truncation kicks in, in characters.
pub const TIP_MAX_CHARS: usize = 100;

/// Marker appended after a truncation cut.
pub const TIP_ELLIPSIS: &str = "...";
