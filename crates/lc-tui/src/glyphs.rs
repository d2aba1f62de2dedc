//! Every symbol drawn on the comparison page.

pub const PEOPLE: &str = "☻";
pub const BRAIN: &str = "◉";
pub const DOCUMENT: &str = "▤";
pub const CLOCK: &str = "◷";
pub const ALERT: &str = "▲";
pub const BOLT: &str = "ϟ";
pub const CHECK: &str = "✓";
pub const ARROW: &str = "→";
pub const NODE: &str = "●";
pub const NODE_DIM: &str = "○";
pub const BULLET: &str = "•";

/// Gauge cells.
pub const BAR_FULL: &str = "\u{2588}"; // █
pub const BAR_EMPTY: &str = "\u{2591}"; // ░

// Process step markers, traditional column.
pub const SEARCH: &str = "⌕";
pub const BOOK: &str = "▥";
pub const GAVEL: &str = "⚖";
pub const FILE_CHECK: &str = "☑";

// Process step markers, AI column.
pub const BOT: &str = "◘";
pub const NETWORK: &str = "⌘";
pub const MICROSCOPE: &str = "◎";
pub const WORKFLOW: &str = "⇄";

pub const FILTER: &str = "▽";
pub const DOLLAR: &str = "$";
pub const TRENDING: &str = "↗";

pub const HUMAN_STEP_MARKERS: [&str; 4] = [SEARCH, BOOK, GAVEL, FILE_CHECK];
pub const AI_STEP_MARKERS: [&str; 4] = [BOT, NETWORK, MICROSCOPE, WORKFLOW];
pub const CAPABILITY_MARKERS: [&str; 3] = [NETWORK, FILTER, BOT];
pub const ROI_MARKERS: [&str; 3] = [CLOCK, DOLLAR, TRENDING];
