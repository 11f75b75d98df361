pub const TITLE: &str = "AI Oncologist";
pub const FOOTER: &str = "Powered by Lilypad";
pub const KEY_HELP: &str = "Tab focus · Enter select/ask · PgUp/PgDn scroll · Esc quit";

pub const DROP_HINT: &str = "Type paths and press Enter, or drag and drop files here";
pub const DROP_SUBHINT: &str = "PDF files only";
pub const QUERY_PLACEHOLDER: &str = "Enter your question";
pub const ANSWER_TITLE: &str = "Answer:";

pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
/// Files listed before the list scrolls off; mirrors a small fixed-height box.
pub const MAX_FILE_ROWS: usize = 4;
pub const SCROLL_STEP: u16 = 5;
