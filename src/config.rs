// ABOUTME: Version and startup banner constants for the interpreter

pub const VERSION: &str = "0.1.0";
pub const WELCOME_MESSAGE: &str = "Lispy Version 0.1.0";
pub const WELCOME_SUBTITLE: &str = "Press Ctrl+c to Exit";
pub const PROMPT: &str = "lispy> ";
