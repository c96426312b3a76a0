//! Target key codes understood by the embedded scene.
//!
//! Values follow the virtual key numbering the GUI toolkit's embedding layer
//! expects. Only the codes the adapter's default table produces are listed.

/// Number of distinct target key codes tracked by the dense key tables.
///
/// A mapped code at or beyond this bound is outside the tables and goes
/// through the fallback rule instead.
pub const KEY_CODE_LIMIT: usize = 0x1_0000;

pub const VK_UNDEFINED: i32 = 0;

pub const VK_BACK_SPACE: i32 = 8;
pub const VK_TAB: i32 = 9;
pub const VK_ENTER: i32 = 10;
pub const VK_SHIFT: i32 = 16;
pub const VK_CONTROL: i32 = 17;
pub const VK_ALT: i32 = 18;
pub const VK_PAUSE: i32 = 19;
pub const VK_CAPS_LOCK: i32 = 20;
pub const VK_ESCAPE: i32 = 27;
pub const VK_SPACE: i32 = 32;
pub const VK_PAGE_UP: i32 = 33;
pub const VK_PAGE_DOWN: i32 = 34;
pub const VK_END: i32 = 35;
pub const VK_HOME: i32 = 36;
pub const VK_LEFT: i32 = 37;
pub const VK_UP: i32 = 38;
pub const VK_RIGHT: i32 = 39;
pub const VK_DOWN: i32 = 40;
pub const VK_COMMA: i32 = 44;
pub const VK_MINUS: i32 = 45;
pub const VK_PERIOD: i32 = 46;
pub const VK_SLASH: i32 = 47;
/// `0`; digits continue contiguously up to `9` (57).
pub const VK_0: i32 = 48;
pub const VK_SEMICOLON: i32 = 59;
pub const VK_EQUALS: i32 = 61;
/// `A`; letters continue contiguously up to `Z` (90).
pub const VK_A: i32 = 65;
pub const VK_OPEN_BRACKET: i32 = 91;
pub const VK_BACK_SLASH: i32 = 92;
pub const VK_CLOSE_BRACKET: i32 = 93;
/// Keypad `0`; keypad digits continue up to `9` (105).
pub const VK_NUMPAD0: i32 = 96;
pub const VK_MULTIPLY: i32 = 106;
pub const VK_ADD: i32 = 107;
pub const VK_SEPARATOR: i32 = 108;
pub const VK_SUBTRACT: i32 = 109;
pub const VK_DECIMAL: i32 = 110;
pub const VK_DIVIDE: i32 = 111;
/// `F1`; continues contiguously up to `F12` (123).
pub const VK_F1: i32 = 112;
pub const VK_DELETE: i32 = 127;
pub const VK_NUM_LOCK: i32 = 144;
pub const VK_SCROLL_LOCK: i32 = 145;
pub const VK_PRINTSCREEN: i32 = 154;
pub const VK_INSERT: i32 = 155;
pub const VK_HELP: i32 = 156;
pub const VK_META: i32 = 157;
pub const VK_BACK_QUOTE: i32 = 192;
pub const VK_QUOTE: i32 = 222;
pub const VK_CONTEXT_MENU: i32 = 525;
/// `F13`; continues contiguously up to `F24` (0xF00B).
pub const VK_F13: i32 = 0xF000;
