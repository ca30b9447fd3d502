//! Emoji glyph to icon name mapping used by
//! [`IconLibrary::replace_glyphs`](crate::IconLibrary::replace_glyphs).
//!
//! Order matters: glyphs are processed in this order, one global pass each.

pub const GLYPHS: [(&str, &str); 36] = [
    ("\u{1F3AE}", "game"),
    ("\u{23F0}", "clock"),
    ("\u{1F4B0}", "money"),
    ("\u{1F510}", "lock"),
    ("\u{1F3AF}", "target"),
    ("\u{1F4DA}", "books"),
    ("\u{1F30D}", "globe"),
    ("\u{1F527}", "tool"),
    ("\u{1F3DB}\u{FE0F}", "institution"),
    ("\u{1F4A1}", "lightbulb"),
    ("\u{1F393}", "graduation"),
    ("\u{1F4D6}", "book"),
    ("\u{1F9ED}", "compass"),
    ("\u{1F3AA}", "tent"),
    ("\u{1F916}", "robot"),
    ("\u{2728}", "sparkles"),
    ("\u{1F3C6}", "trophy"),
    ("\u{1F381}", "gift"),
    ("\u{1F504}", "refresh"),
    ("\u{1F3AC}", "movie"),
    ("\u{1F6E1}\u{FE0F}", "shield"),
    ("\u{26A1}", "lightning"),
    ("\u{1F310}", "network"),
    ("\u{1F4CA}", "chart"),
    ("\u{1F4AC}", "chat"),
    ("\u{1F9E0}", "brain"),
    ("\u{1F3A8}", "palette"),
    ("\u{23F1}\u{FE0F}", "timer"),
    ("\u{1F5FA}\u{FE0F}", "map"),
    ("\u{1F680}", "rocket"),
    ("\u{1F6A8}", "alert"),
    ("\u{1F4C8}", "trending-up"),
    ("\u{1F4B5}", "dollar"),
    ("\u{1F4B8}", "money-flow"),
    ("\u{1F4A7}", "water-drop"),
    ("\u{1F50D}", "search"),
];
