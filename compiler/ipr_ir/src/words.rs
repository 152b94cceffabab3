//! Reserved words known at build time.
//!
//! The table is kept in byte order so lookups can use a predicate-based
//! binary search. Words found here are handed out as static symbols and never
//! copied into the arena.

/// Reserved words of the source language, sorted by bytes.
pub static STATIC_WORDS: [&str; 82] = [
    "alignas",
    "alignof",
    "asm",
    "auto",
    "bool",
    "break",
    "case",
    "catch",
    "char",
    "char16_t",
    "char32_t",
    "char8_t",
    "class",
    "co_await",
    "co_return",
    "co_yield",
    "concept",
    "const",
    "const_cast",
    "consteval",
    "constexpr",
    "constinit",
    "continue",
    "decltype",
    "default",
    "delete",
    "do",
    "double",
    "dynamic_cast",
    "else",
    "enum",
    "explicit",
    "export",
    "extern",
    "false",
    "float",
    "for",
    "friend",
    "goto",
    "if",
    "inline",
    "int",
    "long",
    "mutable",
    "namespace",
    "new",
    "noexcept",
    "nullptr",
    "operator",
    "private",
    "protected",
    "public",
    "register",
    "reinterpret_cast",
    "requires",
    "restrict",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "static_assert",
    "static_cast",
    "struct",
    "switch",
    "template",
    "this",
    "thread_local",
    "throw",
    "true",
    "try",
    "typedef",
    "typeid",
    "typename",
    "union",
    "unsigned",
    "using",
    "virtual",
    "void",
    "volatile",
    "wchar_t",
    "while",
];

/// Position of `text` in [`STATIC_WORDS`], if present.
#[inline]
pub(crate) fn find_word(text: &[u8]) -> Option<usize> {
    let at = STATIC_WORDS.partition_point(|word| word.as_bytes() < text);
    STATIC_WORDS
        .get(at)
        .filter(|word| word.as_bytes() == text)
        .map(|_| at)
}

/// Text of the static word at `index`.
#[inline]
pub(crate) fn word_text(index: usize) -> &'static str {
    STATIC_WORDS[index]
}
