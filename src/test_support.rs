//! Shared proptest strategies.

use crate::platform::CharacterSet;
use proptest::prelude::*;

// Characters NFKD or the substitution table treat specially: fullwidth and
// compatibility forms that decompose into forbidden ASCII (`／`, `‥`, `℀`),
// accented and folded letters, unfoldable scripts, controls.
const INTERESTING: &[char] = &[
    '／', '＼', '：', '＊', '？', '＂', '＜', '＞', '｜', '‥', '℀', '℁', '…', 'ﬁ', '①',
    'é', 'ß', 'Æ', 'ł', 'Ω', 'Ж', '日', '🎉', '\u{301}', '\u{0}', '\u{7f}', '\t',
    ':', '"', '/', '\\', '<', '>', '|', '?', '*', '.', ' ',
];

/// Arbitrary names biased towards characters with special handling.
pub fn name() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![any::<char>(), prop::sample::select(INTERESTING)],
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
}

pub fn platform() -> impl Strategy<Value = CharacterSet> {
    prop::sample::select(CharacterSet::ALL.to_vec())
}

pub fn maybe_platform() -> impl Strategy<Value = Option<CharacterSet>> {
    prop::option::of(platform())
}
