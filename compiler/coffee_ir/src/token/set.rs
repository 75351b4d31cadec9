//! Bitset of token tags for O(1) category membership tests.

use super::Tag;

// Compile-time assertion: TagSet uses a u128 bitset, so all discriminants
// must fit in 0..127. If this fails, TagSet needs a wider backing type.
const _: () = assert!(
    Tag::MAX_DISCRIMINANT <= 127,
    "TagSet uses u128 bitset; all discriminants must be < 128"
);

/// A set of tags using bitset representation.
///
/// Each bit in the u128 corresponds to a [`Tag`] discriminant. Category
/// tables used by the scanner and rewriter are `const` values of this type,
/// so a misspelled category is a compile error rather than a silent miss.
///
/// # Example
/// ```ignore
/// const LINE_BREAK: TagSet = TagSet::of(&[Tag::Indent, Tag::Outdent, Tag::Terminator]);
///
/// if LINE_BREAK.contains(tag) {
///     // O(1) lookup
/// }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TagSet(u128);

impl TagSet {
    /// Create a tag set from a list of tags.
    pub const fn of(tags: &[Tag]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < tags.len() {
            bits |= 1u128 << tags[i] as u8;
            i += 1;
        }
        Self(bits)
    }

    /// Union of two tag sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether a tag is in the set.
    #[inline]
    pub const fn contains(self, tag: Tag) -> bool {
        self.0 & (1u128 << tag as u8) != 0
    }

    /// Check whether an optional tag is in the set.
    ///
    /// Lookups past either end of a token list yield `None`, which is never
    /// a member.
    #[inline]
    pub const fn contains_opt(self, tag: Option<Tag>) -> bool {
        match tag {
            Some(tag) => self.contains(tag),
            None => false,
        }
    }
}
