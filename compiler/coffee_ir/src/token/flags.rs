//! Per-token layout and provenance flags.

use bitflags::bitflags;

bitflags! {
    /// Boolean properties of a token packed into one byte.
    ///
    /// Layout bits (`SPACED`, `NEW_LINE`) are set by the scanner after the
    /// token is created, when it sees what follows. Provenance bits
    /// (`GENERATED`, `EXPLICIT`, `FROM_THEN`) are set only on tokens the
    /// rewriter synthesizes.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TokenFlags: u8 {
        /// Horizontal whitespace follows this token.
        const SPACED = 1 << 0;
        /// A line break follows this token.
        const NEW_LINE = 1 << 1;
        /// Synthesized by the rewriter to make implicit syntax explicit.
        const GENERATED = 1 << 2;
        /// Synthesized by the rewriter to normalize a construct that the
        /// source wrote on one line (as opposed to an implicit call/object).
        const EXPLICIT = 1 << 3;
        /// A reserved word used where only an identifier is legal (after `.`,
        /// before `:`). Such identifiers may not be assigned to.
        const RESERVED = 1 << 4;
        /// Closes an interpolated string.
        const STRING_END = 1 << 5;
        /// A synthetic `INDENT` standing in for a `then`.
        const FROM_THEN = 1 << 6;
    }
}
