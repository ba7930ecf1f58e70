//! Stock bar occupancy shared by the engines.

use stockcut_core::Length;

/// One stock bar being filled with pieces.
///
/// `used` is the bar length already consumed: the pieces plus one kerf between
/// each pair of neighbours. No kerf is charged after the last piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Bin {
    used: Length,
    pieces: Vec<Length>,
}

impl Bin {
    /// Opens a bar holding a single piece.
    pub(crate) fn open(piece: Length) -> Self {
        Self {
            used: piece,
            pieces: vec![piece],
        }
    }

    /// Length consumed so far.
    #[inline]
    pub(crate) fn used(&self) -> Length {
        self.used
    }

    /// Returns true if `piece` can be appended without exceeding `max_length`.
    ///
    /// Appending to a non-empty bar also costs one kerf.
    #[inline]
    pub(crate) fn fits(&self, piece: Length, max_length: Length, cut_width: Length) -> bool {
        let gap = if self.pieces.is_empty() { 0 } else { cut_width };
        // used <= max_length always holds, so the subtraction cannot overflow.
        piece <= max_length - self.used - gap
    }

    /// Appends a piece. The caller checks [`fits`](Self::fits) first.
    #[inline]
    pub(crate) fn push(&mut self, piece: Length, cut_width: Length) {
        if !self.pieces.is_empty() {
            self.used += cut_width;
        }
        self.used += piece;
        self.pieces.push(piece);
    }

    /// Removes the last piece, restoring the previous occupancy.
    #[inline]
    pub(crate) fn pop(&mut self, cut_width: Length) -> Option<Length> {
        let piece = self.pieces.pop()?;
        self.used -= piece;
        if !self.pieces.is_empty() {
            self.used -= cut_width;
        }
        Some(piece)
    }

    #[inline]
    pub(crate) fn pieces(&self) -> &[Length] {
        &self.pieces
    }

    pub(crate) fn into_pieces(self) -> Vec<Length> {
        self.pieces
    }
}
