//! Guillotine board packing
//!
//! Estimates how many stock boards a set of rectangles needs. Each board
//! keeps a list of free spaces. A piece goes into the first space it fits,
//! in either orientation, and that space is split into the strip to the
//! right of the piece and the full-width strip below it. This is an area
//! estimate for pricing, not a cutting plan.

use tracing::warn;

/// Fit tolerance in mm
pub const EPS: f64 = 1e-6;

/// A rectangle to place, or a free space on a board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    pub fn rotated(&self) -> Self {
        Self::new(self.h, self.w)
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    pub fn fits_in(&self, space: &Rect) -> bool {
        self.w <= space.w + EPS && self.h <= space.h + EPS
    }

    fn is_degenerate(&self) -> bool {
        !(self.w.is_finite() && self.h.is_finite()) || self.w <= EPS || self.h <= EPS
    }
}

/// Which orientation a pass tries first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    AsGiven,
    Rotated,
}

impl Orientation {
    fn candidates(self, piece: Rect) -> [Rect; 2] {
        match self {
            Orientation::AsGiven => [piece, piece.rotated()],
            Orientation::Rotated => [piece.rotated(), piece],
        }
    }
}

#[derive(Debug)]
struct Board {
    spaces: Vec<Rect>,
}

impl Board {
    /// A fresh board holding `piece`, truncated to the stock if needed.
    fn open(stock: Rect, piece: Rect) -> Self {
        let mut board = Self {
            spaces: vec![stock],
        };
        board.place(0, piece);
        board
    }

    /// Replaces space `index` with what is left after cutting `piece` from
    /// its corner.
    fn place(&mut self, index: usize, piece: Rect) {
        let space = self.spaces[index];
        let right = Rect::new(space.w - piece.w, piece.h);
        let below = Rect::new(space.w, space.h - piece.h);
        let residuals = [right, below].into_iter().filter(|r| !r.is_degenerate());
        self.spaces.splice(index..=index, residuals);
    }

    fn try_place(&mut self, piece: Rect, preference: Orientation) -> bool {
        let candidates = preference.candidates(piece);
        let found = self.spaces.iter().enumerate().find_map(|(index, space)| {
            candidates
                .iter()
                .find(|candidate| candidate.fits_in(space))
                .map(|candidate| (index, *candidate))
        });

        match found {
            Some((index, candidate)) => {
                self.place(index, candidate);
                true
            }
            None => false,
        }
    }
}

/// Board count for one orientation preference.
pub fn pack_with(pieces: &[Rect], stock: Rect, preference: Orientation) -> usize {
    let mut boards: Vec<Board> = Vec::new();

    for piece in pieces.iter().copied().filter(|p| !p.is_degenerate()) {
        if boards.iter_mut().any(|board| board.try_place(piece, preference)) {
            continue;
        }

        let oriented = preference
            .candidates(piece)
            .into_iter()
            .find(|candidate| candidate.fits_in(&stock));
        let placed = match oriented {
            Some(candidate) => candidate,
            None => {
                let preferred = preference.candidates(piece)[0];
                warn!(
                    piece_w = piece.w,
                    piece_h = piece.h,
                    stock_w = stock.w,
                    stock_h = stock.h,
                    "piece larger than stock board, truncated for the estimate"
                );
                Rect::new(preferred.w.min(stock.w), preferred.h.min(stock.h))
            }
        };
        boards.push(Board::open(stock, placed));
    }

    boards.len()
}

/// Boards needed for `pieces`, the better of both orientation preferences.
pub fn pack_boards(pieces: &[Rect], stock: Rect) -> usize {
    [Orientation::AsGiven, Orientation::Rotated]
        .into_iter()
        .map(|preference| pack_with(pieces, stock, preference))
        .min()
        .unwrap_or(0)
}
