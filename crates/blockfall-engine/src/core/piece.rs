use std::fmt;

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};

use crate::core::board::{PIECE_SPAWN_X, PIECE_SPAWN_Y};

/// Piece kinds in catalog order.
///
/// The discriminant doubles as the basis of the color class a locked piece
/// paints onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Number of piece kinds.
    pub const LEN: usize = 7;

    /// Every piece kind in catalog order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// The spawn orientation of this kind.
    #[must_use]
    pub const fn shape(self) -> Shape {
        PIECE_SHAPES[self as usize]
    }

    /// Class a locked piece of this kind writes into the board, `1`
    /// through `7` in catalog order.
    #[must_use]
    pub const fn color_class(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`color_class`](Self::color_class).
    #[must_use]
    pub const fn from_color_class(class: u8) -> Option<Self> {
        match class {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::I,
            1 => PieceKind::J,
            2 => PieceKind::L,
            3 => PieceKind::O,
            4 => PieceKind::S,
            5 => PieceKind::T,
            _ => PieceKind::Z,
        }
    }
}

/// Square occupancy grid for one piece orientation, 2 to 4 cells per side.
///
/// Shapes are plain values: rotation returns a new shape and leaves the
/// original untouched, so a rejected candidate is reverted by dropping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    rows: [u8; 4],
    size: usize,
}

impl Shape {
    const fn from_rows(size: usize, rows: [u8; 4]) -> Self {
        Self { rows, size }
    }

    /// Side length of the square template.
    #[must_use]
    pub const fn size(self) -> usize {
        self.size
    }

    /// Whether the template cell at `(x, y)` is occupied.
    #[must_use]
    pub const fn is_occupied(self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && (self.rows[y] & (1 << x)) != 0
    }

    /// Occupied cell offsets within the template, in row-major order.
    #[expect(clippy::cast_possible_truncation)]
    pub fn occupied_offsets(self) -> impl Iterator<Item = (i16, i16)> {
        let size = self.size;
        (0..size).flat_map(move |y| {
            (0..size)
                .filter(move |&x| self.is_occupied(x, y))
                .map(move |x| (x as i16, y as i16))
        })
    }

    /// The shape turned a quarter turn counter-clockwise: the grid is
    /// transposed, then its row order reversed.
    #[must_use]
    pub fn rotated(self) -> Self {
        let mut rows = [0_u8; 4];
        for y in 0..self.size {
            for x in 0..self.size {
                if self.is_occupied(self.size - 1 - y, x) {
                    rows[y] |= 1 << x;
                }
            }
        }
        Self {
            rows,
            size: self.size,
        }
    }
}

/// Spawn orientations in catalog order.
const PIECE_SHAPES: [Shape; PieceKind::LEN] = {
    const fn r(cells: [bool; 4]) -> u8 {
        let mut bits = 0;
        let mut x = 0;
        while x < 4 {
            if cells[x] {
                bits |= 1 << x;
            }
            x += 1;
        }
        bits
    }
    const C: bool = true;
    const E: bool = false;
    const EEEE: u8 = r([E; 4]);
    [
        // I-piece
        Shape::from_rows(4, [EEEE, r([C, C, C, C]), EEEE, EEEE]),
        // J-piece
        Shape::from_rows(3, [r([C, E, E, E]), r([C, C, C, E]), EEEE, EEEE]),
        // L-piece
        Shape::from_rows(3, [r([E, E, C, E]), r([C, C, C, E]), EEEE, EEEE]),
        // O-piece
        Shape::from_rows(2, [r([C, C, E, E]), r([C, C, E, E]), EEEE, EEEE]),
        // S-piece
        Shape::from_rows(3, [r([E, C, C, E]), r([C, C, E, E]), EEEE, EEEE]),
        // T-piece
        Shape::from_rows(3, [r([E, C, E, E]), r([C, C, C, E]), EEEE, EEEE]),
        // Z-piece
        Shape::from_rows(3, [r([C, C, E, E]), r([E, C, C, E]), EEEE, EEEE]),
    ]
};

/// Signed board position of a piece's template origin.
///
/// Coordinates may leave the board: a shape whose occupied cells sit inside
/// the template interior needs a negative origin to reach the left wall.
/// Candidates past an edge are rejected by collision checks, not by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiecePosition {
    x: i16,
    y: i16,
}

impl PiecePosition {
    /// Where fresh pieces enter the board: horizontally centered on the
    /// top row.
    pub const SPAWN: Self = Self::new(PIECE_SPAWN_X, PIECE_SPAWN_Y);

    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn x(self) -> i16 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> i16 {
        self.y
    }

    /// The position moved `dx` columns to the right (negative for left).
    #[must_use]
    pub const fn shifted(self, dx: i16) -> Self {
        Self::new(self.x + dx, self.y)
    }

    /// The position one row further down.
    #[must_use]
    pub const fn descended(self) -> Self {
        Self::new(self.x, self.y + 1)
    }
}

/// A piece in flight: its kind, current shape, and board position.
///
/// Movement and rotation produce candidate values; a candidate that
/// collides is discarded and the original keeps falling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallingPiece {
    kind: PieceKind,
    shape: Shape,
    position: PiecePosition,
}

impl FallingPiece {
    /// A fresh piece of `kind` at the spawn position in spawn orientation.
    #[must_use]
    pub const fn spawned(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: kind.shape(),
            position: PiecePosition::SPAWN,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub const fn position(&self) -> PiecePosition {
        self.position
    }

    /// The piece shifted `dx` columns sideways.
    #[must_use]
    pub const fn shifted(&self, dx: i16) -> Self {
        Self {
            kind: self.kind,
            shape: self.shape,
            position: self.position.shifted(dx),
        }
    }

    /// The piece one row further down.
    #[must_use]
    pub const fn descended(&self) -> Self {
        Self {
            kind: self.kind,
            shape: self.shape,
            position: self.position.descended(),
        }
    }

    /// The piece rotated a quarter turn counter-clockwise in place.
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            kind: self.kind,
            shape: self.shape.rotated(),
            position: self.position,
        }
    }

    /// The same piece relocated to `position`.
    #[must_use]
    pub const fn placed_at(&self, position: PiecePosition) -> Self {
        Self {
            kind: self.kind,
            shape: self.shape,
            position,
        }
    }

    /// Absolute board coordinates of the piece's occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> {
        let position = self.position;
        self.shape
            .occupied_offsets()
            .map(move |(dx, dy)| (position.x() + dx, position.y() + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(shape: Shape) -> Vec<(i16, i16)> {
        shape.occupied_offsets().collect()
    }

    #[test]
    fn test_catalog_shapes() {
        assert_eq!(occupied(PieceKind::I.shape()), [(0, 1), (1, 1), (2, 1), (3, 1)]);
        assert_eq!(occupied(PieceKind::J.shape()), [(0, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(occupied(PieceKind::L.shape()), [(2, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(occupied(PieceKind::O.shape()), [(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(occupied(PieceKind::S.shape()), [(1, 0), (2, 0), (0, 1), (1, 1)]);
        assert_eq!(occupied(PieceKind::T.shape()), [(1, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(occupied(PieceKind::Z.shape()), [(0, 0), (1, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_rotation_turns_counter_clockwise() {
        let rotated = PieceKind::T.shape().rotated();
        assert_eq!(occupied(rotated), [(1, 0), (0, 1), (1, 1), (1, 2)]);

        // The bar ends up in template column 1.
        let rotated = PieceKind::I.shape().rotated();
        assert_eq!(occupied(rotated), [(1, 0), (1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_four_rotations_return_to_spawn_shape() {
        for kind in PieceKind::ALL {
            let shape = kind.shape();
            let full_turn = shape.rotated().rotated().rotated().rotated();
            assert_eq!(full_turn, shape, "{kind}");
        }
    }

    #[test]
    fn test_color_classes_follow_catalog_order() {
        for (i, kind) in PieceKind::ALL.into_iter().enumerate() {
            let class = u8::try_from(i).unwrap() + 1;
            assert_eq!(kind.color_class(), class);
            assert_eq!(PieceKind::from_color_class(class), Some(kind));
        }
        assert_eq!(PieceKind::from_color_class(0), None);
        assert_eq!(PieceKind::from_color_class(8), None);
    }

    #[test]
    fn test_spawned_piece_is_centered_on_top_row() {
        let piece = FallingPiece::spawned(PieceKind::T);
        assert_eq!(piece.position(), PiecePosition::new(4, 0));
        assert_eq!(piece.shape(), PieceKind::T.shape());
    }

    #[test]
    fn test_piece_ops_return_candidates() {
        let piece = FallingPiece::spawned(PieceKind::L);
        let moved = piece.shifted(-1).descended();
        assert_eq!(moved.position(), PiecePosition::new(3, 1));
        assert_eq!(piece.position(), PiecePosition::SPAWN);

        let rotated = piece.rotated();
        assert_ne!(rotated.shape(), piece.shape());
        assert_eq!(rotated.position(), piece.position());
    }

    #[test]
    fn test_cells_are_absolute_coordinates() {
        let piece = FallingPiece::spawned(PieceKind::O).placed_at(PiecePosition::new(-1, 5));
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, [(-1, 5), (0, 5), (-1, 6), (0, 6)]);
    }
}
