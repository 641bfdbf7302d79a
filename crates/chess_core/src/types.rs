#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl From<cozy_chess::Color> for Color {
    fn from(color: cozy_chess::Color) -> Self {
        match color {
            cozy_chess::Color::White => Color::White,
            cozy_chess::Color::Black => Color::Black,
        }
    }
}

impl From<Color> for cozy_chess::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::White => cozy_chess::Color::White,
            Color::Black => cozy_chess::Color::Black,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Color::White => "white",
            Color::Black => "black",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }
}

impl From<PieceKind> for cozy_chess::Piece {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => cozy_chess::Piece::Pawn,
            PieceKind::Knight => cozy_chess::Piece::Knight,
            PieceKind::Bishop => cozy_chess::Piece::Bishop,
            PieceKind::Rook => cozy_chess::Piece::Rook,
            PieceKind::Queen => cozy_chess::Piece::Queen,
            PieceKind::King => cozy_chess::Piece::King,
        }
    }
}

/// Why a game ended. Mirrors the conditions that end a game automatically,
/// without either player claiming a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    /// 150 half-moves without a capture or pawn move.
    SeventyFiveMoves,
    FivefoldRepetition,
}

impl Termination {
    pub fn is_draw(self) -> bool {
        !matches!(self, Termination::Checkmate)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Decisive { winner: Color },
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Decisive { winner: Color::White } => f.write_str("1-0"),
            Outcome::Decisive { winner: Color::Black } => f.write_str("0-1"),
            Outcome::Draw => f.write_str("1/2-1/2"),
        }
    }
}
