// Positional modulation factors. Favourable cells multiply a winning
// differential and divide a losing one; corner-adjacent cells do the reverse.
pub const WEIGHT_CORNER: i32 = 40;
pub const WEIGHT_EDGE: i32 = 20;
pub const WEIGHT_X_SQUARE: i32 = 40;
pub const WEIGHT_C_SQUARE: i32 = 20;

pub const DEFAULT_SEARCH_DEPTH: u8 = 2;
// Exhaustive lookahead grows with the branching factor at every level.
pub const MAX_SEARCH_DEPTH: u8 = 6;
