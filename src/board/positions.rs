//! Cells, rows, columns, blocks and houses of the grid.
//!
//! Cells are numbered 0..81 row by row. Houses are numbered 0..27: rows first, then columns,
//! then blocks, which is also the bit layout of [`Set<House>`].
use crate::bitset::Set;
use crate::consts::{BLOCK_OFFSET, COL_OFFSET};

#[inline(always)]
pub(crate) fn row(cell: u8) -> u8 {
    cell / 9
}

#[inline(always)]
pub(crate) fn col(cell: u8) -> u8 {
    cell % 9
}

#[inline(always)]
pub(crate) fn block(cell: u8) -> u8 {
    row(cell) / 3 * 3 + col(cell) / 3
}

fn band(cell: u8) -> u8 {
    cell / 27
}

fn stack(cell: u8) -> u8 {
    col(cell) / 3
}

macro_rules! define_types(
    ($( $(#[$attr:meta])* $name:ident : $limit:expr ),* $(,)*) => {
        $(
            $(#[$attr])*
            #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub struct $name(pub(crate) u8);

            impl $name {
                /// Constructs a new instance from its index.
                ///
                /// # Panics
                /// Panics in debug mode, if the index is out of range.
                pub fn new(num: u8) -> Self {
                    debug_assert!(num < $limit);
                    $name(num)
                }

                /// Constructs a new instance from its index. Returns `None`, if the index is out of range.
                pub fn new_checked(num: u8) -> Option<Self> {
                    if num < $limit {
                        Some($name(num))
                    } else {
                        None
                    }
                }

                /// Returns the index contained within.
                pub fn get(self) -> u8 {
                    self.0
                }

                /// Returns the index as `usize`.
                pub fn as_index(self) -> usize {
                    self.0 as _
                }

                /// Returns an iterator over all instances in ascending order.
                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$limit).map(Self::new)
                }
            }
        )*
    };
);

define_types!(
    /// One of the 81 cells, numbered row by row from the top left.
    Cell: 81,
    /// A row, topmost is 0.
    Row: 9,
    /// A column, leftmost is 0.
    Col: 9,
    /// A block (also called box), numbered left to right, top to bottom.
    Block: 9,
    /// A row, column or block.
    House: 27,
    /// Three rows sharing the same blocks.
    Band: 3,
    /// Three columns sharing the same blocks.
    Stack: 3,
);

/// The kind of a [`House`] together with its index inside that kind.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[allow(missing_docs)]
pub enum HouseType {
    Row(Row),
    Col(Col),
    Block(Block),
}

impl House {
    /// Set of all rows
    pub const ALL_ROWS: Set<House> = Set(0o000_000_777);
    /// Set of all columns
    pub const ALL_COLS: Set<House> = Set(0o000_777_000);
    /// Set of all blocks
    pub const ALL_BLOCKS: Set<House> = Set(0o777_000_000);

    /// Splits the house into its kind and index.
    pub fn categorize(self) -> HouseType {
        debug_assert!(self.0 < 27);
        match self.0 {
            0..=8 => HouseType::Row(Row::new(self.0)),
            9..=17 => HouseType::Col(Col::new(self.0 - COL_OFFSET)),
            _ => HouseType::Block(Block::new(self.0 - BLOCK_OFFSET)),
        }
    }

    /// Returns `true` for rows and columns.
    pub fn is_line(self) -> bool {
        self.0 < BLOCK_OFFSET
    }

    /// Houses other than `self` that share at least two cells with it.
    ///
    /// Rows and columns intersect 3 blocks, blocks intersect 3 rows and 3 columns.
    pub fn crossing_houses(self) -> Set<House> {
        match self.categorize() {
            HouseType::Row(row) => {
                let band = row.0 / 3;
                Set(0o7 << (BLOCK_OFFSET + band * 3))
            }
            HouseType::Col(col) => {
                let stack = col.0 / 3;
                Set(0o111 << (BLOCK_OFFSET + stack))
            }
            HouseType::Block(block) => {
                let band = block.0 / 3;
                let stack = block.0 % 3;
                Set((0o7 << (band * 3)) | (0o7 << (COL_OFFSET + stack * 3)))
            }
        }
    }
}

macro_rules! into_cells {
    ( $( $name:ident => |$arg:ident| $code:block );* $(;)* ) => {
        $(
            impl $name {
                /// Returns the set of cells contained in this position.
                pub fn cells(self) -> Set<Cell> {
                    let $arg = self;
                    Set($code)
                }
            }
        )*
    };
}

// the closures here aren't actually closures, they just introduce
// the variables to be used in the code blocks for macro hygiene reasons
into_cells!(
    Cell => |cell| { 1 << cell.0 };
    Row  => |row| { 0o777 << (9 * row.0) };
    Col  => |col| { 0o_001_001_001___001_001_001___001_001_001 << col.0 };
    Block => |block| {
        let band = block.0 / 3;
        let stack = block.0 % 3;
        0o007_007_007 << (band * 27 + stack * 3)
    };
    House => |house| {
        match house.categorize() {
            HouseType::Row(row) => row.cells().0,
            HouseType::Col(col) => col.cells().0,
            HouseType::Block(block) => block.cells().0,
        }
    };
    Band => |band| { 0o777_777_777 << (27 * band.0) };
    Stack => |stack| { 0o_007_007_007___007_007_007___007_007_007 << (3 * stack.0) };
);

///////////////////////////////////////////////////////////////////////////////////////////////
//                                  Conversions
///////////////////////////////////////////////////////////////////////////////////////////////

macro_rules! impl_from {
    ( $( $from:ty, $to:ty, |$arg:ident| $code:block ),* $(,)* ) => {
        $(
            impl From<$from> for $to {
                fn from($arg: $from) -> $to {
                    let $arg = $arg.0;
                    <$to>::new($code)
                }
            }
        )*
    };
}

impl_from!(
    Row, House, |r| { r },
    Col, House, |c| { c + COL_OFFSET },
    Block, House, |b| { b + BLOCK_OFFSET },
);

// the first type is the container of the second
impl_from!(
    Cell, Row, |c| { row(c) },
    Cell, Col, |c| { col(c) },
    Cell, Block, |c| { block(c) },
    Cell, Band, |c| { band(c) },
    Cell, Stack, |c| { stack(c) },
);

impl Cell {
    /// Returns the row of this cell.
    #[inline(always)]
    pub fn row(self) -> Row {
        Row::from(self)
    }

    /// Returns the column of this cell.
    #[inline(always)]
    pub fn col(self) -> Col {
        Col::from(self)
    }

    /// Returns the block of this cell.
    #[inline(always)]
    pub fn block(self) -> Block {
        Block::from(self)
    }

    /// Returns the band of this cell.
    #[inline(always)]
    pub fn band(self) -> Band {
        Band::from(self)
    }

    /// Returns the stack of this cell.
    #[inline(always)]
    pub fn stack(self) -> Stack {
        Stack::from(self)
    }

    /// Row, column and block of this cell, in that order.
    pub fn houses(self) -> [House; 3] {
        [self.row().into(), self.col().into(), self.block().into()]
    }

    /// Set of the 3 houses containing this cell.
    pub fn house_set(self) -> Set<House> {
        let [row, col, block] = self.houses();
        row.as_set() | col | block
    }

    /// All cells sharing a row, column or block with this cell, excluding the cell itself.
    #[inline]
    pub fn peers(self) -> Set<Cell> {
        (self.row().cells() | self.col().cells() | self.block().cells()).without(self.as_set())
    }

    /// Checks whether both cells share a house. A cell does not see itself.
    #[inline]
    pub fn sees(self, other: Cell) -> bool {
        self.peers().contains(other)
    }
}

impl Set<Cell> {
    /// Cells seeing every cell in this set. Cells of the set itself are never included
    /// because a cell is not its own peer. The peer intersection of an empty set is `ALL`.
    pub fn common_peers(self) -> Set<Cell> {
        self.into_iter()
            .fold(Set::<Cell>::ALL, |peers, cell| peers & cell.peers())
    }

    /// Houses containing every cell of this set. Empty for an empty set.
    pub fn common_houses(self) -> Set<House> {
        if self.is_empty() {
            return Set::NONE;
        }
        self.into_iter()
            .fold(Set::<House>::ALL, |houses, cell| houses & cell.house_set())
    }

    /// Rows covered by at least one cell of the set.
    pub fn rows(self) -> Set<House> {
        self.into_iter().fold(Set::<House>::NONE, |rows, cell| rows | House::from(cell.row()))
    }

    /// Columns covered by at least one cell of the set.
    pub fn cols(self) -> Set<House> {
        self.into_iter().fold(Set::<House>::NONE, |cols, cell| cols | House::from(cell.col()))
    }

    /// Blocks covered by at least one cell of the set.
    pub fn blocks(self) -> Set<House> {
        self.into_iter().fold(Set::<House>::NONE, |blocks, cell| blocks | House::from(cell.block()))
    }
}

impl Set<House> {
    /// Union of the cells of all houses in this set.
    pub fn cells(self) -> Set<Cell> {
        self.into_iter().fold(Set::<Cell>::NONE, |cells, house| cells | house.cells())
    }
}
