// Signed so that callers handing over a negative size get `InvalidDimension` rather
// than a silent wrap around.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub isize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub isize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowIndex(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnIndex(pub usize);

/// Upper bound (inclusive) of a Growing-Tree selection weight.
pub const MAX_WEIGHT: u32 = 100;
