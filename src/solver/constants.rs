/// Target value of the 24 Points puzzle
pub const TARGET: i64 = 24;
