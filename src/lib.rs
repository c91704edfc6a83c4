pub mod cards;
pub mod gameplay;

pub type Chips = u16;

pub const N: usize = 2;
pub const STACK: Chips = 100;
pub const B_BLIND: Chips = 2;
pub const S_BLIND: Chips = 1;
