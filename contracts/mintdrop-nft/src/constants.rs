/// Upper bound on the number of tokens a single `mint` call may create.
pub const MAX_MINT_PER_TX: u32 = 5;
