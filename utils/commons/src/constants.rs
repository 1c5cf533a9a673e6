/// Tag for the Custom Minted event.
pub const MINTED_TAG: u8 = u8::MAX - 5;

/// Tag for the Custom Withdraw event.
pub const WITHDRAW_TAG: u8 = u8::MAX - 6;
