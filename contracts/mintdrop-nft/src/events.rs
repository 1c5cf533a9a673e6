use super::*;

/// An untagged event of tokens being minted for a buyer.
#[derive(Debug, Serialize, SchemaType)]
pub struct MintedEvent {
    /// Id of the last token assigned in this call. The call minted every id
    /// from `last_token_id - quantity + 1` up to this one.
    pub last_token_id: ContractTokenId,
    /// The address the tokens were minted for.
    pub minter: Address,
}

/// An untagged event of the contract balance being paid out.
#[derive(Debug, Serialize, SchemaType)]
pub struct WithdrawEvent {
    /// Amount paid out.
    pub amount: Amount,
    /// The instance owner the amount was paid to.
    pub owner: AccountAddress,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug)]
pub enum CustomEvent {
    /// New tokens were minted.
    Minted(MintedEvent),
    /// Contract balance was withdrawn by the instance owner.
    Withdraw(WithdrawEvent),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::Minted(event) => {
                out.write_u8(MINTED_TAG)?;
                event.serial(out)
            }
            CustomEvent::Withdraw(event) => {
                out.write_u8(WITHDRAW_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for CustomEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            MINTED_TAG => MintedEvent::deserial(source).map(CustomEvent::Minted),
            WITHDRAW_TAG => WithdrawEvent::deserial(source).map(CustomEvent::Withdraw),
            _ => Err(ParseError::default()),
        }
    }
}
