use super::*;

/// Build the metadata URL of a token: the collection base URI with the
/// decimal token id and the `.json` suffix appended.
pub fn build_token_metadata_url(base_uri: &str, token_id: &ContractTokenId) -> String {
    let mut token_metadata_url = String::with_capacity(base_uri.len() + 15);
    token_metadata_url.push_str(base_uri);
    push_token_id(&mut token_metadata_url, token_id);
    token_metadata_url.push_str(".json");
    token_metadata_url
}

/// Append the decimal digits of the token id.
pub fn push_token_id(string: &mut String, token_id: &ContractTokenId) {
    // A u32 has at most 10 decimal digits.
    let mut digits = [0u8; 10];
    let mut count = 0;
    let mut value = token_id.0;
    loop {
        digits[count] = (value % 10) as u8;
        count += 1;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    for &digit in digits[..count].iter().rev() {
        string.push((b'0' + digit) as char);
    }
}

pub fn token_metadata_event(
    base_uri: &str,
    token_id: ContractTokenId,
) -> Cis2Event<ContractTokenId, ContractTokenAmount> {
    let token_metadata_url = build_token_metadata_url(base_uri, &token_id);
    Cis2Event::TokenMetadata(TokenMetadataEvent {
        token_id,
        metadata_url: MetadataUrl {
            url: token_metadata_url,
            hash: None,
        },
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn token_id_formatting() {
        let cases: &[(u32, &str)] = &[
            (1, "1"),
            (7, "7"),
            (10, "10"),
            (25, "25"),
            (304, "304"),
            (u32::MAX, "4294967295"),
        ];

        for (id, expected) in cases {
            let mut rendered = String::new();
            push_token_id(&mut rendered, &TokenIdU32(*id));
            claim_eq!(rendered, String::from(*expected));
        }
    }

    #[concordium_test]
    fn metadata_url_formatting() {
        let url = build_token_metadata_url(
            "ipfs://QmWvM3K5FPZg1zRbYeqhsYWnjhqwkFSCSm3rsnmkupHSuu/",
            &TokenIdU32(3),
        );
        claim_eq!(
            url,
            String::from("ipfs://QmWvM3K5FPZg1zRbYeqhsYWnjhqwkFSCSm3rsnmkupHSuu/3.json")
        );
    }
}
