use commons::*;
use concordium_std::*;

use crate::constants::TOKEN_URI_BASE;

/// Build the token URI for a flow: the metadata service base URL with the
/// flow fields as query parameters. The `start_date` parameter is only
/// present when the flow's true start time is known.
pub fn build_token_uri(flow: &FlowKey, start: Option<Timestamp>) -> String {
    let mut uri = String::from(TOKEN_URI_BASE);
    uri.push_str("?token=");
    push_contract_address(&mut uri, &flow.token);
    uri.push_str("&sender=");
    push_account_address(&mut uri, &flow.sender);
    uri.push_str("&receiver=");
    push_account_address(&mut uri, &flow.receiver);
    if let Some(start) = start {
        uri.push_str("&start_date=");
        push_u64(&mut uri, start.timestamp_millis());
    }
    uri
}

/// Contract addresses are rendered as `<index>-<subindex>`.
pub fn push_contract_address(string: &mut String, address: &ContractAddress) {
    push_u64(string, address.index);
    string.push('-');
    push_u64(string, address.subindex);
}

/// Account addresses are rendered as 64 hex characters.
pub fn push_account_address(string: &mut String, address: &AccountAddress) {
    for byte in &address.0 {
        string.push(bits_to_hex_char(byte >> 4));
        string.push(bits_to_hex_char(byte & 0xF));
    }
}

pub fn push_u64(string: &mut String, value: u64) {
    // 20 digits fit any u64.
    let mut digits = [0u8; 20];
    let mut used = 0;
    let mut rest = value;
    loop {
        digits[used] = (rest % 10) as u8;
        used += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    for digit in digits[..used].iter().rev() {
        string.push((digit + b'0') as char);
    }
}

pub fn bits_to_hex_char(bits: u8) -> char {
    match bits & 0xF {
        0x0..=0x9 => (bits + b'0') as char,
        0xA..=0xF => (bits - 10 + b'A') as char,
        _ => unreachable!(),
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    const TOKEN: ContractAddress = ContractAddress {
        index: 1337,
        subindex: 0,
    };

    #[concordium_test]
    fn decimal_formatting() {
        let mut string = String::new();
        push_u64(&mut string, 0);
        claim_eq!(string, "0");

        let mut string = String::new();
        push_u64(&mut string, 90_210);
        claim_eq!(string, "90210");

        let mut string = String::new();
        push_u64(&mut string, u64::MAX);
        claim_eq!(string, "18446744073709551615");
    }

    #[concordium_test]
    fn account_formatting() {
        let mut account = [0u8; 32];
        account[0] = 0xA7;
        account[31] = 0x09;

        let mut string = String::new();
        push_account_address(&mut string, &AccountAddress(account));

        claim_eq!(string.len(), 64);
        claim!(string.starts_with("A7"));
        claim!(string.ends_with("09"));
    }

    #[concordium_test]
    fn uri_start_date_presence() {
        let flow = FlowKey {
            token: TOKEN,
            sender: AccountAddress([1; 32]),
            receiver: AccountAddress([2; 32]),
        };

        let with_start =
            build_token_uri(&flow, Some(Timestamp::from_timestamp_millis(1_500)));
        claim!(with_start.starts_with(TOKEN_URI_BASE));
        claim!(with_start.contains("?token=1337-0"));
        claim!(with_start.contains("&start_date=1500"));

        let without_start = build_token_uri(&flow, None);
        claim!(!without_start.contains("start_date"));
    }
}
