//! Pure byte-level encoders and decoders for the four message types.
//!
//! Streaming reads live on [`Connection`](crate::transport::Connection); these
//! functions only translate between values and bytes.

use crate::error::DecodeError;

use super::domain::{AttackResponse, Coordinates, ShipSizes};

const VERTICAL_SHIFT: u8 = 4;

/// `[N][size_1 .. size_N]`
pub fn encode_config(ship_sizes: &ShipSizes) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + ship_sizes.len());
    // ShipSizes guarantees the count fits in a byte.
    buf.push(ship_sizes.len() as u8);
    buf.extend_from_slice(ship_sizes.as_slice());
    buf
}

/// Decode a complete configuration message. The slice must hold exactly `1 + N` bytes.
pub fn decode_config(bytes: &[u8]) -> Result<ShipSizes, DecodeError> {
    let Some((&count, sizes)) = bytes.split_first() else {
        return Err(DecodeError::Length {
            expected: 1,
            actual: 0,
        });
    };
    if sizes.len() != count as usize {
        return Err(DecodeError::Length {
            expected: 1 + count as usize,
            actual: bytes.len(),
        });
    }
    Ok(ShipSizes::from_wire(sizes))
}

pub fn encode_handshake(token: u8) -> [u8; 1] {
    [token]
}

pub fn encode_attack(target: Coordinates) -> u8 {
    (target.vertical() << VERTICAL_SHIFT) | target.horizontal()
}

pub fn decode_attack(byte: u8) -> Coordinates {
    Coordinates::from_nibbles(byte)
}

pub fn encode_response(response: AttackResponse) -> u8 {
    response.as_byte()
}

pub fn decode_response(byte: u8) -> Result<AttackResponse, DecodeError> {
    AttackResponse::try_from(byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_length_mismatch() {
        assert!(matches!(
            decode_config(&[3, 1, 2]),
            Err(DecodeError::Length { expected: 4, actual: 3 })
        ));
        assert!(matches!(decode_config(&[]), Err(DecodeError::Length { .. })));
        assert!(decode_config(&[0]).unwrap().is_empty());
    }

    #[test]
    fn attack_packs_vertical_high() {
        let c = Coordinates::new(10, 1).unwrap();
        assert_eq!(encode_attack(c), 0xA1);
        assert_eq!(decode_attack(0xA1), c);
    }
}
