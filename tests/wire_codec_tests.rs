use broadside::protocol::{
    decode_attack, decode_config, decode_response, encode_attack, encode_config, encode_handshake, encode_response,
};
use broadside::transport::Connection;
use broadside::{AttackResponse, Coordinates, DecodeError, EncodeError, GameError, ShipSizes, HANDSHAKE_TOKEN};
use proptest::prelude::*;
use tokio::io::AsyncWriteExt;

#[test]
fn standard_fleet_encodes_to_known_bytes() {
    let sizes = ShipSizes::new(vec![5, 4, 3, 3, 2]).unwrap();
    let bytes = encode_config(&sizes);
    assert_eq!(bytes, vec![0x05, 0x05, 0x04, 0x03, 0x03, 0x02]);
    assert_eq!(decode_config(&bytes).unwrap().as_slice(), &[5, 4, 3, 3, 2]);
}

#[test]
fn attack_scenario_0x37() {
    let target = Coordinates::new(3, 7).unwrap();
    assert_eq!(encode_attack(target), 0x37);
    assert_eq!(decode_attack(0x37), target);
}

#[test]
fn handshake_is_single_sentinel_byte() {
    assert_eq!(encode_handshake(HANDSHAKE_TOKEN), [0xFF]);
}

#[test]
fn response_bytes_match_table() {
    assert_eq!(encode_response(AttackResponse::Missed), 1);
    assert_eq!(encode_response(AttackResponse::Hit), 2);
    assert_eq!(encode_response(AttackResponse::DisabledShip), 3);
    assert_eq!(encode_response(AttackResponse::GameEnd), 255);
}

#[test]
fn every_unknown_response_byte_is_rejected() {
    for byte in 0..=u8::MAX {
        let decoded = decode_response(byte);
        match byte {
            1 | 2 | 3 | 255 => assert_eq!(decoded.unwrap().as_byte(), byte),
            _ => assert!(matches!(decoded, Err(DecodeError::UnknownAttackResponse(b)) if b == byte)),
        }
    }
}

#[test]
fn out_of_range_values_never_reach_the_encoder() {
    assert!(matches!(
        Coordinates::new(3, 16),
        Err(EncodeError::CoordinatesOutOfRange { .. })
    ));
    assert!(matches!(ShipSizes::new(vec![2; 300]), Err(EncodeError::TooManyShips(300))));
}

#[test]
fn empty_fleet_is_a_single_zero_byte() {
    let sizes = ShipSizes::new(Vec::new()).unwrap();
    assert_eq!(encode_config(&sizes), vec![0]);
    assert!(decode_config(&[0]).unwrap().is_empty());
}

#[tokio::test]
async fn stream_decoding_reads_exact_lengths() {
    let (local, mut peer) = tokio::io::duplex(64);
    let mut conn = Connection::new(local);

    // Config, handshake, attack and response back to back.
    peer.write_all(&[3, 5, 4, 2, 0xFF, 0x37, 0x02]).await.unwrap();

    assert_eq!(conn.recv_config().await.unwrap().as_slice(), &[5, 4, 2]);
    assert_eq!(conn.recv_handshake().await.unwrap(), 0xFF);
    assert_eq!(conn.recv_attack().await.unwrap(), Coordinates::new(3, 7).unwrap());
    assert_eq!(conn.recv_response().await.unwrap(), AttackResponse::Hit);
}

#[tokio::test]
async fn truncated_config_surfaces_as_closed() {
    let (local, mut peer) = tokio::io::duplex(64);
    let mut conn = Connection::new(local);
    peer.write_all(&[5, 5, 4]).await.unwrap();
    drop(peer);

    let err = conn.recv_config().await.unwrap_err();
    assert!(err.is_connection_closed(), "got {err:?}");
}

#[tokio::test]
async fn bad_response_byte_is_a_decode_error() {
    let (local, mut peer) = tokio::io::duplex(64);
    let mut conn = Connection::new(local);
    peer.write_all(&[0x04]).await.unwrap();

    let err = conn.recv_response().await.unwrap_err();
    assert!(matches!(
        err,
        GameError::ProtocolDecode(DecodeError::UnknownAttackResponse(0x04))
    ));
}

proptest! {
    #[test]
    fn config_roundtrip(sizes in proptest::collection::vec(any::<u8>(), 0..=255)) {
        let ship_sizes = ShipSizes::new(sizes.clone()).unwrap();
        let bytes = encode_config(&ship_sizes);
        prop_assert_eq!(bytes.len(), 1 + sizes.len());
        prop_assert_eq!(bytes[0] as usize, sizes.len());
        let decoded = decode_config(&bytes).unwrap();
        prop_assert_eq!(decoded.as_slice(), sizes.as_slice());
    }

    #[test]
    fn attack_roundtrip(v in 0u8..=15, h in 0u8..=15) {
        let target = Coordinates::new(v, h).unwrap();
        let decoded = decode_attack(encode_attack(target));
        prop_assert_eq!(decoded.vertical(), v);
        prop_assert_eq!(decoded.horizontal(), h);
    }

    #[test]
    fn every_attack_byte_decodes(byte in any::<u8>()) {
        prop_assert_eq!(encode_attack(decode_attack(byte)), byte);
    }
}
