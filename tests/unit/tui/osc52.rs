use super::*;

#[test]
fn base64_matches_known_vectors() {
    assert_eq!(base64(b""), "");
    assert_eq!(base64(b"f"), "Zg==");
    assert_eq!(base64(b"fo"), "Zm8=");
    assert_eq!(base64(b"foo"), "Zm9v");
    assert_eq!(base64(b"hello"), "aGVsbG8=");
}

#[test]
fn plain_sequence_ends_with_bel() {
    assert_eq!(sequence("hello", false).unwrap(), "\x1b]52;c;aGVsbG8=\x07");
}

#[test]
fn tmux_sequence_is_wrapped() {
    assert_eq!(
        sequence("hi", true).unwrap(),
        "\x1bPtmux;\x1b\x1b]52;c;aGk=\x07\x1b\\"
    );
}

#[test]
fn oversized_payload_is_rejected() {
    let big = "x".repeat(OSC52_MAX_BYTES + 1);
    assert_eq!(
        sequence(&big, false).unwrap_err(),
        Osc52Error::TooLarge {
            bytes: OSC52_MAX_BYTES + 1
        }
    );
}

#[test]
fn emit_writes_to_the_sink() {
    let mut sink = Vec::new();
    emit(&mut sink, "hi", false).unwrap();
    assert_eq!(sink, b"\x1b]52;c;aGk=\x07");
}
