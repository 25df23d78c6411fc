use crate::{
    DecodeErrorKind, DecodingOptions, EncodingOptions, LineLength, LineTerminator, decode,
    decode_str, encode, encode_to_vec,
};

const CONSTITIT: &str = "Constitit, et lacrimans, `Quis iam locus’ inquit `Achate,\nquae regio in terris nostri non plena laboris?`";
const REVOCATE: &str = "Revocate animos, maestumque timorem mittite: forsan et haec olim meminisse iuvabit.";
const ARMA: &str = "ARMA virumque cano, Troiae qui primus ab oris\nItaliam, fato profugus, Laviniaque venit";
const ARMA_ENCODED: &str = "QVJNQSB2aXJ1bXF1ZSBjYW5vLCBUcm9pYWUgcXVpIHByaW11cyBhYiBvcmlzCkl0YWxpYW0sIGZhdG8gcHJvZnVndXMsIExhdmluaWFxdWUgdmVuaXQ=";

fn all_wrapping_options() -> Vec<EncodingOptions> {
    let mut options = Vec::new();
    for line_length in [LineLength::Columns64, LineLength::Columns76] {
        options.push(EncodingOptions::new().with_line_length(line_length));
        for terminator in [LineTerminator::Cr, LineTerminator::Lf, LineTerminator::CrLf] {
            options.push(
                EncodingOptions::new()
                    .with_line_length(line_length)
                    .with_terminator(terminator),
            );
        }
    }
    options
}

fn sample_data(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(31) ^ (i >> 3)) as u8).collect()
}

#[test]
fn test_encode_decode_empty() {
    assert_eq!(encode(b"", &EncodingOptions::default()), "");
    assert_eq!(decode(b"", &DecodingOptions::default()).unwrap(), b"");
    assert_eq!(decode(b"", &DecodingOptions::lenient()).unwrap(), b"");
}

#[test]
fn test_roundtrip_unwrapped() {
    for len in 0..200 {
        let data = sample_data(len);
        let encoded = encode(&data, &EncodingOptions::default());
        assert_eq!(encoded.len() % 4, 0);
        let decoded = decode_str(&encoded, &DecodingOptions::default()).unwrap();
        assert_eq!(decoded, data, "length {}", len);
    }
}

#[test]
fn test_roundtrip_every_byte_value() {
    let data: Vec<u8> = (0..=255u8).collect();
    let encoded = encode_to_vec(&data, &EncodingOptions::default());
    assert_eq!(decode(&encoded, &DecodingOptions::default()).unwrap(), data);
}

#[test]
fn test_wrapped_output_decodes_leniently() {
    for options in all_wrapping_options() {
        for len in [0, 1, 47, 48, 49, 56, 57, 58, 96, 97, 500] {
            let data = sample_data(len);
            let encoded = encode(&data, &options);
            let decoded = decode_str(&encoded, &DecodingOptions::lenient()).unwrap();
            assert_eq!(decoded, data, "{:?} length {}", options, len);
        }
    }
}

#[test]
fn test_wrapped_output_decodes_strictly_once_stripped() {
    for options in all_wrapping_options() {
        let data = sample_data(300);
        let encoded = encode(&data, &options);

        let err = decode_str(&encoded, &DecodingOptions::default()).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::InvalidCharacter);

        let terminator = std::str::from_utf8(options.effective_terminator().as_bytes()).unwrap();
        let stripped = encoded.replace(terminator, "");
        let decoded = decode_str(&stripped, &DecodingOptions::default()).unwrap();
        assert_eq!(decoded, data);
    }
}

#[test]
fn test_known_text_unwrapped() {
    assert_eq!(
        encode(CONSTITIT.as_bytes(), &EncodingOptions::default()),
        "Q29uc3RpdGl0LCBldCBsYWNyaW1hbnMsIGBRdWlzIGlhbSBsb2N1c+KAmSBpbnF1aXQgYEFjaGF0ZSwKcXVhZSByZWdpbyBpbiB0ZXJyaXMgbm9zdHJpIG5vbiBwbGVuYSBsYWJvcmlzP2A="
    );
    assert_eq!(
        encode(b"Hello World", &EncodingOptions::default()),
        "SGVsbG8gV29ybGQ="
    );
    assert_eq!(
        encode(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0], &EncodingOptions::default()),
        "AQIDBAUGBwgJAA=="
    );
}

#[test]
fn test_known_text_wrapped_64_lf() {
    let options = EncodingOptions::wrap_64().with_terminator(LineTerminator::Lf);
    assert_eq!(
        encode(CONSTITIT.as_bytes(), &options),
        "Q29uc3RpdGl0LCBldCBsYWNyaW1hbnMsIGBRdWlzIGlhbSBsb2N1c+KAmSBpbnF1\naXQgYEFjaGF0ZSwKcXVhZSByZWdpbyBpbiB0ZXJyaXMgbm9zdHJpIG5vbiBwbGVu\nYSBsYWJvcmlzP2A="
    );
}

#[test]
fn test_known_text_wrapped_76_cr() {
    let options = EncodingOptions::wrap_76().with_terminator(LineTerminator::Cr);
    assert_eq!(
        encode(CONSTITIT.as_bytes(), &options),
        "Q29uc3RpdGl0LCBldCBsYWNyaW1hbnMsIGBRdWlzIGlhbSBsb2N1c+KAmSBpbnF1aXQgYEFjaGF0\rZSwKcXVhZSByZWdpbyBpbiB0ZXJyaXMgbm9zdHJpIG5vbiBwbGVuYSBsYWJvcmlzP2A="
    );
}

#[test]
fn test_known_text_wrapped_76_crlf() {
    let options = EncodingOptions::wrap_76().with_terminator(LineTerminator::CrLf);
    assert_eq!(
        encode(REVOCATE.as_bytes(), &options),
        "UmV2b2NhdGUgYW5pbW9zLCBtYWVzdHVtcXVlIHRpbW9yZW0gbWl0dGl0ZTogZm9yc2FuIGV0IGhh\r\nZWMgb2xpbSBtZW1pbmlzc2UgaXV2YWJpdC4="
    );
    // CRLF is also the implicit terminator
    assert_eq!(
        encode(REVOCATE.as_bytes(), &EncodingOptions::wrap_76()),
        encode(REVOCATE.as_bytes(), &options)
    );
}

#[test]
fn test_decode_known_text() {
    let decoded = decode_str(ARMA_ENCODED, &DecodingOptions::default()).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), ARMA);

    let decoded = decode_str("SGVsbG8sIG5ldyBXb3JsZA==", &DecodingOptions::default()).unwrap();
    assert_eq!(decoded, b"Hello, new World");
}

#[test]
fn test_foreign_character_strict_vs_lenient() {
    let corrupted = ARMA_ENCODED.replacen("HBya", "HBya$", 1);

    let err = decode_str(&corrupted, &DecodingOptions::default()).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::InvalidCharacter);

    let decoded = decode_str(&corrupted, &DecodingOptions::lenient()).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), ARMA);
}

#[test]
fn test_strict_rejections() {
    let strict = DecodingOptions::default();
    assert_eq!(
        decode_str("TWF", &strict).unwrap_err().kind(),
        DecodeErrorKind::InvalidLength
    );
    assert_eq!(
        decode_str("T=Fu", &strict).unwrap_err().kind(),
        DecodeErrorKind::InvalidPadding
    );
}

#[test]
fn test_lenient_newline() {
    assert_eq!(
        decode_str("TW\nFu", &DecodingOptions::lenient()).unwrap(),
        vec![0x4D, 0x61, 0x6E]
    );
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..8)
        .map(|t| {
            std::thread::spawn(move || {
                let data = sample_data(1000 + t);
                let encoded = encode(&data, &EncodingOptions::wrap_76());
                let decoded = decode_str(&encoded, &DecodingOptions::lenient()).unwrap();
                assert_eq!(decoded, data);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
