//! Z85 Codec
//!
//! ZeroMQ's base-85 flavour (RFC 32/Z85): every 4 bytes become 5 printable
//! characters. Strict: no padding, unaligned input is rejected.

use thiserror::Error;

const ALPHABET: &[u8; 85] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

const INVALID: u8 = 0xFF;

const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Bytes per encoded group
pub const CHUNK_BYTES: usize = 4;
/// Characters per encoded group
pub const CHUNK_CHARS: usize = 5;

/// Z85 encode/decode failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Z85Error {
    #[error("binary length {0} is not a multiple of 4")]
    UnalignedBinary(usize),

    #[error("text length {0} is not a multiple of 5")]
    UnalignedText(usize),

    #[error("byte {byte:#04x} at position {position} is not in the Z85 alphabet")]
    InvalidCharacter { position: usize, byte: u8 },

    #[error("group starting at position {0} exceeds 32 bits")]
    Overflow(usize),
}

/// Encode `data` (length must be a multiple of 4)
pub fn encode(data: &[u8]) -> Result<String, Z85Error> {
    if data.len() % CHUNK_BYTES != 0 {
        return Err(Z85Error::UnalignedBinary(data.len()));
    }

    let mut out = String::with_capacity(data.len() / CHUNK_BYTES * CHUNK_CHARS);
    for chunk in data.chunks_exact(CHUNK_BYTES) {
        let group = encode_chunk([chunk[0], chunk[1], chunk[2], chunk[3]]);
        out.extend(group.iter().map(|&b| b as char));
    }
    Ok(out)
}

/// Encode a single 4-byte group; always yields alphabet characters
pub fn encode_chunk(chunk: [u8; CHUNK_BYTES]) -> [u8; CHUNK_CHARS] {
    let mut value = u32::from_be_bytes(chunk);
    let mut group = [0u8; CHUNK_CHARS];
    for slot in group.iter_mut().rev() {
        *slot = ALPHABET[(value % 85) as usize];
        value /= 85;
    }
    group
}

/// Decode `text` (length must be a multiple of 5)
pub fn decode(text: &str) -> Result<Vec<u8>, Z85Error> {
    let bytes = text.as_bytes();
    if bytes.len() % CHUNK_CHARS != 0 {
        return Err(Z85Error::UnalignedText(bytes.len()));
    }

    let mut out = Vec::with_capacity(bytes.len() / CHUNK_CHARS * CHUNK_BYTES);
    for (index, chunk) in bytes.chunks_exact(CHUNK_CHARS).enumerate() {
        let start = index * CHUNK_CHARS;
        let mut value: u64 = 0;
        for (offset, &byte) in chunk.iter().enumerate() {
            let digit = DECODE_TABLE[byte as usize];
            if digit == INVALID {
                return Err(Z85Error::InvalidCharacter {
                    position: start + offset,
                    byte,
                });
            }
            value = value * 85 + u64::from(digit);
        }
        let value = u32::try_from(value).map_err(|_| Z85Error::Overflow(start))?;
        out.extend_from_slice(&value.to_be_bytes());
    }
    Ok(out)
}
