//! # Instruction Wire Format
//!
//! Strict decoder and encoder for the verification instruction.
//!
//! ```text
//! offset  size           field
//! 0       1              key length ordinal
//! 1       1              hash algorithm ordinal
//! 2       4 (u32 LE)     message length
//! 6       message len    message
//! ..      4 (u32 LE)     signature length
//! ..      signature len  signature
//! ..      4 (u32 LE)     pubkey length
//! ..      pubkey len     pubkey (DER)
//! ```
//!
//! Decoding consumes the buffer exactly: short buffers, unknown ordinals and
//! trailing bytes are all `MalformedInstruction`.

use super::entities::{HashAlgorithm, KeyLength, VerificationRequest};
use super::errors::{DecodeError, EncodeError};

/// On-chain address of the verification program, base58.
pub const PROGRAM_ID: &str = "rsaGmKjfFv7JW14MXd5AjwBMcknxkAsbtLvYdG4KaEr";

/// Size of the fixed header (two ordinals and the message length prefix).
pub const HEADER_LEN: usize = 6;

/// Size of each length prefix.
const LENGTH_PREFIX_LEN: usize = 4;

/// Decode an instruction buffer into a [`VerificationRequest`].
pub fn decode(data: &[u8]) -> Result<VerificationRequest, DecodeError> {
    let mut reader = Reader::new(data);

    let key_length =
        KeyLength::from_ordinal(reader.read_u8()?).ok_or(DecodeError::MalformedInstruction)?;
    let hash = HashAlgorithm::try_from(reader.read_u8()?)
        .map_err(|_| DecodeError::MalformedInstruction)?;

    let message = reader.read_prefixed()?;
    let signature = reader.read_prefixed()?;
    let pubkey = reader.read_prefixed()?;
    reader.finish()?;

    if signature.len() != key_length.modulus_len() {
        return Err(DecodeError::MalformedInstruction);
    }

    Ok(VerificationRequest {
        key_length,
        hash,
        message: message.to_vec(),
        signature: signature.to_vec(),
        pubkey: pubkey.to_vec(),
    })
}

/// Encode a request into wire format. Inverse of [`decode`].
///
/// Fails only when a field is longer than its `u32` length prefix can state.
pub fn encode(request: &VerificationRequest) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(
        HEADER_LEN
            + request.message.len()
            + LENGTH_PREFIX_LEN
            + request.signature.len()
            + LENGTH_PREFIX_LEN
            + request.pubkey.len(),
    );
    out.push(request.key_length.ordinal());
    out.push(request.hash.ordinal());
    for (field, bytes) in [
        ("message", &request.message),
        ("signature", &request.signature),
        ("pubkey", &request.pubkey),
    ] {
        out.extend_from_slice(&length_prefix(field, bytes.len())?);
        out.extend_from_slice(bytes);
    }
    Ok(out)
}

fn length_prefix(field: &'static str, len: usize) -> Result<[u8; LENGTH_PREFIX_LEN], EncodeError> {
    u32::try_from(len)
        .map(u32::to_le_bytes)
        .map_err(|_| EncodeError::FieldTooLong { field, len })
}

// =============================================================================
// Client-side builder
// =============================================================================

/// Instruction builder used by signers before submission.
///
/// Unlike [`decode`], this performs no validation: callers are trusted to
/// pass a signature of the right size, and the verifier re-checks everything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaSignatureInstruction {
    pub key_length: KeyLength,
    pub hash: HashAlgorithm,
    pub message: Vec<u8>,
    pub signature: Vec<u8>,
    pub pubkey: Vec<u8>,
}

impl RsaSignatureInstruction {
    pub fn new(
        key_length: KeyLength,
        hash: HashAlgorithm,
        message: &[u8],
        signature: &[u8],
        pubkey: &[u8],
    ) -> Self {
        Self {
            key_length,
            hash,
            message: message.to_vec(),
            signature: signature.to_vec(),
            pubkey: pubkey.to_vec(),
        }
    }

    /// Serialize to instruction data.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        encode(&VerificationRequest::from(self.clone()))
    }
}

impl From<RsaSignatureInstruction> for VerificationRequest {
    fn from(ix: RsaSignatureInstruction) -> Self {
        VerificationRequest {
            key_length: ix.key_length,
            hash: ix.hash,
            message: ix.message,
            signature: ix.signature,
            pubkey: ix.pubkey,
        }
    }
}

// =============================================================================
// Reader
// =============================================================================

/// Bounds-checked forward reader over instruction bytes.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(len)
            .ok_or(DecodeError::MalformedInstruction)?;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(DecodeError::MalformedInstruction)?;
        self.pos = end;
        Ok(bytes)
    }

    fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    fn read_u32_le(&mut self) -> Result<u32, DecodeError> {
        let mut buf = [0u8; LENGTH_PREFIX_LEN];
        buf.copy_from_slice(self.take(LENGTH_PREFIX_LEN)?);
        Ok(u32::from_le_bytes(buf))
    }

    fn read_prefixed(&mut self) -> Result<&'a [u8], DecodeError> {
        let len = usize::try_from(self.read_u32_le()?)
            .map_err(|_| DecodeError::MalformedInstruction)?;
        self.take(len)
    }

    fn finish(self) -> Result<(), DecodeError> {
        if self.pos != self.data.len() {
            return Err(DecodeError::MalformedInstruction);
        }
        Ok(())
    }
}
