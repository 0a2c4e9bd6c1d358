//! # DER Public Key Codec
//!
//! Parses RSA public keys in either of the two encodings signers hand out:
//!
//! - PKCS#1 `RSAPublicKey ::= SEQUENCE { modulus INTEGER, publicExponent INTEGER }`
//! - X.509 `SubjectPublicKeyInfo` wrapping the PKCS#1 structure in a
//!   BIT STRING, with the `rsaEncryption` algorithm identifier.
//!
//! DER structure goes through the `pkcs1` and `spki` types re-exported by the
//! `rsa` crate: definite minimal lengths, canonical unsigned INTEGERs and no
//! trailing bytes. Component range checks live in [`RsaPublicKey::new`] so
//! they can be reported as distinct errors.

use rsa::pkcs1::{self, UintRef};
use rsa::pkcs8::der::asn1::BitStringRef;
use rsa::pkcs8::der::{Decode, Document, Encode};
use rsa::pkcs8::{spki, EncodePublicKey, SubjectPublicKeyInfoRef};

use super::errors::DecodeError;

/// Largest modulus accepted, in bytes.
const MAX_INTEGER_LEN: usize = 4096 / 8;

/// RSA public key as big-endian magnitudes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaPublicKey {
    modulus: Vec<u8>,
    exponent: Vec<u8>,
}

impl RsaPublicKey {
    /// Build a key from raw big-endian components.
    ///
    /// Leading zero bytes are stripped. The modulus must be odd and non-zero,
    /// the exponent odd, at least 3, and no wider than the modulus.
    pub fn new(modulus: &[u8], exponent: &[u8]) -> Result<Self, DecodeError> {
        let modulus = strip_leading_zeros(modulus);
        let exponent = strip_leading_zeros(exponent);

        match modulus.last() {
            Some(low) if low & 1 == 1 => {}
            _ => return Err(DecodeError::InvalidModulus),
        }
        if modulus.len() > MAX_INTEGER_LEN {
            return Err(DecodeError::InvalidModulus);
        }

        let exponent_ok = match exponent {
            [] => false,
            [e] => *e >= 3 && e & 1 == 1,
            [.., low] => low & 1 == 1 && exponent.len() <= modulus.len(),
        };
        if !exponent_ok {
            return Err(DecodeError::InvalidPublicExponent);
        }

        Ok(Self {
            modulus: modulus.to_vec(),
            exponent: exponent.to_vec(),
        })
    }

    /// Parse a DER-encoded PKCS#1 or SubjectPublicKeyInfo public key.
    ///
    /// PKCS#1 is tried first; anything else must be a SubjectPublicKeyInfo
    /// with the `rsaEncryption` OID and NULL or absent parameters.
    pub fn from_der(der: &[u8]) -> Result<Self, DecodeError> {
        if let Ok(key) = pkcs1::RsaPublicKey::from_der(der) {
            return Self::from_pkcs1(&key);
        }

        let info =
            SubjectPublicKeyInfoRef::from_der(der).map_err(|_| DecodeError::MalformedInstruction)?;
        info.algorithm
            .assert_algorithm_oid(pkcs1::ALGORITHM_OID)
            .map_err(|_| DecodeError::MalformedInstruction)?;
        if info.algorithm.parameters.is_some_and(|params| !params.is_null()) {
            return Err(DecodeError::MalformedInstruction);
        }

        // `as_bytes` is `None` when the BIT STRING has unused bits.
        let inner = info
            .subject_public_key
            .as_bytes()
            .ok_or(DecodeError::MalformedInstruction)?;
        let key =
            pkcs1::RsaPublicKey::from_der(inner).map_err(|_| DecodeError::MalformedInstruction)?;
        Self::from_pkcs1(&key)
    }

    fn from_pkcs1(key: &pkcs1::RsaPublicKey<'_>) -> Result<Self, DecodeError> {
        Self::new(key.modulus.as_bytes(), key.public_exponent.as_bytes())
    }

    /// Big-endian modulus without leading zeros.
    pub fn modulus(&self) -> &[u8] {
        &self.modulus
    }

    /// Big-endian public exponent without leading zeros.
    pub fn exponent(&self) -> &[u8] {
        &self.exponent
    }

    /// Exact bit length of the modulus.
    pub fn bits(&self) -> usize {
        // modulus is non-empty with a non-zero leading byte (checked in `new`)
        self.modulus.len() * 8 - self.modulus[0].leading_zeros() as usize
    }
}

/// SubjectPublicKeyInfo encoding; PKCS#1 comes with it through
/// [`rsa::pkcs1::EncodeRsaPublicKey`].
impl EncodePublicKey for RsaPublicKey {
    fn to_public_key_der(&self) -> spki::Result<Document> {
        let subject_public_key = pkcs1::RsaPublicKey {
            modulus: UintRef::new(&self.modulus)?,
            public_exponent: UintRef::new(&self.exponent)?,
        }
        .to_der()?;

        SubjectPublicKeyInfoRef {
            algorithm: pkcs1::ALGORITHM_ID,
            subject_public_key: BitStringRef::new(0, &subject_public_key)?,
        }
        .try_into()
    }
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}
