//! # Property Tests
//!
//! Randomized checks over genuine signatures from the shared `TestSigner`:
//! - genuine instructions always verify
//! - no single-bit corruption anywhere in an instruction verifies
//! - the wire codec round-trips every decodable instruction

#[cfg(test)]
mod tests {
    use rsa_signature_verification::domain::test_helpers as signer;
    use proptest::prelude::*;
    use rsa_signature_verification::{
        decode, encode, HashAlgorithm, RsaVerificationApi, RsaVerifier, VerificationOutcome,
    };

    fn hash_strategy() -> impl Strategy<Value = HashAlgorithm> {
        prop::sample::select(HashAlgorithm::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Genuine signatures verify for every algorithm and message
        #[test]
        fn prop_genuine_signature_accepted(
            hash in hash_strategy(),
            message in prop::collection::vec(any::<u8>(), 0..64),
        ) {
            let data = signer::rsa1024().instruction(hash, &message);
            prop_assert_eq!(
                RsaVerifier::default().verify_instruction(&data),
                Ok(VerificationOutcome::Accepted)
            );
        }

        /// Flipping any one bit of an instruction never yields Accepted
        #[test]
        fn prop_single_bit_flip_never_accepted(
            hash in hash_strategy(),
            message in prop::collection::vec(any::<u8>(), 1..32),
            position in any::<prop::sample::Index>(),
            bit in 0u8..8,
        ) {
            let mut data = signer::rsa1024().instruction(hash, &message);
            let index = position.index(data.len());
            data[index] ^= 1 << bit;

            let result = RsaVerifier::default().verify_instruction(&data);
            prop_assert_ne!(result, Ok(VerificationOutcome::Accepted));
        }

        /// Decoded instructions re-encode to identical bytes
        #[test]
        fn prop_decode_encode_identity(
            hash in hash_strategy(),
            message in prop::collection::vec(any::<u8>(), 0..128),
        ) {
            let data = signer::rsa1024().instruction(hash, &message);
            let request = decode(&data).unwrap();
            prop_assert_eq!(&request.message, &message);
            prop_assert_eq!(encode(&request).unwrap(), data);
        }

        /// Arbitrary bytes never verify
        #[test]
        fn prop_garbage_never_accepted(data in prop::collection::vec(any::<u8>(), 0..512)) {
            let result = RsaVerifier::default().verify_instruction(&data);
            prop_assert_ne!(result, Ok(VerificationOutcome::Accepted));
        }
    }
}
