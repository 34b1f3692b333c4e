//! Property-based tests.

use chatseal::{xor, Error, RsaKeyPair};
use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

prop_compose! {
    // WARNING: do *NOT* copy and paste this code. It's insecure and optimized for test speed.
    fn key_pair()(seed in any::<[u8; 32]>()) -> RsaKeyPair {
        let mut rng = ChaCha8Rng::from_seed(seed);
        RsaKeyPair::generate(&mut rng).unwrap()
    }
}

proptest! {
    #[test]
    fn xor_involution(
        data in any::<Vec<u8>>(),
        key in proptest::collection::vec(any::<u8>(), 1..64),
    ) {
        let ciphertext = xor::encrypt(&data, &key).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());
        prop_assert_eq!(xor::decrypt(&ciphertext, &key).unwrap(), data);
    }

    #[test]
    fn rsa_roundtrip(key_pair in key_pair(), msg in "[ -~]{0,2}") {
        match key_pair.public_key.encrypt(&msg) {
            Ok(ciphertext) => {
                let decrypted = key_pair.private_key.decrypt(&ciphertext).unwrap();
                prop_assert_eq!(decrypted, msg);
            }
            // small moduli cannot carry every two-byte message
            Err(Error::MessageTooLong) => {}
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
