use naclkit::sign::{
    PRIVATE_KEY_SIZE, PrivateKey, PublicKey, SIGNATURE_SIZE, Signature, generate_keypair, open,
    sign, sign_detached, verify, verify_detached,
};
use naclkit::Error;

struct Vector {
    seed: &'static str,
    public_key: &'static str,
    message: &'static str,
    signature: &'static str,
}

// RFC 8032, section 7.1, tests 1 and 2.
const VECTORS: [Vector; 2] = [
    Vector {
        seed: "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
        public_key: "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
        message: "",
        signature: "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155\
                    5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b",
    },
    Vector {
        seed: "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb",
        public_key: "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c",
        message: "72",
        signature: "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da\
                    085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00",
    },
];

fn private_key(seed_hex: &str) -> PrivateKey {
    let seed: [u8; 32] = hex::decode(seed_hex).unwrap().try_into().unwrap();
    PrivateKey::from_seed(&seed)
}

#[test]
fn test_sign_rfc8032_vectors() {
    for (i, v) in VECTORS.iter().enumerate() {
        let sk = private_key(v.seed);
        let message = hex::decode(v.message).unwrap();

        assert_eq!(hex::encode(sk.public_key().as_bytes()), v.public_key, "public key, vector {i}");

        let signed = sign(&message, &sk);
        assert_eq!(signed.len(), SIGNATURE_SIZE + message.len());
        assert_eq!(hex::encode(&signed[..SIGNATURE_SIZE]), v.signature, "signature, vector {i}");
        assert_eq!(&signed[SIGNATURE_SIZE..], &message[..], "message copy, vector {i}");

        let pk = PublicKey::from_slice(&hex::decode(v.public_key).unwrap()).unwrap();
        assert_eq!(open(&signed, &pk).unwrap(), message, "open, vector {i}");
    }
}

#[test]
fn test_sign_private_key_layout() {
    let sk = private_key(VECTORS[0].seed);
    let bytes = sk.to_bytes();

    assert_eq!(bytes.len(), PRIVATE_KEY_SIZE);
    assert_eq!(hex::encode(&bytes[..32]), VECTORS[0].seed, "first half is the seed");
    assert_eq!(hex::encode(&bytes[32..]), VECTORS[0].public_key, "second half is the public key");

    let restored = PrivateKey::from_slice(&bytes).unwrap();
    assert_eq!(restored.public_key(), sk.public_key());
    assert_eq!(
        sign_detached(b"same key", &restored),
        sign_detached(b"same key", &sk),
        "restored key must sign identically"
    );
}

#[test]
fn test_sign_private_key_rejects_mismatched_halves() {
    let mut bytes = private_key(VECTORS[0].seed).to_bytes();
    bytes[40] ^= 0x01;

    assert!(matches!(PrivateKey::from_slice(&bytes), Err(Error::InvalidKey)));
}

#[test]
fn test_sign_rejects_wrong_lengths() {
    assert!(matches!(
        PrivateKey::from_slice(&[0u8; 32]),
        Err(Error::InvalidLength {
            expected: PRIVATE_KEY_SIZE,
            actual: 32
        })
    ));
    assert_eq!(
        PublicKey::from_slice(&[0u8; 31]),
        Err(Error::InvalidLength {
            expected: 32,
            actual: 31
        })
    );
    assert_eq!(
        Signature::from_slice(&[0u8; 65]),
        Err(Error::InvalidLength {
            expected: SIGNATURE_SIZE,
            actual: 65
        })
    );
}

#[test]
fn test_sign_open_rejects_short_input() {
    let (pk, _) = generate_keypair();

    for len in [0, 1, SIGNATURE_SIZE - 1] {
        assert_eq!(
            open(&vec![0u8; len], &pk),
            Err(Error::TooShort {
                minimum: SIGNATURE_SIZE,
                actual: len
            }),
            "{len}-byte signed message"
        );
    }
}

#[test]
fn test_sign_detects_tampering() {
    let (pk, sk) = generate_keypair();
    let signed = sign(b"attack at dawn", &sk);

    assert!(verify(&signed, &pk));

    for index in [0, SIGNATURE_SIZE - 1, SIGNATURE_SIZE, signed.len() - 1] {
        let mut tampered = signed.clone();
        tampered[index] ^= 0x01;

        assert_eq!(open(&tampered, &pk), Err(Error::Unauthenticated), "byte {index} flipped");
        assert!(!verify(&tampered, &pk));
    }
}

#[test]
fn test_sign_wrong_public_key() {
    let (_, sk) = generate_keypair();
    let (other_pk, _) = generate_keypair();

    let signed = sign(b"message", &sk);
    assert_eq!(open(&signed, &other_pk), Err(Error::Unauthenticated));
}

#[test]
fn test_sign_invalid_point_public_key() {
    let (_, sk) = generate_keypair();
    let signature = sign_detached(b"message", &sk);

    // y = 2 is not the y-coordinate of any curve point.
    let mut bytes = [0u8; 32];
    bytes[0] = 2;
    let bogus = PublicKey::from_bytes(bytes);

    assert!(!verify_detached(&signature, b"message", &bogus));
}

#[test]
fn test_sign_detached_round_trip() {
    let (pk, sk) = generate_keypair();
    let message = b"detached";

    let signature = sign_detached(message, &sk);
    assert!(verify_detached(&signature, message, &pk));
    assert!(!verify_detached(&signature, b"detachee", &pk));

    let copy = Signature::from_slice(&signature.to_bytes()).unwrap();
    assert_eq!(copy, signature);
}

#[test]
fn test_sign_is_deterministic() {
    let sk = private_key(VECTORS[1].seed);

    assert_eq!(sign(b"repeat", &sk), sign(b"repeat", &sk));
}
