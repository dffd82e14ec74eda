use curve::{encode_point, encode_scalar_fixed, decode_point, decode_scalar};
use rand::SeedableRng;
use rand::rngs::StdRng;
use schnorr::{SigningKey, VerifyingKey};

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = VerifyingKey::from(&sk);

    let sig = sk.sign(&mut rng, "hello schnorr");

    // ship the signature in its wire form and read it back
    let p = encode_point(&sig.public);
    let e = encode_scalar_fixed(&sig.e);
    let s = encode_scalar_fixed(&sig.s);
    println!("P = ({}, {})", p.x, p.y);
    println!("E = {e}");
    println!("S = {s}");

    let vk2 = VerifyingKey::from(decode_point(&p.x, &p.y).expect("decode P"));
    let e2 = decode_scalar(&e).expect("decode E");
    let s2 = decode_scalar(&s).expect("decode S");

    assert_eq!(vk, vk2);
    let ok = vk2.verify(&sig.message, &e2, &s2);
    assert!(ok);
    println!("valid: {ok}");
}
