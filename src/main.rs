//! Key-agreement walkthrough.
//!
//! Generates a key pair for each of two parties, derives the shared
//! secret from both sides, and runs a short message through the XOR
//! combiner and back, keyed by the raw private scalar.

use curval::encryption::xor;
use curval::keys::secp256k1::params::SECP256K1;
use curval::keys::secp256k1::{KeyError, exchange, generate_keypair};

fn main() -> Result<(), KeyError> {
    let (alice_public, alice_private) = generate_keypair()?;
    let (bob_public, bob_private) = generate_keypair()?;

    println!("alice public key:  {}", alice_public.to_hex());
    println!("alice private key: {}", alice_private.to_hex());
    println!("bob public key:    {}", bob_public.to_hex());
    println!("bob private key:   {}", bob_private.to_hex());

    let alice_secret = exchange(&alice_private, &bob_public, &SECP256K1)?;
    let bob_secret = exchange(&bob_private, &alice_public, &SECP256K1)?;

    println!();
    println!("alice shared secret: {}", hex(&alice_secret));
    println!("bob shared secret:   {}", hex(&bob_secret));

    let key = alice_private.scalar();
    let message = b"Hello, World!";

    let encrypted = xor::combine(key, message);
    let decrypted = xor::combine(key, &encrypted);

    println!();
    println!("original:  {}", String::from_utf8_lossy(message));
    println!("encrypted: {}", hex(&encrypted));
    println!("decrypted: {}", String::from_utf8_lossy(&decrypted));

    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
