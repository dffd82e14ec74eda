//! Route handlers.
//!
//! Bodies are read raw and decoded with `serde_json` so that malformed JSON
//! is reported in the response envelope like any other error.

use actix_web::{HttpResponse, web};
use curve::{
    Affine, BigUint, Group, bigint, commit, decode_scalar, encode_point, encode_scalar,
    encode_scalar_fixed, group_order, hash_to_point, keccak256_scalar, random_scalar,
};
use log::{debug, warn};
use schnorr::{SigningKey, VerifyingKey};
use serde::de::DeserializeOwned;

use crate::error::ServiceError;
use crate::types::{
    BinaryEcOpParams, BinaryOpParams, CommitmentInputs, ErrorPayload, GenerateSchnorrInputs,
    Number, Response, ScalarEcOpParams, SchnorrSignature, TernaryOpParams, Text,
};

pub const ALIVE_TEXT: &str = "It's alive!";

fn parse<T: DeserializeOwned>(body: &[u8]) -> Result<T, ServiceError> {
    Ok(serde_json::from_slice(body)?)
}

fn reply(route: &str, result: Result<Response, ServiceError>) -> HttpResponse {
    let response = match result {
        Ok(response) => {
            debug!("{route}: ok");
            response
        }
        Err(err) => {
            warn!("{route}: rejected request: {err}");
            Response::error(ErrorPayload::from(&err))
        }
    };
    HttpResponse::Ok().json(response)
}

pub async fn is_alive() -> HttpResponse {
    reply("/isalive", Ok(Response::text(ALIVE_TEXT)))
}

// Group operations

pub async fn ec_order() -> HttpResponse {
    reply("/ec/order", Ok(Response::number(encode_scalar(group_order()))))
}

fn add_points(body: &[u8]) -> Result<Response, ServiceError> {
    let params: BinaryEcOpParams = parse(body)?;
    let a = params.a.decode()?;
    let b = params.b.decode()?;
    Ok(Response::curve_point(encode_point(&(a + b))))
}

pub async fn ec_add(body: web::Bytes) -> HttpResponse {
    reply("/ec/add/", add_points(&body))
}

fn sub_points(body: &[u8]) -> Result<Response, ServiceError> {
    let params: BinaryEcOpParams = parse(body)?;
    let a = params.a.decode()?;
    let b = params.b.decode()?;
    Ok(Response::curve_point(encode_point(&(a - b))))
}

pub async fn ec_sub(body: web::Bytes) -> HttpResponse {
    reply("/ec/sub/", sub_points(&body))
}

fn mul_point(body: &[u8]) -> Result<Response, ServiceError> {
    let params: ScalarEcOpParams = parse(body)?;
    let s = decode_scalar(&params.s.v)?;
    let a = params.a.decode()?;
    Ok(Response::curve_point(encode_point(&a.scalar_mul(&s))))
}

pub async fn ec_mul(body: web::Bytes) -> HttpResponse {
    reply("/ec/mul/", mul_point(&body))
}

fn mul_base(body: &[u8]) -> Result<Response, ServiceError> {
    let number: Number = parse(body)?;
    let s = decode_scalar(&number.v)?;
    Ok(Response::curve_point(encode_point(&Affine::mul_generator(&s))))
}

pub async fn ec_base_mul(body: web::Bytes) -> HttpResponse {
    reply("/ec/basemul/", mul_base(&body))
}

fn hash_text_to_point(body: &[u8]) -> Result<Response, ServiceError> {
    let text: Text = parse(body)?;
    let point = hash_to_point(text.t.as_bytes())?;
    Ok(Response::curve_point(encode_point(&point)))
}

pub async fn ec_hash_to_point(body: web::Bytes) -> HttpResponse {
    reply("/ec/hashtopoint/", hash_text_to_point(&body))
}

// Big-integer operations

fn binary_operands(body: &[u8]) -> Result<(BigUint, BigUint), ServiceError> {
    let params: BinaryOpParams = parse(body)?;
    Ok((decode_scalar(&params.a)?, decode_scalar(&params.b)?))
}

fn big_add_numbers(body: &[u8]) -> Result<Response, ServiceError> {
    let (a, b) = binary_operands(body)?;
    Ok(Response::number(encode_scalar(&bigint::add(&a, &b))))
}

pub async fn big_add(body: web::Bytes) -> HttpResponse {
    reply("/big/add/", big_add_numbers(&body))
}

fn big_mul_numbers(body: &[u8]) -> Result<Response, ServiceError> {
    let (a, b) = binary_operands(body)?;
    Ok(Response::number(encode_scalar(&bigint::mul(&a, &b))))
}

pub async fn big_mul(body: web::Bytes) -> HttpResponse {
    reply("/big/mul/", big_mul_numbers(&body))
}

fn big_mod_numbers(body: &[u8]) -> Result<Response, ServiceError> {
    let (a, b) = binary_operands(body)?;
    Ok(Response::number(encode_scalar(&bigint::modulo(&a, &b)?)))
}

pub async fn big_mod(body: web::Bytes) -> HttpResponse {
    reply("/big/mod/", big_mod_numbers(&body))
}

fn big_inv_mod_numbers(body: &[u8]) -> Result<Response, ServiceError> {
    let (a, b) = binary_operands(body)?;
    Ok(Response::number(encode_scalar(&bigint::inv_mod(&a, &b)?)))
}

pub async fn big_inv_mod(body: web::Bytes) -> HttpResponse {
    reply("/big/invmod/", big_inv_mod_numbers(&body))
}

fn big_sub_mod_numbers(body: &[u8]) -> Result<Response, ServiceError> {
    let params: TernaryOpParams = parse(body)?;
    let a = decode_scalar(&params.a)?;
    let b = decode_scalar(&params.b)?;
    let c = decode_scalar(&params.c)?;
    Ok(Response::number(encode_scalar(&bigint::sub_mod(&a, &b, &c)?)))
}

pub async fn big_sub_mod(body: web::Bytes) -> HttpResponse {
    reply("/big/submod/", big_sub_mod_numbers(&body))
}

pub async fn big_rand() -> HttpResponse {
    let value = random_scalar(&mut rand::rng());
    reply("/big/rand", Ok(Response::number(encode_scalar(&value))))
}

// Hashing, commitments and signatures

fn keccak_text(body: &[u8]) -> Result<Response, ServiceError> {
    let text: Text = parse(body)?;
    Ok(Response::number(encode_scalar(&keccak256_scalar(
        text.t.as_bytes(),
    ))))
}

pub async fn generate_keccak256(body: web::Bytes) -> HttpResponse {
    reply("/generate/keccak256/", keccak_text(&body))
}

fn commitment(body: &[u8]) -> Result<Response, ServiceError> {
    let inputs: CommitmentInputs = parse(body)?;
    let b = decode_scalar(&inputs.b)?;
    let v = decode_scalar(&inputs.v)?;
    let h = inputs.h.decode()?;
    let g = inputs.g.decode()?;
    Ok(Response::curve_point(encode_point(&commit(&b, &v, &h, &g))))
}

pub async fn generate_commitment(body: web::Bytes) -> HttpResponse {
    reply("/generate/commitment/", commitment(&body))
}

fn schnorr_signature(body: &[u8]) -> Result<Response, ServiceError> {
    let inputs: GenerateSchnorrInputs = parse(body)?;
    let signing_key = SigningKey::from_scalar(decode_scalar(&inputs.x)?);
    let public = match &inputs.p {
        Some(point) => VerifyingKey::from(point.decode()?),
        None => signing_key.verifying_key(),
    };

    let sig = signing_key.sign_with_public(&mut rand::rng(), &public, &inputs.m);
    Ok(Response::signature(SchnorrSignature {
        p: encode_point(&sig.public),
        k: Some(encode_point(&sig.nonce_commitment)),
        m: sig.message,
        e: encode_scalar_fixed(&sig.e),
        s: encode_scalar_fixed(&sig.s),
    }))
}

pub async fn generate_schnorr(body: web::Bytes) -> HttpResponse {
    reply("/generate/schnorr/", schnorr_signature(&body))
}

fn schnorr_verification(body: &[u8]) -> Result<Response, ServiceError> {
    let sig: SchnorrSignature = parse(body)?;
    let public = VerifyingKey::from(sig.p.decode()?);
    let e = decode_scalar(&sig.e)?;
    let s = decode_scalar(&sig.s)?;
    Ok(Response::text(public.verify(&sig.m, &e, &s).to_string()))
}

pub async fn verify_schnorr(body: web::Bytes) -> HttpResponse {
    reply("/verify/schnorr/", schnorr_verification(&body))
}
