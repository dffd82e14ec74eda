use actix_web::{App, test as actix_test};
use curve::{BigUint, Group, decode_scalar, group_order};
use schnorr::hash_challenge;
use serde_json::{Value, json};

use super::*;

const ORDER_HEX: &str = "0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";
const VECTOR_A: &str = "0x2cb55f4678eb9daca88d1255f2662c0c6359ffedf110fe38e38e38e38e38e38e";
const VECTOR_B: &str = "0x1890aa80be385102083701a2907066f8bd9f2a28b717671c71c71c71c71c71c7";

fn fixed(digits: &str) -> String {
    format!("0x{digits:0>64}")
}

fn generator() -> Value {
    json!({ "x": fixed("1"), "y": fixed("2") })
}

fn point(x: &str, y: &str) -> curve::CurvePoint {
    curve::CurvePoint {
        x: x.to_string(),
        y: y.to_string(),
    }
}

fn double_generator() -> curve::CurvePoint {
    point(
        "0x030644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd3",
        "0x15ed738c0e0a7c92e7845f96b2ae9c0a68a6a449e3538fc7ff3ebf7a5a18a2c4",
    )
}

fn identity() -> curve::CurvePoint {
    point(&fixed("0"), &fixed("0"))
}

async fn post(uri: &str, body: Value) -> Response {
    let app = actix_test::init_service(App::new().configure(configure)).await;
    let req = actix_test::TestRequest::post().uri(uri).set_json(body).to_request();
    actix_test::call_and_read_body_json(&app, req).await
}

async fn get(uri: &str) -> Response {
    let app = actix_test::init_service(App::new().configure(configure)).await;
    let req = actix_test::TestRequest::get().uri(uri).to_request();
    actix_test::call_and_read_body_json(&app, req).await
}

fn error_code(response: &Response) -> &str {
    response
        .error
        .as_ref()
        .map(|err| err.code.as_str())
        .unwrap_or_default()
}

#[actix_web::test]
async fn test_is_alive() {
    assert_eq!(get("/isalive").await, Response::text("It's alive!"));
}

#[actix_web::test]
async fn test_ec_order() {
    assert_eq!(get("/ec/order").await, Response::number(ORDER_HEX.to_string()));
}

#[actix_web::test]
async fn test_ec_add() {
    let response = post("/ec/add/", json!({ "a": generator(), "b": generator() })).await;
    assert_eq!(response, Response::curve_point(double_generator()));
}

#[actix_web::test]
async fn test_ec_sub() {
    let response = post("/ec/sub/", json!({ "a": double_generator(), "b": generator() })).await;
    assert_eq!(response, Response::curve_point(point(&fixed("1"), &fixed("2"))));

    let response = post("/ec/sub/", json!({ "a": generator(), "b": generator() })).await;
    assert_eq!(response, Response::curve_point(identity()));
}

#[actix_web::test]
async fn test_ec_mul_and_base_mul_agree() {
    let ten = post("/ec/basemul/", json!({ "v": "0xa" })).await;
    let ten = ten.curve_point.expect("curve point");

    let thousand_via_mul = post("/ec/mul/", json!({ "s": { "v": "0x64" }, "a": ten })).await;
    let thousand = post("/ec/basemul/", json!({ "v": "0x3e8" })).await;
    assert!(thousand.curve_point.is_some());
    assert_eq!(thousand_via_mul, thousand);
}

#[actix_web::test]
async fn test_ec_mul_by_order_is_identity() {
    let response = post("/ec/mul/", json!({ "s": { "v": ORDER_HEX }, "a": generator() })).await;
    assert_eq!(response, Response::curve_point(identity()));
}

#[actix_web::test]
async fn test_ec_hash_to_point() {
    let response = post("/ec/hashtopoint/", json!({ "t": "input to hash function" })).await;
    assert_eq!(
        response,
        Response::curve_point(point(
            "0x05167cc8fa5cc80098f29d6df8c65a1f1c956dd407073f33a5a75e2dee028a7e",
            "0x08cf95e70b3c8a91341b9fea15e985c7660136dcff651789925d79e98eed2d15",
        ))
    );
}

#[actix_web::test]
async fn test_generate_keccak256() {
    let response = post("/generate/keccak256/", json!({ "t": "input to hash function" })).await;
    assert_eq!(
        response,
        Response::number(
            "0x57329e6de9fd6bb4dbfd32fead3e5ea5c09140552930689f4e9ff679c77c9223".to_string()
        )
    );
}

#[actix_web::test]
async fn test_generate_commitment() {
    let h = post("/ec/basemul/", json!({ "v": "0xa" })).await.curve_point.unwrap();
    let g = post("/ec/basemul/", json!({ "v": "0x64" })).await.curve_point.unwrap();
    let response = post(
        "/generate/commitment/",
        json!({ "b": "0x2", "v": "0x3", "h": h, "g": g }),
    )
    .await;

    // 2 * 10G + 3 * 100G
    let expected = post("/ec/basemul/", json!({ "v": "0x140" })).await;
    assert_eq!(response, expected);
}

#[actix_web::test]
async fn test_generate_and_verify_schnorr() {
    let generated = post(
        "/generate/schnorr/",
        json!({ "x": "0x1234567890abcdef", "m": "This is the message to be signed" }),
    )
    .await;
    let sig = generated.signature.expect("signature");
    assert_eq!(sig.m, "This is the message to be signed");
    assert_eq!(sig.e.len(), 66);
    assert_eq!(sig.s.len(), 66);
    assert!(sig.k.is_some());

    let derived = post("/ec/basemul/", json!({ "v": "0x1234567890abcdef" })).await;
    assert_eq!(Some(sig.p.clone()), derived.curve_point);

    let verified = post("/verify/schnorr/", serde_json::to_value(&sig).unwrap()).await;
    assert_eq!(verified, Response::text("true"));

    let mut tampered = sig.clone();
    tampered.m.push('!');
    let verified = post("/verify/schnorr/", serde_json::to_value(&tampered).unwrap()).await;
    assert_eq!(verified, Response::text("false"));
}

#[actix_web::test]
async fn test_generate_schnorr_with_supplied_point() {
    let generated = post(
        "/generate/schnorr/",
        json!({ "x": "0x5", "m": "message", "p": generator() }),
    )
    .await;
    let sig = generated.signature.expect("signature");
    assert_eq!(sig.p, point(&fixed("1"), &fixed("2")));

    // the challenge is bound to the supplied point
    let p = sig.p.decode().unwrap();
    let k = sig.k.as_ref().unwrap().decode().unwrap();
    assert_eq!(decode_scalar(&sig.e).unwrap(), hash_challenge("message", &p, &k));

    let verified = post("/verify/schnorr/", serde_json::to_value(&sig).unwrap()).await;
    assert_eq!(verified, Response::text("false"));
}

#[actix_web::test]
async fn test_verify_schnorr_rejects_bad_point() {
    let response = post(
        "/verify/schnorr/",
        json!({ "p": { "x": "0x1", "y": "0x3" }, "m": "m", "e": "0x1", "s": "0x1" }),
    )
    .await;
    assert_eq!(error_code(&response), "invalid_point");
}

#[actix_web::test]
async fn test_big_add_and_mul() {
    let response = post("/big/add/", json!({ "a": VECTOR_A, "b": VECTOR_B })).await;
    assert_eq!(
        response,
        Response::number(
            "0x454609c73723eeaeb0c413f882d6930520f92a16a82865555555555555555555".to_string()
        )
    );

    let response = post("/big/mul/", json!({ "a": "0x6", "b": "0x7" })).await;
    assert_eq!(response, Response::number("0x2a".to_string()));
}

#[actix_web::test]
async fn test_big_sub_mod() {
    let response = post(
        "/big/submod/",
        json!({ "a": VECTOR_B, "b": VECTOR_A, "c": ORDER_HEX }),
    )
    .await;
    assert_eq!(
        response,
        Response::number(
            "0x1c3f99ad267e537f17fa35031f8b9349827912833fbfd974d21ad92228e38e3a".to_string()
        )
    );
}

#[actix_web::test]
async fn test_big_mod() {
    let response = post(
        "/big/mod/",
        json!({ "a": "0x6f08c53badb6decbbebb3059ab95a878c9baf1c245d02e38e38e38e38e38e38e", "b": ORDER_HEX }),
    )
    .await;
    assert_eq!(
        response,
        Response::number(
            "0xe402855eb539e784e1aa4eca892f7be79532131525d4d165bca4dbbae38e38c".to_string()
        )
    );
}

#[actix_web::test]
async fn test_big_inv_mod() {
    let response = post("/big/invmod/", json!({ "a": VECTOR_A, "b": ORDER_HEX })).await;
    assert_eq!(
        response,
        Response::number(
            "0x1ea454cc17d39b4aa0859835a1eadcce18bd4162892dbc3eebe3cfb1f80448f8".to_string()
        )
    );

    let response = post("/big/invmod/", json!({ "a": "0x6", "b": "0x9" })).await;
    assert_eq!(error_code(&response), "not_invertible");
}

#[actix_web::test]
async fn test_big_zero_modulus() {
    let response = post("/big/mod/", json!({ "a": "0x6", "b": "0x0" })).await;
    assert_eq!(error_code(&response), "malformed_input");
}

#[actix_web::test]
async fn test_big_rand_below_order() {
    let response = get("/big/rand").await;
    let value = decode_scalar(&response.number.expect("number").v).unwrap();
    assert!(&value < group_order());
}

#[actix_web::test]
async fn test_malformed_inputs_use_error_envelope() {
    let response = post("/big/add/", json!({ "a": "12", "b": "0x1" })).await;
    assert_eq!(error_code(&response), "malformed_input");
    assert!(response.number.is_none());

    let response = post("/ec/add/", json!({ "a": generator() })).await;
    assert_eq!(error_code(&response), "decoding_failure");

    let app = actix_test::init_service(App::new().configure(configure)).await;
    let req = actix_test::TestRequest::post()
        .uri("/generate/keccak256/")
        .set_payload("not json")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Response = actix_test::read_body_json(resp).await;
    assert_eq!(error_code(&body), "decoding_failure");
    assert!(!body.error.unwrap().msg.is_empty());
}

#[actix_web::test]
async fn test_errors_serialize_only_error_member() {
    let app = actix_test::init_service(App::new().configure(configure)).await;
    let req = actix_test::TestRequest::post()
        .uri("/big/invmod/")
        .set_json(json!({ "a": "0x0", "b": "0x7" }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({ "error": {
            "msg": "value is not invertible modulo the given modulus",
            "code": "not_invertible",
        } })
    );
}

#[test]
fn test_generator_fixture_matches_curve() {
    let g = point(&fixed("1"), &fixed("2")).decode().unwrap();
    assert_eq!(g, curve::Affine::generator());
    assert_eq!(
        double_generator().decode().unwrap(),
        curve::Affine::mul_generator(&BigUint::from(2u32))
    );
}

#[actix_web::test]
async fn test_routes_answer_with_slash_toggled() {
    let response = post("/ec/add", json!({ "a": generator(), "b": generator() })).await;
    assert_eq!(response, Response::curve_point(double_generator()));

    assert_eq!(get("/ec/order/").await, Response::number(ORDER_HEX.to_string()));
    assert_eq!(get("/isalive/").await, Response::text("It's alive!"));

    let response = post("/big/mul", json!({ "a": "0x6", "b": "0x7" })).await;
    assert_eq!(response, Response::number("0x2a".to_string()));
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let app = actix_test::init_service(App::new().configure(configure)).await;
    let req = actix_test::TestRequest::get().uri("/ec/order//").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[test]
fn test_toggle_trailing_slash() {
    assert_eq!(toggle_trailing_slash("/ec/add/"), "/ec/add");
    assert_eq!(toggle_trailing_slash("/ec/order"), "/ec/order/");
}
