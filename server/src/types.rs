//! JSON records exchanged on the wire.
//!
//! Every route answers with a [`Response`] envelope carrying exactly one
//! member. Numbers are `0x`-prefixed hex; point coordinates and signature
//! scalars are always 64 hex digits wide.

use curve::CurvePoint;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Number {
    pub v: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub t: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinaryEcOpParams {
    pub a: CurvePoint,
    pub b: CurvePoint,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScalarEcOpParams {
    pub s: Number,
    pub a: CurvePoint,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinaryOpParams {
    pub a: String,
    pub b: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TernaryOpParams {
    pub a: String,
    pub b: String,
    pub c: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommitmentInputs {
    /// Blinding factor
    pub b: String,
    /// Committed value
    pub v: String,
    pub h: CurvePoint,
    pub g: CurvePoint,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateSchnorrInputs {
    /// Secret scalar
    pub x: String,
    /// Message
    pub m: String,
    /// Public point bound into the challenge; derived from `x` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<CurvePoint>,
}

/// Schnorr signature as produced by `/generate/schnorr/`.
///
/// `/verify/schnorr/` takes the same record; `k` is ignored there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchnorrSignature {
    pub p: CurvePoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<CurvePoint>,
    pub m: String,
    pub e: String,
    pub s: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub msg: String,
    pub code: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<Number>,
    #[serde(rename = "curvepoint", default, skip_serializing_if = "Option::is_none")]
    pub curve_point: Option<CurvePoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<SchnorrSignature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorPayload>,
}

impl Response {
    pub fn number(v: String) -> Self {
        Self {
            number: Some(Number { v }),
            ..Default::default()
        }
    }

    pub fn curve_point(point: CurvePoint) -> Self {
        Self {
            curve_point: Some(point),
            ..Default::default()
        }
    }

    pub fn signature(signature: SchnorrSignature) -> Self {
        Self {
            signature: Some(signature),
            ..Default::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn error(error: ErrorPayload) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }
}
