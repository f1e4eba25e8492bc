use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Identifiers arrive as Mongo object-id strings or as plain numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Str(String),
    Num(Number),
}

fn id_from_wire<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match WireId::deserialize(deserializer)? {
        WireId::Str(id) => id,
        WireId::Num(id) => id.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", alias = "id", deserialize_with = "id_from_wire")]
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brand: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    #[serde(alias = "products")]
    pub items: Vec<Product>,
}

/// Body of a successful `POST /products`.
///
/// Some backends wrap the draft product, others return it bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProductCreateResponse {
    Wrapped { product: Product },
    Bare(Product),
}

impl ProductCreateResponse {
    pub fn into_product(self) -> Product {
        match self {
            Self::Wrapped { product } | Self::Bare(product) => product,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "id_from_wire")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "isAdmin", alias = "is_admin", default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(try_from = "ErrorBody")]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Error payload as backends send it: `message`, `error`, or both.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: String,
    #[serde(default)]
    details: Option<Value>,
}

impl TryFrom<ErrorBody> for ApiError {
    type Error = &'static str;

    fn try_from(body: ErrorBody) -> Result<Self, Self::Error> {
        let error = body
            .message
            .or(body.error)
            .ok_or("error body carries no message")?;
        Ok(Self {
            error,
            code: body.code,
            details: body.details,
        })
    }
}

impl ApiError {
    pub const NETWORK_ERROR: &'static str = "NETWORK_ERROR";
    pub const UNAUTHORIZED: &'static str = "UNAUTHORIZED";

    pub fn network() -> Self {
        Self {
            error: "Network Error".to_string(),
            code: Self::NETWORK_ERROR.to_string(),
            details: None,
        }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: Self::UNAUTHORIZED.to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == Self::UNAUTHORIZED
    }
}
