use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use kernel::model::id::CustomerId;
use lambda_http::request::RequestContext;
use registry::AppRegistry;
use shared::{
    env::{which, Environment},
    error::AppError,
};

// ローカル実行時のみ受け付ける利用者 ID ヘッダ
pub const DEV_CUSTOMER_HEADER: &str = "x-customer-id";

// API Gateway の authorizer が検証済みの利用者
pub struct AuthorizedUser {
    customer_id: CustomerId,
}

impl AuthorizedUser {
    pub fn id(&self) -> CustomerId {
        self.customer_id.clone()
    }
}

// REST API (Cognito authorizer) と HTTP API (JWT authorizer) のどちらでも sub クレームを読む
fn authorizer_subject(ctx: &RequestContext) -> Option<String> {
    let value = serde_json::to_value(ctx).ok()?;
    ["/authorizer/claims/sub", "/authorizer/jwt/claims/sub"]
        .iter()
        .find_map(|pointer| value.pointer(pointer))
        .and_then(|sub| sub.as_str())
        .filter(|sub| !sub.is_empty())
        .map(str::to_owned)
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        if let Some(sub) = parts
            .extensions
            .get::<RequestContext>()
            .and_then(authorizer_subject)
        {
            return Ok(Self {
                customer_id: CustomerId::new(sub),
            });
        }

        if which() == Environment::Development {
            if let Some(sub) = parts
                .headers
                .get(DEV_CUSTOMER_HEADER)
                .and_then(|v| v.to_str().ok())
                .filter(|v| !v.is_empty())
            {
                return Ok(Self {
                    customer_id: CustomerId::new(sub),
                });
            }
        }

        Err(AppError::UnauthenticatedRequest)
    }
}
