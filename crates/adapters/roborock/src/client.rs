//! HTTP client implementing the cloud port.

use std::future::Future;
use std::time::Duration;

use reqwest::{Method, header};
use serde::de::DeserializeOwned;

use scenehub_app::ports::SceneCloud;
use scenehub_domain::credentials::UserCredentials;
use scenehub_domain::error::SceneHubError;
use scenehub_domain::scene::{Scene, SceneId};

use crate::api::ApiResponse;
use crate::config::RoborockConfig;
use crate::error::RoborockError;

/// Talks to the Roborock user API over HTTPS.
///
/// The underlying [`reqwest::Client`] pools connections, so one instance
/// should be shared by every device of an account.
#[derive(Debug, Clone)]
pub struct RoborockCloudClient {
    http: reqwest::Client,
    base_url: String,
}

impl RoborockCloudClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RoborockError::Build`] if the TLS backend cannot be initialised.
    pub fn new(config: &RoborockConfig) -> Result<Self, RoborockError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("scenehub/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RoborockError::Build)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn scenes_url(&self, duid: &str) -> String {
        format!("{}/user/scene/device/{duid}", self.base_url)
    }

    fn execute_url(&self, scene_id: SceneId) -> String {
        format!("{}/user/scene/{scene_id}/execute", self.base_url)
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        credentials: &UserCredentials,
    ) -> Result<Option<R>, RoborockError> {
        let response = match self
            .http
            .request(method, &url)
            .header(header::AUTHORIZATION, &credentials.token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(source) => return Err(RoborockError::Http { url, source }),
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(source) => return Err(RoborockError::Http { url, source }),
        };

        if !status.is_success() {
            return Err(RoborockError::Status {
                url,
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let envelope: ApiResponse<R> = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(source) => return Err(RoborockError::Decode { url, source }),
        };
        envelope.into_result().map_err(RoborockError::Rejected)
    }
}

impl SceneCloud for RoborockCloudClient {
    fn get_scenes(
        &self,
        credentials: &UserCredentials,
        duid: &str,
    ) -> impl Future<Output = Result<Vec<Scene>, SceneHubError>> + Send {
        let url = self.scenes_url(duid);
        async move {
            tracing::debug!(%url, "fetching scenes");
            let scenes: Option<Vec<Scene>> = self.request(Method::GET, url, credentials).await?;
            Ok(scenes.unwrap_or_default())
        }
    }

    fn execute_scene(
        &self,
        credentials: &UserCredentials,
        scene_id: SceneId,
    ) -> impl Future<Output = Result<(), SceneHubError>> + Send {
        let url = self.execute_url(scene_id);
        async move {
            tracing::debug!(%url, "executing scene");
            let _: Option<serde_json::Value> = self.request(Method::POST, url, credentials).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> RoborockCloudClient {
        RoborockCloudClient::new(&RoborockConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn should_build_scene_list_url() {
        let client = client("https://api-eu.roborock.com");
        assert_eq!(
            client.scenes_url("1a2b3c"),
            "https://api-eu.roborock.com/user/scene/device/1a2b3c"
        );
    }

    #[test]
    fn should_build_execute_url() {
        let client = client("https://api-eu.roborock.com");
        assert_eq!(
            client.execute_url(SceneId(1_193_420)),
            "https://api-eu.roborock.com/user/scene/1193420/execute"
        );
    }

    #[test]
    fn should_strip_trailing_slash_from_base_url() {
        let client = client("https://api-us.roborock.com/");
        assert_eq!(
            client.scenes_url("x"),
            "https://api-us.roborock.com/user/scene/device/x"
        );
    }

    #[tokio::test]
    async fn should_report_transport_error_when_host_is_unreachable() {
        // Nothing listens on the local discard port.
        let client = client("http://127.0.0.1:9");
        let creds = UserCredentials::new("jane", "token");

        let result = client.get_scenes(&creds, "1a2b3c").await;

        assert!(matches!(
            result,
            Err(SceneHubError::Cloud(
                scenehub_domain::error::CloudError::Transport(_)
            ))
        ));
    }

    mod against_local_cloud {
        use axum::Router;
        use axum::extract::Path;
        use axum::http::{HeaderMap, StatusCode};
        use axum::routing::{get, post};
        use scenehub_domain::error::CloudError;

        use super::*;

        const TOKEN: &str = r#"Hawk id="u", s="s", ts="1700000000", nonce="n0", mac="m""#;

        fn signed(headers: &HeaderMap) -> bool {
            headers
                .get(axum::http::header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                == Some(TOKEN)
        }

        async fn scenes(Path(duid): Path<String>, headers: HeaderMap) -> (StatusCode, String) {
            if !signed(&headers) {
                return (StatusCode::UNAUTHORIZED, "missing signature".to_string());
            }
            let body = match duid.as_str() {
                "abc" => {
                    r#"{"success":true,"code":200,"msg":"success","result":[{"id":10,"name":"Vacuum","enabled":true},{"id":11,"name":"Mop","enabled":true}]}"#
                }
                "rejected" => r#"{"success":false,"code":2010,"msg":"invalid token"}"#,
                "garbled" => "<html>maintenance</html>",
                _ => return (StatusCode::SERVICE_UNAVAILABLE, "maintenance".to_string()),
            };
            (StatusCode::OK, body.to_string())
        }

        async fn execute(Path(id): Path<i64>, headers: HeaderMap) -> (StatusCode, String) {
            if !signed(&headers) {
                return (StatusCode::UNAUTHORIZED, "missing signature".to_string());
            }
            let body = if id == 11 {
                r#"{"success":true,"code":200,"msg":"success","result":true}"#
            } else {
                r#"{"success":false,"code":404,"msg":"scene not found"}"#
            };
            (StatusCode::OK, body.to_string())
        }

        async fn serve() -> RoborockCloudClient {
            let app = Router::new()
                .route("/user/scene/device/{duid}", get(scenes))
                .route("/user/scene/{id}/execute", post(execute));
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
            client(&format!("http://{addr}"))
        }

        fn creds() -> UserCredentials {
            UserCredentials::new("jane", TOKEN)
        }

        #[tokio::test]
        async fn should_fetch_scenes_from_envelope() {
            let client = serve().await;

            let scenes = client.get_scenes(&creds(), "abc").await.unwrap();

            assert_eq!(scenes, vec![Scene::new(10, "Vacuum"), Scene::new(11, "Mop")]);
        }

        #[tokio::test]
        async fn should_send_token_verbatim_as_authorization() {
            let client = serve().await;
            let unsigned = UserCredentials::new("jane", "plain-token");

            let result = client.get_scenes(&unsigned, "abc").await;

            match result {
                Err(SceneHubError::Cloud(CloudError::Status { status, body })) => {
                    assert_eq!(status, 401);
                    assert_eq!(body, "missing signature");
                }
                other => panic!("expected 401, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn should_execute_scene_accepted_by_cloud() {
            let client = serve().await;

            client.execute_scene(&creds(), SceneId(11)).await.unwrap();
        }

        #[tokio::test]
        async fn should_map_failed_envelope_to_rejection() {
            let client = serve().await;

            let listed = client.get_scenes(&creds(), "rejected").await;
            let executed = client.execute_scene(&creds(), SceneId(99)).await;

            assert!(matches!(
                listed,
                Err(SceneHubError::Cloud(CloudError::Rejected { message })) if message == "invalid token"
            ));
            assert!(matches!(
                executed,
                Err(SceneHubError::Cloud(CloudError::Rejected { message })) if message == "scene not found"
            ));
        }

        #[tokio::test]
        async fn should_map_error_status_with_body() {
            let client = serve().await;

            let result = client.get_scenes(&creds(), "offline").await;

            assert!(matches!(
                result,
                Err(SceneHubError::Cloud(CloudError::Status { status: 503, body })) if body == "maintenance"
            ));
        }

        #[tokio::test]
        async fn should_map_undecodable_body_to_decode_error() {
            let client = serve().await;

            let result = client.get_scenes(&creds(), "garbled").await;

            assert!(matches!(
                result,
                Err(SceneHubError::Cloud(CloudError::Decode(_)))
            ));
        }
    }
}
