//! Driver trait for remote text generation.

use async_trait::async_trait;
use ideablog_core::{GenerateRequest, GenerateResponse};
use ideablog_error::IdeaBlogResult;
use std::sync::Arc;

/// Core trait that every text-generation backend implements.
///
/// Given an ordered conversation and sampling parameters, return a completion
/// or fail with a remote-call error.
#[async_trait]
pub trait IdeaBlogDriver: Send + Sync {
    /// Generate a completion for the request.
    async fn generate(&self, req: &GenerateRequest) -> IdeaBlogResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when a request names none.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D: IdeaBlogDriver + ?Sized> IdeaBlogDriver for Arc<D> {
    async fn generate(&self, req: &GenerateRequest) -> IdeaBlogResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<D: IdeaBlogDriver + ?Sized> IdeaBlogDriver for Box<D> {
    async fn generate(&self, req: &GenerateRequest) -> IdeaBlogResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideablog_core::Message;

    struct Echo;

    #[async_trait]
    impl IdeaBlogDriver for Echo {
        async fn generate(&self, req: &GenerateRequest) -> IdeaBlogResult<GenerateResponse> {
            let last = req.messages.last().map(|m| m.content.clone()).unwrap_or_default();
            Ok(GenerateResponse::new(last))
        }

        fn provider_name(&self) -> &'static str {
            "echo"
        }

        fn model_name(&self) -> &str {
            "echo-1"
        }
    }

    #[tokio::test]
    async fn shared_and_boxed_drivers_delegate() {
        let request = GenerateRequest {
            messages: vec![Message::user("ping")],
            ..Default::default()
        };

        let shared: Arc<dyn IdeaBlogDriver> = Arc::new(Echo);
        assert_eq!(shared.generate(&request).await.unwrap().text, "ping");
        assert_eq!(shared.provider_name(), "echo");

        let boxed: Box<dyn IdeaBlogDriver> = Box::new(Echo);
        assert_eq!(boxed.model_name(), "echo-1");
    }
}
