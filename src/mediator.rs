//! Request dispatch for the command/query layer.
//!
//! Each request type is bound to exactly one handler. The registry is
//! assembled once at startup through [`MediatorBuilder`] and is immutable
//! afterwards; the transport layer receives the built [`Mediator`] by
//! reference and routes every inbound operation through [`Mediator::send`].

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::services::{ServiceError, ServiceResult};

/// A typed operation carrying its parameters, bound to exactly one handler.
pub trait Request: Send + 'static {
    /// Value produced by the bound handler on success.
    type Output: Send + 'static;
}

/// Logic bound to a single request type `R`.
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    async fn handle(&self, request: R) -> ServiceResult<R::Output>;
}

#[derive(Debug, Error)]
pub enum MediatorError {
    #[error("duplicate handler registered for {0}")]
    DuplicateHandler(&'static str),
}

/// Accumulates handler registrations before the service starts.
#[derive(Default)]
pub struct MediatorBuilder {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    duplicates: Vec<&'static str>,
}

impl MediatorBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `handler` to the request type `R`. Registering a second handler
    /// for the same request type makes [`MediatorBuilder::build`] fail.
    #[must_use]
    pub fn register<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let erased: Arc<dyn RequestHandler<R>> = Arc::new(handler);
        if self
            .handlers
            .insert(TypeId::of::<R>(), Box::new(erased))
            .is_some()
        {
            self.duplicates.push(type_name::<R>());
        }
        self
    }

    /// Finalizes the registry, failing if any request type was bound twice.
    pub fn build(self) -> Result<Mediator, MediatorError> {
        if let Some(request_type) = self.duplicates.first() {
            return Err(MediatorError::DuplicateHandler(request_type));
        }
        Ok(Mediator {
            handlers: Arc::new(self.handlers),
        })
    }
}

/// Immutable mapping from request type to its single handler.
#[derive(Clone)]
pub struct Mediator {
    handlers: Arc<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl Mediator {
    /// Routes `request` to its registered handler and awaits the result.
    ///
    /// Dispatching a request type that was never registered is a
    /// configuration error, surfaced as [`ServiceError::Configuration`].
    pub async fn send<R: Request>(&self, request: R) -> ServiceResult<R::Output> {
        let handler = self
            .handlers
            .get(&TypeId::of::<R>())
            .and_then(|handler| handler.downcast_ref::<Arc<dyn RequestHandler<R>>>())
            .cloned()
            .ok_or(ServiceError::Configuration(type_name::<R>()))?;

        handler.handle(request).await
    }

    /// Reports whether a handler is bound to the request type `R`.
    #[must_use]
    pub fn handles<R: Request>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<R>())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct Ping {
        value: i32,
    }

    impl Request for Ping {
        type Output = i32;
    }

    struct PingHandler;

    #[async_trait]
    impl RequestHandler<Ping> for PingHandler {
        async fn handle(&self, request: Ping) -> ServiceResult<i32> {
            Ok(request.value + 1)
        }
    }

    struct Unbound;

    impl Request for Unbound {
        type Output = ();
    }

    #[actix_web::test]
    async fn dispatches_to_the_registered_handler() {
        let mediator = MediatorBuilder::new()
            .register::<Ping, _>(PingHandler)
            .build()
            .unwrap();

        assert_eq!(mediator.send(Ping { value: 41 }).await.unwrap(), 42);
        assert!(mediator.handles::<Ping>());
    }

    #[actix_web::test]
    async fn handler_runs_exactly_once_per_dispatch() {
        struct Tick;

        impl Request for Tick {
            type Output = ();
        }

        struct Counting(Arc<AtomicUsize>);

        #[async_trait]
        impl RequestHandler<Tick> for Counting {
            async fn handle(&self, _request: Tick) -> ServiceResult<()> {
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        }

        let calls = Arc::new(AtomicUsize::new(0));
        let mediator = MediatorBuilder::new()
            .register::<Tick, _>(Counting(calls.clone()))
            .build()
            .unwrap();

        mediator.send(Tick).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn duplicate_registration_is_rejected_at_build_time() {
        let result = MediatorBuilder::new()
            .register::<Ping, _>(PingHandler)
            .register::<Ping, _>(PingHandler)
            .build();

        assert!(matches!(result, Err(MediatorError::DuplicateHandler(_))));
    }

    #[actix_web::test]
    async fn unregistered_request_is_a_configuration_error() {
        let mediator = MediatorBuilder::new()
            .register::<Ping, _>(PingHandler)
            .build()
            .unwrap();

        assert!(!mediator.handles::<Unbound>());
        let err = mediator.send(Unbound).await.unwrap_err();
        assert!(matches!(err, ServiceError::Configuration(_)));
    }
}
