//! Declarative macros shared by the model, actor and client modules.

/// Declares `<Name>Id(pub u32)`, displayed as `<prefix>_<n>`.
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        paste::paste! {
            #[doc = "Type-safe identifier for a " $name "."]
            #[derive(
                Debug,
                Clone,
                Copy,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                serde::Serialize,
                serde::Deserialize,
            )]
            #[serde(transparent)]
            pub struct [<$name Id>](pub u32);

            impl From<u32> for [<$name Id>] {
                fn from(id: u32) -> Self {
                    Self(id)
                }
            }

            impl std::fmt::Display for [<$name Id>] {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, concat!($prefix, "_{}"), self.0)
                }
            }
        }
    };
}

/// Conversions every per-actor error enum needs.
///
/// The enum must have `NotFound`, `ValidationError`, `Conflict` and `ActorCommunicationError`
/// variants, each holding a `String`. Variants listed under `rules` hold a domain-rule
/// violation and classify as validation failures.
macro_rules! impl_actor_error {
    ($error:ident) => {
        impl_actor_error!($error, rules: []);
    };
    ($error:ident, rules: [$($rule:ident),*]) => {
        impl From<String> for $error {
            fn from(msg: String) -> Self {
                $error::ActorCommunicationError(msg)
            }
        }

        impl From<actor_framework::FrameworkError> for $error {
            fn from(e: actor_framework::FrameworkError) -> Self {
                use actor_framework::FrameworkError;
                match e.downcast_entity::<$error>() {
                    Ok(err) => err,
                    Err(FrameworkError::NotFound(id)) => $error::NotFound(id),
                    Err(FrameworkError::Conflict(msg)) => $error::Conflict(msg),
                    Err(other) => $error::ActorCommunicationError(other.to_string()),
                }
            }
        }

        impl $error {
            /// Coarse classification used by the HTTP layer.
            pub fn kind(&self) -> $crate::error::ErrorKind {
                use $crate::error::ErrorKind;
                match self {
                    $error::NotFound(_) => ErrorKind::NotFound,
                    $error::ValidationError(_) => ErrorKind::Validation,
                    $error::Conflict(_) => ErrorKind::Conflict,
                    $error::ActorCommunicationError(_) => ErrorKind::Internal,
                    $($error::$rule(_) => ErrorKind::Validation,)*
                }
            }
        }
    };
}

/// `From<Upstream>` for an actor error, for hooks that consult other actors.
macro_rules! impl_error_from {
    ($target:ident <- $($source:ident),+) => {
        $(
            impl From<$source> for $target {
                fn from(e: $source) -> Self {
                    match e {
                        $source::NotFound(id) => $target::NotFound(id),
                        $source::Conflict(msg) => $target::Conflict(msg),
                        $source::ActorCommunicationError(msg) => {
                            $target::ActorCommunicationError(msg)
                        }
                        other => $target::ValidationError(other.to_string()),
                    }
                }
            }
        )+
    };
}

/// A typed client over `ResourceClient<Entity>` with the standard create/update/fetch surface.
///
/// Expects `<Entity>Id`, `<Entity>Create`, `<Entity>Update` and `<Entity>Query` in scope at the
/// call site, plus the actor's error type.
macro_rules! entity_client {
    ($entity:ident, $error:ident) => {
        paste::paste! {
            #[doc = "Client for interacting with the " $entity " actor."]
            #[derive(Clone)]
            pub struct [<$entity Client>] {
                inner: actor_framework::ResourceClient<$entity>,
            }

            impl [<$entity Client>] {
                pub fn new(inner: actor_framework::ResourceClient<$entity>) -> Self {
                    Self { inner }
                }

                #[tracing::instrument(skip(self))]
                pub async fn create(&self, params: [<$entity Create>]) -> Result<[<$entity Id>], $error> {
                    tracing::debug!("Sending request");
                    Ok(self.inner.create(params).await?)
                }

                #[tracing::instrument(skip(self))]
                pub async fn update(
                    &self,
                    id: [<$entity Id>],
                    update: [<$entity Update>],
                ) -> Result<$entity, $error> {
                    tracing::debug!("Sending request");
                    Ok(self.inner.update(id, update).await?)
                }

                /// Like `get`, but a missing entity is an error.
                #[tracing::instrument(skip(self))]
                pub async fn fetch(&self, id: [<$entity Id>]) -> Result<$entity, $error> {
                    self.inner
                        .get(id)
                        .await?
                        .ok_or_else(|| $error::NotFound(id.to_string()))
                }

                #[tracing::instrument(skip(self))]
                pub async fn delete_where(&self, query: [<$entity Query>]) -> Result<Vec<$entity>, $error> {
                    tracing::debug!("Sending request");
                    Ok(self.inner.delete_where(query).await?)
                }
            }

            impl actor_framework::ActorClient<$entity> for [<$entity Client>] {
                type Error = $error;

                fn inner(&self) -> &actor_framework::ResourceClient<$entity> {
                    &self.inner
                }

                fn map_error(e: actor_framework::FrameworkError) -> Self::Error {
                    $error::from(e)
                }
            }
        }
    };
}
