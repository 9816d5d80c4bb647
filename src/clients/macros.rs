/// Generate client methods with oneshot channel boilerplate and automatic tracing.
/// The error type must offer an `ActorCommunicationError(String)` variant.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[tracing::instrument(skip_all)]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: crate::actor_framework::StateClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

/// One `update_<field>` method per field, each committing a single-field patch.
macro_rules! impl_field_updates {
    ($client_name:ident, $patch:ident, $error:ty, $($field:ident),+ $(,)?) => {
        paste::paste! {
            impl $client_name {
                $(
                    #[tracing::instrument(skip_all)]
                    pub async fn [<update_ $field>](&self, value: impl Into<String>) -> Result<(), $error> {
                        tracing::debug!("Sending request");
                        let patch = $patch {
                            $field: Some(value.into()),
                            ..$patch::default()
                        };
                        self.inner.update(patch).await.map(|_| ()).map_err(<$error>::from)
                    }
                )+
            }
        }
    };
}
