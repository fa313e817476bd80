//! Kubernetes cluster access.
//!
//! Lists namespaced objects through the dynamic API so the configured
//! resource set needs no compiled-in types. The label selector is applied
//! server-side and every call is timeboxed; the graph engine only ever sees
//! a complete listing or a failure.

use kube::api::{Api, DynamicObject, ListParams};
use kube::config::{Config, KubeConfigOptions, Kubeconfig};
use kube::core::GroupVersion;
use kube::discovery::oneshot;

use kubegraph_core::ResourceDescriptor;
use kubegraph_error::{Error, ErrorKind, Result};

/// Server-side timeout for a single list call, in seconds.
const REQUEST_TIMEOUT_SECS: u32 = 5;

/// One complete listing of a configured resource.
pub struct Listing {
    /// Kind served for the resource, from API discovery, e.g. `Pod`.
    pub kind: String,
    pub items: Vec<DynamicObject>,
}

/// Lists namespaced resources in a Kubernetes cluster.
pub struct Client {
    client: kube::Client,
    label_selector: String,
}

impl Client {
    /// Build a client.
    ///
    /// With an explicit kubeconfig path that file is used; otherwise the
    /// in-cluster environment is tried first, falling back to the local
    /// default kubeconfig.
    pub async fn new(kubeconfig: Option<&str>, label_selector: &str) -> Result<Self> {
        let client = match kubeconfig {
            Some(path) => {
                let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
                    Error::new(ErrorKind::ClientFailed, "failed to read kubeconfig")
                        .with_operation("client::new")
                        .with_context("path", path)
                        .set_source(e)
                })?;
                let config =
                    Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                        .await
                        .map_err(|e| {
                            Error::new(ErrorKind::ClientFailed, "failed to load kubeconfig")
                                .with_operation("client::new")
                                .with_context("path", path)
                                .set_source(e)
                        })?;
                kube::Client::try_from(config).map_err(|e| {
                    Error::new(ErrorKind::ClientFailed, "failed to build client")
                        .with_operation("client::new")
                        .set_source(e)
                })?
            }
            None => kube::Client::try_default().await.map_err(|e| {
                Error::new(ErrorKind::ClientFailed, "failed to infer client configuration")
                    .with_operation("client::new")
                    .set_source(e)
            })?,
        };

        Ok(Self {
            client,
            label_selector: label_selector.to_string(),
        })
    }

    /// List all objects of one configured resource in a namespace.
    pub async fn list(&self, descriptor: &ResourceDescriptor, namespace: &str) -> Result<Listing> {
        let gv = GroupVersion {
            group: descriptor.group.clone(),
            version: descriptor.version.clone(),
        };
        let group = oneshot::pinned_group(&self.client, &gv).await.map_err(|e| {
            Error::new(ErrorKind::ListFailed, "API discovery failed")
                .with_operation("client::list")
                .with_context("resource", descriptor.gvr())
                .set_source(e)
        })?;

        let (api_resource, _capabilities) = group
            .versioned_resources(&descriptor.version)
            .into_iter()
            .find(|(resource, _)| resource.plural == descriptor.resource)
            .ok_or_else(|| {
                Error::new(ErrorKind::ListFailed, "resource not served by the cluster")
                    .with_operation("client::list")
                    .with_context("resource", descriptor.gvr())
            })?;

        let api: Api<DynamicObject> =
            Api::namespaced_with(self.client.clone(), namespace, &api_resource);

        let mut params = ListParams::default().timeout(REQUEST_TIMEOUT_SECS);
        if !self.label_selector.is_empty() {
            params = params.labels(&self.label_selector);
        }

        let list = api.list(&params).await.map_err(|e| {
            Error::new(ErrorKind::ListFailed, "failed to list objects")
                .with_operation("client::list")
                .with_context("resource", descriptor.gvr())
                .with_context("namespace", namespace)
                .set_source(e)
        })?;

        Ok(Listing {
            kind: api_resource.kind,
            items: list.items,
        })
    }
}
