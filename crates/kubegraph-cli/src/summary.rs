//! Summary conversion: `DynamicObject` → `ObjectSummary`.
//!
//! Objects are listed generically; only the kinds with inference rules are
//! given a typed second look. The relevant section of the raw object is
//! deserialized into the matching k8s-openapi type and projected down to the
//! relationship fields the engine consumes.

use k8s_openapi::api::core::v1 as corev1;
use k8s_openapi::api::networking::v1 as networkingv1;
use kube::api::DynamicObject;
use serde::de::DeserializeOwned;

use kubegraph_core::object::{
    EndpointSubset, HttpPath, HttpRule, ObjectDetail, ObjectRef, ObjectSummary, OwnerRef,
    PortSpec, VolumeSource, ENDPOINTS, INGRESS, POD, SERVICE,
};
use kubegraph_error::{Error, ErrorKind, Result};

/// Project one listed object down to the summary the engine consumes.
///
/// `fallback_kind` is the kind from API discovery, used when the listed item
/// carries no type metadata of its own.
pub fn summarize(object: &DynamicObject, fallback_kind: &str) -> Result<ObjectSummary> {
    let name = object.metadata.name.clone().ok_or_else(|| {
        Error::new(ErrorKind::ConvertFailed, "listed object has no name")
            .with_operation("summary::summarize")
            .with_context("kind", fallback_kind)
    })?;

    let kind = object
        .types
        .as_ref()
        .map(|t| t.kind.as_str())
        .filter(|k| !k.is_empty())
        .unwrap_or(fallback_kind)
        .to_string();

    let owners = object
        .metadata
        .owner_references
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|reference| OwnerRef {
            name: reference.name.clone(),
            kind: reference.kind.clone(),
            controller: reference.controller.unwrap_or(false),
        })
        .collect();

    let detail = match kind.as_str() {
        SERVICE => service_detail(object)?,
        ENDPOINTS => endpoints_detail(object)?,
        INGRESS => ingress_detail(object)?,
        POD => pod_detail(object)?,
        _ => ObjectDetail::Other,
    };

    Ok(ObjectSummary {
        name,
        kind,
        owners,
        detail,
    })
}

/// Deserialize one top-level section of the raw object. A missing section is
/// treated as empty rather than malformed.
fn section<T>(object: &DynamicObject, field: &'static str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match object.data.get(field) {
        None | Some(serde_json::Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
            Error::new(ErrorKind::ConvertFailed, "malformed object section")
                .with_operation("summary::section")
                .with_context("field", field)
                .set_source(e)
        }),
    }
}

fn service_detail(object: &DynamicObject) -> Result<ObjectDetail> {
    let spec: corev1::ServiceSpec = section(object, "spec")?;
    let ports = spec
        .ports
        .unwrap_or_default()
        .into_iter()
        .map(|port| PortSpec {
            port: port.port,
            protocol: port.protocol.unwrap_or_default(),
            name: port.name.unwrap_or_default(),
        })
        .collect();
    Ok(ObjectDetail::Service { ports })
}

fn endpoints_detail(object: &DynamicObject) -> Result<ObjectDetail> {
    let subsets: Vec<corev1::EndpointSubset> = section(object, "subsets")?;
    let subsets = subsets
        .into_iter()
        .map(|subset| EndpointSubset {
            targets: subset
                .addresses
                .unwrap_or_default()
                .into_iter()
                .filter_map(|address| address.target_ref)
                .map(|target| ObjectRef {
                    kind: target.kind.unwrap_or_default(),
                    name: target.name.unwrap_or_default(),
                })
                .collect(),
            ports: subset
                .ports
                .unwrap_or_default()
                .into_iter()
                .map(|port| PortSpec {
                    port: port.port,
                    protocol: port.protocol.unwrap_or_default(),
                    name: port.name.unwrap_or_default(),
                })
                .collect(),
        })
        .collect();
    Ok(ObjectDetail::Endpoints { subsets })
}

fn ingress_detail(object: &DynamicObject) -> Result<ObjectDetail> {
    let spec: networkingv1::IngressSpec = section(object, "spec")?;
    let rules = spec
        .rules
        .unwrap_or_default()
        .into_iter()
        .filter_map(|rule| rule.http)
        .map(|http| HttpRule {
            paths: http
                .paths
                .into_iter()
                .map(|path| HttpPath {
                    path: path.path.unwrap_or_default(),
                    resource: path.backend.resource.map(|resource| ObjectRef {
                        kind: resource.kind,
                        name: resource.name,
                    }),
                    service: path.backend.service.map(|service| service.name),
                })
                .collect(),
        })
        .collect();
    Ok(ObjectDetail::Ingress { rules })
}

fn pod_detail(object: &DynamicObject) -> Result<ObjectDetail> {
    let spec: corev1::PodSpec = section(object, "spec")?;
    let volumes = spec
        .volumes
        .unwrap_or_default()
        .into_iter()
        .filter_map(|volume| {
            if let Some(config_map) = volume.config_map {
                Some(VolumeSource::ConfigMap(config_map.name))
            } else if let Some(secret) = volume.secret {
                secret.secret_name.map(VolumeSource::Secret)
            } else if let Some(claim) = volume.persistent_volume_claim {
                Some(VolumeSource::PersistentVolumeClaim(claim.claim_name))
            } else {
                None
            }
        })
        .collect();
    Ok(ObjectDetail::Pod { volumes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: serde_json::Value) -> DynamicObject {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_service_summary() {
        let service = object(json!({
            "apiVersion": "v1",
            "kind": "Service",
            "metadata": {"name": "svc-a"},
            "spec": {"ports": [
                {"port": 8080, "protocol": "TCP", "name": "api"},
                {"port": 3001, "protocol": "TCP", "name": "metrics"}
            ]}
        }));
        let summary = summarize(&service, "Service").unwrap();
        assert_eq!(summary.name, "svc-a");
        assert_eq!(summary.kind, "Service");
        assert_eq!(
            summary.detail,
            ObjectDetail::Service {
                ports: vec![
                    PortSpec {
                        port: 8080,
                        protocol: "TCP".to_string(),
                        name: "api".to_string()
                    },
                    PortSpec {
                        port: 3001,
                        protocol: "TCP".to_string(),
                        name: "metrics".to_string()
                    },
                ]
            }
        );
    }

    #[test]
    fn test_endpoints_summary() {
        let endpoints = object(json!({
            "apiVersion": "v1",
            "kind": "Endpoints",
            "metadata": {"name": "svc-a"},
            "subsets": [{
                "addresses": [
                    {"ip": "10.0.0.1", "targetRef": {"kind": "Pod", "name": "pod-a"}},
                    {"ip": "10.0.0.2"}
                ],
                "ports": [{"port": 80, "protocol": "TCP", "name": "http"}]
            }]
        }));
        let summary = summarize(&endpoints, "Endpoints").unwrap();
        let ObjectDetail::Endpoints { subsets } = summary.detail else {
            panic!("expected endpoints detail");
        };
        assert_eq!(subsets.len(), 1);
        // The address without a target reference is dropped.
        assert_eq!(subsets[0].targets.len(), 1);
        assert_eq!(subsets[0].targets[0].kind, "Pod");
        assert_eq!(subsets[0].targets[0].name, "pod-a");
        assert_eq!(subsets[0].ports[0].render(), "80/TCP/http");
    }

    #[test]
    fn test_ingress_summary() {
        let ingress = object(json!({
            "apiVersion": "networking.k8s.io/v1",
            "kind": "Ingress",
            "metadata": {"name": "ing-a"},
            "spec": {"rules": [{
                "http": {"paths": [{
                    "path": "/api",
                    "pathType": "Prefix",
                    "backend": {"service": {"name": "svc-a", "port": {"number": 80}}}
                }]}
            }]}
        }));
        let summary = summarize(&ingress, "Ingress").unwrap();
        let ObjectDetail::Ingress { rules } = summary.detail else {
            panic!("expected ingress detail");
        };
        assert_eq!(rules[0].paths[0].path, "/api");
        assert_eq!(rules[0].paths[0].service.as_deref(), Some("svc-a"));
        assert_eq!(rules[0].paths[0].resource, None);
    }

    #[test]
    fn test_pod_summary_with_owner_and_volumes() {
        let pod = object(json!({
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": {
                "name": "pod-a",
                "ownerReferences": [{
                    "apiVersion": "apps/v1",
                    "kind": "ReplicaSet",
                    "name": "rs-a",
                    "uid": "1234",
                    "controller": true
                }]
            },
            "spec": {
                "containers": [],
                "volumes": [
                    {"name": "cfg", "configMap": {"name": "cm-a"}},
                    {"name": "creds", "secret": {"secretName": "sec-a"}},
                    {"name": "data", "persistentVolumeClaim": {"claimName": "pvc-a"}},
                    {"name": "scratch", "emptyDir": {}}
                ]
            }
        }));
        let summary = summarize(&pod, "Pod").unwrap();
        assert_eq!(summary.owners.len(), 1);
        assert!(summary.owners[0].controller);
        assert_eq!(summary.owners[0].kind, "ReplicaSet");
        assert_eq!(
            summary.detail,
            ObjectDetail::Pod {
                volumes: vec![
                    VolumeSource::ConfigMap("cm-a".to_string()),
                    VolumeSource::Secret("sec-a".to_string()),
                    VolumeSource::PersistentVolumeClaim("pvc-a".to_string()),
                ]
            }
        );
    }

    #[test]
    fn test_fallback_kind_used_without_type_metadata() {
        let pod = object(json!({"metadata": {"name": "pod-a"}}));
        let summary = summarize(&pod, "Pod").unwrap();
        assert_eq!(summary.kind, "Pod");
        assert_eq!(summary.detail, ObjectDetail::Pod { volumes: vec![] });
    }

    #[test]
    fn test_unknown_kind_has_no_detail() {
        let deployment = object(json!({
            "apiVersion": "apps/v1",
            "kind": "Deployment",
            "metadata": {"name": "dep-a"},
            "spec": {"replicas": 3}
        }));
        let summary = summarize(&deployment, "Deployment").unwrap();
        assert_eq!(summary.detail, ObjectDetail::Other);
    }

    #[test]
    fn test_object_without_name_is_convert_error() {
        let nameless = object(json!({"metadata": {}}));
        let err = summarize(&nameless, "Pod").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConvertFailed);
    }
}
