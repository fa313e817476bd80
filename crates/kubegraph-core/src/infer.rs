//! Per-kind relationship inference rules.
//!
//! Each rule maps one object summary to zero or more candidate connections
//! toward other named, kinded objects. The rule set is closed: kinds without
//! a rule contribute nothing here (their ownership edge is tracked during
//! population). Adding a kind means adding one `ObjectDetail` variant and
//! one arm below; scaffold and resolution logic stay untouched.

use crate::key::NodeKey;
use crate::model::Connection;
use crate::object::{
    EndpointSubset, HttpRule, ObjectDetail, ObjectSummary, PortSpec, VolumeSource, ENDPOINTS, POD,
    SERVICE,
};

/// Join declared ports as `port/protocol/name` lines.
///
/// Two ports named `api` (8080/TCP) and `metrics` (3001/TCP) become:
/// `8080/TCP/api\n3001/TCP/metrics`. No ports yields the empty string, which
/// in turn yields an unlabeled connection.
fn port_label(ports: &[PortSpec]) -> String {
    ports
        .iter()
        .map(PortSpec::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Candidate connections inferred from one object.
pub fn connections_for(object: &ObjectSummary) -> Vec<Connection> {
    let key = NodeKey::new(&object.kind, &object.name);
    match &object.detail {
        ObjectDetail::Service { ports } => service_connections(&key, ports),
        ObjectDetail::Endpoints { subsets } => endpoints_connections(&key, subsets),
        ObjectDetail::Ingress { rules } => ingress_connections(&key, rules),
        ObjectDetail::Pod { volumes } => pod_connections(&key, volumes),
        ObjectDetail::Other => Vec::new(),
    }
}

/// A Service connects to the Endpoints object of the same name, labeled with
/// every declared port.
fn service_connections(key: &NodeKey, ports: &[PortSpec]) -> Vec<Connection> {
    let destination = NodeKey::new(ENDPOINTS, key.name());
    vec![Connection::new(key.clone(), destination).with_label(port_label(ports))]
}

/// An Endpoints object connects to every Pod targeted by a subset address,
/// labeled with that subset's ports.
fn endpoints_connections(key: &NodeKey, subsets: &[EndpointSubset]) -> Vec<Connection> {
    let mut connections = Vec::new();
    for subset in subsets {
        let label = port_label(&subset.ports);
        for target in &subset.targets {
            if target.kind != POD {
                continue;
            }
            connections.push(
                Connection::new(key.clone(), NodeKey::new(POD, &target.name))
                    .with_label(label.clone()),
            );
        }
    }
    connections
}

/// An Ingress connects to the Service behind each HTTP path, labeled with the
/// path string. A typed resource backend of kind Service wins over a direct
/// service backend; paths with neither are skipped.
fn ingress_connections(key: &NodeKey, rules: &[HttpRule]) -> Vec<Connection> {
    let mut connections = Vec::new();
    for rule in rules {
        for path in &rule.paths {
            let service_name = match (&path.resource, &path.service) {
                (Some(resource), _) if resource.kind == SERVICE => resource.name.clone(),
                (_, Some(service)) => service.clone(),
                _ => continue,
            };
            connections.push(
                Connection::new(key.clone(), NodeKey::new(SERVICE, service_name))
                    .with_label(path.path.clone()),
            );
        }
    }
    connections
}

/// Each recognized volume source connects *to* the Pod that mounts it: the
/// dependency points at its consumer.
fn pod_connections(key: &NodeKey, volumes: &[VolumeSource]) -> Vec<Connection> {
    volumes
        .iter()
        .map(|volume| {
            let referenced = volume.object_ref();
            Connection::new(NodeKey::new(referenced.kind, referenced.name), key.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{HttpPath, ObjectRef};

    fn port(port: i32, name: &str) -> PortSpec {
        PortSpec {
            port,
            protocol: "TCP".to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_service_connects_to_endpoints_of_same_name() {
        let service = ObjectSummary::new("Service", "svc-a").with_detail(ObjectDetail::Service {
            ports: vec![port(8080, "api"), port(3001, "metrics")],
        });
        let connections = connections_for(&service);
        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].source, NodeKey::new("Service", "svc-a"));
        assert_eq!(connections[0].destination, NodeKey::new("Endpoints", "svc-a"));
        assert_eq!(
            connections[0].label.as_deref(),
            Some("8080/TCP/api\n3001/TCP/metrics")
        );
    }

    #[test]
    fn test_service_without_ports_is_unlabeled() {
        let service =
            ObjectSummary::new("Service", "svc-a").with_detail(ObjectDetail::Service { ports: vec![] });
        let connections = connections_for(&service);
        assert_eq!(connections[0].label, None);
    }

    #[test]
    fn test_endpoints_connect_to_pod_targets_only() {
        let endpoints = ObjectSummary::new("Endpoints", "svc-a").with_detail(ObjectDetail::Endpoints {
            subsets: vec![EndpointSubset {
                targets: vec![
                    ObjectRef {
                        kind: "Pod".to_string(),
                        name: "pod-a".to_string(),
                    },
                    ObjectRef {
                        kind: "Node".to_string(),
                        name: "worker-1".to_string(),
                    },
                ],
                ports: vec![port(80, "http")],
            }],
        });
        let connections = connections_for(&endpoints);
        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].destination, NodeKey::new("Pod", "pod-a"));
        assert_eq!(connections[0].label.as_deref(), Some("80/TCP/http"));
    }

    #[test]
    fn test_ingress_prefers_typed_service_backend() {
        let ingress = ObjectSummary::new("Ingress", "ing-a").with_detail(ObjectDetail::Ingress {
            rules: vec![HttpRule {
                paths: vec![
                    HttpPath {
                        path: "/api".to_string(),
                        resource: Some(ObjectRef {
                            kind: "Service".to_string(),
                            name: "svc-typed".to_string(),
                        }),
                        service: Some("svc-direct".to_string()),
                    },
                    HttpPath {
                        path: "/web".to_string(),
                        resource: None,
                        service: Some("svc-direct".to_string()),
                    },
                    // Neither backend resolves: skipped.
                    HttpPath {
                        path: "/none".to_string(),
                        resource: Some(ObjectRef {
                            kind: "Bucket".to_string(),
                            name: "blob".to_string(),
                        }),
                        service: None,
                    },
                ],
            }],
        });
        let connections = connections_for(&ingress);
        assert_eq!(connections.len(), 2);
        assert_eq!(connections[0].destination, NodeKey::new("Service", "svc-typed"));
        assert_eq!(connections[0].label.as_deref(), Some("/api"));
        assert_eq!(connections[1].destination, NodeKey::new("Service", "svc-direct"));
    }

    #[test]
    fn test_pod_volume_edges_are_reversed() {
        let pod = ObjectSummary::new("Pod", "pod-a").with_detail(ObjectDetail::Pod {
            volumes: vec![
                VolumeSource::ConfigMap("cm-a".to_string()),
                VolumeSource::Secret("sec-a".to_string()),
                VolumeSource::PersistentVolumeClaim("pvc-a".to_string()),
            ],
        });
        let connections = connections_for(&pod);
        assert_eq!(connections.len(), 3);
        for connection in &connections {
            assert_eq!(connection.destination, NodeKey::new("Pod", "pod-a"));
            assert_eq!(connection.label, None);
        }
        assert_eq!(connections[0].source, NodeKey::new("ConfigMap", "cm-a"));
        assert_eq!(connections[1].source, NodeKey::new("Secret", "sec-a"));
        assert_eq!(
            connections[2].source,
            NodeKey::new("PersistentVolumeClaim", "pvc-a")
        );
    }

    #[test]
    fn test_unrecognized_kind_yields_nothing() {
        let deployment = ObjectSummary::new("Deployment", "dep-a");
        assert!(connections_for(&deployment).is_empty());
    }
}
