//! Object summaries consumed by the graph engine.
//!
//! A summary is the projection of one listed Kubernetes object down to the
//! fields the engine needs: identity, owner references, and the kind-specific
//! relationship fields carried by [`ObjectDetail`]. Summaries are produced by
//! the cluster-facing caller and are read-only here.

/// Kind names the inference rules know about.
pub const CONFIG_MAP: &str = "ConfigMap";
pub const ENDPOINTS: &str = "Endpoints";
pub const INGRESS: &str = "Ingress";
pub const PERSISTENT_VOLUME_CLAIM: &str = "PersistentVolumeClaim";
pub const POD: &str = "Pod";
pub const SECRET: &str = "Secret";
pub const SERVICE: &str = "Service";

/// One owner reference on an object, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerRef {
    pub name: String,
    pub kind: String,
    /// True for the authoritative controlling owner.
    pub controller: bool,
}

/// A declared service or endpoint port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSpec {
    pub port: i32,
    pub protocol: String,
    pub name: String,
}

impl PortSpec {
    /// Render as `port/protocol/name`, e.g. `8080/TCP/api`.
    pub fn render(&self) -> String {
        format!("{}/{}/{}", self.port, self.protocol, self.name)
    }
}

/// A reference to another object by kind and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub kind: String,
    pub name: String,
}

/// One Endpoints subset: address target references plus subset ports.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EndpointSubset {
    /// Target references of the subset addresses. Addresses without a target
    /// reference are dropped at conversion time.
    pub targets: Vec<ObjectRef>,
    pub ports: Vec<PortSpec>,
}

/// One HTTP path of an Ingress rule, with its possible backends.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpPath {
    pub path: String,
    /// Typed resource backend, if declared.
    pub resource: Option<ObjectRef>,
    /// Direct service backend name, if declared.
    pub service: Option<String>,
}

/// One Ingress rule carrying an HTTP value. Rules without an HTTP value are
/// dropped at conversion time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpRule {
    pub paths: Vec<HttpPath>,
}

/// A recognized pod volume source. Volumes backed by anything else are
/// dropped at conversion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VolumeSource {
    ConfigMap(String),
    Secret(String),
    PersistentVolumeClaim(String),
}

impl VolumeSource {
    /// The kind and name of the referenced object.
    pub fn object_ref(&self) -> ObjectRef {
        let (kind, name) = match self {
            VolumeSource::ConfigMap(name) => (CONFIG_MAP, name),
            VolumeSource::Secret(name) => (SECRET, name),
            VolumeSource::PersistentVolumeClaim(name) => (PERSISTENT_VOLUME_CLAIM, name),
        };
        ObjectRef {
            kind: kind.to_string(),
            name: name.clone(),
        }
    }
}

/// Kind-specific relationship fields.
///
/// This tagged variant is the dispatch point for the inference rules: adding
/// a kind means adding one variant here and one arm in
/// [`crate::infer::connections_for`]. Kinds without inference rules use
/// [`ObjectDetail::Other`] and still get their ownership edge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ObjectDetail {
    Service {
        ports: Vec<PortSpec>,
    },
    Endpoints {
        subsets: Vec<EndpointSubset>,
    },
    Ingress {
        rules: Vec<HttpRule>,
    },
    Pod {
        volumes: Vec<VolumeSource>,
    },
    #[default]
    Other,
}

/// The projection of one listed object consumed by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    pub name: String,
    pub kind: String,
    /// Owner references in declaration order.
    pub owners: Vec<OwnerRef>,
    pub detail: ObjectDetail,
}

impl ObjectSummary {
    /// A summary with no owners and no kind-specific detail.
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            owners: Vec::new(),
            detail: ObjectDetail::Other,
        }
    }

    pub fn with_owner(mut self, owner: OwnerRef) -> Self {
        self.owners.push(owner);
        self
    }

    pub fn with_detail(mut self, detail: ObjectDetail) -> Self {
        self.detail = detail;
        self
    }
}
