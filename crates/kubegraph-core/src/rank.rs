//! Ranked resource descriptors and rank derivation.

use kubegraph_error::{Error, ErrorKind, Result};

/// One configured resource: a group/version/resource triple plus an optional
/// display rank. Ordering of the configured list is meaningful when no ranks
/// are assigned (see [`RankTable::from_descriptors`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// API group; empty for the core group.
    pub group: String,
    pub version: String,
    /// Plural resource name, e.g. `pods`. Also keys the node icon.
    pub resource: String,
    pub rank: Option<i64>,
}

impl ResourceDescriptor {
    /// Display form, `group/version/resource` (core group omitted).
    pub fn gvr(&self) -> String {
        if self.group.is_empty() {
            format!("{}/{}", self.version, self.resource)
        } else {
            format!("{}/{}/{}", self.group, self.version, self.resource)
        }
    }
}

/// A descriptor with its effective rank resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedResource {
    pub descriptor: ResourceDescriptor,
    pub rank: i64,
}

/// The derived rank layout: every configured resource with its effective
/// rank, plus the sorted set of distinct ranks.
#[derive(Debug, Clone)]
pub struct RankTable {
    ranks: Vec<i64>,
    resources: Vec<RankedResource>,
}

impl RankTable {
    /// Derive the rank table from the configured descriptor list.
    ///
    /// If no descriptor carries an explicit rank, each descriptor's position
    /// in the list becomes its rank, preserving first-listed-first-drawn
    /// ordering. Mixing explicit and missing ranks is rejected: the layout
    /// would be arbitrary for the unranked entries.
    pub fn from_descriptors(descriptors: &[ResourceDescriptor]) -> Result<Self> {
        if descriptors.is_empty() {
            return Err(Error::new(ErrorKind::ConfigInvalid, "no resources configured")
                .with_operation("rank::from_descriptors"));
        }

        let explicit = descriptors.iter().filter(|d| d.rank.is_some()).count();
        let resources: Vec<RankedResource> = if explicit == 0 {
            descriptors
                .iter()
                .enumerate()
                .map(|(position, descriptor)| RankedResource {
                    descriptor: descriptor.clone(),
                    rank: position as i64,
                })
                .collect()
        } else if explicit == descriptors.len() {
            descriptors
                .iter()
                .map(|descriptor| RankedResource {
                    descriptor: descriptor.clone(),
                    // Checked above: every descriptor carries a rank.
                    rank: descriptor.rank.unwrap_or_default(),
                })
                .collect()
        } else {
            return Err(Error::new(
                ErrorKind::ConfigInvalid,
                "resources mix explicit and missing ranks",
            )
            .with_operation("rank::from_descriptors")
            .with_context("explicit", explicit.to_string())
            .with_context("total", descriptors.len().to_string()));
        };

        let mut ranks: Vec<i64> = resources.iter().map(|r| r.rank).collect();
        ranks.sort_unstable();
        ranks.dedup();

        // A non-empty resource list must always yield at least one rank.
        if ranks.is_empty() {
            return Err(Error::new(ErrorKind::ConfigInvalid, "rank derivation produced no ranks")
                .with_operation("rank::from_descriptors"));
        }

        Ok(Self { ranks, resources })
    }

    /// Sorted distinct ranks, ascending.
    pub fn ranks(&self) -> &[i64] {
        &self.ranks
    }

    /// Every configured resource with its effective rank, in input order.
    pub fn resources(&self) -> &[RankedResource] {
        &self.resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubegraph_error::ErrorKind;

    fn descriptor(resource: &str, rank: Option<i64>) -> ResourceDescriptor {
        ResourceDescriptor {
            group: String::new(),
            version: "v1".to_string(),
            resource: resource.to_string(),
            rank,
        }
    }

    #[test]
    fn test_distinct_sorted_ranks() {
        let table = RankTable::from_descriptors(&[
            descriptor("pods", Some(2)),
            descriptor("services", Some(0)),
            descriptor("endpoints", Some(0)),
        ])
        .unwrap();
        assert_eq!(table.ranks(), &[0, 2]);
        assert_eq!(table.resources().len(), 3);
        assert_eq!(table.resources()[0].rank, 2);
    }

    #[test]
    fn test_positional_fallback_when_no_ranks() {
        let table = RankTable::from_descriptors(&[
            descriptor("services", None),
            descriptor("pods", None),
        ])
        .unwrap();
        assert_eq!(table.ranks(), &[0, 1]);
        assert_eq!(table.resources()[0].rank, 0);
        assert_eq!(table.resources()[1].rank, 1);
    }

    #[test]
    fn test_empty_configuration_rejected() {
        let err = RankTable::from_descriptors(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_mixed_ranks_rejected() {
        let err = RankTable::from_descriptors(&[
            descriptor("services", Some(0)),
            descriptor("pods", None),
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
