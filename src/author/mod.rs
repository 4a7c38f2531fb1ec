/*! Authors

An author file yields one [AuthorRecord]: metadata decoded from the filename,
the age bucket and the partition it has been assigned to.
!*/
mod label;
mod metadata;

pub use label::AgeBucket;
pub use metadata::AuthorMetadata;

use crate::processing::split::Partition;

/// Per-file record. Label and partition are computed once and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    metadata: AuthorMetadata,
    label: AgeBucket,
    partition: Partition,
}

impl AuthorRecord {
    pub fn new(metadata: AuthorMetadata, partition: Partition) -> Self {
        let label = AgeBucket::from_age(metadata.age);
        Self {
            metadata,
            label,
            partition,
        }
    }

    pub fn id(&self) -> u64 {
        self.metadata.id
    }

    pub fn label(&self) -> AgeBucket {
        self.label
    }

    pub fn partition(&self) -> Partition {
        self.partition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_from_age() {
        let m = AuthorMetadata::from_filename("101.male.25.tech.Leo.xml").unwrap();
        let r = AuthorRecord::new(m, Partition::Validation);
        assert_eq!(r.id(), 101);
        assert_eq!(r.label(), AgeBucket::Twenties);
        assert_eq!(r.partition(), Partition::Validation);
    }
}
