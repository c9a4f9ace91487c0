//! Four-way disjoint partition of a classified corpus
//!
//! Every document is moved into exactly the bucket its flags select, so the
//! buckets cannot overlap and always sum to the corpus size.

use super::document::{Bucket, Document};

#[derive(Debug, Clone, Default)]
pub struct Partition {
    dictionary: Vec<Document>,
    acronym: Vec<Document>,
    fuzzy: Vec<Document>,
    unflagged: Vec<Document>,
}

impl Partition {
    /// Partition documents, keeping input order inside each bucket
    pub fn new(documents: impl IntoIterator<Item = Document>) -> Self {
        let mut partition = Self::default();
        for doc in documents {
            partition.bucket_mut(doc.bucket()).push(doc);
        }
        partition
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<Document> {
        match bucket {
            Bucket::Dictionary => &mut self.dictionary,
            Bucket::Acronym => &mut self.acronym,
            Bucket::Fuzzy => &mut self.fuzzy,
            Bucket::Unflagged => &mut self.unflagged,
        }
    }

    /// Documents of one bucket
    pub fn get(&self, bucket: Bucket) -> &[Document] {
        match bucket {
            Bucket::Dictionary => &self.dictionary,
            Bucket::Acronym => &self.acronym,
            Bucket::Fuzzy => &self.fuzzy,
            Bucket::Unflagged => &self.unflagged,
        }
    }

    /// `(bucket, documents)` pairs in priority order
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &[Document])> {
        Bucket::ALL.into_iter().map(move |b| (b, self.get(b)))
    }

    /// Bucket sizes in priority order
    pub fn sizes(&self) -> [usize; 4] {
        Bucket::ALL.map(|b| self.get(b).len())
    }

    /// Total number of documents
    pub fn len(&self) -> usize {
        self.sizes().iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
