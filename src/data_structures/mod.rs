pub mod bucket_index;
pub mod priority_queue;

pub use bucket_index::BucketIndex;
pub use priority_queue::MinLengthQueue;
