/*!
# IO utilities

Checkpoint saving and loading.

Both tables are stored as csv files in a single directory.
!*/
mod checkpoint;

pub use checkpoint::{CheckpointStore, COLLOCATIONS_FILE, VOCABULARY_FILE};
