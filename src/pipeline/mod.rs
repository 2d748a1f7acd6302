// Pipelines that drive the classifier over many comments at once.

pub mod batch;
