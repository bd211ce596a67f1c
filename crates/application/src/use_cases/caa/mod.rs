pub mod merge_apex;

pub use merge_apex::MergeApexCaaUseCase;
