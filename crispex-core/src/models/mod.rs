pub mod exon;
pub mod guide;

// re-export for cleaner imports
pub use self::exon::{ExonInterval, GeneExonSet};
pub use self::guide::GuideRecord;
