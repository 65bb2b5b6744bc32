/// Extension (without the dot) of the guide reports picked up from the input directory.
pub const REPORT_EXTENSION: &str = "tsv";

/// Most guides written per gene.
pub const MAX_GUIDES_PER_GENE: usize = 5;

/// Character repeated under each gene name.
pub const UNDERLINE_CHAR: char = '=';

/// Message shown next to the progress bar.
pub const PROGRESS_MESSAGE: &str = "Processing genes";

/// Template of the progress bar.
pub const PROGRESS_TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}";
