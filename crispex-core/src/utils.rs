use std::path::Path;

use crate::consts::{FIELD_DELIMITER, LABEL_SUFFIX_LEN};

///
/// Split one report line into its tab separated columns.
///
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_DELIMITER).collect()
}

///
/// Shorten a guide sequence to its display label by dropping the last three
/// characters (the PAM). Values of three characters or fewer are kept as is.
///
pub fn truncate_label(value: &str) -> &str {
    let len = value.chars().count();
    if len <= LABEL_SUFFIX_LEN {
        return value;
    }

    match value.char_indices().nth(len - LABEL_SUFFIX_LEN) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

///
/// Gene name a report file stands for: its file name with the last extension
/// removed, case preserved.
///
/// # Returns
/// - `None` if the path has no file name
///
pub fn gene_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::path::PathBuf;

    #[rstest]
    #[case("ACGTCCC", "ACGT")]
    #[case("AT", "AT")]
    #[case("ACG", "ACG")]
    #[case("ACGT", "A")]
    #[case("", "")]
    #[case("ÅCGTNGG", "ÅCGT")]
    fn test_truncate_label(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(truncate_label(input), expected);
    }

    #[rstest]
    #[case("reports/rx3.tsv", "rx3")]
    #[case("reports/Pax6a.tsv", "Pax6a")]
    #[case("si:ch211-1.tsv", "si:ch211-1")]
    #[case("reports/gene.v2.tsv", "gene.v2")]
    fn test_gene_name_from_path(#[case] path: &str, #[case] expected: &str) {
        let path = PathBuf::from(path);
        assert_eq!(gene_name_from_path(&path).unwrap(), expected);
    }

    #[rstest]
    fn test_split_fields_keeps_empty_columns() {
        assert_eq!(split_fields("a\t\tc"), vec!["a", "", "c"]);
    }
}
