//! Markdown rendering for the coverage report
//!
//! Produces the `coverage.md` document: a title, a bold count summary, and
//! one bullet per supported instruction in ascending lexicographic order.
//! The document is fully derived from its input and regenerated from
//! scratch on every run.

/// Renders the coverage report for a set of supported instruction names.
///
/// The summary count always equals the number of bullet lines. Input order
/// does not matter; the listing is sorted case-sensitively ascending.
pub fn render_coverage(supported: &[String]) -> String {
    let mut sorted: Vec<&str> = supported.iter().map(String::as_str).collect();
    sorted.sort();

    let mut content = String::from("# AVX512 Instruction Coverage\n\n");
    content.push_str(&format!(
        "Currently supported: **{}** instructions\n\n",
        sorted.len()
    ));
    content.push_str("## Supported Instructions\n\n");

    for instr in sorted {
        content.push_str(&format!("- {}\n", instr));
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn bullet_lines(report: &str) -> Vec<&str> {
        report
            .lines()
            .filter(|l| l.starts_with("- "))
            .collect()
    }

    #[test]
    fn count_matches_bullet_lines() {
        let supported = names(&[
            "OP_AVX512_VMULPD",
            "OP_AVX512_VADDPD",
            "OP_AVX512_VSUBPD",
        ]);
        let report = render_coverage(&supported);

        assert!(report.contains("Currently supported: **3** instructions"));
        assert_eq!(bullet_lines(&report).len(), 3);
    }

    #[test]
    fn bullets_are_sorted_ascending() {
        let supported = names(&[
            "OP_AVX512_VSUBPD",
            "OP_AVX512_VADDPD",
            "OP_AVX512_VMULPD",
        ]);
        let report = render_coverage(&supported);
        let bullets = bullet_lines(&report);

        assert_eq!(
            bullets,
            vec![
                "- OP_AVX512_VADDPD",
                "- OP_AVX512_VMULPD",
                "- OP_AVX512_VSUBPD",
            ]
        );
        for pair in bullets.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn empty_set_renders_zero_count_and_no_bullets() {
        let report = render_coverage(&[]);

        assert!(report.starts_with("# AVX512 Instruction Coverage\n"));
        assert!(report.contains("Currently supported: **0** instructions"));
        assert!(report.contains("## Supported Instructions"));
        assert!(bullet_lines(&report).is_empty());
    }

    #[test]
    fn document_structure_is_stable() {
        let report = render_coverage(&names(&["OP_AVX512_VADDPD"]));

        assert_eq!(
            report,
            "# AVX512 Instruction Coverage\n\n\
             Currently supported: **1** instructions\n\n\
             ## Supported Instructions\n\n\
             - OP_AVX512_VADDPD\n"
        );
    }

    #[test]
    fn duplicates_render_as_separate_bullets() {
        let supported = names(&["OP_AVX512_VADDPD", "OP_AVX512_VADDPD"]);
        let report = render_coverage(&supported);

        assert!(report.contains("**2** instructions"));
        assert_eq!(bullet_lines(&report).len(), 2);
    }

    #[test]
    fn rendering_is_deterministic() {
        let supported = names(&["OP_AVX512_VSUBPD", "OP_AVX512_VADDPD"]);
        assert_eq!(render_coverage(&supported), render_coverage(&supported));
    }
}
