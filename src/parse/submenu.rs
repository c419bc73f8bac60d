/// Weekly-menu header that some sites repeat inside the daily listing.
pub const BOILERPLATE: &str = "Lounas maanantaista perjantaihin";

/// Slices out the blocks from the first one mentioning `start` up to, but not
/// including, the next one mentioning `end`. Both markers match
/// case-insensitively. Empty blocks and the weekly boilerplate line are
/// skipped, and a block equal to the one just collected is dropped.
///
/// Finding nothing is not an error: the result is simply empty.
pub fn submenu<S: AsRef<str>>(blocks: &[S], start: &str, end: &str) -> Vec<String> {
    let start = start.to_lowercase();
    let end = end.to_lowercase();
    let mut out: Vec<String> = vec![];
    let mut started = false;
    for block in blocks {
        let block = block.as_ref();
        if block.is_empty() || block.contains(BOILERPLATE) {
            continue;
        }
        let lower = block.to_lowercase();
        if !started {
            if !lower.contains(&start) {
                continue;
            }
            started = true;
        } else if lower.contains(&end) {
            break;
        }
        if out.last().map_or(true, |last| last != block) {
            out.push(block.to_owned());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_between_markers() {
        let blocks = ["intro", "MONDAY: soup", "TUESDAY: salad"];
        assert_eq!(submenu(&blocks, "monday", "tuesday"), vec!["MONDAY: soup"]);
    }

    #[test]
    fn test_slice_runs_to_the_end_without_end_marker() {
        let blocks = ["Perjantai", "Kalakeitto", "Pulla"];
        assert_eq!(
            submenu(&blocks, "perjantai", "maanantai"),
            vec!["Perjantai", "Kalakeitto", "Pulla"]
        );
    }

    #[test]
    fn test_no_start_marker_is_empty() {
        let blocks = ["Tiistai", "Kana"];
        assert!(submenu(&blocks, "maanantai", "tiistai").is_empty());
        let none: [&str; 0] = [];
        assert!(submenu(&none, "maanantai", "tiistai").is_empty());
    }

    #[test]
    fn test_consecutive_duplicates_collapse() {
        let blocks = ["Maanantai", "Keitto", "Keitto", "Salaatti", "Keitto", "Tiistai"];
        assert_eq!(
            submenu(&blocks, "maanantai", "tiistai"),
            vec!["Maanantai", "Keitto", "Salaatti", "Keitto"]
        );
    }

    #[test]
    fn test_boilerplate_is_always_skipped() {
        let blocks = [
            "Lounas maanantaista perjantaihin klo 11-14",
            "Maanantai",
            "Lohi",
            "Lounas maanantaista perjantaihin, tiistaina myös",
            "Pasta",
            "Tiistai",
        ];
        assert_eq!(
            submenu(&blocks, "maanantai", "tiistai"),
            vec!["Maanantai", "Lohi", "Pasta"]
        );
    }

    #[test]
    fn test_empty_blocks_are_ignored() {
        let blocks = ["", "Keskiviikko", "", "Broileri", "Torstai"];
        assert_eq!(
            submenu(&blocks, "keskiviikko", "torstai"),
            vec!["Keskiviikko", "Broileri"]
        );
    }

    #[test]
    fn test_start_block_mentioning_end_is_kept() {
        let blocks = ["Viikon burgerit (maanantai-perjantai)", "Halloumi", "Maanantai"];
        assert_eq!(
            submenu(&blocks, "viikon burgerit", "maanantai"),
            vec!["Viikon burgerit (maanantai-perjantai)", "Halloumi"]
        );
    }

    #[test]
    fn test_idempotent() {
        let blocks: Vec<String> = ["x", "Torstai", "Hernekeitto", "Perjantai"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let first = submenu(&blocks, "torstai", "perjantai");
        let second = submenu(&blocks, "torstai", "perjantai");
        assert_eq!(first, second);
        assert_eq!(first, vec!["Torstai", "Hernekeitto"]);
    }
}
