//! Bibliographic citation for the source description

/// Series title used in every citation.
pub const SERIES: &str = "Der neue Pitaval";

/// Place of publication of the series.
pub const PLACE: &str = "Leipzig";

/// Build `"<Title>. In: Der neue Pitaval, Bd. <volume>. Leipzig, <year>."`.
///
/// A period is appended to the title only if it does not already end in one.
pub fn build_citation(title: &str, volume: u32, year: u32) -> String {
    let separator = if title.ends_with('.') { "" } else { "." };
    format!(
        "{}{} In: {}, Bd. {}. {}, {}.",
        title, separator, SERIES, volume, PLACE, year
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_with_period() {
        assert_eq!(
            build_citation("A short title.", 5, 1845),
            "A short title. In: Der neue Pitaval, Bd. 5. Leipzig, 1845."
        );
    }

    #[test]
    fn title_without_period_gets_one() {
        assert_eq!(
            build_citation("Der Fall Fualdès", 31, 1861),
            "Der Fall Fualdès. In: Der neue Pitaval, Bd. 31. Leipzig, 1861."
        );
    }
}
