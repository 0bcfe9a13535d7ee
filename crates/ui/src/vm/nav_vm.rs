/// One numbered jump button under a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipVm {
    pub index: usize,
    pub label: String,
    pub current: bool,
}

/// Jump buttons for `len` items with `current` highlighted.
#[must_use]
pub fn map_pips(len: usize, current: usize) -> Vec<PipVm> {
    (0..len)
        .map(|index| PipVm {
            index,
            label: (index + 1).to_string(),
            current: index == current,
        })
        .collect()
}

#[must_use]
pub fn progress_label(noun: &str, index: usize, len: usize) -> String {
    format!("{noun} {} of {len}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pips_are_one_based_with_current_marked() {
        let pips = map_pips(3, 1);
        let labels: Vec<_> = pips.iter().map(|pip| pip.label.as_str()).collect();
        assert_eq!(labels, ["1", "2", "3"]);
        assert_eq!(
            pips.iter().filter(|pip| pip.current).map(|pip| pip.index).collect::<Vec<_>>(),
            vec![1]
        );
    }

    #[test]
    fn progress_is_one_based() {
        assert_eq!(progress_label("Card", 0, 4), "Card 1 of 4");
    }
}
