use crate::cards::Rank;

/// Best straight among a set of ranks, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Find the highest run of five consecutive distinct ranks. The wheel
    /// (A-2-3-4-5, top rank Five) is only used when no higher run exists.
    pub fn detect<I: IntoIterator<Item = Rank>>(ranks: I) -> Self {
        let mut present = 0u16;
        for r in ranks {
            present |= 1 << r.value();
        }
        let run = |top: u8| (top - 4..=top).all(|v| present & (1 << v) != 0);

        let top = (6..=14u8).rev().find(|&top| run(top));
        let top_rank = match top {
            Some(v) => Rank::from_value(v),
            None => {
                let wheel = [14u8, 2, 3, 4, 5].iter().all(|v| present & (1 << v) != 0);
                wheel.then_some(Rank::Five)
            }
        };
        StraightInfo { top_rank }
    }

    #[cfg(test)]
    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}
