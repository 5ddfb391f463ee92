use crate::cards::Rank;

/// Rank multiplicities of a hand, highest rank first.
///
/// Counts above four are possible when several decks are in play, so the
/// group queries use "at least" thresholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Build from a count array indexed by rank value (2..=14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let groups = Rank::ALL
            .iter()
            .rev()
            .filter_map(|&rank| {
                let count = rank_counts[rank.value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();
        Self { groups }
    }

    fn highest_with(&self, min_count: u8, exclude: &[Rank]) -> Option<Rank> {
        self.groups
            .iter()
            .find(|(rank, count)| *count >= min_count && !exclude.contains(rank))
            .map(|(rank, _)| *rank)
    }

    /// Highest rank held four or more times.
    pub fn quad(&self) -> Option<Rank> {
        self.highest_with(4, &[])
    }

    /// Highest rank held three or more times.
    pub fn trips(&self) -> Option<Rank> {
        self.highest_with(3, &[])
    }

    /// Trips rank and the best other rank held at least twice.
    pub fn full_house(&self) -> Option<(Rank, Rank)> {
        let trips = self.trips()?;
        let pair = self.highest_with(2, &[trips])?;
        Some((trips, pair))
    }

    /// Every rank held at least twice, descending.
    pub fn pairs(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count >= 2).map(|(rank, _)| *rank).collect()
    }

    /// Up to `n` distinct ranks not in `exclude`, descending. Kickers are
    /// ordered by rank alone, never by how often a rank appears.
    pub fn kickers(&self, exclude: &[Rank], n: usize) -> Vec<Rank> {
        self.groups
            .iter()
            .map(|(rank, _)| *rank)
            .filter(|rank| !exclude.contains(rank))
            .take(n)
            .collect()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
