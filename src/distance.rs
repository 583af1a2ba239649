use crate::merchant::Merchant;

/// Sums the distances from every merchant in `merchants` to `chosen`.
///
/// Merchants with the same name as `chosen` are skipped, other merchants sharing its location
/// still count (with distance zero).
pub fn total_distance(chosen: &Merchant, merchants: &[Merchant]) -> u128 {
    merchants
        .iter()
        .filter(|m| m.name() != chosen.name())
        .map(|m| u128::from(chosen.location().abs_diff(m.location())))
        .sum()
}

/// Sums the distances from every merchant in `merchants` to `location`.
pub fn distance_to(location: i64, merchants: &[Merchant]) -> u128 {
    merchants
        .iter()
        .map(|m| u128::from(location.abs_diff(m.location())))
        .sum()
}
