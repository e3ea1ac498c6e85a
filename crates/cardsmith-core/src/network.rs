use std::sync::OnceLock;

use regex::Regex;

use crate::types::Network;

/// Prefix/length shapes in evaluation order. Regional debit prefixes come
/// before the broad leading-digit networks and must stay there: a number
/// such as `4508...` is an Electron card even though it also fits Visa.
const NETWORK_PATTERNS: &[(&str, Network)] = &[
    (r"^(4026|417500|4405|4508|4844|4913|4917)\d+$", Network::Electron),
    (
        r"^(5018|5020|5038|5612|5893|6304|6759|6761|6762|6763|0604|6390)\d+$",
        Network::Maestro,
    ),
    (r"^(5019)\d+$", Network::Dankort),
    (r"^(636)\d+$", Network::InterPayment),
    (r"^(62|88)\d+$", Network::UnionPay),
    (r"^4[0-9]{12}(?:[0-9]{3})?$", Network::Visa),
    (r"^5[1-5][0-9]{14}$", Network::Mastercard),
    (r"^3[47][0-9]{13}$", Network::Amex),
    (r"^3(?:0[0-5]|[68][0-9])[0-9]{11}$", Network::Diners),
    (r"^6(?:011|5[0-9]{2})[0-9]{12}$", Network::Discover),
    (r"^(?:2131|1800|35\d{3})\d{11}$", Network::Jcb),
];

/// Compiled `(pattern, network)` pair.
#[derive(Debug)]
pub struct NetworkPattern {
    pub pattern: Regex,
    pub network: Network,
}

/// The classification table, compiled once, in declared order.
pub fn network_table() -> &'static [NetworkPattern] {
    static TABLE: OnceLock<Vec<NetworkPattern>> = OnceLock::new();
    TABLE.get_or_init(|| {
        NETWORK_PATTERNS
            .iter()
            .filter_map(|(pattern, network)| {
                Regex::new(pattern).ok().map(|pattern| NetworkPattern {
                    pattern,
                    network: *network,
                })
            })
            .collect()
    })
}

/// Classifies a digit string; the first matching pattern wins and anything
/// unmatched (including non-digit or empty input) is [`Network::Unknown`].
pub fn classify(digits: &str) -> Network {
    network_table()
        .iter()
        .find(|entry| entry.pattern.is_match(digits))
        .map(|entry| entry.network)
        .unwrap_or(Network::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_compiles() {
        assert_eq!(network_table().len(), NETWORK_PATTERNS.len());
    }
}
