//! Column repair for positional stat rows.
//!
//! When a box-score row is read as a whitespace-delimited token stream, the
//! source omits a shooting-percentage column entirely whenever the matching
//! attempt count is zero (0 field-goal attempts means no field-goal
//! percentage token, not an empty one). Some historical pages also omit the
//! trailing plus/minus column. Both cases leave the row short relative to the
//! header, shifting every later stat into the wrong column.
//!
//! Repair is keyed by column name, not by hard-coded offsets: each optional
//! stat group names its attempts column and its percentage column, and a
//! placeholder is inserted where the percentage would have been. The
//! zero-attempt check is authoritative; the exact-one-column deficit check
//! only covers the plus/minus fallback, since layouts of older pages vary.

/// An attempts column whose paired percentage column disappears when the
/// attempts are zero.
struct StatGroup {
    attempts: &'static str,
    percentage: &'static str,
}

/// The three shooting groups of the basic box score, in column order.
const SHOOTING_GROUPS: &[StatGroup] = &[
    StatGroup {
        attempts: "fga",
        percentage: "fg_pct",
    },
    StatGroup {
        attempts: "fg3a",
        percentage: "fg3_pct",
    },
    StatGroup {
        attempts: "fta",
        percentage: "ft_pct",
    },
];

/// Align a row's tokens with the table's column keys, inserting empty
/// placeholders for omitted columns. Applied independently per row, since
/// players in the same game differ in which attempt counts are zero.
pub(crate) fn align_tokens(columns: &[String], mut tokens: Vec<String>) -> Vec<String> {
    let position = |key: &str| columns.iter().position(|c| c.as_str() == key);

    for group in SHOOTING_GROUPS {
        if tokens.len() >= columns.len() {
            break;
        }
        let (Some(attempts_pos), Some(percentage_pos)) =
            (position(group.attempts), position(group.percentage))
        else {
            continue;
        };
        // Once earlier groups are repaired, token positions up to this group
        // line up with column positions again.
        if tokens.get(attempts_pos).is_some_and(|t| t.as_str() == "0") {
            tokens.insert(percentage_pos, String::new());
        }
    }

    // Missing plus/minus on certain historical games: short by exactly one
    // after all percentage repairs.
    if columns.len() == tokens.len() + 1 {
        tokens.push(String::new());
    }

    tokens
}
