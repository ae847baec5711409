//! Fixed-width line layout for 32-column receipts.
//!
//! Widths are counted in characters (Unicode scalar values), which is what a
//! single-width printer font advances by.

/// Printable columns at 1x text size.
pub const LINE_WIDTH: usize = 32;

/// Columns reserved for an item name.
pub const ITEM_NAME_WIDTH: usize = 20;

const ELLIPSIS: &str = "...";

/// Literal gap between the unit price and the line total on an item line.
/// The item line is not justified to [`LINE_WIDTH`] the way total lines are.
const ITEM_AMOUNT_GAP: &str = "      ";

/// A full-width rule of `ch`, without newline.
pub fn rule(ch: char) -> String {
    std::iter::repeat_n(ch, LINE_WIDTH).collect()
}

/// Fit an item name to exactly [`ITEM_NAME_WIDTH`] columns.
///
/// Longer names keep their first 17 characters plus `...`; shorter ones are
/// right-padded with spaces.
pub fn fit_item_name(name: &str) -> String {
    let len = name.chars().count();
    if len > ITEM_NAME_WIDTH {
        let keep = ITEM_NAME_WIDTH - ELLIPSIS.len();
        let mut out: String = name.chars().take(keep).collect();
        out.push_str(ELLIPSIS);
        out
    } else {
        let mut out = String::from(name);
        out.extend(std::iter::repeat_n(' ', ITEM_NAME_WIDTH - len));
        out
    }
}

/// Two-line item block, newline terminated:
///
/// ```text
/// Kopi
///   2x @ Rp 15.000      Rp 30.000
/// ```
pub fn item_block(name: &str, quantity: u32, unit_price: &str, line_total: &str) -> String {
    format!(
        "{}\n  {}x @ {}{}{}\n",
        fit_item_name(name),
        quantity,
        unit_price,
        ITEM_AMOUNT_GAP,
        line_total
    )
}

/// Label left, amount right, newline terminated.
///
/// The gap is `LINE_WIDTH - len(label) - len(amount)` spaces, never fewer
/// than one, so an oversized pair overflows the line instead of touching.
pub fn total_line(label: &str, amount: &str) -> String {
    let used = label.chars().count() + amount.chars().count();
    let gap = LINE_WIDTH.saturating_sub(used).max(1);
    format!("{}{}{}\n", label, " ".repeat(gap), amount)
}
