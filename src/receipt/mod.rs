//! # Receipt Formatter
//!
//! Turns a [`ReceiptDocument`] into the complete, print-ordered intent
//! program for one ticket.
//!
//! ## Ticket Layout
//!
//! ```text
//!            TOKO BUDI            (centered, bold, 2x2)
//!         Jl. Merdeka 1           (centered)
//!
//! ================================
//!
//! Tanggal: 19/10/2026, 14.30.05
//! ID Transaksi: TRX-001
//!
//! --------------------------------
//! Kopi
//!   2x @ Rp 15.000      Rp 30.000
//! --------------------------------
//! Subtotal               Rp 30.000
//! TOTAL                  Rp 30.000   (bold)
//! --------------------------------
//! Metode Pembayaran: Cash
//!
//!
//!           Terima Kasih
//!     Silakan datang kembali!
//! ```
//!
//! The order of intents is significant: ESC/POS styles apply to whatever
//! text follows them, so the sequence is built strictly top to bottom.

mod document;
pub mod layout;

pub use document::{LineItem, ReceiptDocument};

use crate::ir::{PrintIntent, Program};
use crate::locale::{CurrencyFormatter, Locale, TimestampFormatter};
use crate::money::Money;
use crate::protocol::text::Alignment;

const DATE_LABEL: &str = "Tanggal";
const TRANSACTION_LABEL: &str = "ID Transaksi";
const SUBTOTAL_LABEL: &str = "Subtotal";
const DISCOUNT_LABEL: &str = "Diskon";
const TAX_LABEL: &str = "Pajak";
const TOTAL_LABEL: &str = "TOTAL";
const PAYMENT_LABEL: &str = "Metode Pembayaran";
const FOOTER: [&str; 2] = ["Terima Kasih", "Silakan datang kembali!"];

/// Lays out receipts using a currency/timestamp formatting backend.
#[derive(Debug, Clone, Default)]
pub struct ReceiptFormatter<L = Locale> {
    locale: L,
}

impl ReceiptFormatter<Locale> {
    /// Formatter for the default (id-ID) locale.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L> ReceiptFormatter<L> {
    pub fn with_locale(locale: L) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &L {
        &self.locale
    }
}

impl<L: CurrencyFormatter + TimestampFormatter> ReceiptFormatter<L> {
    /// Build the full intent sequence for `doc`.
    ///
    /// Pure: the same document always yields the same program.
    pub fn build_intent_sequence(&self, doc: &ReceiptDocument) -> Program {
        let money = |amount: Money| self.locale.format(amount, &doc.currency);
        let mut p = Program::with_init();

        // Header
        p.push(PrintIntent::SetAlign(Alignment::Center));
        p.push(PrintIntent::SetBold(true));
        p.push(PrintIntent::SetTextSize {
            width: 2,
            height: 2,
        });
        p.push(PrintIntent::line(&doc.store_name));
        p.push(PrintIntent::SetTextSize {
            width: 1,
            height: 1,
        });
        p.push(PrintIntent::SetBold(false));

        if let Some(address) = &doc.store_address {
            p.push(PrintIntent::line(address));
        }

        p.push(PrintIntent::FeedLines(1));
        p.push(PrintIntent::line(layout::rule('=')));
        p.push(PrintIntent::FeedLines(1));

        // Transaction details
        p.push(PrintIntent::SetAlign(Alignment::Left));
        p.push(PrintIntent::line(format!(
            "{}: {}",
            DATE_LABEL,
            self.locale.format_timestamp(&doc.timestamp)
        )));
        p.push(PrintIntent::line(format!(
            "{}: {}",
            TRANSACTION_LABEL, doc.transaction_id
        )));
        p.push(PrintIntent::FeedLines(1));
        p.push(PrintIntent::line(layout::rule('-')));

        // Items
        for item in &doc.items {
            p.push(PrintIntent::RawText(layout::item_block(
                &item.name,
                item.quantity,
                &money(item.unit_price),
                &money(item.line_total),
            )));
        }

        p.push(PrintIntent::line(layout::rule('-')));

        // Totals
        p.push(PrintIntent::RawText(layout::total_line(
            SUBTOTAL_LABEL,
            &money(doc.subtotal),
        )));
        if let Some(discount) = doc.discount.filter(|d| d.is_positive()) {
            p.push(PrintIntent::RawText(layout::total_line(
                DISCOUNT_LABEL,
                &money(-discount),
            )));
        }
        if let Some(tax) = doc.tax.filter(|t| t.is_positive()) {
            p.push(PrintIntent::RawText(layout::total_line(
                TAX_LABEL,
                &money(tax),
            )));
        }
        p.push(PrintIntent::SetBold(true));
        p.push(PrintIntent::RawText(layout::total_line(
            TOTAL_LABEL,
            &money(doc.total),
        )));
        p.push(PrintIntent::SetBold(false));

        p.push(PrintIntent::line(layout::rule('-')));
        p.push(PrintIntent::line(format!(
            "{}: {}",
            PAYMENT_LABEL, doc.payment_method
        )));
        p.push(PrintIntent::FeedLines(2));

        // Footer
        p.push(PrintIntent::SetAlign(Alignment::Center));
        for line in FOOTER {
            p.push(PrintIntent::line(line));
        }

        p.push(PrintIntent::FeedLines(3));
        p.push(PrintIntent::Cut);
        p
    }
}

/// Build the intent sequence with the default (id-ID) formatter.
pub fn build_intent_sequence(doc: &ReceiptDocument) -> Program {
    ReceiptFormatter::new().build_intent_sequence(doc)
}
