//! # Print Session
//!
//! A [`PrinterSession`] is one open connection to one printer: it owns (or
//! borrows, via `&mut S`) a [`ByteSink`] and sends print jobs through it
//! strictly in order. There is no shared or global printer instance; callers
//! construct a session per connection and pass it where it's needed.
//!
//! ## Emission
//!
//! Every intent is encoded and written as its own buffer, and each write
//! completes before the next begins. A failed write aborts the job with
//! `TransmissionFailure`; whatever was already written stays written, so
//! the printer may hold a partial ticket. Retrying means resending the
//! whole job.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use struk::{LineItem, Money, PrinterSession, ReceiptDocument, ReceiptFormatter};
//!
//! let doc = ReceiptDocument {
//!     store_name: "Toko Budi".into(),
//!     store_address: None,
//!     items: vec![LineItem::new("Kopi", 2, 15000, 30000)],
//!     subtotal: Money::from_major(30000),
//!     tax: None,
//!     discount: None,
//!     total: Money::from_major(30000),
//!     payment_method: "Cash".into(),
//!     transaction_id: "TRX-001".into(),
//!     timestamp: NaiveDate::from_ymd_opt(2026, 10, 19)
//!         .unwrap()
//!         .and_hms_opt(14, 30, 5)
//!         .unwrap(),
//!     currency: "IDR".into(),
//! };
//!
//! let mut session = PrinterSession::new(Vec::<u8>::new());
//! session.print_receipt(&doc, &ReceiptFormatter::new())?;
//! let bytes = session.close()?.unwrap();
//! assert!(bytes.starts_with(&[0x1B, 0x40]));
//! # Ok::<(), struk::StrukError>(())
//! ```

use tracing::{debug, trace};

use crate::error::{Result, StrukError};
use crate::ir::{PrintIntent, Program, encode};
use crate::locale::{CurrencyFormatter, TimestampFormatter};
use crate::receipt::{ReceiptDocument, ReceiptFormatter};
use crate::transport::ByteSink;

/// An open connection to a printer.
#[derive(Debug)]
pub struct PrinterSession<S: ByteSink> {
    sink: Option<S>,
}

impl<S: ByteSink> PrinterSession<S> {
    /// Start a session over an already-open sink.
    pub fn new(sink: S) -> Self {
        Self { sink: Some(sink) }
    }

    /// Whether the sink is still open.
    pub fn is_connected(&self) -> bool {
        self.sink.is_some()
    }

    /// Lay out and print one receipt.
    pub fn print_receipt<L>(
        &mut self,
        doc: &ReceiptDocument,
        formatter: &ReceiptFormatter<L>,
    ) -> Result<()>
    where
        L: CurrencyFormatter + TimestampFormatter,
    {
        // Fail before layout work when there is nowhere to send it
        if self.sink.is_none() {
            return Err(StrukError::NotConnected);
        }
        let program = formatter.build_intent_sequence(doc);
        debug!(
            transaction = %doc.transaction_id,
            items = doc.items.len(),
            intents = program.len(),
            "printing receipt"
        );
        self.execute(&program)?;
        debug!(transaction = %doc.transaction_id, "receipt printed");
        Ok(())
    }

    /// Kick the cash drawer.
    pub fn open_drawer(&mut self) -> Result<()> {
        self.send(&PrintIntent::OpenDrawer)
    }

    /// Send every intent of `program`, in order.
    pub fn execute(&mut self, program: &Program) -> Result<()> {
        let sink = self.sink.as_mut().ok_or(StrukError::NotConnected)?;
        emit(program, sink)
    }

    /// Send a single intent.
    pub fn send(&mut self, intent: &PrintIntent) -> Result<()> {
        let sink = self.sink.as_mut().ok_or(StrukError::NotConnected)?;
        let bytes = encode(intent)?;
        sink.write(&bytes)
    }

    /// Close the sink and end the session, handing the sink back.
    ///
    /// Closing an already closed session returns `Ok(None)`.
    pub fn close(&mut self) -> Result<Option<S>> {
        match self.sink.take() {
            Some(mut sink) => {
                sink.close()?;
                debug!("session closed");
                Ok(Some(sink))
            }
            None => Ok(None),
        }
    }
}

/// Encode and write each intent of `program` to `sink`, one buffer each.
///
/// Encoding errors surface before the offending buffer is written; buffers
/// ahead of it have already been sent.
pub fn emit<S: ByteSink + ?Sized>(program: &Program, sink: &mut S) -> Result<()> {
    for (i, intent) in program.iter().enumerate() {
        let bytes = encode(intent)?;
        trace!(index = i, len = bytes.len(), "emit");
        sink.write(&bytes)?;
    }
    Ok(())
}

/// Print `doc` to a borrowed sink with the default (id-ID) formatter.
///
/// The sink is left open.
pub fn print_receipt<S: ByteSink + ?Sized>(doc: &ReceiptDocument, sink: &mut S) -> Result<()> {
    let program = ReceiptFormatter::new().build_intent_sequence(doc);
    debug!(
        transaction = %doc.transaction_id,
        intents = program.len(),
        "printing receipt"
    );
    emit(&program, sink)?;
    debug!(transaction = %doc.transaction_id, "receipt printed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records each write as a separate buffer and can fail on the n-th one.
    #[derive(Default)]
    struct Recorder {
        writes: Vec<Vec<u8>>,
        fail_at: Option<usize>,
        closed: bool,
    }

    impl ByteSink for Recorder {
        fn write(&mut self, bytes: &[u8]) -> Result<()> {
            if self.fail_at == Some(self.writes.len()) {
                return Err(StrukError::TransmissionFailure("unplugged".into()));
            }
            self.writes.push(bytes.to_vec());
            Ok(())
        }

        fn close(&mut self) -> Result<()> {
            self.closed = true;
            Ok(())
        }
    }

    fn program() -> Program {
        let mut p = Program::with_init();
        p.push(PrintIntent::SetBold(true));
        p.push(PrintIntent::line("HI"));
        p.push(PrintIntent::Cut);
        p
    }

    #[test]
    fn test_one_write_per_intent() {
        let mut session = PrinterSession::new(Recorder::default());
        session.execute(&program()).unwrap();
        let sink = session.close().unwrap().unwrap();
        assert!(sink.closed);
        assert_eq!(
            sink.writes,
            vec![
                vec![0x1B, 0x40],
                vec![0x1B, 0x45, 0x01],
                b"HI\n".to_vec(),
                vec![0x1D, 0x56, 0x00],
            ]
        );
    }

    #[test]
    fn test_closed_session_not_connected() {
        let mut session = PrinterSession::new(Recorder::default());
        session.close().unwrap();
        assert!(!session.is_connected());
        assert!(matches!(
            session.open_drawer(),
            Err(StrukError::NotConnected)
        ));
        assert!(matches!(
            session.execute(&program()),
            Err(StrukError::NotConnected)
        ));
        assert!(session.close().unwrap().is_none());
    }

    #[test]
    fn test_open_drawer() {
        let mut session = PrinterSession::new(Recorder::default());
        session.open_drawer().unwrap();
        let sink = session.close().unwrap().unwrap();
        assert_eq!(sink.writes, vec![vec![0x1B, 0x70, 0x00, 0x19, 0xFA]]);
    }

    #[test]
    fn test_failure_mid_sequence_keeps_sent_bytes() {
        let mut recorder = Recorder {
            fail_at: Some(2),
            ..Default::default()
        };
        let result = emit(&program(), &mut recorder);
        assert!(matches!(result, Err(StrukError::TransmissionFailure(_))));
        assert_eq!(recorder.writes.len(), 2);
    }

    #[test]
    fn test_invalid_intent_stops_before_write() {
        let mut p = Program::with_init();
        p.push(PrintIntent::SetTextSize {
            width: 0,
            height: 1,
        });
        p.push(PrintIntent::Cut);
        let mut recorder = Recorder::default();
        assert!(matches!(
            emit(&p, &mut recorder),
            Err(StrukError::InvalidParameter(_))
        ));
        assert_eq!(recorder.writes, vec![vec![0x1B, 0x40]]);
    }

    #[test]
    fn test_session_over_borrowed_sink() {
        let mut recorder = Recorder::default();
        {
            let mut session = PrinterSession::new(&mut recorder);
            session.send(&PrintIntent::Initialize).unwrap();
        }
        assert_eq!(recorder.writes.len(), 1);
        assert!(!recorder.closed);
    }
}
