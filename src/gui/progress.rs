// src/gui/progress.rs
use crate::progress::Progress;

/// Mirrors report building into the status line.
pub struct GuiProgress<'a> {
    status: &'a mut String,
    done: usize,
    total: usize,
    note: Option<String>,
}

impl<'a> GuiProgress<'a> {
    pub fn new(status: &'a mut String) -> Self {
        Self { status, done: 0, total: 0, note: None }
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        *self.status = msg.into();
    }
}

impl Progress for GuiProgress<'_> {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.note = Some(s!(msg));
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, id: &str) {
        self.done += 1;
        let msg = format!("Computed {} ({}/{})", id, self.done, self.total);
        self.set_status(msg);
    }
    fn finish(&mut self) {
        let mut msg = if self.total == 0 {
            s!("Report ready")
        } else {
            format!("Report ready ({}/{} sections)", self.done, self.total)
        };
        if let Some(note) = self.note.take() {
            msg = format!("{msg}: {note}");
        }
        self.set_status(msg);
    }
}
