use chrono::Local;
use common::games::snake::{GameSnapshot, ShareNotice};
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub const NOTICE_HISTORY_SIZE: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct NoticeEntry {
    pub at: String,
    pub notice: ShareNotice,
}

/// State handed from the session thread to the UI thread.
#[derive(Clone)]
pub struct SharedState {
    snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    pending_notice: Arc<Mutex<Option<ShareNotice>>>,
    notice_history: Arc<Mutex<AllocRingBuffer<NoticeEntry>>>,
    session_finished: Arc<Mutex<bool>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            pending_notice: Arc::new(Mutex::new(None)),
            notice_history: Arc::new(Mutex::new(AllocRingBuffer::new(NOTICE_HISTORY_SIZE))),
            session_finished: Arc::new(Mutex::new(false)),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }

    pub fn request_repaint(&self) {
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }

    pub fn update_snapshot(&self, snapshot: GameSnapshot) {
        *lock(&self.snapshot) = Some(snapshot);
        self.request_repaint();
    }

    pub fn get_snapshot(&self) -> Option<GameSnapshot> {
        lock(&self.snapshot).clone()
    }

    pub fn push_notice(&self, notice: ShareNotice) {
        let entry = NoticeEntry {
            at: Local::now().format("%H:%M:%S").to_string(),
            notice,
        };
        lock(&self.notice_history).enqueue(entry);
        *lock(&self.pending_notice) = Some(notice);
        self.request_repaint();
    }

    pub fn get_pending_notice(&self) -> Option<ShareNotice> {
        *lock(&self.pending_notice)
    }

    pub fn clear_pending_notice(&self) {
        *lock(&self.pending_notice) = None;
    }

    /// Oldest first.
    pub fn notice_history(&self) -> Vec<NoticeEntry> {
        lock(&self.notice_history).iter().cloned().collect()
    }

    pub fn mark_session_finished(&self) {
        *lock(&self.session_finished) = true;
        self.request_repaint();
    }

    pub fn is_session_finished(&self) -> bool {
        *lock(&self.session_finished)
    }
}
